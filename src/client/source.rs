use async_trait::async_trait;

use crate::error::VolumesResult;
use crate::models::{Team, Volume};

/// Read-only access to the teams and volumes known to a server.
#[async_trait]
pub trait VolumeSource: Send + Sync {
    async fn list_teams(&self) -> VolumesResult<Vec<Team>>;

    async fn list_volumes(&self, team: &str) -> VolumesResult<Vec<Volume>>;
}
