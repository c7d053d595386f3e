use crate::client::VolumeSource;
use crate::error::{VolumesError, VolumesResult};
use crate::logging::log_info;

/// Which teams a report should cover.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TeamSelection {
    pub teams: Vec<String>,
    pub all_teams: bool,
    pub default_team: String,
}

impl TeamSelection {
    pub fn new(teams: Vec<String>, all_teams: bool, default_team: impl Into<String>) -> Self {
        Self {
            teams,
            all_teams,
            default_team: default_team.into(),
        }
    }
}

/// Turn a selection into the ordered list of team names to query.
///
/// Explicit names are passed through as given, without checking that they
/// exist. The server is only contacted when every team was requested.
pub async fn resolve_teams<S>(selection: &TeamSelection, source: &S) -> VolumesResult<Vec<String>>
where
    S: VolumeSource + ?Sized,
{
    if selection.all_teams && !selection.teams.is_empty() {
        return Err(VolumesError::ConfigConflict(
            "Cannot specify both --all-teams and --team".to_string(),
        ));
    }

    let teams = if selection.all_teams {
        source
            .list_teams()
            .await?
            .into_iter()
            .map(|team| team.name)
            .collect()
    } else if !selection.teams.is_empty() {
        selection.teams.clone()
    } else {
        vec![selection.default_team.clone()]
    };

    log_info(&format!("Resolved teams: {}", teams.join(", ")));

    Ok(teams)
}
