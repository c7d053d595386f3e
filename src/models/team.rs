use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    #[serde(default)]
    pub id: i64,
    pub name: String,
}
