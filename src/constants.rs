pub const CONFIG_FILE: &str = ".volume-cli-config.json";
pub const DEFAULT_TEAM: &str = "main";

pub const ENV_API_URL: &str = "VOLUMES_API_URL";
pub const ENV_TOKEN: &str = "VOLUMES_TOKEN";
pub const ENV_TEAM: &str = "VOLUMES_TEAM";

pub const REQUEST_TIMEOUT_SECS: u64 = 30;

// Nesting depth at which a resource type chain is treated as cyclic.
pub const MAX_DESCRIPTOR_DEPTH: usize = 64;

pub const NOT_APPLICABLE: &str = "n/a";

pub const VOLUME_HEADERS: [&str; 4] = ["handle", "worker", "type", "identifier"];
pub const TEAM_HEADERS: [&str; 2] = ["id", "name"];
