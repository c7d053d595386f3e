// Module declarations
pub mod cli_context;
pub mod client;
pub mod commands;
pub mod config;
pub mod constants;
pub mod error;
pub mod formatting;
pub mod logging;
pub mod models;
pub mod volumes;


// Re-export commonly used items
pub use client::{ApiClient, VolumeSource};
pub use config::{Config, Target, load_config, save_config};
pub use error::{VolumesError, VolumesResult};
pub use models::*;
pub use volumes::{ReportOptions, TeamSelection, build_report};
