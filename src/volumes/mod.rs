pub mod classify;
pub mod report;
pub mod teams;

pub use classify::{present_map, present_resource_type, volume_identifier};
pub use report::{
    ReportOptions, VolumeRow, build_report, collect_volumes, render_report, sort_volumes,
    volume_rows,
};
pub use teams::{TeamSelection, resolve_teams};
