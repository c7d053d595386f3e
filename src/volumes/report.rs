use colored::Colorize;

use crate::client::VolumeSource;
use crate::constants::{NOT_APPLICABLE, VOLUME_HEADERS};
use crate::error::VolumesResult;
use crate::formatting::{Cell, Table};
use crate::logging::log_info;
use crate::models::Volume;
use crate::volumes::classify::volume_identifier;
use crate::volumes::teams::{TeamSelection, resolve_teams};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReportOptions {
    pub detailed: bool,
    pub json: bool,
    pub print_headers: bool,
}

/// One table row of the volume report.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeRow {
    pub handle: String,
    pub worker: String,
    pub volume_type: String,
    pub identifier: String,
}

/// Order by worker name, then by handle within a worker.
pub fn sort_volumes(volumes: &mut [Volume]) {
    volumes.sort_by(|a, b| {
        a.worker_name
            .cmp(&b.worker_name)
            .then_with(|| a.id.cmp(&b.id))
    });
}

/// Sorted rows with resolved identifiers. The input keeps its order.
pub fn volume_rows(volumes: &[Volume], detailed: bool) -> VolumesResult<Vec<VolumeRow>> {
    let mut sorted = volumes.to_vec();
    sort_volumes(&mut sorted);

    sorted
        .into_iter()
        .map(|volume| {
            let identifier = volume_identifier(&volume, detailed)?;
            Ok(VolumeRow {
                handle: volume.id,
                worker: volume.worker_name,
                volume_type: volume.volume_type,
                identifier,
            })
        })
        .collect()
}

/// Render fetched volumes either as JSON or as a table.
///
/// JSON output is the records exactly as fetched, in fetch order. Only the
/// table is sorted and carries derived identifiers.
pub fn render_report(volumes: &[Volume], options: &ReportOptions) -> VolumesResult<String> {
    if options.json {
        log_info(&format!("Rendering {} volumes as JSON", volumes.len()));
        let mut json = serde_json::to_string_pretty(volumes)?;
        json.push('\n');
        return Ok(json);
    }

    log_info(&format!(
        "Rendering {} volumes as a table (details: {})",
        volumes.len(),
        options.detailed
    ));

    let mut table = Table::new(&VOLUME_HEADERS);
    for row in volume_rows(volumes, options.detailed)? {
        let identifier = if row.identifier == NOT_APPLICABLE {
            Cell::styled(row.identifier, |text| text.dimmed())
        } else {
            Cell::plain(row.identifier)
        };

        table.push(vec![
            Cell::plain(row.handle),
            Cell::plain(row.worker),
            Cell::plain(row.volume_type),
            identifier,
        ]);
    }

    Ok(table.render(options.print_headers))
}

/// Fetch every team's volumes in turn and concatenate them.
///
/// The first failing fetch aborts the whole collection.
pub async fn collect_volumes<S>(source: &S, teams: &[String]) -> VolumesResult<Vec<Volume>>
where
    S: VolumeSource + ?Sized,
{
    let mut volumes = Vec::new();

    for team in teams {
        let team_volumes = source.list_volumes(team).await?;
        log_info(&format!("Fetched {} volumes for team '{}'", team_volumes.len(), team));
        volumes.extend(team_volumes);
    }

    Ok(volumes)
}

/// Resolve teams, fetch their volumes and render the report.
///
/// Nothing is returned unless every step succeeded, so callers never print a
/// partial report.
pub async fn build_report<S>(
    source: &S,
    selection: &TeamSelection,
    options: &ReportOptions,
) -> VolumesResult<String>
where
    S: VolumeSource + ?Sized,
{
    let teams = resolve_teams(selection, source).await?;
    let volumes = collect_volumes(source, &teams).await?;
    render_report(&volumes, options)
}
