use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::error::VolumesResult;
use crate::logging::log_info;
use crate::volumes::{ReportOptions, TeamSelection, build_report};

pub async fn handle_volumes(matches: &ArgMatches, print_headers: bool) -> VolumesResult<()> {
    let mut context = CliContext::load()?;

    let teams: Vec<String> = matches
        .get_many::<String>("team")
        .map(|names| names.cloned().collect())
        .unwrap_or_default();
    let selection = TeamSelection::new(teams, matches.get_flag("all-teams"), context.team());

    let options = ReportOptions {
        detailed: matches.get_flag("details"),
        json: matches.get_flag("json"),
        print_headers,
    };

    let client = context.verified_client()?;
    log_info(&format!("Listing volumes ({:?}, {:?})", selection, options));

    let report = build_report(client.as_ref(), &selection, &options).await?;
    print!("{}", report);

    Ok(())
}
