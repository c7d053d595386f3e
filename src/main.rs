use std::io::IsTerminal;
use std::process;

use clap::{Arg, ArgAction, Command};

use volume_cli::commands::{handle_auth, handle_teams, handle_volumes};
use volume_cli::logging::{init_logging, log_error, log_panic_info};

fn cli() -> Command {
    Command::new("volumes")
        .about("List the storage volumes allocated on CI workers")
        .version("1.0.0")
        .subcommand_required(true)
        .arg(
            Arg::new("print-table-headers")
                .long("print-table-headers")
                .help("Print table headers even for redirected output")
                .action(ArgAction::SetTrue)
                .global(true)
        )
        .subcommand(
            Command::new("volumes")
                .visible_alias("vs")
                .about("List the active volumes")
                .arg(
                    Arg::new("details")
                        .long("details")
                        .short('d')
                        .help("Print additional information for each volume")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print command result as JSON")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("all-teams")
                        .long("all-teams")
                        .short('a')
                        .help("Show volumes for all available teams")
                        .action(ArgAction::SetTrue)
                )
                .arg(
                    Arg::new("team")
                        .long("team")
                        .visible_alias("teams")
                        .short('n')
                        .value_name("TEAM")
                        .help("Show volumes for the given teams")
                        .action(ArgAction::Append)
                )
        )
        .subcommand(
            Command::new("teams")
                .about("List the teams visible to the configured token")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print command result as JSON")
                        .action(ArgAction::SetTrue)
                )
        )
        .subcommand(
            Command::new("auth")
                .about("Save the target server, token and default team")
                .arg(
                    Arg::new("url")
                        .long("url")
                        .short('c')
                        .value_name("URL")
                        .help("Server URL")
                )
                .arg(
                    Arg::new("token")
                        .long("token")
                        .short('k')
                        .value_name("TOKEN")
                        .help("Bearer token")
                )
                .arg(
                    Arg::new("team")
                        .long("team")
                        .short('n')
                        .value_name("TEAM")
                        .help("Default team")
                )
                .arg(
                    Arg::new("show")
                        .long("show")
                        .help("Show the saved target")
                        .action(ArgAction::SetTrue)
                )
        )
}

#[tokio::main]
async fn main() {
    // Logging is best effort; the report still runs without it.
    let _ = init_logging();
    std::panic::set_hook(Box::new(|info| log_panic_info(info)));

    let matches = cli().get_matches();
    let print_headers = matches.get_flag("print-table-headers") || std::io::stdout().is_terminal();

    let result = match matches.subcommand() {
        Some(("volumes", sub_matches)) => handle_volumes(sub_matches, print_headers).await,
        Some(("teams", sub_matches)) => handle_teams(sub_matches, print_headers).await,
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'volumes --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        cli().debug_assert();
    }

    #[test]
    fn test_teams_flag_repeats() {
        let matches = cli()
            .try_get_matches_from(["volumes", "volumes", "-n", "main", "--teams", "other"])
            .unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        let teams: Vec<&String> = sub.get_many::<String>("team").unwrap().collect();
        assert_eq!(teams, ["main", "other"]);
    }

    #[test]
    fn test_global_header_flag_after_subcommand() {
        let matches = cli()
            .try_get_matches_from(["volumes", "volumes", "--print-table-headers"])
            .unwrap();
        assert!(matches.get_flag("print-table-headers"));
    }
}
