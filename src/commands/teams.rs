use clap::ArgMatches;
use crate::cli_context::CliContext;
use crate::client::VolumeSource;
use crate::constants::TEAM_HEADERS;
use crate::error::VolumesResult;
use crate::formatting::{Cell, Table};
use crate::models::Team;

pub async fn handle_teams(matches: &ArgMatches, print_headers: bool) -> VolumesResult<()> {
    let mut context = CliContext::load()?;
    let client = context.verified_client()?;

    let teams = client.list_teams().await?;
    print!("{}", render_teams(teams, matches.get_flag("json"), print_headers)?);

    Ok(())
}

/// JSON keeps the server's order; the table is sorted by name.
pub fn render_teams(mut teams: Vec<Team>, json: bool, print_headers: bool) -> VolumesResult<String> {
    if json {
        let mut output = serde_json::to_string_pretty(&teams)?;
        output.push('\n');
        return Ok(output);
    }

    teams.sort_by(|a, b| a.name.cmp(&b.name));

    let mut table = Table::new(&TEAM_HEADERS);
    for team in teams {
        table.push(vec![Cell::plain(team.id.to_string()), Cell::plain(team.name)]);
    }

    Ok(table.render(print_headers))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            Team { id: 2, name: "other-team".to_string() },
            Team { id: 1, name: "main".to_string() },
        ]
    }

    #[test]
    fn test_table_is_sorted_by_name() {
        colored::control::set_override(false);
        assert_eq!(
            render_teams(teams(), false, true).unwrap(),
            "id  name\n1   main\n2   other-team\n"
        );
    }

    #[test]
    fn test_json_keeps_server_order() {
        let output = render_teams(teams(), true, false).unwrap();
        let parsed: Vec<Team> = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed, teams());
    }
}
