use clap::ArgMatches;
use crate::config::{Target, load_config, save_config};
use crate::error::{VolumesError, VolumesResult};
use crate::formatting::mask_token;

pub async fn handle_auth(matches: &ArgMatches) -> VolumesResult<()> {
    if matches.get_flag("show") {
        let target = Target::resolve(load_config()?);
        println!("API URL: {}", target.api_url.as_deref().unwrap_or("(not set)"));
        match target.token {
            Some(token) => println!("Token:   {}", mask_token(&token)),
            None => println!("Token:   (not set)"),
        }
        println!("Team:    {}", target.team);
        return Ok(());
    }

    let url = matches.get_one::<String>("url");
    let token = matches.get_one::<String>("token");
    let team = matches.get_one::<String>("team");

    if url.is_none() && token.is_none() && team.is_none() {
        return Err(VolumesError::InvalidInput(
            "Usage: volumes auth --url <URL> --token <TOKEN> [--team <TEAM>] or volumes auth --show"
                .to_string(),
        ));
    }

    let mut config = load_config()?;
    if let Some(url) = url {
        config.api_url = Some(url.clone());
    }
    if let Some(token) = token {
        config.token = Some(token.clone());
    }
    if let Some(team) = team {
        config.team = Some(team.clone());
    }
    save_config(&config)?;

    println!("target saved");
    Ok(())
}
