pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "pet-toys")]
#[command(about = "Pet Toys CLI - administration for the pet toys backend")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Issue a bearer token for a user id (development use)")]
    Token {
        #[arg(long, help = "User id the token authenticates")]
        user: uuid::Uuid,
    },

    #[command(about = "Create the pets table if it does not exist")]
    Migrate,

    #[command(about = "Show the resolved configuration")]
    Config,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let config = AppConfig::from_env()?;

    match cli.command {
        Commands::Token { user } => commands::token::handle(&config, user, output_format),
        Commands::Migrate => commands::migrate::handle(&config, output_format).await,
        Commands::Config => commands::config::handle(&config, output_format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_token_command() {
        let user = uuid::Uuid::new_v4();
        let cli = Cli::try_parse_from(["pet-toys", "--json", "token", "--user", &user.to_string()])
            .unwrap();
        assert!(matches!(OutputFormat::from_cli(&cli), OutputFormat::Json));
        assert!(matches!(cli.command, Commands::Token { user: u } if u == user));
    }

    #[test]
    fn rejects_malformed_user_id() {
        assert!(Cli::try_parse_from(["pet-toys", "token", "--user", "bob"]).is_err());
    }
}
