use serde_json::json;
use uuid::Uuid;

use crate::auth::generate_jwt;
use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub fn handle(config: &AppConfig, user: Uuid, output_format: OutputFormat) -> anyhow::Result<()> {
    let token = generate_jwt(&config.security, user)?;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            json!({
                "user": user,
                "token": token,
                "expires_in_hours": config.security.jwt_expiry_hours
            })
        ),
        OutputFormat::Text => println!("{}", token),
    }
    Ok(())
}
