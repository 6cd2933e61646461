use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub fn handle(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let mut shown = config.clone();
    shown.database.url = config.database.redacted_url();

    match output_format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&shown)?),
        OutputFormat::Text => {
            println!("environment:      {:?}", shown.environment);
            println!("database:         {}", shown.database.url);
            println!("max connections:  {}", shown.database.max_connections);
            println!("port:             {}", shown.api.port);
            println!("token expiry (h): {}", shown.security.jwt_expiry_hours);
            println!(
                "cors origins:     {}",
                if shown.security.cors_origins.is_empty() {
                    "*".to_string()
                } else {
                    shown.security.cors_origins.join(", ")
                }
            );
            println!("owner on create:  {}", shown.toys.require_owner_on_create);
        }
    }
    Ok(())
}
