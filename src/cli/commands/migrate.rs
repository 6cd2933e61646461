use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::database::{DatabaseManager, PgPetStore};

pub async fn handle(config: &AppConfig, output_format: OutputFormat) -> anyhow::Result<()> {
    let pool = DatabaseManager::connect(&config.database).await?;
    PgPetStore::new(pool.clone()).ensure_schema().await?;
    DatabaseManager::close(&pool).await;

    match output_format {
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "migrated": true, "database": config.database.redacted_url() })
        ),
        OutputFormat::Text => println!("pets table ready on {}", config.database.redacted_url()),
    }
    Ok(())
}
