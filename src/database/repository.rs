use async_trait::async_trait;
use sqlx::{types::Json, PgPool};
use uuid::Uuid;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::Pet;
use crate::database::store::PetStore;

const CREATE_PETS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS pets (
        id          UUID PRIMARY KEY,
        owner       UUID NULL,
        document    JSONB NOT NULL,
        created_at  TIMESTAMPTZ NOT NULL,
        updated_at  TIMESTAMPTZ NOT NULL
    )
"#;

const CREATE_OWNER_INDEX: &str = "CREATE INDEX IF NOT EXISTS pets_owner_idx ON pets (owner)";

/// PostgreSQL pet store: one row per pet, toys embedded in the JSONB document.
#[derive(Clone)]
pub struct PgPetStore {
    pool: PgPool,
}

impl PgPetStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the pets table if it does not exist yet
    pub async fn ensure_schema(&self) -> Result<(), DatabaseError> {
        sqlx::query(CREATE_PETS_TABLE).execute(&self.pool).await?;
        sqlx::query(CREATE_OWNER_INDEX).execute(&self.pool).await?;
        tracing::info!("pets table ready");
        Ok(())
    }
}

#[async_trait]
impl PetStore for PgPetStore {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Pet>, DatabaseError> {
        let document = sqlx::query_scalar::<_, Json<Pet>>("SELECT document FROM pets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(document.map(|Json(pet)| pet))
    }

    async fn insert(&self, pet: &Pet) -> Result<(), DatabaseError> {
        sqlx::query(
            "INSERT INTO pets (id, owner, document, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(pet.id)
        .bind(pet.owner)
        .bind(Json(pet))
        .bind(pet.created_at)
        .bind(pet.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, pet: &Pet) -> Result<(), DatabaseError> {
        let result = sqlx::query(
            "UPDATE pets SET owner = $2, document = $3, updated_at = $4 WHERE id = $1",
        )
        .bind(pet.id)
        .bind(pet.owner)
        .bind(Json(pet))
        .bind(pet.updated_at)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::NotFound(format!("pet {}", pet.id)));
        }
        Ok(())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
