//! PostgreSQL implementation of LocationRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guesthouse_core::entities::Location;
use guesthouse_core::error::DomainError;
use guesthouse_core::traits::{LocationRepository, RepoResult};
use guesthouse_core::value_objects::Snowflake;

use crate::mappers::{LocationInsert, LocationUpdate};
use crate::models::LocationModel;

use super::error::{location_not_found, map_db_error, map_unique_violation};

/// PostgreSQL implementation of LocationRepository
#[derive(Clone)]
pub struct PgLocationRepository {
    pool: PgPool,
}

impl PgLocationRepository {
    /// Create a new PgLocationRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LocationRepository for PgLocationRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Location>> {
        let result = sqlx::query_as::<_, LocationModel>(
            r"
            SELECT id, name, code, lifecycle, created_at, updated_at
            FROM locations
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Location::from))
    }

    #[instrument(skip(self))]
    async fn find_by_code(&self, code: &str) -> RepoResult<Option<Location>> {
        let result = sqlx::query_as::<_, LocationModel>(
            r"
            SELECT id, name, code, lifecycle, created_at, updated_at
            FROM locations
            WHERE code = $1 AND lifecycle = 0
            ",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Location::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Location>> {
        let rows = sqlx::query_as::<_, LocationModel>(
            r"
            SELECT id, name, code, lifecycle, created_at, updated_at
            FROM locations
            WHERE lifecycle = 0
            ORDER BY name
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Location::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, location: &Location) -> RepoResult<()> {
        let insert = LocationInsert::new(location);

        sqlx::query(
            r"
            INSERT INTO locations (id, name, code, lifecycle, created_at, updated_at)
            VALUES ($1, $2, $3, 0, $4, $5)
            ",
        )
        .bind(insert.id)
        .bind(insert.name)
        .bind(insert.code)
        .bind(location.created_at)
        .bind(location.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::LocationCodeExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, location: &Location) -> RepoResult<()> {
        let update = LocationUpdate::new(location);

        let result = sqlx::query(
            r"
            UPDATE locations
            SET name = $2, updated_at = NOW()
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(update.id)
        .bind(update.name)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(location_not_found(location.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE locations
            SET lifecycle = 1, updated_at = NOW()
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(location_not_found(id));
        }

        Ok(())
    }
}
