//! PostgreSQL implementation of RoomRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use guesthouse_core::entities::{Availability, Room};
use guesthouse_core::error::DomainError;
use guesthouse_core::traits::{RepoResult, RoomRepository};
use guesthouse_core::value_objects::{RoomNumber, Snowflake};

use crate::mappers::{RoomInsert, RoomUpdate};
use crate::models::RoomModel;

use super::error::{map_db_error, map_unique_violation, room_not_found};

/// PostgreSQL implementation of RoomRepository
#[derive(Clone)]
pub struct PgRoomRepository {
    pool: PgPool,
}

impl PgRoomRepository {
    /// Create a new PgRoomRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RoomRepository for PgRoomRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Room>> {
        let result = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, room_number, location_id, remark, availability, lifecycle,
                   created_at, updated_at
            FROM rooms
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Room::from))
    }

    #[instrument(skip(self))]
    async fn find_by_number(&self, number: RoomNumber) -> RepoResult<Option<Room>> {
        let result = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, room_number, location_id, remark, availability, lifecycle,
                   created_at, updated_at
            FROM rooms
            WHERE room_number = $1 AND lifecycle = 0
            ORDER BY id
            LIMIT 1
            ",
        )
        .bind(number.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Room::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, room_number, location_id, remark, availability, lifecycle,
                   created_at, updated_at
            FROM rooms
            WHERE lifecycle = 0
            ORDER BY room_number
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_location(&self, location_id: Snowflake) -> RepoResult<Vec<Room>> {
        let rows = sqlx::query_as::<_, RoomModel>(
            r"
            SELECT id, room_number, location_id, remark, availability, lifecycle,
                   created_at, updated_at
            FROM rooms
            WHERE location_id = $1 AND lifecycle = 0
            ORDER BY room_number
            ",
        )
        .bind(location_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Room::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, room: &Room) -> RepoResult<()> {
        let insert = RoomInsert::new(room);

        sqlx::query(
            r"
            INSERT INTO rooms (id, room_number, location_id, remark, availability, lifecycle, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, 0, $6, $7)
            ",
        )
        .bind(insert.id)
        .bind(insert.room_number)
        .bind(insert.location_id)
        .bind(insert.remark)
        .bind(insert.availability)
        .bind(room.created_at)
        .bind(room.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::RoomNumberExists))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, room: &Room) -> RepoResult<()> {
        let update = RoomUpdate::new(room);

        let result = sqlx::query(
            r"
            UPDATE rooms
            SET remark = $2, availability = $3, updated_at = NOW()
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(update.id)
        .bind(update.remark)
        .bind(update.availability)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(room.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_availability(&self, id: Snowflake, availability: Availability) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE rooms
            SET availability = $2, updated_at = NOW()
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(id.into_inner())
        .bind(availability.as_i16())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE rooms
            SET lifecycle = 1, updated_at = NOW()
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(room_not_found(id));
        }

        Ok(())
    }
}
