//! PostgreSQL implementation of StayRepository

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use sqlx::PgPool;
use tracing::instrument;

use guesthouse_core::entities::Stay;
use guesthouse_core::traits::{RepoResult, StayFilter, StayRepository};
use guesthouse_core::value_objects::Snowflake;

use crate::mappers::{StayInsert, StayUpdate};
use crate::models::StayModel;

use super::error::{map_db_error, stay_not_found};

/// PostgreSQL implementation of StayRepository
#[derive(Clone)]
pub struct PgStayRepository {
    pool: PgPool,
}

impl PgStayRepository {
    /// Create a new PgStayRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StayRepository for PgStayRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Stay>> {
        let result = sqlx::query_as::<_, StayModel>(
            r"
            SELECT id, guest_name, guest_id_number, guest_id_type, guest_nationality,
                   guest_contact, guest_company, guest_address, room_number,
                   check_in_date, check_in_time, check_out_date, check_out_time,
                   department, purpose, mail_received, lifecycle, created_at, updated_at
            FROM stays
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Stay::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, filter: StayFilter) -> RepoResult<Vec<Stay>> {
        // "Current" means either half of the check-out pair is missing; a
        // partial checkout still occupies the room.
        let rows = sqlx::query_as::<_, StayModel>(
            r"
            SELECT id, guest_name, guest_id_number, guest_id_type, guest_nationality,
                   guest_contact, guest_company, guest_address, room_number,
                   check_in_date, check_in_time, check_out_date, check_out_time,
                   department, purpose, mail_received, lifecycle, created_at, updated_at
            FROM stays
            WHERE lifecycle = 0
              AND ($1 = FALSE OR check_out_date IS NULL OR check_out_time IS NULL)
              AND ($2::INT IS NULL OR room_number = $2)
            ORDER BY check_in_date DESC, check_in_time DESC
            ",
        )
        .bind(filter.current_only)
        .bind(filter.room_number.map(guesthouse_core::RoomNumber::into_inner))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Stay::from).collect())
    }

    #[instrument(skip(self))]
    async fn create(&self, stay: &Stay) -> RepoResult<()> {
        let insert = StayInsert::new(stay);

        sqlx::query(
            r"
            INSERT INTO stays (id, guest_name, guest_id_number, guest_id_type,
                               guest_nationality, guest_contact, guest_company, guest_address,
                               room_number, check_in_date, check_in_time,
                               department, purpose, mail_received, lifecycle,
                               created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, 0, $15, $16)
            ",
        )
        .bind(insert.id)
        .bind(insert.guest_name)
        .bind(insert.guest_id_number)
        .bind(insert.guest_id_type)
        .bind(insert.guest_nationality)
        .bind(insert.guest_contact)
        .bind(insert.guest_company)
        .bind(insert.guest_address)
        .bind(insert.room_number)
        .bind(insert.check_in_date)
        .bind(insert.check_in_time)
        .bind(insert.department)
        .bind(insert.purpose)
        .bind(insert.mail_received)
        .bind(stay.created_at)
        .bind(stay.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn update(&self, stay: &Stay) -> RepoResult<()> {
        let update = StayUpdate::new(stay);

        let result = sqlx::query(
            r"
            UPDATE stays
            SET guest_name = $2, guest_id_number = $3, guest_id_type = $4,
                guest_nationality = $5, guest_contact = $6, guest_company = $7,
                guest_address = $8, room_number = $9, check_in_date = $10,
                check_in_time = $11, check_out_date = $12, check_out_time = $13,
                department = $14, purpose = $15, mail_received = $16,
                updated_at = NOW()
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(update.id)
        .bind(update.guest_name)
        .bind(update.guest_id_number)
        .bind(update.guest_id_type)
        .bind(update.guest_nationality)
        .bind(update.guest_contact)
        .bind(update.guest_company)
        .bind(update.guest_address)
        .bind(update.room_number)
        .bind(update.check_in_date)
        .bind(update.check_in_time)
        .bind(update.check_out_date)
        .bind(update.check_out_time)
        .bind(update.department)
        .bind(update.purpose)
        .bind(update.mail_received)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(stay_not_found(stay.id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn check_out(&self, id: Snowflake, date: NaiveDate, time: NaiveTime) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE stays
            SET check_out_date = $2, check_out_time = $3, updated_at = NOW()
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(id.into_inner())
        .bind(date)
        .bind(time)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(stay_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Snowflake) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE stays
            SET lifecycle = 1, updated_at = NOW()
            WHERE id = $1 AND lifecycle = 0
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(stay_not_found(id));
        }

        Ok(())
    }
}
