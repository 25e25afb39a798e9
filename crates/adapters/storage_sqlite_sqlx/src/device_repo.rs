//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use gearhub_app::ports::DeviceRepository;
use gearhub_domain::device::Device;
use gearhub_domain::error::{ConflictError, GearHubError};

use crate::codec::{decode_date, decode_timestamp, encode_date, encode_timestamp};
use crate::error::{StorageError, decode_error, is_unique_violation};

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Device> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let first_maintenance: String = row.try_get("first_maintenance")?;
        let interval: i64 = row.try_get("maintenance_interval_days")?;
        let next_maintenance: String = row.try_get("next_maintenance")?;
        let end_of_life: String = row.try_get("end_of_life")?;
        let created_at: String = row.try_get("created_at")?;
        let last_update: String = row.try_get("last_update")?;

        Ok(Self(Device {
            device_id: row.try_get("device_id")?,
            name: row.try_get("name")?,
            responsible_email: row.try_get("responsible_email")?,
            first_maintenance: decode_date(&first_maintenance)?,
            maintenance_interval_days: u32::try_from(interval).map_err(decode_error)?,
            maintenance_cost_eur: row.try_get("maintenance_cost_eur")?,
            next_maintenance: decode_date(&next_maintenance)?,
            end_of_life: decode_date(&end_of_life)?,
            created_at: decode_timestamp(&created_at)?,
            last_update: decode_timestamp(&last_update)?,
        }))
    }
}

const SELECT_BY_DEVICE_ID: &str = "SELECT * FROM devices WHERE device_id = ?";
const SELECT_ALL: &str = "SELECT * FROM devices ORDER BY seq";

const INSERT: &str = "INSERT INTO devices (device_id, name, responsible_email, \
    first_maintenance, maintenance_interval_days, maintenance_cost_eur, next_maintenance, \
    end_of_life, created_at, last_update) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)";

/// `SQLite`-backed device repository.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn create(&self, device: Device) -> impl Future<Output = Result<Device, GearHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(device.device_id)
                .bind(&device.name)
                .bind(&device.responsible_email)
                .bind(encode_date(device.first_maintenance))
                .bind(i64::from(device.maintenance_interval_days))
                .bind(device.maintenance_cost_eur)
                .bind(encode_date(device.next_maintenance))
                .bind(encode_date(device.end_of_life))
                .bind(encode_timestamp(device.created_at))
                .bind(encode_timestamp(device.last_update))
                .execute(&pool)
                .await;

            match result {
                Ok(_) => Ok(device),
                Err(err) if is_unique_violation(&err) => Err(ConflictError::DuplicateDevice {
                    device_id: device.device_id,
                }
                .into()),
                Err(err) => Err(StorageError::from(err).into()),
            }
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Device>, GearHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn find_by_device_id(
        &self,
        device_id: i64,
    ) -> impl Future<Output = Result<Option<Device>, GearHubError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_DEVICE_ID)
                .bind(device_id)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
