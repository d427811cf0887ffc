use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Failures that abort startup or the serve loop.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
