use thiserror::Error;

/// Errors that can occur while parsing a time-rule string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("rule string is empty")]
    Empty,

    #[error("invalid weekday '{part}' in conjunct '{conjunct}'")]
    InvalidWeekday { part: String, conjunct: String },

    #[error("weekday {day} is outside 1..=7 (Monday=1, Sunday=7)")]
    WeekdayOutOfRange { day: u8 },

    #[error("invalid time '{part}' in conjunct '{conjunct}': expected a 4-digit 24h clock value")]
    InvalidTime { part: String, conjunct: String },
}

/// Errors surfaced by a `FlowRepository` implementation.
///
/// A repository failure is fatal to the single resolution request that hit
/// it, never to the process; the core does not retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("failed to read flow table from '{path}': {message}")]
    Io { path: String, message: String },

    #[error("failed to parse flow table: {0}")]
    Parse(String),

    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Errors that can occur when converting raw storage rows into a `FlowTable`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableConversionError {
    #[error("invalid flow row: {0}")]
    ValidationError(String),
}
