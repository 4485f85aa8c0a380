use thiserror::Error;

/// Errors raised at the parsing boundary of the attendance core.
///
/// The book itself never fails; only tokens coming from outside can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AttendanceError {
    #[error("invalid weekday '{0}'")]
    InvalidWeekdayToken(String),
}
