pub mod attendance;
pub mod config;
pub mod loader;
pub mod output;
pub mod stderr_buffer;

pub use attendance::{AttendanceBook, AttendanceError, ParticipantRecord, Weekday};
