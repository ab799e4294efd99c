//! Services module
//!
//! Business logic services that coordinate between the embedding
//! application and the repository.

pub mod board;
pub mod reminders;

pub use board::BoardService;
pub use reminders::ReminderService;
