//! Typed rows produced at the storage boundary.

pub mod attendance;
pub mod attendee;
pub mod event;

pub use attendance::AttendanceRecord;
pub use attendee::Attendee;
pub use event::Event;
