//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels.

pub mod serial;
pub mod sign;

pub use serial::serial_task;
pub use sign::sign_task;
