//! Core plumbing shared by every system: errors, logging, clocks.

pub mod clock;
pub mod error;
pub mod logging;

pub use clock::{FrameClock, ManualClock, WallClock};
pub use error::{SessionError, SessionResult};
