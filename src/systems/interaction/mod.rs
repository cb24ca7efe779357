//! Gesture handling: placement flow and the grab/release throw loop.

pub mod impulse;
mod state_machine;

pub use impulse::{launch_impulse, FIXED_MAGNITUDE};
pub use state_machine::{GestureOutcome, InteractionContext, InteractionStateMachine};
