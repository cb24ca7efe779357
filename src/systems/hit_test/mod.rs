//! Surface hit-testing: reticle state and per-frame reconciliation.

mod reconciler;
mod reticle;

pub use reconciler::{CapabilityState, CapabilityTicket, HitTestReconciler, TrackingFrame};
pub use reticle::Reticle;
