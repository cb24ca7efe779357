//! Session error types.

use thiserror::Error;

/// Errors surfaced by the session core.
///
/// Anything the host can trigger with bad input ends up here. Expected runtime
/// conditions (no surface under the cursor, a press while the reticle is hidden)
/// are not errors and never produce one of these.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SessionError {
    /// Hit-test buffer is not a whole number of 4x4 matrices.
    #[error("hit-test buffer length {0} is not a multiple of 16")]
    MalformedHitBuffer(usize),

    /// A pose matrix could not be decomposed (non-finite or singular).
    #[error("pose matrix is not a finite affine transform")]
    InvalidPose,

    /// Controller position carried a NaN or infinity.
    #[error("controller position is not finite")]
    InvalidControllerPosition,

    /// Ball placement attempted before the ground exists.
    #[error("ground must be placed before the ball")]
    GroundMissing,

    /// A body of this kind is already live in the world.
    #[error("{0} is already placed")]
    AlreadyPlaced(&'static str),

    /// Capability resolution for a request that was cancelled or never issued.
    #[error("hit-test ticket {0} is stale")]
    StaleTicket(u32),

    /// Config JSON failed to parse.
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Config parsed but holds an unusable value.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for SessionError {
    fn from(e: serde_json::Error) -> Self {
        SessionError::ConfigParse(e.to_string())
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
