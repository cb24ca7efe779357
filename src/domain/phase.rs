/// Where the session is in the placement flow.
///
/// Only ever moves forward: ground, then ball, then the throw loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlacementPhase {
    #[default]
    AwaitingGround,
    AwaitingBall,
    Ready,
}

impl PlacementPhase {
    /// Numeric code handed across the wasm boundary.
    pub fn code(self) -> u8 {
        match self {
            PlacementPhase::AwaitingGround => 0,
            PlacementPhase::AwaitingBall => 1,
            PlacementPhase::Ready => 2,
        }
    }

    /// True while the reticle still drives placement.
    pub fn is_placing(self) -> bool {
        !matches!(self, PlacementPhase::Ready)
    }
}
