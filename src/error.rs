use crate::Pos2;

/// Configuration errors raised when a board or simulation is set up
///
/// Stepping itself is infallible; everything here is caught before the
/// first generation is computed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("grid of {width}x{height} has no interior, both sides must be at least 3")]
    GridTooSmall { width: usize, height: usize },
    #[error("live probability {0} is outside of [0, 1]")]
    LiveProbability(f64),
    #[error("position {0} is not an interior cell")]
    OutsideInterior(Pos2),
}
