//! Cube simulation frontend state, to ensure consistent feel across
//! frontends.
//!
//! [`CubeSimulation`] owns the committed cube and sequences turns. Each turn
//! animates for a while, during which renderers see a transient rotation of
//! the turning layer, and then commits to the cube in one step.

mod animations;
pub mod hint;
mod render;
mod simulation;
mod snapshot;

#[cfg(test)]
mod tests;

pub use animations::{AnimationPolicy, TurnSource, TwistAnimation};
pub use hint::{HintService, HintSnapshot, request_hint};
pub use render::{CubieTransform, RenderCubie, RenderCubieJson};
pub use simulation::{CubeSimulation, MoveRequestError, SolveTimer, TurnTicket};
pub use snapshot::{RECENT_MOVE_COUNT, UiSnapshot, format_time};
