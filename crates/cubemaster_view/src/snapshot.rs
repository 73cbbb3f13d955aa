use cubemaster_core::Move;
use itertools::Itertools;
use serde::Serialize;

/// Number of moves shown in the on-screen history.
pub const RECENT_MOVE_COUNT: usize = 12;

/// State exposed to the user interface.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct UiSnapshot {
    /// Committed moves, oldest first.
    pub move_history: Vec<Move>,
    /// Number of committed moves.
    pub move_count: usize,
    /// Whole seconds on the solve timer.
    pub elapsed_seconds: u64,
    /// Whether new move requests are currently being rejected.
    pub busy: bool,
    /// Move currently animating, if any.
    pub last_move: Option<Move>,
    /// Whether the cube has been solved since it was last scrambled.
    pub solved: bool,
}
impl UiSnapshot {
    /// Returns the last [`RECENT_MOVE_COUNT`] moves, newest first.
    pub fn recent_moves(&self) -> impl '_ + Iterator<Item = Move> {
        self.move_history
            .iter()
            .rev()
            .take(RECENT_MOVE_COUNT)
            .copied()
    }
    /// Returns [`UiSnapshot::recent_moves()`] as space-separated notation.
    pub fn recent_moves_string(&self) -> String {
        self.recent_moves().join(" ")
    }
    /// Returns the timer as `MM:SS`.
    pub fn formatted_time(&self) -> String {
        format_time(self.elapsed_seconds)
    }
}

/// Formats whole seconds as `MM:SS`. Minutes are not wrapped at an hour.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
