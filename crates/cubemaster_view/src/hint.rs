//! Text snapshot of the cube for an external hint service.
//!
//! The service itself lives outside this crate. Failures never reach the
//! caller as errors; they are replaced with fixed fallback text.

use cubemaster_core::{Color, Cube, Move, Position};
use itertools::Itertools;
use serde::Serialize;

/// Number of cubies described in a hint snapshot.
pub const HINT_CUBIE_LIMIT: usize = 15;
/// Number of recent moves included in a hint snapshot.
pub const HINT_MOVE_LIMIT: usize = 10;

/// Shown when the hint service fails.
pub const HINT_FAILURE_TEXT: &str = "Failed to reach the hint service.";
/// Shown when the hint service answers with nothing.
pub const HINT_EMPTY_TEXT: &str = "Look at the cube and find the cross.";

/// Standing instruction sent to the hint service alongside each prompt.
pub const HINT_SYSTEM_INSTRUCTION: &str =
    "You are a concise speedcubing coach. Answer with one short, practical suggestion.";

/// Partial description of the cube, sent to a hint service.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct HintSnapshot {
    /// Position and top-slot color of the first cubies in canonical order.
    pub cubies: Vec<(Position, Color)>,
    /// Most recent committed moves, oldest first.
    pub recent_moves: Vec<Move>,
}
impl HintSnapshot {
    /// Captures a snapshot of `cube` and the tail of `history`.
    pub fn new(cube: &Cube, history: &[Move]) -> Self {
        Self {
            cubies: cube
                .cubies()
                .iter()
                .take(HINT_CUBIE_LIMIT)
                .map(|c| (c.position, c.colors.top))
                .collect(),
            recent_moves: history[history.len().saturating_sub(HINT_MOVE_LIMIT)..].to_vec(),
        }
    }

    /// Returns the cubie description, such as `Pos:-1,-1,-1 Top:blank;...`.
    pub fn summary(&self) -> String {
        self.cubies
            .iter()
            .map(|([x, y, z], top)| format!("Pos:{x},{y},{z} Top:{top}"))
            .join(";")
    }

    /// Returns the full prompt for the hint service.
    pub fn prompt(&self) -> String {
        let moves = if self.recent_moves.is_empty() {
            "none".to_owned()
        } else {
            self.recent_moves.iter().join(" ")
        };
        format!(
            "Partial 3x3x3 cube state: {}. Recent moves: {moves}. \
             Suggest the next step toward solving it in under 20 words.",
            self.summary(),
        )
    }
}

/// External source of solving hints.
pub trait HintService {
    /// Returns advice for the given snapshot.
    fn advise(&self, snapshot: &HintSnapshot) -> eyre::Result<String>;
}
impl<F: Fn(&HintSnapshot) -> eyre::Result<String>> HintService for F {
    fn advise(&self, snapshot: &HintSnapshot) -> eyre::Result<String> {
        self(snapshot)
    }
}

/// Asks `service` for a hint, substituting fallback text on failure or an
/// empty answer.
pub fn request_hint(service: &dyn HintService, snapshot: &HintSnapshot) -> String {
    match service.advise(snapshot) {
        Ok(text) if text.trim().is_empty() => HINT_EMPTY_TEXT.to_owned(),
        Ok(text) => text.trim().to_owned(),
        Err(e) => {
            log::warn!("hint service failed: {e:#}");
            HINT_FAILURE_TEXT.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_snapshot_limits() {
        let history = Move::parse_sequence("U D L R F B U' D' L' R' F' B'").unwrap();
        let mut cube = Cube::new();
        cube.apply_moves(&history);
        let snapshot = HintSnapshot::new(&cube, &history);
        assert_eq!(snapshot.cubies.len(), HINT_CUBIE_LIMIT);
        assert_eq!(snapshot.recent_moves, history[2..].to_vec());

        let empty = HintSnapshot::new(&Cube::new(), &[]);
        assert!(empty.recent_moves.is_empty());
        assert!(empty.prompt().contains("Recent moves: none."));
    }

    #[test]
    fn test_summary_format() {
        let snapshot = HintSnapshot::new(&Cube::new(), &[]);
        let summary = snapshot.summary();
        assert!(summary.starts_with("Pos:-1,-1,-1 Top:blank;Pos:-1,-1,0 Top:blank;"));
        assert!(summary.contains("Pos:-1,1,-1 Top:white"));
        assert_eq!(summary.split(';').count(), HINT_CUBIE_LIMIT);
    }

    #[test]
    fn test_fallbacks() {
        let snapshot = HintSnapshot::new(&Cube::new(), &[]);
        let ok = |_: &HintSnapshot| -> eyre::Result<String> { Ok(" Solve the cross. ".to_owned()) };
        let empty = |_: &HintSnapshot| -> eyre::Result<String> { Ok(String::new()) };
        let failing = |_: &HintSnapshot| -> eyre::Result<String> { eyre::bail!("offline") };
        assert_eq!(request_hint(&ok, &snapshot), "Solve the cross.");
        assert_eq!(request_hint(&empty, &snapshot), HINT_EMPTY_TEXT);
        assert_eq!(request_hint(&failing, &snapshot), HINT_FAILURE_TEXT);
    }
}
