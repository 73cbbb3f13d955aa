use cubemaster_core::{DEFAULT_SCRAMBLE_LENGTH, MoveSet};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MovePreferences {
    /// Moves offered to the user and drawn from when scrambling.
    pub move_set: MoveSet,
    pub scramble_length: u32,
}
impl Default for MovePreferences {
    fn default() -> Self {
        Self {
            move_set: MoveSet::Faces,
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
        }
    }
}
