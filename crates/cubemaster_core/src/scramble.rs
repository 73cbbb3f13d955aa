use chrono::{DateTime, SubsecRound, Utc};
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::{Move, MoveSet};

/// Parameters to deterministically generate a scramble sequence.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ScrambleParams {
    /// Time when the scramble was requested.
    pub time: DateTime<Utc>,
    /// Random seed.
    pub seed: String,
    /// Number of moves.
    pub length: u32,
    /// Moves to choose from.
    pub move_set: MoveSet,
}
impl ScrambleParams {
    /// Generates new scramble parameters based on the current time and a
    /// random number.
    pub fn new(length: u32, move_set: MoveSet) -> Self {
        let time = Utc::now().trunc_subsecs(3); // nearest millisecond
        let seed = format!("{}_{}", time.timestamp_millis(), rand::rng().random::<u64>());
        Self::from_seed(time, seed, length, move_set)
    }
    /// Constructs scramble parameters from an explicit seed.
    pub fn from_seed(time: DateTime<Utc>, seed: String, length: u32, move_set: MoveSet) -> Self {
        Self {
            time,
            seed,
            length,
            move_set,
        }
    }

    /// Returns the scramble sequence, with each move chosen uniformly from
    /// [`ScrambleParams::move_set`]. The same parameters always produce the
    /// same sequence.
    pub fn generate(&self) -> Vec<Move> {
        let mut sha256 = sha2::Sha256::new();
        sha256.update(self.time.timestamp_millis().to_le_bytes());
        sha256.update(self.seed.len().to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let digest = sha256.finalize();

        let mut rng_seed = [0_u8; 32];
        rng_seed.copy_from_slice(&digest);
        let mut rng = rand_chacha::ChaCha12Rng::from_seed(rng_seed);

        let vocabulary = self.move_set.moves();
        std::iter::from_fn(|| vocabulary.choose(&mut rng).copied())
            .take(self.length as usize)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn params(seed: &str, move_set: MoveSet) -> ScrambleParams {
        let time = DateTime::from_timestamp_millis(1_700_000_000_000).unwrap();
        ScrambleParams::from_seed(time, seed.to_owned(), 20, move_set)
    }

    #[test]
    fn test_scramble_is_deterministic() {
        let a = params("hello", MoveSet::Faces);
        assert_eq!(a.generate(), a.clone().generate());
        assert_ne!(a.generate(), params("world", MoveSet::Faces).generate());
    }

    #[test]
    fn test_scramble_length_and_vocabulary() {
        for move_set in [MoveSet::Faces, MoveSet::FacesAndSlices] {
            let moves = params("abc", move_set).generate();
            assert_eq!(moves.len(), 20);
            assert!(moves.iter().all(|&m| move_set.contains(m)));
        }
    }

    #[test]
    fn test_slices_eventually_appear() {
        let any_slice = (0..20)
            .flat_map(|i| params(&i.to_string(), MoveSet::FacesAndSlices).generate())
            .any(|m| m.face.is_slice());
        assert!(any_slice);
    }
}
