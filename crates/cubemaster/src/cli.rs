use std::time::Duration;

use chrono::{DateTime, Utc};
use cubemaster_core::{Cube, Move, MoveSet, ScrambleParams};
use cubemaster_prefs::Preferences;
use cubemaster_view::{AnimationPolicy, CubeSimulation, HintSnapshot, RenderCubieJson, UiSnapshot};
use eyre::{Context, Result, bail};
use itertools::Itertools;
use serde::Serialize;

/// Frame time used when running the simulation headlessly.
const HEADLESS_FRAME: Duration = Duration::from_micros(16_667); // 60 FPS

/// Upper bound on simulated frames, so that a bad preference file cannot hang
/// the process.
const MAX_HEADLESS_FRAMES: usize = 1_000_000;

/// Cubemaster command-line interface
#[derive(Debug, clap::Parser)]
#[command(version)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub subcommand: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub(crate) enum Subcommand {
    /// Print every move in the vocabulary.
    Moves {
        /// Include slice moves (M, E, S).
        #[arg(short, long)]
        slices: bool,
    },
    /// Play moves on a solved cube and print the result as JSON.
    Play {
        /// Moves to play, such as `R U R' U'`.
        #[arg(required = true)]
        moves: Vec<String>,
        /// Commit every turn immediately instead of animating.
        #[arg(short, long)]
        instant: bool,
    },
    /// Scramble a solved cube and print the result as JSON.
    Scramble {
        /// Random seed. A fresh seed is generated if omitted.
        #[arg(long)]
        seed: Option<String>,
        /// Include slice moves (M, E, S).
        #[arg(short, long)]
        slices: bool,
    },
    /// Print the effective preferences as JSON.
    Prefs {
        /// Also write them to the user preferences file.
        #[arg(long)]
        save: bool,
    },
    /// Print the hint prompt for the cube after playing some moves.
    Hint {
        /// Moves to play first.
        moves: Vec<String>,
    },
}

#[derive(Serialize, Debug)]
struct PlayOutput {
    ui: UiSnapshot,
    time: String,
    solved: bool,
    frames: usize,
    scramble: Option<ScrambleParams>,
    cube: Cube,
    cubies: Vec<RenderCubieJson>,
}

pub(crate) fn exec(subcommand: Subcommand) -> Result<()> {
    match subcommand {
        Subcommand::Moves { slices } => {
            println!("{}", Move::format_sequence(&move_set(slices).moves()));
            Ok(())
        }

        Subcommand::Play { moves, instant } => {
            let moves = parse_moves(&moves)?;
            let prefs = Preferences::load();
            let mut sim = CubeSimulation::from_prefs(&prefs);
            if instant {
                sim.set_policy(AnimationPolicy::Instant);
            }
            if moves.iter().any(|m| m.face.is_slice()) {
                sim.set_move_set(MoveSet::FacesAndSlices);
            }

            let frames = play_moves(&mut sim, &moves)?;
            write_json_output(&play_output(&sim, frames))
        }

        Subcommand::Scramble { seed, slices } => {
            let prefs = Preferences::load();
            let move_set = move_set(slices);
            let length = prefs.moves.scramble_length;
            let params = match seed {
                // A fixed time keeps explicit seeds reproducible.
                Some(seed) => {
                    ScrambleParams::from_seed(DateTime::<Utc>::UNIX_EPOCH, seed, length, move_set)
                }
                None => ScrambleParams::new(length, move_set),
            };
            log::info!("scramble: {}", Move::format_sequence(&params.generate()));

            let policy = AnimationPolicy::from_prefs(&prefs.animation);
            let mut sim = CubeSimulation::new(policy, move_set, length);
            sim.scramble_with(params);
            let frames = run_until_idle(&mut sim)?;
            write_json_output(&play_output(&sim, frames))
        }

        Subcommand::Prefs { save } => {
            let prefs = Preferences::load();
            if save {
                let path = prefs.save()?;
                log::info!("wrote preferences to {}", path.display());
            }
            write_json_output(&prefs)
        }

        Subcommand::Hint { moves } => {
            let moves = parse_moves(&moves)?;
            let mut cube = Cube::new();
            cube.apply_moves(&moves);
            let snapshot = HintSnapshot::new(&cube, &moves);
            println!("{}", cubemaster_view::hint::HINT_SYSTEM_INSTRUCTION);
            println!("{}", snapshot.prompt());
            Ok(())
        }
    }
}

fn move_set(slices: bool) -> MoveSet {
    if slices {
        MoveSet::FacesAndSlices
    } else {
        MoveSet::Faces
    }
}

/// Parses moves given as separate arguments, each of which may itself hold
/// several space-separated moves.
fn parse_moves(args: &[String]) -> Result<Vec<Move>> {
    let joined = args.iter().join(" ");
    Move::parse_sequence(&joined).wrap_err_with(|| format!("error parsing moves {joined:?}"))
}

/// Plays each move once the previous one has settled. Returns the number of
/// frames simulated.
fn play_moves(sim: &mut CubeSimulation, moves: &[Move]) -> Result<usize> {
    let mut frames = 0;
    for &m in moves {
        frames += run_until_idle(sim)?;
        if sim.request_move(m)?.is_none() {
            bail!("move {m} was dropped by an idle simulation");
        }
    }
    frames += run_until_idle(sim)?;
    Ok(frames)
}

fn run_until_idle(sim: &mut CubeSimulation) -> Result<usize> {
    let mut frames = 0;
    while sim.is_busy() {
        sim.step_by(HEADLESS_FRAME);
        frames += 1;
        if frames > MAX_HEADLESS_FRAMES {
            bail!("simulation did not settle after {frames} frames");
        }
    }
    Ok(frames)
}

fn play_output(sim: &CubeSimulation, frames: usize) -> PlayOutput {
    let ui = sim.ui_snapshot();
    PlayOutput {
        time: ui.formatted_time(),
        ui,
        solved: sim.cube().is_solved(),
        frames,
        scramble: sim.scramble().cloned(),
        cube: sim.cube().clone(),
        cubies: sim.render_data().iter().map(RenderCubieJson::from).collect(),
    }
}

fn write_json_output<T: Serialize>(value: &T) -> Result<()> {
    serde_json::to_writer_pretty(std::io::stdout(), value)
        .context("error serializing data and writing to stdout")?;
    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use cubemaster_prefs::InterpolateFn;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_moves_accepts_split_and_joined_args() {
        let args = ["R U".to_owned(), "R'".to_owned(), "U'".to_owned()];
        assert_eq!(
            parse_moves(&args).unwrap(),
            Move::parse_sequence("R U R' U'").unwrap(),
        );
        assert!(parse_moves(&["Q".to_owned()]).is_err());
    }

    #[test]
    fn test_headless_play_settles() {
        let mut sim = CubeSimulation::default();
        let moves = Move::parse_sequence("R U R' U'").unwrap();
        let frames = play_moves(&mut sim, &moves).unwrap();
        // 0.2 s per turn at 60 FPS.
        assert_eq!(frames, 4 * 12);
        let output = play_output(&sim, frames);
        assert_eq!(output.ui.move_count, 4);
        assert!(!output.solved);
        assert_eq!(output.cubies.len(), cubemaster_core::CUBIE_COUNT);
    }

    #[test]
    fn test_headless_play_is_bounded() {
        let policy = AnimationPolicy::Interpolated {
            manual: Duration::from_secs(1_000_000_000),
            scramble: Duration::from_secs(1_000_000_000),
            interpolation: InterpolateFn::Lerp,
        };
        let mut sim = CubeSimulation::new(policy, MoveSet::Faces, 20);
        let moves = Move::parse_sequence("R U").unwrap();
        assert!(play_moves(&mut sim, &moves).is_err());
        assert!(sim.history().is_empty());
    }
}
