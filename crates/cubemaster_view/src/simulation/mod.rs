use std::collections::VecDeque;

use cubemaster_core::{Cube, Move, MoveSet, ParseMoveError, ScrambleParams};
use cubemaster_prefs::Preferences;
use web_time::{Duration, Instant};

mod timer;

pub use timer::SolveTimer;

use crate::animations::{AnimationPolicy, TurnSource, TwistAnimation};
use crate::{CubieTransform, HintSnapshot, RenderCubie, UiSnapshot};

const ASSUMED_FPS: f32 = 120.0;

/// Error returned when a move request is refused outright.
///
/// A request that arrives while the simulation is busy is not an error; it is
/// silently dropped.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MoveRequestError {
    /// The move could not be parsed.
    #[error("bad move: {0}")]
    Parse(#[from] ParseMoveError),
    /// The move is outside the configured move set.
    #[error("move {0} is not enabled")]
    NotInMoveSet(Move),
}

/// Handle for a turn that has been accepted, used to ask whether it has
/// committed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TurnTicket(u64);

/// Cube simulation, which owns the cube state and sequences turns, their
/// animations, the move history, and the solve timer.
///
/// At most one turn is in flight at a time. Requests that arrive while a turn
/// is in flight or a scramble is running are dropped.
#[derive(Debug)]
pub struct CubeSimulation {
    /// Committed cube state, not including any transient rotation.
    cube: Cube,

    policy: AnimationPolicy,
    move_set: MoveSet,
    scramble_length: u32,

    /// Committed moves, oldest first.
    history: Vec<Move>,
    /// Most recent scramble, or `None` if the cube has not been scrambled
    /// since the last reset.
    scramble: Option<ScrambleParams>,
    /// Scramble moves not yet started.
    scramble_queue: VecDeque<Move>,
    /// Whether the solve has been started.
    started: bool,
    /// Whether the cube has been solved since the last scramble.
    solved: bool,
    timer: SolveTimer,

    /// Turn in flight.
    twist_anim: Option<TwistAnimation>,
    /// Number of turns accepted so far.
    turns_started: u64,
    /// Number of turns committed so far.
    turns_committed: u64,

    /// Time of last frame, or `None` if nothing is moving.
    last_frame_time: Option<Instant>,
}
impl Default for CubeSimulation {
    fn default() -> Self {
        Self::new(
            AnimationPolicy::default(),
            MoveSet::default(),
            cubemaster_core::DEFAULT_SCRAMBLE_LENGTH,
        )
    }
}
impl CubeSimulation {
    /// Constructs a new simulation with a solved cube.
    pub fn new(policy: AnimationPolicy, move_set: MoveSet, scramble_length: u32) -> Self {
        Self {
            cube: Cube::new(),

            policy,
            move_set,
            scramble_length,

            history: vec![],
            scramble: None,
            scramble_queue: VecDeque::new(),
            started: false,
            solved: false,
            timer: SolveTimer::default(),

            twist_anim: None,
            turns_started: 0,
            turns_committed: 0,

            last_frame_time: None,
        }
    }
    /// Constructs a new simulation using animation and move preferences.
    pub fn from_prefs(prefs: &Preferences) -> Self {
        Self::new(
            AnimationPolicy::from_prefs(&prefs.animation),
            prefs.moves.move_set,
            prefs.moves.scramble_length,
        )
    }

    /// Returns the committed cube state.
    pub fn cube(&self) -> &Cube {
        &self.cube
    }
    /// Returns committed moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }
    /// Returns the turn in flight, if any.
    pub fn twist_animation(&self) -> Option<&TwistAnimation> {
        self.twist_anim.as_ref()
    }
    /// Returns the most recent scramble, or `None` if the cube has not been
    /// scrambled since the last reset.
    pub fn scramble(&self) -> Option<&ScrambleParams> {
        self.scramble.as_ref()
    }
    /// Returns the moves accepted from the user and used for scrambles.
    pub fn move_set(&self) -> MoveSet {
        self.move_set
    }
    /// Sets the moves accepted from the user and used for future scrambles.
    pub fn set_move_set(&mut self, move_set: MoveSet) {
        self.move_set = move_set;
    }
    /// Returns how turns are presented.
    pub fn policy(&self) -> AnimationPolicy {
        self.policy
    }
    /// Sets how future turns are presented. A turn already in flight keeps
    /// its animation.
    pub fn set_policy(&mut self, policy: AnimationPolicy) {
        self.policy = policy;
    }
    /// Returns the solve timer.
    pub fn timer(&self) -> &SolveTimer {
        &self.timer
    }
    /// Returns whether the cube has been solved since it was last scrambled.
    pub fn has_been_solved(&self) -> bool {
        self.solved
    }

    /// Returns whether a turn is in flight or a scramble is running. While
    /// busy, move and scramble requests are dropped.
    pub fn is_busy(&self) -> bool {
        self.twist_anim.is_some() || !self.scramble_queue.is_empty()
    }
    /// Returns whether the turn for `ticket` has committed.
    pub fn is_turn_complete(&self, ticket: TurnTicket) -> bool {
        ticket.0 < self.turns_committed
    }

    /// Requests a manual move. Returns `Ok(None)` if the request was dropped
    /// because the simulation is busy.
    pub fn request_move(&mut self, m: Move) -> Result<Option<TurnTicket>, MoveRequestError> {
        if !self.move_set.contains(m) {
            return Err(MoveRequestError::NotInMoveSet(m));
        }
        if self.is_busy() {
            log::trace!("dropping move {m} while busy");
            return Ok(None);
        }
        Ok(Some(self.begin_turn(m, TurnSource::Manual)))
    }
    /// Parses and requests a single manual move, such as `R'`.
    pub fn request_move_str(&mut self, s: &str) -> Result<Option<TurnTicket>, MoveRequestError> {
        self.request_move(s.parse()?)
    }

    /// Requests a random scramble with a fresh seed. Returns whether the
    /// scramble was started.
    pub fn request_scramble(&mut self) -> bool {
        if self.is_busy() {
            log::trace!("dropping scramble request while busy");
            return false;
        }
        self.scramble_with(ScrambleParams::new(self.scramble_length, self.move_set))
    }
    /// Starts a scramble from explicit parameters. Returns whether the
    /// scramble was started.
    ///
    /// Scramble moves are applied on top of the current state. The history
    /// and timer are cleared first; the scramble moves themselves are
    /// recorded in the history as they commit.
    pub fn scramble_with(&mut self, params: ScrambleParams) -> bool {
        if self.is_busy() {
            log::trace!("dropping scramble request while busy");
            return false;
        }
        log::debug!(
            "scrambling with seed {:?} ({} moves)",
            params.seed,
            params.length,
        );
        self.history.clear();
        self.timer.reset();
        self.started = false;
        self.solved = false;
        self.scramble_queue.extend(params.generate());
        self.scramble = Some(params);
        self.pump();
        true
    }

    /// Resets the cube to solved and clears the history, timer, and any
    /// scramble moves that have not started.
    ///
    /// A turn already in flight is not canceled; it commits onto the reset
    /// cube when its animation completes.
    pub fn request_reset(&mut self) {
        if let Some(anim) = &self.twist_anim {
            log::warn!("reset requested while {} is in flight", anim.mv);
        }
        log::debug!("resetting cube");
        self.cube = Cube::new();
        self.history.clear();
        self.scramble = None;
        self.scramble_queue.clear();
        self.started = false;
        self.solved = false;
        self.timer.reset();
    }

    /// Advances animations and the timer using wall-clock time since the last
    /// frame. Returns whether the cube must be redrawn.
    pub fn step(&mut self) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };

        let needs_redraw = self.step_by(delta);

        if needs_redraw || self.timer.is_running() {
            self.last_frame_time = Some(now);
        } else {
            self.last_frame_time = None;
        }

        needs_redraw
    }
    /// Advances animations and the timer by `delta`. Returns whether the cube
    /// must be redrawn.
    ///
    /// At most one turn commits per call; time left over after a commit is
    /// not carried into the next turn.
    pub fn step_by(&mut self, delta: Duration) -> bool {
        self.timer.advance(delta);

        let Some(anim) = &mut self.twist_anim else {
            return false;
        };
        if anim.proceed(delta) {
            if let Some(anim) = self.twist_anim.take() {
                self.commit(anim.mv, anim.source);
            }
            self.pump();
        }
        true
    }

    /// Accepts a turn and either starts its animation or commits it
    /// immediately. The first turn after a reset or scramble request starts
    /// the timer, whether it is manual or part of the scramble.
    fn begin_turn(&mut self, m: Move, source: TurnSource) -> TurnTicket {
        if !self.started {
            self.started = true;
            self.timer.start();
        }
        let ticket = TurnTicket(self.turns_started);
        self.turns_started += 1;
        log::trace!("starting {source:?} turn {m}");
        match self.policy.animate(m, source) {
            Some(anim) => self.twist_anim = Some(anim),
            None => self.commit(m, source),
        }
        ticket
    }
    /// Starts queued scramble moves until one is in flight or the queue is
    /// empty.
    fn pump(&mut self) {
        while self.twist_anim.is_none() {
            let Some(m) = self.scramble_queue.pop_front() else {
                break;
            };
            self.begin_turn(m, TurnSource::Scramble);
        }
    }
    /// Applies a turn to the cube and records it.
    fn commit(&mut self, m: Move, source: TurnSource) {
        self.cube.twist(m.turn());
        self.history.push(m);
        self.turns_committed += 1;
        log::trace!("committed {m}");
        debug_assert_eq!(self.cube.validate(), Ok(()));

        if source == TurnSource::Manual
            && self.scramble.is_some()
            && !self.solved
            && self.cube.is_solved()
        {
            log::debug!("solved in {} moves", self.history.len());
            self.solved = true;
            self.timer.stop();
        }
    }

    /// Returns the visual state of every cubie, including the transient
    /// rotation of a turn in flight.
    pub fn render_data(&self) -> Vec<RenderCubie> {
        self.cube
            .cubies()
            .iter()
            .map(|cubie| RenderCubie {
                id: cubie.id,
                position: cubie.position,
                colors: cubie.colors,
                transform: match &self.twist_anim {
                    Some(anim) => anim.transform(cubie.position),
                    None => CubieTransform::at_rest(cubie.position),
                },
            })
            .collect()
    }
    /// Returns the state shown in the user interface.
    pub fn ui_snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            move_history: self.history.clone(),
            move_count: self.history.len(),
            elapsed_seconds: self.timer.seconds(),
            busy: self.is_busy(),
            last_move: self.twist_anim.as_ref().map(|anim| anim.mv),
            solved: self.solved,
        }
    }
    /// Returns the description of the cube sent to a hint service.
    pub fn hint_snapshot(&self) -> HintSnapshot {
        HintSnapshot::new(&self.cube, &self.history)
    }
}
