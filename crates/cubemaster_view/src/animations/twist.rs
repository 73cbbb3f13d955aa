use cgmath::{Quaternion, Rad, Rotation3};
use cubemaster_core::{Move, Position, Turn, position_vec3};
use cubemaster_prefs::{AnimationPreferences, InterpolateFn};
use serde::Serialize;
use web_time::Duration;

use crate::CubieTransform;

/// What requested a turn, which decides how long it animates.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TurnSource {
    /// Requested by the user.
    Manual,
    /// Part of a scramble sequence.
    Scramble,
}

/// How turns are presented.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AnimationPolicy {
    /// Every turn commits as soon as it starts.
    Instant,
    /// Turns rotate smoothly before committing.
    Interpolated {
        /// Duration of a manual turn.
        manual: Duration,
        /// Duration of each scramble turn.
        scramble: Duration,
        /// Easing applied to linear progress.
        interpolation: InterpolateFn,
    },
}
impl Default for AnimationPolicy {
    fn default() -> Self {
        Self::from_prefs(&AnimationPreferences::default())
    }
}
impl AnimationPolicy {
    /// Constructs a policy from animation preferences.
    pub fn from_prefs(prefs: &AnimationPreferences) -> Self {
        if prefs.instant {
            Self::Instant
        } else {
            Self::Interpolated {
                manual: prefs.manual_duration(),
                scramble: prefs.scramble_duration(),
                interpolation: prefs.twist_interpolation,
            }
        }
    }

    /// Returns the animation for a turn, or `None` if the turn should commit
    /// immediately.
    pub fn animate(self, mv: Move, source: TurnSource) -> Option<TwistAnimation> {
        match self {
            Self::Instant => None,
            Self::Interpolated {
                manual,
                scramble,
                interpolation,
            } => {
                let duration = match source {
                    TurnSource::Manual => manual,
                    TurnSource::Scramble => scramble,
                };
                (!duration.is_zero()).then(|| TwistAnimation {
                    mv,
                    turn: mv.turn(),
                    source,
                    duration,
                    elapsed: Duration::ZERO,
                    interpolation,
                })
            }
        }
    }
}

/// Quarter turn in flight.
///
/// The cube state does not change while a turn animates; the animation only
/// provides transient transforms for the cubies in the turning layer.
#[derive(Debug, Clone, PartialEq)]
pub struct TwistAnimation {
    /// Move being animated.
    pub mv: Move,
    /// Turn performed by the move.
    pub turn: Turn,
    /// What requested the turn.
    pub source: TurnSource,
    duration: Duration,
    elapsed: Duration,
    interpolation: InterpolateFn,
}
impl TwistAnimation {
    /// Steps the animation forward. Returns whether it has completed.
    pub fn proceed(&mut self, delta: Duration) -> bool {
        self.elapsed = (self.elapsed + delta).min(self.duration);
        self.is_complete()
    }

    /// Returns linear progress in the range `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }
    /// Returns whether the animation has reached its target angle.
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Returns the displayed rotation angle, after easing.
    pub fn angle(&self) -> Rad<f32> {
        self.turn.angle() * self.interpolation.interpolate(self.progress())
    }

    /// Returns the transient transform for a cubie at `position`. Cubies
    /// outside the turning layer are left at rest.
    pub fn transform(&self, position: Position) -> CubieTransform {
        if !self.turn.affects(position) {
            return CubieTransform::at_rest(position);
        }
        let angle = self.angle();
        CubieTransform {
            position: self.turn.axis.rotation_matrix(angle) * position_vec3(position),
            orientation: Quaternion::from_axis_angle(self.turn.axis.unit_vec3(), angle),
        }
    }
}

#[cfg(test)]
mod tests {
    use cgmath::{InnerSpace, One, Rotation};
    use cubemaster_core::{MoveFace, Sign};
    use pretty_assertions::assert_eq;

    use super::*;

    const EPSILON: f32 = 1e-5;

    fn policy(interpolation: InterpolateFn) -> AnimationPolicy {
        AnimationPolicy::Interpolated {
            manual: Duration::from_millis(200),
            scramble: Duration::from_millis(80),
            interpolation,
        }
    }

    #[test]
    fn test_instant_policy_has_no_animation() {
        let mv = Move::new(MoveFace::U);
        assert_eq!(AnimationPolicy::Instant.animate(mv, TurnSource::Manual), None);
        let zero = AnimationPolicy::Interpolated {
            manual: Duration::ZERO,
            scramble: Duration::ZERO,
            interpolation: InterpolateFn::Lerp,
        };
        assert_eq!(zero.animate(mv, TurnSource::Scramble), None);
    }

    #[test]
    fn test_durations_depend_on_source() {
        let mv = Move::new(MoveFace::R);
        let mut manual = policy(InterpolateFn::Lerp).animate(mv, TurnSource::Manual).unwrap();
        let mut scramble = policy(InterpolateFn::Lerp).animate(mv, TurnSource::Scramble).unwrap();
        assert!(!manual.proceed(Duration::from_millis(100)));
        assert!(scramble.proceed(Duration::from_millis(100)));
        assert!(manual.proceed(Duration::from_millis(100)));
    }

    #[test]
    fn test_progress_is_linear_and_clamped() {
        let mut anim = policy(InterpolateFn::Lerp)
            .animate(Move::new(MoveFace::F), TurnSource::Manual)
            .unwrap();
        assert_eq!(anim.progress(), 0.0);
        anim.proceed(Duration::from_millis(50));
        assert!((anim.progress() - 0.25).abs() < EPSILON);
        anim.proceed(Duration::from_secs(10));
        assert_eq!(anim.progress(), 1.0);
        assert!((anim.angle().0 - anim.turn.angle().0).abs() < EPSILON);
    }

    #[test]
    fn test_angle_sign_follows_move() {
        let mut cw = policy(InterpolateFn::Lerp)
            .animate(Move::new(MoveFace::U), TurnSource::Manual)
            .unwrap();
        let mut ccw = policy(InterpolateFn::Lerp)
            .animate(Move::new_inverse(MoveFace::U), TurnSource::Manual)
            .unwrap();
        cw.proceed(Duration::from_millis(100));
        ccw.proceed(Duration::from_millis(100));
        assert_eq!(cw.turn.sign, Sign::Neg);
        assert!(cw.angle().0 < 0.0);
        assert!((cw.angle().0 + ccw.angle().0).abs() < EPSILON);
    }

    #[test]
    fn test_transform_only_moves_turning_layer() {
        let mut anim = policy(InterpolateFn::Cosine)
            .animate(Move::new(MoveFace::U), TurnSource::Manual)
            .unwrap();
        anim.proceed(Duration::from_millis(100));

        let still = anim.transform([1, -1, 1]);
        assert_eq!(still, CubieTransform::at_rest([1, -1, 1]));
        assert_eq!(still.orientation, Quaternion::one());

        let moving = anim.transform([1, 1, 1]);
        assert!((moving.position.y - 1.0).abs() < EPSILON);
        assert!((moving.position.magnitude() - 3.0_f32.sqrt()).abs() < EPSILON);
        let rotated = moving.orientation.rotate_vector(position_vec3([1, 1, 1]));
        assert!((rotated - moving.position).magnitude() < EPSILON);
    }

    #[test]
    fn test_completed_transform_matches_committed_position() {
        for mv in cubemaster_core::MoveSet::FacesAndSlices.moves() {
            let mut anim = policy(InterpolateFn::Bounce)
                .animate(mv, TurnSource::Manual)
                .unwrap();
            anim.proceed(Duration::from_secs(1));
            for id in cubemaster_core::CubieId::all() {
                let expected = if anim.turn.affects(id.0) {
                    cubemaster_core::Cubie::new(id).turned(anim.turn).position
                } else {
                    id.0
                };
                let actual = cubemaster_core::snap_to_lattice(anim.transform(id.0).position);
                assert_eq!(actual, expected, "{mv} {id}");
            }
        }
    }
}
