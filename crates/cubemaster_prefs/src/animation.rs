use std::time::Duration;

use serde::{Deserialize, Serialize};

pub use interpolation::InterpolateFn;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Commit every turn immediately, with no intermediate frames.
    pub instant: bool,
    /// Seconds per turn requested by the user.
    pub twist_duration: f32,
    /// Seconds per turn while scrambling.
    pub scramble_twist_duration: f32,
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            instant: false,
            twist_duration: 0.2,
            scramble_twist_duration: 0.05,
            twist_interpolation: InterpolateFn::Lerp,
        }
    }
}
impl AnimationPreferences {
    /// Returns the duration of a manual turn. Negative or non-finite values
    /// are treated as zero.
    pub fn manual_duration(&self) -> Duration {
        secs_to_duration(self.twist_duration)
    }
    /// Returns the duration of a scramble turn. Negative or non-finite values
    /// are treated as zero.
    pub fn scramble_duration(&self) -> Duration {
        secs_to_duration(self.scramble_twist_duration)
    }
}

fn secs_to_duration(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs).unwrap_or(Duration::ZERO)
}

pub mod interpolation {
    //! Interpolation functions.

    use std::f32::consts::PI;

    use serde::{Deserialize, Serialize};
    use strum::VariantArray;

    /// Function that maps a float from the range 0.0 to 1.0 to another float
    /// that starts at 0.0 and ends at 1.0.
    #[derive(
        Serialize, Deserialize, Debug, Default, Copy, Clone, PartialEq, Eq, Hash, VariantArray,
    )]
    #[serde(rename_all = "snake_case")]
    pub enum InterpolateFn {
        #[default]
        Lerp,
        Cosine,
        Cubic,
        Circular,
        Bounce,
        Overshoot,
        CriticallyDamped,
    }

    impl InterpolateFn {
        /// Returns the eased value for `t` in the range [0, 1].
        pub fn interpolate(self, mut t: f32) -> f32 {
            if t >= 1.0 {
                return 1.0;
            }
            match self {
                Self::Lerp => t,

                Self::Cosine => (1.0 - (t * PI).cos()) / 2.0,

                Self::Cubic => (3.0 - 2.0 * t) * t * t,

                Self::Circular => {
                    if t < 0.5 {
                        (1.0 - (1.0 - (2.0 * t).powi(2)).sqrt()) * 0.5
                    } else {
                        (1.0 + (1.0 - (-2.0 * t + 2.0).powi(2)).sqrt()) * 0.5
                    }
                }

                Self::Bounce => {
                    // https://easings.net/#easeOutBounce
                    let n1 = 7.5625;
                    let d1 = 2.75;

                    if t < 1.0 / d1 {
                        n1 * t * t
                    } else if t < 2.0 / d1 {
                        t -= 1.5 / d1;
                        n1 * t * t + 0.75
                    } else if t < 2.5 / d1 {
                        t -= 2.25 / d1;
                        n1 * t * t + 0.9375
                    } else {
                        t -= 2.625 / d1;
                        n1 * t * t + 0.984375
                    }
                }

                Self::Overshoot => {
                    // https://easings.net/#easeOutBack
                    let c1 = 1.70158;
                    let c3 = c1 + 1.0;
                    1.0 + c3 * (t - 1.0).powi(3) + c1 * (t - 1.0).powi(2)
                }

                Self::CriticallyDamped => (-5.0 * t - 1.0) * (-8.0 * t).exp() + 1.0,
            }
        }
    }

}
