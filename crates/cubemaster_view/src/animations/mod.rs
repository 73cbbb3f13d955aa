mod twist;

pub use twist::{AnimationPolicy, TurnSource, TwistAnimation};
