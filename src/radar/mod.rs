mod clock;
mod motion;
mod seek;
mod session;
mod tutorial;
mod viewport;

pub use session::{NavigationIntent, RadarSession};
pub use tutorial::TUTORIAL_STEPS;
