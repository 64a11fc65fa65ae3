use eframe::egui::{Vec2, vec2};

use super::motion::{DECAY_DECELERATION, Decay, Spring, SpringConfig};
use super::seek::{SeekProgress, SeekSequence};

/// Release speed, in units per millisecond, above which a fling keeps moving.
pub const FLING_SPEED_THRESHOLD: f32 = 0.3;

#[derive(Clone, Debug)]
enum Driver {
    Idle,
    Dragging { baseline: Vec2 },
    Decaying(Decay),
    Springing(Spring),
    Seeking(SeekSequence),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverKind {
    Idle,
    Dragging,
    Decaying,
    Springing,
    Seeking,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewportEvent {
    DecaySettled,
    SpringSettled,
    SeekArrived { peer_id: String, target: Vec2 },
}

#[derive(Clone, Debug)]
pub struct ViewportController {
    offset: Vec2,
    driver: Driver,
    spring: SpringConfig,
}

impl Default for ViewportController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewportController {
    pub fn new() -> Self {
        Self {
            offset: Vec2::ZERO,
            driver: Driver::Idle,
            spring: SpringConfig::snap(),
        }
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn driver_kind(&self) -> DriverKind {
        match self.driver {
            Driver::Idle => DriverKind::Idle,
            Driver::Dragging { .. } => DriverKind::Dragging,
            Driver::Decaying(_) => DriverKind::Decaying,
            Driver::Springing(_) => DriverKind::Springing,
            Driver::Seeking(_) => DriverKind::Seeking,
        }
    }

    pub fn is_animating(&self) -> bool {
        matches!(
            self.driver,
            Driver::Decaying(_) | Driver::Springing(_) | Driver::Seeking(_)
        )
    }

    pub fn seek(&self) -> Option<&SeekSequence> {
        match &self.driver {
            Driver::Seeking(sequence) => Some(sequence),
            _ => None,
        }
    }

    pub fn focal_point(&self) -> Option<Vec2> {
        self.seek().map(SeekSequence::focal_point)
    }

    /// Stops the current driver, keeping the offset it reached. Returns what
    /// was driving before.
    pub fn supersede(&mut self) -> DriverKind {
        let previous = self.driver_kind();
        self.driver = Driver::Idle;
        previous
    }

    pub fn on_drag_start(&mut self) {
        self.supersede();
        self.driver = Driver::Dragging {
            baseline: self.offset,
        };
    }

    /// `dx`/`dy` are the total displacement since the gesture began.
    pub fn on_drag_move(&mut self, dx: f32, dy: f32) {
        let baseline = match self.driver {
            Driver::Dragging { baseline } => baseline,
            _ => {
                self.on_drag_start();
                self.offset
            }
        };

        let delta = vec2(dx, dy);
        if delta.is_finite() {
            self.offset = baseline + delta;
        }
    }

    /// `vx`/`vy` are the release velocity in units per millisecond. A fast
    /// release starts momentum decay; anything else, including non-finite
    /// input, leaves the offset where the finger lifted.
    pub fn on_drag_release(&mut self, vx: f32, vy: f32) {
        self.driver = Driver::Idle;

        let velocity = vec2(vx, vy);
        if !velocity.is_finite() || velocity.length() <= FLING_SPEED_THRESHOLD {
            return;
        }

        self.driver = Driver::Decaying(Decay::new(self.offset, velocity, DECAY_DECELERATION));
    }

    /// Springs the offset so that `position` ends up centred.
    pub fn snap_to(&mut self, position: Vec2) {
        self.supersede();
        self.driver = Driver::Springing(Spring::new(self.offset, -position, self.spring));
    }

    pub fn start_seek(&mut self, sequence: SeekSequence) {
        self.supersede();
        self.driver = Driver::Seeking(sequence);
    }

    pub fn tick(&mut self, dt: f32) -> Option<ViewportEvent> {
        match &mut self.driver {
            Driver::Idle | Driver::Dragging { .. } => None,
            Driver::Decaying(decay) => {
                let settled = decay.step(dt);
                self.offset = decay.value();
                if settled {
                    self.driver = Driver::Idle;
                    return Some(ViewportEvent::DecaySettled);
                }
                None
            }
            Driver::Springing(spring) => {
                let settled = spring.step(dt);
                self.offset = spring.value();
                if settled {
                    self.driver = Driver::Idle;
                    return Some(ViewportEvent::SpringSettled);
                }
                None
            }
            Driver::Seeking(sequence) => {
                if sequence.tick(dt) == SeekProgress::Moving {
                    return None;
                }

                let peer_id = sequence.peer_id().to_owned();
                let target = sequence.target();
                self.snap_to(target);
                Some(ViewportEvent::SeekArrived { peer_id, target })
            }
        }
    }
}
