use eframe::egui::Vec2;

/// Per-millisecond velocity retention used for fling momentum.
pub const DECAY_DECELERATION: f32 = 0.995;
const DECAY_REST_DELTA: f32 = 0.1;

pub const SNAP_TENSION: f32 = 40.0;
pub const SNAP_FRICTION: f32 = 7.0;
const SPRING_MAX_SUBSTEP_SECS: f32 = 1.0 / 240.0;
const SPRING_REST_DISPLACEMENT: f32 = 0.01;
const SPRING_REST_SPEED: f32 = 0.01;

/// Exponential momentum decay. `velocity` is in units per millisecond, the
/// unit gesture samples are reported in.
#[derive(Clone, Copy, Debug)]
pub struct Decay {
    origin: Vec2,
    velocity: Vec2,
    deceleration: f32,
    elapsed_ms: f32,
    value: Vec2,
}

impl Decay {
    pub fn new(origin: Vec2, velocity: Vec2, deceleration: f32) -> Self {
        Self {
            origin,
            velocity,
            deceleration: deceleration.clamp(0.0, 0.999_999),
            elapsed_ms: 0.0,
            value: origin,
        }
    }

    pub fn value(&self) -> Vec2 {
        self.value
    }

    pub fn step(&mut self, dt_secs: f32) -> bool {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return false;
        }

        self.elapsed_ms += dt_secs * 1000.0;
        let k = 1.0 - self.deceleration;
        let next = self.origin + self.velocity / k * (1.0 - (-k * self.elapsed_ms).exp());
        let moved = next - self.value;
        self.value = next;

        moved.x.abs() < DECAY_REST_DELTA && moved.y.abs() < DECAY_REST_DELTA
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub fn from_tension_friction(tension: f32, friction: f32) -> Self {
        Self {
            stiffness: (tension - 30.0) * 3.62 + 194.0,
            damping: (friction - 8.0) * 3.0 + 25.0,
            mass: 1.0,
        }
    }

    pub fn snap() -> Self {
        Self::from_tension_friction(SNAP_TENSION, SNAP_FRICTION)
    }
}

/// Damped spring pulling `value` toward `target`, velocity in units per second.
#[derive(Clone, Copy, Debug)]
pub struct Spring {
    value: Vec2,
    velocity: Vec2,
    target: Vec2,
    config: SpringConfig,
}

impl Spring {
    pub fn new(from: Vec2, target: Vec2, config: SpringConfig) -> Self {
        Self {
            value: from,
            velocity: Vec2::ZERO,
            target,
            config,
        }
    }

    pub fn value(&self) -> Vec2 {
        self.value
    }

    pub fn step(&mut self, dt_secs: f32) -> bool {
        if !dt_secs.is_finite() || dt_secs <= 0.0 {
            return self.at_rest();
        }

        let substeps = (dt_secs / SPRING_MAX_SUBSTEP_SECS).ceil().max(1.0) as usize;
        let h = dt_secs / substeps as f32;
        let mass = self.config.mass.max(f32::EPSILON);
        for _ in 0..substeps {
            let displacement = self.value - self.target;
            let acceleration =
                (displacement * -self.config.stiffness - self.velocity * self.config.damping) / mass;
            self.velocity += acceleration * h;
            self.value += self.velocity * h;
        }

        if self.at_rest() {
            self.value = self.target;
            self.velocity = Vec2::ZERO;
            return true;
        }
        false
    }

    fn at_rest(&self) -> bool {
        (self.value - self.target).length() < SPRING_REST_DISPLACEMENT
            && self.velocity.length() < SPRING_REST_SPEED
    }
}
