use eframe::egui::Vec2;

pub const SCENIC_WAYPOINTS: [Vec2; 4] = [
    Vec2::new(150.0, -100.0),
    Vec2::new(-80.0, 180.0),
    Vec2::new(200.0, 100.0),
    Vec2::new(-150.0, -50.0),
];
pub const APPROACH_FRACTION: f32 = 0.7;
pub const SEEK_LEG_SECS: f32 = 2.0;

fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

#[derive(Clone, Debug, PartialEq)]
pub struct SeekPath {
    waypoints: Vec<Vec2>,
    cursor: usize,
}

impl SeekPath {
    pub fn toward(target: Vec2) -> Self {
        let mut waypoints = Vec::with_capacity(SCENIC_WAYPOINTS.len() + 2);
        waypoints.extend_from_slice(&SCENIC_WAYPOINTS);
        waypoints.push(target * APPROACH_FRACTION);
        waypoints.push(target);

        Self {
            waypoints,
            cursor: 0,
        }
    }

    pub fn waypoints(&self) -> &[Vec2] {
        &self.waypoints
    }

    pub fn current_waypoint(&self) -> Option<Vec2> {
        self.waypoints.get(self.cursor).copied()
    }

    pub fn advance(&mut self) -> Option<Vec2> {
        let reached = self.current_waypoint()?;
        self.cursor += 1;
        Some(reached)
    }

    pub fn reached_count(&self) -> usize {
        self.cursor
    }

    pub fn is_complete(&self) -> bool {
        self.cursor >= self.waypoints.len()
    }

    pub fn final_waypoint(&self) -> Option<Vec2> {
        self.waypoints.last().copied()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeekProgress {
    Moving,
    Arrived,
}

#[derive(Clone, Debug)]
pub struct SeekSequence {
    peer_id: String,
    path: SeekPath,
    leg_secs: f32,
    leg_elapsed_secs: f32,
    leg_start: Vec2,
    focal: Vec2,
}

impl SeekSequence {
    pub fn new(peer_id: impl Into<String>, target: Vec2) -> Self {
        Self {
            peer_id: peer_id.into(),
            path: SeekPath::toward(target),
            leg_secs: SEEK_LEG_SECS,
            leg_elapsed_secs: 0.0,
            leg_start: Vec2::ZERO,
            focal: Vec2::ZERO,
        }
    }

    pub fn peer_id(&self) -> &str {
        &self.peer_id
    }

    pub fn target(&self) -> Vec2 {
        self.path.final_waypoint().unwrap_or(Vec2::ZERO)
    }

    pub fn path(&self) -> &SeekPath {
        &self.path
    }

    pub fn focal_point(&self) -> Vec2 {
        self.focal
    }

    pub fn tick(&mut self, dt: f32) -> SeekProgress {
        let mut remaining = if dt.is_finite() { dt.max(0.0) } else { 0.0 };

        loop {
            let Some(goal) = self.path.current_waypoint() else {
                return SeekProgress::Arrived;
            };

            let leg_left = self.leg_secs - self.leg_elapsed_secs;
            if remaining < leg_left {
                self.leg_elapsed_secs += remaining;
                let t = ease_in_out(self.leg_elapsed_secs / self.leg_secs);
                self.focal = self.leg_start + (goal - self.leg_start) * t;
                return SeekProgress::Moving;
            }

            remaining -= leg_left.max(0.0);
            self.focal = goal;
            self.leg_start = goal;
            self.leg_elapsed_secs = 0.0;
            self.path.advance();
            if self.path.is_complete() {
                return SeekProgress::Arrived;
            }
        }
    }
}
