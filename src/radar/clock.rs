fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() { dt.max(0.0) } else { 0.0 }
}

#[derive(Clone, Copy, Debug)]
pub struct Interval {
    period_secs: f32,
    accumulated_secs: f32,
}

impl Interval {
    pub fn new(period_secs: f32) -> Self {
        Self {
            period_secs: period_secs.max(f32::EPSILON),
            accumulated_secs: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) -> u32 {
        self.accumulated_secs += sanitize_dt(dt);
        let fires = (self.accumulated_secs / self.period_secs).floor();
        if fires < 1.0 {
            return 0;
        }

        self.accumulated_secs -= fires * self.period_secs;
        fires as u32
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Delay {
    remaining_secs: f32,
    fired: bool,
}

impl Delay {
    pub fn new(secs: f32) -> Self {
        Self {
            remaining_secs: secs.max(0.0),
            fired: false,
        }
    }

    pub fn tick(&mut self, dt: f32) -> bool {
        if self.fired {
            return false;
        }

        self.remaining_secs -= sanitize_dt(dt);
        if self.remaining_secs <= 0.0 {
            self.fired = true;
            return true;
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_fires_per_elapsed_period() {
        let mut interval = Interval::new(3.0);
        assert_eq!(interval.tick(1.0), 0);
        assert_eq!(interval.tick(1.5), 0);
        assert_eq!(interval.tick(0.5), 1);
        assert_eq!(interval.tick(6.5), 2);
        assert_eq!(interval.tick(2.5), 1);
    }

    #[test]
    fn interval_ignores_garbage_deltas() {
        let mut interval = Interval::new(1.0);
        assert_eq!(interval.tick(f32::NAN), 0);
        assert_eq!(interval.tick(-4.0), 0);
        assert_eq!(interval.tick(1.0), 1);
    }

    #[test]
    fn delay_fires_exactly_once() {
        let mut delay = Delay::new(0.5);
        assert!(!delay.tick(0.25));
        assert!(delay.tick(0.25));
        assert!(!delay.tick(10.0));
    }
}
