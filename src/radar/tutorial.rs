use super::clock::Delay;

pub const TUTORIAL_STEPS: u8 = 3;
pub const TUTORIAL_DELAY_SECS: f32 = 0.5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TutorialPhase {
    Hidden,
    Pending,
    Step(u8),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TutorialEvent {
    Shown,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TutorialCard {
    pub title: &'static str,
    pub body: &'static str,
    pub button: &'static str,
}

const CARDS: [TutorialCard; TUTORIAL_STEPS as usize] = [
    TutorialCard {
        title: "Welcome to the Radar!",
        body: "Drag and pan around to explore peers in your decentralized network",
        button: "Next",
    },
    TutorialCard {
        title: "Tap on Peers",
        body: "Tap any peer dot to view their info and auto-center on them",
        button: "Next",
    },
    TutorialCard {
        title: "Discover by Values",
        body: "Use the search tags above to filter peers by shared values and interests",
        button: "Get Started",
    },
];

#[derive(Clone, Debug)]
pub struct Tutorial {
    phase: TutorialPhase,
    delay: Option<Delay>,
    seen: bool,
    mounted: bool,
}

impl Tutorial {
    pub fn new(seen: bool) -> Self {
        Self {
            phase: TutorialPhase::Hidden,
            delay: None,
            seen,
            mounted: false,
        }
    }

    pub fn on_mount(&mut self) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        if !self.seen {
            self.phase = TutorialPhase::Pending;
            self.delay = Some(Delay::new(TUTORIAL_DELAY_SECS));
        }
    }

    pub fn tick(&mut self, dt: f32) -> Option<TutorialEvent> {
        if self.phase != TutorialPhase::Pending {
            return None;
        }

        let elapsed = self.delay.as_mut().is_none_or(|delay| delay.tick(dt));
        if !elapsed {
            return None;
        }

        self.delay = None;
        self.phase = TutorialPhase::Step(0);
        Some(TutorialEvent::Shown)
    }

    pub fn advance(&mut self) -> Option<TutorialEvent> {
        let TutorialPhase::Step(step) = self.phase else {
            return None;
        };

        if step + 1 < TUTORIAL_STEPS {
            self.phase = TutorialPhase::Step(step + 1);
            return None;
        }

        self.phase = TutorialPhase::Hidden;
        self.seen = true;
        Some(TutorialEvent::Completed)
    }

    #[cfg(test)]
    pub fn phase(&self) -> TutorialPhase {
        self.phase
    }

    pub fn step(&self) -> Option<u8> {
        match self.phase {
            TutorialPhase::Step(step) => Some(step),
            _ => None,
        }
    }

    /// While a card is up the overlay owns pointer input.
    pub fn is_visible(&self) -> bool {
        self.step().is_some()
    }

    #[cfg(test)]
    pub fn seen(&self) -> bool {
        self.seen
    }

    pub fn card(&self) -> Option<TutorialCard> {
        self.step().and_then(|step| CARDS.get(step as usize).copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shown() -> Tutorial {
        let mut tutorial = Tutorial::new(false);
        tutorial.on_mount();
        assert_eq!(tutorial.tick(TUTORIAL_DELAY_SECS), Some(TutorialEvent::Shown));
        tutorial
    }

    #[test]
    fn seen_tutorial_stays_hidden() {
        let mut tutorial = Tutorial::new(true);
        tutorial.on_mount();
        assert_eq!(tutorial.phase(), TutorialPhase::Hidden);
        assert_eq!(tutorial.tick(5.0), None);
        assert!(!tutorial.is_visible());
    }

    #[test]
    fn unseen_tutorial_waits_for_delay() {
        let mut tutorial = Tutorial::new(false);
        tutorial.on_mount();
        assert_eq!(tutorial.phase(), TutorialPhase::Pending);
        assert!(!tutorial.is_visible());
        assert_eq!(tutorial.tick(0.25), None);
        assert_eq!(tutorial.tick(0.25), Some(TutorialEvent::Shown));
        assert_eq!(tutorial.phase(), TutorialPhase::Step(0));
        assert_eq!(tutorial.card().map(|card| card.button), Some("Next"));
    }

    #[test]
    fn three_advances_complete_and_fourth_is_noop() {
        let mut tutorial = shown();
        assert_eq!(tutorial.advance(), None);
        assert_eq!(tutorial.phase(), TutorialPhase::Step(1));
        assert_eq!(tutorial.advance(), None);
        assert_eq!(tutorial.card().map(|card| card.button), Some("Get Started"));
        assert_eq!(tutorial.advance(), Some(TutorialEvent::Completed));
        assert_eq!(tutorial.phase(), TutorialPhase::Hidden);
        assert!(tutorial.seen());

        assert_eq!(tutorial.advance(), None);
        assert_eq!(tutorial.phase(), TutorialPhase::Hidden);
    }

    #[test]
    fn advance_before_shown_does_nothing() {
        let mut tutorial = Tutorial::new(false);
        tutorial.on_mount();
        assert_eq!(tutorial.advance(), None);
        assert_eq!(tutorial.phase(), TutorialPhase::Pending);
    }

    #[test]
    fn second_mount_does_not_rearm() {
        let mut tutorial = shown();
        tutorial.advance();
        tutorial.advance();
        tutorial.advance();
        tutorial.on_mount();
        assert_eq!(tutorial.phase(), TutorialPhase::Hidden);
    }
}
