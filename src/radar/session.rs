use std::collections::VecDeque;
use std::time::SystemTime;

use eframe::egui::Vec2;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use crate::mesh::{
    MatchedPeer, Peer, PeerField, PreferenceStore, Preferences, UserValueSet, ViewMode,
    best_full_match, view_mode, visible_peers,
};

use super::clock::Interval;
use super::seek::SeekSequence;
use super::tutorial::{Tutorial, TutorialEvent};
use super::viewport::{DriverKind, ViewportController, ViewportEvent};

pub const SIGNAL_REFRESH_SECS: f32 = 3.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationIntent {
    OpenPeer(String),
    OpenValueSelection,
}

pub struct RadarSession {
    field: PeerField,
    user_values: UserValueSet,
    exploring: bool,
    tag_filters: Vec<String>,
    selected: Option<String>,
    viewport: ViewportController,
    tutorial: Tutorial,
    signal_refresh: Interval,
    rng: StdRng,
    prefs: Preferences,
    store: Box<dyn PreferenceStore>,
    intents: VecDeque<NavigationIntent>,
}

impl RadarSession {
    pub fn new(field: PeerField, store: Box<dyn PreferenceStore>, rng: StdRng) -> Self {
        let prefs = store.load().unwrap_or_else(|error| {
            warn!("failed to load preferences, starting fresh: {error:#}");
            Preferences::default()
        });
        let user_values = UserValueSet::from_persisted(prefs.user_values.clone());

        let mut tutorial = Tutorial::new(prefs.has_seen_radar_tutorial);
        tutorial.on_mount();

        let mut intents = VecDeque::new();
        if user_values.is_empty() {
            intents.push_back(NavigationIntent::OpenValueSelection);
        }

        info!(
            peers = field.len(),
            values = user_values.len(),
            tutorial_seen = prefs.has_seen_radar_tutorial,
            "radar session ready"
        );

        Self {
            field,
            user_values,
            exploring: false,
            tag_filters: Vec::new(),
            selected: None,
            viewport: ViewportController::new(),
            tutorial,
            signal_refresh: Interval::new(SIGNAL_REFRESH_SECS),
            rng,
            prefs,
            store,
            intents,
        }
    }

    pub fn field(&self) -> &PeerField {
        &self.field
    }

    pub fn user_values(&self) -> &UserValueSet {
        &self.user_values
    }

    pub fn is_exploring(&self) -> bool {
        self.exploring
    }

    pub fn tag_filters(&self) -> &[String] {
        &self.tag_filters
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn selected_peer(&self) -> Option<&Peer> {
        self.selected.as_deref().and_then(|id| self.field.get(id))
    }

    pub fn viewport(&self) -> &ViewportController {
        &self.viewport
    }

    pub fn tutorial(&self) -> &Tutorial {
        &self.tutorial
    }

    pub fn preferences(&self) -> &Preferences {
        &self.prefs
    }

    pub fn visible(&self) -> Vec<MatchedPeer<'_>> {
        visible_peers(
            &self.field,
            &self.user_values,
            self.exploring,
            &self.tag_filters,
        )
    }

    pub fn view_mode(&self) -> ViewMode {
        view_mode(&self.user_values, self.exploring)
    }

    pub fn drain_intents(&mut self) -> Vec<NavigationIntent> {
        self.intents.drain(..).collect()
    }

    pub fn is_animating(&self) -> bool {
        self.viewport.is_animating()
    }

    fn persist(&mut self) {
        if let Err(error) = self.store.save(&self.prefs) {
            warn!("failed to persist preferences: {error:#}");
        }
    }

    fn start_seek(&mut self) {
        let Some(target) = best_full_match(&self.field, &self.user_values) else {
            debug!("no peer shares all three values; exploring without a seek");
            return;
        };

        info!(peer = %target.id, name = %target.name, "seeking best full match");
        self.viewport
            .start_seek(SeekSequence::new(target.id.clone(), target.position()));
    }

    fn cancel_seek(&mut self, reason: &str) {
        if self.viewport.driver_kind() == DriverKind::Seeking {
            self.viewport.supersede();
            debug!(reason, "seek cancelled");
        }
    }

    /// Exploring needs a complete value set; without one the value picker is
    /// requested instead.
    pub fn toggle_exploring(&mut self) {
        if !self.user_values.is_complete() {
            self.intents.push_back(NavigationIntent::OpenValueSelection);
            return;
        }

        self.exploring = !self.exploring;
        info!(exploring = self.exploring, "exploring mode toggled");
        if self.exploring {
            self.start_seek();
        } else {
            self.cancel_seek("left exploring mode");
        }
    }

    pub fn request_value_selection(&mut self) {
        self.intents.push_back(NavigationIntent::OpenValueSelection);
    }

    pub fn confirm_values(&mut self, values: UserValueSet) {
        self.cancel_seek("value set changed");

        self.user_values = values;
        self.prefs.user_values = self.user_values.to_vec();
        self.prefs.has_completed_onboarding = true;
        self.persist();
        info!(values = ?self.user_values.as_slice(), "user values confirmed");

        if self.exploring && self.user_values.is_complete() {
            self.start_seek();
        }
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        if let Some(position) = self.tag_filters.iter().position(|existing| existing == tag) {
            self.tag_filters.remove(position);
        } else {
            self.tag_filters.push(tag.to_owned());
        }
    }

    pub fn clear_tags(&mut self) {
        self.tag_filters.clear();
    }

    pub fn tap_peer(&mut self, id: &str) {
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
            return;
        }

        let Some(position) = self.field.get(id).map(Peer::position) else {
            return;
        };

        self.cancel_seek("peer selected manually");
        self.selected = Some(id.to_owned());
        self.viewport.snap_to(position);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn open_peer(&mut self, id: &str) {
        if self.field.get(id).is_some() {
            self.intents
                .push_back(NavigationIntent::OpenPeer(id.to_owned()));
        }
    }

    pub fn advance_tutorial(&mut self) {
        if self.tutorial.advance() == Some(TutorialEvent::Completed) {
            self.prefs.has_seen_radar_tutorial = true;
            self.persist();
            info!("radar tutorial completed");
        }
    }

    pub fn reset_tutorial(&mut self) {
        self.prefs.has_seen_radar_tutorial = false;
        self.persist();
        self.tutorial = Tutorial::new(false);
        self.tutorial.on_mount();
    }

    pub fn drag_start(&mut self) {
        if self.tutorial.is_visible() {
            return;
        }
        if self.viewport.driver_kind() == DriverKind::Seeking {
            debug!("seek cancelled by drag");
        }
        self.viewport.on_drag_start();
    }

    pub fn drag_move(&mut self, total_delta: Vec2) {
        if self.tutorial.is_visible() {
            return;
        }
        self.viewport.on_drag_move(total_delta.x, total_delta.y);
    }

    pub fn drag_release(&mut self, velocity_per_ms: Vec2) {
        if self.viewport.driver_kind() != DriverKind::Dragging {
            return;
        }
        self.viewport
            .on_drag_release(velocity_per_ms.x, velocity_per_ms.y);
    }

    pub fn tick(&mut self, dt: f32) {
        if self.signal_refresh.tick(dt) > 0 {
            self.field.refresh_signals(&mut self.rng, SystemTime::now());
        }

        if self.tutorial.tick(dt) == Some(TutorialEvent::Shown) {
            debug!("radar tutorial shown");
        }

        if let Some(ViewportEvent::SeekArrived { peer_id, .. }) = self.viewport.tick(dt) {
            info!(peer = %peer_id, "seek arrived");
            self.selected = Some(peer_id);
        }
    }
}
