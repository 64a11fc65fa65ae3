use eframe::egui::{Context, Pos2};

use crate::mesh::ValueDraft;
use crate::radar::{NavigationIntent, RadarSession};

mod radar;
mod render_utils;
mod ui;

pub struct MeshRadarApp {
    model: Box<ViewModel>,
}

struct ViewModel {
    session: RadarSession,
    value_draft: Option<ValueDraft>,
    conversation_peer: Option<String>,
    peer_tab: PeerTab,
    search: String,
    elapsed_secs: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PeerTab {
    Messages,
    Connections,
    Discover,
}

impl PeerTab {
    const ALL: [Self; 3] = [Self::Messages, Self::Connections, Self::Discover];

    fn label(self) -> &'static str {
        match self {
            Self::Messages => "Messages",
            Self::Connections => "Connections",
            Self::Discover => "Discover",
        }
    }
}

struct RadarMarker {
    id: String,
    name: String,
    distance: u32,
    screen_pos: Pos2,
    radius: f32,
    match_count: usize,
    full_match: bool,
    selected: bool,
    highlighted: bool,
    opacity: f32,
}

impl MeshRadarApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: RadarSession) -> Self {
        Self {
            model: Box::new(ViewModel::new(session)),
        }
    }
}

impl ViewModel {
    fn new(session: RadarSession) -> Self {
        Self {
            session,
            value_draft: None,
            conversation_peer: None,
            peer_tab: PeerTab::Messages,
            search: String::new(),
            elapsed_secs: 0.0,
        }
    }

    fn handle_intents(&mut self) {
        for intent in self.session.drain_intents() {
            match intent {
                NavigationIntent::OpenValueSelection => {
                    if self.value_draft.is_none() {
                        self.value_draft =
                            Some(ValueDraft::from_current(self.session.user_values()));
                    }
                }
                NavigationIntent::OpenPeer(id) => {
                    self.conversation_peer = Some(id);
                }
            }
        }
    }
}

impl eframe::App for MeshRadarApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.model.show(ctx);
    }
}
