use std::collections::{HashMap, HashSet};
use std::time::SystemTime;

use eframe::egui::{Vec2, vec2};
use rand::Rng;

use super::generate::claim_unique_name;

pub const SIGNAL_FLOOR: f32 = 30.0;
pub const SIGNAL_CEILING: f32 = 100.0;
/// Largest absolute change applied to a signal by one refresh.
pub const SIGNAL_DRIFT: f32 = 5.0;
pub const ONLINE_SIGNAL: f32 = 40.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Pending,
    New,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Connected => "connected",
            Self::Pending => "pending",
            Self::New => "new",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Conversation {
    pub last_message: String,
    pub last_message_at: SystemTime,
    pub unread_count: u32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarSeed {
    pub angle: f32,
    pub radius: f32,
}

#[derive(Clone, Debug)]
pub struct Peer {
    pub id: String,
    pub name: String,
    pub distance: u32,
    pub signal: f32,
    pub last_seen: SystemTime,
    pub color: [u8; 3],
    pub values: [String; 3],
    pub title: String,
    pub company: String,
    pub connection_status: ConnectionStatus,
    pub conversation: Option<Conversation>,
    position: Vec2,
}

impl Peer {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        seed: PolarSeed,
        values: [String; 3],
    ) -> Self {
        let position = vec2(seed.angle.cos(), seed.angle.sin()) * seed.radius;

        Self {
            id: id.into(),
            name: name.into(),
            distance: seed.radius.max(0.0).round() as u32,
            signal: 70.0,
            last_seen: SystemTime::now(),
            color: [255, 255, 255],
            values,
            title: String::new(),
            company: String::new(),
            connection_status: ConnectionStatus::New,
            conversation: None,
            position,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.values.iter().any(|own| own == value)
    }

    pub fn shares_any(&self, tags: &[String]) -> bool {
        tags.iter().any(|tag| self.has_value(tag))
    }

    pub fn unread_count(&self) -> u32 {
        self.conversation
            .as_ref()
            .map_or(0, |conversation| conversation.unread_count)
    }
}

#[derive(Clone, Debug, Default)]
pub struct PeerField {
    peers: Vec<Peer>,
    index_by_id: HashMap<String, usize>,
}

impl PeerField {
    /// Wraps an externally supplied collection. Display names that collide are
    /// suffixed so every name in the field is unique.
    pub fn from_peers(mut peers: Vec<Peer>) -> Self {
        let mut used_names = HashSet::with_capacity(peers.len());
        let mut index_by_id = HashMap::with_capacity(peers.len());

        for (index, peer) in peers.iter_mut().enumerate() {
            peer.name = claim_unique_name(&peer.name, &mut used_names);
            index_by_id.entry(peer.id.clone()).or_insert(index);
        }

        Self { peers, index_by_id }
    }

    pub fn peers(&self) -> &[Peer] {
        &self.peers
    }

    pub fn len(&self) -> usize {
        self.peers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.peers.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Peer> {
        self.index_of(id).and_then(|index| self.peers.get(index))
    }

    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.index_by_id.get(id).copied()
    }

    pub fn refresh_signals<R: Rng + ?Sized>(&mut self, rng: &mut R, now: SystemTime) {
        for peer in &mut self.peers {
            let drift = rng.gen_range(-SIGNAL_DRIFT..SIGNAL_DRIFT);
            peer.signal = (peer.signal + drift).clamp(SIGNAL_FLOOR, SIGNAL_CEILING);
            peer.last_seen = now;
        }
    }

    pub fn online_count(&self) -> usize {
        self.peers
            .iter()
            .filter(|peer| peer.signal > ONLINE_SIGNAL)
            .count()
    }

    pub fn by_status(&self, status: ConnectionStatus) -> Vec<&Peer> {
        self.peers
            .iter()
            .filter(|peer| peer.connection_status == status)
            .collect()
    }

    pub fn inbox(&self) -> Vec<&Peer> {
        let mut peers = self
            .peers
            .iter()
            .filter(|peer| {
                peer.connection_status == ConnectionStatus::Connected
                    && peer.conversation.is_some()
            })
            .collect::<Vec<_>>();
        peers.sort_by(|a, b| {
            let a_time = a.conversation.as_ref().map(|c| c.last_message_at);
            let b_time = b.conversation.as_ref().map(|c| c.last_message_at);
            b_time.cmp(&a_time)
        });
        peers
    }

    pub fn unread_total(&self) -> u32 {
        self.inbox().iter().map(|peer| peer.unread_count()).sum()
    }
}
