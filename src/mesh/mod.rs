mod generate;
mod matching;
mod peer;
mod prefs;
mod values;

pub use generate::{DEFAULT_PEER_COUNT, MAX_RADIUS, MIN_RADIUS};
pub use matching::{
    MatchedPeer, ViewMode, best_full_match, match_count, search_peers, view_mode, visible_peers,
};
pub use peer::{ConnectionStatus, Peer, PeerField};
#[cfg(test)]
pub use peer::PolarSeed;
#[cfg(test)]
pub use prefs::MemoryStore;
pub use prefs::{JsonFileStore, PreferenceStore, Preferences};
pub use values::{CORE_VALUES, MAX_USER_VALUES, UserValueSet, ValueDraft};
