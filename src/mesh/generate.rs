use std::collections::HashSet;
use std::f32::consts::TAU;
use std::time::{Duration, SystemTime};

use rand::Rng;
use rand::seq::index::sample;

use super::peer::{ConnectionStatus, Conversation, Peer, PeerField, PolarSeed};
use super::values::CORE_VALUES;

pub const MIN_RADIUS: f32 = 100.0;
pub const MAX_RADIUS: f32 = 600.0;
pub const DEFAULT_PEER_COUNT: usize = 150;

const CONNECTED_PEERS: usize = 5;
const PENDING_PEERS: usize = 5;

const NAMES: [&str; 64] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Iris", "Jack", "Kate",
    "Leo", "Maya", "Noah", "Olivia", "Paul", "Quinn", "Rose", "Sam", "Tara", "Uma", "Victor",
    "Wendy", "Xavier", "Yara", "Zane", "Aria", "Blake", "Chloe", "Dylan", "Emma", "Felix", "Gia",
    "Hugo", "Ivy", "James", "Kira", "Liam", "Mia", "Nora", "Oscar", "Piper", "Quincy", "Ruby",
    "Sage", "Tyler", "Violet", "Will", "Zara", "Aiden", "Bella", "Cole", "Daisy", "Eli", "Fiona",
    "Gabe", "Hana", "Ian", "Julia", "Kyle", "Luna", "Mason", "Nina", "Owen",
];

const TITLES: [&str; 20] = [
    "Software Engineer",
    "Product Manager",
    "UX Designer",
    "Data Scientist",
    "Blockchain Developer",
    "Marketing Director",
    "Sales Executive",
    "CTO",
    "Founder & CEO",
    "Business Analyst",
    "DevOps Engineer",
    "Content Creator",
    "Financial Advisor",
    "HR Manager",
    "Legal Consultant",
    "Strategy Lead",
    "Growth Hacker",
    "AI Researcher",
    "Security Specialist",
    "Creative Director",
];

const COMPANIES: [&str; 16] = [
    "TechCorp",
    "Innovate Labs",
    "Digital Ventures",
    "FutureStack",
    "MetaMesh",
    "Decentralize Inc",
    "CloudNine",
    "DataFlow",
    "WebWeave",
    "CryptoConnect",
    "NeuralNet Co",
    "BlockHub",
    "Freelancer",
    "StartupX",
    "Quantum Labs",
    "SocialMesh",
];

const SAMPLE_MESSAGES: [&str; 6] = [
    "Hey! Saw we share similar interests. Would love to connect!",
    "Great to meet someone in the mesh network",
    "Looking forward to collaborating",
    "Interesting profile! Let's chat sometime",
    "Thanks for connecting!",
    "Would love to discuss opportunities",
];

const PALETTE: [[u8; 3]; 30] = [
    [0xFF, 0x6B, 0x6B],
    [0x4E, 0xCD, 0xC4],
    [0x95, 0xE1, 0xD3],
    [0xF3, 0x81, 0x81],
    [0xFF, 0xD9, 0x3D],
    [0x6B, 0xCF, 0x7F],
    [0xA8, 0xE6, 0xCF],
    [0xFF, 0xB6, 0xB9],
    [0xFE, 0xC8, 0xD8],
    [0x95, 0x7D, 0xAD],
    [0xD2, 0x91, 0xBC],
    [0xF9, 0xA8, 0x26],
    [0x5D, 0xAD, 0xE2],
    [0x58, 0xD6, 0x8D],
    [0xF4, 0xD0, 0x3F],
    [0xEC, 0x70, 0x63],
    [0xAF, 0x7A, 0xC5],
    [0x54, 0x99, 0xC7],
    [0x52, 0xBE, 0x80],
    [0xF8, 0xB7, 0x39],
    [0xEB, 0x98, 0x4E],
    [0x85, 0x92, 0x9E],
    [0x45, 0xB7, 0xD1],
    [0x96, 0xCE, 0xB4],
    [0xFF, 0xEA, 0xA7],
    [0xDF, 0xE6, 0xE9],
    [0xFF, 0x76, 0x75],
    [0x6C, 0x5C, 0xE7],
    [0xFD, 0xCB, 0x6E],
    [0x00, 0xB8, 0x94],
];

pub(super) fn claim_unique_name(base: &str, used: &mut HashSet<String>) -> String {
    let mut candidate = base.to_owned();
    let mut counter = 1usize;
    while used.contains(&candidate) {
        candidate = format!("{base}{counter}");
        counter += 1;
    }
    used.insert(candidate.clone());
    candidate
}

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

fn sample_values<R: Rng + ?Sized>(rng: &mut R) -> [String; 3] {
    let picked = sample(rng, CORE_VALUES.len(), 3);
    [
        CORE_VALUES[picked.index(0)].to_owned(),
        CORE_VALUES[picked.index(1)].to_owned(),
        CORE_VALUES[picked.index(2)].to_owned(),
    ]
}

fn sample_conversation<R: Rng + ?Sized>(rng: &mut R, now: SystemTime) -> Option<Conversation> {
    if rng.r#gen::<f32>() <= 0.3 {
        return None;
    }

    let age = Duration::from_secs_f64(rng.gen_range(0.0..86_400.0));
    let unread_count = if rng.r#gen::<f32>() > 0.5 {
        rng.gen_range(1..=5)
    } else {
        0
    };

    Some(Conversation {
        last_message: pick(rng, &SAMPLE_MESSAGES).to_owned(),
        last_message_at: now.checked_sub(age).unwrap_or(now),
        unread_count,
    })
}

impl PeerField {
    pub fn generate<R: Rng + ?Sized>(count: usize, rng: &mut R, now: SystemTime) -> Self {
        let mut used_names = HashSet::with_capacity(count);
        let mut peers = Vec::with_capacity(count);

        for index in 0..count {
            let name = claim_unique_name(pick(rng, &NAMES), &mut used_names);
            let seed = PolarSeed {
                angle: rng.gen_range(0.0..TAU),
                radius: rng.gen_range(MIN_RADIUS..MAX_RADIUS),
            };
            let values = sample_values(rng);

            let status = if index < CONNECTED_PEERS {
                ConnectionStatus::Connected
            } else if index < CONNECTED_PEERS + PENDING_PEERS {
                ConnectionStatus::Pending
            } else {
                ConnectionStatus::New
            };

            let mut peer = Peer::new(format!("peer-{}", index + 1), name, seed, values);
            peer.signal = (40.0 + rng.r#gen::<f32>() * 60.0).round();
            peer.last_seen = now;
            peer.color = PALETTE[index % PALETTE.len()];
            peer.title = pick(rng, &TITLES).to_owned();
            peer.company = pick(rng, &COMPANIES).to_owned();
            peer.connection_status = status;
            if status == ConnectionStatus::Connected {
                peer.conversation = sample_conversation(rng, now);
            }

            peers.push(peer);
        }

        // Names are already unique, so this only builds the id index.
        Self::from_peers(peers)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn field(count: usize, seed: u64) -> PeerField {
        let mut rng = StdRng::seed_from_u64(seed);
        PeerField::generate(count, &mut rng, SystemTime::UNIX_EPOCH)
    }

    #[test]
    fn names_are_unique_even_when_pool_is_exhausted() {
        let field = field(400, 11);
        let mut seen = HashSet::new();
        for peer in field.peers() {
            assert!(seen.insert(peer.name.clone()), "duplicate name {}", peer.name);
        }
        assert_eq!(seen.len(), 400);
    }

    #[test]
    fn claim_unique_name_suffixes_in_order() {
        let mut used = HashSet::new();
        assert_eq!(claim_unique_name("Leo", &mut used), "Leo");
        assert_eq!(claim_unique_name("Leo", &mut used), "Leo1");
        assert_eq!(claim_unique_name("Leo", &mut used), "Leo2");
    }

    #[test]
    fn positions_stay_inside_the_annulus() {
        for peer in field(150, 3).peers() {
            let radius = peer.position().length();
            assert!(radius >= MIN_RADIUS - 0.01, "{radius}");
            assert!(radius < MAX_RADIUS + 0.01, "{radius}");
            assert!((40.0..=100.0).contains(&peer.signal));
        }
    }

    #[test]
    fn value_triples_are_distinct_vocabulary_entries() {
        for peer in field(150, 5).peers() {
            let [a, b, c] = &peer.values;
            assert!(a != b && b != c && a != c);
            assert!(peer.values.iter().all(|value| CORE_VALUES.contains(&value.as_str())));
        }
    }

    #[test]
    fn ids_and_statuses_follow_index() {
        let field = field(12, 9);
        assert_eq!(field.peers()[0].id, "peer-1");
        assert_eq!(field.peers()[11].id, "peer-12");
        assert_eq!(field.by_status(ConnectionStatus::Connected).len(), 5);
        assert_eq!(field.by_status(ConnectionStatus::Pending).len(), 5);
        assert_eq!(field.by_status(ConnectionStatus::New).len(), 2);
        assert!(
            field
                .peers()
                .iter()
                .filter(|peer| peer.connection_status != ConnectionStatus::Connected)
                .all(|peer| peer.conversation.is_none())
        );
    }

    #[test]
    fn same_seed_reproduces_the_field() {
        let first = field(30, 42);
        let second = field(30, 42);
        for (a, b) in first.peers().iter().zip(second.peers()) {
            assert_eq!(a.name, b.name);
            assert_eq!(a.position(), b.position());
            assert_eq!(a.values, b.values);
        }
    }

    #[test]
    fn empty_field_is_allowed() {
        let field = field(0, 1);
        assert!(field.is_empty());
        assert_eq!(field.online_count(), 0);
    }
}
