use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;

use super::peer::{Peer, PeerField};
use super::values::{MAX_USER_VALUES, UserValueSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewMode {
    Nearby,
    Matching,
}

impl ViewMode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Nearby => "nearby",
            Self::Matching => "matching",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MatchedPeer<'a> {
    pub peer: &'a Peer,
    pub match_count: usize,
}

impl MatchedPeer<'_> {
    pub fn is_full_match(&self) -> bool {
        self.match_count == MAX_USER_VALUES
    }
}

/// Size of the intersection of the two tag lists. Repeated tags on the peer
/// side are counted once.
pub fn match_count(peer_values: &[String], user_values: &[String]) -> usize {
    peer_values
        .iter()
        .enumerate()
        .filter(|&(index, value)| {
            user_values.contains(value) && !peer_values[..index].contains(value)
        })
        .count()
}

pub fn view_mode(user_values: &UserValueSet, exploring: bool) -> ViewMode {
    if exploring && user_values.is_complete() {
        ViewMode::Matching
    } else {
        ViewMode::Nearby
    }
}

/// Peers to draw for the current inputs. Matching view ranks the whole field by
/// match count (stable, so ties keep field order); nearby view keeps field
/// order. A non-empty `tag_filters` then keeps peers sharing any of the tags.
pub fn visible_peers<'a>(
    field: &'a PeerField,
    user_values: &UserValueSet,
    exploring: bool,
    tag_filters: &[String],
) -> Vec<MatchedPeer<'a>> {
    let mut peers = field
        .peers()
        .iter()
        .map(|peer| MatchedPeer {
            peer,
            match_count: match_count(&peer.values, user_values.as_slice()),
        })
        .collect::<Vec<_>>();

    if view_mode(user_values, exploring) == ViewMode::Matching {
        peers.sort_by(|a, b| b.match_count.cmp(&a.match_count));
    }

    if !tag_filters.is_empty() {
        peers.retain(|matched| matched.peer.shares_any(tag_filters));
    }

    peers
}

pub fn best_full_match<'a>(field: &'a PeerField, user_values: &UserValueSet) -> Option<&'a Peer> {
    if !user_values.is_complete() {
        return None;
    }

    field
        .peers()
        .iter()
        .find(|peer| match_count(&peer.values, user_values.as_slice()) == MAX_USER_VALUES)
}

fn fuzzy_match_score(matcher: &SkimMatcherV2, text: &str, query: &str) -> Option<i64> {
    matcher
        .fuzzy_match(text, query)
        .or_else(|| matcher.fuzzy_match(&text.to_ascii_lowercase(), &query.to_ascii_lowercase()))
}

pub fn search_peers<'a>(peers: Vec<&'a Peer>, query: &str) -> Vec<&'a Peer> {
    let query = query.trim();
    if query.is_empty() {
        return peers;
    }

    let matcher = SkimMatcherV2::default();
    peers
        .into_iter()
        .filter(|peer| {
            [peer.name.as_str(), peer.title.as_str(), peer.company.as_str()]
                .iter()
                .any(|text| fuzzy_match_score(&matcher, text, query).is_some())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::super::peer::PolarSeed;
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    fn peer(id: &str, tags: [&str; 3]) -> Peer {
        Peer::new(
            id,
            id,
            PolarSeed {
                angle: 1.0,
                radius: 250.0,
            },
            tags.map(str::to_owned),
        )
    }

    fn user(values: &[&str]) -> UserValueSet {
        UserValueSet::from_persisted(owned(values))
    }

    fn ids<'a>(peers: &[MatchedPeer<'a>]) -> Vec<&'a str> {
        peers.iter().map(|matched| matched.peer.id.as_str()).collect()
    }

    fn sample_field() -> PeerField {
        PeerField::from_peers(vec![
            peer("a", ["Family", "Freedom", "Balance"]),
            peer("b", ["Honesty", "Freedom", "Balance"]),
            peer("c", ["Growth", "Honesty", "Creativity"]),
            peer("d", ["Honesty", "Growth", "Courage"]),
            peer("e", ["Creativity", "Honesty", "Growth"]),
        ])
    }

    #[test]
    fn match_count_is_bounded_and_order_independent() {
        let peer_values = owned(&["Growth", "Honesty", "Creativity"]);
        let user_values = owned(&["Honesty", "Creativity", "Growth"]);
        assert_eq!(match_count(&peer_values, &user_values), 3);

        let mut reversed_peer = peer_values.clone();
        reversed_peer.reverse();
        let mut reversed_user = user_values.clone();
        reversed_user.reverse();
        assert_eq!(match_count(&reversed_peer, &reversed_user), 3);

        assert_eq!(match_count(&peer_values, &owned(&["Honesty"])), 1);
        assert_eq!(match_count(&peer_values, &[]), 0);
        assert_eq!(
            match_count(&owned(&["Honesty", "Honesty", "Growth"]), &owned(&["Honesty"])),
            1
        );
    }

    #[test]
    fn nearby_view_without_filters_is_identity() {
        let field = sample_field();
        let visible = visible_peers(&field, &user(&["Honesty", "Growth", "Creativity"]), false, &[]);
        assert_eq!(ids(&visible), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn matching_view_ranks_stably_by_count() {
        let field = sample_field();
        let visible = visible_peers(&field, &user(&["Honesty", "Growth", "Creativity"]), true, &[]);
        assert_eq!(ids(&visible), vec!["c", "e", "d", "b", "a"]);
        let counts = visible
            .iter()
            .map(|matched| matched.match_count)
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![3, 3, 2, 1, 0]);
        let full = visible
            .iter()
            .filter(|matched| matched.is_full_match())
            .map(|matched| matched.peer.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(full, vec!["c", "e"]);
    }

    #[test]
    fn exploring_with_incomplete_values_stays_nearby() {
        let field = sample_field();
        let values = user(&["Honesty", "Growth"]);
        assert_eq!(view_mode(&values, true), ViewMode::Nearby);
        let visible = visible_peers(&field, &values, true, &[]);
        assert_eq!(ids(&visible), vec!["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn tag_filter_uses_or_semantics_and_clears_back() {
        let field = sample_field();
        let values = user(&["Honesty", "Growth", "Creativity"]);
        let filters = owned(&["Family", "Courage"]);

        let filtered = visible_peers(&field, &values, true, &filters);
        assert_eq!(ids(&filtered), vec!["d", "a"]);
        assert!(filtered.iter().all(|matched| matched.peer.shares_any(&filters)));

        let restored = visible_peers(&field, &values, true, &[]);
        assert_eq!(ids(&restored), vec!["c", "e", "d", "b", "a"]);
    }

    #[test]
    fn best_full_match_returns_single_match() {
        let field = PeerField::from_peers(vec![
            peer("a", ["Family", "Freedom", "Balance"]),
            peer("b", ["Growth", "Honesty", "Creativity"]),
        ]);
        let found = best_full_match(&field, &user(&["Honesty", "Creativity", "Growth"]));
        assert_eq!(found.map(|peer| peer.id.as_str()), Some("b"));
    }

    #[test]
    fn best_full_match_prefers_field_order() {
        let field = sample_field();
        let found = best_full_match(&field, &user(&["Honesty", "Creativity", "Growth"]));
        assert_eq!(found.map(|peer| peer.id.as_str()), Some("c"));
    }

    #[test]
    fn best_full_match_none_without_full_overlap() {
        let field = sample_field();
        assert!(best_full_match(&field, &user(&["Honesty", "Courage", "Family"])).is_none());
        assert!(best_full_match(&field, &user(&["Honesty", "Growth"])).is_none());
        assert!(best_full_match(&PeerField::default(), &user(&["Honesty", "Growth", "Creativity"])).is_none());
    }

    #[test]
    fn empty_field_yields_empty_views() {
        let field = PeerField::default();
        let values = user(&["Honesty", "Growth", "Creativity"]);
        assert!(visible_peers(&field, &values, true, &owned(&["Honesty"])).is_empty());
        assert!(visible_peers(&field, &values, false, &[]).is_empty());
    }

    #[test]
    fn search_matches_name_title_and_company() {
        let mut alice = peer("a", ["Family", "Freedom", "Balance"]);
        alice.name = "Alice".to_owned();
        alice.company = "CloudNine".to_owned();
        let mut bob = peer("b", ["Family", "Freedom", "Balance"]);
        bob.name = "Bob".to_owned();
        bob.title = "Data Scientist".to_owned();
        let field = PeerField::from_peers(vec![alice, bob]);
        let all = field.peers().iter().collect::<Vec<_>>();

        let by_company = search_peers(all.clone(), "cloud");
        assert_eq!(by_company.len(), 1);
        assert_eq!(by_company[0].name, "Alice");

        let by_title = search_peers(all.clone(), "scientist");
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].name, "Bob");

        assert_eq!(search_peers(all, "  ").len(), 2);
    }
}
