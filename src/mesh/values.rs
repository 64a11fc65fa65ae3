pub const MAX_USER_VALUES: usize = 3;

pub const CORE_VALUES: [&str; 16] = [
    "Honesty",
    "Creativity",
    "Growth",
    "Compassion",
    "Integrity",
    "Freedom",
    "Innovation",
    "Community",
    "Adventure",
    "Balance",
    "Curiosity",
    "Courage",
    "Respect",
    "Sustainability",
    "Learning",
    "Family",
];

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserValueSet {
    values: Vec<String>,
}

impl UserValueSet {
    /// Rebuilds a set from stored data. Blank and repeated entries are dropped
    /// and anything past the third value is ignored.
    pub fn from_persisted(values: Vec<String>) -> Self {
        let mut sanitized: Vec<String> = Vec::with_capacity(MAX_USER_VALUES);
        for value in values {
            let value = value.trim();
            if value.is_empty() || sanitized.iter().any(|existing| existing == value) {
                continue;
            }
            sanitized.push(value.to_owned());
            if sanitized.len() == MAX_USER_VALUES {
                break;
            }
        }

        Self { values: sanitized }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.values.clone()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.values.len() == MAX_USER_VALUES
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|existing| existing == value)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValueDraft {
    selected: Vec<String>,
}

impl ValueDraft {
    pub fn from_current(current: &UserValueSet) -> Self {
        Self {
            selected: current.to_vec(),
        }
    }

    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(position) = self.selected.iter().position(|existing| existing == value) {
            self.selected.remove(position);
            return true;
        }

        if self.selected.len() >= MAX_USER_VALUES {
            return false;
        }

        self.selected.push(value.to_owned());
        true
    }

    pub fn contains(&self, value: &str) -> bool {
        self.selected.iter().any(|existing| existing == value)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn remaining(&self) -> usize {
        MAX_USER_VALUES.saturating_sub(self.selected.len())
    }

    pub fn is_complete(&self) -> bool {
        self.selected.len() == MAX_USER_VALUES
    }

    pub fn confirm(&self) -> Option<UserValueSet> {
        self.is_complete().then(|| UserValueSet {
            values: self.selected.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_owned()).collect()
    }

    #[test]
    fn persisted_values_are_deduplicated_and_capped() {
        let set = UserValueSet::from_persisted(owned(&[
            "Growth", " ", "Growth", "Honesty", "Courage", "Family",
        ]));

        assert_eq!(set.as_slice(), owned(&["Growth", "Honesty", "Courage"]).as_slice());
        assert!(set.is_complete());
    }

    #[test]
    fn empty_store_gives_empty_set() {
        let set = UserValueSet::from_persisted(Vec::new());
        assert!(set.is_empty());
        assert!(!set.is_complete());
    }

    #[test]
    fn draft_ignores_fourth_value_and_toggles_off() {
        let mut draft = ValueDraft::default();
        assert!(draft.toggle("Honesty"));
        assert!(draft.toggle("Creativity"));
        assert!(draft.toggle("Growth"));
        assert!(!draft.toggle("Family"));
        assert_eq!(draft.remaining(), 0);

        assert!(draft.toggle("Creativity"));
        assert!(!draft.contains("Creativity"));
        assert_eq!(draft.remaining(), 1);
    }

    #[test]
    fn only_full_draft_confirms() {
        let mut draft = ValueDraft::default();
        draft.toggle("Honesty");
        draft.toggle("Growth");
        assert!(draft.confirm().is_none());

        draft.toggle("Courage");
        let confirmed = draft.confirm().expect("three values selected");
        assert_eq!(confirmed.as_slice(), owned(&["Honesty", "Growth", "Courage"]).as_slice());
    }
}
