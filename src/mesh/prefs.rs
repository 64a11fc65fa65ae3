use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    pub user_values: Vec<String>,
    pub has_completed_onboarding: bool,
    pub has_seen_radar_tutorial: bool,
}

/// Key-value backing for [`Preferences`]. A store with nothing saved yet
/// must load as defaults.
pub trait PreferenceStore {
    fn load(&self) -> Result<Preferences>;
    fn save(&mut self, prefs: &Preferences) -> Result<()>;
}

pub fn parse_preferences(raw: &str) -> Result<Preferences> {
    if raw.trim().is_empty() {
        return Ok(Preferences::default());
    }

    let parsed: Value = serde_json::from_str(raw).context("invalid preferences JSON")?;
    let object = parsed
        .as_object()
        .ok_or_else(|| anyhow!("preferences JSON must be an object"))?;

    let user_values = object
        .get("userValues")
        .and_then(|value| Vec::<String>::deserialize(value).ok())
        .unwrap_or_default();
    let flag = |key: &str| object.get(key).and_then(Value::as_bool).unwrap_or(false);

    Ok(Preferences {
        user_values,
        has_completed_onboarding: flag("hasCompletedOnboarding"),
        has_seen_radar_tutorial: flag("hasSeenRadarTutorial"),
    })
}

#[derive(Clone, Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for JsonFileStore {
    fn load(&self) -> Result<Preferences> {
        if !self.path.exists() {
            return Ok(Preferences::default());
        }

        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read preferences from {}", self.path.display()))?;
        parse_preferences(&raw)
            .with_context(|| format!("failed to parse preferences in {}", self.path.display()))
    }

    fn save(&mut self, prefs: &Preferences) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let raw = serde_json::to_string_pretty(prefs).context("failed to encode preferences")?;
        fs::write(&self.path, raw)
            .with_context(|| format!("failed to write preferences to {}", self.path.display()))
    }
}

#[cfg(test)]
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    prefs: Preferences,
    saves: usize,
}

#[cfg(test)]
impl MemoryStore {
    pub fn with(prefs: Preferences) -> Self {
        Self { prefs, saves: 0 }
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

#[cfg(test)]
impl PreferenceStore for MemoryStore {
    fn load(&self) -> Result<Preferences> {
        Ok(self.prefs.clone())
    }

    fn save(&mut self, prefs: &Preferences) -> Result<()> {
        self.prefs = prefs.clone();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_default_to_empty_and_false() {
        let prefs = parse_preferences(r#"{"hasSeenRadarTutorial": true}"#).expect("valid JSON");
        assert!(prefs.user_values.is_empty());
        assert!(!prefs.has_completed_onboarding);
        assert!(prefs.has_seen_radar_tutorial);

        assert_eq!(parse_preferences("").expect("empty"), Preferences::default());
    }

    #[test]
    fn malformed_key_does_not_poison_the_rest() {
        let prefs = parse_preferences(
            r#"{"userValues": "Honesty", "hasCompletedOnboarding": true, "theme": "dark"}"#,
        )
        .expect("valid JSON");
        assert!(prefs.user_values.is_empty());
        assert!(prefs.has_completed_onboarding);
    }

    #[test]
    fn non_object_is_rejected() {
        assert!(parse_preferences("[1, 2]").is_err());
        assert!(parse_preferences("{not json").is_err());
    }

    #[test]
    fn file_store_round_trips_and_tolerates_absence() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = JsonFileStore::new(dir.path().join("nested").join("prefs.json"));
        assert_eq!(store.load().expect("absent file"), Preferences::default());

        let prefs = Preferences {
            user_values: vec!["Honesty".to_owned(), "Growth".to_owned(), "Courage".to_owned()],
            has_completed_onboarding: true,
            has_seen_radar_tutorial: false,
        };
        store.save(&prefs).expect("save");

        let raw = fs::read_to_string(store.path()).expect("written");
        assert!(raw.contains("\"userValues\""));
        assert!(raw.contains("\"hasCompletedOnboarding\": true"));
        assert_eq!(store.load().expect("reload"), prefs);
    }

    #[test]
    fn memory_store_counts_saves() {
        let mut store = MemoryStore::default();
        store.save(&Preferences::default()).expect("save");
        assert_eq!(store.saves(), 1);
    }
}
