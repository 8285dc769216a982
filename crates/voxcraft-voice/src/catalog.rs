//! Voice profiles and the built-in system catalog.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a voice profile comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceCategory {
    /// Built into the synthesis service.
    System,
    /// Declared by the user; maps onto a system voice.
    Cloned,
}

impl fmt::Display for VoiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoiceCategory::System => write!(f, "system"),
            VoiceCategory::Cloned => write!(f, "cloned"),
        }
    }
}

/// A named synthesis identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceProfile {
    /// Stable identifier. For system voices this is the synthesis voice name.
    pub id: String,
    /// Name shown to the user; for clones it also drives resolution.
    pub display_name: String,
    /// System or cloned.
    pub category: VoiceCategory,
    /// Descriptive labels.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl VoiceProfile {
    /// Creates a system voice whose id and display name coincide.
    pub fn system(name: &str, tags: &[&str]) -> Self {
        Self {
            id: name.to_string(),
            display_name: name.to_string(),
            category: VoiceCategory::System,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    /// Creates a cloned profile.
    pub fn cloned(id: impl Into<String>, display_name: impl Into<String>, tags: Vec<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
            category: VoiceCategory::Cloned,
            tags,
        }
    }

    /// True for system voices.
    pub fn is_system(&self) -> bool {
        self.category == VoiceCategory::System
    }
}

/// The built-in synthesis voices, in catalog order.
///
/// The order is part of the resolution contract: clone names hash to an index
/// into this list, so reordering or inserting entries remaps existing clones.
pub const SYSTEM_VOICES: &[(&str, &[&str])] = &[
    ("Puck", &["upbeat"]),
    ("Charon", &["informative"]),
    ("Kore", &["firm"]),
    ("Fenrir", &["excitable"]),
    ("Zephyr", &["bright"]),
];

/// Builds the system catalog.
pub fn system_catalog() -> Vec<VoiceProfile> {
    SYSTEM_VOICES
        .iter()
        .map(|(name, tags)| VoiceProfile::system(name, tags))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_catalog_order() {
        let ids: Vec<_> = system_catalog().into_iter().map(|v| v.id).collect();
        assert_eq!(ids, vec!["Puck", "Charon", "Kore", "Fenrir", "Zephyr"]);
    }

    #[test]
    fn test_catalog_entries_are_system() {
        assert!(system_catalog().iter().all(VoiceProfile::is_system));
    }

    #[test]
    fn test_profile_serde() {
        let profile = VoiceProfile::cloned("cloned-1", "Ava", vec!["custom".into()]);
        let json = serde_json::to_value(&profile).unwrap();
        assert_eq!(json["category"], "cloned");
        assert_eq!(json["display_name"], "Ava");
        let back: VoiceProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile);
    }
}
