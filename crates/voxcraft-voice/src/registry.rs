//! In-memory voice registry.
//!
//! One registry is constructed per session and passed by reference to
//! whatever needs to look up or resolve voices. It owns the immutable system
//! catalog and the clones created during the session.

use crate::catalog::{system_catalog, VoiceCategory, VoiceProfile};
use crate::error::{VoiceError, VoiceResult};
use crate::resolver::{resolve, resolve_index};
use crate::session::TrainingSample;

/// System catalog plus session-scoped clones.
#[derive(Debug, Clone)]
pub struct VoiceRegistry {
    system: Vec<VoiceProfile>,
    cloned: Vec<VoiceProfile>,
    next_clone: u64,
}

impl Default for VoiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl VoiceRegistry {
    /// Creates a registry seeded with the built-in catalog.
    pub fn new() -> Self {
        Self {
            system: system_catalog(),
            cloned: Vec::new(),
            next_clone: 1,
        }
    }

    /// Creates a registry with a custom system catalog.
    ///
    /// # Errors
    /// `EmptyCatalog` if `system` is empty; clones could not be resolved.
    pub fn with_catalog(system: Vec<VoiceProfile>) -> VoiceResult<Self> {
        if system.is_empty() {
            return Err(VoiceError::EmptyCatalog);
        }
        let system = system
            .into_iter()
            .map(|mut voice| {
                voice.category = VoiceCategory::System;
                voice
            })
            .collect();
        Ok(Self {
            system,
            cloned: Vec::new(),
            next_clone: 1,
        })
    }

    /// Creates a cloned profile from a name and captured samples.
    ///
    /// The name is trimmed. The samples are only checked for presence; they
    /// are not stored and do not influence resolution.
    ///
    /// # Errors
    /// `EmptyProfileName` for a blank name, `NoSamples` for an empty list.
    pub fn create_profile(&mut self, name: &str, samples: &[TrainingSample]) -> VoiceResult<VoiceProfile> {
        let name = display_name(name)?;
        if samples.is_empty() {
            return Err(VoiceError::NoSamples);
        }

        let id = format!("cloned-{}", self.next_clone);
        self.next_clone += 1;

        let sample_tag = match samples.len() {
            1 => "1 sample".to_string(),
            n => format!("{} samples", n),
        };
        let profile = VoiceProfile::cloned(id, name, vec!["custom".to_string(), sample_tag]);

        tracing::info!(
            id = %profile.id,
            name = %profile.display_name,
            resolves_to = self.resolve(&profile),
            "created voice profile"
        );
        self.cloned.push(profile.clone());
        Ok(profile)
    }

    /// Looks up a profile by id.
    pub fn get(&self, id: &str) -> Option<&VoiceProfile> {
        self.all().find(|voice| voice.id == id)
    }

    /// Removes a cloned profile. System voices cannot be removed.
    pub fn remove(&mut self, id: &str) -> Option<VoiceProfile> {
        let index = self.cloned.iter().position(|voice| voice.id == id)?;
        Some(self.cloned.remove(index))
    }

    /// The system catalog in order.
    pub fn system_voices(&self) -> &[VoiceProfile] {
        &self.system
    }

    /// Clones in creation order.
    pub fn cloned_voices(&self) -> &[VoiceProfile] {
        &self.cloned
    }

    /// System voices followed by clones.
    pub fn all(&self) -> impl Iterator<Item = &VoiceProfile> {
        self.system.iter().chain(self.cloned.iter())
    }

    /// Resolves a profile to a system voice id.
    pub fn resolve<'a>(&'a self, voice: &'a VoiceProfile) -> &'a str {
        // The catalog is never empty, so resolution is total.
        resolve(voice, &self.system).unwrap_or(voice.id.as_str())
    }

    /// Resolves a registered profile by id.
    pub fn resolve_id(&self, id: &str) -> Option<&str> {
        self.get(id).map(|voice| self.resolve(voice))
    }

    /// Resolves a display name to the voice a clone created under it gets.
    ///
    /// The name is trimmed exactly as in [`create_profile`](Self::create_profile).
    ///
    /// # Errors
    /// `EmptyProfileName` for a blank name, which could never be a clone.
    pub fn resolve_name(&self, name: &str) -> VoiceResult<&str> {
        let name = display_name(name)?;
        let index = resolve_index(name, self.system.len()).unwrap_or(0);
        Ok(&self.system[index].id)
    }
}

/// Trims a user-supplied profile name, rejecting blank ones.
fn display_name(name: &str) -> VoiceResult<&str> {
    match name.trim() {
        "" => Err(VoiceError::EmptyProfileName),
        trimmed => Ok(trimmed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::TrainingSample;
    use pretty_assertions::assert_eq;

    fn sample() -> TrainingSample {
        TrainingSample::uploaded("take.wav", vec![0u8; 16])
    }

    #[test]
    fn test_new_seeds_catalog() {
        let registry = VoiceRegistry::new();
        assert_eq!(registry.system_voices().len(), 5);
        assert!(registry.cloned_voices().is_empty());
    }

    #[test]
    fn test_create_profile_requires_name() {
        let mut registry = VoiceRegistry::new();
        let err = registry.create_profile("", &[sample()]).unwrap_err();
        assert!(matches!(err, VoiceError::EmptyProfileName));
        let err = registry.create_profile("   ", &[sample()]).unwrap_err();
        assert!(matches!(err, VoiceError::EmptyProfileName));
    }

    #[test]
    fn test_create_profile_requires_samples() {
        let mut registry = VoiceRegistry::new();
        let err = registry.create_profile("X", &[]).unwrap_err();
        assert!(matches!(err, VoiceError::NoSamples));
        assert!(registry.cloned_voices().is_empty());
    }

    #[test]
    fn test_create_profile_success() {
        let mut registry = VoiceRegistry::new();
        let profile = registry.create_profile("  X ", &[sample(), sample()]).unwrap();

        assert_eq!(profile.id, "cloned-1");
        assert_eq!(profile.display_name, "X");
        assert_eq!(profile.category, VoiceCategory::Cloned);
        assert_eq!(profile.tags, vec!["custom".to_string(), "2 samples".to_string()]);
        assert_eq!(registry.get("cloned-1"), Some(&profile));
    }

    #[test]
    fn test_ids_are_sequential() {
        let mut registry = VoiceRegistry::new();
        let a = registry.create_profile("A", &[sample()]).unwrap();
        let b = registry.create_profile("B", &[sample()]).unwrap();
        assert_eq!(a.id, "cloned-1");
        assert_eq!(b.id, "cloned-2");
        assert_eq!(registry.all().count(), 7);
    }

    #[test]
    fn test_identical_names_resolve_identically() {
        let mut registry = VoiceRegistry::new();
        let a = registry.create_profile("Ava", &[sample()]).unwrap();
        let b = registry.create_profile("Ava", &[sample(), sample(), sample()]).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(registry.resolve(&a), "Puck");
        assert_eq!(registry.resolve(&b), "Puck");
    }

    #[test]
    fn test_resolve_id() {
        let mut registry = VoiceRegistry::new();
        registry.create_profile("James Personal Voice", &[sample()]).unwrap();
        assert_eq!(registry.resolve_id("cloned-1"), Some("Charon"));
        assert_eq!(registry.resolve_id("Zephyr"), Some("Zephyr"));
        assert_eq!(registry.resolve_id("missing"), None);
    }

    #[test]
    fn test_resolve_name() {
        let registry = VoiceRegistry::new();
        assert_eq!(registry.resolve_name("My Voice").unwrap(), "Zephyr");
    }

    #[test]
    fn test_resolve_name_matches_created_profile() {
        let mut registry = VoiceRegistry::new();
        for name in [" Ava", "Ava\t", "  Grandma Rose  ", "\nNarrator"] {
            let profile = registry.create_profile(name, &[sample()]).unwrap();
            assert_eq!(registry.resolve_name(name).unwrap(), registry.resolve(&profile));
        }
        assert_eq!(registry.resolve_name(" Ava").unwrap(), "Puck");
    }

    #[test]
    fn test_resolve_name_rejects_blank() {
        let registry = VoiceRegistry::new();
        assert!(matches!(
            registry.resolve_name("").unwrap_err(),
            VoiceError::EmptyProfileName
        ));
        assert!(matches!(
            registry.resolve_name(" \t ").unwrap_err(),
            VoiceError::EmptyProfileName
        ));
    }

    #[test]
    fn test_remove_only_clones() {
        let mut registry = VoiceRegistry::new();
        registry.create_profile("Ava", &[sample()]).unwrap();
        assert!(registry.remove("Puck").is_none());
        assert!(registry.remove("cloned-1").is_some());
        assert!(registry.get("cloned-1").is_none());
    }

    #[test]
    fn test_with_catalog() {
        assert!(matches!(
            VoiceRegistry::with_catalog(Vec::new()).unwrap_err(),
            VoiceError::EmptyCatalog
        ));

        let catalog = vec![
            VoiceProfile::system("Alpha", &[]),
            VoiceProfile::system("Beta", &[]),
            VoiceProfile::system("Gamma", &[]),
        ];
        let registry = VoiceRegistry::with_catalog(catalog).unwrap();
        // 66220 % 3 == 1
        assert_eq!(registry.resolve_name("Ava").unwrap(), "Beta");
    }
}
