// suite-gate-core/src/core/build.rs
// ============================================================================
// Module: Suite Gate Build Records
// Description: Per-device build metadata and versioned artifact files.
// Purpose: Provide a collision-safe artifact map for invocation setup.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`BuildInfo`] records the build artifacts delivered for one allocated
//! device: a map from artifact key to a path plus the version string recorded
//! by the build provider. Insertion is first-writer-wins; replacing an entry
//! requires an explicit remove first.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ArtifactKey;

// ============================================================================
// SECTION: Versioned File
// ============================================================================

/// A build artifact reference: an opaque path and its recorded version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionedFile {
    /// Filesystem path to the artifact. Not interpreted by the core.
    pub path: String,
    /// Version string recorded when the artifact was produced.
    pub version: String,
}

impl VersionedFile {
    /// Creates a new versioned file reference.
    #[must_use]
    pub fn new(path: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            version: version.into(),
        }
    }
}

// ============================================================================
// SECTION: Build Info
// ============================================================================

/// Build metadata for one allocated device.
///
/// # Invariants
/// - An artifact key maps to at most one file; `set_file` never overwrites.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildInfo {
    /// Build identifier reported by the build provider.
    pub build_id: String,
    /// Artifact files keyed by artifact key.
    files: BTreeMap<ArtifactKey, VersionedFile>,
    /// Free-form build attributes (branch, flavor, test tag).
    attributes: BTreeMap<String, String>,
}

impl BuildInfo {
    /// Creates an empty build record with the given build identifier.
    #[must_use]
    pub fn new(build_id: impl Into<String>) -> Self {
        Self {
            build_id: build_id.into(),
            files: BTreeMap::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Inserts an artifact file if the key is absent.
    ///
    /// Returns `false` and leaves the existing entry untouched when the key
    /// is already present. The check and the insert are a single map-entry
    /// probe so the no-overwrite rule holds even if callers race.
    pub fn set_file(&mut self, key: ArtifactKey, file: VersionedFile) -> bool {
        match self.files.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(file);
                true
            }
            Entry::Occupied(_) => false,
        }
    }

    /// Returns the artifact file recorded under the key, if any.
    #[must_use]
    pub fn get_file(&self, key: &ArtifactKey) -> Option<&VersionedFile> {
        self.files.get(key)
    }

    /// Removes and returns the artifact file recorded under the key, if any.
    pub fn remove_file(&mut self, key: &ArtifactKey) -> Option<VersionedFile> {
        self.files.remove(key)
    }

    /// Returns true when the key is recorded.
    #[must_use]
    pub fn has_file(&self, key: &ArtifactKey) -> bool {
        self.files.contains_key(key)
    }

    /// Returns the recorded artifact keys in stable order.
    pub fn file_keys(&self) -> impl Iterator<Item = &ArtifactKey> {
        self.files.keys()
    }

    /// Returns the number of recorded artifact files.
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Sets a free-form build attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// Returns a free-form build attribute, if set.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::BuildInfo;
    use super::VersionedFile;
    use crate::core::identifiers::ArtifactKey;

    #[test]
    fn set_file_is_first_writer_wins() {
        let mut build = BuildInfo::new("build-1");
        let key = ArtifactKey::new("testsdir");
        assert!(build.set_file(key.clone(), VersionedFile::new("/a", "v1")));
        assert!(!build.set_file(key.clone(), VersionedFile::new("/b", "v2")));
        assert_eq!(build.get_file(&key).map(|file| file.path.as_str()), Some("/a"));
    }

    #[test]
    fn remove_then_set_replaces() {
        let mut build = BuildInfo::new("build-1");
        let key = ArtifactKey::new("testsdir");
        assert!(build.set_file(key.clone(), VersionedFile::new("/a", "v1")));
        assert!(build.remove_file(&key).is_some());
        assert!(build.set_file(key.clone(), VersionedFile::new("/b", "v2")));
        assert_eq!(build.get_file(&key).map(|file| file.version.as_str()), Some("v2"));
    }
}
