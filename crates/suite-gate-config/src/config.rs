// suite-gate-config/src/config.rs
// ============================================================================
// Module: Suite Gate Configuration
// Description: Configuration loading and validation for Suite Gate.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: suite-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! Missing or invalid configuration fails closed: a suite that cannot be
//! fully understood is never partially scheduled.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::Component;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;
use suite_gate_core::Abi;
use suite_gate_core::ArtifactMerge;
use suite_gate_core::InvocationContext;
use suite_gate_core::ModuleDescriptor;
use suite_gate_core::ScheduledModule;
use suite_gate_core::SharedSink;
use thiserror::Error;

use crate::registry::GateRegistry;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "suite-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "SUITE_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of scheduled modules per invocation.
pub(crate) const MAX_MODULES: usize = 4096;
/// Maximum number of artifact merges per invocation.
pub(crate) const MAX_MERGES: usize = 256;
/// Maximum number of gates configured for a single module.
pub(crate) const MAX_GATES_PER_MODULE: usize = 16;
/// Maximum length of a module or gate name.
pub(crate) const MAX_NAME_LENGTH: usize = 256;
/// Maximum length of a device slot name.
pub(crate) const MAX_SLOT_NAME_LENGTH: usize = 64;
/// Maximum length of an artifact key.
pub(crate) const MAX_ARTIFACT_KEY_LENGTH: usize = 256;
/// Maximum number of invocation attribute entries.
pub(crate) const MAX_INVOCATION_ATTRIBUTES: usize = 64;

// ============================================================================
// SECTION: Configuration Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Reading the config file failed.
    #[error("config io error: {0}")]
    Io(String),
    /// The config file is not valid TOML.
    #[error("config parse error: {0}")]
    Parse(String),
    /// The config violates a structural rule or limit.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// A module references a gate name that is not registered.
    #[error("unknown gate name: {0}")]
    UnknownGate(String),
}

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Suite Gate invocation configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuiteConfig {
    /// Invocation-level settings.
    #[serde(default)]
    pub invocation: InvocationConfig,
    /// Artifact merges applied during setup, in order.
    #[serde(default, rename = "merge")]
    pub merges: Vec<MergeConfig>,
    /// Modules scheduled for the invocation, in order.
    #[serde(default, rename = "module")]
    pub modules: Vec<ModuleConfig>,
}

/// Invocation-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InvocationConfig {
    /// Attributes installed on the invocation context before setup.
    #[serde(default)]
    pub attributes: BTreeMap<String, String>,
}

/// One artifact merge entry: copy `key` from `source` into `dest`.
#[derive(Debug, Clone, Deserialize)]
pub struct MergeConfig {
    /// Slot providing the artifact.
    pub source: String,
    /// Slot receiving the artifact.
    pub dest: String,
    /// Artifact key to merge.
    pub key: String,
}

/// One scheduled module entry.
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleConfig {
    /// Module name.
    pub name: String,
    /// Module target ABI.
    pub abi: String,
    /// Gate names applied to the module, in order.
    #[serde(default)]
    pub gates: Vec<String>,
}

impl SuiteConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::parse(content)
    }

    /// Parses and validates configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.invocation.attributes.len() > MAX_INVOCATION_ATTRIBUTES {
            return Err(ConfigError::Invalid("too many invocation attributes".to_string()));
        }
        if self.merges.len() > MAX_MERGES {
            return Err(ConfigError::Invalid("too many merge entries".to_string()));
        }
        if self.modules.len() > MAX_MODULES {
            return Err(ConfigError::Invalid("too many module entries".to_string()));
        }
        for merge in &self.merges {
            merge.validate()?;
        }
        for module in &self.modules {
            module.validate()?;
        }
        Ok(())
    }

    /// Installs the configured invocation attributes on a context.
    pub fn apply_invocation_attributes(&self, ctx: &mut InvocationContext) {
        for (name, value) in &self.invocation.attributes {
            ctx.add_attribute(name.clone(), value.clone());
        }
    }

    /// Materializes the configured artifact merges, in configuration order.
    #[must_use]
    pub fn build_merges(&self, sink: &SharedSink) -> Vec<ArtifactMerge> {
        self.merges
            .iter()
            .map(|merge| {
                ArtifactMerge::new(
                    merge.source.as_str(),
                    merge.dest.as_str(),
                    merge.key.as_str(),
                )
                .with_sink(sink.clone())
            })
            .collect()
    }

    /// Materializes the scheduled modules with their gate chains.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownGate`] when a module references an
    /// unregistered gate name.
    pub fn build_modules(
        &self,
        registry: &GateRegistry,
    ) -> Result<Vec<ScheduledModule>, ConfigError> {
        self.modules
            .iter()
            .map(|module| {
                let chain = registry.build_chain(&module.gates)?;
                let descriptor =
                    ModuleDescriptor::new(module.name.as_str(), module.abi.as_str());
                Ok(ScheduledModule::new(descriptor, chain))
            })
            .collect()
    }
}

impl MergeConfig {
    /// Validates one merge entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a field is empty or too long,
    /// or the merge copies a slot onto itself.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_name("merge source slot", &self.source, MAX_SLOT_NAME_LENGTH)?;
        validate_name("merge dest slot", &self.dest, MAX_SLOT_NAME_LENGTH)?;
        validate_name("merge artifact key", &self.key, MAX_ARTIFACT_KEY_LENGTH)?;
        if self.source == self.dest {
            return Err(ConfigError::Invalid(format!(
                "merge source and dest are the same slot: {}",
                self.source
            )));
        }
        Ok(())
    }
}

impl ModuleConfig {
    /// Validates one module entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a field is empty, too long, the
    /// ABI is not a recognized family, or too many gates are configured.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_name("module name", &self.name, MAX_NAME_LENGTH)?;
        validate_name("module abi", &self.abi, MAX_NAME_LENGTH)?;
        if Abi::new(self.abi.as_str()).base_arch().is_none() {
            return Err(ConfigError::Invalid(format!("unrecognized module abi: {}", self.abi)));
        }
        if self.gates.len() > MAX_GATES_PER_MODULE {
            return Err(ConfigError::Invalid(format!(
                "too many gates for module {}: {} (max {})",
                self.name,
                self.gates.len(),
                MAX_GATES_PER_MODULE
            )));
        }
        for gate in &self.gates {
            validate_name("gate name", gate, MAX_NAME_LENGTH)?;
        }
        Ok(())
    }
}

// ============================================================================
// SECTION: Path Resolution
// ============================================================================

/// Resolves the effective config path from argument, env var, or default.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    match env::var_os(CONFIG_ENV_VAR) {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Ok(PathBuf::from(DEFAULT_CONFIG_NAME)),
    }
}

/// Validates path length limits before any filesystem access.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    if path.as_os_str().len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        if let Component::Normal(part) = component
            && part.len() > MAX_PATH_COMPONENT_LENGTH
        {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a required name field against emptiness and a length limit.
fn validate_name(what: &str, value: &str, max_length: usize) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{what} must not be empty")));
    }
    if value.len() > max_length {
        return Err(ConfigError::Invalid(format!("{what} exceeds max length {max_length}")));
    }
    Ok(())
}
