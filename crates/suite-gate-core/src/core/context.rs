// suite-gate-core/src/core/context.rs
// ============================================================================
// Module: Suite Gate Invocation Context
// Description: Per-invocation device slots, build records, and attributes.
// Purpose: Aggregate one test run's allocated devices and build metadata.
// Dependencies: crate::{core, interfaces}, thiserror
// ============================================================================

//! ## Overview
//! The invocation context is the data hub shared by preparers, gates, and
//! module dispatch. It is constructed once per suite invocation, mutated in
//! place during setup, and discarded at invocation end. Components receive a
//! reference and must not retain it beyond the call.
//!
//! Every slot holds a device handle and exactly one build record; the two are
//! allocated together and never partially populated.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::core::build::BuildInfo;
use crate::core::identifiers::SlotName;
use crate::interfaces::DeviceHandle;

// ============================================================================
// SECTION: Well-Known Attributes
// ============================================================================

/// Attribute carrying the name of the module under decision.
pub const ATTR_MODULE_NAME: &str = "module-name";
/// Attribute carrying the ABI of the module under decision.
pub const ATTR_MODULE_ABI: &str = "module-abi";

// ============================================================================
// SECTION: Context Errors
// ============================================================================

/// Structural errors raised by context accessors.
#[derive(Debug, Error)]
pub enum ContextError {
    /// A referenced device slot is not allocated in this invocation.
    #[error("device slot not found: {0}")]
    SlotNotFound(SlotName),
    /// A slot was allocated twice.
    #[error("device slot already allocated: {0}")]
    SlotExists(SlotName),
    /// A required invocation attribute is missing.
    #[error("missing invocation attribute: {0}")]
    MissingAttribute(String),
}

// ============================================================================
// SECTION: Invocation Context
// ============================================================================

/// Shared device handle stored per slot.
pub type SharedDevice = Arc<dyn DeviceHandle + Send + Sync>;

/// Aggregated state for one test-suite invocation.
///
/// # Invariants
/// - `devices` and `build_infos` hold exactly the same slot names.
pub struct InvocationContext {
    /// Allocated device handles keyed by slot name.
    devices: BTreeMap<SlotName, SharedDevice>,
    /// Per-device build records keyed by slot name.
    build_infos: BTreeMap<SlotName, BuildInfo>,
    /// Invocation attributes: ordered values per attribute name.
    attributes: BTreeMap<String, Vec<String>>,
}

impl InvocationContext {
    /// Creates an empty invocation context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            devices: BTreeMap::new(),
            build_infos: BTreeMap::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Allocates a device slot together with its build record.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::SlotExists`] when the slot is already
    /// allocated; the context is left unchanged.
    pub fn allocate_device(
        &mut self,
        slot: SlotName,
        device: SharedDevice,
        build: BuildInfo,
    ) -> Result<(), ContextError> {
        if self.devices.contains_key(&slot) {
            return Err(ContextError::SlotExists(slot));
        }
        self.devices.insert(slot.clone(), device);
        self.build_infos.insert(slot, build);
        Ok(())
    }

    /// Returns the device handle allocated to the slot.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::SlotNotFound`] when the slot is absent.
    pub fn device(&self, slot: &SlotName) -> Result<&SharedDevice, ContextError> {
        self.devices.get(slot).ok_or_else(|| ContextError::SlotNotFound(slot.clone()))
    }

    /// Returns the build record for the slot.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::SlotNotFound`] when the slot is absent.
    pub fn build_info(&self, slot: &SlotName) -> Result<&BuildInfo, ContextError> {
        self.build_infos.get(slot).ok_or_else(|| ContextError::SlotNotFound(slot.clone()))
    }

    /// Returns the mutable build record for the slot.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::SlotNotFound`] when the slot is absent.
    pub fn build_info_mut(&mut self, slot: &SlotName) -> Result<&mut BuildInfo, ContextError> {
        self.build_infos.get_mut(slot).ok_or_else(|| ContextError::SlotNotFound(slot.clone()))
    }

    /// Returns true when the slot is allocated.
    #[must_use]
    pub fn has_slot(&self, slot: &SlotName) -> bool {
        self.devices.contains_key(slot)
    }

    /// Returns allocated slot names in stable order.
    pub fn slot_names(&self) -> impl Iterator<Item = &SlotName> {
        self.devices.keys()
    }

    /// Iterates allocated devices as `(slot, device)` pairs in stable order.
    pub fn devices(&self) -> impl Iterator<Item = (&SlotName, &SharedDevice)> {
        self.devices.iter()
    }

    /// Returns the number of allocated device slots.
    #[must_use]
    pub fn device_count(&self) -> usize {
        self.devices.len()
    }

    /// Appends a value to an invocation attribute.
    pub fn add_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.entry(name.into()).or_default().push(value.into());
    }

    /// Removes all values recorded for an attribute.
    pub fn clear_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    /// Returns the values recorded for an attribute, empty when unset.
    #[must_use]
    pub fn attribute_values(&self, name: &str) -> &[String] {
        self.attributes.get(name).map_or(&[], Vec::as_slice)
    }

    /// Returns the first value of a required attribute.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::MissingAttribute`] when the attribute has no
    /// recorded value, signaling a misconfigured suite.
    pub fn require_attribute(&self, name: &str) -> Result<&str, ContextError> {
        self.attributes
            .get(name)
            .and_then(|values| values.first())
            .map(String::as_str)
            .ok_or_else(|| ContextError::MissingAttribute(name.to_string()))
    }
}

impl Default for InvocationContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for InvocationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationContext")
            .field("slots", &self.devices.keys().collect::<Vec<_>>())
            .field("attributes", &self.attributes)
            .finish_non_exhaustive()
    }
}
