// suite-gate-devices/src/scripted.rs
// ============================================================================
// Module: Scripted Device
// Description: In-memory device answering queries from a fixed script.
// Purpose: Exercise gates and drivers without any device transport.
// Dependencies: suite-gate-core
// ============================================================================

//! ## Overview
//! A scripted device answers property and primary-ABI queries from maps
//! populated at construction time. Individual queries can be scripted to
//! fail, which is how tests drive the gate's skip-on-unreadable recovery.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use suite_gate_core::Abi;
use suite_gate_core::DeviceError;
use suite_gate_core::DeviceHandle;

// ============================================================================
// SECTION: Scripted Device
// ============================================================================

/// Device handle answering queries from an in-memory script.
#[derive(Debug, Clone)]
pub struct ScriptedDevice {
    /// Serial reported for the device.
    serial: String,
    /// Property values keyed by property name.
    properties: BTreeMap<String, String>,
    /// Property names scripted to fail their read.
    failing_properties: BTreeSet<String>,
    /// Primary ABI reported by the device.
    primary_abi: Option<Abi>,
    /// Whether the primary-ABI query is scripted to fail.
    fail_primary_abi: bool,
}

impl ScriptedDevice {
    /// Creates a scripted device with no properties.
    #[must_use]
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
            properties: BTreeMap::new(),
            failing_properties: BTreeSet::new(),
            primary_abi: None,
            fail_primary_abi: false,
        }
    }

    /// Scripts a property value.
    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Scripts the primary ABI.
    #[must_use]
    pub fn with_primary_abi(mut self, abi: impl Into<Abi>) -> Self {
        self.primary_abi = Some(abi.into());
        self
    }

    /// Scripts a property read to fail.
    #[must_use]
    pub fn with_failing_property(mut self, name: impl Into<String>) -> Self {
        self.failing_properties.insert(name.into());
        self
    }

    /// Scripts the primary-ABI query to fail.
    #[must_use]
    pub fn with_failing_primary_abi(mut self) -> Self {
        self.fail_primary_abi = true;
        self
    }
}

impl DeviceHandle for ScriptedDevice {
    fn serial(&self) -> &str {
        &self.serial
    }

    fn is_stub(&self) -> bool {
        false
    }

    fn get_property(&self, name: &str) -> Result<Option<String>, DeviceError> {
        if self.failing_properties.contains(name) {
            return Err(DeviceError::CommandFailed(format!(
                "scripted failure reading {name} on {}",
                self.serial
            )));
        }
        Ok(self.properties.get(name).cloned())
    }

    fn primary_abi(&self) -> Result<Abi, DeviceError> {
        if self.fail_primary_abi {
            return Err(DeviceError::CommandFailed(format!(
                "scripted failure reading primary abi on {}",
                self.serial
            )));
        }
        self.primary_abi
            .clone()
            .ok_or_else(|| DeviceError::CommandFailed(format!("no abi scripted on {}", self.serial)))
    }
}
