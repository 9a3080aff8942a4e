// suite-gate-devices/src/stub.rs
// ============================================================================
// Module: Stub Device
// Description: Placeholder handle for slots with no device behind them.
// Purpose: Let suites allocate slots that must never be queried.
// Dependencies: suite-gate-core
// ============================================================================

//! ## Overview
//! A stub device stands in for an unallocated or simulated device slot.
//! Components observing `is_stub()` must skip real-device-only actions;
//! a stub answers property reads with "unset" and refuses ABI queries.

// ============================================================================
// SECTION: Imports
// ============================================================================

use suite_gate_core::Abi;
use suite_gate_core::DeviceError;
use suite_gate_core::DeviceHandle;

// ============================================================================
// SECTION: Stub Device
// ============================================================================

/// Device handle with no device behind it.
#[derive(Debug, Clone)]
pub struct StubDevice {
    /// Placeholder serial identifying the stub in logs.
    serial: String,
}

impl StubDevice {
    /// Creates a stub with the given placeholder serial.
    #[must_use]
    pub fn new(serial: impl Into<String>) -> Self {
        Self {
            serial: serial.into(),
        }
    }
}

impl DeviceHandle for StubDevice {
    fn serial(&self) -> &str {
        &self.serial
    }

    fn is_stub(&self) -> bool {
        true
    }

    fn get_property(&self, _name: &str) -> Result<Option<String>, DeviceError> {
        Ok(None)
    }

    fn primary_abi(&self) -> Result<Abi, DeviceError> {
        Err(DeviceError::NoDevice(self.serial.clone()))
    }
}
