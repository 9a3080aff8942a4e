// suite-gate-core/src/runtime/native_bridge.rs
// ============================================================================
// Module: Native Bridge Gate
// Description: Bypass modules that would run through a translation layer.
// Purpose: Keep architecture-sensitive results off emulated instruction sets.
// Dependencies: crate::{core, interfaces, runtime::sink}
// ============================================================================

//! ## Overview
//! The native-bridge gate inspects every allocated real device. When a device
//! reports an active native-bridge translation layer and its primary
//! architecture family differs from the module's target family, the module
//! would execute translated; the gate bypasses it fully. Modules matching the
//! device's own family run even with a bridge present.
//!
//! A device that cannot be queried is treated as bridge-free: the failure is
//! recorded and the next device is examined. A module is atomic across its
//! assigned devices, so one unsafe device bypasses the whole module.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::InvocationContext;
use crate::core::InvocationEvent;
use crate::core::ModuleDescriptor;
use crate::core::RunStrategy;
use crate::core::SlotName;
use crate::interfaces::DeviceError;
use crate::interfaces::GateError;
use crate::interfaces::RunGate;
use crate::runtime::sink::SharedSink;
use crate::runtime::sink::null_sink;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// System property naming the active native-bridge translation layer.
pub const NATIVE_BRIDGE_PROP: &str = "ro.dalvik.vm.native.bridge";
/// Property value reported when no bridge is active.
const NO_BRIDGE: &str = "0";

// ============================================================================
// SECTION: Native Bridge Gate
// ============================================================================

/// Run-strategy gate bypassing modules that would be bridge-translated.
pub struct NativeBridgeGate {
    /// Sink receiving property-read failure records.
    sink: SharedSink,
}

impl NativeBridgeGate {
    /// Creates a gate that discards failure records.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sink: null_sink(),
        }
    }

    /// Creates a gate recording failures to the sink.
    #[must_use]
    pub fn with_sink(sink: SharedSink) -> Self {
        Self {
            sink,
        }
    }

    /// Records a failed device read. Sink failures never change the decision.
    fn note_read_failure(&self, slot: &SlotName, property: &str, error: &DeviceError) {
        let event = InvocationEvent::PropertyReadFailed {
            slot: slot.clone(),
            property: property.to_string(),
            reason: error.to_string(),
        };
        let _ = self.sink.record(&event);
    }
}

impl Default for NativeBridgeGate {
    fn default() -> Self {
        Self::new()
    }
}

impl RunGate for NativeBridgeGate {
    fn decide(&self, ctx: &InvocationContext) -> Result<RunStrategy, GateError> {
        let module = ModuleDescriptor::from_attributes(ctx)?;

        for (slot, device) in ctx.devices() {
            if device.is_stub() {
                continue;
            }

            let bridge = match device.get_property(NATIVE_BRIDGE_PROP) {
                Ok(value) => value,
                Err(error) => {
                    // Cannot determine; assume no bridge on this device.
                    self.note_read_failure(slot, NATIVE_BRIDGE_PROP, &error);
                    continue;
                }
            };
            let Some(bridge) = bridge else {
                continue;
            };
            if bridge.trim() == NO_BRIDGE {
                continue;
            }

            let device_abi = match device.primary_abi() {
                Ok(abi) => abi,
                Err(error) => {
                    self.note_read_failure(slot, "primary-abi", &error);
                    continue;
                }
            };
            if module.abi.same_base_arch(&device_abi) {
                // The module targets the device's native family; a present
                // bridge is irrelevant to it.
                continue;
            }
            return Ok(RunStrategy::FullModuleBypass);
        }

        Ok(RunStrategy::Run)
    }
}
