//! Invocation context tests for suite-gate-core.
// crates/suite-gate-core/tests/context.rs
// =============================================================================
// Module: Invocation Context Tests
// Description: Validate slot allocation pairing and attribute access.
// Purpose: Ensure the context never holds partially populated slots.
// =============================================================================

use std::sync::Arc;

use suite_gate_core::Abi;
use suite_gate_core::BuildInfo;
use suite_gate_core::ContextError;
use suite_gate_core::DeviceError;
use suite_gate_core::DeviceHandle;
use suite_gate_core::InvocationContext;
use suite_gate_core::SlotName;

type TestResult = Result<(), String>;

#[derive(Debug)]
struct NoopDevice;

impl DeviceHandle for NoopDevice {
    fn serial(&self) -> &str {
        "noop"
    }

    fn is_stub(&self) -> bool {
        true
    }

    fn get_property(&self, _name: &str) -> Result<Option<String>, DeviceError> {
        Ok(None)
    }

    fn primary_abi(&self) -> Result<Abi, DeviceError> {
        Err(DeviceError::NoDevice("noop".to_string()))
    }
}

fn allocate(ctx: &mut InvocationContext, slot: &str) -> Result<(), String> {
    ctx.allocate_device(SlotName::new(slot), Arc::new(NoopDevice), BuildInfo::new("build"))
        .map_err(|err| err.to_string())
}

#[test]
fn allocation_creates_device_and_build_info_together() -> TestResult {
    let mut ctx = InvocationContext::new();
    allocate(&mut ctx, "device1")?;

    let slot = SlotName::new("device1");
    if ctx.device(&slot).is_err() {
        return Err("device accessor failed for allocated slot".to_string());
    }
    if ctx.build_info(&slot).is_err() {
        return Err("build info accessor failed for allocated slot".to_string());
    }
    if ctx.device_count() != 1 {
        return Err("unexpected device count".to_string());
    }
    Ok(())
}

#[test]
fn duplicate_allocation_is_rejected_and_context_unchanged() -> TestResult {
    let mut ctx = InvocationContext::new();
    allocate(&mut ctx, "device1")?;
    ctx.build_info_mut(&SlotName::new("device1"))
        .map_err(|err| err.to_string())?
        .set_attribute("branch", "main");

    let result = ctx.allocate_device(
        SlotName::new("device1"),
        Arc::new(NoopDevice),
        BuildInfo::new("other"),
    );
    match result {
        Err(ContextError::SlotExists(slot)) => {
            if slot.as_str() != "device1" {
                return Err("error names the wrong slot".to_string());
            }
        }
        _ => return Err("expected duplicate allocation to fail".to_string()),
    }

    let kept = ctx.build_info(&SlotName::new("device1")).map_err(|err| err.to_string())?;
    if kept.attribute("branch") != Some("main") {
        return Err("existing build record was replaced".to_string());
    }
    Ok(())
}

#[test]
fn missing_slot_lookup_names_the_slot() -> TestResult {
    let ctx = InvocationContext::new();
    match ctx.device(&SlotName::new("ghost")) {
        Err(ContextError::SlotNotFound(slot)) => {
            if slot.as_str() != "ghost" {
                return Err("error names the wrong slot".to_string());
            }
            Ok(())
        }
        _ => Err("expected slot-not-found error".to_string()),
    }
}

#[test]
fn attributes_append_in_order() -> TestResult {
    let mut ctx = InvocationContext::new();
    ctx.add_attribute("abi-list", "arm64-v8a");
    ctx.add_attribute("abi-list", "armeabi-v7a");

    let values = ctx.attribute_values("abi-list");
    if values != ["arm64-v8a", "armeabi-v7a"] {
        return Err(format!("unexpected attribute order: {values:?}"));
    }
    Ok(())
}

#[test]
fn require_attribute_reports_missing_name() -> TestResult {
    let ctx = InvocationContext::new();
    match ctx.require_attribute("module-name") {
        Err(ContextError::MissingAttribute(name)) => {
            if name != "module-name" {
                return Err("error names the wrong attribute".to_string());
            }
            Ok(())
        }
        _ => Err("expected missing-attribute error".to_string()),
    }
}

#[test]
fn slot_iteration_is_stable_order() -> TestResult {
    let mut ctx = InvocationContext::new();
    allocate(&mut ctx, "device2")?;
    allocate(&mut ctx, "device1")?;

    let names: Vec<&str> = ctx.slot_names().map(SlotName::as_str).collect();
    if names != ["device1", "device2"] {
        return Err(format!("unexpected slot order: {names:?}"));
    }
    Ok(())
}
