// crates/suite-gate-core/tests/proptest_build_info.rs
// ============================================================================
// Module: Build Info Property-Based Tests
// Description: Property tests for collision-safe artifact insertion and merge.
// Purpose: Detect overwrite and version-mangling bugs across wide inputs.
// ============================================================================

//! Property-based tests for build-record and merge invariants.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::sync::Arc;

use proptest::prelude::*;
use suite_gate_core::Abi;
use suite_gate_core::ArtifactKey;
use suite_gate_core::ArtifactMerge;
use suite_gate_core::BuildInfo;
use suite_gate_core::DeviceError;
use suite_gate_core::DeviceHandle;
use suite_gate_core::InvocationContext;
use suite_gate_core::SlotName;
use suite_gate_core::TargetPreparer;
use suite_gate_core::VersionedFile;

#[derive(Debug)]
struct InertDevice;

impl DeviceHandle for InertDevice {
    fn serial(&self) -> &str {
        "inert"
    }

    fn is_stub(&self) -> bool {
        true
    }

    fn get_property(&self, _name: &str) -> Result<Option<String>, DeviceError> {
        Ok(None)
    }

    fn primary_abi(&self) -> Result<Abi, DeviceError> {
        Err(DeviceError::NoDevice("inert".to_string()))
    }
}

fn merge_context(source: BuildInfo, dest: BuildInfo) -> InvocationContext {
    let mut ctx = InvocationContext::new();
    ctx.allocate_device(SlotName::new("src"), Arc::new(InertDevice), source)
        .expect("fresh context accepts src slot");
    ctx.allocate_device(SlotName::new("dst"), Arc::new(InertDevice), dest)
        .expect("fresh context accepts dst slot");
    ctx
}

proptest! {
    #[test]
    fn set_file_never_overwrites(
        key in "[a-z0-9_.-]{1,16}",
        first_path in "/[a-z/]{1,24}",
        first_version in "[a-zA-Z0-9._-]{1,12}",
        second_path in "/[a-z/]{1,24}",
        second_version in "[a-zA-Z0-9._-]{1,12}",
    ) {
        let mut build = BuildInfo::new("build");
        let key = ArtifactKey::new(key);
        prop_assert!(build.set_file(key.clone(), VersionedFile::new(first_path.clone(), first_version.clone())));
        prop_assert!(!build.set_file(key.clone(), VersionedFile::new(second_path, second_version)));
        let kept = build.get_file(&key).expect("first entry kept");
        prop_assert_eq!(kept.path.as_str(), first_path.as_str());
        prop_assert_eq!(kept.version.as_str(), first_version.as_str());
    }

    #[test]
    fn merge_of_absent_key_changes_nothing(
        key in "[a-z0-9_.-]{1,16}",
        unrelated in "[a-z0-9_.-]{1,16}",
        path in "/[a-z/]{1,24}",
        version in "[a-zA-Z0-9._-]{1,12}",
    ) {
        prop_assume!(key != unrelated);
        let source = BuildInfo::new("src-build");
        let mut dest = BuildInfo::new("dst-build");
        dest.set_file(ArtifactKey::new(unrelated), VersionedFile::new(path, version));
        let snapshot = dest.clone();

        let mut ctx = merge_context(source, dest);
        ArtifactMerge::new("src", "dst", key.as_str())
            .set_up(&mut ctx)
            .expect("merge with allocated slots succeeds");

        let after = ctx.build_info(&SlotName::new("dst")).expect("dst allocated");
        prop_assert_eq!(after, &snapshot);
    }

    #[test]
    fn merge_preserves_version_verbatim(
        key in "[a-z0-9_.-]{1,16}",
        path in "/[a-z/]{1,24}",
        version in "[a-zA-Z0-9._ -]{1,20}",
    ) {
        let mut source = BuildInfo::new("src-build");
        let key = ArtifactKey::new(key);
        source.set_file(key.clone(), VersionedFile::new(path, version.clone()));

        let mut ctx = merge_context(source, BuildInfo::new("dst-build"));
        ArtifactMerge::new("src", "dst", key.as_str())
            .set_up(&mut ctx)
            .expect("merge with allocated slots succeeds");

        let after = ctx.build_info(&SlotName::new("dst")).expect("dst allocated");
        let merged = after.get_file(&key).expect("merged entry present");
        prop_assert_eq!(merged.version.as_str(), version.as_str());
    }

    #[test]
    fn merge_collision_keeps_destination(
        key in "[a-z0-9_.-]{1,16}",
        src_version in "[a-zA-Z0-9._-]{1,12}",
        dst_version in "[a-zA-Z0-9._-]{1,12}",
    ) {
        let key = ArtifactKey::new(key);
        let mut source = BuildInfo::new("src-build");
        source.set_file(key.clone(), VersionedFile::new("/from-src", src_version));
        let mut dest = BuildInfo::new("dst-build");
        dest.set_file(key.clone(), VersionedFile::new("/from-dst", dst_version.clone()));

        let mut ctx = merge_context(source, dest);
        ArtifactMerge::new("src", "dst", key.as_str())
            .set_up(&mut ctx)
            .expect("merge with allocated slots succeeds");

        let after = ctx.build_info(&SlotName::new("dst")).expect("dst allocated");
        let kept = after.get_file(&key).expect("destination entry kept");
        prop_assert_eq!(kept.path.as_str(), "/from-dst");
        prop_assert_eq!(kept.version.as_str(), dst_version.as_str());
    }
}
