// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Serialized forms of the configuration and window types.

#![cfg(feature = "serde")]

use understory_windowed_list::{KeyedVec, OffsetPolicy, VisibleWindow, WindowConfig, WindowManager};

#[test]
fn minimal_config_fills_in_defaults() {
    let config: WindowConfig<f64> =
        serde_json::from_str(r#"{"item_height": 48.0, "initial_viewport_height": 480.0}"#)
            .unwrap();
    assert_eq!(config, WindowConfig::new(48.0, 480.0));
    assert_eq!(config.overscan_count, 1);
    assert_eq!(config.offset_policy, OffsetPolicy::Preserve);
    assert!(config.validate().is_ok());
}

#[test]
fn config_from_host_settings_drives_a_manager() {
    let config: WindowConfig<f32> = serde_json::from_str(
        r#"{
            "item_height": 20.0,
            "initial_viewport_height": 100.0,
            "overscan_count": 0,
            "offset_policy": "ClampToEnd"
        }"#,
    )
    .unwrap();
    assert_eq!(config.offset_policy, OffsetPolicy::ClampToEnd);

    let list = WindowManager::new(KeyedVec::new((0..50_u32).collect(), |v: &u32| *v), config)
        .unwrap();
    assert_eq!(list.window(), VisibleWindow { start: 0, end: 5 });
}

#[test]
fn unusable_heights_deserialize_but_fail_validation() {
    let config: WindowConfig<f64> =
        serde_json::from_str(r#"{"item_height": 0.0, "initial_viewport_height": 480.0}"#).unwrap();
    assert!(config.validate().is_err());
}

#[test]
fn window_and_policy_round_trip() {
    let window = VisibleWindow { start: 98, end: 112 };
    let json = serde_json::to_string(&window).unwrap();
    assert_eq!(json, r#"{"start":98,"end":112}"#);
    assert_eq!(serde_json::from_str::<VisibleWindow>(&json).unwrap(), window);

    for policy in [
        OffsetPolicy::Preserve,
        OffsetPolicy::ClampToEnd,
        OffsetPolicy::Reset,
    ] {
        let json = serde_json::to_string(&policy).unwrap();
        assert_eq!(serde_json::from_str::<OffsetPolicy>(&json).unwrap(), policy);
    }
}

#[test]
fn deserialized_inverted_window_is_empty() {
    // Fields are public and deserialized as-is, so `start > end` can reach callers.
    let window: VisibleWindow = serde_json::from_str(r#"{"start": 5, "end": 3}"#).unwrap();
    assert_eq!(window.len(), 0);
    assert!(window.is_empty());
}
