use liquid_inspect::{build_profile, render, InspectOptions};
use liquid_types::keys;
use std::fs;

fn options_in(dir: &tempfile::TempDir) -> InspectOptions {
    InspectOptions {
        storage_dir: Some(dir.path().join("storage")),
        net_root: Some(dir.path().join("net")),
        ..InspectOptions::default()
    }
}

#[test]
fn builds_profile_with_own_manifest() {
    let dir = tempfile::tempdir().unwrap();
    let profile = build_profile(&options_in(&dir)).unwrap();
    let snapshot = profile.snapshot().unwrap();

    assert_eq!(snapshot.get_str(keys::APP_BUNDLE), Some("io.lqd.inspect"));
    assert_eq!(snapshot.get_str(keys::APP_NAME), Some("liquid-inspect"));
    assert_eq!(
        snapshot.get_str(keys::INTERNET_CONNECTIVITY),
        Some("No Connectivity")
    );
    assert!(dir.path().join("storage").join("io.lqd.UUID").exists());
}

#[test]
fn config_file_overrides_manifest_and_namespace() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("liquid.toml");
    fs::write(
        &config,
        r#"
[profile]
sdk_version = "9.9.9"
identifier_namespace = "com.acme.device"

[app]
bundle = "com.acme.desktop"
release = 12
"#,
    )
    .unwrap();

    let options = InspectOptions {
        config: Some(config),
        ..options_in(&dir)
    };
    let snapshot = build_profile(&options).unwrap().snapshot().unwrap();

    assert_eq!(snapshot.get_str(keys::APP_BUNDLE), Some("com.acme.desktop"));
    assert_eq!(snapshot.get_str(keys::LIQUID_VERSION), Some("9.9.9"));
    assert_eq!(snapshot.get(keys::RELEASE_VERSION), Some(&serde_json::json!(12)));
    assert!(dir.path().join("storage").join("com.acme.device").exists());
}

#[test]
fn missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let options = InspectOptions {
        config: Some(dir.path().join("absent.toml")),
        ..options_in(&dir)
    };
    assert!(build_profile(&options).is_err());
}

#[test]
fn location_and_push_token_reach_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let options = InspectOptions {
        latitude: Some(38.7),
        longitude: Some(-9.1),
        push_token: Some("tok".into()),
        ..options_in(&dir)
    };
    let snapshot = build_profile(&options).unwrap().snapshot().unwrap();
    assert_eq!(snapshot.get(keys::LATITUDE), Some(&serde_json::json!(38.7)));
    assert_eq!(snapshot.get(keys::LONGITUDE), Some(&serde_json::json!(-9.1)));
    assert_eq!(snapshot.get_str(keys::PUSH_TOKEN), Some("tok"));
}

#[test]
fn half_location_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let options = InspectOptions {
        latitude: Some(1.0),
        ..options_in(&dir)
    };
    let err = build_profile(&options).unwrap_err();
    assert!(err.to_string().contains("together"));
}

#[test]
fn identifier_is_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let first = build_profile(&options_in(&dir)).unwrap();
    let second = build_profile(&options_in(&dir)).unwrap();
    assert_eq!(first.unique_id(), second.unique_id());
}

#[test]
fn render_compact_and_pretty() {
    let dir = tempfile::tempdir().unwrap();
    let profile = build_profile(&options_in(&dir)).unwrap();

    let compact = render(profile.snapshot().unwrap(), false).unwrap();
    assert!(!compact.contains('\n'));
    let pretty = render(profile.snapshot().unwrap(), true).unwrap();
    assert!(pretty.contains('\n'));

    let a: serde_json::Value = serde_json::from_str(&compact).unwrap();
    let b: serde_json::Value = serde_json::from_str(&pretty).unwrap();
    assert_eq!(a, b);
}
