use liquid_types::DeviceId;
use std::collections::HashSet;
use std::str::FromStr;

// ── Generation ───────────────────────────────────────────────────

#[test]
fn generate_is_unique() {
    let a = DeviceId::generate();
    let b = DeviceId::generate();
    assert_ne!(a, b);
}

#[test]
fn generate_is_uuid_v4() {
    let id = DeviceId::generate();
    let uuid = uuid::Uuid::parse_str(id.as_str()).unwrap();
    assert_eq!(uuid.get_version_num(), 4);
}

#[test]
fn generate_is_never_empty() {
    for _ in 0..32 {
        assert!(!DeviceId::generate().as_str().is_empty());
    }
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_accepts_opaque_values() {
    // Identifiers written by older clients are not necessarily UUIDs.
    let id = DeviceId::parse("legacy-device-42").unwrap();
    assert_eq!(id.as_str(), "legacy-device-42");
}

#[test]
fn parse_keeps_surrounding_whitespace() {
    let id = DeviceId::parse("  abc\n").unwrap();
    assert_eq!(id.as_str(), "  abc\n");
}

#[test]
fn parse_rejects_empty() {
    assert!(DeviceId::parse("").is_err());
    assert!(DeviceId::parse("   ").is_err());
}

#[test]
fn display_and_from_str() {
    let id = DeviceId::generate();
    let parsed = DeviceId::from_str(&id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn hash_and_eq() {
    let id = DeviceId::generate();
    let mut set = HashSet::new();
    set.insert(id.clone());
    set.insert(id);
    assert_eq!(set.len(), 1);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_plain_string() {
    let id = DeviceId::parse("abc").unwrap();
    assert_eq!(serde_json::to_string(&id).unwrap(), r#""abc""#);
}

#[test]
fn deserialize_rejects_empty_string() {
    let result: Result<DeviceId, _> = serde_json::from_str(r#""""#);
    assert!(result.is_err());
}
