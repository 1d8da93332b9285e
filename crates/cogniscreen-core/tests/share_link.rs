use cogniscreen_core::models::share_link::{ShareLink, DEFAULT_TTL_HOURS};
use jiff::{SignedDuration, Timestamp};
use uuid::Uuid;

#[test]
fn fresh_link_is_not_expired() {
    let link = ShareLink::new("assessment-1".to_string(), DEFAULT_TTL_HOURS).unwrap();
    assert!(!link.is_expired(Timestamp::now()));
    assert_eq!(link.accessed_count, 0);
}

#[test]
fn ttl_sets_expiry_relative_to_creation() {
    let link = ShareLink::new("assessment-1".to_string(), 48).unwrap();
    let ttl = link.expires_at.duration_since(link.created_at);
    assert_eq!(ttl, SignedDuration::from_hours(48));
}

#[test]
fn past_expiry_reports_expired() {
    let mut link = ShareLink::new("assessment-1".to_string(), 1).unwrap();
    link.expires_at = Timestamp::now() - SignedDuration::from_hours(2);
    assert!(link.is_expired(Timestamp::now()));
}

#[test]
fn expiry_boundary_counts_as_expired() {
    let link = ShareLink::new("assessment-1".to_string(), 1).unwrap();
    assert!(link.is_expired(link.expires_at));
}

#[test]
fn token_is_a_uuid_v4() {
    let link = ShareLink::new("assessment-1".to_string(), 1).unwrap();
    let token = Uuid::parse_str(&link.token).unwrap();
    assert_eq!(token.get_version_num(), 4);
    // Token and row id are independently generated.
    assert_ne!(link.token, link.id);
}
