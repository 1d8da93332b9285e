use cogniscreen_core::time::to_fixed;
use jiff::Timestamp;

#[test]
fn fixed_format_is_constant_width() {
    let a: Timestamp = "2026-01-02T03:04:05.006Z".parse().unwrap();
    let b: Timestamp = "2026-01-02T03:04:05Z".parse().unwrap();
    let c: Timestamp = "2026-11-22T13:14:15.999Z".parse().unwrap();

    assert_eq!(to_fixed(a).len(), 24);
    assert_eq!(to_fixed(b).len(), 24);
    assert_eq!(to_fixed(c).len(), 24);
    assert_eq!(to_fixed(a), "2026-01-02T03:04:05.006Z");
    assert_eq!(to_fixed(b), "2026-01-02T03:04:05.000Z");
}

#[test]
fn lexicographic_order_matches_chronological_order() {
    let earlier: Timestamp = "2026-03-10T00:00:00.900Z".parse().unwrap();
    let later: Timestamp = "2026-03-10T00:00:01Z".parse().unwrap();
    assert!(to_fixed(earlier) < to_fixed(later));

    let whole: Timestamp = "2026-03-10T00:00:00Z".parse().unwrap();
    let fractional: Timestamp = "2026-03-10T00:00:00.500Z".parse().unwrap();
    assert!(to_fixed(whole) < to_fixed(fractional));
}

#[test]
fn serde_round_trips_through_json() {
    #[derive(serde::Serialize, serde::Deserialize)]
    struct Wrapper {
        #[serde(with = "cogniscreen_core::time::timestamp")]
        at: Timestamp,
    }

    let original = Wrapper {
        at: "2026-05-06T07:08:09.123Z".parse().unwrap(),
    };
    let json = serde_json::to_string(&original).unwrap();
    assert_eq!(json, "{\"at\":\"2026-05-06T07:08:09.123Z\"}");

    let back: Wrapper = serde_json::from_str(&json).unwrap();
    assert_eq!(back.at, original.at);
}
