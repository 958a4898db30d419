#![cfg(feature = "serde")]

use field_influence::InfluenceMapSetup;

#[test]
fn setup_roundtrips_through_json() {
    let setup = InfluenceMapSetup::new("defense", 0.75)
        .seeds([("berlin".to_owned(), 120), ("moscow".to_owned(), 80)])
        .visit_budget(10_000);

    let json = serde_json::to_string(&setup).unwrap();
    let back: InfluenceMapSetup<String> = serde_json::from_str(&json).unwrap();

    assert_eq!(back, setup);
}
