//! Serialization of options behind the `serde` feature.

#![cfg(feature = "serde")]

use sqlstring::{ConflictResolution, Junction, QuoteStyle, SelectModifier, TransactionKind};

#[test]
fn options_use_snake_case_names() {
    assert_eq!(
        serde_json::to_string(&Junction::UnionAll).unwrap(),
        "\"union_all\""
    );
    assert_eq!(
        serde_json::to_string(&QuoteStyle::Double).unwrap(),
        "\"double\""
    );
}

#[test]
fn options_deserialize() {
    let modifier: SelectModifier = serde_json::from_str("\"distinct\"").unwrap();
    assert_eq!(modifier, SelectModifier::Distinct);

    let conflict: ConflictResolution = serde_json::from_str("\"ignore\"").unwrap();
    assert_eq!(conflict, ConflictResolution::Ignore);

    let kind: TransactionKind = serde_json::from_str("\"rollback\"").unwrap();
    assert_eq!(kind, TransactionKind::Rollback);

    assert!(serde_json::from_str::<QuoteStyle>("\"backtick\"").is_err());
}
