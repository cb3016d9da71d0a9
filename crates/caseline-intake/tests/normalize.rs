use caseline_intake::{NormalizeError, normalize_all, normalize_value};
use proptest::prelude::*;
use serde_json::{Value, json};

#[test]
fn sparse_record_fills_defaults() {
    let raw = json!({"first_name": "Jo", "archived": "1", "insurances": null});
    let record = normalize_value(&raw).unwrap();
    assert_eq!(record.first_name, "Jo");
    assert!(record.archived);
    assert!(record.insurances.is_empty());
    assert!(record.authorizations.is_empty());
    assert!(record.documents.is_empty());
    assert_eq!(record.last_name, "");
    assert_eq!(record.client_status, "");
}

#[test]
fn record_without_any_id_still_normalizes_with_empty_identity() {
    // Well-formed server rows always carry clientId or id; a row with
    // neither still normalizes totally rather than being rejected.
    let record = normalize_value(&json!({"firstName": "Jo"})).unwrap();
    assert_eq!(record.id, "");
    assert_eq!(record.client_id, "");
    assert_eq!(record.first_name, "Jo");
}

#[test]
fn archived_accepts_each_truthy_spelling() {
    for truthy in [json!(true), json!(1), json!("1"), json!("true")] {
        let record = normalize_value(&json!({"id": 1, "archived": truthy})).unwrap();
        assert!(record.archived, "expected archived for {truthy:?}");
    }
    for falsy in [json!(false), json!(0), json!("0"), json!(""), json!(null)] {
        let record = normalize_value(&json!({"id": 1, "archived": falsy})).unwrap();
        assert!(!record.archived, "expected not archived for {falsy:?}");
    }
}

#[test]
fn client_id_wins_over_id_and_mirrors() {
    let record = normalize_value(&json!({"clientId": "77", "id": "3"})).unwrap();
    assert_eq!(record.id, "77");
    assert_eq!(record.client_id, "77");

    let record = normalize_value(&json!({"id": 3})).unwrap();
    assert_eq!(record.id, "3");
    assert_eq!(record.client_id, "3");
}

#[test]
fn date_of_birth_truncates_to_ten_chars() {
    let record = normalize_value(&json!({"id": 1, "dateOfBirth": "2015-04-03T00:00:00"})).unwrap();
    assert_eq!(record.date_of_birth, "2015-04-03");

    let record = normalize_value(&json!({"id": 1})).unwrap();
    assert_eq!(record.date_of_birth, "");
}

#[test]
fn snake_case_keys_decode_like_camel_case() {
    let record = normalize_value(&json!({
        "id": 1,
        "first_name": "Ana",
        "address_line1": "12 Oak St",
        "wait_list_status": "Yes"
    }))
    .unwrap();
    assert_eq!(record.first_name, "Ana");
    assert_eq!(record.address_line1, "12 Oak St");
    assert_eq!(record.wait_list_status, "Yes");
}

#[test]
fn insurance_link_rewrites_to_positional_index() {
    let record = normalize_value(&json!({
        "id": 1,
        "insurances": [
            {"id": 11, "provider": "Acme"},
            {"id": "12", "provider": "Umbrella"}
        ],
        "authorizations": [
            {"number": "A-1", "insuranceId": "12"},
            {"number": "A-2", "insuranceId": 11},
            {"number": "A-3", "insuranceId": "99"}
        ]
    }))
    .unwrap();
    assert_eq!(record.authorizations[0].insurance_index, "1");
    assert_eq!(record.authorizations[1].insurance_index, "0");
    assert_eq!(record.authorizations[2].insurance_index, "");
}

#[test]
fn already_resolved_index_passes_through() {
    let record = normalize_value(&json!({
        "id": 1,
        "insurances": [{"provider": "Acme"}],
        "authorizations": [{"number": "A-1", "insuranceIndex": "0"}]
    }))
    .unwrap();
    assert_eq!(record.authorizations[0].insurance_index, "0");
}

#[test]
fn balance_is_recomputed_from_units() {
    let record = normalize_value(&json!({
        "id": 1,
        "authorizations": [{
            "unitsApprovedPer15Min": "10",
            "unitsServiced": 4,
            "balanceUnits": "99"
        }]
    }))
    .unwrap();
    assert_eq!(record.authorizations[0].balance_units, "6");
    assert_eq!(record.authorizations[0].units_approved_per_15_min, "10");
    assert_eq!(record.authorizations[0].units_serviced, "4");
}

#[test]
fn non_array_collections_become_empty() {
    let record = normalize_value(&json!({
        "id": 1,
        "insurances": "none",
        "authorizations": 0,
        "documents": {"oops": true}
    }))
    .unwrap();
    assert!(record.insurances.is_empty());
    assert!(record.authorizations.is_empty());
    assert!(record.documents.is_empty());
}

#[test]
fn undecodable_collection_row_is_dropped_alone() {
    let record = normalize_value(&json!({
        "id": 1,
        "documents": [{"type": "Consent Form", "fileUrl": "https://x/y.pdf"}, 42]
    }))
    .unwrap();
    assert_eq!(record.documents.len(), 1);
    assert_eq!(record.documents[0].doc_type, "Consent Form");
}

#[test]
fn non_object_record_is_rejected() {
    assert!(matches!(
        normalize_value(&json!("nope")),
        Err(NormalizeError::NotAnObject)
    ));
    assert!(matches!(
        normalize_value(&json!([1, 2])),
        Err(NormalizeError::NotAnObject)
    ));
}

#[test]
fn batch_skips_bad_records_and_keeps_order() {
    let batch = vec![
        json!({"id": 1, "firstName": "Ana"}),
        json!("garbage"),
        json!({"id": 3, "firstName": "Cem"}),
    ];
    let (records, skipped) = normalize_all(&batch);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].first_name, "Ana");
    assert_eq!(records[1].first_name, "Cem");
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].index, 1);
    assert!(skipped[0].reason.contains("not a JSON object"));
}

fn renormalize(record: &caseline_core::models::ClientRecord) -> caseline_core::models::ClientRecord {
    let value = serde_json::to_value(record).unwrap();
    normalize_value(&value).unwrap()
}

#[test]
fn normalize_is_idempotent_on_worked_example() {
    let raw = json!({
        "id": 9,
        "first_name": "Jo",
        "archived": 1,
        "dateOfBirth": "2016-08-21T00:00:00",
        "insurances": [{"id": 5, "provider": "Acme", "type": "Primary"}],
        "authorizations": [{"number": "A-1", "insuranceId": 5,
                            "unitsApprovedPer15Min": 10, "unitsServiced": 12}],
        "documents": [{"type": "Intake Form", "fileUrl": "https://x/i.pdf"}]
    });
    let once = normalize_value(&raw).unwrap();
    let twice = renormalize(&once);
    assert_eq!(once, twice);
    assert_eq!(once.authorizations[0].insurance_index, "0");
    assert_eq!(once.authorizations[0].balance_units, "-2");
}

fn scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        (-1000i64..1000).prop_map(Value::from),
        "[ -~]{0,12}".prop_map(Value::from),
    ]
}

fn raw_record() -> impl Strategy<Value = Value> {
    (
        scalar(),
        scalar(),
        scalar(),
        scalar(),
        proptest::option::of(proptest::collection::vec(
            (scalar(), scalar()).prop_map(|(id, provider)| json!({"id": id, "provider": provider})),
            0..3,
        )),
    )
        .prop_map(|(id, first, archived, dob, insurances)| {
            json!({
                "id": id,
                "firstName": first,
                "archived": archived,
                "dateOfBirth": dob,
                "insurances": insurances,
            })
        })
}

proptest! {
    #[test]
    fn normalize_is_idempotent(raw in raw_record()) {
        let once = normalize_value(&raw).unwrap();
        let twice = renormalize(&once);
        prop_assert_eq!(once, twice);
    }
}
