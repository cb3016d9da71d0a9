use caseline_core::models::{ClientRecord, Insurance};
use caseline_roster::{ListFilter, Roster, filter};

fn record(id: &str, first: &str, last: &str, status: &str, archived: bool) -> ClientRecord {
    ClientRecord {
        id: id.to_string(),
        client_id: id.to_string(),
        first_name: first.to_string(),
        last_name: last.to_string(),
        client_status: status.to_string(),
        archived,
        ..ClientRecord::default()
    }
}

fn sample() -> Vec<ClientRecord> {
    vec![
        record("1", "Ana", "Smith", "Active", false),
        record("2", "Ben", "Jones", "Active", false),
        record("3", "Cora", "Smithson", "Inactive", false),
        record("4", "Dan", "Smith", "Active", true),
    ]
}

#[test]
fn query_matches_any_field_case_insensitively() {
    let records = sample();
    let hits = filter(
        &records,
        &ListFilter {
            query: "smith".to_string(),
            ..ListFilter::default()
        },
    );
    let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
    // "Smithson" contains "smith"; the archived Smith is excluded by the
    // default archived=false leg.
    assert_eq!(ids, ["1", "3"]);
}

#[test]
fn empty_query_matches_everything() {
    let records = sample();
    let hits = filter(&records, &ListFilter::default());
    assert_eq!(hits.len(), 3);
}

#[test]
fn status_leg_is_exact_or_wildcard() {
    let records = sample();
    let hits = filter(
        &records,
        &ListFilter {
            status: "Inactive".to_string(),
            ..ListFilter::default()
        },
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "3");

    // Prefixes are not statuses.
    let hits = filter(
        &records,
        &ListFilter {
            status: "In".to_string(),
            ..ListFilter::default()
        },
    );
    assert!(hits.is_empty());
}

#[test]
fn archived_leg_is_strict() {
    let records = sample();
    let hits = filter(
        &records,
        &ListFilter {
            archived: true,
            ..ListFilter::default()
        },
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "4");
}

#[test]
fn query_only_sees_top_level_scalar_fields() {
    let mut records = sample();
    records[1].insurances.push(Insurance {
        provider: "Umbrella Health".to_string(),
        ..Insurance::default()
    });
    // Collection rows are arrays, not scalar fields; their contents do not
    // make a record match.
    let hits = filter(
        &records,
        &ListFilter {
            query: "umbrella".to_string(),
            ..ListFilter::default()
        },
    );
    assert!(hits.is_empty());

    // A top-level scalar with the same text still matches.
    records[1].other_information = "Umbrella case".to_string();
    let hits = filter(
        &records,
        &ListFilter {
            query: "umbrella".to_string(),
            ..ListFilter::default()
        },
    );
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, "2");
}

#[test]
fn filtering_preserves_input_order() {
    let records = sample();
    let hits = filter(
        &records,
        &ListFilter {
            status: "Active".to_string(),
            ..ListFilter::default()
        },
    );
    let ids: Vec<&str> = hits.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["1", "2"]);
}

#[test]
fn roster_replaces_wholesale() {
    let mut roster = Roster::new();
    roster.replace(sample());
    assert_eq!(roster.len(), 4);

    roster.replace(vec![record("9", "Eve", "Lund", "New", false)]);
    assert_eq!(roster.len(), 1);
    assert!(roster.find("1").is_none());
    assert_eq!(roster.find("9").map(|r| r.first_name.as_str()), Some("Eve"));
}
