//! End-to-end audit flow over in-memory search pages. No network.

use nexus_image_audit::audit::{self, Answer};
use nexus_image_audit::cli::OperationMode;
use nexus_image_audit::registry::SearchResponse;
use regex::Regex;

/// Two pages as the search endpoint would return them: the first carries a
/// continuation token, the second ends the pagination.
const PAGE_ONE: &str = r#"{
    "items": [
        {"name": "acumos/portal-be", "version": "1.16.0", "id": "aaa111", "repository": "docker.snapshot"},
        {"name": "acumos/portal-fe", "version": "1.16.0-SNAPSHOT", "id": "bbb222", "repository": "docker.snapshot"}
    ],
    "continuationToken": "88491cd1d185dd136f143f20c4e7d50c"
}"#;

const PAGE_TWO: &str = r#"{
    "items": [
        {"name": "acumos/onboarding", "version": "2.0.0-SNAPSHOT", "id": "ccc333"},
        {"name": "acumos/broken-record", "version": "1.0.0"}
    ],
    "continuationToken": null
}"#;

fn enumerate_pages() -> Vec<nexus_image_audit::registry::RawComponent> {
    let mut items = Vec::new();
    let mut token: Option<String> = None;

    for (index, body) in [PAGE_ONE, PAGE_TWO].iter().enumerate() {
        if index > 0 {
            assert!(token.is_some(), "second page fetched without a token");
        }
        let page: SearchResponse = serde_json::from_str(body).unwrap();
        token = page.next_token().map(str::to_string);
        items.extend(page.items);
    }

    assert!(token.is_none(), "pagination did not terminate");
    items
}

#[test]
fn enumeration_concatenates_pages_in_fetch_order() {
    let items = enumerate_pages();
    assert_eq!(items.len(), 4);

    let components = audit::eligible_components(items);
    // The id-less record on page two is silently dropped.
    assert_eq!(components.len(), 3);
    assert_eq!(components[0].id, "aaa111");
    assert_eq!(components[1].id, "bbb222");
    assert_eq!(components[2].id, "ccc333");
}

#[test]
fn keep_and_delete_partition_the_enumerated_set() {
    let components = audit::eligible_components(enumerate_pages());
    let pattern = Regex::new("SNAPSHOT").unwrap();

    let deleted = audit::select(&components, &pattern, OperationMode::Delete);
    let kept = audit::select(&components, &pattern, OperationMode::Keep);

    let deleted_ids: Vec<&str> = deleted.iter().map(|c| c.id.as_str()).collect();
    let kept_ids: Vec<&str> = kept.iter().map(|c| c.id.as_str()).collect();

    assert_eq!(deleted_ids, ["bbb222", "ccc333"]);
    assert_eq!(kept_ids, ["aaa111"]);
    assert_eq!(deleted.len() + kept.len(), components.len());
}

#[test]
fn list_mode_snapshot_matches_the_selection() {
    let components = audit::eligible_components(enumerate_pages());
    let pattern = Regex::new("SNAPSHOT").unwrap();
    let selected = audit::select(&components, &pattern, OperationMode::List);

    let mut buffer: Vec<u8> = Vec::new();
    audit::write_csv(&mut buffer, &selected).unwrap();

    let written = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "\"name\",\"version\",\"id\"");
    assert_eq!(lines.len(), 1 + selected.len());
    assert!(lines[1].contains("\"1.16.0-SNAPSHOT\""));
    assert!(lines[2].contains("\"2.0.0-SNAPSHOT\""));
}

#[test]
fn empty_confirmation_answer_aborts_the_run() {
    assert_eq!(audit::parse_answer(""), Answer::No);
    assert_eq!(audit::parse_answer("\n"), Answer::No);
    // An unrecognized answer is neither confirmation nor abort.
    assert_eq!(audit::parse_answer("perhaps"), Answer::Unrecognized);
    assert_eq!(audit::parse_answer("yes"), Answer::Yes);
}
