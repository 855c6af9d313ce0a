//! Tests for the closed parameter enumerations
//!
//! The serde names are the wire contract for tool arguments; these tests
//! pin them, verify that unrecognized values are rejected at the decode
//! boundary, and check the provider-facing string mappings.

use std::str::FromStr;

use serde_json::json;

use repolens::github::params::{
    RepositoryFilter, RepositorySortKey, SearchSortKey, SortDirection,
};

#[test]
fn test_repository_filter_wire_names() {
    let cases = [
        ("all", RepositoryFilter::All),
        ("owner", RepositoryFilter::Owner),
        ("public", RepositoryFilter::Public),
        ("private", RepositoryFilter::Private),
        ("member", RepositoryFilter::Member),
    ];

    for (wire, expected) in cases {
        let parsed: RepositoryFilter = serde_json::from_value(json!(wire)).unwrap();
        assert_eq!(parsed, expected, "wire value {:?}", wire);
    }
}

#[test]
fn test_sort_key_wire_names() {
    let parsed: RepositorySortKey = serde_json::from_value(json!("full_name")).unwrap();
    assert_eq!(parsed, RepositorySortKey::FullName);

    let parsed: RepositorySortKey = serde_json::from_value(json!("pushed")).unwrap();
    assert_eq!(parsed, RepositorySortKey::Pushed);

    let parsed: SearchSortKey = serde_json::from_value(json!("help-wanted-issues")).unwrap();
    assert_eq!(parsed, SearchSortKey::HelpWantedIssues);

    let parsed: SortDirection = serde_json::from_value(json!("asc")).unwrap();
    assert_eq!(parsed, SortDirection::Ascending);

    let parsed: SortDirection = serde_json::from_value(json!("desc")).unwrap();
    assert_eq!(parsed, SortDirection::Descending);
}

#[test]
fn test_unrecognized_values_are_rejected() {
    assert!(serde_json::from_value::<RepositoryFilter>(json!("bogus")).is_err());
    assert!(serde_json::from_value::<RepositorySortKey>(json!("stars")).is_err());
    assert!(serde_json::from_value::<SearchSortKey>(json!("full_name")).is_err());
    assert!(serde_json::from_value::<SortDirection>(json!("ascending")).is_err());
}

#[test]
fn test_defaults() {
    assert_eq!(RepositoryFilter::default(), RepositoryFilter::All);
    assert_eq!(RepositorySortKey::default(), RepositorySortKey::Updated);
    assert_eq!(SortDirection::default(), SortDirection::Descending);
}

#[test]
fn test_api_string_mappings() {
    assert_eq!(SearchSortKey::Stars.to_str(), "stars");
    assert_eq!(SearchSortKey::Forks.to_str(), "forks");
    assert_eq!(SearchSortKey::HelpWantedIssues.to_str(), "help-wanted-issues");
    assert_eq!(SearchSortKey::Updated.to_str(), "updated");

    assert_eq!(SortDirection::Ascending.to_str(), "asc");
    assert_eq!(SortDirection::Descending.to_str(), "desc");
}

#[test]
fn test_filter_affiliation_mapping() {
    assert_eq!(RepositoryFilter::All.affiliation(), None);
    assert_eq!(RepositoryFilter::Owner.affiliation(), Some("owner"));
    assert_eq!(
        RepositoryFilter::Member.affiliation(),
        Some("collaborator,organization_member")
    );
    // public/private filter client-side, not through the API parameter
    assert_eq!(RepositoryFilter::Public.affiliation(), None);
    assert_eq!(RepositoryFilter::Private.affiliation(), None);
}

#[test]
fn test_filter_retains() {
    assert!(RepositoryFilter::Public.retains(false));
    assert!(!RepositoryFilter::Public.retains(true));
    assert!(RepositoryFilter::Private.retains(true));
    assert!(!RepositoryFilter::Private.retains(false));
    assert!(RepositoryFilter::All.retains(true));
    assert!(RepositoryFilter::All.retains(false));
}

#[test]
fn test_from_str_parsing() {
    // strum parsing is used by callers driving the library directly
    assert_eq!(
        RepositoryFilter::from_str("owner").unwrap(),
        RepositoryFilter::Owner
    );
    assert_eq!(
        RepositorySortKey::from_str("full_name").unwrap(),
        RepositorySortKey::FullName
    );
    assert!(RepositoryFilter::from_str("bogus").is_err());
}
