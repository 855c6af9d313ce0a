//! Tests for the client-side sorting and windowing used by the listing
//! and search tools
//!
//! These tests focus on:
//! 1. Window arithmetic for all page/per_page combinations
//! 2. Case-insensitive, stable full-name sorting
//! 3. Timestamp sorting with missing values placed last in both directions

use octocrab::models::Repository;
use serde_json::json;

use repolens::github::models::RepositorySummary;
use repolens::github::params::{RepositorySortKey, SortDirection};
use repolens::services::{paginate, sort_repositories};

/// Builds a repository object the way the API would return it
fn repository(name: &str, private: bool, updated_at: Option<&str>) -> Repository {
    serde_json::from_value(json!({
        "id": 1296269,
        "node_id": "MDEwOlJlcG9zaXRvcnkxMjk2MjY5",
        "name": name,
        "full_name": format!("octo/{}", name),
        "private": private,
        "fork": false,
        "url": format!("https://api.github.com/repos/octo/{}", name),
        "html_url": format!("https://github.com/octo/{}", name),
        "description": null,
        "created_at": "2020-01-01T00:00:00Z",
        "updated_at": updated_at,
        "pushed_at": null,
    }))
    .expect("failed to build repository from JSON")
}

fn names(repositories: &[Repository]) -> Vec<&str> {
    repositories.iter().map(|repo| repo.name.as_str()).collect()
}

#[test]
fn test_window_length_matches_formula() {
    // Window length must be min(per_page, max(0, total - (page-1)*per_page))
    let cases = [
        // (total, per_page, page)
        (0usize, 30u32, 1u32),
        (1, 30, 1),
        (30, 30, 1),
        (31, 30, 1),
        (31, 30, 2),
        (95, 10, 10),
        (95, 10, 11),
        (3, 2, 1),
        (3, 2, 2),
        (3, 2, 3),
        (5, 1, 5),
    ];

    for (total, per_page, page) in cases {
        let items: Vec<usize> = (0..total).collect();
        let window = paginate(items, per_page, page);

        let expected = (per_page as usize).min(total.saturating_sub((page as usize - 1) * per_page as usize));
        assert_eq!(
            window.len(),
            expected,
            "total={}, per_page={}, page={}",
            total,
            per_page,
            page
        );
    }
}

#[test]
fn test_window_is_contiguous() {
    let items: Vec<usize> = (0..10).collect();
    assert_eq!(paginate(items.clone(), 3, 2), vec![3, 4, 5]);
    assert_eq!(paginate(items.clone(), 3, 4), vec![9]);
    assert_eq!(paginate(items, 3, 5), Vec::<usize>::new());
}

#[test]
fn test_full_name_sort_is_case_insensitive() {
    // The documented example: public repos named Zeta, alpha, Beta sorted
    // ascending by full name window to [alpha, Beta]
    let mut repositories = vec![
        repository("Zeta", false, None),
        repository("alpha", false, None),
        repository("Beta", false, None),
    ];

    sort_repositories(
        &mut repositories,
        RepositorySortKey::FullName,
        SortDirection::Ascending,
    );
    assert_eq!(names(&repositories), vec!["alpha", "Beta", "Zeta"]);

    let summaries: Vec<RepositorySummary> = paginate(repositories, 2, 1)
        .into_iter()
        .map(RepositorySummary::from_repository)
        .collect();
    let windowed: Vec<&str> = summaries.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(windowed, vec!["alpha", "Beta"]);
}

#[test]
fn test_full_name_sort_descending() {
    let mut repositories = vec![
        repository("alpha", false, None),
        repository("Zeta", false, None),
        repository("Beta", false, None),
    ];

    sort_repositories(
        &mut repositories,
        RepositorySortKey::FullName,
        SortDirection::Descending,
    );
    assert_eq!(names(&repositories), vec!["Zeta", "Beta", "alpha"]);
}

#[test]
fn test_full_name_sort_is_stable() {
    // Names differing only by case compare equal; the fetch order between
    // them must survive the sort
    let mut repositories = vec![
        repository("same", false, None),
        repository("SAME", false, None),
        repository("aaa", false, None),
    ];

    sort_repositories(
        &mut repositories,
        RepositorySortKey::FullName,
        SortDirection::Ascending,
    );
    assert_eq!(names(&repositories), vec!["aaa", "same", "SAME"]);
}

#[test]
fn test_timestamp_sort_ascending() {
    let mut repositories = vec![
        repository("newest", false, Some("2024-06-01T00:00:00Z")),
        repository("oldest", false, Some("2019-01-01T00:00:00Z")),
        repository("middle", false, Some("2022-03-15T12:00:00Z")),
    ];

    sort_repositories(
        &mut repositories,
        RepositorySortKey::Updated,
        SortDirection::Ascending,
    );
    assert_eq!(names(&repositories), vec!["oldest", "middle", "newest"]);
}

#[test]
fn test_timestamp_sort_places_missing_values_last_in_both_directions() {
    for direction in [SortDirection::Ascending, SortDirection::Descending] {
        let mut repositories = vec![
            repository("undated", false, None),
            repository("newer", false, Some("2024-06-01T00:00:00Z")),
            repository("older", false, Some("2019-01-01T00:00:00Z")),
        ];

        sort_repositories(&mut repositories, RepositorySortKey::Updated, direction);

        assert_eq!(
            repositories.last().map(|repo| repo.name.as_str()),
            Some("undated"),
            "missing timestamps must sort last with direction {:?}",
            direction
        );
    }
}

#[test]
fn test_summary_projection_keeps_optional_fields() {
    let summary =
        RepositorySummary::from_repository(repository("hello", true, Some("2024-06-01T00:00:00Z")));

    assert_eq!(summary.name, "hello");
    assert_eq!(summary.full_name, "octo/hello");
    assert!(summary.private);
    assert_eq!(summary.description, None);
    assert_eq!(summary.score, None);
    assert_eq!(
        summary.updated_at.as_deref(),
        Some("2024-06-01T00:00:00+00:00")
    );
    assert_eq!(
        summary.created_at.as_deref(),
        Some("2020-01-01T00:00:00+00:00")
    );
}
