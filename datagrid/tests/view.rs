use datagrid::view::{filter, page_bounds, sort};
use datagrid::{compute, field_text, Column, Record, SortDirection, ViewState};
use serde_json::{json, Value};

fn records(values: Value) -> Vec<Record> {
    values
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_object().cloned().unwrap())
        .collect()
}

fn ids(records: &[Record]) -> Vec<i64> {
    records.iter().map(|r| r["id"].as_i64().unwrap()).collect()
}

fn people() -> Vec<Record> {
    records(json!([
        {"id": 1, "name": "Carol", "role": "admin"},
        {"id": 2, "name": "alice", "role": "user"},
        {"id": 3, "name": "Bob", "role": "Admin"},
        {"id": 4, "name": "alice", "role": "guest"},
        {"id": 5, "name": "dave"},
        {"id": 6, "name": "Bob", "role": null},
    ]))
}

fn people_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").sortable(),
        Column::new("role", "Role").sortable(),
    ]
}

fn numbered(count: i64) -> Vec<Record> {
    (1..=count)
        .map(|i| json!({"id": i, "name": format!("row {i:02}")}).as_object().cloned().unwrap())
        .collect()
}

// ============================================================================
// Scenarios
// ============================================================================

#[test]
fn test_search_narrows_to_matching_record() {
    let records = records(json!([{"id": 1, "name": "Bat"}, {"id": 2, "name": "Bold"}]));
    let columns = vec![Column::new("name", "Name").sortable()];
    let mut state = ViewState::new(&columns, 10);
    state.set_search("bo");

    let derived = compute(&records, &state, &columns);
    assert_eq!(derived.total_count, 2);
    assert_eq!(derived.filtered_count, 1);
    assert_eq!(ids(&derived.visible_records), vec![2]);
    assert_eq!(field_text(&derived.visible_records[0], "name"), "Bold");
}

#[test]
fn test_last_page_holds_remainder() {
    let records = numbered(25);
    let columns = vec![Column::new("name", "Name").sortable()];
    let mut state = ViewState::new(&columns, 10);

    let derived = compute(&records, &state, &columns);
    assert_eq!(derived.total_pages, 3);
    assert_eq!(derived.visible_records.len(), 10);

    state.set_page(3, derived.total_pages);
    let derived = compute(&records, &state, &columns);
    assert_eq!(derived.visible_records.len(), 5);
    assert_eq!(derived.range, 20..25);
    assert_eq!(ids(&derived.visible_records), vec![21, 22, 23, 24, 25]);
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_filter_is_case_insensitive_substring() {
    let records = people();
    let columns = people_columns();
    let matched = filter(&records, "admin", &columns);
    let matched: Vec<i64> = matched.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(matched, vec![1, 3]);
}

#[test]
fn test_query_is_trimmed_and_lowercased() {
    let records = people();
    let columns = people_columns();
    let mut state = ViewState::new(&columns, 10);
    state.set_search("  ALICE ");
    assert_eq!(compute(&records, &state, &columns).filtered_count, 2);
}

#[test]
fn test_only_column_fields_are_searched() {
    let records = records(json!([{"id": 1, "name": "x", "secret": "needle"}]));
    let columns = vec![Column::new("name", "Name")];
    assert!(filter(&records, "needle", &columns).is_empty());
}

#[test]
fn test_null_and_absent_fields_match_nothing() {
    let records = people();
    let columns = people_columns();
    let mut state = ViewState::new(&columns, 10);
    state.set_search("null");
    assert_eq!(compute(&records, &state, &columns).filtered_count, 0);
    state.set_search("undefined");
    assert_eq!(compute(&records, &state, &columns).filtered_count, 0);
}

#[test]
fn test_numbers_match_by_text() {
    let records = records(json!([{"id": 1, "room": 101}, {"id": 2, "room": 202}]));
    let columns = vec![Column::new("room", "Room")];
    let matched = filter(&records, "10", &columns);
    assert_eq!(matched.len(), 1);
}

#[test]
fn test_filtered_records_all_contain_query() {
    let records = people();
    let columns = people_columns();
    for query in ["", "a", "b", "o", "min", "zzz", "e"] {
        let matched = filter(&records, query, &columns);
        assert!(matched.len() <= records.len());
        for record in matched {
            assert!(
                columns
                    .iter()
                    .any(|c| field_text(record, &c.key).to_lowercase().contains(query)),
                "{record:?} does not contain {query:?}"
            );
        }
    }
}

#[test]
fn test_search_resets_page() {
    let columns = people_columns();
    let mut state = ViewState::new(&columns, 2);
    state.set_page(3, 3);
    assert_eq!(state.current_page, 3);
    state.set_search("a");
    assert_eq!(state.current_page, 1);
}

// ============================================================================
// Sorting
// ============================================================================

#[test]
fn test_sort_is_case_insensitive() {
    let records = people();
    let refs: Vec<&Record> = records.iter().collect();
    let sorted = sort(refs, "name", SortDirection::Ascending);
    let names: Vec<String> = sorted.iter().map(|r| field_text(r, "name")).collect();
    assert_eq!(names, vec!["alice", "alice", "Bob", "Bob", "Carol", "dave"]);
}

#[test]
fn test_ties_keep_input_order() {
    let records = people();
    let refs: Vec<&Record> = records.iter().collect();
    let sorted = sort(refs.clone(), "name", SortDirection::Ascending);
    let order: Vec<i64> = sorted.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(order, vec![2, 4, 3, 6, 1, 5]);

    let sorted = sort(refs, "name", SortDirection::Descending);
    let order: Vec<i64> = sorted.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    assert_eq!(order, vec![5, 1, 3, 6, 2, 4]);
}

#[test]
fn test_missing_values_sort_first_ascending() {
    let records = people();
    let refs: Vec<&Record> = records.iter().collect();
    let sorted = sort(refs, "role", SortDirection::Ascending);
    let order: Vec<i64> = sorted.iter().map(|r| r["id"].as_i64().unwrap()).collect();
    // 5 (absent) and 6 (null) are both empty text.
    assert_eq!(&order[..2], &[5, 6]);
}

#[test]
fn test_unknown_sort_key_keeps_input_order() {
    let records = people();
    let columns = people_columns();
    let mut state = ViewState::new(&columns, 10);
    state.toggle_sort("nonexistent");
    let derived = compute(&records, &state, &columns);
    assert_eq!(ids(&derived.visible_records), ids(&records));
}

#[test]
fn test_toggling_twice_restores_order() {
    let records = people();
    let columns = people_columns();
    for key in ["name", "role", "id", "missing"] {
        let mut state = ViewState::new(&columns, 10);
        state.toggle_sort(key);
        let before = compute(&records, &state, &columns);
        state.toggle_sort(key);
        state.toggle_sort(key);
        let after = compute(&records, &state, &columns);
        assert_eq!(before.visible_records, after.visible_records, "key {key}");
    }
}

#[test]
fn test_toggle_sort_switches_key_ascending() {
    let columns = people_columns();
    let mut state = ViewState::new(&columns, 10);
    assert_eq!(state.sort_key, "name");
    state.toggle_sort("name");
    assert_eq!(state.sort_direction, SortDirection::Descending);
    state.toggle_sort("role");
    assert_eq!(state.sort_key, "role");
    assert_eq!(state.sort_direction, SortDirection::Ascending);
}

#[test]
fn test_search_results_are_sorted() {
    let records = people();
    let columns = people_columns();
    let mut state = ViewState::new(&columns, 10);
    state.toggle_sort("name");
    state.set_search("o");
    let derived = compute(&records, &state, &columns);
    let names: Vec<String> = derived
        .visible_records
        .iter()
        .map(|r| field_text(r, "name"))
        .collect();
    assert_eq!(names, vec!["Carol", "Bob", "Bob"]);
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_pages_partition_filtered_set() {
    let records = numbered(23);
    let columns = vec![Column::new("name", "Name").sortable()];
    for page_size in [1, 3, 5, 10, 23, 50] {
        let mut state = ViewState::new(&columns, page_size);
        let first = compute(&records, &state, &columns);
        let mut seen = Vec::new();
        for page in 1..=first.total_pages {
            state.set_page(page, first.total_pages);
            let derived = compute(&records, &state, &columns);
            assert!(derived.visible_records.len() <= page_size);
            seen.extend(ids(&derived.visible_records));
        }
        assert_eq!(seen.len(), first.filtered_count, "page size {page_size}");
        assert_eq!(seen, (1..=23).collect::<Vec<_>>());
    }
}

#[test]
fn test_set_page_clamps() {
    let columns = people_columns();
    let mut state = ViewState::new(&columns, 10);
    state.set_page(9, 3);
    assert_eq!(state.current_page, 3);
    state.set_page(0, 3);
    assert_eq!(state.current_page, 1);
    state.set_page(4, 0);
    assert_eq!(state.current_page, 1);
}

#[test]
fn test_out_of_range_page_is_empty() {
    let records = numbered(5);
    let columns = vec![Column::new("name", "Name")];
    let mut state = ViewState::new(&columns, 10);
    state.current_page = 7;
    let derived = compute(&records, &state, &columns);
    assert!(derived.is_empty());
    assert_eq!(derived.filtered_count, 5);
    assert_eq!(page_bounds(7, 10, 5), 5..5);
}

#[test]
fn test_empty_records() {
    let columns = people_columns();
    let state = ViewState::new(&columns, 10);
    let derived = compute(&[], &state, &columns);
    assert_eq!(derived.total_count, 0);
    assert_eq!(derived.total_pages, 0);
    assert!(derived.is_empty());
    assert!(!derived.has_pagination());
}
