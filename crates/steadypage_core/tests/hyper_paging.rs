use steadypage_core::{index_range, InMemorySource, PageError, Paginator};

#[test]
fn index_range_matches_documented_examples() {
    assert_eq!(index_range(1, 7), (0, 7));
    assert_eq!(index_range(3, 15), (30, 45));
}

#[test]
fn positional_page_returns_requested_slice() {
    let paginator = paginator_with(25);

    let page = paginator.get_page(2, 10).unwrap();

    assert_eq!(page.len(), 10);
    assert_eq!(page[0].get(0), Some("10"));
    assert_eq!(page[9].get(0), Some("19"));
}

#[test]
fn positional_page_past_end_is_empty() {
    let paginator = paginator_with(25);

    assert!(paginator.get_page(4, 10).unwrap().is_empty());
    assert!(paginator.get_page(1000, 3).unwrap().is_empty());
}

#[test]
fn positional_page_rejects_zero_arguments() {
    let paginator = paginator_with(25);

    let page_err = paginator.get_page(0, 10).unwrap_err();
    assert!(matches!(page_err, PageError::InvalidPageNumber { page: 0 }));

    let size_err = paginator.get_page(1, 0).unwrap_err();
    assert!(matches!(size_err, PageError::InvalidPageSize { page_size: 0 }));
}

#[test]
fn hyper_middle_page_links_both_directions() {
    let paginator = paginator_with(25);

    let hyper = paginator.get_hyper(2, 10).unwrap();

    assert_eq!(hyper.page, 2);
    assert_eq!(hyper.page_size, 10);
    assert_eq!(hyper.prev_page, Some(1));
    assert_eq!(hyper.next_page, Some(3));
    assert_eq!(hyper.total_pages, 3);
}

#[test]
fn hyper_first_page_has_no_prev_link() {
    let paginator = paginator_with(25);

    let hyper = paginator.get_hyper(1, 10).unwrap();

    assert_eq!(hyper.prev_page, None);
    assert_eq!(hyper.next_page, Some(2));
}

#[test]
fn hyper_last_page_is_short_with_no_next_link() {
    let paginator = paginator_with(25);

    let hyper = paginator.get_hyper(3, 10).unwrap();

    assert_eq!(hyper.data.len(), 5);
    assert_eq!(hyper.page_size, 5);
    assert_eq!(hyper.next_page, None);
    assert_eq!(hyper.prev_page, Some(2));
}

#[test]
fn hyper_page_past_end_is_empty_without_next_link() {
    let paginator = paginator_with(25);

    let hyper = paginator.get_hyper(9, 10).unwrap();

    assert!(hyper.data.is_empty());
    assert_eq!(hyper.page_size, 0);
    assert_eq!(hyper.next_page, None);
    assert_eq!(hyper.total_pages, 3);
}

#[test]
fn positional_reads_slice_the_snapshot_not_the_live_map() {
    let paginator = paginator_with(6);
    paginator.delete(0).unwrap();

    // The snapshot keeps the deleted record in place.
    let positional = paginator.get_page(1, 3).unwrap();
    assert_eq!(positional[0].get(0), Some("0"));

    // The index cursor observes the deletion.
    let resilient = paginator.get_index_page(Some(0), 3).unwrap();
    assert_eq!(resilient.records[0].get(0), Some("1"));
}

#[test]
fn index_page_serializes_with_wire_field_names() {
    let paginator = paginator_with(4);
    paginator.delete(1).unwrap();

    let page = paginator.get_index_page(Some(0), 2).unwrap();
    let encoded = serde_json::to_value(&page).unwrap();

    assert_eq!(encoded["index"], 0);
    assert_eq!(encoded["page_size"], 2);
    assert_eq!(encoded["next_index"], 3);
    assert_eq!(encoded["data"][0][0], "0");
    assert_eq!(encoded["data"][1][0], "2");
}

#[test]
fn hyper_page_serializes_navigation_links() {
    let paginator = paginator_with(4);

    let hyper = paginator.get_hyper(2, 2).unwrap();
    let encoded = serde_json::to_value(&hyper).unwrap();

    assert_eq!(encoded["page"], 2);
    assert_eq!(encoded["page_size"], 2);
    assert_eq!(encoded["prev_page"], 1);
    assert_eq!(encoded["next_page"], serde_json::Value::Null);
    assert_eq!(encoded["total_pages"], 2);
    assert_eq!(encoded["data"][0][0], "2");
}

fn paginator_with(record_count: usize) -> Paginator<InMemorySource> {
    let mut rows = vec![vec!["rank".to_string(), "name".to_string()]];
    for index in 0..record_count {
        rows.push(vec![index.to_string(), format!("name-{index}")]);
    }
    Paginator::new(InMemorySource::new(rows))
}
