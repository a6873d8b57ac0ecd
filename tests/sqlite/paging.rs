use crate::common::setup;
use flowdef::prelude::*;

#[test]
fn test_list_page() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_id().asc().unwrap();

    assert_eq!(query.list_page(0, 2).unwrap().len(), 2);
    assert_eq!(query.list_page(1, 3).unwrap().len(), 2);
    assert_eq!(query.list_page(3, 3).unwrap().len(), 0);
    assert_eq!(query.list_page(0, 0).unwrap().len(), 0);

    // Paging the list never changes the stored criteria.
    assert_eq!(query.list().unwrap().len(), 3);
}

#[test]
fn test_pages_follow_sort_order() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_id().desc().unwrap();

    let all = query.list().unwrap();
    let mut paged = query.list_page(0, 1).unwrap();
    paged.extend(query.list_page(1, 1).unwrap());
    paged.extend(query.list_page(2, 1).unwrap());
    assert_eq!(paged, all);
}

#[test]
fn test_first_and_max_results() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    let mut query = repository.create_process_definition_query();
    query.max_results(2).unwrap();
    assert_eq!(query.list().unwrap().len(), 2);
    assert_eq!(query.count().unwrap(), 3);

    let mut query = repository.create_process_definition_query();
    query.first_result(1).unwrap().max_results(3).unwrap();
    assert_eq!(query.list().unwrap().len(), 2);

    let mut query = repository.create_process_definition_query();
    query.first_result(2).unwrap();
    assert_eq!(query.list().unwrap().len(), 1);
}

#[test]
fn test_list_never_exceeds_count() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    let mut by_key = repository.create_process_definition_query();
    by_key.process_definition_key("one").unwrap();

    let mut latest = repository.create_process_definition_query();
    latest.latest_version().unwrap();

    let mut none = repository.create_process_definition_query();
    none.process_definition_name("missing").unwrap();

    for query in [&by_key, &latest, &none] {
        let count = query.count().unwrap();
        assert!(query.list().unwrap().len() as u64 <= count);
    }
}
