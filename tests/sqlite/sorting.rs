use crate::common::helpers::assert_invalid_argument;
use crate::common::setup;
use flowdef::prelude::*;

#[test]
fn test_query_sorting() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    // asc
    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_id().asc().unwrap();
    assert_eq!(query.list().unwrap().len(), 3);

    let mut query = repository.create_process_definition_query();
    query.order_by_deployment_id().asc().unwrap();
    assert_eq!(query.list().unwrap().len(), 3);

    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_key().asc().unwrap();
    assert_eq!(query.list().unwrap().len(), 3);

    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_version().asc().unwrap();
    assert_eq!(query.list().unwrap().len(), 3);

    // desc
    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_id().desc().unwrap();
    assert_eq!(query.list().unwrap().len(), 3);

    let mut query = repository.create_process_definition_query();
    query.order_by_deployment_id().desc().unwrap();
    let list = query.list().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].deployment_id(), fixture.deployment_two_id);

    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_key().desc().unwrap();
    assert_eq!(query.list().unwrap().len(), 3);

    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_version().desc().unwrap();
    let list = query.list().unwrap();
    assert_eq!(list.len(), 3);
    assert_eq!(list[0].version(), 2);

    // Typical use case
    let mut query = repository.create_process_definition_query();
    query
        .order_by_process_definition_key()
        .asc()
        .unwrap()
        .order_by_process_definition_version()
        .desc()
        .unwrap();
    let list = query.list().unwrap();
    assert_eq!(list.len(), 3);

    let ordered: Vec<_> = list.iter().map(|d| (d.key(), d.version())).collect();
    assert_eq!(ordered, [("one", 2), ("one", 1), ("two", 1)]);
}

#[test]
fn test_sort_by_nullable_name() {
    let conn = crate::common::setup_db();
    crate::common::deploy(&conn, "unnamed", &[crate::common::Resource {
        resource_name: "unnamed.bpmn20.xml",
        key: "unnamed",
        ..Default::default()
    }]);
    crate::common::deploy(&conn, "named", &[crate::common::ONE]);

    let repository = RepositoryService::new(&conn);
    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_name().asc().unwrap();
    let list = query.list().unwrap();

    // SQLite orders NULL first when ascending.
    assert_eq!(list[0].name(), None);
    assert_eq!(list[1].name(), Some("One"));
}

#[test]
fn test_direction_without_sort_key_is_rejected() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    assert_invalid_argument(repository.create_process_definition_query().asc());
    assert_invalid_argument(repository.create_process_definition_query().desc());

    // Each direction consumes the pending key.
    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_key().asc().unwrap();
    assert_invalid_argument(query.desc());
}

#[test]
fn test_unbound_sort_key_fails_execution() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_key();

    assert_invalid_argument(query.list());
    assert_invalid_argument(query.count());
    assert_invalid_argument(query.single_result());
    assert_invalid_argument(query.list_page(0, 1));

    query.asc().unwrap();
    assert_eq!(query.count().unwrap(), 3);
}

#[test]
fn test_pending_sort_key_is_replaced() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    let mut query = repository.create_process_definition_query();
    query
        .order_by_process_definition_key()
        .order_by_process_definition_version()
        .desc()
        .unwrap();

    let sorts = query.criteria().sorts();
    assert_eq!(sorts.len(), 1);
    assert_eq!(sorts[0].field, SortField::Version);

    let list = query.list().unwrap();
    assert_eq!(list[0].version(), 2);
}
