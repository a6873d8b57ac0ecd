use crate::common::helpers::assert_invalid_argument;
use crate::common::setup;
use flowdef::prelude::*;

#[test]
fn test_rejected_input_leaves_criteria_untouched() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    let mut query = repository.create_process_definition_query();
    query
        .process_definition_key("one")
        .unwrap()
        .order_by_process_definition_version()
        .desc()
        .unwrap();
    let before = query.criteria().clone();

    assert_invalid_argument(query.process_definition_version(-1));
    assert_invalid_argument(query.process_definition_name(None::<&str>));
    assert_invalid_argument(query.process_definition_name_like(None::<&str>));
    assert_invalid_argument(query.process_definition_category_like(None::<&str>));
    assert_invalid_argument(query.process_definition_resource_name(None::<&str>));
    assert_invalid_argument(query.deployment_id(None::<&str>));
    assert_invalid_argument(query.asc());

    assert_eq!(query.criteria(), &before);
    assert_eq!(query.count().unwrap(), 2);
}

#[test]
fn test_dangling_escape_is_rejected() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    assert_invalid_argument(
        repository
            .create_process_definition_query()
            .process_definition_key_like("one\\"),
    );
}

#[test]
fn test_escaped_wildcards_match_literally() {
    let conn = crate::common::setup_db();
    crate::common::deploy(&conn, "odd", &[
        crate::common::Resource {
            resource_name: "a.bpmn20.xml",
            key: "100%_done",
            ..Default::default()
        },
        crate::common::Resource {
            resource_name: "b.bpmn20.xml",
            key: "100x_done",
            ..Default::default()
        },
        crate::common::Resource {
            resource_name: "c.bpmn20.xml",
            key: "glob*[x]?",
            ..Default::default()
        },
    ]);
    let repository = RepositoryService::new(&conn);

    let mut query = repository.create_process_definition_query();
    query.process_definition_key_like("100\\%%").unwrap();
    assert_eq!(query.single_result().unwrap().unwrap().key(), "100%_done");

    let mut query = repository.create_process_definition_query();
    query.process_definition_key_like("100_\\_done").unwrap();
    assert_eq!(query.count().unwrap(), 2);

    // GLOB metacharacters in the pattern are plain text.
    let mut query = repository.create_process_definition_query();
    query.process_definition_key_like("glob*[x]?").unwrap();
    assert_eq!(query.count().unwrap(), 1);

    let mut query = repository.create_process_definition_query();
    query.process_definition_key_like("glob*").unwrap();
    assert_eq!(query.count().unwrap(), 0);
}

#[test]
fn test_executed_query_is_frozen() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    let mut query = repository.create_process_definition_query();
    assert_eq!(query.count().unwrap(), 3);
    let executed = query.criteria().clone();

    assert_invalid_argument(query.process_definition_key("two"));
    assert_invalid_argument(query.process_definition_version(1));
    assert_invalid_argument(query.latest_version());
    assert_invalid_argument(query.first_result(1));
    assert_invalid_argument(query.max_results(1));
    assert_invalid_argument(query.order_by_process_definition_key().asc());

    assert_eq!(query.criteria(), &executed);
    assert_eq!(query.count().unwrap(), 3);
    assert_eq!(query.list().unwrap().len(), 3);
}

#[test]
fn test_every_execution_method_freezes() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    let mut listed = repository.create_process_definition_query();
    listed.list().unwrap();
    assert_invalid_argument(listed.process_definition_key("one"));

    let mut paged = repository.create_process_definition_query();
    paged.list_page(0, 1).unwrap();
    assert_invalid_argument(paged.process_definition_key("one"));

    let mut single = repository.create_process_definition_query();
    single.process_definition_key("two").unwrap();
    single.single_result().unwrap();
    assert_invalid_argument(single.process_definition_name("Two"));
}

#[test]
fn test_rejected_execution_keeps_query_editable() {
    let fixture = setup();
    let repository = RepositoryService::new(&fixture.conn);

    let mut query = repository.create_process_definition_query();
    query.order_by_process_definition_version();
    assert_invalid_argument(query.list());

    query.desc().unwrap().process_definition_key("one").unwrap();
    assert_eq!(query.list().unwrap()[0].version(), 2);
}
