//! In-memory store plus a stand-in for the deployment pipeline: deployments
//! get sequential ids and every definition gets `max(version for key) + 1`.

use ::rusqlite::{Connection, params};
use flowdef::sqlite::schema;

pub fn setup_db() -> Connection {
    let conn = Connection::open_in_memory().expect("Failed to create in-memory database");
    schema::create_tables(&conn).expect("Failed to create tables");
    conn
}

/// One process in a deployment payload.
#[derive(Debug, Clone, Copy, Default)]
pub struct Resource<'a> {
    pub resource_name: &'a str,
    pub key: &'a str,
    pub name: Option<&'a str>,
    pub category: Option<&'a str>,
    pub message_start_events: &'a [&'a str],
}

pub const ONE: Resource<'static> = Resource {
    resource_name: "org/flowable/engine/test/repository/one.bpmn20.xml",
    key: "one",
    name: Some("One"),
    category: Some("Examples"),
    message_start_events: &[],
};

pub const TWO: Resource<'static> = Resource {
    resource_name: "org/flowable/engine/test/repository/two.bpmn20.xml",
    key: "two",
    name: Some("Two"),
    category: Some("Examples2"),
    message_start_events: &[],
};

pub const NEW_BOOKING: Resource<'static> = Resource {
    resource_name: "processWithNewBookingMessage.bpmn20.xml",
    key: "newBookingProcess",
    name: Some("New booking"),
    category: None,
    message_start_events: &["newBookingMessage"],
};

pub const NEW_INVOICE: Resource<'static> = Resource {
    resource_name: "processWithNewInvoiceMessage.bpmn20.xml",
    key: "newInvoiceProcess",
    name: Some("New invoice"),
    category: None,
    message_start_events: &["newInvoiceMessage"],
};

fn next_id(conn: &Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT count(*) + 1 FROM {table}"), [], |row| row.get(0))
        .expect("Failed to compute next id")
}

/// Persists a deployment and its definitions, returning the deployment id.
pub fn deploy(conn: &Connection, name: &str, resources: &[Resource<'_>]) -> String {
    let sequence: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(CAST(ID_ AS INTEGER)), 0) + 1 FROM ACT_RE_DEPLOYMENT",
            [],
            |row| row.get(0),
        )
        .expect("Failed to compute deployment id");
    let deployment_id = sequence.to_string();
    conn.execute(
        "INSERT INTO ACT_RE_DEPLOYMENT (ID_, NAME_, DEPLOY_TIME_) VALUES (?1, ?2, datetime('now'))",
        params![deployment_id, name],
    )
    .expect("Failed to insert deployment");

    for resource in resources {
        let latest: Option<i64> = conn
            .query_row(
                "SELECT MAX(VERSION_) FROM ACT_RE_PROCDEF WHERE KEY_ = ?1",
                [resource.key],
                |row| row.get(0),
            )
            .expect("Failed to read latest version");
        let version = latest.unwrap_or(0) + 1;
        let id = format!("{}:{}:{}", resource.key, version, deployment_id);

        conn.execute(
            "INSERT INTO ACT_RE_PROCDEF \
             (ID_, KEY_, NAME_, CATEGORY_, VERSION_, DEPLOYMENT_ID_, RESOURCE_NAME_) \
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                id,
                resource.key,
                resource.name,
                resource.category,
                version,
                deployment_id,
                resource.resource_name
            ],
        )
        .expect("Failed to insert process definition");

        for message in resource.message_start_events {
            let subscription_id = next_id(conn, "ACT_RU_EVENT_SUBSCR");
            conn.execute(
                "INSERT INTO ACT_RU_EVENT_SUBSCR (ID_, EVENT_TYPE_, EVENT_NAME_, PROC_DEF_ID_) \
                 VALUES (?1, 'message', ?2, ?3)",
                params![subscription_id.to_string(), message, id],
            )
            .expect("Failed to insert event subscription");
        }
    }

    deployment_id
}

/// Removes a deployment; its definitions and subscriptions cascade.
pub fn delete_deployment(conn: &Connection, deployment_id: &str) {
    conn.execute("DELETE FROM ACT_RE_DEPLOYMENT WHERE ID_ = ?1", [deployment_id])
        .expect("Failed to delete deployment");
}

/// Two deployments: the first carries `one` and `two`, the second redeploys
/// `one` as version 2.
pub struct Fixture {
    pub conn: Connection,
    pub deployment_one_id: String,
    pub deployment_two_id: String,
}

pub fn setup() -> Fixture {
    let conn = setup_db();
    let deployment_one_id = deploy(&conn, ONE.resource_name, &[ONE, TWO]);
    let deployment_two_id = deploy(&conn, ONE.resource_name, &[ONE]);
    Fixture {
        conn,
        deployment_one_id,
        deployment_two_id,
    }
}
