//! Renders a [`Criteria`] into SQLite statements.
//!
//! Every caller value becomes a bound parameter; only column names and
//! operators are written into the statement text.

use crate::schema::{EVENT_SUBSCRIPTION_TABLE, MESSAGE_EVENT_TYPE, PROCESS_DEFINITION_TABLE};
use crate::values::SQLiteValue;
use flowdef_core::{Criteria, Field, Operator, Paging, Predicate, PredicateValue, SQL, SortField};

const SELECT_COLUMNS: &str = "RES.ID_, RES.KEY_, RES.NAME_, RES.CATEGORY_, RES.VERSION_, \
                              RES.DEPLOYMENT_ID_, RES.RESOURCE_NAME_";

fn column(field: Field) -> Option<&'static str> {
    match field {
        Field::Id => Some("RES.ID_"),
        Field::Key => Some("RES.KEY_"),
        Field::Name => Some("RES.NAME_"),
        Field::Category => Some("RES.CATEGORY_"),
        Field::Version => Some("RES.VERSION_"),
        Field::DeploymentId => Some("RES.DEPLOYMENT_ID_"),
        Field::ResourceName => Some("RES.RESOURCE_NAME_"),
        Field::MessageSubscription => None,
    }
}

fn sort_column(field: SortField) -> &'static str {
    match field {
        SortField::Id => "RES.ID_",
        SortField::Key => "RES.KEY_",
        SortField::Name => "RES.NAME_",
        SortField::Category => "RES.CATEGORY_",
        SortField::Version => "RES.VERSION_",
        SortField::DeploymentId => "RES.DEPLOYMENT_ID_",
    }
}

fn operator_sql(operator: Operator) -> &'static str {
    match operator {
        Operator::Eq => " = ",
        Operator::NotEq => " <> ",
        Operator::Like => " GLOB ",
        Operator::In => " IN ",
        Operator::Gt => " > ",
        Operator::Gte => " >= ",
        Operator::Lt => " < ",
        Operator::Lte => " <= ",
    }
}

fn value_sql<'a>(value: &PredicateValue) -> SQL<'a, SQLiteValue> {
    match value {
        PredicateValue::Text(text) => SQL::param(text.clone()),
        PredicateValue::Integer(i) => SQL::param(*i),
        PredicateValue::Pattern(pattern) => SQL::param(pattern.to_glob()),
        PredicateValue::Set(items) => {
            SQL::join(items.iter().map(|item| SQL::param(item.clone())), ", ").parens()
        }
    }
}

fn predicate_sql<'a>(predicate: &Predicate) -> SQL<'a, SQLiteValue> {
    if let PredicateValue::Set(items) = &predicate.value {
        if items.is_empty() {
            return SQL::raw("1 = 0");
        }
    }

    match column(predicate.field) {
        Some(column) => SQL::raw(column)
            .append(SQL::raw(operator_sql(predicate.operator)))
            .append(value_sql(&predicate.value)),
        None => SQL::raw(format!(
            "EXISTS (SELECT 1 FROM {EVENT_SUBSCRIPTION_TABLE} EVT \
             WHERE EVT.PROC_DEF_ID_ = RES.ID_ AND EVT.EVENT_TYPE_ = '{MESSAGE_EVENT_TYPE}' \
             AND EVT.EVENT_NAME_"
        ))
        .append(SQL::raw(operator_sql(predicate.operator)))
        .append(value_sql(&predicate.value))
        .append(SQL::raw(")")),
    }
}

fn where_clause<'a>(criteria: &Criteria) -> SQL<'a, SQLiteValue> {
    if criteria.predicates().is_empty() {
        return SQL::empty();
    }
    SQL::raw(" WHERE ").append(SQL::join(
        criteria.predicates().iter().map(predicate_sql),
        " AND ",
    ))
}

/// Registered sort keys in order, then the identifier so ties stay stable.
fn order_clause<'a>(criteria: &Criteria) -> SQL<'a, SQLiteValue> {
    let mut terms: Vec<String> = criteria
        .sorts()
        .iter()
        .map(|key| {
            let direction = key.direction.map_or("ASC", |d| d.as_sql());
            format!("{} {direction}", sort_column(key.field))
        })
        .collect();
    if !criteria.sorts().iter().any(|key| key.field == SortField::Id) {
        terms.push("RES.ID_ ASC".to_string());
    }
    SQL::raw(format!(" ORDER BY {}", terms.join(", ")))
}

fn limit_clause<'a>(paging: Paging) -> SQL<'a, SQLiteValue> {
    if paging.is_unbounded() {
        return SQL::empty();
    }
    // SQLite needs a LIMIT before OFFSET; -1 means no limit.
    let limit = paging.max_results.map_or(SQLiteValue::Integer(-1), SQLiteValue::from);
    SQL::raw(" LIMIT ")
        .append(SQL::param(limit))
        .append(SQL::raw(" OFFSET "))
        .append(SQL::param(paging.first_result))
}

fn from_clause<'a>() -> SQL<'a, SQLiteValue> {
    SQL::raw(format!(" FROM {PROCESS_DEFINITION_TABLE} RES"))
}

/// Ordered, paged definition query.
pub fn select_definitions<'a>(criteria: &Criteria, paging: Paging) -> SQL<'a, SQLiteValue> {
    SQL::raw(format!("SELECT {SELECT_COLUMNS}"))
        .append(from_clause())
        .append(where_clause(criteria))
        .append(order_clause(criteria))
        .append(limit_clause(paging))
}

/// Every row matching the predicates, unordered and unpaged. Input to
/// latest-version resolution.
pub fn select_candidates<'a>(criteria: &Criteria) -> SQL<'a, SQLiteValue> {
    SQL::raw(format!("SELECT {SELECT_COLUMNS}"))
        .append(from_clause())
        .append(where_clause(criteria))
}

/// Unpaged count of rows matching the predicates.
pub fn count_definitions<'a>(criteria: &Criteria) -> SQL<'a, SQLiteValue> {
    SQL::raw("SELECT count(RES.ID_)")
        .append(from_clause())
        .append(where_clause(criteria))
}
