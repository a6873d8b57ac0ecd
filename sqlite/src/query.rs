//! Fluent process definition query.
//!
//! Every filter call validates its argument immediately and either records a
//! predicate or fails with [`FlowdefError::InvalidArgument`] without touching
//! the query. `order_by_*` registers a pending sort key that the next `asc()`
//! or `desc()` binds. Once the query has been executed its criteria are
//! frozen: later setters fail with invalid-argument and change nothing.
//!
//! ```no_run
//! # fn main() -> flowdef_core::Result<()> {
//! use flowdef_sqlite::RepositoryService;
//!
//! let conn = rusqlite::Connection::open_in_memory()?;
//! let repository = RepositoryService::new(&conn);
//!
//! let definitions = repository
//!     .create_process_definition_query()
//!     .process_definition_key_like("%o%")?
//!     .order_by_process_definition_key()
//!     .asc()?
//!     .order_by_process_definition_version()
//!     .desc()?
//!     .list()?;
//! # Ok(())
//! # }
//! ```

use crate::executor::Executor;
use compact_str::CompactString;
use flowdef_core::error::{FlowdefError, Result};
use flowdef_core::{
    Criteria, Direction, Field, LikePattern, Operator, Paging, PredicateValue, ProcessDefinition,
    SortField,
};
use core::cell::Cell;
use rusqlite::Connection;

fn required<T>(value: Option<T>, what: &str) -> Result<T> {
    value.ok_or_else(|| FlowdefError::invalid_argument(format!("{what} is null")))
}

#[derive(Debug)]
pub struct ProcessDefinitionQuery<'c> {
    executor: Executor<'c>,
    criteria: Criteria,
    executed: Cell<bool>,
}

impl<'c> ProcessDefinitionQuery<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self {
            executor: Executor::new(conn),
            criteria: Criteria::new(),
            executed: Cell::new(false),
        }
    }

    /// The criteria accumulated so far.
    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    fn criteria_mut(&mut self) -> Result<&mut Criteria> {
        if self.executed.get() {
            return Err(FlowdefError::invalid_argument(
                "query was already executed; its criteria can no longer change",
            ));
        }
        Ok(&mut self.criteria)
    }

    fn text(&mut self, field: Field, value: Option<&str>, what: &str) -> Result<&mut Self> {
        let value = required(value, what)?;
        self.criteria_mut()?
            .add_predicate(field, Operator::Eq, PredicateValue::Text(value.into()))?;
        Ok(self)
    }

    fn like(&mut self, field: Field, pattern: Option<&str>, what: &str) -> Result<&mut Self> {
        let pattern = LikePattern::parse(required(pattern, what)?)?;
        self.criteria_mut()?
            .add_predicate(field, Operator::Like, PredicateValue::Pattern(pattern))?;
        Ok(self)
    }

    fn version_bound(&mut self, operator: Operator, version: Option<i32>) -> Result<&mut Self> {
        let version = required(version, "version")?;
        self.criteria_mut()?.add_predicate(
            Field::Version,
            operator,
            PredicateValue::Integer(i64::from(version)),
        )?;
        Ok(self)
    }

    fn set(&mut self, field: Field, items: Vec<CompactString>) -> Result<&mut Self> {
        self.criteria_mut()?
            .add_predicate(field, Operator::In, PredicateValue::Set(items))?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Filters
    // ------------------------------------------------------------------

    pub fn process_definition_id<'s>(&mut self, id: impl Into<Option<&'s str>>) -> Result<&mut Self> {
        self.text(Field::Id, id.into(), "process definition id")
    }

    /// Only definitions whose id is in `ids`. An empty set matches nothing.
    pub fn process_definition_ids<I, S>(&mut self, ids: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = ids.into_iter().map(|id| CompactString::new(id.as_ref())).collect();
        self.set(Field::Id, ids)
    }

    pub fn process_definition_key<'s>(&mut self, key: impl Into<Option<&'s str>>) -> Result<&mut Self> {
        self.text(Field::Key, key.into(), "key")
    }

    pub fn process_definition_key_like<'s>(
        &mut self,
        pattern: impl Into<Option<&'s str>>,
    ) -> Result<&mut Self> {
        self.like(Field::Key, pattern.into(), "key like")
    }

    pub fn process_definition_name<'s>(&mut self, name: impl Into<Option<&'s str>>) -> Result<&mut Self> {
        self.text(Field::Name, name.into(), "name")
    }

    pub fn process_definition_name_like<'s>(
        &mut self,
        pattern: impl Into<Option<&'s str>>,
    ) -> Result<&mut Self> {
        self.like(Field::Name, pattern.into(), "name like")
    }

    pub fn process_definition_category<'s>(
        &mut self,
        category: impl Into<Option<&'s str>>,
    ) -> Result<&mut Self> {
        self.text(Field::Category, category.into(), "category")
    }

    pub fn process_definition_category_like<'s>(
        &mut self,
        pattern: impl Into<Option<&'s str>>,
    ) -> Result<&mut Self> {
        self.like(Field::Category, pattern.into(), "category like")
    }

    /// Definitions with a category other than `category`. Definitions without
    /// a category never match.
    pub fn process_definition_category_not_equals<'s>(
        &mut self,
        category: impl Into<Option<&'s str>>,
    ) -> Result<&mut Self> {
        let category = required(category.into(), "category not equals")?;
        self.criteria_mut()?.add_predicate(
            Field::Category,
            Operator::NotEq,
            PredicateValue::Text(category.into()),
        )?;
        Ok(self)
    }

    pub fn process_definition_resource_name<'s>(
        &mut self,
        resource_name: impl Into<Option<&'s str>>,
    ) -> Result<&mut Self> {
        self.text(Field::ResourceName, resource_name.into(), "resource name")
    }

    pub fn process_definition_resource_name_like<'s>(
        &mut self,
        pattern: impl Into<Option<&'s str>>,
    ) -> Result<&mut Self> {
        self.like(Field::ResourceName, pattern.into(), "resource name like")
    }

    /// Exact version. Negative versions are rejected.
    pub fn process_definition_version(&mut self, version: impl Into<Option<i32>>) -> Result<&mut Self> {
        self.version_bound(Operator::Eq, version.into())
    }

    pub fn process_definition_version_greater_than(
        &mut self,
        version: impl Into<Option<i32>>,
    ) -> Result<&mut Self> {
        self.version_bound(Operator::Gt, version.into())
    }

    pub fn process_definition_version_greater_than_or_equals(
        &mut self,
        version: impl Into<Option<i32>>,
    ) -> Result<&mut Self> {
        self.version_bound(Operator::Gte, version.into())
    }

    pub fn process_definition_version_lower_than(
        &mut self,
        version: impl Into<Option<i32>>,
    ) -> Result<&mut Self> {
        self.version_bound(Operator::Lt, version.into())
    }

    pub fn process_definition_version_lower_than_or_equals(
        &mut self,
        version: impl Into<Option<i32>>,
    ) -> Result<&mut Self> {
        self.version_bound(Operator::Lte, version.into())
    }

    pub fn deployment_id<'s>(&mut self, deployment_id: impl Into<Option<&'s str>>) -> Result<&mut Self> {
        self.text(Field::DeploymentId, deployment_id.into(), "deployment id")
    }

    /// Only definitions owned by one of `deployment_ids`. An empty set matches
    /// nothing.
    pub fn deployment_ids<I, S>(&mut self, deployment_ids: I) -> Result<&mut Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ids = deployment_ids
            .into_iter()
            .map(|id| CompactString::new(id.as_ref()))
            .collect();
        self.set(Field::DeploymentId, ids)
    }

    /// Only definitions declaring a message start event named `name`.
    pub fn message_event_subscription_name<'s>(
        &mut self,
        name: impl Into<Option<&'s str>>,
    ) -> Result<&mut Self> {
        self.text(Field::MessageSubscription, name.into(), "message event subscription name")
    }

    /// Keep only the highest version of every key among the matches.
    /// Cannot be combined with version filters.
    pub fn latest_version(&mut self) -> Result<&mut Self> {
        self.criteria_mut()?.set_latest()?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Ordering
    // ------------------------------------------------------------------

    /// Has no effect on an executed query; the `asc()`/`desc()` that must
    /// follow reports the rejection.
    fn order_by(&mut self, field: SortField) -> &mut Self {
        if let Ok(criteria) = self.criteria_mut() {
            criteria.push_pending_sort(field);
        }
        self
    }

    pub fn order_by_process_definition_id(&mut self) -> &mut Self {
        self.order_by(SortField::Id)
    }

    pub fn order_by_process_definition_key(&mut self) -> &mut Self {
        self.order_by(SortField::Key)
    }

    pub fn order_by_process_definition_name(&mut self) -> &mut Self {
        self.order_by(SortField::Name)
    }

    pub fn order_by_process_definition_version(&mut self) -> &mut Self {
        self.order_by(SortField::Version)
    }

    pub fn order_by_process_definition_category(&mut self) -> &mut Self {
        self.order_by(SortField::Category)
    }

    pub fn order_by_deployment_id(&mut self) -> &mut Self {
        self.order_by(SortField::DeploymentId)
    }

    pub fn asc(&mut self) -> Result<&mut Self> {
        self.criteria_mut()?.bind_direction(Direction::Asc)?;
        Ok(self)
    }

    pub fn desc(&mut self) -> Result<&mut Self> {
        self.criteria_mut()?.bind_direction(Direction::Desc)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Paging
    // ------------------------------------------------------------------

    pub fn first_result(&mut self, first_result: usize) -> Result<&mut Self> {
        let criteria = self.criteria_mut()?;
        criteria.set_paging(Paging {
            first_result,
            ..criteria.paging()
        });
        Ok(self)
    }

    pub fn max_results(&mut self, max_results: usize) -> Result<&mut Self> {
        let criteria = self.criteria_mut()?;
        criteria.set_paging(Paging {
            max_results: Some(max_results),
            ..criteria.paging()
        });
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Execution
    // ------------------------------------------------------------------

    /// Hands the criteria to the executor. A query that fails validation
    /// here stays editable; anything past that point freezes it.
    fn executable(&self) -> Result<&Criteria> {
        self.criteria.ensure_sorts_bound()?;
        self.executed.set(true);
        Ok(&self.criteria)
    }

    pub fn list(&self) -> Result<Vec<ProcessDefinition>> {
        self.executor.list(self.executable()?)
    }

    /// At most `max_results` matches starting at `first_result`; the query's
    /// own paging bounds are left as they are.
    pub fn list_page(&self, first_result: usize, max_results: usize) -> Result<Vec<ProcessDefinition>> {
        self.executor
            .list_page(self.executable()?, Paging::new(first_result, max_results))
    }

    pub fn count(&self) -> Result<u64> {
        self.executor.count(self.executable()?)
    }

    /// `None` for no match, the match for exactly one, and
    /// [`FlowdefError::AmbiguousResult`] for more.
    pub fn single_result(&self) -> Result<Option<ProcessDefinition>> {
        self.executor.single_result(self.executable()?)
    }
}
