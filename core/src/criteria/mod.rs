//! The Criteria Model: filter predicates, sort keys and paging bounds for one
//! definition query.
//!
//! Predicates combine with logical AND. Values are checked when a predicate is
//! added, so a `Criteria` that exists is always executable apart from a
//! possibly pending sort key (see [`Criteria::ensure_sorts_bound`]).

mod pattern;
mod sort;

pub use pattern::LikePattern;
pub use sort::{Direction, SortField, SortKey};

use crate::definition::ProcessDefinition;
use crate::error::{FlowdefError, Result};
use compact_str::CompactString;
use core::cmp::Ordering;
use smallvec::SmallVec;

/// Filterable attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Key,
    Name,
    Category,
    Version,
    DeploymentId,
    ResourceName,
    /// Name of a message event subscription the definition declares.
    MessageSubscription,
}

impl Field {
    pub const fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Key => "key",
            Field::Name => "name",
            Field::Category => "category",
            Field::Version => "version",
            Field::DeploymentId => "deploymentId",
            Field::ResourceName => "resourceName",
            Field::MessageSubscription => "messageEventSubscriptionName",
        }
    }

    const fn is_numeric(&self) -> bool {
        matches!(self, Field::Version)
    }

    /// Operators the store renders for this field.
    pub const fn supports(&self, operator: Operator) -> bool {
        match self {
            Field::Version => operator.is_range() || matches!(operator, Operator::Eq),
            Field::Id | Field::DeploymentId => {
                matches!(operator, Operator::Eq | Operator::NotEq | Operator::In)
            }
            Field::Key | Field::Name | Field::Category | Field::ResourceName => {
                matches!(operator, Operator::Eq | Operator::NotEq | Operator::Like)
            }
            Field::MessageSubscription => matches!(operator, Operator::Eq),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Eq,
    NotEq,
    Like,
    In,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Operator {
    const fn is_range(&self) -> bool {
        matches!(self, Operator::Gt | Operator::Gte | Operator::Lt | Operator::Lte)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PredicateValue {
    Text(CompactString),
    Integer(i64),
    Pattern(LikePattern),
    Set(Vec<CompactString>),
}

/// A single `field <operator> value` clause.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Predicate {
    pub field: Field,
    pub operator: Operator,
    pub value: PredicateValue,
}

/// Offset/limit bounds. `max_results == None` means unbounded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Paging {
    pub first_result: usize,
    pub max_results: Option<usize>,
}

impl Paging {
    pub const fn new(first_result: usize, max_results: usize) -> Self {
        Self {
            first_result,
            max_results: Some(max_results),
        }
    }

    pub const fn is_unbounded(&self) -> bool {
        self.first_result == 0 && self.max_results.is_none()
    }

    /// Applies the bounds to an already ordered result.
    pub fn apply<T>(&self, rows: Vec<T>) -> Vec<T> {
        let take = self.max_results.unwrap_or(usize::MAX);
        rows.into_iter().skip(self.first_result).take(take).collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Criteria {
    predicates: SmallVec<[Predicate; 4]>,
    sorts: SmallVec<[SortKey; 4]>,
    paging: Paging,
    latest: bool,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn predicates(&self) -> &[Predicate] {
        &self.predicates
    }

    pub fn sorts(&self) -> &[SortKey] {
        &self.sorts
    }

    pub const fn paging(&self) -> Paging {
        self.paging
    }

    pub const fn latest_only(&self) -> bool {
        self.latest
    }

    fn has_version_predicate(&self) -> bool {
        self.predicates.iter().any(|p| p.field == Field::Version)
    }

    /// Records a predicate after checking that `operator` and `value` fit
    /// `field`. On error the model is left untouched.
    pub fn add_predicate(
        &mut self,
        field: Field,
        operator: Operator,
        value: PredicateValue,
    ) -> Result<()> {
        let unsupported = || {
            FlowdefError::invalid_argument(format!(
                "operator {operator:?} with value {value:?} is not supported for {}",
                field.name()
            ))
        };
        if !field.supports(operator) {
            return Err(unsupported());
        }
        match (operator, &value) {
            (Operator::Like, PredicateValue::Pattern(_)) | (Operator::In, PredicateValue::Set(_)) => {}
            (Operator::Eq | Operator::NotEq, PredicateValue::Text(_)) if !field.is_numeric() => {}
            (_, PredicateValue::Integer(v)) if field.is_numeric() => {
                if *v < 0 {
                    return Err(FlowdefError::invalid_argument(format!(
                        "{} must not be negative, got {v}",
                        field.name()
                    )));
                }
            }
            _ => return Err(unsupported()),
        }

        if field == Field::Version && self.latest {
            return Err(FlowdefError::invalid_argument(
                "version predicates cannot be combined with latest_version()",
            ));
        }

        self.predicates.push(Predicate {
            field,
            operator,
            value,
        });
        Ok(())
    }

    /// Restricts the result to the latest version per key.
    pub fn set_latest(&mut self) -> Result<()> {
        if self.has_version_predicate() {
            return Err(FlowdefError::invalid_argument(
                "latest_version() cannot be combined with version predicates",
            ));
        }
        self.latest = true;
        Ok(())
    }

    /// Registers a sort key with a fixed direction.
    pub fn add_sort(&mut self, field: SortField, direction: Direction) {
        self.push_pending_sort(field);
        if let Some(last) = self.sorts.last_mut() {
            last.direction = Some(direction);
        }
    }

    /// Registers a sort key whose direction is bound later. A key that is
    /// already pending is replaced.
    pub fn push_pending_sort(&mut self, field: SortField) {
        match self.sorts.last_mut() {
            Some(last) if last.is_pending() => last.field = field,
            _ => self.sorts.push(SortKey::pending(field)),
        }
    }

    /// Binds `direction` to the pending sort key.
    pub fn bind_direction(&mut self, direction: Direction) -> Result<()> {
        match self.sorts.last_mut() {
            Some(last) if last.is_pending() => {
                last.direction = Some(direction);
                Ok(())
            }
            _ => Err(FlowdefError::invalid_argument(format!(
                "you should call any of the order_by methods first before specifying a direction ({})",
                direction.as_sql()
            ))),
        }
    }

    /// Fails if an `order_by_*` call was never followed by a direction.
    pub fn ensure_sorts_bound(&self) -> Result<()> {
        match self.sorts.iter().find(|key| key.is_pending()) {
            Some(key) => Err(FlowdefError::invalid_argument(format!(
                "invalid query: call asc() or desc() after order_by {}",
                key.field.name()
            ))),
            None => Ok(()),
        }
    }

    /// Replaces the paging bounds.
    pub fn set_paging(&mut self, paging: Paging) {
        self.paging = paging;
    }

    /// Strict lexicographic order over the registered sort keys, falling back
    /// to identifier order so ties stay deterministic.
    pub fn compare(&self, a: &ProcessDefinition, b: &ProcessDefinition) -> Ordering {
        self.sorts
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| SortField::Id.compare(a, b))
    }
}
