use crate::definition::ProcessDefinition;
use core::cmp::Ordering;

/// Sort direction for ORDER BY clauses
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

impl Direction {
    pub const fn as_sql(&self) -> &'static str {
        match self {
            Direction::Asc => "ASC",
            Direction::Desc => "DESC",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    }
}

/// Attributes a definition query can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SortField {
    Id,
    Key,
    Name,
    Category,
    Version,
    DeploymentId,
}

impl SortField {
    pub const fn name(&self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Key => "key",
            SortField::Name => "name",
            SortField::Category => "category",
            SortField::Version => "version",
            SortField::DeploymentId => "deploymentId",
        }
    }

    /// Compares two definitions on this attribute. Missing values sort first,
    /// like NULLs in an ascending SQLite ORDER BY.
    pub fn compare(&self, a: &ProcessDefinition, b: &ProcessDefinition) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::Key => a.key.cmp(&b.key),
            SortField::Name => a.name.cmp(&b.name),
            SortField::Category => a.category.cmp(&b.category),
            SortField::Version => a.version.cmp(&b.version),
            SortField::DeploymentId => a.deployment_id.cmp(&b.deployment_id),
        }
    }
}

/// One registered sort key. `direction` stays `None` until the caller binds it
/// with `asc()` or `desc()`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortKey {
    pub field: SortField,
    pub direction: Option<Direction>,
}

impl SortKey {
    pub const fn pending(field: SortField) -> Self {
        Self {
            field,
            direction: None,
        }
    }

    pub const fn new(field: SortField, direction: Direction) -> Self {
        Self {
            field,
            direction: Some(direction),
        }
    }

    pub const fn is_pending(&self) -> bool {
        self.direction.is_none()
    }

    /// Pending keys compare as ascending; execution refuses them anyway.
    pub fn compare(&self, a: &ProcessDefinition, b: &ProcessDefinition) -> Ordering {
        self.direction
            .unwrap_or(Direction::Asc)
            .apply(self.field.compare(a, b))
    }
}
