//! The versioned entities the query layer reads.
//!
//! Both types are persisted facts owned by the deployment pipeline; this crate
//! only ever reads them.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A deployed, immutable process definition.
///
/// `id` is store-assigned and encodes `key` and `version` (`one:2:1007`).
/// Versions are unique per `key` and strictly increasing; the highest one is
/// the key's latest version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProcessDefinition {
    pub id: String,
    pub key: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub version: i32,
    pub deployment_id: String,
    pub resource_name: Option<String>,
}

impl ProcessDefinition {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
    }

    pub fn version(&self) -> i32 {
        self.version
    }

    pub fn deployment_id(&self) -> &str {
        &self.deployment_id
    }
}

/// A deployment introduces one definition per distinct key in its payload and
/// owns them: deleting it removes its definitions.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Deployment {
    pub id: String,
    pub name: Option<String>,
}
