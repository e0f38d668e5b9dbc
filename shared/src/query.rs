//! Query vocabulary for the entity layer
//!
//! The hosted layer accepts a sort field (optionally prefixed with `-` for
//! descending), a result limit, and an equality predicate over schema
//! fields. That is the whole query language this system uses.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Sort specification: field name plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub field: &'static str,
    pub descending: bool,
}

impl SortSpec {
    pub fn desc(field: &'static str) -> Self {
        Self {
            field,
            descending: true,
        }
    }

    /// Wire form: the field name, `-`-prefixed when descending.
    pub fn to_query(&self) -> String {
        if self.descending {
            format!("-{}", self.field)
        } else {
            self.field.to_string()
        }
    }
}

/// Equality predicate over schema fields, e.g. `{"role": "user"}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Filter(pub Map<String, Value>);

impl Filter {
    pub fn by(field: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut map = Map::new();
        map.insert(field.into(), value.into());
        Self(map)
    }

    /// True when `record` matches every predicate field exactly.
    pub fn matches(&self, record: &Value) -> bool {
        self.0
            .iter()
            .all(|(field, expected)| record.get(field) == Some(expected))
    }
}

/// Parameters for a list/filter call against one collection.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filter: Option<Filter>,
    pub sort: Option<SortSpec>,
    pub limit: Option<u32>,
}
