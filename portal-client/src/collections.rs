//! Typed collection facade
//!
//! Wraps the raw [`EntityStore`] seam with per-entity typed handles, so
//! handlers read and write domain structs instead of JSON values.

use std::marker::PhantomData;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use shared::{
    Attendance, EntityKind, Filter, Incentive, ListQuery, Notification, PerformanceRecord,
    SortSpec, Stored, Update, UserProfile,
};

use crate::api::EntityStore;
use crate::error::ClientResult;

/// Entry point to the typed collections.
#[derive(Clone, Copy)]
pub struct Entities<'a> {
    store: &'a dyn EntityStore,
}

impl<'a> Entities<'a> {
    pub fn new(store: &'a dyn EntityStore) -> Self {
        Self { store }
    }

    pub fn users(&self) -> Collection<'a, UserProfile> {
        Collection::new(self.store, EntityKind::User)
    }

    pub fn performance(&self) -> Collection<'a, PerformanceRecord> {
        Collection::new(self.store, EntityKind::PerformanceRecord)
    }

    pub fn attendance(&self) -> Collection<'a, Attendance> {
        Collection::new(self.store, EntityKind::Attendance)
    }

    pub fn incentives(&self) -> Collection<'a, Incentive> {
        Collection::new(self.store, EntityKind::Incentive)
    }

    pub fn updates(&self) -> Collection<'a, Update> {
        Collection::new(self.store, EntityKind::Update)
    }

    pub fn notifications(&self) -> Collection<'a, Notification> {
        Collection::new(self.store, EntityKind::Notification)
    }
}

/// One typed collection: list / filter / create / update.
pub struct Collection<'a, T> {
    store: &'a dyn EntityStore,
    kind: EntityKind,
    _record: PhantomData<T>,
}

impl<'a, T> Collection<'a, T>
where
    T: Serialize + DeserializeOwned,
{
    fn new(store: &'a dyn EntityStore, kind: EntityKind) -> Self {
        Self {
            store,
            kind,
            _record: PhantomData,
        }
    }

    pub async fn list(
        &self,
        sort: Option<SortSpec>,
        limit: Option<u32>,
    ) -> ClientResult<Vec<Stored<T>>> {
        let query = ListQuery {
            filter: None,
            sort,
            limit,
        };
        self.decode(self.store.list(self.kind, query).await?)
    }

    pub async fn filter(
        &self,
        filter: Filter,
        sort: Option<SortSpec>,
        limit: Option<u32>,
    ) -> ClientResult<Vec<Stored<T>>> {
        let query = ListQuery {
            filter: Some(filter),
            sort,
            limit,
        };
        self.decode(self.store.list(self.kind, query).await?)
    }

    pub async fn create(&self, fields: &T) -> ClientResult<Stored<T>> {
        let created = self
            .store
            .create(self.kind, serde_json::to_value(fields)?)
            .await?;
        Ok(serde_json::from_value(created)?)
    }

    /// Partial patch of a single record.
    pub async fn update(&self, id: &str, patch: Value) -> ClientResult<Stored<T>> {
        let updated = self.store.update(self.kind, id, patch).await?;
        Ok(serde_json::from_value(updated)?)
    }

    fn decode(&self, rows: Vec<Value>) -> ClientResult<Vec<Stored<T>>> {
        rows.into_iter()
            .map(|row| Ok(serde_json::from_value(row)?))
            .collect()
    }
}
