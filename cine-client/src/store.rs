//! Generic resource store
//!
//! One store per list screen. The cache only changes after the server has
//! confirmed a call; a failed call leaves it as it was and hands back a
//! [`ClientError`] whose `user_message()` is what the screen shows.

use std::collections::HashSet;

use validator::Validate;

use crate::client::{HttpClient, NetworkHttpClient};
use crate::error::{ClientError, ClientResult};
use crate::resource::Resource;

/// Load status of a store
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StoreStatus {
    /// Nothing fetched yet
    #[default]
    Idle,
    Loading,
    Ready,
    /// Last fetch failed; the previous records are still cached
    Failed(String),
}

/// Cached collection of one [`Resource`]
pub struct ResourceStore<R: Resource, C: HttpClient = NetworkHttpClient> {
    resource: R,
    http: C,
    records: Vec<R::Record>,
    status: StoreStatus,
}

impl<R: Resource, C: HttpClient> ResourceStore<R, C> {
    pub fn new(resource: R, http: C) -> Self {
        Self {
            resource,
            http,
            records: Vec::new(),
            status: StoreStatus::Idle,
        }
    }

    pub fn resource(&self) -> &R {
        &self.resource
    }

    pub fn status(&self) -> &StoreStatus {
        &self.status
    }

    pub fn records(&self) -> &[R::Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&R::Record> {
        self.records.iter().find(|r| R::record_id(r) == id)
    }

    /// Replace the cache with the server's list
    pub async fn fetch_all(&mut self) -> ClientResult<&[R::Record]> {
        self.status = StoreStatus::Loading;
        let path = self.resource.list_path();
        let result: ClientResult<Vec<R::Record>> =
            self.http.get(&path, self.resource.list_auth()).await;
        match result {
            Ok(list) => {
                let fetched = list.len();
                self.records = dedup_by_id::<R>(list);
                self.status = StoreStatus::Ready;
                tracing::debug!(
                    resource = R::NAME,
                    fetched,
                    kept = self.records.len(),
                    "list loaded"
                );
                Ok(&self.records)
            }
            Err(e) => {
                tracing::warn!(resource = R::NAME, path = %path, error = %e, "list load failed");
                self.status = StoreStatus::Failed(e.user_message());
                Err(e)
            }
        }
    }

    /// Validate, POST, then cache the confirmed record
    pub async fn create(&mut self, payload: R::Create) -> ClientResult<R::Record> {
        if let Err(errors) = payload.validate() {
            let err = ClientError::from(errors);
            tracing::warn!(resource = R::NAME, error = %err, "create rejected locally");
            return Err(err);
        }
        let path = self.resource.collection_path();
        let created: R::Record = self
            .http
            .post(&path, &payload, self.resource.write_auth())
            .await
            .inspect_err(|e| tracing::warn!(resource = R::NAME, error = %e, "create failed"))?;
        self.upsert(created.clone());
        tracing::info!(resource = R::NAME, id = R::record_id(&created), "created");
        Ok(created)
    }

    /// Validate, PATCH, then replace the cached record with the server's version
    pub async fn update(&mut self, id: &str, changes: &R::Update) -> ClientResult<R::Record> {
        if let Err(errors) = changes.validate() {
            let err = ClientError::from(errors);
            tracing::warn!(resource = R::NAME, id, error = %err, "update rejected locally");
            return Err(err);
        }
        let path = self.resource.item_path(id);
        let updated: R::Record = self
            .http
            .patch(&path, changes, self.resource.write_auth())
            .await
            .inspect_err(|e| tracing::warn!(resource = R::NAME, id, error = %e, "update failed"))?;
        self.upsert(updated.clone());
        tracing::info!(resource = R::NAME, id, "updated");
        Ok(updated)
    }

    /// DELETE, then drop the record from the cache
    pub async fn delete(&mut self, id: &str) -> ClientResult<()> {
        let path = self.resource.item_path(id);
        self.http
            .delete(&path, self.resource.write_auth())
            .await
            .inspect_err(|e| tracing::warn!(resource = R::NAME, id, error = %e, "delete failed"))?;
        self.records.retain(|r| R::record_id(r) != id);
        tracing::info!(resource = R::NAME, id, "deleted");
        Ok(())
    }

    fn upsert(&mut self, record: R::Record) {
        let id = R::record_id(&record);
        match self.records.iter().position(|r| R::record_id(r) == id) {
            Some(idx) => self.records[idx] = record,
            None => self.records.push(record),
        }
    }
}

/// Keep the first record of each id, preserving server order
fn dedup_by_id<R: Resource>(list: Vec<R::Record>) -> Vec<R::Record> {
    let mut seen = HashSet::new();
    list.into_iter()
        .filter(|r| seen.insert(R::record_id(r).to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Users;
    use shared::models::{Role, User};

    fn user(id: &str, name: &str) -> User {
        User {
            id: id.into(),
            name: name.into(),
            email: format!("{name}@cine.io"),
            phone: None,
            date_of_birth: None,
            role: Role::Customer,
        }
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let list = vec![user("1", "ana"), user("2", "bo"), user("1", "ana-dup")];
        let kept = dedup_by_id::<Users>(list);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].name, "ana");
        assert_eq!(kept[1].id, "2");
    }

    #[test]
    fn test_new_store_is_idle_and_empty() {
        let http = NetworkHttpClient::new(
            &crate::ClientConfig::default(),
            crate::SessionContext::new(),
        )
        .unwrap();
        let store = ResourceStore::new(Users::new(Role::Admin), http);
        assert_eq!(store.status(), &StoreStatus::Idle);
        assert!(store.is_empty());
        assert!(store.get("1").is_none());
    }
}
