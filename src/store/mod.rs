//! Narrow document-store capability used by the service layer.
//!
//! Handlers never see a raw database handle; they get a [`Collection<T>`]
//! exposing exactly the operations this API performs: filtered listing with
//! single-field ascending sort and offset pagination, lookup by id or field,
//! insert, partial `$set` update, and idempotent delete.
//!
//! Two backends exist: MongoDB for the running service, and an in-memory
//! fake (behind the `test-utils` feature) so integration tests can drive the
//! full router without a database.

use mongodb::bson::{self, Bson, Document, doc, oid::ObjectId};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "test-utils"))]
pub mod memory;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Backend(#[from] mongodb::error::Error),
    #[error("failed to encode document: {0}")]
    Encode(#[from] bson::ser::Error),
    #[error("failed to decode document: {0}")]
    Decode(#[from] bson::de::Error),
    #[error("backend did not return an object id")]
    MissingId,
}

/// The filter shapes this API actually issues.
#[derive(Debug, Clone, Default)]
pub enum Filter {
    #[default]
    All,
    /// Exact match on a single field.
    Eq(&'static str, Bson),
    /// Case-insensitive substring match on the `name` field.
    NameContains(String),
}

impl Filter {
    pub fn by_id(id: ObjectId) -> Self {
        Filter::Eq("_id", Bson::ObjectId(id))
    }

    fn to_document(&self) -> Document {
        match self {
            Filter::All => doc! {},
            Filter::Eq(field, value) => {
                let mut filter = Document::new();
                filter.insert(*field, value.clone());
                filter
            }
            Filter::NameContains(needle) => {
                doc! { "name": { "$regex": needle.as_str(), "$options": "i" } }
            }
        }
    }
}

/// A listing request: filter, optional single-field ascending sort, and
/// offset pagination. A `limit` of `None` returns everything past `skip`.
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filter: Filter,
    pub sort_by: Option<String>,
    pub skip: u64,
    pub limit: Option<i64>,
}

enum Inner<T: Send + Sync> {
    Mongo(mongodb::Collection<T>),
    #[cfg(any(test, feature = "test-utils"))]
    Memory(memory::MemoryCollection),
}

impl<T> Clone for Inner<T>
where
    T: Send + Sync,
{
    fn clone(&self) -> Self {
        match self {
            Inner::Mongo(coll) => Inner::Mongo(coll.clone()),
            #[cfg(any(test, feature = "test-utils"))]
            Inner::Memory(coll) => Inner::Memory(coll.clone()),
        }
    }
}

pub struct Collection<T: Send + Sync> {
    inner: Inner<T>,
}

impl<T> Clone for Collection<T>
where
    T: Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Collection<T>
where
    T: Serialize + DeserializeOwned + Send + Sync,
{
    pub fn mongo(collection: mongodb::Collection<T>) -> Self {
        Self {
            inner: Inner::Mongo(collection),
        }
    }

    #[cfg(any(test, feature = "test-utils"))]
    pub fn memory() -> Self {
        Self {
            inner: Inner::Memory(memory::MemoryCollection::default()),
        }
    }

    pub async fn find(&self, query: &ListQuery) -> Result<Vec<T>, StoreError> {
        match &self.inner {
            Inner::Mongo(coll) => {
                let mut find = coll.find(query.filter.to_document());
                if let Some(field) = &query.sort_by {
                    let mut sort = Document::new();
                    sort.insert(field.as_str(), 1);
                    find = find.sort(sort);
                }
                if query.skip > 0 {
                    find = find.skip(query.skip);
                }
                if let Some(limit) = query.limit {
                    find = find.limit(limit);
                }

                let mut cursor = find.await?;
                let mut documents = Vec::new();
                while cursor.advance().await? {
                    documents.push(cursor.deserialize_current()?);
                }
                Ok(documents)
            }
            #[cfg(any(test, feature = "test-utils"))]
            Inner::Memory(coll) => coll
                .find(query)
                .into_iter()
                .map(|doc| bson::from_document(doc).map_err(StoreError::from))
                .collect(),
        }
    }

    pub async fn find_one(&self, filter: Filter) -> Result<Option<T>, StoreError> {
        match &self.inner {
            Inner::Mongo(coll) => Ok(coll.find_one(filter.to_document()).await?),
            #[cfg(any(test, feature = "test-utils"))]
            Inner::Memory(coll) => coll
                .find_one(&filter)
                .map(bson::from_document)
                .transpose()
                .map_err(StoreError::from),
        }
    }

    pub async fn find_by_id(&self, id: ObjectId) -> Result<Option<T>, StoreError> {
        self.find_one(Filter::by_id(id)).await
    }

    /// Inserts the document and returns the identity the backend assigned.
    pub async fn insert_one(&self, document: &T) -> Result<ObjectId, StoreError> {
        match &self.inner {
            Inner::Mongo(coll) => {
                let result = coll.insert_one(document).await?;
                result
                    .inserted_id
                    .as_object_id()
                    .ok_or(StoreError::MissingId)
            }
            #[cfg(any(test, feature = "test-utils"))]
            Inner::Memory(coll) => {
                let doc = bson::to_document(document)?;
                Ok(coll.insert_one(doc))
            }
        }
    }

    /// Applies a partial `$set` of exactly the given fields and returns how
    /// many documents matched, so callers can tell a missed update apart
    /// from a successful one.
    pub async fn update_by_id(&self, id: ObjectId, set: Document) -> Result<u64, StoreError> {
        match &self.inner {
            Inner::Mongo(coll) => {
                let result = coll
                    .update_one(doc! { "_id": id }, doc! { "$set": set })
                    .await?;
                Ok(result.matched_count)
            }
            #[cfg(any(test, feature = "test-utils"))]
            Inner::Memory(coll) => Ok(coll.update_by_id(id, set)),
        }
    }

    /// Idempotent: deleting an id that no longer exists is a success.
    pub async fn delete_by_id(&self, id: ObjectId) -> Result<(), StoreError> {
        match &self.inner {
            Inner::Mongo(coll) => {
                coll.delete_one(doc! { "_id": id }).await?;
                Ok(())
            }
            #[cfg(any(test, feature = "test-utils"))]
            Inner::Memory(coll) => {
                coll.delete_by_id(id);
                Ok(())
            }
        }
    }
}
