//! In-memory document collection backing [`Collection`](super::Collection)
//! in tests. Stores raw BSON documents and evaluates the same [`Filter`]
//! shapes the Mongo backend translates into query documents.

use std::cmp::Ordering;
use std::sync::{Arc, RwLock};

use mongodb::bson::{Bson, Document, oid::ObjectId};

use super::{Filter, ListQuery};

#[derive(Clone, Default)]
pub struct MemoryCollection {
    documents: Arc<RwLock<Vec<Document>>>,
}

impl MemoryCollection {
    pub fn find(&self, query: &ListQuery) -> Vec<Document> {
        let documents = self.documents.read().expect("memory store lock poisoned");

        let mut matched: Vec<Document> = documents
            .iter()
            .filter(|doc| matches(&query.filter, doc))
            .cloned()
            .collect();

        if let Some(field) = &query.sort_by {
            matched.sort_by(|a, b| bson_ord(a.get(field), b.get(field)));
        }

        let skipped = matched.into_iter().skip(query.skip as usize);
        match query.limit {
            Some(limit) => skipped.take(limit.max(0) as usize).collect(),
            None => skipped.collect(),
        }
    }

    pub fn find_one(&self, filter: &Filter) -> Option<Document> {
        let documents = self.documents.read().expect("memory store lock poisoned");
        documents.iter().find(|doc| matches(filter, doc)).cloned()
    }

    pub fn insert_one(&self, mut document: Document) -> ObjectId {
        let id = match document.get_object_id("_id") {
            Ok(id) => id,
            Err(_) => {
                let id = ObjectId::new();
                document.insert("_id", id);
                id
            }
        };

        let mut documents = self.documents.write().expect("memory store lock poisoned");
        documents.push(document);
        id
    }

    pub fn update_by_id(&self, id: ObjectId, set: Document) -> u64 {
        let mut documents = self.documents.write().expect("memory store lock poisoned");
        let target = documents
            .iter_mut()
            .find(|doc| doc.get_object_id("_id").is_ok_and(|oid| oid == id));

        match target {
            Some(doc) => {
                for (key, value) in set {
                    doc.insert(key, value);
                }
                1
            }
            None => 0,
        }
    }

    pub fn delete_by_id(&self, id: ObjectId) {
        let mut documents = self.documents.write().expect("memory store lock poisoned");
        documents.retain(|doc| doc.get_object_id("_id").map_or(true, |oid| oid != id));
    }
}

fn matches(filter: &Filter, document: &Document) -> bool {
    match filter {
        Filter::All => true,
        Filter::Eq(field, value) => document.get(*field) == Some(value),
        Filter::NameContains(needle) => document
            .get_str("name")
            .map(|name| name.to_lowercase().contains(&needle.to_lowercase()))
            .unwrap_or(false),
    }
}

fn bson_ord(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => match (as_f64(a), as_f64(b)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => match (a, b) {
                (Bson::String(x), Bson::String(y)) => x.cmp(y),
                (Bson::Boolean(x), Bson::Boolean(y)) => x.cmp(y),
                _ => Ordering::Equal,
            },
        },
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(v) => Some(f64::from(*v)),
        Bson::Int64(v) => Some(*v as f64),
        Bson::Double(v) => Some(*v),
        _ => None,
    }
}
