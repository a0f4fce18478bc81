use common::model::content::{Collection, Record};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no record with slug '{slug}'")]
pub struct SlugNotFound {
    pub slug: String,
}

/// Looks up a record by exact, case-sensitive slug.
pub fn resolve<'a>(collection: &'a Collection, slug: &str) -> Result<&'a Record, SlugNotFound> {
    collection.get(slug).ok_or_else(|| SlugNotFound {
        slug: slug.to_string(),
    })
}

/// The first `limit` records in collection order, skipping `slug` itself.
pub fn related<'a>(collection: &'a Collection, slug: &str, limit: usize) -> Vec<(&'a str, &'a Record)> {
    collection
        .iter()
        .filter(|(key, _)| key.as_str() != slug)
        .take(limit)
        .map(|(key, record)| (key.as_str(), record))
        .collect()
}
