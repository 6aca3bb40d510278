use async_trait::async_trait;

/// Supplies a fun-fact string for a number.
///
/// Implementations must resolve every failure internally and hand back a
/// fallback string instead; `fetch` never errors. This keeps the classifier
/// free of transport concerns and lets tests substitute canned providers.
#[async_trait]
pub trait FactProvider: Send + Sync {
    async fn fetch(&self, n: i64) -> String;
}
