//! In-Memory Sequence Counter Store
//!
//! Keeps counters in a map behind one write lock, so increment-and-read is a
//! single critical section. Useful for tests and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::numbering::{SequenceNumber, SequenceScope};
use crate::ports::{checked_sequence, AllocationError, SequenceCounterStore};

/// In-memory per-scope counters.
#[derive(Debug, Clone, Default)]
pub struct InMemorySequenceStore {
    counters: Arc<RwLock<HashMap<SequenceScope, u32>>>,
}

impl InMemorySequenceStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of scopes that have been touched
    pub async fn scope_count(&self) -> usize {
        self.counters.read().await.len()
    }
}

#[async_trait]
impl SequenceCounterStore for InMemorySequenceStore {
    async fn next_value(&self, scope: &SequenceScope) -> Result<SequenceNumber, AllocationError> {
        let mut counters = self.counters.write().await;
        let counter = counters.entry(scope.clone()).or_insert(0);
        let next = counter
            .checked_add(1)
            .ok_or_else(|| AllocationError::invalid_value(scope, i64::from(*counter) + 1))?;
        *counter = next;
        checked_sequence(scope, i64::from(next))
    }

    async fn current_value(&self, scope: &SequenceScope) -> Result<u32, AllocationError> {
        Ok(self.counters.read().await.get(scope).copied().unwrap_or(0))
    }

    async fn seed(&self, scope: &SequenceScope, value: u32) -> Result<u32, AllocationError> {
        let mut counters = self.counters.write().await;
        let counter = counters.entry(scope.clone()).or_insert(0);
        *counter = (*counter).max(value);
        Ok(*counter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::future::join_all;
    use std::collections::HashSet;

    fn scope() -> SequenceScope {
        SequenceScope::new("PC", "A.II", 2025)
    }

    #[tokio::test]
    async fn first_value_is_one() {
        let store = InMemorySequenceStore::new();
        let n = store.next_value(&scope()).await.unwrap();
        assert_eq!(n.padded(), "001");
    }

    #[tokio::test]
    async fn sequential_values_strictly_increase() {
        let store = InMemorySequenceStore::new();
        let mut issued = Vec::new();
        for _ in 0..25 {
            issued.push(store.next_value(&scope()).await.unwrap().padded());
        }

        assert!(issued.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(issued.first().map(String::as_str), Some("001"));
        assert_eq!(issued.last().map(String::as_str), Some("025"));
    }

    #[tokio::test]
    async fn scopes_are_independent() {
        let store = InMemorySequenceStore::new();
        let other = SequenceScope::new("PC", "A.II", 2026);

        store.next_value(&scope()).await.unwrap();
        store.next_value(&scope()).await.unwrap();
        let n = store.next_value(&other).await.unwrap();

        assert_eq!(n.value(), 1);
        assert_eq!(store.scope_count().await, 2);
    }

    #[tokio::test]
    async fn concurrent_allocations_never_collide() {
        let store = InMemorySequenceStore::new();
        let tasks = (0..64).map(|_| {
            let store = store.clone();
            tokio::spawn(async move { store.next_value(&scope()).await.unwrap().value() })
        });

        let values: Vec<u32> = join_all(tasks)
            .await
            .into_iter()
            .map(|r| r.unwrap())
            .collect();
        let unique: HashSet<u32> = values.iter().copied().collect();

        assert_eq!(unique.len(), 64);
        assert_eq!(store.current_value(&scope()).await.unwrap(), 64);
    }

    #[tokio::test]
    async fn current_value_does_not_mutate() {
        let store = InMemorySequenceStore::new();
        assert_eq!(store.current_value(&scope()).await.unwrap(), 0);
        assert_eq!(store.current_value(&scope()).await.unwrap(), 0);
        assert_eq!(store.next_value(&scope()).await.unwrap().value(), 1);
    }

    #[tokio::test]
    async fn seed_raises_but_never_lowers() {
        let store = InMemorySequenceStore::new();

        assert_eq!(store.seed(&scope(), 40).await.unwrap(), 40);
        assert_eq!(store.seed(&scope(), 10).await.unwrap(), 40);
        assert_eq!(store.next_value(&scope()).await.unwrap().padded(), "041");
    }
}
