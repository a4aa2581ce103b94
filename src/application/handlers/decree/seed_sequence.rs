//! SeedSequenceHandler - Command handler for initialising a decree counter.
//!
//! Used once per scope when moving an existing archive onto the counter
//! store, so new numbers continue after the decrees already issued.

use std::sync::Arc;

use thiserror::Error;

use crate::domain::numbering::{IssuanceCodes, SequenceScope};
use crate::ports::{AllocationError, SequenceCounterStore};

/// Command to raise a year's counter to an archive count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSequenceCommand {
    pub year: i32,
    /// Number of decrees already issued in that year.
    pub issued_count: u32,
}

/// Result of seeding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedSequenceResult {
    pub scope: SequenceScope,
    pub previous: u32,
    pub current: u32,
}

impl SeedSequenceResult {
    /// Whether the seed moved the counter.
    pub fn changed(&self) -> bool {
        self.current != self.previous
    }
}

#[derive(Debug, Clone, Error)]
pub enum SeedSequenceError {
    #[error("Sequence store error: {0}")]
    Store(#[from] AllocationError),
}

/// Handler for seeding counters of the configured tier and category.
pub struct SeedSequenceHandler {
    counters: Arc<dyn SequenceCounterStore>,
    codes: IssuanceCodes,
}

impl SeedSequenceHandler {
    pub fn new(counters: Arc<dyn SequenceCounterStore>, codes: IssuanceCodes) -> Self {
        Self { counters, codes }
    }

    pub async fn handle(
        &self,
        cmd: SeedSequenceCommand,
    ) -> Result<SeedSequenceResult, SeedSequenceError> {
        let scope = self.codes.scope_for_year(cmd.year);
        let previous = self.counters.current_value(&scope).await?;
        let current = self.counters.seed(&scope, cmd.issued_count).await?;

        if current == previous {
            tracing::info!(scope = %scope, current, "Counter already at or past archive count");
        } else {
            tracing::info!(scope = %scope, previous, current, "Counter seeded from archive");
        }

        Ok(SeedSequenceResult {
            scope,
            previous,
            current,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemorySequenceStore;

    fn handler(store: &InMemorySequenceStore) -> SeedSequenceHandler {
        SeedSequenceHandler::new(
            Arc::new(store.clone()),
            IssuanceCodes::new("PC", "A.II", "L-1", "IX").unwrap(),
        )
    }

    #[tokio::test]
    async fn seeds_fresh_scope() {
        let store = InMemorySequenceStore::new();

        let result = handler(&store)
            .handle(SeedSequenceCommand {
                year: 2025,
                issued_count: 12,
            })
            .await
            .unwrap();

        assert_eq!(result.previous, 0);
        assert_eq!(result.current, 12);
        assert!(result.changed());
        assert_eq!(result.scope, SequenceScope::new("PC", "A.II", 2025));
    }

    #[tokio::test]
    async fn lower_count_leaves_counter_alone() {
        let store = InMemorySequenceStore::new();
        let h = handler(&store);
        h.handle(SeedSequenceCommand {
            year: 2025,
            issued_count: 30,
        })
        .await
        .unwrap();

        let result = h
            .handle(SeedSequenceCommand {
                year: 2025,
                issued_count: 5,
            })
            .await
            .unwrap();

        assert_eq!(result.current, 30);
        assert!(!result.changed());
    }
}
