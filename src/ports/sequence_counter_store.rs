//! Sequence Counter Store Port - Atomic decree numbering.
//!
//! Decree numbers must be unique within a scope, so the next number is never
//! derived by counting existing decrees. The store owns one counter per
//! scope and hands out values through a single increment-and-read.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::numbering::{SequenceNumber, SequenceScope};

/// Port for per-scope decree counters.
///
/// # Contract
///
/// Implementations must:
/// - Increment and read in one atomic step, so two concurrent callers never
///   receive the same value for the same scope
/// - Start a fresh scope at 1
/// - Never decrement a counter
///
/// # Usage
///
/// ```rust,ignore
/// let store: &dyn SequenceCounterStore = get_store();
/// let scope = SequenceScope::new("PC", "A.II", 2025);
///
/// let first = store.next_value(&scope).await?;  // 001
/// let second = store.next_value(&scope).await?; // 002
/// ```
#[async_trait]
pub trait SequenceCounterStore: Send + Sync {
    /// Atomically increments the scope's counter and returns the new value.
    ///
    /// # Errors
    ///
    /// - `Unavailable` if the store cannot be reached
    /// - `InvalidValue` if the store yields a non-positive or oversized value
    async fn next_value(&self, scope: &SequenceScope) -> Result<SequenceNumber, AllocationError>;

    /// Returns the last value handed out for the scope, 0 if none.
    ///
    /// Read-only; must not be used to predict the next number.
    async fn current_value(&self, scope: &SequenceScope) -> Result<u32, AllocationError>;

    /// Raises the scope's counter to at least `value`.
    ///
    /// Used once when migrating from an archive whose decrees were numbered
    /// by counting. A counter already past `value` is left unchanged.
    /// Returns the counter's value after seeding.
    async fn seed(&self, scope: &SequenceScope, value: u32) -> Result<u32, AllocationError>;
}

/// Errors that can occur during sequence allocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocationError {
    /// Counter store could not be reached or failed the operation.
    #[error("Sequence store unavailable: {0}")]
    Unavailable(String),

    /// Counter store returned a value no decree may carry.
    #[error("Sequence store returned invalid value {raw} for scope {scope}")]
    InvalidValue { scope: String, raw: i64 },
}

impl AllocationError {
    /// Creates an unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable(message.into())
    }

    /// Creates an invalid value error.
    pub fn invalid_value(scope: &SequenceScope, raw: i64) -> Self {
        Self::InvalidValue {
            scope: scope.to_string(),
            raw,
        }
    }
}

/// Validates a raw counter value read from a store.
pub fn checked_sequence(scope: &SequenceScope, raw: i64) -> Result<SequenceNumber, AllocationError> {
    SequenceNumber::from_raw(raw).map_err(|_| AllocationError::invalid_value(scope, raw))
}
