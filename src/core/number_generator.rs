//! Sequential account-number generator
//!
//! Numbers look like `SVG-000001` or `CH-000002`: the type prefix, a dash, and a
//! zero-padded sequence value. One counter is shared by all types, so a number is
//! never reused even across prefixes. Past 999999 the sequence simply grows wider.

use crate::core::traits::AccountNumberGenerator;
use crate::types::AccountType;
use std::sync::atomic::{AtomicU64, Ordering};

/// Generates unique, type-prefixed account numbers from an atomic counter
#[derive(Debug)]
pub struct SequentialAccountNumberGenerator {
    next: AtomicU64,
}

impl SequentialAccountNumberGenerator {
    /// Start the sequence at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Start the sequence at `first`, e.g. to continue after numbers already issued
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialAccountNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountNumberGenerator for SequentialAccountNumberGenerator {
    fn generate(&self, account_type: AccountType) -> String {
        let sequence = self.next.fetch_add(1, Ordering::Relaxed);
        format!("{}-{:06}", account_type.number_prefix(), sequence)
    }
}
