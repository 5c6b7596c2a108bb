//! Product ID assignment.

use chrono::Utc;
use shelf_core::{Product, ProductId};

use crate::config::IdStrategy;

/// Chooses the ID for a product about to be added.
///
/// Implementations must return an ID not used by any product in `existing`.
pub trait IdGenerator {
    fn next_id(&self, existing: &[Product]) -> ProductId;
}

fn max_id(existing: &[Product]) -> i64 {
    existing.iter().map(|p| p.id.as_i64()).max().unwrap_or(0)
}

/// One past the largest existing ID, starting at 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialIds;

impl IdGenerator for SequentialIds {
    fn next_id(&self, existing: &[Product]) -> ProductId {
        ProductId::new(max_id(existing).saturating_add(1))
    }
}

/// Current Unix time in milliseconds.
///
/// When two products are added within the same millisecond (or the clock
/// steps backwards) the ID is bumped past the largest existing one.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimestampIds;

impl IdGenerator for TimestampIds {
    fn next_id(&self, existing: &[Product]) -> ProductId {
        let now = Utc::now().timestamp_millis();
        ProductId::new(now.max(max_id(existing).saturating_add(1)))
    }
}

/// Build the generator selected by configuration.
#[must_use]
pub fn generator_for(strategy: IdStrategy) -> Box<dyn IdGenerator> {
    match strategy {
        IdStrategy::Sequential => Box::new(SequentialIds),
        IdStrategy::Timestamp => Box::new(TimestampIds),
    }
}
