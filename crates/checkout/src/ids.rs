use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use storefront_core::OrderId;

/// Allocates order identifiers. Every call must return a fresh id.
pub trait OrderIdGenerator {
    fn next_id(&self) -> OrderId;
}

/// Time-ordered UUIDv7 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV7Generator;

impl OrderIdGenerator for UuidV7Generator {
    fn next_id(&self) -> OrderId {
        OrderId::new()
    }
}

/// Deterministic ids `1, 2, 3, …` encoded as UUIDs.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    last: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generator whose first id will be `start`.
    pub fn starting_at(start: u64) -> Self {
        Self {
            last: AtomicU64::new(start.saturating_sub(1)),
        }
    }

    /// The id that the `n`th call returns.
    pub fn id_for(n: u64) -> OrderId {
        OrderId::from_uuid(Uuid::from_u128(u128::from(n)))
    }
}

impl OrderIdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> OrderId {
        let n = self.last.fetch_add(1, Ordering::Relaxed) + 1;
        Self::id_for(n)
    }
}
