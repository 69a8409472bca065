use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU32, Ordering};

/// Identifier of any stored entity. Allocated per entity kind, starting at 1.
pub type EntityId = u32;

/// Monotonic identifier allocator for one entity kind.
///
/// `next` never hands out the same id twice, even when called from several
/// tasks at once.
#[derive(Debug)]
pub struct IdAllocator {
    next: AtomicU32,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            next: AtomicU32::new(1),
        }
    }
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> EntityId {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}

/// Normalizes a monetary amount to two fractional digits.
pub fn to_money(amount: Decimal) -> Decimal {
    let mut amount = amount.round_dp(2);
    amount.rescale(2);
    amount
}
