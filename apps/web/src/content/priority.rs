//! Ordering by an optional numeric priority.

/// Priority assigned to records that do not declare one.
/// Larger than any authored priority, so unprioritised records sort last.
pub const PRIORITY_SENTINEL: u32 = 999;

/// Records that can carry an authored display priority (lower comes first).
pub trait Prioritized {
    fn priority(&self) -> Option<u32>;

    fn effective_priority(&self) -> u32 {
        self.priority().unwrap_or(PRIORITY_SENTINEL)
    }
}

/// Returns references to `items` in ascending priority order.
///
/// The sort is stable: records with equal (or equally missing) priority keep
/// their authored order.
pub fn sort_by_priority<T: Prioritized>(items: &[T]) -> Vec<&T> {
    let mut sorted: Vec<&T> = items.iter().collect();
    sorted.sort_by_key(|item| item.effective_priority());
    sorted
}
