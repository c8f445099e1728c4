use crate::models::TokenRecord;

/// A record as the engine tracks it: what is on screen now, and what it looked like at load.
#[derive(Debug, Clone)]
pub(crate) struct TrackedToken {
    /// The front buffer. Replaced wholesale on every mutation, never edited in place.
    pub current: TokenRecord,
    /// Load-time values. Jitter mode re-derives from these, burst mode clamps drift against them.
    pub anchor: TokenRecord,
}

impl TrackedToken {
    pub fn new(token: TokenRecord) -> Self {
        Self {
            anchor: token.clone(),
            current: token,
        }
    }

    /// The swap: promote a freshly mutated record.
    pub fn replace(&mut self, next: TokenRecord) {
        debug_assert_eq!(self.current.id, next.id);
        self.current = next;
    }
}
