//! Payload cleanup hook
//!
//! The calendar hands each non-empty payload to the configured hook exactly
//! once: when its event is removed, when its day is cleared, or when the
//! calendar is torn down. Without a hook, payloads are simply dropped.

/// Receives payloads of events leaving the calendar
pub trait PayloadCleanup<P> {
    /// Take ownership of a released payload
    fn release(&mut self, payload: P);
}

impl<P, F> PayloadCleanup<P> for F
where
    F: FnMut(P),
{
    fn release(&mut self, payload: P) {
        self(payload)
    }
}
