pub const KONAMI_SEQUENCE: [&str; 10] = [
    "ArrowUp",
    "ArrowUp",
    "ArrowDown",
    "ArrowDown",
    "ArrowLeft",
    "ArrowRight",
    "ArrowLeft",
    "ArrowRight",
    "b",
    "a",
];

/// Tracks progress through the Konami code across `keydown` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct KonamiDetector {
    progress: usize,
}

impl KonamiDetector {
    /// Feed one `KeyboardEvent.key`. Returns true exactly when the sequence
    /// completes. Any wrong key drops progress back to zero, including a key
    /// that would itself start a new attempt.
    pub fn push(&mut self, key: &str) -> bool {
        if KONAMI_SEQUENCE[self.progress] != key {
            self.progress = 0;
            return false;
        }
        self.progress += 1;
        if self.progress == KONAMI_SEQUENCE.len() {
            self.progress = 0;
            return true;
        }
        false
    }

    #[inline]
    pub fn progress(&self) -> usize {
        self.progress
    }
}
