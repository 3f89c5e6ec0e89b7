use std::time::Instant;

/// Monotonically increasing elapsed-time counter.
///
/// Started once (typically at load), read once per frame, never reset.
/// Animations derive their phase from `elapsed_secs`, so the counter must
/// keep running across the clock's whole lifetime.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    started: Instant,
}

impl AnimationClock {
    /// Starts the clock now.
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    /// Seconds elapsed since `start` was called.
    pub fn elapsed_secs(&self) -> f64 {
        self.started.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_near_zero() {
        let clock = AnimationClock::start();
        let elapsed = clock.elapsed_secs();
        assert!(elapsed >= 0.0);
        assert!(elapsed < 1.0);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let clock = AnimationClock::start();
        let a = clock.elapsed_secs();
        let b = clock.elapsed_secs();
        let c = clock.elapsed_secs();
        assert!(a <= b);
        assert!(b <= c);
    }
}
