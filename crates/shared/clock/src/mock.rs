use timeutil_core::Timestamp;
use timeutil_ports::Clock;

/// Mock clock holding a fixed, settable time
///
/// `now()` returns the stored Timestamp unchanged until `set` replaces it,
/// so time-dependent code can be tested deterministically. Replacing the
/// time takes `&mut self`; share behind a lock if a test needs to move the
/// clock while another thread is reading it.
pub struct MockClock {
    ts: Timestamp,
}

impl MockClock {
    pub fn new(ts: Timestamp) -> Self {
        Self { ts }
    }

    /// Replace the stored time for all subsequent `now()` calls
    pub fn set(&mut self, ts: Timestamp) {
        self.ts = ts;
    }
}

impl Clock for MockClock {
    fn now(&self) -> Timestamp {
        self.ts
    }

    fn name(&self) -> &str {
        "MockClock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_mock_clock_is_repeatable() {
        let ts = Timestamp::from_unix(1231006505).unwrap();
        let clock = MockClock::new(ts);

        assert_eq!(clock.now(), ts);
        thread::sleep(std::time::Duration::from_millis(10));
        assert_eq!(clock.now(), ts);
    }

    #[test]
    fn test_mock_clock_set() {
        let ts1 = Timestamp::from_unix(0).unwrap();
        let ts2 = Timestamp::from_unix(1231006505).unwrap();

        let mut clock = MockClock::new(ts1);
        assert_eq!(clock.now(), ts1);

        clock.set(ts2);
        assert_eq!(clock.now(), ts2);
        assert_eq!(clock.now(), ts2);
    }

    #[test]
    fn test_clock_trait_object() {
        let clock: Box<dyn Clock> = Box::new(MockClock::new(Timestamp::from_unix(42).unwrap()));
        assert_eq!(clock.now().unix(), 42);
        assert_eq!(clock.name(), "MockClock");
    }
}
