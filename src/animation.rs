/// Something that changes over elapsed game time.
pub trait Animation {
    type Frame;

    fn advance(&mut self, elapsed_ms: u32);
    fn current_frame(&self) -> Self::Frame;
    fn is_over(&self) -> bool;
}

/// Turns the absolute timestamps of the frame loop into per-frame deltas.
#[derive(Clone, Debug, Default)]
pub struct Clock {
    last_at: Option<f64>,
}

impl Clock {
    pub fn new() -> Self {
        Clock::default()
    }

    /// Milliseconds elapsed since the previous tick. The first tick only
    /// records the timestamp and reports zero.
    pub fn tick(&mut self, now: f64) -> u32 {
        let elapsed = match self.last_at {
            Some(last) if now > last => (now - last).floor() as u32,
            _ => 0,
        };
        // Keep the fractional part so that deltas never drift.
        self.last_at = Some(match self.last_at {
            Some(last) if now > last => last + elapsed as f64,
            Some(last) => last,
            None => now,
        });
        elapsed
    }
}

#[cfg(test)]
mod test {
    use super::*;

    struct Countdown {
        remaining: u32,
    }

    impl Animation for Countdown {
        type Frame = u32;

        fn advance(&mut self, elapsed_ms: u32) {
            self.remaining = self.remaining.saturating_sub(elapsed_ms);
        }

        fn current_frame(&self) -> u32 {
            self.remaining
        }

        fn is_over(&self) -> bool {
            self.remaining == 0
        }
    }

    #[test]
    fn test_clock() {
        let mut clock = Clock::new();
        assert_eq!(clock.tick(1000.0), 0);
        assert_eq!(clock.tick(1016.7), 16);
        assert_eq!(clock.tick(1033.4), 17);
        assert_eq!(clock.tick(1050.0), 17);
    }

    #[test]
    fn test_clock_ignores_time_going_backwards() {
        let mut clock = Clock::new();
        clock.tick(500.0);
        assert_eq!(clock.tick(400.0), 0);
        assert_eq!(clock.tick(510.0), 10);
    }

    #[test]
    fn test_clock_drives_animation() {
        let mut clock = Clock::new();
        let mut countdown = Countdown { remaining: 50 };

        let mut frames = Vec::new();
        let mut now = 0.0;
        clock.tick(now);
        while !countdown.is_over() {
            now += 20.0;
            countdown.advance(clock.tick(now));
            frames.push(countdown.current_frame());
        }

        assert_eq!(frames, vec![30, 10, 0]);
    }
}
