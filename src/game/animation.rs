use crate::animation::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Correct-answer animation: alternates between the two halves of the
/// blinking sprite every `interval` milliseconds until `duration` elapses.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlinkAnimation {
    elapsed: u32,
    duration: u32,
    interval: u32,
}

impl BlinkAnimation {
    pub fn new(duration: u32, interval: u32) -> Self {
        BlinkAnimation {
            elapsed: 0,
            duration,
            interval: interval.max(1),
        }
    }

    /// How many times the sprite has switched halves so far.
    pub fn toggles(&self) -> u32 {
        self.elapsed.min(self.duration.saturating_sub(1)) / self.interval
    }
}

impl Animation for BlinkAnimation {
    /// Whether the lit half of the sprite is showing.
    type Frame = bool;

    fn advance(&mut self, elapsed_ms: u32) {
        self.elapsed = self.elapsed.saturating_add(elapsed_ms);
    }

    fn current_frame(&self) -> bool {
        self.toggles() % 2 == 1
    }

    fn is_over(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Incorrect-answer animation: the side length falls linearly from the
/// original length to zero.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShrinkAnimation {
    original: i32,
    elapsed: u32,
    duration: u32,
}

impl ShrinkAnimation {
    pub fn new(original: i32, duration: u32) -> Self {
        ShrinkAnimation {
            original,
            elapsed: 0,
            duration: duration.max(1),
        }
    }
}

impl Animation for ShrinkAnimation {
    /// Current side length.
    type Frame = i32;

    fn advance(&mut self, elapsed_ms: u32) {
        self.elapsed = self.elapsed.saturating_add(elapsed_ms).min(self.duration);
    }

    fn current_frame(&self) -> i32 {
        let remaining = (self.duration - self.elapsed) as i64;
        (self.original as i64 * remaining / self.duration as i64) as i32
    }

    fn is_over(&self) -> bool {
        self.elapsed >= self.duration
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sound {
    CorrectGuess,
    IncorrectGuess,
    NewGame,
}

impl Sound {
    pub const ALL: [Sound; 3] = [Sound::CorrectGuess, Sound::IncorrectGuess, Sound::NewGame];

    pub fn src(self) -> &'static str {
        match self {
            Sound::CorrectGuess => "/sound/correct_guess.wav",
            Sound::IncorrectGuess => "/sound/incorrect_guess.wav",
            Sound::NewGame => "/sound/new_game.wav",
        }
    }
}

/// Cues waiting to be played by the next render. Clones share the queue.
#[derive(Clone, Debug, Default)]
pub struct SoundQueue {
    pending: Rc<RefCell<Vec<Sound>>>,
}

impl SoundQueue {
    pub fn new() -> Self {
        SoundQueue::default()
    }

    pub fn push(&self, sound: Sound) {
        self.pending.borrow_mut().push(sound);
    }

    pub fn extend(&self, sounds: impl IntoIterator<Item = Sound>) {
        self.pending.borrow_mut().extend(sounds);
    }

    pub fn take(&self) -> Vec<Sound> {
        std::mem::take(self.pending.borrow_mut().as_mut())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_blink_toggles_once_per_interval() {
        let mut blink = BlinkAnimation::new(1000, 100);
        let mut frames = vec![blink.current_frame()];
        let mut toggled_at = Vec::new();

        let mut elapsed = 0;
        while !blink.is_over() {
            let before = blink.current_frame();
            blink.advance(10);
            elapsed += 10;
            if blink.is_over() {
                break;
            }
            if blink.current_frame() != before {
                toggled_at.push(elapsed);
            }
            frames.push(blink.current_frame());
        }

        assert_eq!(elapsed, 1000);
        assert_eq!(
            toggled_at,
            vec![100, 200, 300, 400, 500, 600, 700, 800, 900]
        );
        assert!(!frames[0]);
        assert_eq!(blink.toggles(), 9);
    }

    #[test]
    fn test_blink_with_long_frames() {
        let mut blink = BlinkAnimation::new(1000, 100);
        blink.advance(250);
        assert_eq!(blink.toggles(), 2);
        assert!(!blink.current_frame());
        blink.advance(100);
        assert!(blink.current_frame());
        blink.advance(5000);
        assert!(blink.is_over());
    }

    #[test]
    fn test_shrink_is_linear_and_ends_at_zero() {
        let mut shrink = ShrinkAnimation::new(153, 500);
        assert_eq!(shrink.current_frame(), 153);

        let mut sides = Vec::new();
        while !shrink.is_over() {
            shrink.advance(125);
            sides.push(shrink.current_frame());
        }

        assert_eq!(sides, vec![114, 76, 38, 0]);
    }

    #[test]
    fn test_shrink_overshoot() {
        let mut shrink = ShrinkAnimation::new(100, 500);
        shrink.advance(499);
        assert_eq!(shrink.current_frame(), 0);
        assert!(!shrink.is_over());
        shrink.advance(u32::MAX);
        assert_eq!(shrink.current_frame(), 0);
        assert!(shrink.is_over());
    }

    #[test]
    fn test_sound_queue_is_drained_once() {
        let queue = SoundQueue::new();
        let shared = queue.clone();
        queue.push(Sound::IncorrectGuess);
        shared.extend([Sound::CorrectGuess, Sound::NewGame]);

        assert_eq!(
            queue.take(),
            vec![Sound::IncorrectGuess, Sound::CorrectGuess, Sound::NewGame]
        );
        assert!(shared.take().is_empty());
    }
}
