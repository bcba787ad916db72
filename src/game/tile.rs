use super::animation::*;
use super::geometry::{Point, Rect};
use super::input::{ButtonState, MouseState};
use crate::animation::Animation;
use crate::error::Error;

const NAMES: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const NAMES_LEN: usize = NAMES.len();

/// The number printed on a tile, always within 1..=9.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TileNumber(u8);

impl TileNumber {
    pub fn new(number: usize) -> Result<Self, Error> {
        match number {
            1..=NAMES_LEN => Ok(TileNumber(number as u8)),
            _ => Err(Error::UnsupportedNumber(number)),
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Asset name of the tile's sprites.
    pub fn name(self) -> &'static str {
        NAMES[self.0 as usize - 1]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
    pub blink_duration_ms: u32,
    pub blink_interval_ms: u32,
    pub shrink_duration_ms: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Hover,
    Blink(BlinkAnimation),
    Shrink(ShrinkAnimation),
    Hidden,
}

/// What the tile shows this frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sprite {
    Normal,
    Highlighted,
    BlinkOff,
    BlinkOn,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileEvent {
    Guessed(Sound),
    /// The correct tile finished blinking.
    Solved,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ClickTracker {
    started: bool,
    released: bool,
}

impl Default for ClickTracker {
    fn default() -> Self {
        ClickTracker {
            started: false,
            released: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    number: TileNumber,
    is_correct: bool,
    phase: Phase,
    rect: Rect,
    original_side: i32,
    click: ClickTracker,
    timing: Timing,
}

impl Tile {
    pub fn new(
        center: Point,
        side_length: i32,
        number: TileNumber,
        correct: TileNumber,
        timing: Timing,
    ) -> Self {
        Tile {
            number,
            is_correct: number == correct,
            phase: Phase::Idle,
            rect: Rect::square_around(center, side_length),
            original_side: side_length,
            click: ClickTracker::default(),
            timing,
        }
    }

    pub fn number(&self) -> TileNumber {
        self.number
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }

    pub fn is_visible(&self) -> bool {
        self.phase != Phase::Hidden
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn sprite(&self) -> Sprite {
        match &self.phase {
            Phase::Hover => Sprite::Highlighted,
            Phase::Blink(blink) if blink.current_frame() => Sprite::BlinkOn,
            Phase::Blink(_) => Sprite::BlinkOff,
            Phase::Idle | Phase::Shrink(_) | Phase::Hidden => Sprite::Normal,
        }
    }

    /// Advances the tile by one frame.
    pub fn update(&mut self, elapsed_ms: u32, mouse: &MouseState) -> Option<TileEvent> {
        match &mut self.phase {
            Phase::Idle | Phase::Hover => self.track_mouse(mouse),
            Phase::Blink(blink) => {
                blink.advance(elapsed_ms);
                if blink.is_over() {
                    self.phase = Phase::Hidden;
                    return Some(TileEvent::Solved);
                }
                None
            }
            Phase::Shrink(shrink) => {
                shrink.advance(elapsed_ms);
                let side = shrink.current_frame();
                self.rect.width = side;
                self.rect.height = side;
                if shrink.is_over() {
                    self.rect.width = 0;
                    self.rect.height = 0;
                    self.phase = Phase::Hidden;
                }
                None
            }
            Phase::Hidden => None,
        }
    }

    fn track_mouse(&mut self, mouse: &MouseState) -> Option<TileEvent> {
        if !self.rect.contains(mouse.position) {
            self.phase = Phase::Idle;
            self.click = ClickTracker {
                started: false,
                released: false,
            };
            return None;
        }

        self.phase = Phase::Hover;
        match mouse.left_button {
            ButtonState::Pressed if self.click.released => {
                self.click.started = true;
                None
            }
            ButtonState::Pressed => None,
            ButtonState::Released => {
                self.click.released = true;
                if self.click.started {
                    self.click.started = false;
                    Some(self.guess())
                } else {
                    None
                }
            }
        }
    }

    fn guess(&mut self) -> TileEvent {
        let Timing {
            blink_duration_ms,
            blink_interval_ms,
            shrink_duration_ms,
        } = self.timing;

        if self.is_correct {
            log::info!("tile {} guessed correctly", self.number.get());
            self.phase = Phase::Blink(BlinkAnimation::new(blink_duration_ms, blink_interval_ms));
            TileEvent::Guessed(Sound::CorrectGuess)
        } else {
            log::debug!("tile {} guessed incorrectly", self.number.get());
            self.phase = Phase::Shrink(ShrinkAnimation::new(
                self.original_side,
                shrink_duration_ms,
            ));
            TileEvent::Guessed(Sound::IncorrectGuess)
        }
    }
}
