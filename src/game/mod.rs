mod animation;
mod board;
mod geometry;
mod input;
mod tile;

use board::Update;
use crate::animation::Clock;
use crate::config::Config;
use crate::error::Error;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::rc::Rc;
use yew::Reducible;

pub use animation::{Sound, SoundQueue};
pub use board::Board;
pub use geometry::{Point, Rect};
pub use input::{ButtonState, MouseState};
pub use tile::Sprite;

pub enum GameAction {
    /// One animation frame, stamped in milliseconds.
    Tick(f64),
    Mouse(MouseState),
    /// The pointer left the play area.
    MouseLeave,
}

#[derive(Clone, Debug)]
pub enum Status {
    Playing(Board),
    /// A fatal error ended the game.
    Halted(Error),
}

#[derive(Clone)]
pub struct Game {
    config: Config,
    pub status: Status,
    pub sounds: SoundQueue,
    pub round: usize,
    mouse: MouseState,
    /// Where the button went down since the last frame, so that a press
    /// released before the frame still reaches the tiles.
    pressed_at: Option<Point>,
    clock: Clock,
    rng: StdRng,
}

impl Game {
    pub fn new(config: Config) -> Self {
        Game::with_rng(config, StdRng::from_entropy())
    }

    pub fn with_rng(config: Config, mut rng: StdRng) -> Self {
        let status = deal(&config, &mut rng, 1);
        Game {
            config,
            status,
            sounds: SoundQueue::new(),
            round: 1,
            mouse: MouseState::away(),
            pressed_at: None,
            clock: Clock::new(),
            rng,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn start_round(&mut self) {
        self.round += 1;
        self.status = deal(&self.config, &mut self.rng, self.round);
    }
}

fn deal(config: &Config, rng: &mut StdRng, round: usize) -> Status {
    match Board::random(config, rng) {
        Ok(board) => {
            log::info!("round {} started", round);
            log::debug!("correct number is {}", board.correct().get());
            Status::Playing(board)
        }
        Err(err) => {
            log::error!("cannot start round {}: {}", round, err);
            Status::Halted(err)
        }
    }
}

impl Reducible for Game {
    type Action = GameAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut game = (*self).clone();

        match action {
            GameAction::Tick(now) => {
                let elapsed = game.clock.tick(now);
                let mouse = game.mouse;
                let missed_press = game
                    .pressed_at
                    .take()
                    .filter(|_| mouse.left_button == ButtonState::Released);
                if let Status::Playing(board) = &mut game.status {
                    let mut update = Update::default();
                    if let Some(position) = missed_press {
                        update = board.update(0, &MouseState::new(position, ButtonState::Pressed));
                    }
                    let next = board.update(elapsed, &mouse);
                    update.cues.extend(next.cues);
                    update.solved |= next.solved;

                    game.sounds.extend(update.cues);
                    if update.solved {
                        game.sounds.push(Sound::NewGame);
                        game.start_round();
                    }
                }
            }
            GameAction::Mouse(mouse) => {
                if mouse.left_button == ButtonState::Pressed
                    && game.mouse.left_button == ButtonState::Released
                {
                    game.pressed_at = Some(mouse.position);
                }
                game.mouse = mouse;
            }
            GameAction::MouseLeave => game.mouse.position = MouseState::away().position,
        }

        game.into()
    }
}
