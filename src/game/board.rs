use super::animation::Sound;
use super::geometry::{Point, Rect};
use super::input::MouseState;
use super::tile::{Tile, TileEvent, TileNumber, Timing};
use crate::config::Config;
use crate::error::Error;
use rand::Rng;

/// Everything a single board update produced.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Update {
    pub cues: Vec<Sound>,
    /// The correct tile finished blinking and a new round should start.
    pub solved: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    correct: TileNumber,
    rect: Rect,
}

fn tile_numbers(config: &Config) -> Result<Vec<TileNumber>, Error> {
    (1..=config.rows.saturating_mul(config.columns))
        .map(TileNumber::new)
        .collect()
}

impl Board {
    /// Lays the tiles out row by row inside a square of the configured side
    /// around the configured center.
    pub fn new(config: &Config, correct: TileNumber) -> Result<Self, Error> {
        let numbers = tile_numbers(config)?;
        if !numbers.contains(&correct) {
            return Err(Error::CorrectNumberOffBoard {
                correct: correct.get(),
                tiles: numbers.len(),
            });
        }

        let (center_x, center_y) = config.board_center();
        let side_length = config.board_side_length();
        let rect = Rect::square_around(Point::new(center_x, center_y), side_length);

        let border = config.tile_border;
        let tile_side = config.tile_side_length();
        let grid_length = |lines: usize| lines as i32 * tile_side + (lines as i32 + 1) * border;
        let left = rect.x + (side_length - grid_length(config.columns)) / 2;
        let top = rect.y + (side_length - grid_length(config.rows)) / 2;

        let timing = Timing {
            blink_duration_ms: config.blink_duration_ms,
            blink_interval_ms: config.blink_interval_ms,
            shrink_duration_ms: config.shrink_duration_ms,
        };

        let tiles = numbers
            .into_iter()
            .enumerate()
            .map(|(index, number)| {
                let (row, column) = ((index / config.columns) as i32, (index % config.columns) as i32);
                let center = Point::new(
                    left + border + column * (tile_side + border) + tile_side / 2,
                    top + border + row * (tile_side + border) + tile_side / 2,
                );
                Tile::new(center, tile_side, number, correct, timing)
            })
            .collect();

        Ok(Board {
            tiles,
            correct,
            rect,
        })
    }

    /// A board whose correct number is picked uniformly among its tiles.
    /// `config` must have been validated.
    pub fn random<R: Rng>(config: &Config, rng: &mut R) -> Result<Self, Error> {
        let numbers = tile_numbers(config)?;
        let correct = numbers[rng.gen_range(0..numbers.len())];
        Board::new(config, correct)
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn correct(&self) -> TileNumber {
        self.correct
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn update(&mut self, elapsed_ms: u32, mouse: &MouseState) -> Update {
        let mut update = Update::default();
        for tile in self.tiles.iter_mut() {
            match tile.update(elapsed_ms, mouse) {
                Some(TileEvent::Guessed(cue)) => update.cues.push(cue),
                Some(TileEvent::Solved) => update.solved = true,
                None => {}
            }
        }
        update
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::game::input::ButtonState;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn number(n: usize) -> TileNumber {
        TileNumber::new(n).unwrap()
    }

    fn click(board: &mut Board, position: Point) -> Update {
        let mut update = board.update(16, &MouseState::new(position, ButtonState::Pressed));
        let release = board.update(16, &MouseState::new(position, ButtonState::Released));
        update.cues.extend(release.cues);
        update.solved |= release.solved;
        update
    }

    fn center_of(board: &Board, n: usize) -> Point {
        board.tiles()[n - 1].rect().center()
    }

    #[test]
    fn test_layout() {
        let board = Board::new(&Config::default(), number(5)).unwrap();
        assert_eq!(board.rect(), Rect::new(150, 50, 500, 500));

        let rects: Vec<_> = board.tiles().iter().map(|tile| tile.rect()).collect();
        assert_eq!(rects.len(), 9);
        assert_eq!(rects[0], Rect::new(160, 60, 153, 153));
        assert_eq!(rects[1], Rect::new(323, 60, 153, 153));
        assert_eq!(rects[3], Rect::new(160, 223, 153, 153));
        assert_eq!(rects[8], Rect::new(486, 386, 153, 153));

        let numbers: Vec<_> = board.tiles().iter().map(|tile| tile.number().get()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_exactly_one_correct_tile() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let board = Board::random(&Config::default(), &mut rng).unwrap();
            let correct: Vec<_> = board
                .tiles()
                .iter()
                .filter(|tile| tile.is_correct())
                .map(|tile| tile.number())
                .collect();
            assert_eq!(correct, vec![board.correct()]);
        }
    }

    #[test]
    fn test_oversized_grid_is_fatal() {
        let config = Config {
            rows: 4,
            columns: 4,
            ..Config::default()
        };
        assert_eq!(
            Board::new(&config, number(1)),
            Err(Error::UnsupportedNumber(10))
        );
        assert_eq!(
            Board::random(&config, &mut StdRng::seed_from_u64(1)),
            Err(Error::UnsupportedNumber(10))
        );
    }

    #[test]
    fn test_correct_number_must_be_on_board() {
        let config = Config {
            rows: 2,
            columns: 2,
            ..Config::default()
        };
        assert_eq!(
            Board::new(&config, number(7)),
            Err(Error::CorrectNumberOffBoard {
                correct: 7,
                tiles: 4
            })
        );
    }

    #[test]
    fn test_incorrect_guess() {
        let mut board = Board::new(&Config::default(), number(5)).unwrap();
        let position = center_of(&board, 2);
        let update = click(&mut board, position);
        assert_eq!(update.cues, vec![Sound::IncorrectGuess]);
        assert!(!update.solved);

        let away = MouseState::away();
        for _ in 0..40 {
            assert!(!board.update(16, &away).solved);
        }
        assert!(!board.tiles()[1].is_visible());
        assert_eq!(board.tiles()[1].rect().width, 0);
        assert_eq!(board.tiles().iter().filter(|tile| tile.is_visible()).count(), 8);
    }

    #[test]
    fn test_correct_guess_solves_board() {
        let config = Config::default();
        let mut board = Board::new(&config, number(5)).unwrap();
        let position = center_of(&board, 5);
        let update = click(&mut board, position);
        assert_eq!(update.cues, vec![Sound::CorrectGuess]);
        assert!(!update.solved);

        let away = MouseState::away();
        let mut elapsed = 0;
        loop {
            elapsed += 16;
            if board.update(16, &away).solved {
                break;
            }
            assert!(elapsed < config.blink_duration_ms);
        }
        assert!(elapsed >= config.blink_duration_ms);
    }
}
