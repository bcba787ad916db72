use crate::error::ConfigError;
use serde::Deserialize;

const CONFIG_ELEMENT_ID: &str = "config";

/// Tunables of the game. Every field may be overridden by a JSON object
/// embedded in the page; missing fields keep their defaults.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub window_width: i32,
    pub window_height: i32,
    /// Vertical space left around the board.
    pub board_margin: i32,
    pub rows: usize,
    pub columns: usize,
    pub tile_border: i32,
    pub blink_duration_ms: u32,
    pub blink_interval_ms: u32,
    pub shrink_duration_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            window_width: 800,
            window_height: 600,
            board_margin: 100,
            rows: 3,
            columns: 3,
            tile_border: 10,
            blink_duration_ms: 4000,
            blink_interval_ms: 100,
            shrink_duration_ms: 500,
        }
    }
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("window_width", self.window_width > 0),
            ("window_height", self.window_height > 0),
            ("rows", self.rows > 0),
            ("columns", self.columns > 0),
            ("blink_duration_ms", self.blink_duration_ms > 0),
            ("blink_interval_ms", self.blink_interval_ms > 0),
            ("shrink_duration_ms", self.shrink_duration_ms > 0),
        ];
        if let Some((name, _)) = positive.iter().find(|(_, ok)| !ok) {
            return Err(ConfigError::NotPositive(*name));
        }

        let non_negative = [
            ("board_margin", self.board_margin >= 0),
            ("tile_border", self.tile_border >= 0),
        ];
        if let Some((name, _)) = non_negative.iter().find(|(_, ok)| !ok) {
            return Err(ConfigError::Negative(*name));
        }

        match self.tile_side() {
            Some(tile_side) if tile_side > 0 => Ok(()),
            _ => Err(ConfigError::BoardTooSmall {
                side: self.board_side_length(),
                columns: self.rows.max(self.columns),
                border: self.tile_border,
            }),
        }
    }

    pub fn board_center(&self) -> (i32, i32) {
        (self.window_width / 2, self.window_height / 2)
    }

    pub fn board_side_length(&self) -> i32 {
        self.window_height.saturating_sub(self.board_margin)
    }

    /// Side of a single tile so that the grid and its borders fill the board.
    /// `self` must have been validated.
    pub fn tile_side_length(&self) -> i32 {
        self.tile_side().unwrap_or(0)
    }

    fn tile_side(&self) -> Option<i32> {
        let lines = i32::try_from(self.rows.max(self.columns)).ok()?;
        let borders = lines.checked_add(1)?.checked_mul(self.tile_border)?;
        let room = self.board_side_length().checked_sub(borders)?;
        Some(room / lines)
    }
}

/// Reads the configuration embedded in the page, falling back to the
/// defaults when the page carries none.
pub fn load() -> Result<Config, ConfigError> {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID));

    match element.and_then(|element| element.text_content()) {
        Some(json) if !json.trim().is_empty() => {
            let config = Config::from_json(&json)?;
            log::info!("loaded config overrides from #{}", CONFIG_ELEMENT_ID);
            Ok(config)
        }
        _ => Ok(Config::default()),
    }
}
