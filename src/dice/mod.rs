/// Dice domain layer: argument resolution, outcome generation, commentary, formatting.
pub mod commentary;
pub mod errors;
pub mod format;
pub mod generate;
pub mod model;
pub mod resolve;

pub use commentary::{Commentary, commentary};
pub use errors::DiceError;
pub use format::{write_flips, write_roll};
pub use generate::Roller;
pub use model::{Coin, DisplayMode, DisplayOptions, FlipResult, RollRequest, RollResult};
pub use resolve::{resolve_flip, resolve_roll};
