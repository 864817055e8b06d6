/// Argument resolution: positional tokens and flag values into validated requests.
///
/// Number parsing is lenient on purpose. A token that is not an integer is
/// treated as absent and the default stays in place; only the final resolved
/// values are validated.
use super::errors::DiceError;
use super::model::{FlipRequest, MAX_COUNT, RollRequest};

/// Raw `(count, sides)` before validation. Zero means "not provided".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawDice {
    pub count: i64,
    pub sides: i64,
}

/// Apply positional tokens on top of preset flag values.
///
/// - Either preset non-zero: tokens are ignored entirely.
/// - One token: it is the number of sides and count becomes 1.
/// - Two or more: first is count, second is sides. The rest are ignored.
///
/// Non-numeric tokens leave the corresponding field untouched.
#[must_use]
pub fn parse_positional(tokens: &[String], preset: RawDice) -> RawDice {
    if preset.count != 0 || preset.sides != 0 {
        return preset;
    }

    let mut dice = preset;
    match tokens {
        [] => {}
        [sides] => {
            if let Some(d) = parse_int(sides) {
                dice.count = 1;
                dice.sides = d;
            }
        }
        [count, sides, ..] => {
            if let Some(n) = parse_int(count) {
                dice.count = n;
            }
            if let Some(d) = parse_int(sides) {
                dice.sides = d;
            }
        }
    }
    dice
}

/// Resolve positional tokens and optional flag values into a `RollRequest`.
///
/// # Errors
///
/// Returns `DiceError::InvalidDiceSides` when the resolved sides are <= 0 and
/// `DiceError::InvalidDiceCount` when the resolved count is negative or above
/// `MAX_COUNT`.
pub fn resolve_roll(
    tokens: &[String],
    count_flag: Option<i64>,
    sides_flag: Option<i64>,
) -> Result<RollRequest, DiceError> {
    let preset = RawDice {
        count: count_flag.unwrap_or(0),
        sides: sides_flag.unwrap_or(0),
    };
    let raw = parse_positional(tokens, preset);
    validate(raw)
}

fn validate(raw: RawDice) -> Result<RollRequest, DiceError> {
    let count = match raw.count {
        0 => 1,
        n => usize::try_from(n)
            .ok()
            .filter(|&c| c <= MAX_COUNT)
            .ok_or(DiceError::InvalidDiceCount { count: n })?,
    };
    let sides = match u64::try_from(raw.sides) {
        Ok(s) if s > 0 => s,
        _ => return Err(DiceError::InvalidDiceSides),
    };
    Ok(RollRequest { count, sides })
}

/// Resolve the optional flip-count token into a `FlipRequest`.
///
/// No token means a single flip. Tokens after the first are ignored.
///
/// # Errors
///
/// Returns `DiceError::InvalidFlipCount` if the token is non-numeric, not
/// positive, or above `MAX_COUNT`.
pub fn resolve_flip(tokens: &[String]) -> Result<FlipRequest, DiceError> {
    let Some(token) = tokens.first() else {
        return Ok(FlipRequest::default());
    };

    parse_int(token)
        .filter(|&n| n > 0)
        .and_then(|n| usize::try_from(n).ok())
        .filter(|&n| n <= MAX_COUNT)
        .map(|count| FlipRequest { count })
        .ok_or(DiceError::InvalidFlipCount)
}

/// Parse a base-10 integer with an optional sign. Surrounding whitespace is rejected.
fn parse_int(token: &str) -> Option<i64> {
    token.parse::<i64>().ok()
}
