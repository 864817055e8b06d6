/// Plain-text rendering of rolls and flips.
use std::io::{self, Write};

use super::commentary::commentary;
use super::model::{Coin, DisplayMode, DisplayOptions, FlipResult, RollRequest, RollResult};

/// Render a roll.
///
/// ```text
/// 2 dice rolled (d20):
/// Sum: 32
/// Throws:
///   * 19
///   * 13
/// ```
///
/// A single die prints `Rolled: X` instead of the sum/throws blocks. With
/// `verbose`, one line of commentary follows whatever was printed.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_roll<W: Write>(
    out: &mut W,
    req: RollRequest,
    result: &RollResult,
    opts: DisplayOptions,
) -> io::Result<()> {
    writeln!(out, "{} dice rolled (d{}):", req.count, req.sides)?;

    match DisplayMode::select(req.count, opts) {
        DisplayMode::Single => {
            if let Some(first) = result.throws().first() {
                writeln!(out, "Rolled: {first}")?;
            }
        }
        DisplayMode::SumOnly => write_sum(out, result)?,
        DisplayMode::UnitOnly => write_throws(out, result)?,
        DisplayMode::Both => {
            write_sum(out, result)?;
            write_throws(out, result)?;
        }
    }

    if opts.verbose {
        writeln!(out, "{}", commentary(req, result))?;
    }
    Ok(())
}

fn write_sum<W: Write>(out: &mut W, result: &RollResult) -> io::Result<()> {
    writeln!(out, "Sum: {}", result.sum())
}

fn write_throws<W: Write>(out: &mut W, result: &RollResult) -> io::Result<()> {
    writeln!(out, "Throws:")?;
    for t in result.throws() {
        writeln!(out, "  * {t}")?;
    }
    Ok(())
}

/// Render a series of coin flips, with a heads/tails summary when `verbose`.
///
/// # Errors
///
/// Returns any I/O error from `out`.
pub fn write_flips<W: Write>(out: &mut W, result: &FlipResult, verbose: bool) -> io::Result<()> {
    writeln!(out, "{} coin flips:", result.len())?;
    for (i, side) in result.flips().iter().enumerate() {
        writeln!(out, "  - Flip {}: {side}", i + 1)?;
    }

    if verbose {
        writeln!(out)?;
        writeln!(out, "Summary:")?;
        writeln!(
            out,
            "  - Heads: {} ({:.2}%)",
            result.heads(),
            result.percentage(Coin::Heads)
        )?;
        writeln!(
            out,
            "  - Tails: {} ({:.2}%)",
            result.tails(),
            result.percentage(Coin::Tails)
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_roll(count: usize, sides: u64, throws: &[u64], opts: DisplayOptions) -> String {
        let mut buf = Vec::new();
        write_roll(
            &mut buf,
            RollRequest { count, sides },
            &RollResult::new(throws.to_vec()),
            opts,
        )
        .unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn render_flips(flips: &[Coin], verbose: bool) -> String {
        let mut buf = Vec::new();
        write_flips(&mut buf, &FlipResult::new(flips.to_vec()), verbose).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_single_die() {
        let out = render_roll(1, 6, &[5], DisplayOptions::default());
        assert_eq!(out, "1 dice rolled (d6):\nRolled: 5\n");
    }

    #[test]
    fn test_single_die_ignores_sum_and_unit() {
        let opts = DisplayOptions {
            show_sum: true,
            show_unit: false,
            verbose: false,
        };
        assert_eq!(render_roll(1, 6, &[5], opts), "1 dice rolled (d6):\nRolled: 5\n");
    }

    #[test]
    fn test_default_shows_sum_and_throws() {
        let out = render_roll(2, 20, &[19, 13], DisplayOptions::default());
        assert_eq!(out, "2 dice rolled (d20):\nSum: 32\nThrows:\n  * 19\n  * 13\n");
    }

    #[test]
    fn test_both_flags_show_everything() {
        let opts = DisplayOptions {
            show_sum: true,
            show_unit: true,
            verbose: false,
        };
        let out = render_roll(2, 20, &[19, 13], opts);
        assert_eq!(out, "2 dice rolled (d20):\nSum: 32\nThrows:\n  * 19\n  * 13\n");
    }

    #[test]
    fn test_sum_only() {
        let throws = [
            7, 18, 39, 32, 26, 38, 36, 48, 47, 7, 35, 45, 3, 8, 13, 35, 2, 45, 17, 48, 1, 1, 38,
            13, 38, 41, 33, 39, 9, 25, 21, 9,
        ];
        let opts = DisplayOptions {
            show_sum: true,
            ..DisplayOptions::default()
        };
        let out = render_roll(32, 20, &throws, opts);
        assert_eq!(out, "32 dice rolled (d20):\nSum: 817\n");
    }

    #[test]
    fn test_unit_only() {
        let opts = DisplayOptions {
            show_unit: true,
            ..DisplayOptions::default()
        };
        let out = render_roll(2, 20, &[19, 12], opts);
        assert_eq!(out, "2 dice rolled (d20):\nThrows:\n  * 19\n  * 12\n");
    }

    #[test]
    fn test_verbose_appends_commentary() {
        let opts = DisplayOptions {
            verbose: true,
            ..DisplayOptions::default()
        };
        let out = render_roll(2, 20, &[19, 13], opts);
        assert_eq!(
            out,
            "2 dice rolled (d20):\nSum: 32\nThrows:\n  * 19\n  * 13\nGood roll! Fortune favors you today.\n"
        );
    }

    #[test]
    fn test_verbose_single_crit() {
        let opts = DisplayOptions {
            verbose: true,
            ..DisplayOptions::default()
        };
        let out = render_roll(1, 20, &[20], opts);
        assert_eq!(
            out,
            "1 dice rolled (d20):\nRolled: 20\nNatural 20!! Critical success!!!\n"
        );
    }

    #[test]
    fn test_verbose_sum_only() {
        let opts = DisplayOptions {
            show_sum: true,
            show_unit: false,
            verbose: true,
        };
        let out = render_roll(2, 12, &[1, 1], opts);
        assert_eq!(
            out,
            "2 dice rolled (d12):\nSum: 2\nAbysmal roll!! Better luck next time... I guess?\n"
        );
    }

    #[test]
    fn test_flips() {
        let out = render_flips(&[Coin::Heads, Coin::Tails, Coin::Heads], false);
        assert_eq!(
            out,
            "3 coin flips:\n  - Flip 1: Heads\n  - Flip 2: Tails\n  - Flip 3: Heads\n"
        );
    }

    #[test]
    fn test_flips_verbose_summary() {
        let out = render_flips(&[Coin::Heads, Coin::Tails, Coin::Heads, Coin::Heads], true);
        assert_eq!(
            out,
            "4 coin flips:\n  - Flip 1: Heads\n  - Flip 2: Tails\n  - Flip 3: Heads\n  - Flip 4: Heads\n\nSummary:\n  - Heads: 3 (75.00%)\n  - Tails: 1 (25.00%)\n"
        );
    }
}
