/// Outcome generation: uniform dice throws and coin flips.
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::model::{Coin, FlipRequest, FlipResult, RollRequest, RollResult};

/// Draw `req.count` throws, each uniform in `1..=req.sides`.
pub fn roll<R: Rng>(rng: &mut R, req: RollRequest) -> RollResult {
    let throws = (0..req.count)
        .map(|_| rng.gen_range(1..=req.sides))
        .collect();
    RollResult::new(throws)
}

/// Flip a fair coin `req.count` times.
pub fn flip<R: Rng>(rng: &mut R, req: FlipRequest) -> FlipResult {
    let flips = (0..req.count)
        .map(|_| {
            if rng.gen_range(0..2) == 0 {
                Coin::Heads
            } else {
                Coin::Tails
            }
        })
        .collect();
    FlipResult::new(flips)
}

/// Randomness source for one invocation, seeded from the wall clock.
///
/// Output is not reproducible across runs.
pub struct Roller {
    rng: StdRng,
}

impl Roller {
    /// Seed a fresh generator from the current time in nanoseconds.
    #[must_use]
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        // Fold the high bits in so the seed still varies after u64 nanos overflow.
        #[allow(clippy::cast_possible_truncation)]
        let seed = (nanos as u64) ^ ((nanos >> 64) as u64);
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn roll(&mut self, req: RollRequest) -> RollResult {
        roll(&mut self.rng, req)
    }

    pub fn flip(&mut self, req: FlipRequest) -> FlipResult {
        flip(&mut self.rng, req)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_shape_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for (count, sides) in [(1, 6), (3, 20), (5, 100), (500, 487), (10, 1)] {
            let req = RollRequest { count, sides };
            let res = roll(&mut rng, req);
            assert_eq!(res.throws().len(), count, "{count}d{sides}");
            for &t in res.throws() {
                assert!((1..=sides).contains(&t), "{t} out of range for d{sides}");
            }
        }
    }

    #[test]
    fn test_roll_d1_is_always_one() {
        let mut roller = Roller::from_clock();
        let res = roller.roll(RollRequest { count: 4, sides: 1 });
        assert_eq!(res.throws(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_flip_shape() {
        let mut roller = Roller::from_clock();
        let res = roller.flip(FlipRequest { count: 10 });
        assert_eq!(res.len(), 10);
        assert_eq!(res.heads() + res.tails(), 10);
    }

    #[test]
    fn test_flip_hits_both_sides() {
        let mut rng = StdRng::seed_from_u64(42);
        let res = flip(&mut rng, FlipRequest { count: 200 });
        assert!(res.heads() > 0);
        assert!(res.tails() > 0);
    }
}
