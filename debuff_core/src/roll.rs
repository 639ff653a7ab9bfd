//! Debuff application rolls

use rand::Rng;

/// Roll once against `chance` (percent)
pub fn roll_debuff(chance: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < chance / 100.0
}

/// Outcome of a batch of rolls
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollSummary {
    pub attempts: u32,
    pub applied: u32,
    /// Chance the rolls were made against (percent)
    pub chance: f64,
}

impl RollSummary {
    /// Share of attempts that landed, in percent
    pub fn observed_rate(&self) -> f64 {
        if self.attempts == 0 {
            return 0.0;
        }
        f64::from(self.applied) / f64::from(self.attempts) * 100.0
    }

    /// Observed minus expected, in percentage points
    pub fn deviation(&self) -> f64 {
        self.observed_rate() - self.chance
    }
}

/// Roll `attempts` times against `chance`
pub fn roll_many(chance: f64, attempts: u32, rng: &mut impl Rng) -> RollSummary {
    let applied = (0..attempts).filter(|_| roll_debuff(chance, rng)).count() as u32;
    RollSummary {
        attempts,
        applied,
        chance,
    }
}
