//! Roll simulation - empirical application rate vs the model chance

use debuff_core::{roll_many, Calculator, RollSummary};
use rand::Rng;

/// Batch sizes selectable on the Rolls tab
pub const ATTEMPT_STEPS: [u32; 4] = [100, 1_000, 10_000, 100_000];

/// Runs kept in the history list
const MAX_RUNS: usize = 50;

/// One batch of rolls
#[derive(Debug, Clone)]
pub struct RollRun {
    pub model: String,
    pub difference: i64,
    pub summary: RollSummary,
}

pub struct RollSimulation {
    pub attempt_index: usize,
    /// Newest first
    pub runs: Vec<RollRun>,
}

impl RollSimulation {
    pub fn new() -> Self {
        RollSimulation {
            attempt_index: 1,
            runs: Vec::new(),
        }
    }

    pub fn attempts(&self) -> u32 {
        ATTEMPT_STEPS[self.attempt_index]
    }

    pub fn more_attempts(&mut self) {
        if self.attempt_index + 1 < ATTEMPT_STEPS.len() {
            self.attempt_index += 1;
        }
    }

    pub fn fewer_attempts(&mut self) {
        if self.attempt_index > 0 {
            self.attempt_index -= 1;
        }
    }

    /// Roll a batch at the calculator's current difference
    pub fn run(&mut self, calculator: &Calculator, model: &str, rng: &mut impl Rng) -> &RollRun {
        let calculation = calculator.calculation();
        let summary = roll_many(calculation.chance, self.attempts(), rng);

        tracing::info!(
            model,
            difference = calculation.difference,
            attempts = summary.attempts,
            applied = summary.applied,
            "roll batch"
        );

        self.runs.insert(
            0,
            RollRun {
                model: model.to_string(),
                difference: calculation.difference,
                summary,
            },
        );
        self.runs.truncate(MAX_RUNS);
        &self.runs[0]
    }

    pub fn latest(&self) -> Option<&RollRun> {
        self.runs.first()
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }
}

impl Default for RollSimulation {
    fn default() -> Self {
        Self::new()
    }
}
