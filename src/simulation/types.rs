//----------------------------------------
// simulation mod types
//----------------------------------------

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimSettings {
    /// Independent repetitions; each yields one empirical power
    pub outer_reps: usize,
    /// Simulated tests per repetition
    pub inner_reps: usize,
    /// Fixed seed for reproducible runs; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            outer_reps: 100,
            inner_reps: 300,
            seed: None,
        }
    }
}

impl SimSettings {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationResult {
    pub mean_power: f64,
    pub iqr_low: f64,
    pub iqr_high: f64,
}
