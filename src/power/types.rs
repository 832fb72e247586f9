//----------------------------------------
// power mod types
//----------------------------------------

/// Target power levels the size/effect table is computed for
pub const POWER_LEVELS: [f64; 5] = [0.70, 0.80, 0.90, 0.95, 0.99];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerResult {
    pub observed_power: f64,
}

/// Parallel arrays indexed by `power_levels`.
///
/// `min_sample_sizes` come from the normal approximation, which
/// underestimates for small samples (below ~30); treat them as a starting
/// point for re-measurement rather than a final answer.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeEffectTable {
    pub power_levels: Vec<f64>,
    pub min_sample_sizes: Vec<usize>,
    pub min_effect_sizes: Vec<f64>,
    pub test_description: String,
}
