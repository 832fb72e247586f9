//----------------------------------------
// compute mod types
//----------------------------------------
use crate::advisory::LowConfidence;
use crate::power::types::SizeEffectTable;
use crate::simulation::types::{SimSettings, SimulationResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerSettings {
    pub alpha: f64,
    /// 1 or 2; anything else is rejected
    pub tails: u8,
    /// Log low-confidence advisories at warn level
    pub warn: bool,
    /// Run the Monte-Carlo validator with these settings
    pub simulation: Option<SimSettings>,
}

impl Default for PowerSettings {
    fn default() -> Self {
        Self {
            alpha: 0.05,
            tails: 2,
            warn: true,
            simulation: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PowerReport {
    pub observed_power: f64,
    pub table: SizeEffectTable,
    pub simulation: Option<SimulationResult>,
    /// Always populated, whether or not they were logged
    pub advisories: Vec<LowConfidence>,
}
