//----------------------------------------
// compute mod
//----------------------------------------
pub mod compute_power;
mod report;
pub mod types;

pub use crate::advisory::LowConfidence;
pub use crate::compute::compute_power::compute_power;
pub use crate::compute::types::{PowerReport, PowerSettings};
pub use crate::groups::types::{Comparison, Group};
pub use crate::hypothesis::types::{Alternative, Tails, TestConfiguration, TestMode};
pub use crate::power::analysis::PowerAnalysis;
pub use crate::power::observed_power::observed_power;
pub use crate::power::refine::refine_sample_size;
pub use crate::power::size_effect::{min_effect_sizes, min_sample_sizes, size_effect_table};
pub use crate::power::types::{POWER_LEVELS, PowerResult, SizeEffectTable};
pub use crate::simulation::sim_power::{simulate_power, simulate_power_seeded};
pub use crate::simulation::types::{SimSettings, SimulationResult};
