//----------------------------------------
// power mod
//----------------------------------------
pub mod analysis;
pub mod error;
pub mod observed_power;
pub mod refine;
pub mod size_effect;
pub mod types;
