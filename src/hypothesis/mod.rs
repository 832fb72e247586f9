//----------------------------------------
// hypothesis mod
//----------------------------------------
pub mod test_configuration;
pub mod types;
