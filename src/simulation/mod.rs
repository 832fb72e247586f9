//----------------------------------------
// simulation mod
//----------------------------------------
pub mod sim_power;
pub mod types;
