//----------------------------------------
// distribution mod
//----------------------------------------
pub mod error;
pub mod noncentral_t;
mod quadrature;
pub mod quantiles;
