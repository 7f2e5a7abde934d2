pub mod config;
pub mod errors;
pub mod filter;
pub mod trip;
