pub mod availability;
pub mod config;
pub mod error;
pub mod startup;
pub mod utils;
pub mod volunteers;
