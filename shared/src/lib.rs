pub mod constants;
pub mod types;
pub mod errors;
pub mod utils;
pub mod transport;
pub mod config;
pub mod credentials;
pub mod api;
pub mod state;
pub mod app;

#[cfg(test)]
mod testing;
