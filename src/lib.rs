pub mod app_state;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod services;

#[cfg(test)]
pub mod test_utils;
