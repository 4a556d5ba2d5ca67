pub mod app;
pub mod assessment;
pub mod cli;
pub mod config;
pub mod models;
pub mod session;
pub mod store;
pub mod utils;
pub mod validation;

#[cfg(test)]
pub mod test_utils;
