pub mod coach;
pub mod config;
pub mod generator;
pub mod models;
#[cfg(test)]
pub mod test_helpers;
