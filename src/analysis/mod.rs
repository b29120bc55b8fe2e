pub mod aggregator;
pub mod interpreter;
pub mod strategy;
pub mod types;

#[cfg(test)]
mod aggregator_tests;
