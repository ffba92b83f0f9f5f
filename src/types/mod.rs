//! Type-safe wrappers and enums for Sleeper API arguments.

pub mod sport;
pub mod time;

pub use sport::{Sport, TrendingType};
pub use time::{Season, Week};

#[cfg(test)]
mod tests;
