pub mod counts;
pub mod duration;
pub mod station;
pub mod time;
pub mod user;

pub use counts::{ValueCount, mode, value_counts};
