//! Response delay adapters

mod fixed;

pub use fixed::FixedDelay;
