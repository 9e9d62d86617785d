pub mod compliance;
pub mod performance;
pub mod progress;
pub mod risk;
