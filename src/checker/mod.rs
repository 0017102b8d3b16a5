mod rank;
mod record;
mod threshold;

pub use rank::Ranker;
pub use record::FileRecord;
pub use threshold::ThresholdSelector;

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
