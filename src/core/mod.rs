pub mod backup;
pub mod calculator;
pub mod del;
pub mod edit;
pub mod export;
pub mod log;
pub mod punch;
pub mod session;
pub mod settings;
pub mod stats;
pub mod store;
pub mod ticker;
pub mod transition;
