//! Pure time and pay arithmetic. Nothing in here reads the clock.

pub mod breaks;
pub mod earnings;
pub mod worked;

pub use breaks::compute_break_minutes;
pub use earnings::{compute_earnings, round_earnings};
pub use worked::{compute_worked_minutes, is_overtime};

/// 8 hours.
pub const DEFAULT_STANDARD_MINUTES: i64 = 480;
