/// Multiplier applied to the hourly rate when no overtime rate is configured.
pub const OVERTIME_FALLBACK_FACTOR: f64 = 1.25;

/// Pay for `worked_minutes`: regular rate up to `standard_minutes`, overtime rate after.
///
/// The result is not rounded; see [`round_earnings`].
pub fn compute_earnings(
    worked_minutes: i64,
    hourly_rate: f64,
    overtime_rate: Option<f64>,
    standard_minutes: i64,
) -> f64 {
    if worked_minutes <= 0 {
        return 0.0;
    }

    if worked_minutes <= standard_minutes {
        return (worked_minutes as f64 / 60.0) * hourly_rate;
    }

    let regular = (standard_minutes as f64 / 60.0) * hourly_rate;
    let overtime_minutes = worked_minutes - standard_minutes;
    let rate = match overtime_rate {
        Some(r) if r > 0.0 => r,
        _ => hourly_rate * OVERTIME_FALLBACK_FACTOR,
    };

    regular + (overtime_minutes as f64 / 60.0) * rate
}

/// Earnings as stored on a record: nearest whole currency unit, never negative.
pub fn round_earnings(amount: f64) -> i64 {
    amount.round().max(0.0) as i64
}
