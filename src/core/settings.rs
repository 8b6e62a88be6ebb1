use crate::core::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::settings::Settings;
use crate::models::work_record::Timestamp;
use crate::ui::messages::warning;

#[derive(Debug, Default, Clone)]
pub struct SettingsUpdate {
    pub hourly_rate: Option<f64>,
    pub overtime_rate: Option<f64>,
    pub target_minutes_per_day: Option<i64>,
}

impl SettingsUpdate {
    pub fn is_empty(&self) -> bool {
        self.hourly_rate.is_none()
            && self.overtime_rate.is_none()
            && self.target_minutes_per_day.is_none()
    }
}

pub struct SettingsLogic;

impl SettingsLogic {
    /// Merge `update` into the stored settings. Every value must be a finite number `>= 0`.
    pub fn update<S: RecordStore>(
        store: &mut S,
        update: &SettingsUpdate,
        now: Timestamp,
    ) -> AppResult<Settings> {
        check_rate("hourly rate", update.hourly_rate)?;
        check_rate("overtime rate", update.overtime_rate)?;
        if let Some(m) = update.target_minutes_per_day
            && m < 0
        {
            return Err(AppError::InvalidSettings(format!(
                "target minutes per day must be >= 0 (got {})",
                m
            )));
        }

        let mut settings = store.get_settings()?;
        if let Some(v) = update.hourly_rate {
            settings.hourly_rate = v;
        }
        if let Some(v) = update.overtime_rate {
            settings.overtime_rate = v;
        }
        if let Some(v) = update.target_minutes_per_day {
            settings.target_minutes_per_day = v;
        }
        settings.updated_at = now;

        store.save_settings(&settings)?;

        let message = format!(
            "hourly {} overtime {} target {} min",
            settings.hourly_rate, settings.overtime_rate, settings.target_minutes_per_day
        );
        if let Err(e) = store.audit("settings", &settings.id, &message) {
            warning(format!("Failed to write internal log: {}", e));
        }

        Ok(settings)
    }
}

fn check_rate(name: &str, value: Option<f64>) -> AppResult<()> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(AppError::InvalidSettings(format!(
            "{} must be a number >= 0 (got {})",
            name, v
        ))),
        _ => Ok(()),
    }
}
