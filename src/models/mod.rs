pub mod clock_action;
pub mod monthly_stats;
pub mod settings;
pub mod work_record;
pub mod work_status;
