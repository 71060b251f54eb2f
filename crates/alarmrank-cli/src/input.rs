use alarmrank_core::{AppError, AppResult};
use alarmrank_engine::AlarmRecord;
use std::path::Path;

pub fn load_alarms(path: &Path) -> AppResult<Vec<AlarmRecord>> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("failed to read input {}: {e}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|e| AppError::input(format!("failed to parse input {}: {e}", path.display())))
}
