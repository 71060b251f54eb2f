use alarmrank_core::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Json,
    #[default]
    Table,
}

impl OutputFormat {
    pub fn parse(value: &str) -> AppResult<Self> {
        match value {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => Err(AppError::usage(format!(
                "invalid --format '{value}'; expected json|table"
            ))),
        }
    }
}
