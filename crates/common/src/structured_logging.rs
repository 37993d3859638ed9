use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Logging setup
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Minimum level when `RUST_LOG` is not set
    pub level: Level,
    /// One JSON object per line instead of human-readable output
    pub json_output: bool,
    /// ANSI colours, non-JSON output only
    pub color_output: bool,
    pub include_line_numbers: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            json_output: false,
            color_output: true,
            include_line_numbers: cfg!(debug_assertions),
        }
    }
}

impl LoggingConfig {
    /// Build from textual settings; an unknown level falls back to `info`
    pub fn from_settings(level: &str, json_output: bool) -> Self {
        Self {
            level: Level::from_str(level).unwrap_or(Level::INFO),
            json_output,
            color_output: !json_output,
            ..Self::default()
        }
    }
}

/// Install the global tracing subscriber
pub fn init_structured_logging(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));

    if config.json_output {
        let json_layer = fmt::layer()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_line_number(config.include_line_numbers);

        let subscriber = Registry::default().with(env_filter).with(json_layer);
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let fmt_layer = fmt::layer()
            .with_target(true)
            .with_line_number(config.include_line_numbers)
            .with_ansi(config.color_output)
            .with_span_events(FmtSpan::CLOSE);

        let subscriber = Registry::default().with(env_filter).with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

/// Measures an operation and logs its duration on completion
pub struct OperationTimer {
    start: std::time::Instant,
    operation_name: String,
    fields: HashMap<String, Value>,
}

impl OperationTimer {
    pub fn new(operation_name: impl Into<String>) -> Self {
        Self {
            start: std::time::Instant::now(),
            operation_name: operation_name.into(),
            fields: HashMap::new(),
        }
    }

    pub fn add_field(&mut self, key: impl Into<String>, value: impl Serialize) {
        if let Ok(v) = serde_json::to_value(value) {
            self.fields.insert(key.into(), v);
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    pub fn finish_with_result<T, E: std::fmt::Display>(self, result: &Result<T, E>) {
        let duration_ms = self.elapsed_ms();

        match result {
            Ok(_) => {
                tracing::debug!(
                    operation = %self.operation_name,
                    duration_ms = duration_ms,
                    success = true,
                    fields = ?self.fields,
                    "Operation completed"
                );
            }
            Err(e) => {
                tracing::warn!(
                    operation = %self.operation_name,
                    duration_ms = duration_ms,
                    success = false,
                    error = %e,
                    fields = ?self.fields,
                    "Operation failed"
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_settings_parses_level() {
        let config = LoggingConfig::from_settings("debug", true);
        assert_eq!(config.level, Level::DEBUG);
        assert!(config.json_output);
        assert!(!config.color_output);
    }

    #[test]
    fn test_unknown_level_falls_back_to_info() {
        let config = LoggingConfig::from_settings("chatty", false);
        assert_eq!(config.level, Level::INFO);
    }

    #[test]
    fn test_operation_timer_records_fields() {
        let mut timer = OperationTimer::new("project.save");
        timer.add_field("path", "./proj/hapify.json");
        assert_eq!(
            timer.fields.get("path"),
            Some(&Value::String("./proj/hapify.json".to_string()))
        );

        let result: Result<(), String> = Ok(());
        timer.finish_with_result(&result);
    }
}
