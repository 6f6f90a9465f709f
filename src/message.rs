use crate::types::InfoMessage;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt;

impl InfoMessage {
    /// One-line human readable report, every number with three decimals.
    pub fn get_message(&self) -> String {
        format!(
            "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.training_type, self.duration, self.distance, self.speed, self.calories
        )
    }
}

impl fmt::Display for InfoMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.get_message())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

pub fn render(info: &InfoMessage, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(info.get_message()),
        OutputFormat::Json => serde_json::to_string(info).context("Serializing summary to JSON"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value as JsonValue;

    fn swim() -> InfoMessage {
        InfoMessage {
            training_type: "Swimming".to_string(),
            duration: 1.0,
            distance: 0.9936,
            speed: 1.0,
            calories: 336.0,
        }
    }

    #[test]
    fn message_has_fixed_layout() {
        assert_eq!(
            swim().get_message(),
            "Training type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories burned: 336.000."
        );
    }

    #[test]
    fn message_always_has_three_decimals() {
        let info = InfoMessage {
            training_type: "Running".to_string(),
            duration: 12.0,
            distance: 123_456.5,
            speed: 0.000_4,
            calories: 699.75,
        };
        assert_eq!(
            info.get_message(),
            "Training type: Running; Duration: 12.000 h; Distance: 123456.500 km; \
             Avg speed: 0.000 km/h; Calories burned: 699.750."
        );
    }

    #[test]
    fn display_matches_get_message() {
        let info = swim();
        assert_eq!(info.to_string(), info.get_message());
    }

    #[test]
    fn json_rendering_keeps_raw_values() {
        let line = render(&swim(), OutputFormat::Json).unwrap();
        let v: JsonValue = serde_json::from_str(&line).unwrap();
        assert_eq!(v["training_type"], "Swimming");
        assert_eq!(v["distance"], 0.9936);
        assert_eq!(v["calories"], 336.0);
        assert!(!line.contains('\n'));
    }
}
