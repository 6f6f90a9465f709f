use crate::dlog;
use crate::training::{Running, SportsWalking, Swimming, Training};
use crate::types::{InfoMessage, WorkoutKind};
use anyhow::{Context, Result};
use serde_json::Value as JsonValue;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum PackageError {
    #[error("unrecognized workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("invalid arguments for {code}: {reason}")]
    InvalidArguments { code: &'static str, reason: String },
}

impl PackageError {
    fn invalid(kind: WorkoutKind, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            code: kind.code(),
            reason: reason.into(),
        }
    }
}

/// One sensor record: a workout code and its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub workout_type: String,
    pub data: Vec<f64>,
}

/// A batch entry as read from input. Entries that could not be decoded
/// carry the error that `process` reports when it reaches them.
pub type Entry = std::result::Result<Package, PackageError>;

impl Package {
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }

    /// Decode one `["RUN", [15000, 1, 75]]` entry.
    pub fn from_json(entry: &JsonValue) -> Entry {
        let (code, params) = match entry {
            JsonValue::Array(items) => match items.as_slice() {
                [JsonValue::String(code), rest @ ..] => (code, rest),
                _ => return Err(PackageError::UnknownWorkoutType(entry.to_string())),
            },
            other => return Err(PackageError::UnknownWorkoutType(other.to_string())),
        };

        let kind = WorkoutKind::from_code(code)
            .ok_or_else(|| PackageError::UnknownWorkoutType(code.clone()))?;

        let values = match params {
            [JsonValue::Array(values)] => values,
            [] => return Err(PackageError::invalid(kind, "missing parameter list")),
            [_] => return Err(PackageError::invalid(kind, "parameters must be a list")),
            _ => {
                return Err(PackageError::invalid(
                    kind,
                    format!("expected [code, [params]], got {} elements", params.len() + 1),
                ));
            }
        };

        let data = values
            .iter()
            .enumerate()
            .map(|(i, v)| {
                v.as_f64().ok_or_else(|| {
                    PackageError::invalid(kind, format!("parameter #{i} is not a number: {v}"))
                })
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self::new(code.clone(), data))
    }
}

/// Build the workout record matching `workout_type` from its positional data.
pub fn read_package(workout_type: &str, data: &[f64]) -> Result<Box<dyn Training>, PackageError> {
    let kind = WorkoutKind::from_code(workout_type)
        .ok_or_else(|| PackageError::UnknownWorkoutType(workout_type.to_string()))?;

    let arity_error = || {
        PackageError::invalid(
            kind,
            format!("expected {} values, got {}", kind.arity(), data.len()),
        )
    };

    let training: Box<dyn Training> = match (kind, data) {
        (WorkoutKind::Running, &[action, duration, weight]) => {
            Box::new(Running::new(action, duration, weight))
        }
        (WorkoutKind::SportsWalking, &[action, duration, weight, height]) => {
            Box::new(SportsWalking::new(action, duration, weight, height))
        }
        (WorkoutKind::Swimming, &[action, duration, weight, length_pool, count_pool]) => {
            let count_pool = whole_count(count_pool).ok_or_else(|| {
                PackageError::invalid(
                    kind,
                    format!("pool lap count must be a whole number, got {count_pool}"),
                )
            })?;
            Box::new(Swimming::new(action, duration, weight, length_pool, count_pool))
        }
        _ => return Err(arity_error()),
    };

    Ok(training)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_count(v: f64) -> Option<u32> {
    if v.fract() != 0.0 || v < 0.0 || v > f64::from(u32::MAX) {
        return None;
    }
    Some(v as u32)
}

/// Parse a JSON batch. Only a top level that is not an array is an error;
/// bad entries are kept as `Err` so the batch can skip them.
pub fn parse_packages(json: &str) -> Result<Vec<Entry>> {
    let entries: Vec<JsonValue> = serde_json::from_str(json)
        .context("Parsing workout packages (expected [[\"RUN\", [..]], ..])")?;
    Ok(entries.iter().map(Package::from_json).collect())
}

/// The sample batch a sensor hub sends on first sync.
pub fn demo_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", vec![15000.0, 1.0, 75.0]),
        Package::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub summaries: Vec<InfoMessage>,
    pub skipped: usize,
}

fn summarize(entry: &Entry) -> Result<InfoMessage, PackageError> {
    let p = entry.as_ref().map_err(Clone::clone)?;
    let training = read_package(&p.workout_type, &p.data)?;
    dlog!("package code={}", p.workout_type);
    Ok(training.show_training_info())
}

/// Process entries in order. Invalid entries are logged and skipped.
pub fn process(entries: &[Entry]) -> BatchReport {
    let mut report = BatchReport::default();

    for (index, entry) in entries.iter().enumerate() {
        match summarize(entry) {
            Ok(info) => report.summaries.push(info),
            Err(err) => {
                tracing::warn!(index, %err, "skipping package");
                report.skipped += 1;
            }
        }
    }

    report
}

/// Like [`process`] but stops at the first invalid entry.
pub fn process_strict(entries: &[Entry]) -> Result<Vec<InfoMessage>> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| summarize(entry).with_context(|| format!("package #{index}")))
        .collect()
}
