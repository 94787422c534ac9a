//! Field-level validation standing between raw request bodies and the scoring engine.
//!
//! Every field is checked and every failure is collected, so a client sees all problems with a
//! report in one response. The engine is only ever handed an [`InjuryReport`] built here.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use super::domain::{InjuryReport, OnsetTiming, PainLocation, PainType};

pub const NON_FIELD_ERRORS: &str = "non_field_errors";

const REQUIRED: &str = "This field is required.";
const NOT_NULL: &str = "This field may not be null.";
const NOT_BLANK: &str = "This field may not be blank.";
const NOT_A_STRING: &str = "Not a valid string.";
const NOT_AN_INTEGER: &str = "A valid integer is required.";
const NOT_A_BOOLEAN: &str = "Must be a valid boolean.";

const PAIN_SCALE_MIN: i64 = 1;
const PAIN_SCALE_MAX: i64 = 10;

const TRUE_WORDS: [&str; 6] = ["t", "y", "yes", "true", "on", "1"];
const FALSE_WORDS: [&str; 6] = ["f", "n", "no", "false", "off", "0"];

/// Field-keyed validation messages, serialized as `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    pub fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields
            .entry(field.into())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn messages(&self, field: &str) -> Option<&[String]> {
        self.fields.get(field).map(Vec::as_slice)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, messages) in &self.fields {
            if !first {
                f.write_str("; ")?;
            }
            first = false;
            write!(f, "{field}: {}", messages.join(" "))?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "NoneType",
        Value::Bool(_) => "bool",
        Value::Number(number) if number.is_f64() => "float",
        Value::Number(_) => "int",
        Value::String(_) => "str",
        Value::Array(_) => "list",
        Value::Object(_) => "dict",
    }
}

fn present<'a>(
    fields: &'a Map<String, Value>,
    name: &'static str,
    errors: &mut ValidationErrors,
) -> Option<&'a Value> {
    match fields.get(name) {
        None => {
            errors.push(name, REQUIRED);
            None
        }
        Some(Value::Null) => {
            errors.push(name, NOT_NULL);
            None
        }
        Some(value) => Some(value),
    }
}

fn choice<T>(
    fields: &Map<String, Value>,
    name: &'static str,
    labels: &[&'static str],
    lookup: fn(&str) -> Option<T>,
    errors: &mut ValidationErrors,
) -> Option<T> {
    let value = present(fields, name, errors)?;
    let text = match value {
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        _ => {
            errors.push(name, NOT_A_STRING);
            return None;
        }
    };

    if text.is_empty() {
        errors.push(name, NOT_BLANK);
        return None;
    }

    let parsed = lookup(&text);
    if parsed.is_none() {
        errors.push(name, format!("Must be one of: {}", labels.join(", ")));
    }
    parsed
}

fn integral(value: f64) -> Option<i64> {
    if value.is_finite() && value.fract() == 0.0 {
        Some(value as i64)
    } else {
        None
    }
}

fn parse_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number
            .as_i64()
            .or_else(|| number.as_f64().and_then(integral)),
        Value::String(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(integral))
        }
        _ => None,
    }
}

fn pain_scale(fields: &Map<String, Value>, errors: &mut ValidationErrors) -> Option<u8> {
    const NAME: &str = "pain_scale";
    let value = present(fields, NAME, errors)?;

    let Some(scale) = parse_integer(value) else {
        errors.push(NAME, NOT_AN_INTEGER);
        return None;
    };

    if scale < PAIN_SCALE_MIN {
        errors.push(
            NAME,
            format!("Ensure this value is greater than or equal to {PAIN_SCALE_MIN}."),
        );
        return None;
    }
    if scale > PAIN_SCALE_MAX {
        errors.push(
            NAME,
            format!("Ensure this value is less than or equal to {PAIN_SCALE_MAX}."),
        );
        return None;
    }

    u8::try_from(scale).ok()
}

fn parse_boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(flag) => Some(*flag),
        Value::Number(number) => match number.as_f64() {
            Some(n) if n == 1.0 => Some(true),
            Some(n) if n == 0.0 => Some(false),
            _ => None,
        },
        Value::String(text) => {
            let word = text.trim().to_ascii_lowercase();
            if TRUE_WORDS.contains(&word.as_str()) {
                Some(true)
            } else if FALSE_WORDS.contains(&word.as_str()) {
                Some(false)
            } else {
                None
            }
        }
        _ => None,
    }
}

fn boolean(
    fields: &Map<String, Value>,
    name: &'static str,
    errors: &mut ValidationErrors,
) -> Option<bool> {
    let value = present(fields, name, errors)?;
    let parsed = parse_boolean(value);
    if parsed.is_none() {
        errors.push(name, NOT_A_BOOLEAN);
    }
    parsed
}

/// Validates a raw JSON body into an [`InjuryReport`]. Unknown keys are ignored.
pub fn validate_report(payload: &Value) -> Result<InjuryReport, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let Some(fields) = payload.as_object() else {
        errors.push(
            NON_FIELD_ERRORS,
            format!(
                "Invalid data. Expected a dictionary, but got {}.",
                kind_name(payload)
            ),
        );
        return Err(errors);
    };

    let pain_location = choice(
        fields,
        "pain_location",
        &PainLocation::ALL.map(|location| location.label()),
        PainLocation::from_label,
        &mut errors,
    );
    let pain_type = choice(
        fields,
        "pain_type",
        &PainType::ALL.map(|kind| kind.label()),
        PainType::from_label,
        &mut errors,
    );
    let pain_scale = pain_scale(fields, &mut errors);
    let radiates = boolean(fields, "radiates", &mut errors);
    let improved_after_warmup = boolean(fields, "improved_after_warmup", &mut errors);
    let sharp_during_lift = boolean(fields, "sharp_during_lift", &mut errors);
    let swelling = boolean(fields, "swelling", &mut errors);
    let previous_injury = boolean(fields, "previous_injury", &mut errors);
    let onset_timing = choice(
        fields,
        "onset_timing",
        &OnsetTiming::ALL.map(|timing| timing.label()),
        OnsetTiming::from_label,
        &mut errors,
    );
    let light_load_possible = boolean(fields, "light_load_possible", &mut errors);

    match (
        pain_location,
        pain_type,
        pain_scale,
        radiates,
        improved_after_warmup,
        sharp_during_lift,
        swelling,
        previous_injury,
        onset_timing,
        light_load_possible,
    ) {
        (
            Some(pain_location),
            Some(pain_type),
            Some(pain_scale),
            Some(radiates),
            Some(improved_after_warmup),
            Some(sharp_during_lift),
            Some(swelling),
            Some(previous_injury),
            Some(onset_timing),
            Some(light_load_possible),
        ) if errors.is_empty() => Ok(InjuryReport {
            pain_location,
            pain_type,
            pain_scale,
            radiates,
            improved_after_warmup,
            sharp_during_lift,
            swelling,
            previous_injury,
            onset_timing,
            light_load_possible,
        }),
        _ => Err(errors),
    }
}
