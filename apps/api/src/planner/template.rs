//! Degree-plan templates.
//!
//! A template is stored as nested JSON: `{ year: { term: [ {course, credits}, ... ] } }`.
//! Loading flattens it into a list of [`RequirementEntry`] values in traversal order
//! (years, then terms, then entries), each stamped with its sequence index. Object key
//! order is the stored order because `serde_json` is built with `preserve_order`.

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::planner::requirement::RequirementKind;

/// Credit weight assumed when an entry has no `credits` field.
pub const DEFAULT_CREDITS: f64 = 3.0;

const LABEL_KEY: &str = "course";
const CREDITS_KEY: &str = "credits";

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Malformed degree plan template: {0}")]
    MalformedTemplate(String),

    #[error("Malformed template entry at {year}/{term}[{position}]: {reason}")]
    MalformedEntry {
        year: String,
        term: String,
        position: usize,
        reason: String,
    },
}

/// One slot of a degree-plan template.
#[derive(Debug, Clone, PartialEq)]
pub struct RequirementEntry {
    /// Position in template traversal order. Strictly increasing through
    /// every stage of the planner.
    pub seq: usize,
    pub year: String,
    pub term: String,
    pub label: String,
    pub credits: f64,
    pub kind: RequirementKind,
    raw: Value,
}

/// Entries serialize as their original template record so clients can render
/// them exactly as stored.
impl Serialize for RequirementEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.raw.serialize(serializer)
    }
}

/// A loaded, read-only degree-plan template.
#[derive(Debug, Clone)]
pub struct DegreePlanTemplate {
    entries: Vec<RequirementEntry>,
    raw: Value,
}

impl DegreePlanTemplate {
    pub fn from_json(raw: Value) -> Result<Self, PlannerError> {
        let years = raw.as_object().ok_or_else(|| {
            PlannerError::MalformedTemplate("top level must be an object of years".to_string())
        })?;

        let mut entries = Vec::new();
        for (year, terms) in years {
            let terms = terms.as_object().ok_or_else(|| {
                PlannerError::MalformedTemplate(format!("year '{year}' must be an object of terms"))
            })?;
            for (term, slots) in terms {
                let slots = slots.as_array().ok_or_else(|| {
                    PlannerError::MalformedTemplate(format!(
                        "term '{year}/{term}' must be a list of requirements"
                    ))
                })?;
                for (position, slot) in slots.iter().enumerate() {
                    let entry = parse_entry(entries.len(), year, term, position, slot)?;
                    entries.push(entry);
                }
            }
        }

        Ok(Self { entries, raw })
    }

    pub fn entries(&self) -> &[RequirementEntry] {
        &self.entries
    }

    pub fn into_raw(self) -> Value {
        self.raw
    }
}

fn parse_entry(
    seq: usize,
    year: &str,
    term: &str,
    position: usize,
    slot: &Value,
) -> Result<RequirementEntry, PlannerError> {
    let malformed = |reason: &str| PlannerError::MalformedEntry {
        year: year.to_string(),
        term: term.to_string(),
        position,
        reason: reason.to_string(),
    };

    let record = slot
        .as_object()
        .ok_or_else(|| malformed("entry must be an object"))?;

    let label = record
        .get(LABEL_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| malformed("missing requirement label"))?;

    let credits = match record.get(CREDITS_KEY) {
        None | Some(Value::Null) => DEFAULT_CREDITS,
        Some(Value::Number(n)) => n
            .as_f64()
            .filter(|c| c.is_finite())
            .ok_or_else(|| malformed("credits out of range"))?,
        // "NaN" and "inf" parse as f64 but would never trip the packer's ceiling.
        Some(Value::String(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|c| c.is_finite())
            .ok_or_else(|| malformed("credits must be numeric"))?,
        Some(_) => return Err(malformed("credits must be numeric")),
    };

    Ok(RequirementEntry {
        seq,
        year: year.to_string(),
        term: term.to_string(),
        label: label.to_string(),
        credits,
        kind: RequirementKind::parse(label),
        raw: slot.clone(),
    })
}
