//! Turns the metadata embedded in the answer form into the payload that is
//! posted back: the same object with an `answer` field added.

use std::convert::TryFrom;

use anyhow::Context;
use serde_json::{Map, Value};

use crate::{
    core::{interval::Interval, loader::InputParams, sampler::Sampler},
    sampler::sample_interval,
};

/// Name of the form field the augmented metadata is posted under.
pub const DATA_FIELD: &str = "data";
pub const ANSWER_KEY: &str = "answer";

const LOWER_KEYS: [&str; 3] = ["start_internal", "start", "left_bound"];
const UPPER_KEYS: [&str; 3] = ["stop_internal", "stop", "right_bound"];

/// Stands in for a glyph that is not one of `(`, `[`, `)`, `]`, so the pair
/// classifies as half-open.
pub const UNKNOWN_GLYPH: char = '\u{fffd}';

/// Reads a glyph without rejecting the payload: absent fields take the
/// default, anything but a single-character string becomes [`UNKNOWN_GLYPH`].
fn read_glyph(map: &Map<String, Value>, key: &str, fallback: char) -> char {
    let value = match map.get(key) {
        Some(value) => value,
        None => return fallback,
    };
    let mut chars = value.as_str().unwrap_or_default().chars();
    match (chars.next(), chars.next()) {
        (Some(glyph), None) => glyph,
        _ => {
            log::debug!("metadata - unrecognised glyph {} for '{}'", value, key);
            UNKNOWN_GLYPH
        }
    }
}

/// The page renders metadata with single quotes; JSON wants double quotes.
pub fn normalize_metadata(raw: &str) -> String {
    raw.replace('\'', "\"")
}

pub fn parse_metadata(raw: &str) -> anyhow::Result<Map<String, Value>> {
    let value: Value = serde_json::from_str(&normalize_metadata(raw))
        .with_context(|| format!("metadata - can't parse '{}'", raw))?;
    match value {
        Value::Object(map) => Ok(map),
        _ => anyhow::bail!("metadata - expected a JSON object, got '{}'", raw),
    }
}

/// Interval bounds and glyphs, whichever field names the metadata uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalMetadata {
    pub lower: i64,
    pub upper: i64,
    pub left: char,
    pub right: char,
}

impl IntervalMetadata {
    pub fn from_map(map: &Map<String, Value>) -> anyhow::Result<Self> {
        // other keys only ride along to the re-serialised payload
        let bounds: Map<String, Value> = map
            .iter()
            .filter(|(key, _)| {
                LOWER_KEYS.contains(&key.as_str()) || UPPER_KEYS.contains(&key.as_str())
            })
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        let mut params = InputParams::try_from(&bounds)?;
        params.set_name("metadata".into());

        let lower = params.get_int_any(&LOWER_KEYS)?;
        let upper = params.get_int_any(&UPPER_KEYS)?;
        let left = read_glyph(map, "left_glyph", '(');
        let right = read_glyph(map, "right_glyph", ']');
        Ok(Self {
            lower,
            upper,
            left,
            right,
        })
    }

    pub fn interval(&self) -> Interval {
        Interval::new(self.lower, self.upper, self.left, self.right)
    }

    /// Candidate answers: `[0, upper - lower]` under the same glyphs.
    pub fn answer_space(&self) -> anyhow::Result<Interval> {
        let width = self.upper.checked_sub(self.lower).with_context(|| {
            format!("metadata - width of {} overflows", self.interval())
        })?;
        Ok(Interval::new(0, width, self.left, self.right))
    }
}

/// The button that submitted the form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Button {
    /// Let the game pick a random answer.
    Roulette,
    /// Submit what the player typed.
    Submit(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub name: &'static str,
    pub value: String,
}

impl Submission {
    #[allow(dead_code)]
    pub fn payload(&self) -> anyhow::Result<Map<String, Value>> {
        parse_metadata(&self.value)
    }
}

fn parse_user_answer(input: &str) -> anyhow::Result<i64> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .with_context(|| format!("answer - '{}' is not an integer", input))
}

pub fn roll_answer<S: Sampler + ?Sized>(
    metadata: &Map<String, Value>,
    sampler: &mut S,
) -> anyhow::Result<i64> {
    let interval_metadata = IntervalMetadata::from_map(metadata)?;
    let space = interval_metadata.answer_space()?;
    let answer = sample_interval(&space, sampler)
        .with_context(|| format!("metadata - can't roll an answer for {}", space))?;
    log::debug!(
        "rolled {} for {}",
        answer,
        interval_metadata.interval()
    );
    Ok(answer)
}

pub fn process_form_data<S: Sampler + ?Sized>(
    raw_metadata: &str,
    button: &Button,
    sampler: &mut S,
) -> anyhow::Result<Submission> {
    let mut metadata = parse_metadata(raw_metadata)?;

    let answer = match button {
        Button::Roulette => roll_answer(&metadata, sampler)?,
        Button::Submit(input) => parse_user_answer(input)?,
    };
    metadata.insert(ANSWER_KEY.to_owned(), answer.into());

    Ok(Submission {
        name: DATA_FIELD,
        value: serde_json::to_string(&metadata)?,
    })
}
