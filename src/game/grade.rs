use std::convert::TryFrom;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::{
    interval::{is_left_glyph, is_right_glyph, Interval},
    loader::InputParams,
};

use super::pretty::prettify_number;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GradeError {
    #[error("form data is malformed: {0}")]
    Malformed(String),
    #[error("'{0}' not found in form data")]
    MissingField(&'static str),
    #[error("unexpected glyph {value:?} for '{field}'")]
    UnexpectedGlyph { field: &'static str, value: String },
    #[error("'{0}' is not an integer")]
    NotAnInteger(&'static str),
    #[error(
        "inconsistency among numbers: internal values {internal:?} != representation values {representation:?}"
    )]
    Inconsistent {
        internal: (i64, i64),
        representation: (i64, i64),
    },
    #[error("start {start} is greater than stop {stop}")]
    InvertedBounds { start: i64, stop: i64 },
}

/// A submitted answer together with the question it answers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Attempt {
    pub interval: Interval,
    pub answer: i64,
    pub game_level: i64,
}

impl Attempt {
    pub fn expected(&self) -> i64 {
        self.interval.integer_count()
    }

    pub fn is_correct(&self) -> bool {
        self.expected() == self.answer
    }
}

fn read_glyph(
    params: &mut InputParams,
    field: &'static str,
    allowed: fn(char) -> bool,
) -> Result<char, GradeError> {
    if !params.contains_key(field) {
        return Err(GradeError::MissingField(field));
    }
    let raw = params
        .get_str(field)
        .map_err(|_| GradeError::UnexpectedGlyph {
            field,
            value: "<non-string>".to_owned(),
        })?;
    match params.get_glyph(field) {
        Ok(glyph) if allowed(glyph) => Ok(glyph),
        _ => Err(GradeError::UnexpectedGlyph { field, value: raw }),
    }
}

#[derive(Clone, Copy)]
enum Encoding {
    /// JSON integer only.
    Number,
    /// Prettified string only, e.g. `"1 000"`.
    Text,
    /// Either of the above.
    Any,
}

fn read_int(
    params: &mut InputParams,
    field: &'static str,
    encoding: Encoding,
) -> Result<i64, GradeError> {
    if !params.contains_key(field) {
        return Err(GradeError::MissingField(field));
    }
    let value = match encoding {
        Encoding::Number => params.get_int(field),
        Encoding::Text => params.get_grouped_int(field),
        Encoding::Any => params.get_loose_int(field),
    };
    value.map_err(|_| GradeError::NotAnInteger(field))
}

/// Checks the submitted form data has the shape the game produces.
///
/// This guards the format only; a client is free to send any interval along
/// with the matching count.
pub fn validate_form_data(data: &Map<String, Value>) -> Result<Attempt, GradeError> {
    let mut params =
        InputParams::try_from(data).map_err(|e| GradeError::Malformed(e.to_string()))?;
    params.set_name("form-data".into());

    let left = read_glyph(&mut params, "left_glyph", is_left_glyph)?;
    let right = read_glyph(&mut params, "right_glyph", is_right_glyph)?;

    let start = read_int(&mut params, "start_internal", Encoding::Number)?;
    let stop = read_int(&mut params, "stop_internal", Encoding::Number)?;
    let start_repr = read_int(&mut params, "start_representation", Encoding::Text)?;
    let stop_repr = read_int(&mut params, "stop_representation", Encoding::Text)?;
    let answer = read_int(&mut params, "answer", Encoding::Any)?;
    let game_level = read_int(&mut params, "game_level", Encoding::Any)?;

    if (start, stop) != (start_repr, stop_repr) {
        return Err(GradeError::Inconsistent {
            internal: (start, stop),
            representation: (start_repr, stop_repr),
        });
    }
    if start > stop {
        return Err(GradeError::InvertedBounds { start, stop });
    }

    params.check_unused_keys();

    Ok(Attempt {
        interval: Interval::new(start, stop, left, right),
        answer,
        game_level,
    })
}

/// Validates the data and adds the expected count and the outcome to it.
pub fn grade(mut data: Map<String, Value>) -> Result<Map<String, Value>, GradeError> {
    let attempt = match validate_form_data(&data) {
        Ok(attempt) => attempt,
        Err(e) => {
            log::error!("{}", e);
            return Err(e);
        }
    };

    let expected = attempt.expected();
    data.insert("cpu_internal".to_owned(), expected.into());
    data.insert(
        "cpu_representation".to_owned(),
        prettify_number(expected).into(),
    );
    data.insert(
        "answer_representation".to_owned(),
        prettify_number(attempt.answer).into(),
    );
    data.insert("outcome".to_owned(), attempt.is_correct().into());
    log::info!(
        "level {}: {} answered {} (expected {})",
        attempt.game_level,
        attempt.interval,
        attempt.answer,
        expected
    );
    Ok(data)
}
