use serde::Serialize;

use crate::core::{
    interval::{Interval, LEFT_GLYPHS, RIGHT_GLYPHS},
    rng::Rng,
};

use super::{
    level::{fetch_level, GAME_LEVELS},
    pretty::prettify_number,
};

/// Metadata of one "how many integers lie in this interval" question, in the
/// shape embedded into the answer form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Question {
    pub left_glyph: char,
    pub right_glyph: char,
    pub start_internal: i64,
    pub stop_internal: i64,
    pub start_representation: String,
    pub stop_representation: String,
    pub game_level: usize,
}

impl Question {
    pub fn interval(&self) -> Interval {
        Interval::new(
            self.start_internal,
            self.stop_internal,
            self.left_glyph,
            self.right_glyph,
        )
    }

    pub fn expected_answer(&self) -> i64 {
        self.interval().integer_count()
    }

    pub fn to_metadata(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Metadata with single quotes, as it appears inside a form attribute.
    pub fn to_attribute_value(&self) -> anyhow::Result<String> {
        Ok(self.to_metadata()?.replace('"', "'"))
    }
}

/// Draws a random sub-interval of the level's limits with random glyphs.
///
/// Returns `None` for an unknown level index.
pub fn generate_question(game_level: usize, rng: &mut Rng) -> Option<Question> {
    let (lower, upper) = *GAME_LEVELS.get(game_level)?;
    let start = rng.uniform_int(lower, upper);
    let stop = rng.uniform_int(start, upper);
    let left_glyph = rng.choose(&LEFT_GLYPHS);
    let right_glyph = rng.choose(&RIGHT_GLYPHS);

    let question = Question {
        left_glyph,
        right_glyph,
        start_internal: start,
        stop_internal: stop,
        start_representation: prettify_number(start),
        stop_representation: prettify_number(stop),
        game_level,
    };
    log::debug!(
        "level {}: question {} (answer {})",
        game_level,
        question.interval(),
        question.expected_answer()
    );
    Some(question)
}

/// Starts a round from a level index typed by the player.
pub fn play(input: &str, rng: &mut Rng) -> Option<Question> {
    let (game_level, _) = fetch_level(input)?;
    generate_question(game_level, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::interval::{is_left_glyph, is_right_glyph};

    #[test]
    fn questions_stay_inside_their_level() {
        let mut rng = Rng::with_seed(1);
        for (index, &(lower, upper)) in GAME_LEVELS.iter().enumerate() {
            for _ in 0..200 {
                let q = generate_question(index, &mut rng).unwrap();
                assert!(lower <= q.start_internal);
                assert!(q.start_internal <= q.stop_internal);
                assert!(q.stop_internal <= upper);
                assert!(is_left_glyph(q.left_glyph));
                assert!(is_right_glyph(q.right_glyph));
                assert_eq!(q.start_representation, prettify_number(q.start_internal));
                assert_eq!(q.stop_representation, prettify_number(q.stop_internal));
                assert_eq!(q.game_level, index);
            }
        }
    }

    #[test]
    fn unknown_level_has_no_question() {
        let mut rng = Rng::with_seed(1);
        assert_eq!(generate_question(GAME_LEVELS.len(), &mut rng), None);
        assert_eq!(play("bogus", &mut rng), None);
        assert_eq!(play("2", &mut rng).unwrap().game_level, 2);
    }

    #[test]
    fn metadata_shape() {
        let q = Question {
            left_glyph: '[',
            right_glyph: ')',
            start_internal: 7,
            stop_internal: 1041,
            start_representation: "7".to_owned(),
            stop_representation: "1 041".to_owned(),
            game_level: 2,
        };
        let value: serde_json::Value = serde_json::from_str(&q.to_metadata().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "left_glyph": "[",
                "right_glyph": ")",
                "start_internal": 7,
                "stop_internal": 1041,
                "start_representation": "7",
                "stop_representation": "1 041",
                "game_level": 2,
            })
        );
        assert!(!q.to_attribute_value().unwrap().contains('"'));
        assert_eq!(q.expected_answer(), 1034);
    }
}
