//! Quiz request schema and next-question selection

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use serde_json::Value;

use super::validation::integer_from_json;
use super::{Question, ValidationError};

/// Category id clients send to mean "questions from every category"
pub const ANY_CATEGORY: i32 = 0;

/// POST /quizzes body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i32>,
    pub quiz_category: Option<QuizCategoryRef>,
}

/// `quiz_category` object; clients also send a `type` label, which is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizCategoryRef {
    /// Number or numeric string
    pub id: Option<Value>,
}

/// Which questions a quiz draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizScope {
    Any,
    Category(i32),
}

impl QuizScope {
    pub fn from_id(id: i32) -> Self {
        if id == ANY_CATEGORY {
            Self::Any
        } else {
            Self::Category(id)
        }
    }
}

/// Validated quiz request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizQuery {
    pub scope: QuizScope,
    pub previous: HashSet<i32>,
}

impl TryFrom<QuizRequest> for QuizQuery {
    type Error = ValidationError;

    fn try_from(req: QuizRequest) -> Result<Self, Self::Error> {
        let category = req
            .quiz_category
            .ok_or(ValidationError::Missing { field: "quiz_category" })?;
        let id = category
            .id
            .ok_or(ValidationError::Missing { field: "quiz_category.id" })?;

        Ok(Self {
            scope: QuizScope::from_id(parse_category_id(&id)?),
            previous: req.previous_questions.into_iter().collect(),
        })
    }
}

fn parse_category_id(value: &Value) -> Result<i32, ValidationError> {
    integer_from_json(value).ok_or(ValidationError::InvalidFormat {
        field: "quiz_category.id",
        reason: "must be an integer",
    })
}

/// Drop every candidate the player has already seen.
pub fn eligible(candidates: Vec<Question>, previous: &HashSet<i32>) -> Vec<Question> {
    candidates
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect()
}

/// Pick the next quiz question uniformly from the unseen candidates.
///
/// `None` means the pool is exhausted and the quiz is over.
pub fn select_question<R>(
    candidates: Vec<Question>,
    previous: &HashSet<i32>,
    rng: &mut R,
) -> Option<Question>
where
    R: Rng + ?Sized,
{
    eligible(candidates, previous).choose(rng).cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn question(id: i32, category: i32) -> Question {
        Question {
            id,
            question: format!("question {}", id),
            answer: format!("answer {}", id),
            category,
            difficulty: 1,
        }
    }

    fn parse(body: &str) -> Result<QuizQuery, ValidationError> {
        let req: QuizRequest = serde_json::from_str(body).unwrap();
        QuizQuery::try_from(req)
    }

    #[test]
    fn zero_id_means_any_category() {
        let query = parse(r#"{"previous_questions": [], "quiz_category": {"id": 0}}"#).unwrap();
        assert_eq!(query.scope, QuizScope::Any);
        assert!(query.previous.is_empty());
    }

    #[test]
    fn accepts_string_ids() {
        let query = parse(
            r#"{"previous_questions": [4, 9], "quiz_category": {"type": "Art", "id": "2"}}"#,
        )
        .unwrap();
        assert_eq!(query.scope, QuizScope::Category(2));
        assert_eq!(query.previous, HashSet::from([4, 9]));
    }

    #[test]
    fn previous_questions_default_to_empty() {
        let query = parse(r#"{"quiz_category": {"id": 3}}"#).unwrap();
        assert!(query.previous.is_empty());
    }

    #[test]
    fn missing_category_is_rejected() {
        assert_eq!(
            parse(r#"{"previous_questions": []}"#).unwrap_err(),
            ValidationError::Missing { field: "quiz_category" }
        );
        assert_eq!(
            parse(r#"{"previous_questions": [], "quiz_category": {}}"#).unwrap_err(),
            ValidationError::Missing { field: "quiz_category.id" }
        );
    }

    #[test]
    fn malformed_id_is_rejected() {
        for body in [
            r#"{"quiz_category": {"id": "science"}}"#,
            r#"{"quiz_category": {"id": true}}"#,
            r#"{"quiz_category": {"id": 1.5}}"#,
            r#"{"quiz_category": {"id": 99999999999}}"#,
        ] {
            assert!(
                matches!(parse(body).unwrap_err(), ValidationError::InvalidFormat { .. }),
                "{}",
                body
            );
        }
    }

    #[test]
    fn excludes_previous_questions() {
        let candidates = vec![question(1, 1), question(2, 1), question(3, 2)];
        let previous = HashSet::from([1, 3]);

        let pool = eligible(candidates, &previous);
        assert_eq!(pool, vec![question(2, 1)]);
    }

    #[test]
    fn selection_draws_from_unseen_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates: Vec<_> = (1..=20).map(|id| question(id, 1)).collect();
        let previous: HashSet<i32> = (1..=15).collect();

        for _ in 0..50 {
            let picked = select_question(candidates.clone(), &previous, &mut rng).unwrap();
            assert!(picked.id > 15);
        }
    }

    #[test]
    fn exhausted_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidates = vec![question(1, 1), question(2, 1)];
        let previous = HashSet::from([1, 2]);

        assert!(select_question(candidates, &previous, &mut rng).is_none());
        assert!(select_question(Vec::new(), &HashSet::new(), &mut rng).is_none());
    }
}
