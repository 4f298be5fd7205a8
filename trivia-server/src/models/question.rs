//! Question records and request schemas

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use super::validation::integer_from_json;
use super::ValidationError;

/// Question record, serialized as its wire shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: i32,
    pub difficulty: i32,
}

/// Values for a question about to be inserted.
///
/// Fields stay optional: presence is enforced by the store's NOT NULL
/// constraints, not by the HTTP layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<i32>,
    pub category: Option<i32>,
}

/// POST /questions/create body.
///
/// `difficulty` and `category` arrive as numbers or numeric strings
/// (form-backed clients send strings).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub difficulty: Option<Value>,
    pub category: Option<Value>,
}

impl TryFrom<CreateQuestionRequest> for NewQuestion {
    type Error = ValidationError;

    fn try_from(req: CreateQuestionRequest) -> Result<Self, Self::Error> {
        Ok(Self {
            question: req.question,
            answer: req.answer,
            difficulty: integer_column("difficulty", req.difficulty.as_ref())?,
            category: integer_column("category", req.category.as_ref())?,
        })
    }
}

fn integer_column(
    field: &'static str,
    value: Option<&Value>,
) -> Result<Option<i32>, ValidationError> {
    match value {
        None => Ok(None),
        Some(v) => integer_from_json(v)
            .map(Some)
            .ok_or(ValidationError::InvalidFormat {
                field,
                reason: "must be an integer",
            }),
    }
}

/// POST /questions/search body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Validated, non-empty search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Create a search term, rejecting absent or blank input.
    ///
    /// Whitespace only decides blankness; the term is matched as sent.
    pub fn new(raw: Option<&str>) -> Result<Self, ValidationError> {
        let raw = raw.ok_or(ValidationError::Missing { field: "searchTerm" })?;
        if raw.trim().is_empty() {
            return Err(ValidationError::Empty { field: "searchTerm" });
        }
        Ok(Self(raw.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive substring match against question text.
    pub fn matches(&self, text: &str) -> bool {
        text.to_lowercase().contains(&self.0.to_lowercase())
    }

    /// `ILIKE` pattern with the term's wildcard characters escaped.
    pub fn like_pattern(&self) -> String {
        let mut escaped = String::with_capacity(self.0.len() + 2);
        escaped.push('%');
        for c in self.0.chars() {
            if matches!(c, '%' | '_' | '\\') {
                escaped.push('\\');
            }
            escaped.push(c);
        }
        escaped.push('%');
        escaped
    }
}

impl TryFrom<SearchRequest> for SearchTerm {
    type Error = ValidationError;

    fn try_from(req: SearchRequest) -> Result<Self, Self::Error> {
        Self::new(req.search_term.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_missing_term() {
        let err = SearchTerm::new(None).unwrap_err();
        assert!(matches!(err, ValidationError::Missing { .. }));
    }

    #[test]
    fn rejects_blank_term() {
        assert!(matches!(
            SearchTerm::new(Some("")).unwrap_err(),
            ValidationError::Empty { .. }
        ));
        assert!(matches!(
            SearchTerm::new(Some("   ")).unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn matches_case_insensitively() {
        let term = SearchTerm::new(Some("TiTle")).unwrap();
        assert!(term.matches("What is the title of the 1990 fantasy film?"));
        assert!(term.matches("TITLE"));
        assert!(!term.matches("Who invented peanut butter?"));
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_term() {
        let term = SearchTerm::new(Some(" title")).unwrap();
        assert_eq!(term.as_str(), " title");
        assert!(term.matches("What was the title of the film?"));
        assert!(!term.matches("Which subtitle format is oldest?"));
    }

    #[test]
    fn create_request_accepts_numeric_strings() {
        let req: CreateQuestionRequest = serde_json::from_str(
            r#"{"question": "Q", "answer": "A", "difficulty": "2", "category": "1"}"#,
        )
        .unwrap();
        let new = NewQuestion::try_from(req).unwrap();
        assert_eq!(new.difficulty, Some(2));
        assert_eq!(new.category, Some(1));
    }

    #[test]
    fn create_request_keeps_absent_fields_empty() {
        let req: CreateQuestionRequest =
            serde_json::from_str(r#"{"question": "Q", "difficulty": null}"#).unwrap();
        let new = NewQuestion::try_from(req).unwrap();
        assert_eq!(new.answer, None);
        assert_eq!(new.difficulty, None);
        assert_eq!(new.category, None);
    }

    #[test]
    fn create_request_rejects_non_numeric_columns() {
        let req: CreateQuestionRequest =
            serde_json::from_str(r#"{"difficulty": "hard", "category": 1}"#).unwrap();
        assert_eq!(
            NewQuestion::try_from(req).unwrap_err(),
            ValidationError::InvalidFormat {
                field: "difficulty",
                reason: "must be an integer"
            }
        );
    }

    #[test]
    fn escapes_like_wildcards() {
        let term = SearchTerm::new(Some("100%_sure")).unwrap();
        assert_eq!(term.like_pattern(), r"%100\%\_sure%");
    }

    #[test]
    fn search_request_uses_camel_case_key() {
        let req: SearchRequest = serde_json::from_str(r#"{"searchTerm": "boxer"}"#).unwrap();
        assert_eq!(SearchTerm::try_from(req).unwrap().as_str(), "boxer");
    }

    #[test]
    fn question_wire_shape() {
        let q = Question {
            id: 5,
            question: "Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?".into(),
            answer: "Maya Angelou".into(),
            category: 4,
            difficulty: 2,
        };
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(value["id"], 5);
        assert_eq!(value["answer"], "Maya Angelou");
        assert_eq!(value["category"], 4);
        assert_eq!(value["difficulty"], 2);
    }
}
