//! Domain models and request schemas
//!
//! Request bodies deserialize into typed schemas; anything the handlers
//! must reject is turned into a ValidationError before the store is touched.

pub mod validation;
pub mod category;
pub mod question;
pub mod quiz;
pub mod pagination;

pub use validation::{integer_from_json, ValidationError};
pub use category::{category_map, Category};
pub use question::{CreateQuestionRequest, NewQuestion, Question, SearchRequest, SearchTerm};
pub use quiz::{select_question, QuizQuery, QuizRequest, QuizScope, ANY_CATEGORY};
pub use pagination::{PageParams, Pagination, QUESTIONS_PER_PAGE};
