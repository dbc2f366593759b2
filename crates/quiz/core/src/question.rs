//! Quiz document model and structural validation.

use serde::{Deserialize, Serialize};

/// A single multiple-choice question.
///
/// `answer` indexes into `alternatives`. The index is checked when the
/// enclosing [`QuizDb`] is validated, so session code can rely on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub title: String,
    pub description: String,
    /// Illustration URL shown with the question.
    pub image: String,
    pub alternatives: Vec<String>,
    /// Index of the correct entry in `alternatives`.
    pub answer: usize,
}

impl Question {
    /// Whether the given alternative index is the correct answer.
    pub fn is_correct(&self, alternative: usize) -> bool {
        alternative == self.answer
    }

    fn validate(&self, index: usize) -> Result<(), DbError> {
        if self.alternatives.len() < 2 {
            return Err(DbError::TooFewAlternatives {
                index,
                len: self.alternatives.len(),
            });
        }
        if self.answer >= self.alternatives.len() {
            return Err(DbError::AnswerOutOfRange {
                index,
                answer: self.answer,
                len: self.alternatives.len(),
            });
        }
        Ok(())
    }
}

/// Color palette carried by a quiz document.
///
/// Field names follow the wire format shared with peer quizzes, hence the
/// camelCase renames.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeColors {
    pub primary: String,
    pub secondary: String,
    pub main_bg: String,
    pub contrast_text: String,
    pub wrong: String,
    pub success: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub colors: ThemeColors,
}

/// A complete quiz document: metadata, theme, and the question list.
///
/// Peer documents are only required to carry `bg`, `theme`, and `questions`;
/// the remaining fields default to empty when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDb {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Background image URL.
    pub bg: String,
    pub theme: Theme,
    pub questions: Vec<Question>,
    /// URLs of community quizzes reachable from the landing screen.
    #[serde(default)]
    pub external: Vec<String>,
}

impl QuizDb {
    /// Checks the invariants every loaded document must satisfy before a
    /// session may be built from it.
    pub fn validate(&self) -> Result<(), DbError> {
        if self.questions.is_empty() {
            return Err(DbError::NoQuestions);
        }
        for (index, question) in self.questions.iter().enumerate() {
            question.validate(index)?;
        }
        Ok(())
    }
}

/// Errors produced while validating a quiz document.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DbError {
    #[error("quiz document contains no questions")]
    NoQuestions,

    #[error("question {index} has {len} alternatives, at least 2 required")]
    TooFewAlternatives { index: usize, len: usize },

    #[error("question {index}: answer {answer} is out of range ({len} alternatives)")]
    AnswerOutOfRange {
        index: usize,
        answer: usize,
        len: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            title: "Sample".into(),
            description: "".into(),
            image: "https://example.com/q.png".into(),
            alternatives: vec!["a".into(), "b".into(), "c".into()],
            answer: 1,
        }
    }

    fn sample_db() -> QuizDb {
        QuizDb {
            title: "Quiz".into(),
            description: "".into(),
            bg: "https://example.com/bg.jpg".into(),
            theme: Theme {
                colors: ThemeColors {
                    primary: "#32A041".into(),
                    secondary: "#1A5276".into(),
                    main_bg: "#0B0C10".into(),
                    contrast_text: "#FFFFFF".into(),
                    wrong: "#FF5722".into(),
                    success: "#4CAF50".into(),
                },
            },
            questions: vec![sample_question()],
            external: vec![],
        }
    }

    #[test]
    fn valid_db_passes() {
        assert_eq!(sample_db().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_question_list() {
        let mut db = sample_db();
        db.questions.clear();
        assert_eq!(db.validate(), Err(DbError::NoQuestions));
    }

    #[test]
    fn rejects_answer_out_of_range() {
        let mut db = sample_db();
        db.questions[0].answer = 3;
        assert_eq!(
            db.validate(),
            Err(DbError::AnswerOutOfRange {
                index: 0,
                answer: 3,
                len: 3,
            })
        );
    }

    #[test]
    fn rejects_single_alternative() {
        let mut db = sample_db();
        db.questions[0].alternatives.truncate(1);
        db.questions[0].answer = 0;
        assert_eq!(
            db.validate(),
            Err(DbError::TooFewAlternatives { index: 0, len: 1 })
        );
    }

    #[test]
    fn theme_colors_use_wire_names() {
        let json = r##"{
            "primary": "#111111",
            "secondary": "#222222",
            "mainBg": "#333333",
            "contrastText": "#444444",
            "wrong": "#555555",
            "success": "#666666"
        }"##;
        let colors: ThemeColors = serde_json::from_str(json).unwrap();
        assert_eq!(colors.main_bg, "#333333");
        assert_eq!(colors.contrast_text, "#444444");
    }

    #[test]
    fn peer_document_defaults_optional_fields() {
        let json = r##"{
            "bg": "https://example.com/bg.jpg",
            "theme": { "colors": {
                "primary": "#111111",
                "secondary": "#222222",
                "mainBg": "#333333",
                "contrastText": "#444444",
                "wrong": "#555555",
                "success": "#666666"
            }},
            "questions": [{
                "title": "Q",
                "description": "",
                "image": "https://example.com/q.png",
                "alternatives": ["a", "b"],
                "answer": 0
            }]
        }"##;
        let db: QuizDb = serde_json::from_str(json).unwrap();
        assert!(db.title.is_empty());
        assert!(db.external.is_empty());
        assert_eq!(db.validate(), Ok(()));
    }
}
