//! Quiz database loader.

use std::path::Path;

use quiz_core::QuizDb;

use crate::loaders::{LoadResult, read_file};

/// Default quiz document compiled into the binary.
const BUNDLED_DB: &str = include_str!("../../data/db.json");

/// Loader for quiz documents stored as JSON.
pub struct DbLoader;

impl DbLoader {
    /// Load and validate a quiz document from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file containing a quiz document
    pub fn load(path: &Path) -> LoadResult<QuizDb> {
        let content = read_file(path)?;
        let db: QuizDb = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quiz db {}: {}", path.display(), e))?;
        db.validate()
            .map_err(|e| anyhow::anyhow!("Invalid quiz db {}: {}", path.display(), e))?;

        Ok(db)
    }

    /// The quiz document bundled with the client.
    pub fn bundled() -> LoadResult<QuizDb> {
        let db: QuizDb = serde_json::from_str(BUNDLED_DB)
            .map_err(|e| anyhow::anyhow!("Failed to parse bundled quiz db: {}", e))?;
        db.validate()
            .map_err(|e| anyhow::anyhow!("Bundled quiz db is invalid: {}", e))?;

        Ok(db)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn minimal_db_json(answer: usize) -> String {
        format!(
            r##"{{
                "title": "File quiz",
                "description": "loaded from disk",
                "bg": "https://example.com/bg.jpg",
                "theme": {{ "colors": {{
                    "primary": "#111111",
                    "secondary": "#222222",
                    "mainBg": "#333333",
                    "contrastText": "#444444",
                    "wrong": "#555555",
                    "success": "#666666"
                }}}},
                "questions": [{{
                    "title": "Q",
                    "description": "",
                    "image": "https://example.com/q.png",
                    "alternatives": ["a", "b"],
                    "answer": {answer}
                }}]
            }}"##
        )
    }

    #[test]
    fn bundled_db_is_valid() {
        let db = DbLoader::bundled().unwrap();
        assert!(!db.title.is_empty());
        assert!(!db.questions.is_empty());
        assert!(!db.external.is_empty());
    }

    #[test]
    fn loads_db_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(minimal_db_json(0).as_bytes()).unwrap();

        let db = DbLoader::load(file.path()).unwrap();
        assert_eq!(db.title, "File quiz");
        assert_eq!(db.questions.len(), 1);
    }

    #[test]
    fn rejects_db_with_bad_answer_index() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(minimal_db_json(9).as_bytes()).unwrap();

        let err = DbLoader::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn missing_file_fails() {
        assert!(DbLoader::load(Path::new("/nonexistent/db.json")).is_err());
    }
}
