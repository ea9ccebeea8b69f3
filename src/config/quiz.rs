//! Quiz configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::quiz::{QuestionBank, QuestionBankError};

/// Quiz configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QuizConfig {
    /// YAML question bank; the embedded bank is used when unset
    pub question_bank_path: Option<PathBuf>,
}

impl QuizConfig {
    /// Loads the configured question bank.
    pub fn load_bank(&self) -> Result<QuestionBank, QuestionBankError> {
        match &self.question_bank_path {
            Some(path) => QuestionBank::load(path),
            None => QuestionBank::embedded(),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.question_bank_path {
            if !path.is_file() {
                return Err(ValidationError::QuestionBankNotFound(
                    path.display().to_string(),
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_uses_embedded_bank() {
        let config = QuizConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.load_bank().unwrap().len(), 7);
    }

    #[test]
    fn test_missing_file_fails_validation() {
        let config = QuizConfig {
            question_bank_path: Some(PathBuf::from("/definitely/not/here.yaml")),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::QuestionBankNotFound(_))
        ));
    }

    #[test]
    fn test_loads_bank_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
questions:
  - id: only
    title: "Pick one"
    type: single
    options:
      - {{ id: a, archetype: bold, text: "Bold" }}
"#
        )
        .unwrap();

        let config = QuizConfig {
            question_bank_path: Some(file.path().to_path_buf()),
        };
        assert!(config.validate().is_ok());
        assert_eq!(config.load_bank().unwrap().len(), 1);
    }
}
