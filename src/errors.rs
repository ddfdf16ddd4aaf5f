//! Unified error handling.
//!
//! A macro generates the error enum together with error codes and type names.

use std::fmt;

/// Defines the crate error type.
///
/// Generates:
/// - the enum definition
/// - code() - stable error code
/// - error_type() - human readable type name
/// - message() - error detail
/// - snake_case convenience constructors
macro_rules! define_competences_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CompetencesError {
            $($variant(String),)*
        }

        impl CompetencesError {
            pub fn code(&self) -> &'static str {
                match self {
                    $(CompetencesError::$variant(_) => $code,)*
                }
            }

            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CompetencesError::$variant(_) => $type_name,)*
                }
            }

            pub fn message(&self) -> &str {
                match self {
                    $(CompetencesError::$variant(msg) => msg,)*
                }
            }
        }

        paste::paste! {
            impl CompetencesError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CompetencesError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_competences_errors! {
    DatabaseConfig("E001", "Database Configuration Error"),
    DatabaseConnection("E002", "Database Connection Error"),
    DatabaseOperation("E003", "Database Operation Error"),
    Validation("E004", "Validation Error"),
    NotFound("E005", "Resource Not Found"),
    Conflict("E006", "Conflict Error"),
    FileOperation("E007", "File Operation Error"),
    Serialization("E008", "Serialization Error"),
    DateParse("E009", "Date Parse Error"),
    ImportParse("E010", "Import Parse Error"),
}

impl CompetencesError {
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CompetencesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CompetencesError {}

impl From<sea_orm::DbErr> for CompetencesError {
    fn from(err: sea_orm::DbErr) -> Self {
        CompetencesError::DatabaseOperation(err.to_string())
    }
}

impl From<std::io::Error> for CompetencesError {
    fn from(err: std::io::Error) -> Self {
        CompetencesError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CompetencesError {
    fn from(err: serde_json::Error) -> Self {
        CompetencesError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CompetencesError {
    fn from(err: chrono::ParseError) -> Self {
        CompetencesError::DateParse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CompetencesError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CompetencesError::database_config("test").code(), "E001");
        assert_eq!(CompetencesError::validation("test").code(), "E004");
        assert_eq!(CompetencesError::not_found("test").code(), "E005");
        assert_eq!(CompetencesError::conflict("test").code(), "E006");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CompetencesError::database_operation("test").error_type(),
            "Database Operation Error"
        );
        assert_eq!(
            CompetencesError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = CompetencesError::validation("Nom et prénom sont obligatoires");
        assert_eq!(err.message(), "Nom et prénom sont obligatoires");
    }

    #[test]
    fn test_format_simple() {
        let err = CompetencesError::not_found("Utilisateur 42 non trouvé");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("Utilisateur 42"));
    }
}
