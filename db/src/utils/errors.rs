use backtrace::Backtrace;
use diesel::result::ConnectionError;
use diesel::result::DatabaseErrorKind;
use diesel::result::Error as DieselError;
use diesel::result::QueryResult;
use log::Level;
use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use validator::{ValidationError, ValidationErrors};
use validators::create_validation_error;

#[derive(Clone, Debug, PartialEq)]
pub enum ErrorCode {
    InvalidInput,
    MissingInput,
    NoResults,
    QueryError,
    InsertError,
    UpdateError,
    DuplicateKeyError,
    ConnectionError,
    InternalError,
    BusinessProcessError,
    ConcurrencyError,
    ValidationError {
        errors: HashMap<&'static str, Vec<ValidationError>>,
    },
    ForeignKeyError,
    ParseError,
    Unknown,
}

pub fn get_error_message(code: &ErrorCode) -> (i32, String) {
    use self::ErrorCode::*;
    // In general, these codes try to match the HTTP status code families
    match code {
        // Input errors - 1000 range
        InvalidInput => (1000, "Invalid input".to_string()),
        MissingInput => (1100, "Missing input".to_string()),
        // No results - 2000 range. Query succeeded but the row was not there
        NoResults => (2000, "No results".to_string()),
        // Query errors - 3000 range. Something went wrong during the query
        QueryError => (3000, "Query Error".to_string()),
        InsertError => (3100, "Could not insert record".to_string()),
        UpdateError => (3200, "Could not update record".to_string()),
        DuplicateKeyError => (3400, "Duplicate key error".to_string()),
        ConnectionError => (4000, "Connection error".to_string()),
        // Internal server error - 5000, similar to the HTTP 500 errors
        InternalError => (5000, "Internal error".to_string()),
        // Logical/business errors - 7000 range
        BusinessProcessError => (7000, "Business Process error".to_string()),
        ConcurrencyError => (7100, "Concurrency error".to_string()),
        ValidationError { errors: _ } => (7200, "Validation failed:".to_string()),
        ForeignKeyError => (
            7300,
            "Could not alter record because another entity references it".to_string(),
        ),
        ParseError => (7400, "Parse failed:".to_string()),
        // Try not to use this error
        Unknown => (10, "Unknown database error".to_string()),
    }
}

#[derive(Debug, PartialEq)]
pub struct EnumParseError {
    pub message: String,
    pub value: String,
    pub enum_type: String,
}

impl fmt::Display for EnumParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}\nType: {}\nValue: {}", self.message, self.enum_type, self.value)?;

        Ok(())
    }
}

impl Error for EnumParseError {
    fn description(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, PartialEq)]
pub struct DatabaseError {
    pub code: i32,
    pub message: String,
    pub cause: Option<String>,
    pub error_code: ErrorCode,
}

impl fmt::Display for DatabaseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ref cause) = self.cause {
            write!(f, "\nCaused by: {}", cause)?;
        }
        Ok(())
    }
}

impl Error for DatabaseError {
    fn description(&self) -> &str {
        &self.message
    }
}

impl Serialize for DatabaseError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("DatabaseError", 3)?;
        state.serialize_field("code", &self.code)?;
        state.serialize_field("message", &self.message)?;
        state.serialize_field("cause", &self.cause)?;
        state.end()
    }
}

impl DatabaseError {
    pub fn new(error_code: ErrorCode, cause: Option<String>) -> DatabaseError {
        let (code, message) = get_error_message(&error_code);

        DatabaseError {
            code,
            message,
            cause,
            error_code,
        }
    }

    /// Wraps the error from a diesel Result into a DatabaseError
    pub fn wrap<T>(error_code: ErrorCode, message: &str, res: Result<T, DieselError>) -> Result<T, DatabaseError> {
        match res {
            Ok(val) => Ok(val),
            Err(e) => match e {
                DieselError::NotFound => Err(DatabaseError::new(
                    ErrorCode::NoResults,
                    Some(format!("{}, {}", message, e.to_string())),
                )),
                DieselError::DatabaseError(kind, _) => {
                    let current_backtrace = Backtrace::new();

                    jlog!(
                        Level::Debug,
                        &format!("PG error {}", message),
                        {
                            "error": e.to_string(),
                            "backtrace": format!("{:?}", current_backtrace)
                    });

                    match kind {
                        DatabaseErrorKind::UniqueViolation => Err(DatabaseError::new(
                            ErrorCode::DuplicateKeyError,
                            Some(format!("{}, {}", message, e.to_string())),
                        )),
                        DatabaseErrorKind::ForeignKeyViolation => Err(DatabaseError::new(
                            ErrorCode::ForeignKeyError,
                            Some(format!("{} {}", message, e.to_string())),
                        )),
                        _ => Err(DatabaseError::new(
                            error_code,
                            Some(format!("{}, {}", message, e.to_string())),
                        )),
                    }
                }
                _ => {
                    let current_backtrace = Backtrace::new();
                    jlog!(
                        Level::Debug,
                        &format!("PG error {}", message),
                        {
                            "error": e.to_string(),
                            "backtrace": format!("{:?}", current_backtrace)
                    });

                    Err(DatabaseError::new(
                        error_code,
                        Some(format!("{}, {}", message, e.to_string())),
                    ))
                }
            },
        }
    }

    pub fn business_process_error<T>(message: &str) -> Result<T, DatabaseError> {
        Err(DatabaseError::new(
            ErrorCode::BusinessProcessError,
            Some(message.to_string()),
        ))
    }

    pub fn validation_error<T>(field: &'static str, message: &'static str) -> Result<T, DatabaseError> {
        let mut v = ValidationErrors::new();
        v.add(field, create_validation_error(message, message));
        Err(DatabaseError::new(
            ErrorCode::ValidationError {
                errors: field_errors(&v),
            },
            None,
        ))
    }

    pub fn concurrency_error<T>(message: &str) -> Result<T, DatabaseError> {
        Err(DatabaseError::new(ErrorCode::ConcurrencyError, Some(message.to_string())))
    }

    pub fn no_results<T>(message: &str) -> Result<T, DatabaseError> {
        Err(DatabaseError::new(ErrorCode::NoResults, Some(message.to_string())))
    }
}

impl From<ConnectionError> for DatabaseError {
    fn from(e: ConnectionError) -> Self {
        DatabaseError::new(ErrorCode::ConnectionError, Some(e.to_string()))
    }
}

impl From<EnumParseError> for DatabaseError {
    fn from(e: EnumParseError) -> Self {
        DatabaseError::new(ErrorCode::ParseError, Some(e.to_string()))
    }
}

impl From<ValidationErrors> for DatabaseError {
    fn from(e: ValidationErrors) -> Self {
        let message = e.to_string();
        DatabaseError::new(
            ErrorCode::ValidationError {
                errors: field_errors(&e),
            },
            Some(message),
        )
    }
}

fn field_errors(errors: &ValidationErrors) -> HashMap<&'static str, Vec<ValidationError>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| (field, errors.clone()))
        .collect()
}

pub trait ConvertToDatabaseError<U> {
    fn to_db_error(self, code: ErrorCode, message: &'static str) -> Result<U, DatabaseError>;
}

impl<U> ConvertToDatabaseError<U> for QueryResult<U> {
    fn to_db_error(self, code: ErrorCode, message: &'static str) -> Result<U, DatabaseError> {
        DatabaseError::wrap(code, message, self)
    }
}

pub trait Optional<U> {
    fn optional(self) -> Result<Option<U>, DatabaseError>;
}

impl<U> Optional<U> for Result<U, DatabaseError> {
    fn optional(self) -> Result<Option<U>, DatabaseError> {
        match self {
            Ok(u) => Ok(Some(u)),
            Err(e) => match e.error_code {
                ErrorCode::NoResults => Ok(None),
                _ => Err(e),
            },
        }
    }
}
