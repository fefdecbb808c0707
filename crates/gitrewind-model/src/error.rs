//! Error types for model validation and processing.

use thiserror::Error;

/// Error codes for activity model and graph validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Activity model errors (E001-E007)
    /// E001: Monthly activity series does not have 12 entries
    MonthlySeriesLength,
    /// E002: Monthly entry index does not match its position
    MonthIndexMismatch,
    /// E003: Normalized activity outside [0, 1]
    NormalizedActivityOutOfRange,
    /// E004: Consistency score outside [0, 1]
    ConsistencyOutOfRange,
    /// E005: Languages not sorted descending by percentage
    LanguagesNotSorted,
    /// E006: Empty user login
    EmptyLogin,
    /// E007: Non-finite or negative numeric field
    InvalidNumber,

    // Graph errors (E020-E024)
    /// E020: Graph has no user node
    MissingUserNode,
    /// E021: Graph has more than one user node
    MultipleUserNodes,
    /// E022: Edge references a node id that does not exist
    DanglingEdge,
    /// E023: Edge weight is negative or non-finite
    InvalidEdgeWeight,
    /// E024: Two nodes share an id
    DuplicateNodeId,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::MonthlySeriesLength => "E001",
            ErrorCode::MonthIndexMismatch => "E002",
            ErrorCode::NormalizedActivityOutOfRange => "E003",
            ErrorCode::ConsistencyOutOfRange => "E004",
            ErrorCode::LanguagesNotSorted => "E005",
            ErrorCode::EmptyLogin => "E006",
            ErrorCode::InvalidNumber => "E007",
            ErrorCode::MissingUserNode => "E020",
            ErrorCode::MultipleUserNodes => "E021",
            ErrorCode::DanglingEdge => "E022",
            ErrorCode::InvalidEdgeWeight => "E023",
            ErrorCode::DuplicateNodeId => "E024",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for activity model validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: More active days than days in a year
    ActiveDaysExceedYear,
    /// W002: More collaborators than the graph will draw
    CollaboratorsTruncated,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::ActiveDaysExceedYear => "W001",
            WarningCode::CollaboratorsTruncated => "W002",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub code: ErrorCode,
    pub message: String,
    /// JSON path to the problematic field (e.g., "monthlyActivity\[3\].month").
    pub path: Option<String>,
}

impl ValidationError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: WarningCode,
    pub message: String,
    pub path: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for model operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Validation failed with one or more errors.
    #[error("activity model validation failed with {0} error(s)")]
    ValidationFailed(usize),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError for ModelError {
    fn code(&self) -> &'static str {
        match self {
            ModelError::ValidationFailed(_) => "MODEL_001",
            ModelError::Json(_) => "MODEL_002",
            ModelError::Io(_) => "MODEL_003",
        }
    }

    fn category(&self) -> &'static str {
        "model"
    }
}

/// Result of validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if any error carries `code`.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for errors raised by Git Rewind crates.
///
/// Provides stable codes for reporting and a category for grouping, so the
/// CLI can print any crate's error uniformly.
pub trait CoreError: std::error::Error {
    /// Stable code like "MODEL_001" or "LAYOUT_002".
    fn code(&self) -> &'static str;

    /// Human-readable message; defaults to `Display`.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Category like "model" or "layout".
    fn category(&self) -> &'static str;
}
