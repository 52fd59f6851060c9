use thiserror::Error;

#[derive(Debug, Error)]
pub enum SelectError {
    #[error("Could not parse quantity '{0}': no numeric token")]
    ParseError(String),

    #[error("No available product matches ingredient: {0}")]
    NoCandidate(String),

    #[error(
        "No pack combination within 85%-115% of {required_quantity} for '{ingredient}' \
         using at most 2 pack sizes"
    )]
    NoFeasibleCombination {
        ingredient: String,
        required_quantity: String,
    },

    #[error("Ambiguous selection for '{0}': tiebreak rules did not produce a total order")]
    AmbiguousSelection(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SelectError>;
