use thiserror::Error;

/// Internal issues with the codebase indicating unexpected behavior & possible bugs
#[derive(Error, Debug)]
pub enum InternalError {
    /// A stored enum column holds a value the application does not know.
    ///
    /// Results in a 500 Internal Server Error with a generic message returned
    /// to client.
    #[error("Unknown value '{value}' stored in column {column}")]
    UnknownStoredValue {
        /// Column the value was read from
        column: &'static str,
        /// The unrecognised value
        value: String,
    },

    /// Argon2 failed to hash a password or to parse a stored hash.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// Signing a new access token failed.
    #[error("Failed to sign access token: {0}")]
    TokenSigning(String),

    /// A row inserted within the current request could not be read back.
    #[error("{entity} {id} missing after write")]
    MissingAfterWrite {
        /// Entity name
        entity: &'static str,
        /// Primary key of the row
        id: i32,
    },
}
