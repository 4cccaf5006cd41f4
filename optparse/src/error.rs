/// Conditions reported while scanning an argument vector.
///
/// `UnknownOption` and `MissingValue` go through the parser's error hook and
/// abort `parse` by default. `SurplusValue` goes through the warning hook and
/// only prints by default.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("no such option, {0}")]
    UnknownOption(String),

    #[error("nothing {argument} for {token}")]
    MissingValue { argument: String, token: String },

    #[error("surplus argument for {0}")]
    SurplusValue(String),
}

impl Error {
    /// The command-line token the condition was raised for.
    pub fn token(&self) -> &str {
        match self {
            Error::UnknownOption(token) => token,
            Error::MissingValue { token, .. } => token,
            Error::SurplusValue(token) => token,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
