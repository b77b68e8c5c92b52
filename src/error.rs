#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to read password: {0}")]
    InputRead(#[source] std::io::Error),

    #[error("no input on stdin")]
    InputClosed,

    #[error("failed to hash password: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Only reachable through `--check` if the bcrypt backend is broken.
    #[error("generated hash did not verify against the password")]
    VerifyMismatch,

    #[error("failed to load config: {0}")]
    ConfigLoad(String),

    #[error("failed to write output: {0}")]
    Output(#[source] std::io::Error),
}
