use bcrypt::Version;

use crate::error::ToolError;

/// bcrypt work factor (log2 rounds) for every hash this tool emits.
pub const COST: u32 = 10;

/// Modular-crypt prefix Spring Security's `BCryptPasswordEncoder` recognises.
pub const VERSION: Version = Version::TwoA;

/// Hashes `password` under a freshly generated salt and returns the
/// `$2a$10$...` string.
pub fn hash_password(password: &str) -> Result<String, ToolError> {
    tracing::debug!(cost = COST, "hashing password");
    let parts = bcrypt::hash_with_result(password.as_bytes(), COST)?;
    Ok(parts.format_for_version(VERSION))
}

pub fn verify_password(password: &str, hash: &str) -> Result<bool, ToolError> {
    Ok(bcrypt::verify(password.as_bytes(), hash)?)
}
