use std::io::Write;

use crate::config::UpdateTarget;
use crate::error::ToolError;

pub const HASH_LABEL: &str = "BCrypt hash for Spring Security:";
pub const SQL_LABEL: &str = "SQL Update command:";

/// Builds the `UPDATE <table> SET password_hash = '<hash>' WHERE username IN (...)`
/// statement. The table name is validated at config load; string literals
/// are quoted here.
pub fn update_statement(hash: &str, target: &UpdateTarget) -> String {
    let usernames = target
        .usernames
        .iter()
        .map(|u| sql_literal(u))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "UPDATE {} SET password_hash = {} WHERE username IN ({usernames});",
        target.table,
        sql_literal(hash)
    )
}

pub fn write_report<W: Write>(
    mut out: W,
    hash: &str,
    target: &UpdateTarget,
) -> Result<(), ToolError> {
    let statement = update_statement(hash, target);
    write!(out, "\n{HASH_LABEL}\n{hash}\n\n{SQL_LABEL}\n{statement}\n")
        .and_then(|()| out.flush())
        .map_err(ToolError::Output)
}

fn sql_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
