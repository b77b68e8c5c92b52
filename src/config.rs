use std::path::Path;

use serde::Deserialize;

use crate::error::ToolError;

/// Where the generated `UPDATE` statement points.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateTarget {
    pub table: String,
    pub usernames: Vec<String>,
}

impl Default for UpdateTarget {
    fn default() -> Self {
        Self {
            table: "app.users".to_owned(),
            usernames: vec!["admin".to_owned(), "sysadmin".to_owned()],
        }
    }
}

impl UpdateTarget {
    fn validate(&self) -> Result<(), String> {
        if !is_qualified_identifier(&self.table) {
            return Err(format!(
                "table '{}' must be 'name' or 'schema.name' using [A-Za-z0-9_]",
                self.table
            ));
        }
        if self.usernames.is_empty() {
            return Err("usernames must not be empty".to_owned());
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<UpdateTarget, ToolError> {
    let shown = path.display();
    let content = std::fs::read_to_string(path)
        .map_err(|e| ToolError::ConfigLoad(format!("{shown}: {e}")))?;
    let target: UpdateTarget =
        toml::from_str(&content).map_err(|e| ToolError::ConfigLoad(format!("{shown}: {e}")))?;
    target
        .validate()
        .map_err(|e| ToolError::ConfigLoad(format!("{shown}: {e}")))?;

    tracing::info!(
        config = %shown,
        table = %target.table,
        users = target.usernames.len(),
        "loaded update target"
    );
    Ok(target)
}

fn is_qualified_identifier(s: &str) -> bool {
    let mut parts = s.split('.');
    let valid = |part: Option<&str>| {
        part.is_some_and(|p| {
            let mut chars = p.chars();
            chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        })
    };

    match (parts.next(), parts.next(), parts.next()) {
        (first, None, None) => valid(first),
        (first, second @ Some(_), None) => valid(first) && valid(second),
        _ => false,
    }
}
