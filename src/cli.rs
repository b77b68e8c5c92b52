use std::path::PathBuf;

use clap::Parser;

/// Hash a password with bcrypt and print a SQL statement that stores it
/// for the admin accounts.
#[derive(Debug, Parser)]
#[command(version)]
pub struct Cli {
    /// Password to hash. Prompted for on stdin when omitted.
    pub password: Option<String>,

    /// TOML file overriding the target table and usernames.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Re-verify the generated hash against the password before printing.
    /// A self-test of the bcrypt backend; it only fails if hashing is broken.
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn password_is_optional() {
        let cli = Cli::try_parse_from(["bcrypt-sql"]).unwrap();
        assert!(cli.password.is_none());
        assert!(!cli.check);
    }

    #[test]
    fn parses_password_and_flags() {
        let cli = Cli::try_parse_from(["bcrypt-sql", "--check", "--config", "t.toml", "s3cret"])
            .unwrap();
        assert_eq!(cli.password.as_deref(), Some("s3cret"));
        assert_eq!(cli.config, Some(PathBuf::from("t.toml")));
        assert!(cli.check);
    }

    #[test]
    fn config_only_from_flag() {
        let help = Cli::command().render_long_help().to_string();
        assert!(!help.contains("env:"), "{help}");

        let cli = Cli::try_parse_from(["bcrypt-sql", "x"]).unwrap();
        assert!(cli.config.is_none());
    }

    #[test]
    fn rejects_second_positional() {
        assert!(Cli::try_parse_from(["bcrypt-sql", "a", "b"]).is_err());
    }
}
