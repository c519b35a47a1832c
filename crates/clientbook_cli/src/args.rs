//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use clientbook_core::ClientId;
use std::path::PathBuf;

const DEFAULT_DB_FILE_NAME: &str = "clientbook.sqlite3";
const DEFAULT_STDERR_LEVEL: &str = "warn";

/// Clientbook - local client contact manager
#[derive(Parser, Debug)]
#[command(name = "clientbook", version, about = "Local client contact manager", long_about = None)]
pub struct Cli {
    /// Client store path (defaults to the OS temp dir)
    #[arg(long, env = "CLIENTBOOK_DB_PATH")]
    pub db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long)]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files; logs go to stderr otherwise
    #[arg(long)]
    pub log_dir: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn db_path(&self) -> PathBuf {
        self.db
            .clone()
            .filter(|path| !path.as_os_str().is_empty())
            .unwrap_or_else(|| std::env::temp_dir().join(DEFAULT_DB_FILE_NAME))
    }

    /// Effective log level; stderr logging stays quiet unless asked.
    pub fn effective_log_level(&self) -> &str {
        match (&self.log_level, &self.log_dir) {
            (Some(level), _) => level.as_str(),
            (None, Some(_)) => clientbook_core::default_log_level(),
            (None, None) => DEFAULT_STDERR_LEVEL,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the client listing
    List {
        /// Print records as a JSON array
        #[arg(long)]
        json: bool,
    },
    /// Submit the create form
    Add(FieldArgs),
    /// Load a client by query string, overlay the given fields, and submit
    Edit {
        /// Edit page query, e.g. `id=3`
        #[arg(long)]
        query: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Load a client into the edit form and print it
    Show {
        /// Edit page query, e.g. `id=3`
        #[arg(long)]
        query: String,
    },
    /// Delete a client, then re-render the listing
    Delete { id: ClientId },
    /// Validate one field value as on loss of focus
    Check { field: String, value: String },
}

/// Form inputs, named as stored.
#[derive(Args, Debug, Default, Clone)]
pub struct FieldArgs {
    #[arg(long)]
    pub nombre: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub telefono: Option<String>,
    #[arg(long)]
    pub empresa: Option<String>,
}

impl FieldArgs {
    /// Provided inputs as `(input name, value)` pairs.
    pub fn inputs(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("nombre", &self.nombre),
            ("email", &self.email),
            ("telefono", &self.telefono),
            ("empresa", &self.empresa),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_deref().map(|value| (name, value)))
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn add_collects_only_provided_inputs() {
        let cli = Cli::try_parse_from([
            "clientbook",
            "--db",
            "/tmp/x.sqlite3",
            "add",
            "--nombre",
            "Juan Perez",
            "--telefono",
            "612345678",
        ])
        .unwrap();

        let Command::Add(fields) = cli.command else {
            panic!("expected add command");
        };
        let inputs = fields.inputs().collect::<Vec<_>>();
        assert_eq!(
            inputs,
            vec![("nombre", "Juan Perez"), ("telefono", "612345678")]
        );
    }

    #[test]
    fn stderr_logging_defaults_to_warn() {
        let cli = Cli::try_parse_from(["clientbook", "list"]).unwrap();
        assert_eq!(cli.effective_log_level(), "warn");

        let cli = Cli::try_parse_from(["clientbook", "--log-level", "debug", "list"]).unwrap();
        assert_eq!(cli.effective_log_level(), "debug");
    }
}
