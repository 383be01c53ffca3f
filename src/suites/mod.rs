//! The two smoke-test suites and the run configuration selecting them

pub mod database;
pub mod email;

use clap::ValueEnum;

use crate::store::Backend;

/// Value of the `--test` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Suite {
    All,
    Database,
    Email,
}

impl std::fmt::Display for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Suite::All => "all",
            Suite::Database => "database",
            Suite::Email => "email",
        };
        f.write_str(name)
    }
}

/// Which suites this run executes.
///
/// `--test` is a set-membership filter: a suite runs iff it (or `all`)
/// appears among the flag values. An empty list means everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuiteSelection {
    pub database: bool,
    pub email: bool,
}

impl SuiteSelection {
    pub fn from_flags(flags: &[Suite]) -> Self {
        if flags.is_empty() || flags.contains(&Suite::All) {
            return Self {
                database: true,
                email: true,
            };
        }
        Self {
            database: flags.contains(&Suite::Database),
            email: flags.contains(&Suite::Email),
        }
    }

    /// Names of the selected suites, for the startup banner.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.database {
            names.push("database");
        }
        if self.email {
            names.push("email");
        }
        names
    }
}

/// Everything chosen on the command line, parsed and validated once.
#[derive(Debug, Clone, Copy)]
pub struct RunConfig {
    pub suites: SuiteSelection,
    pub backend: Backend,
    /// Whether `--database` was given explicitly; the backend is echoed
    /// to the console only in that case.
    pub backend_explicit: bool,
}

impl RunConfig {
    pub fn new(test: &[Suite], database: Option<Backend>) -> Self {
        Self {
            suites: SuiteSelection::from_flags(test),
            backend: database.unwrap_or(Backend::Memory),
            backend_explicit: database.is_some(),
        }
    }
}
