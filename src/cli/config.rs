use std::path::PathBuf;

/// The generators available through the CLI, with their parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Generator {
    Pigeonhole {
        pigeons: usize,
        holes: usize,
    },

    Random {
        atoms: usize,
        clauses: usize,
        width: usize,
        seed: u64,
    },
}

/// A collection of configuration options relevant only to the CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CliConfig {
    /// The formula to generate.
    pub generator: Generator,

    /// Where to write the formula, with stdout used if no path is given.
    pub out: Option<PathBuf>,

    /// Whether to write a comment naming each atom.
    pub names: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// No generator was named.
    MissingGenerator,

    /// The generator named is not known.
    UnknownGenerator(String),

    /// An argument which is not an option of the generator.
    UnknownOption(String),

    /// An option without a (valid) value.
    InvalidValue(&'static str),

    /// A required option was not given.
    MissingOption(&'static str),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self {
            ConfigError::MissingGenerator => write!(f, "A generator is required: pigeonhole or random"),
            ConfigError::UnknownGenerator(name) => write!(f, "Unknown generator: {name}"),
            ConfigError::UnknownOption(option) => write!(f, "Unknown option: {option}"),
            ConfigError::InvalidValue(option) => write!(f, "{option} requires a non-negative integer value"),
            ConfigError::MissingOption(option) => write!(f, "{option} is required"),
        }
    }
}
