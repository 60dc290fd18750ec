use std::path::PathBuf;

use crate::config::{CliConfig, ConfigError, Generator};

/// The default seed of the random generator.
const DEFAULT_SEED: u64 = 0;

/// The default clause width of the random generator.
const DEFAULT_WIDTH: usize = 3;

/// Parses `request` as the value of `option`.
fn parse_value<T: std::str::FromStr>(
    option: &'static str,
    request: Option<&str>,
) -> Result<T, ConfigError> {
    match request.map(|value| value.parse::<T>()) {
        Some(Ok(value)) => Ok(value),
        _ => Err(ConfigError::InvalidValue(option)),
    }
}

/// Parse CLI arguments to a [CliConfig] struct.
///
/// The first argument after the program is the generator, and all others are options of the form `--option=value` or `--flag`.
pub(super) fn parse_args(args: &[String]) -> Result<CliConfig, ConfigError> {
    let generator_name = match args.get(1) {
        Some(name) => name.as_str(),
        None => return Err(ConfigError::MissingGenerator),
    };

    let mut out = None;
    let mut names = false;

    let mut pigeons = None;
    let mut holes = None;
    let mut atoms = None;
    let mut clauses = None;
    let mut width = DEFAULT_WIDTH;
    let mut seed = DEFAULT_SEED;

    for arg in args.iter().skip(2) {
        let mut split = arg.splitn(2, '=');
        let option = split.next();
        let request = split.next();

        // Options shared by all generators, followed by options of a specific generator, each in lexicographic order.
        match (generator_name, option) {
            (_, Some("--names")) => names = true,

            (_, Some("--out")) => match request {
                Some(path) if !path.is_empty() => out = Some(PathBuf::from(path)),
                _ => return Err(ConfigError::InvalidValue("--out")),
            },

            ("pigeonhole", Some("--holes")) => holes = Some(parse_value("--holes", request)?),

            ("pigeonhole", Some("--pigeons")) => {
                pigeons = Some(parse_value("--pigeons", request)?)
            }

            ("random", Some("--atoms")) => atoms = Some(parse_value("--atoms", request)?),

            ("random", Some("--clauses")) => clauses = Some(parse_value("--clauses", request)?),

            ("random", Some("--seed")) => seed = parse_value("--seed", request)?,

            ("random", Some("--width")) => width = parse_value("--width", request)?,

            _ => return Err(ConfigError::UnknownOption(arg.clone())),
        }
    }

    let generator = match generator_name {
        "pigeonhole" => Generator::Pigeonhole {
            pigeons: pigeons.ok_or(ConfigError::MissingOption("--pigeons"))?,
            holes: holes.ok_or(ConfigError::MissingOption("--holes"))?,
        },

        "random" => Generator::Random {
            atoms: atoms.ok_or(ConfigError::MissingOption("--atoms"))?,
            clauses: clauses.ok_or(ConfigError::MissingOption("--clauses"))?,
            width,
            seed,
        },

        other => return Err(ConfigError::UnknownGenerator(other.to_string())),
    };

    Ok(CliConfig {
        generator,
        out,
        names,
    })
}

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn args(items: &[&str]) -> Vec<String> {
        std::iter::once("otter_cnf")
            .chain(items.iter().copied())
            .map(|item| item.to_string())
            .collect()
    }

    #[test]
    fn pigeonhole() {
        let config = parse_args(&args(&["pigeonhole", "--pigeons=4", "--holes=3", "--names"]));

        assert_eq!(
            config,
            Ok(CliConfig {
                generator: Generator::Pigeonhole {
                    pigeons: 4,
                    holes: 3
                },
                out: None,
                names: true,
            })
        );
    }

    #[test]
    fn random_defaults() {
        let config = parse_args(&args(&["random", "--atoms=10", "--clauses=40", "--out=f.cnf"]));

        assert_eq!(
            config,
            Ok(CliConfig {
                generator: Generator::Random {
                    atoms: 10,
                    clauses: 40,
                    width: DEFAULT_WIDTH,
                    seed: DEFAULT_SEED,
                },
                out: Some(PathBuf::from("f.cnf")),
                names: false,
            })
        );
    }

    #[test]
    fn errors() {
        assert_eq!(parse_args(&args(&[])), Err(ConfigError::MissingGenerator));

        assert_eq!(
            parse_args(&args(&["sudoku"])),
            Err(ConfigError::UnknownGenerator("sudoku".to_string()))
        );

        assert_eq!(
            parse_args(&args(&["pigeonhole", "--atoms=3"])),
            Err(ConfigError::UnknownOption("--atoms=3".to_string()))
        );

        assert_eq!(
            parse_args(&args(&["pigeonhole", "--pigeons=x"])),
            Err(ConfigError::InvalidValue("--pigeons"))
        );

        assert_eq!(
            parse_args(&args(&["random", "--atoms=3"])),
            Err(ConfigError::MissingOption("--clauses"))
        );
    }
}
