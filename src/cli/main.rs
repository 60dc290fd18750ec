use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use config::{CliConfig, Generator};
use otter_cnf::{
    builder::Builder,
    config::Config,
    generators::{pigeonhole, random_k_cnf},
    generic::minimal_pcg::MinimalPCG32,
    types::err::ErrorKind,
};
use parse_args::parse_args;
use rand::SeedableRng;

mod config;
mod parse_args;

fn main() {
    #[cfg(feature = "logging")]
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let cli_options = match parse_args(&args) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("c {e}");
            eprintln!("c Usage: otter_cnf pigeonhole --pigeons=<n> --holes=<m> [--out=<path>] [--names]");
            eprintln!("c        otter_cnf random --atoms=<n> --clauses=<m> [--width=<k>] [--seed=<s>] [--out=<path>] [--names]");
            std::process::exit(1);
        }
    };

    let builder = match generate(&cli_options) {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("c Generation error: {e}");
            std::process::exit(1);
        }
    };

    eprintln!(
        "c Generated {} clauses over {} atoms.",
        builder.clause_count(),
        builder.numbering().count()
    );

    let written = match &cli_options.out {
        None => write_formula(&builder, std::io::stdout().lock()),
        Some(path) => write_to_path(&builder, path),
    };

    if let Err(e) = written {
        eprintln!("c Write error: {e}");
        std::process::exit(2);
    }
}

/// A builder containing the formula requested.
fn generate(cli_options: &CliConfig) -> Result<Builder, ErrorKind> {
    let mut config = Config::default();
    config.variable_names.set(cli_options.names);

    let mut builder = Builder::from_config(config);

    match cli_options.generator {
        Generator::Pigeonhole { pigeons, holes } => {
            builder.add_comment(format!("Pigeonhole: {pigeons} pigeons, {holes} holes"));
            pigeonhole(&mut builder, pigeons, holes)?;
        }

        Generator::Random {
            atoms,
            clauses,
            width,
            seed,
        } => {
            builder.add_comment(format!(
                "Random {width}-cnf: {atoms} atoms, {clauses} clauses, seed {seed}"
            ));
            let mut rng = MinimalPCG32::seed_from_u64(seed);
            random_k_cnf(&mut builder, atoms, clauses, width, &mut rng)?;
        }
    }

    Ok(builder)
}

fn write_formula(builder: &Builder, writer: impl Write) -> Result<(), ErrorKind> {
    let mut writer = BufWriter::new(writer);
    builder.write_dimacs(&mut writer)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

fn write_to_path(builder: &Builder, path: &Path) -> Result<(), ErrorKind> {
    let file = File::create(path)?;

    match path.extension() {
        #[cfg(feature = "xz")]
        Some(extension) if extension == "xz" => {
            let mut encoder = xz2::write::XzEncoder::new(file, 6);
            write_formula(builder, &mut encoder)?;
            encoder.finish()?;
            Ok(())
        }

        _ => write_formula(builder, file),
    }
}
