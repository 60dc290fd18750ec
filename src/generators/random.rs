//! Uniform random formulas with a fixed clause width.
//!
//! Each clause is made of `width` distinct atoms, chosen uniformly from those minted for the formula, and each atom is negated with probability ½.
//!
//! Any source of randomness may be used, though to make a formula reproducible from a seed use [MinimalPCG32](crate::generic::minimal_pcg::MinimalPCG32).
//!
//! ```rust
//! # use otter_cnf::builder::Builder;
//! # use otter_cnf::generators::random_k_cnf;
//! # use otter_cnf::generic::minimal_pcg::MinimalPCG32;
//! # use rand::SeedableRng;
//! let build = |seed: u64| {
//!     let mut builder = Builder::default();
//!     let mut rng = MinimalPCG32::seed_from_u64(seed);
//!     assert!(random_k_cnf(&mut builder, 20, 85, 3, &mut rng).is_ok());
//!     builder.build()
//! };
//!
//! assert_eq!(build(7), build(7));
//! ```
//!
//! As atoms are numbered only when used, an atom which is never chosen is not written.

use rand::{seq::index, Rng};

use crate::{
    builder::Builder,
    misc::log::targets::{self},
    structures::{clause::CClause, variable::Variable},
    types::err::{self},
};

/// Adds `clauses` clauses of width `width` over `atoms` fresh atoms to the builder.
///
/// The fresh variables are named `x1`, `x2`, … and are returned in order.
pub fn random_k_cnf(
    builder: &mut Builder,
    atoms: usize,
    clauses: usize,
    width: usize,
    rng: &mut impl Rng,
) -> Result<Vec<Variable>, err::ErrorKind> {
    if width == 0 || width > atoms {
        return Err(err::ErrorKind::from(err::GeneratorError::Width));
    }

    let mut variables = Vec::with_capacity(atoms);
    for index in 1..=atoms {
        variables.push(builder.fresh_variable(format!("x{index}"))?);
    }

    for _ in 0..clauses {
        let clause = index::sample(rng, atoms, width)
            .into_iter()
            .map(|choice| match rng.gen_bool(0.5) {
                true => variables[choice],
                false => -variables[choice],
            })
            .collect::<CClause>();

        builder.add_clause(clause)?;
    }

    log::info!(target: targets::GENERATOR, "Random {width}-cnf with {atoms} atoms and {clauses} clauses");

    Ok(variables)
}
