use crate::{
    builder::Builder,
    constraints,
    misc::log::targets::{self},
    structures::variable::Variable,
    types::err::{self},
};

/// Adds the pigeonhole principle for `pigeons` pigeons and `holes` holes to the builder.
///
/// The variable `p{i}h{j}` is read as 'pigeon *i* is in hole *j*'.
/// Each pigeon is in at least one hole, and each hole holds at most one pigeon.
/// So, the formula is satisfiable if and only if there are at least as many holes as pigeons.
///
/// The variables are returned indexed by pigeon and then by hole.
///
/// ```rust
/// # use otter_cnf::builder::Builder;
/// # use otter_cnf::generators::pigeonhole;
/// let mut builder = Builder::default();
/// let grid = pigeonhole(&mut builder, 2, 1).expect("pigeons");
///
/// assert_eq!(builder.name_of(grid[1][0].atom()), Some("p2h1"));
/// assert_eq!(builder.build(), "p cnf 2 3\n1 0\n2 0\n-1 -2 0");
/// ```
pub fn pigeonhole(
    builder: &mut Builder,
    pigeons: usize,
    holes: usize,
) -> Result<Vec<Vec<Variable>>, err::ErrorKind> {
    if pigeons == 0 || holes == 0 {
        return Err(err::ErrorKind::from(err::GeneratorError::Zero));
    }

    let mut grid = Vec::with_capacity(pigeons);
    for pigeon in 1..=pigeons {
        let mut row = Vec::with_capacity(holes);
        for hole in 1..=holes {
            row.push(builder.fresh_variable(format!("p{pigeon}h{hole}"))?);
        }
        grid.push(row);
    }

    for row in &grid {
        builder.add_clause_set(&constraints::at_least_one(row))?;
    }

    for hole in 0..holes {
        let column = grid.iter().map(|row| row[hole]).collect::<Vec<_>>();
        builder.add_clause_set(&constraints::at_most_one(&column))?;
    }

    log::info!(target: targets::GENERATOR, "Pigeonhole with {pigeons} pigeons and {holes} holes");

    Ok(grid)
}
