//! Clauses, aka. a collection of variables, interpreted as the disjunction of those variables.
//!
//! The canonical representation of a clause is as a vector of variables.
//! Order is kept as given, and is written as given.
//!
//! ```rust
//! # use otter_cnf::structures::variable::Variable;
//! # use otter_cnf::structures::clause::Clause;
//! let clause = vec![Variable::new(23, true),
//!                   Variable::new(41, false),
//!                   Variable::new(3,  false)];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_string(), "23 -41 -3");
//! assert_eq!(clause.atoms().collect::<Vec<_>>(), vec![23, 41, 3]);
//! ```
//!
//! - The empty clause is always false (never true). It is still a clause, and is written as a lone `0`.
//! - Single variables are identified with the clause containing that variable (aka. a 'unit' clause).

use crate::structures::{atom::Atom, variable::Variable};

/// The clause trait.
pub trait Clause {
    /// Some string representation of the clause, using internal atoms.
    fn as_string(&self) -> String;

    /// An iterator over all variables in the clause, in order.
    fn literals(&self) -> impl Iterator<Item = Variable>;

    /// The number of variables in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause, in order and with repetition.
    fn atoms(&self) -> impl Iterator<Item = Atom>;

    /// The clause in its canonical form.
    fn canonical(self) -> CClause;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<Variable>;

impl Clause for CClause {
    fn as_string(&self) -> String {
        self.literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn literals(&self) -> impl Iterator<Item = Variable> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self
    }
}

impl<const N: usize> Clause for [Variable; N] {
    fn as_string(&self) -> String {
        self.literals()
            .map(|literal| literal.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn literals(&self) -> impl Iterator<Item = Variable> {
        self.iter().copied()
    }

    fn size(&self) -> usize {
        N
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }

    fn canonical(self) -> CClause {
        self.to_vec()
    }
}

impl Clause for Variable {
    fn as_string(&self) -> String {
        self.to_string()
    }

    fn literals(&self) -> impl Iterator<Item = Variable> {
        std::iter::once(*self)
    }

    fn size(&self) -> usize {
        1
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        std::iter::once(self.atom())
    }

    fn canonical(self) -> CClause {
        vec![self]
    }
}
