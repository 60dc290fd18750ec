//! Clause sets, aka. an ordered collection of clauses, interpreted as the conjunction of those clauses.
//!
//! A clause set is a value.
//! It is what the [constraints](crate::constraints) return, and it holds no reference to any builder.
//! Alongside the clauses a clause set keeps the (distinct) atoms which appear in some clause, so a builder may note which atoms are used without a second pass.
//!
//! ```rust
//! # use otter_cnf::structures::clause_set::ClauseSet;
//! # use otter_cnf::structures::variable::Variable;
//! let p = Variable::new(1, true);
//! let q = Variable::new(2, true);
//!
//! let set = ClauseSet::from_iter([vec![p, -q], vec![-p]]);
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.atoms().collect::<Vec<_>>(), vec![1, 2]);
//! ```

use std::collections::BTreeSet;

use crate::structures::{
    atom::Atom,
    clause::{CClause, Clause},
};

/// An ordered collection of clauses, and the atoms used by those clauses.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClauseSet {
    clauses: Vec<CClause>,
    atoms: BTreeSet<Atom>,
}

impl ClauseSet {
    /// The clauses of the set, in order.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The distinct atoms of the set, in ascending order.
    pub fn atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.atoms.iter().copied()
    }

    /// Whether the atom appears in some clause of the set.
    pub fn contains_atom(&self, atom: Atom) -> bool {
        self.atoms.contains(&atom)
    }

    /// A count of clauses in the set.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Whether the set has no clauses.
    ///
    /// Note, a set containing the empty clause is not empty.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Appends a clause to the end of the set.
    pub fn push(&mut self, clause: impl Clause) {
        let clause = clause.canonical();
        self.atoms.extend(clause.atoms());
        self.clauses.push(clause);
    }

    /// Appends the clauses of `other` to the end of the set, in order.
    pub fn extend(&mut self, other: ClauseSet) {
        self.atoms.extend(other.atoms);
        self.clauses.extend(other.clauses);
    }

    /// The set made of the clauses of `self` followed by the clauses of `other`.
    pub fn concat(mut self, other: ClauseSet) -> ClauseSet {
        self.extend(other);
        self
    }

    /// Consumes the set, returning the clauses.
    pub fn into_clauses(self) -> Vec<CClause> {
        self.clauses
    }
}

impl From<CClause> for ClauseSet {
    fn from(clause: CClause) -> Self {
        let mut set = ClauseSet::default();
        set.push(clause);
        set
    }
}

impl<C: Clause> FromIterator<C> for ClauseSet {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut set = ClauseSet::default();
        for clause in iter {
            set.push(clause);
        }
        set
    }
}

impl std::fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, clause) in self.clauses.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", clause.as_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod clause_set_tests {
    use super::*;
    use crate::structures::variable::Variable;

    #[test]
    fn atoms_are_distinct() {
        let p = Variable::new(5, true);
        let set = ClauseSet::from_iter([vec![p, -p], vec![p]]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.atoms().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn concat_keeps_order() {
        let p = Variable::new(1, true);
        let q = Variable::new(2, true);

        let set = ClauseSet::from(vec![q]).concat(ClauseSet::from(vec![p]));

        assert_eq!(set.clauses(), &[vec![q], vec![p]]);
        assert!(set.contains_atom(1) && set.contains_atom(2));
    }

    #[test]
    fn empty_clause_is_a_clause() {
        let set = ClauseSet::from(CClause::new());

        assert!(!set.is_empty());
        assert_eq!(set.atoms().count(), 0);
    }
}
