//! Variables are atoms paired with a (boolean) polarity.
//!
//! A variable with polarity `true` is the variable itself, and a variable with polarity `false` is its negation.
//! So, variables double as the literals of a clause.
//!
//! Negation never mints, and never mutates: the negation of a variable is a fresh value with the same atom and the opposite polarity.
//!
//! ```rust
//! # use otter_cnf::builder::Builder;
//! let mut builder = Builder::default();
//! let p = builder.fresh_or_max_variable("p");
//!
//! let not_p = p.negate();
//!
//! assert!(p.polarity());
//! assert!(!not_p.polarity());
//! assert_eq!(p.atom(), not_p.atom());
//!
//! assert_eq!(-not_p, p);
//! assert_eq!(not_p.negate().negate(), not_p);
//! ```
//!
//! The name of a variable is its external representation, and is held by the builder which minted the variable, see [name_of](crate::builder::Builder::name_of).

use crate::structures::atom::{Atom, BOTTOM_ATOM, FIRST_FRESH_ATOM, TOP_ATOM};

/// The representation of a variable as an atom paired with a boolean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    /// The atom of the variable.
    atom: Atom,

    /// The polarity of the variable, `false` when negated.
    polarity: bool,
}

impl Variable {
    /// A variable which must always be true.
    ///
    /// Whenever a sentinel appears in a formula, this is written as `1` and fixed by the unit clause `1 0`.
    pub const TOP: Variable = Variable {
        atom: TOP_ATOM,
        polarity: true,
    };

    /// A variable which must always be false.
    ///
    /// Whenever a sentinel appears in a formula, this is written as `2` and fixed by the unit clause `-2 0`.
    /// So, a unit clause over BOTTOM is unsatisfiable.
    pub const BOTTOM: Variable = Variable {
        atom: BOTTOM_ATOM,
        polarity: true,
    };

    /// A variable, specified by pairing an atom with a boolean.
    ///
    /// Variables are minted by a [builder](crate::builder::Builder).
    /// A builder rejects clauses over atoms it did not mint, so this is mostly of use when reading atoms back from a builder.
    pub fn new(atom: Atom, polarity: bool) -> Self {
        Self { atom, polarity }
    }

    /// The negation of the variable.
    pub fn negate(&self) -> Self {
        Self {
            atom: self.atom,
            polarity: !self.polarity,
        }
    }

    /// The atom of the variable.
    pub fn atom(&self) -> Atom {
        self.atom
    }

    /// The polarity of the variable.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether the variable is one of the sentinels.
    pub fn is_sentinel(&self) -> bool {
        self.atom < FIRST_FRESH_ATOM
    }
}

impl std::ops::Neg for Variable {
    type Output = Variable;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.polarity {
            true => write!(f, "{}", self.atom),
            false => write!(f, "-{}", self.atom),
        }
    }
}

#[cfg(test)]
mod variable_tests {
    use super::*;

    #[test]
    fn negation_keeps_atom() {
        let p = Variable::new(7, true);
        let not_p = -p;

        assert_eq!(not_p.atom(), 7);
        assert!(!not_p.polarity());
        assert!(p.polarity());
    }

    #[test]
    fn involution() {
        let p = Variable::new(3, false);
        assert_eq!(p.negate().negate(), p);
        assert_eq!(-(-p), p);
    }

    #[test]
    fn sentinels() {
        assert_ne!(Variable::TOP.atom(), Variable::BOTTOM.atom());
        assert_ne!(Variable::TOP.negate(), Variable::BOTTOM);
        assert!(Variable::TOP.polarity() && Variable::BOTTOM.polarity());

        assert!(Variable::TOP.is_sentinel());
        assert!(Variable::BOTTOM.negate().is_sentinel());
        assert!(!Variable::new(FIRST_FRESH_ATOM, true).is_sentinel());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", Variable::new(12, true)), "12");
        assert_eq!(format!("{}", Variable::new(12, false)), "-12");
    }
}
