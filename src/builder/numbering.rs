//! The numbering of atoms in a written formula.
//!
//! A numbering is made by a single scan over clauses.
//! Each atom is numbered the first time it is seen, with numbers given in sequence from 1.
//! Atoms which are never seen are not numbered.
//!
//! ```rust
//! # use otter_cnf::builder::Builder;
//! # use otter_cnf::constraints;
//! let mut builder = Builder::default();
//! let [p, q, r] = *builder.fresh_or_max_variables(["p", "q", "r"]).as_slice() else {
//!     panic!("Insufficient variables");
//! };
//!
//! assert!(builder.add_clause_set(&constraints::or(&[r, -p])).is_ok());
//!
//! let numbering = builder.numbering();
//! assert_eq!(numbering.count(), 2);
//! assert_eq!(numbering.number_of(r.atom()), Some(1));
//! assert_eq!(numbering.number_of(p.atom()), Some(2));
//! assert_eq!(numbering.number_of(q.atom()), None);
//! assert_eq!(numbering.literal_of(-p), Some(-2));
//! ```
//!
//! If the numbering is made with sentinels, the sentinels are numbered before the scan.
//! So, the [true sentinel](Variable::TOP) is always `1` and the [false sentinel](Variable::BOTTOM) is always `2`, wherever a sentinel first appears.
//!
//! The presence of a number is always checked directly, and so no number is (or could be) read as 'unnumbered'.

use crate::structures::{
    atom::{Atom, BOTTOM_ATOM, TOP_ATOM},
    clause::CClause,
    variable::Variable,
};

/// A map from atoms to the numbers used to write those atoms.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Numbering {
    /// The number of each atom, indexed by atom.
    numbers: Vec<Option<u32>>,

    /// Numbered atoms, in order of numbering.
    order: Vec<Atom>,

    /// Whether the sentinels were numbered before the scan.
    sentinels: bool,
}

impl Numbering {
    /// A numbering of the atoms in `clauses`, in order of first appearance.
    ///
    /// `atom_bound` is a hint, some bound on the atoms of the clauses.
    ///
    /// If `sentinels` is set, the true and false sentinels are numbered 1 and 2 before any clause is scanned.
    pub fn from_clauses<'c>(
        clauses: impl IntoIterator<Item = &'c CClause>,
        atom_bound: usize,
        sentinels: bool,
    ) -> Self {
        let mut numbering = Numbering {
            numbers: vec![None; atom_bound],
            order: Vec::default(),
            sentinels,
        };

        if sentinels {
            numbering.note(TOP_ATOM);
            numbering.note(BOTTOM_ATOM);
        }

        for clause in clauses {
            for literal in clause {
                numbering.note(literal.atom());
            }
        }

        numbering
    }

    /// Numbers the atom, if the atom has not already been numbered.
    fn note(&mut self, atom: Atom) {
        let index = atom as usize;
        if self.numbers.len() <= index {
            self.numbers.resize(index + 1, None);
        }

        if self.numbers[index].is_none() {
            self.order.push(atom);
            self.numbers[index] = Some(self.order.len() as u32);
        }
    }

    /// The number of the atom, if numbered.
    pub fn number_of(&self, atom: Atom) -> Option<u32> {
        self.numbers.get(atom as usize).copied().flatten()
    }

    /// The written form of a variable, with the sign indicating polarity, if the atom of the variable is numbered.
    pub fn literal_of(&self, variable: Variable) -> Option<i64> {
        self.number_of(variable.atom())
            .map(|number| match variable.polarity() {
                true => number as i64,
                false => -(number as i64),
            })
    }

    /// The atom numbered `number`, if some atom is.
    pub fn atom_of(&self, number: u32) -> Option<Atom> {
        match number {
            0 => None,
            _ => self.order.get(number as usize - 1).copied(),
        }
    }

    /// Whether the sentinels are numbered, and so fixed by unit clauses when written.
    pub fn has_sentinels(&self) -> bool {
        self.sentinels
    }

    /// A count of numbered atoms.
    pub fn count(&self) -> usize {
        self.order.len()
    }

    /// Numbered atoms paired with their number, in order of numbering.
    pub fn iter(&self) -> impl Iterator<Item = (Atom, u32)> + '_ {
        self.order
            .iter()
            .enumerate()
            .map(|(index, atom)| (*atom, index as u32 + 1))
    }
}
