/*!
Tools for building a formula, and writing the formula in DIMACS form.

# Basic methods

A [Builder] has three basic methods:
- [fresh_variable](Builder::fresh_variable), to obtain a fresh variable.
- [add_clause_set](Builder::add_clause_set), to add the clauses of some [constraint](crate::constraints).
- [build](Builder::build), to write the formula.

In rough strokes, the pattern is to:
- Obtain a collection of variables from the builder.
- Combine the variables (or their negations) through some constraints.
- Add the resulting clause sets to the builder.
- Write the formula.

Comments may be added at any point with [add_comment](Builder::add_comment), and are written before the formula.

# Numbering

The atoms of a builder are not written as they are.
Instead, when a formula is written the clauses are scanned in order and each atom is given the next number (from 1) the first time it is seen.
So, a variable which does not appear in any clause is not written, and is not counted in the problem line.
For details, see [Numbering].

The [sentinels](crate::structures::variable::Variable::TOP) are the exception.
If either sentinel appears in some clause, the true sentinel is always written as `1` and the false sentinel as `2`, other atoms are numbered from 3, and the unit clauses `1 0` and `-2 0` are written directly after the problem line.

Building does not change the builder, and clauses may be added after a build.
A later build writes every clause added, with a numbering made afresh.

# Examples

```rust
# use otter_cnf::builder::Builder;
# use otter_cnf::constraints;
let mut builder = Builder::default();

let a = builder.fresh_or_max_variable("a");
let b = builder.fresh_or_max_variable("b");
let c = builder.fresh_or_max_variable("c");

assert!(builder.add_clause_set(&constraints::and(&[a, -b, c])).is_ok());

assert_eq!(
    builder.build(),
    "p cnf 3 3
1 0
-2 0
3 0"
);
```

Unused variables are skipped.

```rust
# use otter_cnf::builder::Builder;
# use otter_cnf::constraints;
let mut builder = Builder::default();

let [a, b, c, d, e] = *builder.fresh_or_max_variables(["a", "b", "c", "d", "e"]).as_slice() else {
    panic!("Insufficient variables");
};

assert!(builder.add_clause_set(&constraints::implies(e, c)).is_ok());
assert!(builder.add_clause_set(&constraints::or(&[c, a])).is_ok());

assert_eq!(
    builder.build(),
    "p cnf 3 2
-1 2 0
2 3 0"
);
```
*/

use std::collections::BTreeSet;

use crate::{
    config::Config,
    structures::{
        atom::{Atom, BOTTOM_ATOM, FIRST_FRESH_ATOM, TOP_ATOM},
        clause::CClause,
    },
};

mod comment;
pub use comment::Comment;

mod dimacs;

mod numbering;
pub use numbering::Numbering;

mod structures;

/// The name given to the reserved atom of the true sentinel.
pub const TOP_NAME: &str = "⊤";

/// The name given to the reserved atom of the false sentinel.
pub const BOTTOM_NAME: &str = "⊥";

/// A builder, to which variables, clauses, and comments are added, and from which a formula is written.
///
/// A builder is a single session.
/// It holds no shared state, and so any number of builders may be used side by side.
/// Though, variables from one builder should not be used with another.
#[derive(Clone, Debug)]
pub struct Builder {
    /// The configuration of the builder.
    config: Config,

    /// The next atom to mint.
    fresh_atom: Atom,

    /// The name of each atom, indexed by atom.
    names: Vec<String>,

    /// Every atom appearing in some added clause.
    referenced: BTreeSet<Atom>,

    /// Every added clause, in order of addition.
    clauses: Vec<CClause>,

    /// Every comment line, in order of addition.
    comments: Vec<String>,
}

impl Default for Builder {
    fn default() -> Self {
        Builder::from_config(Config::default())
    }
}

impl Builder {
    /// A builder with the given configuration.
    pub fn from_config(config: Config) -> Self {
        // The reserved atoms are named, so names may be indexed by atom.
        debug_assert_eq!((TOP_ATOM, BOTTOM_ATOM + 1), (0, FIRST_FRESH_ATOM));

        Builder {
            config,
            fresh_atom: FIRST_FRESH_ATOM,
            names: vec![TOP_NAME.to_string(), BOTTOM_NAME.to_string()],
            referenced: BTreeSet::default(),
            clauses: Vec::default(),
            comments: Vec::default(),
        }
    }

    /// The configuration of the builder.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// A count of variables minted by the builder (whether or not used by some clause).
    pub fn variable_count(&self) -> usize {
        (self.fresh_atom - FIRST_FRESH_ATOM) as usize
    }

    /// A count of clauses added to the builder.
    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    /// Whether some added clause contains a sentinel.
    pub fn has_sentinels(&self) -> bool {
        self.referenced.contains(&TOP_ATOM) || self.referenced.contains(&BOTTOM_ATOM)
    }

    /// The clauses added to the builder, in order of addition.
    pub fn clauses(&self) -> &[CClause] {
        &self.clauses
    }

    /// The comment lines added to the builder, in order of addition.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// The atoms appearing in some added clause, in ascending order.
    pub fn referenced_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.referenced.iter().copied()
    }

    /// The name given to the atom when minted, if the atom was minted by the builder.
    pub fn name_of(&self, atom: Atom) -> Option<&str> {
        self.names.get(atom as usize).map(|name| name.as_str())
    }
}
