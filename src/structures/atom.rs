/*!
(The internal representation of) an atom (aka. a 'variable').

Broadly, atoms are things to which assigning a (boolean) value is of interest.
- 'Internal' atoms identify a variable within a [builder](crate::builder).
- 'External' atoms are the numbers written to a DIMACS formula. \
  These are assigned only when a formula is written, see [Numbering](crate::builder::Numbering).

Each internal atom is a u32 *u* such that either:
- *u* is [TOP_ATOM] or [BOTTOM_ATOM], the reserved atoms of the [sentinels](crate::structures::variable::Variable::TOP), or:
- *u* was minted by some builder, and every atom in ([FIRST_FRESH_ATOM]..*u*) was minted before it.

```rust
# use otter_cnf::builder::Builder;
# use otter_cnf::structures::atom::{Atom, BOTTOM_ATOM, TOP_ATOM};
let mut builder = Builder::default();

let p = builder.fresh_or_max_variable("p");
let q = builder.fresh_or_max_variable("q");

assert_eq!(p.atom(), 2);
assert_eq!(q.atom(), 3);
assert!(p.atom() != TOP_ATOM && p.atom() != BOTTOM_ATOM);
```

As internal atoms are dense, they are used as the indicies of structures, e.g. `names[atom]`.

# Notes
- Internal atoms are never written. A formula written from a builder numbers only those atoms which appear in some clause, in the order they are first seen.
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The atom of the [true sentinel](crate::structures::variable::Variable::TOP), never minted.
pub const TOP_ATOM: Atom = 0;

/// The atom of the [false sentinel](crate::structures::variable::Variable::BOTTOM), never minted.
pub const BOTTOM_ATOM: Atom = 1;

/// The first atom a builder mints.
pub const FIRST_FRESH_ATOM: Atom = 2;

/// The maximum instance of an atom.
///
/// As a written literal is a signed integer, atoms are bounded by the maximum of an i32.
pub const ATOM_MAX: Atom = i32::MAX.unsigned_abs();
