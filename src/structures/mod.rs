//! Key structures, such as variables, clauses, and clause sets.
//!
//! # Other structures without an implementation.
//!
//! ## Formulas
//!
//!  A formula 𝐅 is a set of [clauses](clause), interpreted as the conjunction of those clauses (and so is the conjunction of disjunctions over variables in some language).
//!
//!  The clauses registered with a [builder](crate::builder::Builder) form a formula, and it is this formula which is written in DIMACS form.
//!
//! ## Languages
//!
//! A *language* 𝓛 is some set of [atoms](atom), closed under the operations of negation, conjunction, and disjunction. \
//! Every builder is implicitly relative to the language of atoms it has minted, together with the reserved atoms of the [sentinels](variable::Variable::TOP).
//!
//! The language of a written formula is smaller: only those atoms appearing in some clause are written.

pub mod atom;
pub mod clause;
pub mod clause_set;
pub mod variable;
