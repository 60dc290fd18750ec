//! A library for describing boolean formulas symbolically and writing them in conjunctive normal form, as DIMACS.
//!
//! otter_cnf is a companion to satisfiability solvers: a formula is described in terms of variables and constraints over those variables (conjunction, disjunction, at most one, exactly one, implication, equality, etc.), and written in the DIMACS form read by (almost) every solver.
//!
//! # Orientation
//!
//! The library is designed around a [builder](crate::builder).
//!
//! - A builder mints [variables](crate::structures::variable), each a fresh atom paired with a polarity.
//! - Variables are combined by [constraints](crate::constraints) into [clause sets](crate::structures::clause_set).
//!   Constraints are pure, and know nothing of builders.
//! - Clause sets are added to the builder, and the builder [writes](crate::builder::Builder::build) the formula.
//!
//! The atoms of a builder are not written as they are.
//! When a formula is written atoms are [numbered](crate::builder::Numbering) in the order they are first seen in the clauses, and only atoms which appear in some clause are numbered.
//! So, minting a variable which is never used has no effect on the written formula.
//!
//! # Examples
//!
//! + Write a formula for: exactly one of *a*, ¬*b*, *c*.
//!
//! ```rust
//! # use otter_cnf::builder::Builder;
//! # use otter_cnf::constraints;
//! let mut builder = Builder::default();
//!
//! let a = builder.fresh_or_max_variable("a");
//! let b = builder.fresh_or_max_variable("b");
//! let c = builder.fresh_or_max_variable("c");
//!
//! assert!(builder.add_clause_set(&constraints::exactly_one(&[a, -b, c])).is_ok());
//!
//! assert_eq!(
//!     builder.build(),
//!     "p cnf 3 4
//! -1 2 0
//! -1 -3 0
//! 2 -3 0
//! 1 -2 3 0"
//! );
//! ```
//!
//! + Write a pigeonhole formula to some writer.
//!
//! ```rust
//! # use otter_cnf::builder::Builder;
//! # use otter_cnf::generators::pigeonhole;
//! let mut builder = Builder::default();
//! builder.add_comment("Three pigeons, two holes.");
//!
//! assert!(pigeonhole(&mut builder, 3, 2).is_ok());
//!
//! let mut dimacs = vec![];
//! assert!(builder.write_dimacs(&mut dimacs).is_ok());
//! assert!(dimacs.starts_with(b"c Three pigeons, two holes.\np cnf 6 9\n"));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made when variables are minted, clauses are added, and formulas are written.
//! The targets are listed in [misc::log].
//!
//! For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
//! - Logs related to the builder can be filtered with `RUST_LOG=builder …` or,
//! - Logs of formula sizes without information about minted atoms can be found with `RUST_LOG=dimacs=debug …`

pub mod builder;
pub mod constraints;

pub mod config;
pub mod structures;
pub mod types;

pub mod generic;

pub mod generators;

pub mod misc;
