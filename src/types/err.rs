//! Error types used in the library.
//!
//! - Most of these are very unlikely to occur during use.
//! - Some are external --- e.g. a builder returns an `UnknownAtom` error to highlight a clause over an atom it did not mint.
//!   In this case the clause is not registered, and the builder may continue to be used.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use crate::structures::atom::Atom;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    AtomDB(AtomDBError),
    Build(BuildError),
    Generator(GeneratorError),

    /// Some error from a writer, with the kind of the error.
    Write(std::io::ErrorKind),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AtomDB(AtomDBError::AtomsExhausted) => write!(f, "no fresh atoms remain"),
            Self::Build(BuildError::UnknownAtom(atom)) => {
                write!(f, "atom {atom} was not minted by the builder")
            }
            Self::Generator(GeneratorError::Width) => {
                write!(f, "clause width must be between one and the count of atoms")
            }
            Self::Generator(GeneratorError::Zero) => write!(f, "a count of zero was given"),
            Self::Write(kind) => write!(f, "write failed: {kind}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AtomDBError {
    /// There are no more fresh atoms.
    AtomsExhausted,
}

impl From<AtomDBError> for ErrorKind {
    fn from(e: AtomDBError) -> Self {
        ErrorKind::AtomDB(e)
    }
}

/// Noted errors when adding to a builder.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildError {
    /// A clause contains an atom which was not minted by the builder, and is not reserved.
    ///
    /// A variable minted by some other builder is only noticed when its atom is beyond those minted.
    UnknownAtom(Atom),
}

impl From<BuildError> for ErrorKind {
    fn from(e: BuildError) -> Self {
        ErrorKind::Build(e)
    }
}

/// Errors when generating a formula.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GeneratorError {
    /// A clause width of zero, or a clause width greater than the count of atoms.
    Width,

    /// Some count which must be positive was zero.
    Zero,
}

impl From<GeneratorError> for ErrorKind {
    fn from(e: GeneratorError) -> Self {
        ErrorKind::Generator(e)
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Write(e.kind())
    }
}
