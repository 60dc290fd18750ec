/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when tracing how a formula was built.

Note, no log implementation is provided by the library.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [builder](crate::builder)
    pub const BUILDER: &str = "builder";

    /// Logs related to writing a formula in [DIMACS](crate::builder::Builder::build) form
    pub const DIMACS: &str = "dimacs";

    /// Logs related to the [generators](crate::generators)
    pub const GENERATOR: &str = "generator";
}
