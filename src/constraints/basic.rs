use crate::structures::{clause::CClause, clause_set::ClauseSet, variable::Variable};

/// The conjunction of the variables, as one unit clause per variable.
pub fn and(variables: &[Variable]) -> ClauseSet {
    variables.iter().copied().collect()
}

/// The disjunction of the variables, as a single clause.
///
/// No variables gives the empty clause.
pub fn or(variables: &[Variable]) -> ClauseSet {
    ClauseSet::from(variables.to_vec())
}

/// The negation of the conjunction of the variables, as a single clause of negated variables.
pub fn not(variables: &[Variable]) -> ClauseSet {
    ClauseSet::from(
        variables
            .iter()
            .map(|variable| variable.negate())
            .collect::<CClause>(),
    )
}

/// A unit clause over [TOP](Variable::TOP).
pub fn always_true() -> ClauseSet {
    ClauseSet::from(vec![Variable::TOP])
}

/// A unit clause over [BOTTOM](Variable::BOTTOM).
pub fn always_false() -> ClauseSet {
    ClauseSet::from(vec![Variable::BOTTOM])
}
