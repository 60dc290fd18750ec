use crate::{
    generic::pairs::combination,
    structures::{clause_set::ClauseSet, variable::Variable},
};

use super::basic::or;

/// At most one of the variables is true.
///
/// The pairwise encoding: for each pair (*a*, *b*) the clause ¬*a* ∨ ¬*b*.
pub fn at_most_one(variables: &[Variable]) -> ClauseSet {
    combination(variables)
        .map(|(a, b)| [a.negate(), b.negate()])
        .collect()
}

/// At least one of the variables is true, the same as [or].
pub fn at_least_one(variables: &[Variable]) -> ClauseSet {
    or(variables)
}

/// Exactly one of the variables is true.
///
/// The clauses of [at_most_one] followed by the clause of [at_least_one].
pub fn exactly_one(variables: &[Variable]) -> ClauseSet {
    at_most_one(variables).concat(at_least_one(variables))
}

#[cfg(test)]
mod cardinality_tests {
    use super::*;
    use crate::generic::pairs::pair_count;

    fn variables(n: u32) -> Vec<Variable> {
        (1..=n).map(|atom| Variable::new(atom, true)).collect()
    }

    #[test]
    fn at_most_one_order() {
        let [p, q, r] = *variables(3).as_slice() else {
            panic!("Insufficient variables");
        };

        assert_eq!(
            at_most_one(&[p, q, r]).clauses(),
            &[vec![-p, -q], vec![-p, -r], vec![-q, -r]]
        );
    }

    #[test]
    fn at_most_one_count() {
        for n in 0..10 {
            let set = at_most_one(&variables(n));
            assert_eq!(set.len(), pair_count(n as usize));
            assert!(set.clauses().iter().all(|clause| clause.len() == 2));
        }
    }

    #[test]
    fn exactly_one_negated_input() {
        let [p, q, r] = *variables(3).as_slice() else {
            panic!("Insufficient variables");
        };

        assert_eq!(
            exactly_one(&[p, -q, r]).clauses(),
            &[vec![-p, q], vec![-p, -r], vec![q, -r], vec![p, -q, r]]
        );
    }

    #[test]
    fn exactly_one_of_one() {
        let p = Variable::new(1, true);
        assert_eq!(exactly_one(&[p]).clauses(), &[vec![p]]);
    }
}
