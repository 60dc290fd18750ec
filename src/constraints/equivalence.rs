use crate::{
    generic::pairs::combination,
    structures::{clause_set::ClauseSet, variable::Variable},
};

/// If `a` then `b`, as the clause ¬*a* ∨ *b*.
pub fn implies(a: Variable, b: Variable) -> ClauseSet {
    ClauseSet::from(vec![a.negate(), b])
}

/// `a` if and only if `b`, as the clauses ¬*a* ∨ *b* and ¬*b* ∨ *a*, in that order.
pub fn equals(a: Variable, b: Variable) -> ClauseSet {
    implies(a, b).concat(implies(b, a))
}

/// All variables have the same value.
///
/// For each pair, in canonical order, the clauses of [equals].
pub fn all_equal(variables: &[Variable]) -> ClauseSet {
    let mut set = ClauseSet::default();
    for (a, b) in combination(variables) {
        set.extend(equals(*a, *b));
    }
    set
}

#[cfg(test)]
mod equivalence_tests {
    use super::*;

    #[test]
    fn implication() {
        let p = Variable::new(1, true);
        let q = Variable::new(2, false);

        assert_eq!(implies(p, q).clauses(), &[vec![-p, q]]);
    }

    #[test]
    fn equality() {
        let p = Variable::new(1, true);
        let q = Variable::new(2, true);

        assert_eq!(equals(p, q).clauses(), &[vec![-p, q], vec![-q, p]]);
    }

    #[test]
    fn all_equal_order_and_count() {
        let vars = (1..=3).map(|atom| Variable::new(atom, true)).collect::<Vec<_>>();
        let [p, q, r] = *vars.as_slice() else {
            panic!("Insufficient variables");
        };

        assert_eq!(
            all_equal(&vars).clauses(),
            &[
                vec![-p, q],
                vec![-q, p],
                vec![-p, r],
                vec![-r, p],
                vec![-q, r],
                vec![-r, q],
            ]
        );

        for n in 0..9_u32 {
            let vars = (1..=n).map(|atom| Variable::new(atom, true)).collect::<Vec<_>>();
            let n = n as usize;
            assert_eq!(all_equal(&vars).len(), n * n.saturating_sub(1));
        }
    }
}
