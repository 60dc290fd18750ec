/*!
Constraints over variables, expanded to [clause sets](crate::structures::clause_set::ClauseSet).

Each constraint is a pure function from some variables to a clause set.
No constraint depends on a builder, and no constraint checks its variables are distinct --- a variable given alongside its own negation results in a tautology or contradiction, as written.

| Constraint | Clauses, for *n* variables |
|---|---|
| [and] | *n* unit clauses |
| [or], [at_least_one] | 1 |
| [not] | 1 |
| [at_most_one] | *n*(*n* − 1)/2 |
| [exactly_one] | *n*(*n* − 1)/2 + 1 |
| [implies] | 1 |
| [equals] | 2 |
| [all_equal] | *n*(*n* − 1) |
| [always_true], [always_false] | 1 |

Pairwise constraints follow the [canonical pair order](crate::generic::pairs), and so the clauses of any constraint are in a fixed order.

# Example

```rust
# use otter_cnf::builder::Builder;
# use otter_cnf::constraints;
let mut builder = Builder::default();
let a = builder.fresh_or_max_variable("a");
let b = builder.fresh_or_max_variable("b");
let c = builder.fresh_or_max_variable("c");

let one = constraints::exactly_one(&[a, -b, c]);
assert_eq!(one.len(), 4);

assert!(builder.add_clause_set(&one).is_ok());
assert_eq!(
    builder.build(),
    "p cnf 3 4
-1 2 0
-1 -3 0
2 -3 0
1 -2 3 0"
);
```
*/

mod basic;
pub use basic::{always_false, always_true, and, not, or};

mod cardinality;
pub use cardinality::{at_least_one, at_most_one, exactly_one};

mod equivalence;
pub use equivalence::{all_equal, equals, implies};
