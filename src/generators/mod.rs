/*!
Generators of some well-known families of formulas.

Each generator mints variables from a given builder and adds clauses to the builder, so comments or further constraints may be added before or after.

- [pigeonhole], the (unsatisfiable, when there are more pigeons than holes) pigeonhole principle.
- [random_k_cnf], uniform random formulas with a fixed clause width.
*/

mod pigeonhole;
pub use pigeonhole::pigeonhole;

pub mod random;
pub use random::random_k_cnf;
