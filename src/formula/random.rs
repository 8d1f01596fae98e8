use crate::formula::{Clause, Formula, Literal, Variable};
use rand::seq::index;
use rand::Rng;

/// Generates a random CNF formula over `num_variables` variables.
///
/// Each clause draws its length uniformly from `min_len..=max_len` (capped at `num_variables`),
/// picks that many distinct variables, and negates each one with probability one half.
///
/// # Panics
///
/// Panics if `min_len` is zero (an empty clause has no DIMACS form), if `min_len > max_len`, or
/// if clauses are requested over zero variables.
pub fn random_formula<R: Rng>(
    rng: &mut R,
    num_variables: usize,
    num_clauses: usize,
    min_len: usize,
    max_len: usize,
) -> Formula {
    assert!(min_len >= 1, "clauses need at least one literal");
    assert!(min_len <= max_len, "min_len {} exceeds max_len {}", min_len, max_len);
    assert!(num_variables > 0 || num_clauses == 0, "clauses need at least one variable");

    let clauses = (0..num_clauses)
        .map(|_| {
            let len = rng.gen_range(min_len, max_len + 1).min(num_variables);
            let variables = index::sample(&mut *rng, num_variables, len);
            Clause::new(variables.into_iter().map(|i| {
                let var = Variable(i + 1);
                if rng.gen_bool(0.5) {
                    Literal::Negative(var)
                } else {
                    Literal::Positive(var)
                }
            }))
        })
        .collect::<Vec<_>>();

    Formula::with_num_variables(num_variables, clauses)
}
