use crate::formula::{Clause, Formula, Literal};

/// Simplifies `formula` under the assumption that `literal` is true.
///
/// Clauses containing `literal` are satisfied and dropped; occurrences of its negation are
/// falsified and removed from the clauses that remain. The input is left untouched, so sibling
/// branches can each derive their own formula from the same parent.
pub(crate) fn simplify(formula: &Formula, literal: &Literal) -> Formula {
    let falsified = literal.negated();
    let clauses = formula
        .clauses()
        .filter(|clause| !clause.contains(literal))
        .map(|clause| Clause::new(clause.literals().filter(|l| **l != falsified).copied()))
        .collect::<Vec<_>>();
    formula.with_clauses(clauses)
}
