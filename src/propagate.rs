use crate::assignment::Assignments;
use crate::formula::{Formula, Literal, Status};
use crate::simplify::simplify;
use log::trace;
use std::collections::HashSet;

/// Counts of the inferences made while propagating.
#[derive(Clone, Copy, Default, Debug)]
pub(crate) struct Inferences {
    pub(crate) units: usize,
    pub(crate) pure_literals: usize,
}

/// Applies unit propagation to a fixpoint, then pure-literal elimination to a fixpoint, replacing
/// `formula` with its simplification after every inference and assigning the inferred literals.
///
/// Stops early as soon as the formula is satisfied or contains an empty clause.
pub(crate) fn propagate(formula: &mut Formula, assignments: &mut Assignments, inferences: &mut Inferences) -> Status {
    let status = formula.status();
    if status != Status::Unresolved {
        return status;
    }

    while let Some(literal) = find_unit(formula, assignments) {
        trace!("unit {}", literal);
        inferences.units += 1;
        if let Some(status) = infer(formula, assignments, &literal) {
            return status;
        }
    }

    while let Some(literal) = find_pure_literal(formula, assignments) {
        trace!("pure {}", literal);
        inferences.pure_literals += 1;
        if let Some(status) = infer(formula, assignments, &literal) {
            return status;
        }
    }

    Status::Unresolved
}

/// Assigns `literal` and simplifies with it, returning the status if it became terminal.
fn infer(formula: &mut Formula, assignments: &mut Assignments, literal: &Literal) -> Option<Status> {
    assignments.assign(literal);
    *formula = simplify(formula, literal);
    match formula.status() {
        Status::Unresolved => None,
        status => Some(status),
    }
}

/// The literal of the leftmost unit clause whose variable is still undecided.
fn find_unit(formula: &Formula, assignments: &Assignments) -> Option<Literal> {
    formula
        .clauses()
        .filter_map(|clause| clause.unit())
        .find(|literal| assignments.is_undecided(*literal.variable()))
        .copied()
}

/// The first pure literal among undecided variables, in order of first occurrence (clause order,
/// then literal order within each clause).
fn find_pure_literal(formula: &Formula, assignments: &Assignments) -> Option<Literal> {
    let mut seen = HashSet::new();
    let mut candidates = vec![];
    for literal in formula.clauses().flat_map(|clause| clause.literals()) {
        if assignments.is_undecided(*literal.variable()) && seen.insert(*literal) {
            candidates.push(*literal);
        }
    }
    candidates.into_iter().find(|literal| !seen.contains(&literal.negated()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assignment::Assignment;
    use crate::formula::{cnf, n, p, Variable};
    use test_env_log::test;

    #[test]
    fn leftmost_unit_first() {
        let f = cnf(3, &[&[1, 2], &[-3], &[2]]);
        let a = Assignments::new(3);
        assert_eq!(find_unit(&f, &a), Some(n(3)));
    }

    #[test]
    fn unit_on_decided_variable_is_skipped() {
        let f = cnf(3, &[&[1], &[2]]);
        let mut a = Assignments::new(3);
        a.assign(&p(1));
        assert_eq!(find_unit(&f, &a), Some(p(2)));
    }

    #[test]
    fn pure_literal_first_seen_order() {
        // 1 occurs in both polarities; !3 is seen before 2
        let f = cnf(3, &[&[1, -3], &[-1, 2], &[2, -3]]);
        let a = Assignments::new(3);
        assert_eq!(find_pure_literal(&f, &a), Some(n(3)));
    }

    #[test]
    fn no_pure_literal() {
        let f = cnf(2, &[&[1, 2], &[-1, -2]]);
        let a = Assignments::new(2);
        assert_eq!(find_pure_literal(&f, &a), None);
    }

    #[test]
    fn unit_chain() {
        let mut f = cnf(3, &[&[1], &[-1, 2], &[-2, 3]]);
        let mut a = Assignments::new(3);
        let mut inferences = Inferences::default();
        assert_eq!(propagate(&mut f, &mut a, &mut inferences), Status::Satisfied);
        assert_eq!(a.values(), vec![true, true, true]);
        assert_eq!(inferences.units, 3);
        assert_eq!(inferences.pure_literals, 0);
    }

    #[test]
    fn unit_conflict() {
        let mut f = cnf(1, &[&[1], &[-1]]);
        let mut a = Assignments::new(1);
        let mut inferences = Inferences::default();
        assert_eq!(propagate(&mut f, &mut a, &mut inferences), Status::Conflict);
        assert_eq!(inferences.units, 1);
    }

    #[test]
    fn pure_literals_after_units() {
        let mut f = cnf(3, &[&[1], &[2, 3], &[2, -3]]);
        let mut a = Assignments::new(3);
        let mut inferences = Inferences::default();
        assert_eq!(propagate(&mut f, &mut a, &mut inferences), Status::Satisfied);
        assert_eq!(a.get(Variable(1)), Assignment::True);
        assert_eq!(a.get(Variable(2)), Assignment::True);
        // 3 vanished with the clauses 2 satisfied
        assert!(a.is_undecided(Variable(3)));
        assert_eq!(inferences.pure_literals, 1);
    }

    #[test]
    fn stalls_without_inferences() {
        let mut f = cnf(2, &[&[1, 2], &[-1, -2], &[1, -2], &[-1, 2]]);
        let before = f.clone();
        let mut a = Assignments::new(2);
        let mut inferences = Inferences::default();
        assert_eq!(propagate(&mut f, &mut a, &mut inferences), Status::Unresolved);
        assert_eq!(f, before);
        assert_eq!(a.mark(), Assignments::new(2).mark());
    }

    #[test]
    fn terminal_input_untouched() {
        let mut f = cnf(2, &[&[1], &[]]);
        let mut a = Assignments::new(2);
        let mut inferences = Inferences::default();
        assert_eq!(propagate(&mut f, &mut a, &mut inferences), Status::Conflict);
        assert!(a.is_undecided(Variable(1)));
    }
}
