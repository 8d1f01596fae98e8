use crate::*;

// Simple brute-force implementation for checking the solver in tests
pub(crate) fn solve_brute_force(f: &Formula) -> SatResult {
    let num_variables = f.num_variables();
    assert!(num_variables <= 20); // just for safety

    fn assignment_for(assignment: u32, x: usize) -> bool {
        assignment & (1 << (x - 1)) != 0
    }

    'search: for assignment in 0..2u32.pow(num_variables as u32) {
        'clauses: for clause in f.clauses() {
            for literal in clause.literals() {
                if assignment_for(assignment, literal.idx()) == literal.is_positive() {
                    // this clause is satisfied, let's go to the next one
                    continue 'clauses;
                }
            }
            // if we got here, this clause was not satisfied, so this assignment is bogus
            continue 'search;
        }
        // if we got here, every clause was satisfied, so we're done and satisfiable
        let model = (1..=num_variables).map(|x| assignment_for(assignment, x)).collect();
        return SatResult::Satisfiable(Model::new(model));
    }
    // no assignment is valid
    SatResult::Unsatisfiable
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{cnf, n, p};

    #[test]
    fn solve_bcp_sat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let f = Formula::new(vec![c1, c2]);

        assert_eq!(solve_brute_force(&f), SatResult::Satisfiable(Model::new(vec![false, true])));
    }

    #[test]
    fn solve_bcp_unsat() {
        let c1 = Clause::new(vec![p(1), p(2)]);
        let c2 = Clause::new(vec![n(1)]);
        let c3 = Clause::new(vec![n(2)]);
        let f = Formula::new(vec![c1, c2, c3]);

        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }

    #[test]
    fn solve_conflict_unsat() {
        let f = cnf(2, &[&[1, 2], &[-1, -2], &[1, -2], &[-1, 2]]);
        assert_eq!(solve_brute_force(&f), SatResult::Unsatisfiable);
    }

    #[test]
    fn solve_empty() {
        assert_eq!(solve_brute_force(&cnf(0, &[])), SatResult::Satisfiable(Model::new(vec![])));
        assert_eq!(solve_brute_force(&cnf(2, &[&[]])), SatResult::Unsatisfiable);
    }
}
