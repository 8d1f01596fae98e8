use crate::assignment::Assignments;
use crate::formula::{Formula, Literal, Status, Variable};
use crate::model::Model;
use crate::propagate::{propagate, Inferences};
use crate::simplify::simplify;
use crate::SatResult;
use log::{debug, trace};

pub struct Solver {
    formula: Formula,
    assignments: Assignments,
    stats: Stats,
}

#[derive(Clone, Copy, Default, Debug)]
struct Stats {
    decisions: usize,
    backtracks: usize,
    inferences: Inferences,
}

impl Solver {
    pub fn new(formula: Formula) -> Self {
        let assignments = Assignments::new(formula.num_variables());
        Self {
            formula,
            assignments,
            stats: Stats::default(),
        }
    }

    pub fn solve(&mut self) -> SatResult {
        self.assignments = Assignments::new(self.formula.num_variables());
        self.stats = Stats::default();

        let result = if self.dpll(self.formula.clone(), 0) {
            SatResult::Satisfiable(self.model())
        } else {
            assert_eq!(self.assignments.num_assigned(), 0, "failed search left assignments behind");
            SatResult::Unsatisfiable
        };

        debug!(
            "{} after {} decisions, {} backtracks, {} units, {} pure literals",
            if result.is_satisfiable() { "SAT" } else { "UNSAT" },
            self.stats.decisions,
            self.stats.backtracks,
            self.stats.inferences.units,
            self.stats.inferences.pure_literals
        );
        result
    }

    /// Searches for a satisfying extension of the current assignment. On failure, every
    /// assignment made below this call has been undone.
    fn dpll(&mut self, formula: Formula, depth: usize) -> bool {
        let mark = self.assignments.mark();
        let satisfiable = self.search(formula, depth);
        if !satisfiable {
            self.assignments.undo_to(mark);
        }
        satisfiable
    }

    fn search(&mut self, mut formula: Formula, depth: usize) -> bool {
        match propagate(&mut formula, &mut self.assignments, &mut self.stats.inferences) {
            Status::Satisfied => return true,
            Status::Conflict => return false,
            Status::Unresolved => {}
        }

        let variable = match self.decide(&formula) {
            Some(variable) => variable,
            // Every remaining literal is decided; nothing left to branch on
            None => return true,
        };

        for literal in &[Literal::Positive(variable), Literal::Negative(variable)] {
            self.stats.decisions += 1;
            trace!("decide {} at depth {}", literal, depth);

            let mark = self.assignments.mark();
            self.assignments.assign(literal);
            if self.dpll(simplify(&formula, literal), depth + 1) {
                return true;
            }
            self.assignments.undo_to(mark);
        }

        self.stats.backtracks += 1;
        trace!("backtrack from depth {}", depth);
        false
    }

    /// The first undecided variable, scanning clauses and then literals in formula order.
    fn decide(&self, formula: &Formula) -> Option<Variable> {
        formula
            .clauses()
            .flat_map(|clause| clause.literals())
            .map(|literal| *literal.variable())
            .find(|variable| self.assignments.is_undecided(*variable))
    }

    fn model(&self) -> Model {
        Model::new(self.assignments.values())
    }
}
