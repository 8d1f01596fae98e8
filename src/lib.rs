//! A DPLL satisfiability solver for CNF formulas.
//!
//! ```
//! use dpllsat::{Clause, Formula, Literal, SatResult, Solver, Variable};
//!
//! let x1 = Variable(1);
//! let x2 = Variable(2);
//! let f = Formula::new(vec![
//!     Clause::new(vec![Literal::Positive(x1), Literal::Positive(x2)]),
//!     Clause::new(vec![Literal::Negative(x1)]),
//! ]);
//!
//! match Solver::new(f).solve() {
//!     SatResult::Satisfiable(model) => assert_eq!(model.values(), &[false, true]),
//!     SatResult::Unsatisfiable => unreachable!(),
//! }
//! ```

pub mod formula;
mod assignment;
mod model;
mod propagate;
mod simplify;
mod solver;

#[cfg(test)]
mod brute_force;

#[derive(PartialEq, Clone, Debug)]
pub enum SatResult {
    Satisfiable(Model),
    Unsatisfiable,
}

impl SatResult {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }

    pub fn model(&self) -> Option<&Model> {
        match self {
            SatResult::Satisfiable(model) => Some(model),
            SatResult::Unsatisfiable => None,
        }
    }
}

pub use formula::{Clause, Formula, FormulaError, Literal, Variable};
pub use model::Model;
pub use solver::Solver;
