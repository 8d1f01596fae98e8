use crate::formula::{Literal, Variable};
use log::trace;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Assignment {
    True,
    False,
    Undecided,
}

impl Assignment {
    fn of(literal: &Literal) -> Self {
        if literal.is_positive() {
            Assignment::True
        } else {
            Assignment::False
        }
    }
}

/// A position in the trail, used to undo every assignment made after it.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub(crate) struct TrailMark(usize);

/// Tri-state value for each variable `1..=num_variables`, plus the trail of variables assigned so
/// far, in assignment order.
#[derive(Debug)]
pub(crate) struct Assignments {
    // Index 0 is unused
    variables: Vec<Assignment>,
    trail: Vec<Variable>,
}

impl Assignments {
    pub(crate) fn new(num_variables: usize) -> Self {
        Self {
            variables: vec![Assignment::Undecided; num_variables + 1],
            trail: vec![],
        }
    }

    pub(crate) fn get(&self, variable: Variable) -> Assignment {
        self.variables[variable.0]
    }

    pub(crate) fn is_undecided(&self, variable: Variable) -> bool {
        self.get(variable) == Assignment::Undecided
    }

    /// Makes `literal` true.
    pub(crate) fn assign(&mut self, literal: &Literal) {
        let variable = *literal.variable();
        assert_eq!(
            self.get(variable),
            Assignment::Undecided,
            "variable {} is already assigned",
            variable.0
        );
        trace!("assign {} (trail length {})", literal, self.trail.len());

        self.variables[variable.0] = Assignment::of(literal);
        self.trail.push(variable);
    }

    pub(crate) fn num_assigned(&self) -> usize {
        self.trail.len()
    }

    pub(crate) fn mark(&self) -> TrailMark {
        TrailMark(self.trail.len())
    }

    /// Returns every variable assigned since `mark` to undecided.
    pub(crate) fn undo_to(&mut self, mark: TrailMark) {
        assert!(mark.0 <= self.trail.len(), "cannot undo past the end of the trail");
        let dropped = self.trail.split_off(mark.0);
        if !dropped.is_empty() {
            trace!("backtrack: dropping {} assignments", dropped.len());
        }
        for variable in &dropped {
            self.variables[variable.0] = Assignment::Undecided;
        }
    }

    /// The value of every variable in order, with undecided variables reported as `false`.
    pub(crate) fn values(&self) -> Vec<bool> {
        self.variables[1..].iter().map(|a| *a == Assignment::True).collect()
    }
}
