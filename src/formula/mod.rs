pub mod dimacs;
pub mod random;

use std::fmt::{self, Debug, Display, Formatter};

/// A propositional variable. Variables are 1-indexed, matching DIMACS.
#[derive(Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash, Debug)]
pub struct Variable(pub usize);

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Literal {
    Positive(Variable),
    Negative(Variable),
}

impl Literal {
    /// Converts a nonzero DIMACS integer into a literal. Zero is the clause terminator, not a
    /// literal, so it maps to `None`.
    pub fn from_dimacs(value: i64) -> Option<Self> {
        if value > 0 {
            Some(Literal::Positive(Variable(value as usize)))
        } else if value < 0 {
            Some(Literal::Negative(Variable(value.unsigned_abs() as usize)))
        } else {
            None
        }
    }

    pub fn to_dimacs(&self) -> i64 {
        match self {
            Literal::Positive(Variable(x)) => *x as i64,
            Literal::Negative(Variable(x)) => -(*x as i64),
        }
    }

    pub fn variable(&self) -> &Variable {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn idx(&self) -> usize {
        self.variable().0
    }

    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(*v),
            Literal::Negative(v) => Literal::Positive(*v),
        }
    }
}

impl Display for Literal {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            Literal::Positive(Variable(x)) => write!(f, "{}", x),
            Literal::Negative(Variable(x)) => write!(f, "!{}", x),
        }
    }
}

/// A disjunction of literals. Duplicates and complementary pairs are kept as given.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause {
    literals: Vec<Literal>,
}

impl Clause {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn contains(&self, literal: &Literal) -> bool {
        self.literals.contains(literal)
    }

    /// The single literal of a unit clause.
    pub fn unit(&self) -> Option<&Literal> {
        match self.literals.as_slice() {
            [literal] => Some(literal),
            _ => None,
        }
    }
}

impl Display for Clause {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        if self.literals.len() > 1 {
            f.write_str("(")?;
        }
        let mut first_literal = true;
        for literal in &self.literals {
            if first_literal {
                first_literal = false;
            } else {
                f.write_str(" | ")?;
            }
            Display::fmt(literal, f)?;
        }
        if self.literals.len() > 1 {
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// The largest variable count a formula may declare. Literals are written as 32-bit signed
/// integers in DIMACS.
pub const MAX_VARIABLES: usize = i32::MAX as usize;

#[derive(Debug, PartialEq, Eq)]
pub enum FormulaError {
    TooManyVariables(usize),
    VariableOutOfRange { literal: Literal, num_variables: usize },
}

impl Display for FormulaError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            FormulaError::TooManyVariables(n) => {
                write!(f, "{} variables exceeds the maximum of {}", n, MAX_VARIABLES)
            }
            FormulaError::VariableOutOfRange { literal, num_variables } => {
                write!(f, "literal {} out of range [1, {}]", literal.to_dimacs(), num_variables)
            }
        }
    }
}

impl std::error::Error for FormulaError {}

/// Where a formula stands under the current partial assignment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    /// No clauses remain.
    Satisfied,
    /// Some clause has had every literal falsified.
    Conflict,
    Unresolved,
}

/// A conjunction of clauses over the variables `1..=num_variables`.
#[derive(Clone, PartialEq, Eq)]
pub struct Formula {
    clauses: Vec<Clause>,
    num_variables: usize,
}

impl Formula {
    /// Builds a formula whose variable count is the largest variable mentioned in `conjuncts`.
    pub fn new(conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        let clauses: Vec<Clause> = conjuncts.into_iter().collect();
        let num_variables = clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .map(|literal| literal.idx())
            .max()
            .unwrap_or(0);
        Self { clauses, num_variables }
    }

    /// Builds a formula over an explicitly declared number of variables, which may exceed the
    /// largest variable actually mentioned.
    ///
    /// # Panics
    ///
    /// Panics if `num_variables` exceeds [`MAX_VARIABLES`] or a literal's variable lies outside
    /// `1..=num_variables`. Use [`Formula::try_with_num_variables`] to get an error instead.
    pub fn with_num_variables(num_variables: usize, conjuncts: impl IntoIterator<Item = Clause>) -> Self {
        match Self::try_with_num_variables(num_variables, conjuncts) {
            Ok(formula) => formula,
            Err(e) => panic!("{}", e),
        }
    }

    /// Like [`Formula::with_num_variables`], but reports invalid input as an error.
    pub fn try_with_num_variables(
        num_variables: usize,
        conjuncts: impl IntoIterator<Item = Clause>,
    ) -> Result<Self, FormulaError> {
        if num_variables > MAX_VARIABLES {
            return Err(FormulaError::TooManyVariables(num_variables));
        }
        let clauses: Vec<Clause> = conjuncts.into_iter().collect();
        if let Some(literal) = clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .find(|literal| literal.idx() < 1 || literal.idx() > num_variables)
        {
            return Err(FormulaError::VariableOutOfRange {
                literal: *literal,
                num_variables,
            });
        }
        Ok(Self { clauses, num_variables })
    }

    /// A formula over the same variables with `clauses` in place of this one's.
    pub(crate) fn with_clauses(&self, clauses: Vec<Clause>) -> Self {
        Self {
            clauses,
            num_variables: self.num_variables,
        }
    }

    pub fn num_variables(&self) -> usize {
        self.num_variables
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause> {
        self.clauses.iter()
    }

    pub fn is_satisfied(&self) -> bool {
        self.clauses.is_empty()
    }

    pub fn has_empty_clause(&self) -> bool {
        self.clauses.iter().any(Clause::is_empty)
    }

    pub fn status(&self) -> Status {
        if self.is_satisfied() {
            Status::Satisfied
        } else if self.has_empty_clause() {
            Status::Conflict
        } else {
            Status::Unresolved
        }
    }
}

impl Display for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            Display::fmt(clause, f)?;
        }
        Ok(())
    }
}

impl Debug for Formula {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "[{} vars] {}", self.num_variables, self)
    }
}

#[cfg(test)]
pub(crate) fn p(x: usize) -> Literal {
    Literal::Positive(Variable(x))
}

#[cfg(test)]
pub(crate) fn n(x: usize) -> Literal {
    Literal::Negative(Variable(x))
}

/// Builds a formula from DIMACS-style integer clauses.
#[cfg(test)]
pub(crate) fn cnf(num_variables: usize, clauses: &[&[i64]]) -> Formula {
    Formula::with_num_variables(
        num_variables,
        clauses
            .iter()
            .map(|clause| Clause::new(clause.iter().filter_map(|&x| Literal::from_dimacs(x)))),
    )
}

/// Random formulas with up to `max_variables` variables and clauses of one to three literals.
#[cfg(test)]
pub(crate) fn formula_3sat_strategy(max_variables: usize) -> impl proptest::strategy::Strategy<Value = Formula> {
    use proptest::prelude::*;

    (1..=max_variables).prop_flat_map(|num_variables| {
        let literal = (1..=num_variables, any::<bool>()).prop_map(|(x, positive)| {
            if positive {
                Literal::Positive(Variable(x))
            } else {
                Literal::Negative(Variable(x))
            }
        });
        let clause = proptest::collection::vec(literal, 1..=3).prop_map(Clause::new);
        proptest::collection::vec(clause, 0..(4 * num_variables + 2))
            .prop_map(move |clauses| Formula::with_num_variables(num_variables, clauses))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_dimacs_conversion() {
        assert_eq!(Literal::from_dimacs(3), Some(p(3)));
        assert_eq!(Literal::from_dimacs(-7), Some(n(7)));
        assert_eq!(Literal::from_dimacs(0), None);
        assert_eq!(n(7).to_dimacs(), -7);
        assert_eq!(p(3).negated(), n(3));
        assert_eq!(n(3).negated(), p(3));
    }

    #[test]
    fn num_variables_from_clauses() {
        let f = Formula::new(vec![Clause::new(vec![p(1), n(4)]), Clause::new(vec![p(2)])]);
        assert_eq!(f.num_variables(), 4);
        assert_eq!(Formula::new(vec![]).num_variables(), 0);
    }

    #[test]
    fn declared_variables_may_exceed_mentioned() {
        let f = cnf(10, &[&[1, -2]]);
        assert_eq!(f.num_variables(), 10);
        assert_eq!(f.num_clauses(), 1);
    }

    #[test]
    #[should_panic(expected = "literal -3 out of range [1, 2]")]
    fn declared_variables_must_cover_literals() {
        let _ = cnf(2, &[&[1, -3]]);
    }

    #[test]
    fn try_with_num_variables_reports_errors() {
        let clauses = vec![Clause::new(vec![p(1), n(3)])];
        assert_eq!(
            Formula::try_with_num_variables(2, clauses.clone()),
            Err(FormulaError::VariableOutOfRange {
                literal: n(3),
                num_variables: 2
            })
        );
        assert_eq!(
            Formula::try_with_num_variables(0, vec![Clause::new(vec![p(0)])]),
            Err(FormulaError::VariableOutOfRange {
                literal: p(0),
                num_variables: 0
            })
        );
        assert_eq!(
            Formula::try_with_num_variables(usize::MAX, vec![]),
            Err(FormulaError::TooManyVariables(usize::MAX))
        );
        assert_eq!(Formula::try_with_num_variables(3, clauses).map(|f| f.num_variables()), Ok(3));
    }

    #[test]
    fn status() {
        assert_eq!(cnf(3, &[]).status(), Status::Satisfied);
        assert_eq!(cnf(3, &[&[1], &[]]).status(), Status::Conflict);
        assert_eq!(cnf(3, &[&[1, 2], &[-3]]).status(), Status::Unresolved);
    }

    #[test]
    fn unit_clause() {
        assert_eq!(Clause::new(vec![n(2)]).unit(), Some(&n(2)));
        assert_eq!(Clause::new(vec![n(2), n(2)]).unit(), None);
        assert_eq!(Clause::new(vec![]).unit(), None);
    }

    #[test]
    fn display() {
        let f = cnf(3, &[&[1, -2], &[-3]]);
        assert_eq!(f.to_string(), "(1 | !2) & !3");
        assert_eq!(format!("{:?}", f), "[3 vars] (1 | !2) & !3");
    }
}
