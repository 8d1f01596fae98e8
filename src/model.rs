use crate::formula::{Formula, Literal, Variable};
use std::fmt::{self, Display, Formatter};

/// A total assignment: entry `i` is the value of variable `i + 1`.
///
/// Variables the search never had to decide (because they appear in no clause, or because the
/// formula was already satisfied without them) are `false`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Model {
    values: Vec<bool>,
}

impl Model {
    pub fn new(values: Vec<bool>) -> Self {
        Self { values }
    }

    /// The value of `variable`, or `None` if it is not one of `1..=len()`.
    pub fn get(&self, variable: Variable) -> Option<bool> {
        variable.0.checked_sub(1).and_then(|i| self.values.get(i)).copied()
    }

    /// The value of `variable`.
    ///
    /// # Panics
    ///
    /// Panics if `variable` is not one of `1..=len()`.
    pub fn value(&self, variable: Variable) -> bool {
        match self.get(variable) {
            Some(value) => value,
            None => panic!("variable {} outside model of {} variables", variable.0, self.values.len()),
        }
    }

    /// True if the model makes `literal` true. Literals over variables the model does not cover
    /// are never true.
    pub fn is_true(&self, literal: &Literal) -> bool {
        self.get(*literal.variable()) == Some(literal.is_positive())
    }

    pub fn values(&self) -> &[bool] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// True if every clause of `formula` has a literal this model makes true. Literals over
    /// variables the model does not cover never count.
    pub fn satisfies(&self, formula: &Formula) -> bool {
        formula
            .clauses()
            .all(|clause| clause.literals().any(|literal| self.is_true(literal)))
    }

    /// The model as true literals, one per variable, e.g. `[1, -2, 3]`.
    pub fn literals(&self) -> impl Iterator<Item = Literal> + '_ {
        self.values.iter().enumerate().map(|(i, &value)| {
            if value {
                Literal::Positive(Variable(i + 1))
            } else {
                Literal::Negative(Variable(i + 1))
            }
        })
    }
}

/// One `0`/`1` digit per variable.
impl Display for Model {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        for value in &self.values {
            f.write_str(if *value { "1" } else { "0" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{cnf, n, p};

    #[test]
    fn satisfies() {
        let f = cnf(3, &[&[1, 2], &[-1, 3]]);
        assert!(Model::new(vec![true, false, true]).satisfies(&f));
        assert!(!Model::new(vec![true, false, false]).satisfies(&f));
        assert!(!Model::new(vec![false, false, false]).satisfies(&f));
    }

    #[test]
    fn empty_clause_never_satisfied() {
        let f = cnf(1, &[&[]]);
        assert!(!Model::new(vec![true]).satisfies(&f));
    }

    #[test]
    fn variables_outside_model() {
        let m = Model::new(vec![true, false]);
        assert_eq!(m.get(Variable(0)), None);
        assert_eq!(m.get(Variable(3)), None);
        assert_eq!(m.get(Variable(2)), Some(false));
        assert!(!m.is_true(&p(0)));

        assert!(!m.satisfies(&cnf(3, &[&[3]])));
        assert!(!m.satisfies(&cnf(3, &[&[-3]])));
        assert!(m.satisfies(&cnf(3, &[&[3, 1]])));
    }

    #[test]
    #[should_panic(expected = "outside model")]
    fn value_outside_model_panics() {
        let _ = Model::new(vec![true]).value(Variable(0));
    }

    #[test]
    fn literals_and_display() {
        let m = Model::new(vec![true, false, true]);
        assert_eq!(m.literals().collect::<Vec<_>>(), vec![p(1), n(2), p(3)]);
        assert_eq!(m.to_string(), "101");
        assert!(m.is_true(&n(2)));
        assert!(!m.is_true(&p(2)));
    }
}
