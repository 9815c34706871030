use super::ProblemError;
use crate::algebra::Rational;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Direction of optimization
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sense {
    #[default]
    Maximize,
    Minimize,
}

impl FromStr for Sense {
    type Err = ProblemError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "max" | "maximize" => Ok(Sense::Maximize),
            "min" | "minimize" => Ok(Sense::Minimize),
            _ => Err(ProblemError::UnknownSense(s.to_string())),
        }
    }
}

impl fmt::Display for Sense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sense::Maximize => write!(f, "maximize"),
            Sense::Minimize => write!(f, "minimize"),
        }
    }
}

/// Relational operator of a constraint row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConstraintType {
    /// `a'x <= b`
    LessEqual,
    /// `a'x >= b`
    GreaterEqual,
    /// `a'x = b`.  Accepted in a [`Problem`] but rejected by the solver.
    Equal,
}

impl FromStr for ConstraintType {
    type Err = ProblemError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "<=" | "≤" => Ok(ConstraintType::LessEqual),
            ">=" | "≥" => Ok(ConstraintType::GreaterEqual),
            "=" | "==" => Ok(ConstraintType::Equal),
            _ => Err(ProblemError::UnknownConstraintType(s.to_string())),
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintType::LessEqual => write!(f, "<="),
            ConstraintType::GreaterEqual => write!(f, ">="),
            ConstraintType::Equal => write!(f, "="),
        }
    }
}

/// A single linear constraint `coefficients' x  (<=|>=|=)  rhs`
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Constraint {
    pub coefficients: Vec<Rational>,
    pub ctype: ConstraintType,
    pub rhs: Rational,
}

/// An integer linear program
///
/// ```text
///  maximize / minimize   c'x
///  subject to            a_i'x  (<=|>=)  b_i
///                        x >= 0
///                        x_j integer for j in integer_vars
/// ```
///
/// Problems are assembled with a consuming builder style:
///
/// ```
/// use gomory::solver::*;
///
/// let problem = Problem::new([1, 1], Sense::Maximize)
///     .add_constraint([1, 0], ConstraintType::LessEqual, 2)
///     .add_constraint([0, 1], ConstraintType::LessEqual, 3)
///     .with_integer_vars([0, 1]);
///
/// assert_eq!(problem.num_variables(), 2);
/// assert!(problem.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Problem {
    pub objective: Vec<Rational>,
    pub sense: Sense,
    pub constraints: Vec<Constraint>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub integer_vars: BTreeSet<usize>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub var_names: Option<Vec<String>>,
}

fn to_rationals<T: Into<Rational>>(values: impl IntoIterator<Item = T>) -> Vec<Rational> {
    values.into_iter().map(Into::into).collect()
}

impl Problem {
    pub fn new<T: Into<Rational>>(objective: impl IntoIterator<Item = T>, sense: Sense) -> Self {
        Self {
            objective: to_rationals(objective),
            sense,
            constraints: Vec::new(),
            integer_vars: BTreeSet::new(),
            var_names: None,
        }
    }

    /// Append a constraint row
    pub fn add_constraint<T: Into<Rational>>(
        mut self,
        coefficients: impl IntoIterator<Item = T>,
        ctype: ConstraintType,
        rhs: impl Into<Rational>,
    ) -> Self {
        self.constraints.push(Constraint {
            coefficients: to_rationals(coefficients),
            ctype,
            rhs: rhs.into(),
        });
        self
    }

    /// Require the variables at the given (0-based) indices to be integral
    pub fn with_integer_vars(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.integer_vars.extend(indices);
        self
    }

    /// Display names for the structural variables
    pub fn with_var_names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.var_names = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_integer_var(&self, index: usize) -> bool {
        self.integer_vars.contains(&index)
    }

    /// Copy of the problem with every integrality requirement dropped
    pub fn relaxed(&self) -> Problem {
        Problem {
            integer_vars: BTreeSet::new(),
            ..self.clone()
        }
    }

    /// Names of the structural variables, `x1..xn` unless given explicitly
    pub fn variable_names(&self) -> Vec<String> {
        match &self.var_names {
            Some(names) => names.clone(),
            None => (1..=self.num_variables()).map(|j| format!("x{}", j)).collect(),
        }
    }

    /// Check dimensions and index ranges.  Equality rows are accepted here
    /// and rejected later when the initial tableau is built.
    pub fn validate(&self) -> Result<(), ProblemError> {
        let n = self.num_variables();
        if n == 0 {
            return Err(ProblemError::EmptyObjective);
        }

        for (row, con) in self.constraints.iter().enumerate() {
            if con.coefficients.len() != n {
                return Err(ProblemError::ConstraintLength {
                    row,
                    expected: n,
                    found: con.coefficients.len(),
                });
            }
        }

        if let Some(&index) = self.integer_vars.iter().find(|&&j| j >= n) {
            return Err(ProblemError::IntegerVarOutOfRange { index, num_vars: n });
        }

        if let Some(names) = &self.var_names {
            if names.len() != n {
                return Err(ProblemError::NameCount {
                    expected: n,
                    found: names.len(),
                });
            }
        }

        Ok(())
    }

    /// Objective coefficients for the equivalent maximization problem
    pub(crate) fn max_sense_objective(&self) -> Vec<Rational> {
        match self.sense {
            Sense::Maximize => self.objective.clone(),
            Sense::Minimize => self.objective.iter().map(|c| -c).collect(),
        }
    }

    /// Index of the first equality row, if any
    pub(crate) fn first_equality(&self) -> Option<usize> {
        self.constraints
            .iter()
            .position(|c| c.ctype == ConstraintType::Equal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn knapsack() -> Problem {
        Problem::new([6, 8, 7], Sense::Maximize)
            .add_constraint([4, 6, 8], ConstraintType::LessEqual, 14)
            .add_constraint([1, 0, 0], ConstraintType::LessEqual, 1)
            .with_integer_vars(0..3)
    }

    #[test]
    fn test_builder_counts() {
        let p = knapsack();
        assert_eq!(p.num_variables(), 3);
        assert_eq!(p.num_constraints(), 2);
        assert!(p.is_integer_var(2));
        assert!(!p.is_integer_var(3));
        assert!(p.relaxed().integer_vars.is_empty());
        assert_eq!(p.relaxed().constraints, p.constraints);
    }

    #[test]
    fn test_default_names() {
        assert_eq!(knapsack().variable_names(), vec!["x1", "x2", "x3"]);
        let p = knapsack().with_var_names(["a", "b", "c"]);
        assert_eq!(p.variable_names(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_validate() {
        assert!(knapsack().validate().is_ok());

        let p = knapsack().add_constraint([1, 1], ConstraintType::LessEqual, 1);
        assert_eq!(
            p.validate(),
            Err(ProblemError::ConstraintLength {
                row: 2,
                expected: 3,
                found: 2
            })
        );

        let p = knapsack().with_integer_vars([5]);
        assert_eq!(
            p.validate(),
            Err(ProblemError::IntegerVarOutOfRange {
                index: 5,
                num_vars: 3
            })
        );

        let p = knapsack().with_var_names(["a"]);
        assert!(matches!(p.validate(), Err(ProblemError::NameCount { .. })));

        let p = Problem::new(Vec::<i32>::new(), Sense::Minimize);
        assert_eq!(p.validate(), Err(ProblemError::EmptyObjective));
    }

    #[test]
    fn test_parse_sense_and_type() {
        assert_eq!("max".parse::<Sense>(), Ok(Sense::Maximize));
        assert_eq!("Minimize".parse::<Sense>(), Ok(Sense::Minimize));
        assert!("up".parse::<Sense>().is_err());
        assert_eq!("<=".parse::<ConstraintType>(), Ok(ConstraintType::LessEqual));
        assert_eq!(">=".parse::<ConstraintType>(), Ok(ConstraintType::GreaterEqual));
        assert_eq!("=".parse::<ConstraintType>(), Ok(ConstraintType::Equal));
        assert!("<".parse::<ConstraintType>().is_err());
    }

    #[test]
    fn test_minimize_objective_negated() {
        let p = Problem::new([3, -2], Sense::Minimize);
        assert_eq!(
            p.max_sense_objective(),
            vec![Rational::from(-3), Rational::from(2)]
        );
        assert_eq!(p.first_equality(), None);
    }
}
