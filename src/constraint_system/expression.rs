// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! Polynomial expressions over [`Variable`]s and the gate [`Constraint`]s
//! built from them.
//!
//! No degree bound is enforced here, callers have to stay within the degree
//! supported by the proof system.

use crate::{
    assignment::AssignmentTable,
    constraint_system::{ColumnType, Variable},
    error::Error,
};
use ark_ff::Field;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use num_traits::{One, Zero};

/// A polynomial over assignment table cells.
#[derive(derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub enum Expression<F>
where
    F: Field,
{
    /// A scalar
    Constant(F),
    /// The value of a cell
    Variable(Variable),
    /// `-e`
    Negated(Box<Expression<F>>),
    /// `a + b`
    Sum(Box<Expression<F>>, Box<Expression<F>>),
    /// `a - b`
    Difference(Box<Expression<F>>, Box<Expression<F>>),
    /// `a * b`
    Product(Box<Expression<F>>, Box<Expression<F>>),
}

impl<F> Expression<F>
where
    F: Field,
{
    /// Scalar expression.
    pub fn constant(value: F) -> Self {
        Self::Constant(value)
    }

    /// Collects every [`Variable`] referenced by the expression, in
    /// left-to-right order.
    pub fn variables(&self) -> Vec<Variable> {
        let mut vars = Vec::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut Vec<Variable>) {
        match self {
            Self::Constant(_) => {}
            Self::Variable(var) => vars.push(*var),
            Self::Negated(e) => e.collect_variables(vars),
            Self::Sum(a, b) | Self::Difference(a, b) | Self::Product(a, b) => {
                a.collect_variables(vars);
                b.collect_variables(vars);
            }
        }
    }

    /// Evaluates the expression with relative variables resolved against
    /// `row`.
    pub fn evaluate(
        &self,
        row: usize,
        assignment: &AssignmentTable<F>,
    ) -> Result<F, Error> {
        Ok(match self {
            Self::Constant(c) => *c,
            Self::Variable(var) => assignment.value_at(var, row)?,
            Self::Negated(e) => -e.evaluate(row, assignment)?,
            Self::Sum(a, b) => {
                a.evaluate(row, assignment)? + b.evaluate(row, assignment)?
            }
            Self::Difference(a, b) => {
                a.evaluate(row, assignment)? - b.evaluate(row, assignment)?
            }
            Self::Product(a, b) => {
                a.evaluate(row, assignment)? * b.evaluate(row, assignment)?
            }
        })
    }

    fn precedence(&self) -> u8 {
        match self {
            Self::Sum(..) | Self::Difference(..) => 1,
            Self::Product(..) => 2,
            Self::Negated(_) => 3,
            Self::Constant(_) | Self::Variable(_) => 4,
        }
    }

    fn fmt_operand(
        &self,
        f: &mut fmt::Formatter<'_>,
        min_precedence: u8,
    ) -> fmt::Result {
        if self.precedence() < min_precedence {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

fn fmt_constant<F: Field>(c: &F, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if Zero::is_zero(c) {
        write!(f, "0")
    } else if One::is_one(c) {
        write!(f, "1")
    } else if One::is_one(&-*c) {
        write!(f, "-1")
    } else {
        write!(f, "{}", c)
    }
}

impl<F> fmt::Display for Expression<F>
where
    F: Field,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(c) => fmt_constant(c, f),
            Self::Variable(var) => write!(f, "{}", var),
            Self::Negated(e) => {
                write!(f, "-")?;
                e.fmt_operand(f, 3)
            }
            Self::Sum(a, b) => {
                a.fmt_operand(f, 1)?;
                write!(f, " + ")?;
                b.fmt_operand(f, 1)
            }
            Self::Difference(a, b) => {
                a.fmt_operand(f, 1)?;
                write!(f, " - ")?;
                b.fmt_operand(f, 2)
            }
            Self::Product(a, b) => {
                a.fmt_operand(f, 2)?;
                write!(f, " * ")?;
                b.fmt_operand(f, 2)
            }
        }
    }
}

impl<F> From<Variable> for Expression<F>
where
    F: Field,
{
    fn from(var: Variable) -> Self {
        Self::Variable(var)
    }
}

impl<F, E> Add<E> for Expression<F>
where
    F: Field,
    E: Into<Expression<F>>,
{
    type Output = Expression<F>;

    fn add(self, rhs: E) -> Self::Output {
        Expression::Sum(Box::new(self), Box::new(rhs.into()))
    }
}

impl<F, E> Sub<E> for Expression<F>
where
    F: Field,
    E: Into<Expression<F>>,
{
    type Output = Expression<F>;

    fn sub(self, rhs: E) -> Self::Output {
        Expression::Difference(Box::new(self), Box::new(rhs.into()))
    }
}

impl<F, E> Mul<E> for Expression<F>
where
    F: Field,
    E: Into<Expression<F>>,
{
    type Output = Expression<F>;

    fn mul(self, rhs: E) -> Self::Output {
        Expression::Product(Box::new(self), Box::new(rhs.into()))
    }
}

impl<F> Neg for Expression<F>
where
    F: Field,
{
    type Output = Expression<F>;

    fn neg(self) -> Self::Output {
        Expression::Negated(Box::new(self))
    }
}

/// A polynomial that must evaluate to zero on every row its gate is enabled
/// on.
///
/// Only witness, public input and constant cells may appear in it.
#[derive(derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct Constraint<F>
where
    F: Field,
{
    expression: Expression<F>,
}

impl<F> Constraint<F>
where
    F: Field,
{
    /// Wraps `expression`, rejecting it if it references a selector column.
    pub fn new(expression: Expression<F>) -> Result<Self, Error> {
        if expression
            .variables()
            .iter()
            .any(|var| var.column_type == ColumnType::Selector)
        {
            return Err(Error::SelectorInConstraint);
        }
        Ok(Self { expression })
    }

    /// The underlying polynomial.
    pub fn expression(&self) -> &Expression<F> {
        &self.expression
    }

    /// Evaluates the constraint on `row`.
    pub fn evaluate(
        &self,
        row: usize,
        assignment: &AssignmentTable<F>,
    ) -> Result<F, Error> {
        self.expression.evaluate(row, assignment)
    }
}

impl<F> fmt::Display for Constraint<F>
where
    F: Field,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{batch_field_test, config::ArithmetizationParams};
    use ark_bls12_377::Fr as Bls12_377_scalar_field;
    use ark_bls12_381::Fr as Bls12_381_scalar_field;

    fn w<F: Field>(index: usize, rotation: i32) -> Expression<F> {
        Variable::witness(index, rotation).into()
    }

    fn test_display_parenthesizes<F>()
    where
        F: Field,
    {
        let e: Expression<F> =
            w::<F>(0, 0) - w::<F>(0, -1) * Variable::witness(1, -1);
        assert_eq!(e.to_string(), "W0[0] - W0[-1] * W1[-1]");

        let e: Expression<F> =
            w::<F>(1, 1) * (w::<F>(1, 1) - Expression::constant(F::one()));
        assert_eq!(e.to_string(), "W1[+1] * (W1[+1] - 1)");

        let e: Expression<F> = w::<F>(0, 1) - (w::<F>(1, 0) - w::<F>(0, 0));
        assert_eq!(e.to_string(), "W0[+1] - (W1[0] - W0[0])");

        let e: Expression<F> =
            -(w::<F>(0, 0) + Expression::constant(-F::one()));
        assert_eq!(e.to_string(), "-(W0[0] + -1)");
    }

    fn test_display_small_constants<F>()
    where
        F: Field,
    {
        let c = |value: F| Expression::constant(value).to_string();
        assert_eq!(c(F::zero()), "0");
        assert_eq!(c(F::one()), "1");
        assert_eq!(c(-F::one()), "-1");
        assert_eq!(c(F::from(5u64)), F::from(5u64).to_string());

        let e: Expression<F> = w::<F>(2, 0) + Expression::constant(F::zero());
        assert_eq!(e.to_string(), "W2[0] + 0");
    }

    fn test_evaluate_resolves_rotations<F>()
    where
        F: Field,
    {
        let mut table =
            AssignmentTable::<F>::new(ArithmetizationParams::default());
        table.set_witness(0, 0, F::from(3u64)).unwrap();
        table.set_witness(1, 0, F::from(7u64)).unwrap();
        table.set_witness(0, 1, F::from(21u64)).unwrap();

        let e: Expression<F> =
            w::<F>(0, 0) - w::<F>(0, -1) * Variable::witness(1, -1);
        assert_eq!(e.evaluate(1, &table).unwrap(), F::zero());
        assert_eq!(
            e.evaluate(0, &table),
            Err(Error::RowOutOfRange { row: -1 })
        );
    }

    fn test_constraint_rejects_selectors<F>()
    where
        F: Field,
    {
        let e: Expression<F> = w::<F>(0, 0) * Variable::selector(0, 0);
        assert_eq!(Constraint::new(e), Err(Error::SelectorInConstraint));

        let e: Expression<F> = w::<F>(0, 0) * Variable::public_input(0, 0);
        let constraint = Constraint::new(e).unwrap();
        assert_eq!(constraint.expression().variables().len(), 2);
    }

    // Bls12-381 tests
    batch_field_test!(
        [
            test_display_parenthesizes,
            test_display_small_constants,
            test_evaluate_resolves_rotations,
            test_constraint_rejects_selectors
        ],
        [] => Bls12_381_scalar_field
    );

    // Bls12-377 tests
    batch_field_test!(
        [
            test_display_parenthesizes,
            test_display_small_constants,
            test_evaluate_resolves_rotations,
            test_constraint_rejects_selectors
        ],
        [] => Bls12_377_scalar_field
    );
}
