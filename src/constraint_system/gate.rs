// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! Gates, lookup gates and copy constraints stored by the
//! [`ConstraintSystem`](super::ConstraintSystem).

use crate::{
    assignment::AssignmentTable,
    constraint_system::{ColumnType, Constraint, Expression, Variable},
    error::Error,
};
use ark_ff::Field;

/// A set of constraints enforced together on every row where the selector
/// `selector_index` is enabled.
#[derive(derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct Gate<F>
where
    F: Field,
{
    /// Selector enabling this gate
    pub selector_index: usize,
    /// Constraints of the gate
    pub constraints: Vec<Constraint<F>>,
}

/// Asserts that the tuple `lookup_input` is a row of the table reserved
/// under `table_id`.
#[derive(derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct LookupConstraint<F>
where
    F: Field,
{
    /// Reserved index of the table
    pub table_id: usize,
    /// One expression per table column
    pub lookup_input: Vec<Expression<F>>,
}

impl<F> LookupConstraint<F>
where
    F: Field,
{
    /// Builds a lookup constraint, rejecting selector variables in the
    /// looked up expressions.
    pub fn new(
        table_id: usize,
        lookup_input: Vec<Expression<F>>,
    ) -> Result<Self, Error> {
        let has_selector = lookup_input.iter().any(|e| {
            e.variables()
                .iter()
                .any(|var| var.column_type == ColumnType::Selector)
        });
        if has_selector {
            return Err(Error::SelectorInConstraint);
        }
        Ok(Self {
            table_id,
            lookup_input,
        })
    }

    /// Evaluates the looked up tuple on `row`.
    pub fn evaluate(
        &self,
        row: usize,
        assignment: &AssignmentTable<F>,
    ) -> Result<Vec<F>, Error> {
        self.lookup_input
            .iter()
            .map(|e| e.evaluate(row, assignment))
            .collect()
    }
}

/// Lookup counterpart of [`Gate`].
#[derive(derivative::Derivative)]
#[derivative(
    Clone(bound = ""),
    Debug(bound = ""),
    Eq(bound = ""),
    PartialEq(bound = "")
)]
pub struct LookupGate<F>
where
    F: Field,
{
    /// Selector enabling this gate
    pub selector_index: usize,
    /// Lookup constraints of the gate
    pub constraints: Vec<LookupConstraint<F>>,
}

/// Equality between two cells, enforced by the permutation argument.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CopyConstraint {
    /// First endpoint
    pub first: Variable,
    /// Second endpoint
    pub second: Variable,
}

impl CopyConstraint {
    /// Creates a new copy constraint between `first` and `second`.
    pub fn new(first: Variable, second: Variable) -> Self {
        Self { first, second }
    }
}

impl From<(Variable, Variable)> for CopyConstraint {
    fn from((first, second): (Variable, Variable)) -> Self {
        Self::new(first, second)
    }
}
