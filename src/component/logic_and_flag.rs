// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! Logic AND flag gadget.
//!
//! Given two cells `x` and `y`, produces a boolean flag `f` which is one iff
//! both are non-zero. The gadget witnesses
//!
//! ```text
//! p = x * y
//! v = p^-1, or 0 when p = 0
//! d = v - p
//! f = p * v
//! ```
//!
//! and constrains `p = x * y`, `f * (f - 1) = 0`, `f = p * v` and
//! `(v - p) * (f - 1) = 0`. The last one forces `v = p` whenever `f` is zero,
//! so a zero product cannot be paired with an arbitrary `v`.
//!
//! The six values `x, y, p, v, d, f` are packed row-major over 2, 3 or 5
//! witness columns. The 5 column layout drops `d` and keeps the last
//! constraint in its product form.

use crate::{
    assignment::AssignmentTable,
    circuit::Circuit,
    component::{Component, ComponentLayout, ComponentShape, GateComponent},
    constraint_system::{Constraint, CopyConstraint, Expression, Variable},
    error::Error,
};
use ark_ff::Field;
use tracing::trace;

/// Amount of values the 2 and 3 column layouts pack.
const PACKED_VALUES: usize = 6;

/// Supported packings of the gadget.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum LogicAndFlagLayout {
    /// Three rows of two cells, selector on the middle row
    TwoColumns,
    /// Two rows of three cells
    ThreeColumns,
    /// One row of five cells
    FiveColumns,
}

impl LogicAndFlagLayout {
    /// Amount of witness columns.
    pub fn witness_amount(&self) -> usize {
        match self {
            Self::TwoColumns => 2,
            Self::ThreeColumns => 3,
            Self::FiveColumns => 5,
        }
    }

    /// Amount of rows one instance occupies.
    pub fn rows_amount(&self) -> usize {
        match self {
            Self::FiveColumns => 1,
            _ => PACKED_VALUES / self.witness_amount(),
        }
    }

    /// Row the selector is enabled on, relative to the start row.
    pub fn selector_offset(&self) -> usize {
        (self.rows_amount() - 1) / 2
    }

    fn placement(&self) -> Placement {
        let width = self.witness_amount();
        let cell = |slot: usize| Cell {
            column: slot % width,
            row: slot / width,
        };
        let (d, f) = match self {
            Self::FiveColumns => (None, cell(4)),
            _ => (Some(cell(4)), cell(5)),
        };
        Placement {
            x: cell(0),
            y: cell(1),
            p: cell(2),
            v: cell(3),
            d,
            f,
        }
    }
}

impl TryFrom<usize> for LogicAndFlagLayout {
    type Error = Error;

    fn try_from(witness_amount: usize) -> Result<Self, Self::Error> {
        match witness_amount {
            2 => Ok(Self::TwoColumns),
            3 => Ok(Self::ThreeColumns),
            5 => Ok(Self::FiveColumns),
            amount => Err(Error::UnsupportedWitnessAmount { amount }),
        }
    }
}

/// Local position of a value: a witness position of the layout and a row
/// offset from the start row.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Cell {
    column: usize,
    row: usize,
}

#[derive(Clone, Copy, Debug)]
struct Placement {
    x: Cell,
    y: Cell,
    p: Cell,
    v: Cell,
    d: Option<Cell>,
    f: Cell,
}

/// Cells the gadget is applied to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogicAndFlagInput {
    /// First operand
    pub x: Variable,
    /// Second operand
    pub y: Variable,
}

/// Cell holding the flag.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogicAndFlagOutput {
    /// One iff both operands are non-zero
    pub output: Variable,
}

/// Logic AND flag component.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LogicAndFlag {
    layout: ComponentLayout,
    variant: LogicAndFlagLayout,
}

impl LogicAndFlag {
    /// Component name used in its [`ComponentShape`].
    pub const NAME: &'static str = "logic_and_flag";

    /// Lays the gadget out on `witness`. Supports 2, 3 or 5 columns.
    pub fn new<I>(witness: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = usize>,
    {
        let layout =
            ComponentLayout::from_witness(witness.into_iter().collect())?;
        let variant = LogicAndFlagLayout::try_from(layout.witness_amount())?;
        Ok(Self { layout, variant })
    }

    /// Lays `variant` out on an explicit `layout`.
    pub fn with_layout(
        variant: LogicAndFlagLayout,
        layout: ComponentLayout,
    ) -> Result<Self, Error> {
        if layout.witness_amount() != variant.witness_amount() {
            return Err(Error::WitnessColumnsMismatch {
                expected: variant.witness_amount(),
                got: layout.witness_amount(),
            });
        }
        Ok(Self { layout, variant })
    }

    /// Packing of this instance.
    pub fn variant(&self) -> LogicAndFlagLayout {
        self.variant
    }

    /// Relative reference to `cell`, seen from the selector row.
    fn relative(&self, cell: Cell) -> Variable {
        let rotation = cell.row as i32 - self.variant.selector_offset() as i32;
        Variable::witness(self.layout.w(cell.column), rotation)
    }

    fn absolute(&self, cell: Cell, start_row: usize) -> Variable {
        Variable::absolute_witness(
            self.layout.w(cell.column),
            (start_row + cell.row) as i32,
        )
    }

    /// Gate polynomials of this instance.
    pub fn constraints<F>(&self) -> Result<Vec<Constraint<F>>, Error>
    where
        F: Field,
    {
        let Placement { x, y, p, v, d, f } = self.variant.placement();
        let cell = |c: Cell| Expression::<F>::from(self.relative(c));
        let one = || Expression::<F>::constant(F::one());

        // The 3 column packing names v before p.
        let flag = match self.variant {
            LogicAndFlagLayout::ThreeColumns => cell(v) * cell(p),
            _ => cell(p) * cell(v),
        };
        let mut constraints = vec![
            cell(p) - cell(x) * cell(y),
            cell(f) * (cell(f) - one()),
            cell(f) - flag,
        ];
        match d {
            Some(d) => {
                constraints.push(cell(d) - (cell(v) - cell(p)));
                constraints.push(cell(d) * (cell(f) - one()));
            }
            None => constraints.push((cell(v) - cell(p)) * (cell(f) - one())),
        }
        constraints.into_iter().map(Constraint::new).collect()
    }
}

impl Component for LogicAndFlag {
    type Output = LogicAndFlagOutput;

    fn layout(&self) -> &ComponentLayout {
        &self.layout
    }

    fn gates_amount(&self) -> usize {
        1
    }

    fn rows_amount(&self) -> usize {
        self.variant.rows_amount()
    }

    fn selector_offset(&self) -> usize {
        self.variant.selector_offset()
    }

    fn shape(&self) -> ComponentShape {
        ComponentShape::new(Self::NAME, &self.layout, Vec::new())
    }

    fn result(&self, start_row: usize) -> Self::Output {
        LogicAndFlagOutput {
            output: self.absolute(self.variant.placement().f, start_row),
        }
    }
}

impl<F> GateComponent<F> for LogicAndFlag
where
    F: Field,
{
    type Input = LogicAndFlagInput;

    fn generate_assignments(
        &self,
        assignment: &mut AssignmentTable<F>,
        input: &Self::Input,
        start_row: usize,
    ) -> Result<Self::Output, Error> {
        let x = assignment.var_value(&input.x)?;
        let y = assignment.var_value(&input.y)?;
        let p = x * y;
        // Zero has no inverse and maps to itself.
        let v = p.inverse().unwrap_or(p);
        let f = p * v;

        let placement = self.variant.placement();
        let mut values = vec![
            (placement.x, x),
            (placement.y, y),
            (placement.p, p),
            (placement.v, v),
        ];
        if let Some(d) = placement.d {
            values.push((d, v - p));
        }
        values.push((placement.f, f));

        for (cell, value) in values {
            assignment.set_witness(
                self.layout.w(cell.column),
                start_row + cell.row,
                value,
            )?;
        }
        trace!(start_row, flag = %f, "logic and flag assigned");
        Ok(self.result(start_row))
    }

    fn generate_gates<C>(
        &self,
        circuit: &mut C,
        _assignment: &AssignmentTable<F>,
        _input: &Self::Input,
        first_selector_index: usize,
    ) -> Result<(), Error>
    where
        C: Circuit<F>,
    {
        let selector_index = circuit.add_gate(self.constraints()?);
        debug_assert_eq!(selector_index, first_selector_index);
        Ok(())
    }

    fn generate_copy_constraints<C>(
        &self,
        circuit: &mut C,
        _assignment: &AssignmentTable<F>,
        input: &Self::Input,
        start_row: usize,
    ) -> Result<(), Error>
    where
        C: Circuit<F>,
    {
        let placement = self.variant.placement();
        circuit.add_copy_constraint(CopyConstraint::new(
            self.absolute(placement.x, start_row),
            input.x,
        ));
        circuit.add_copy_constraint(CopyConstraint::new(
            self.absolute(placement.y, start_row),
            input.y,
        ));
        Ok(())
    }
}
