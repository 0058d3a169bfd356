// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! The assignment table holds the cell values of a circuit: witness, public
//! input and constant columns, plus the rows every selector is enabled on.
//!
//! It also remembers which selector each component shape was compiled
//! under, so that instantiating the same component twice reuses its gates.

use crate::{
    component::ComponentShape,
    config::ArithmetizationParams,
    constraint_system::{ColumnType, Variable},
    error::Error,
};
use ark_ff::Field;
use hashbrown::HashMap;
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Column-major table of field elements. Cells that were never written read
/// as zero.
#[derive(derivative::Derivative)]
#[derivative(Clone(bound = ""), Debug(bound = ""))]
pub struct AssignmentTable<F>
where
    F: Field,
{
    params: ArithmetizationParams,
    witness: Vec<Vec<F>>,
    public_input: Vec<Vec<F>>,
    constant: Vec<Vec<F>>,
    /// Enabled rows, per selector column.
    selectors: Vec<BTreeSet<usize>>,
    /// First selector index each compiled component shape owns.
    selector_cache: HashMap<ComponentShape, usize>,
}

impl<F> AssignmentTable<F>
where
    F: Field,
{
    /// Creates an empty table with the column amounts of `params`.
    pub fn new(params: ArithmetizationParams) -> Self {
        Self {
            params,
            witness: vec![Vec::new(); params.witness_columns()],
            public_input: vec![Vec::new(); params.public_input_columns()],
            constant: vec![Vec::new(); params.constant_columns()],
            selectors: vec![BTreeSet::new(); params.selector_columns()],
            selector_cache: HashMap::new(),
        }
    }

    /// Column amounts of the table.
    pub fn params(&self) -> &ArithmetizationParams {
        &self.params
    }

    fn columns(&self, column_type: ColumnType) -> Option<&Vec<Vec<F>>> {
        match column_type {
            ColumnType::Witness => Some(&self.witness),
            ColumnType::PublicInput => Some(&self.public_input),
            ColumnType::Constant => Some(&self.constant),
            ColumnType::Selector => None,
        }
    }

    fn columns_mut(
        &mut self,
        column_type: ColumnType,
    ) -> Option<&mut Vec<Vec<F>>> {
        match column_type {
            ColumnType::Witness => Some(&mut self.witness),
            ColumnType::PublicInput => Some(&mut self.public_input),
            ColumnType::Constant => Some(&mut self.constant),
            ColumnType::Selector => None,
        }
    }

    fn column_amount(&self, column_type: ColumnType) -> usize {
        match column_type {
            ColumnType::Witness => self.params.witness_columns(),
            ColumnType::PublicInput => self.params.public_input_columns(),
            ColumnType::Constant => self.params.constant_columns(),
            ColumnType::Selector => self.params.selector_columns(),
        }
    }

    fn out_of_range(&self, column_type: ColumnType, index: usize) -> Error {
        Error::ColumnOutOfRange {
            column_type,
            index,
            available: self.column_amount(column_type),
        }
    }

    /// Reads the cell at (`index`, `row`) of a column of `column_type`.
    ///
    /// Selector cells read one on enabled rows and zero elsewhere.
    pub fn get(
        &self,
        column_type: ColumnType,
        index: usize,
        row: usize,
    ) -> Result<F, Error> {
        if column_type == ColumnType::Selector {
            if index >= self.selectors.len() {
                return Err(self.out_of_range(column_type, index));
            }
            return Ok(if self.is_selector_enabled(index, row) {
                F::one()
            } else {
                F::zero()
            });
        }
        self.columns(column_type)
            .and_then(|columns| columns.get(index))
            .map(|column| column.get(row).copied().unwrap_or_else(F::zero))
            .ok_or_else(|| self.out_of_range(column_type, index))
    }

    /// Writes `value` into the cell at (`index`, `row`). The column grows as
    /// needed. Selector columns are driven by [`Self::enable_selector`].
    pub fn set(
        &mut self,
        column_type: ColumnType,
        index: usize,
        row: usize,
        value: F,
    ) -> Result<(), Error> {
        let error = self.out_of_range(column_type, index);
        let column = self
            .columns_mut(column_type)
            .and_then(|columns| columns.get_mut(index))
            .ok_or(error)?;
        if column.len() <= row {
            column.resize(row + 1, F::zero());
        }
        column[row] = value;
        trace!(?column_type, index, row, "cell assigned");
        Ok(())
    }

    /// Witness cell at (`index`, `row`).
    pub fn witness(&self, index: usize, row: usize) -> Result<F, Error> {
        self.get(ColumnType::Witness, index, row)
    }

    /// Sets the witness cell at (`index`, `row`).
    pub fn set_witness(
        &mut self,
        index: usize,
        row: usize,
        value: F,
    ) -> Result<(), Error> {
        self.set(ColumnType::Witness, index, row, value)
    }

    /// Public input cell at (`index`, `row`).
    pub fn public_input(&self, index: usize, row: usize) -> Result<F, Error> {
        self.get(ColumnType::PublicInput, index, row)
    }

    /// Sets the public input cell at (`index`, `row`).
    pub fn set_public_input(
        &mut self,
        index: usize,
        row: usize,
        value: F,
    ) -> Result<(), Error> {
        self.set(ColumnType::PublicInput, index, row, value)
    }

    /// Constant cell at (`index`, `row`).
    pub fn constant(&self, index: usize, row: usize) -> Result<F, Error> {
        self.get(ColumnType::Constant, index, row)
    }

    /// Sets the constant cell at (`index`, `row`).
    pub fn set_constant(
        &mut self,
        index: usize,
        row: usize,
        value: F,
    ) -> Result<(), Error> {
        self.set(ColumnType::Constant, index, row, value)
    }

    /// Value of `var` evaluated on `row`.
    pub fn value_at(&self, var: &Variable, row: usize) -> Result<F, Error> {
        let resolved = var.resolve_row(row);
        let row = usize::try_from(resolved)
            .map_err(|_| Error::RowOutOfRange { row: resolved })?;
        self.get(var.column_type, var.index, row)
    }

    /// Value of `var` on its own row: the absolute row, or the rotation for
    /// relative variables.
    pub fn var_value(&self, var: &Variable) -> Result<F, Error> {
        self.value_at(var, 0)
    }

    /// Enables selector `index` on `row`.
    pub fn enable_selector(
        &mut self,
        index: usize,
        row: usize,
    ) -> Result<(), Error> {
        let available = self.selectors.len();
        let rows = self
            .selectors
            .get_mut(index)
            .ok_or(Error::SelectorOutOfRange { index, available })?;
        rows.insert(row);
        trace!(selector_index = index, row, "selector enabled");
        Ok(())
    }

    /// Whether selector `index` is enabled on `row`.
    pub fn is_selector_enabled(&self, index: usize, row: usize) -> bool {
        self.selectors
            .get(index)
            .map_or(false, |rows| rows.contains(&row))
    }

    /// Rows selector `index` is enabled on, in ascending order.
    pub fn enabled_rows(
        &self,
        index: usize,
    ) -> impl Iterator<Item = usize> + '_ {
        self.selectors.get(index).into_iter().flatten().copied()
    }

    /// Amount of used rows: one past the highest written cell or enabled
    /// selector row.
    pub fn rows_amount(&self) -> usize {
        let cells = self
            .witness
            .iter()
            .chain(&self.public_input)
            .chain(&self.constant)
            .map(Vec::len);
        let selectors = self
            .selectors
            .iter()
            .map(|rows| rows.iter().next_back().map_or(0, |row| row + 1));
        cells.chain(selectors).max().unwrap_or(0)
    }

    /// First selector index `shape` was compiled under, if any.
    pub fn find_selector(&self, shape: &ComponentShape) -> Option<usize> {
        self.selector_cache.get(shape).copied()
    }

    /// Records that `shape` owns the `gates_amount` selectors starting at
    /// `first_selector_index`.
    pub fn allocate_selector(
        &mut self,
        shape: ComponentShape,
        first_selector_index: usize,
        gates_amount: usize,
    ) -> Result<usize, Error> {
        let available = self.selectors.len();
        let last = first_selector_index + gates_amount.saturating_sub(1);
        if last >= available {
            return Err(Error::SelectorOutOfRange {
                index: last,
                available,
            });
        }
        debug!(
            component = shape.name(),
            first_selector_index, gates_amount, "selector allocated"
        );
        self.selector_cache.insert(shape, first_selector_index);
        Ok(first_selector_index)
    }

    /// Amount of component shapes with an allocated selector.
    pub fn allocated_shapes(&self) -> usize {
        self.selector_cache.len()
    }
}
