// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! Reusable gate components.
//!
//! A component is a parameterized gadget that knows how to fill its cells
//! ([`GateComponent::generate_assignments`]) and how to describe the
//! constraints over them ([`GateComponent::generate_gates`] and
//! [`GateComponent::generate_copy_constraints`]). [`generate_circuit`]
//! compiles one instance into a circuit, reusing the gates of earlier
//! instances with the same [`ComponentShape`]. Geometry that does not depend
//! on the field lives on the [`Component`] supertrait.

pub mod logic_and_flag;

pub use logic_and_flag::{
    LogicAndFlag, LogicAndFlagInput, LogicAndFlagLayout, LogicAndFlagOutput,
};

use crate::{assignment::AssignmentTable, circuit::Circuit, error::Error};
use ark_ff::Field;
use tracing::debug;

/// Mapping from a component's local column positions to the columns of the
/// assignment table.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ComponentLayout {
    witness: Vec<usize>,
    constant: Vec<usize>,
    public_input: Vec<usize>,
}

impl ComponentLayout {
    /// Builds a layout. At least one witness column is required.
    pub fn new(
        witness: Vec<usize>,
        constant: Vec<usize>,
        public_input: Vec<usize>,
    ) -> Result<Self, Error> {
        if witness.is_empty() {
            return Err(Error::EmptyWitnessColumns);
        }
        Ok(Self {
            witness,
            constant,
            public_input,
        })
    }

    /// Layout with witness columns only.
    pub fn from_witness(witness: Vec<usize>) -> Result<Self, Error> {
        Self::new(witness, Vec::new(), Vec::new())
    }

    /// Table column of local witness position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below [`Self::witness_amount`].
    pub fn w(&self, i: usize) -> usize {
        self.witness[i]
    }

    /// Table column of local constant position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below [`Self::constant_amount`].
    pub fn c(&self, i: usize) -> usize {
        self.constant[i]
    }

    /// Table column of local public input position `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not below [`Self::public_input_amount`].
    pub fn pi(&self, i: usize) -> usize {
        self.public_input[i]
    }

    /// Witness columns, in local order.
    pub fn witness_columns(&self) -> &[usize] {
        &self.witness
    }

    /// Amount of witness columns.
    pub fn witness_amount(&self) -> usize {
        self.witness.len()
    }

    /// Amount of constant columns.
    pub fn constant_amount(&self) -> usize {
        self.constant.len()
    }

    /// Amount of public input columns.
    pub fn public_input_amount(&self) -> usize {
        self.public_input.len()
    }
}

/// Identity of a component's gates.
///
/// Two instances with equal shapes produce identical gate polynomials and
/// can share selectors. The witness columns are part of the shape since the
/// gate polynomials name them.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ComponentShape {
    name: &'static str,
    witness: Vec<usize>,
    constant_amount: usize,
    public_input_amount: usize,
    params: Vec<usize>,
}

impl ComponentShape {
    /// Shape of the component `name` laid out on `layout`. `params` holds
    /// any further parameter the gates depend on.
    pub fn new(
        name: &'static str,
        layout: &ComponentLayout,
        params: Vec<usize>,
    ) -> Self {
        Self {
            name,
            witness: layout.witness.clone(),
            constant_amount: layout.constant_amount(),
            public_input_amount: layout.public_input_amount(),
            params,
        }
    }

    /// Component name.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

/// Field independent geometry of a component.
///
/// Everything the selector cache and the caller need to place an instance,
/// without naming the field the gates are written over.
pub trait Component {
    /// Cells the component produces.
    type Output;

    /// Column layout of this instance.
    fn layout(&self) -> &ComponentLayout;

    /// Amount of gates the component declares.
    fn gates_amount(&self) -> usize;

    /// Amount of rows one instance occupies.
    fn rows_amount(&self) -> usize;

    /// Row, relative to the start row, the first selector is enabled on.
    fn selector_offset(&self) -> usize {
        0
    }

    /// Selector cache key of this instance.
    fn shape(&self) -> ComponentShape;

    /// Output cells of an instance placed at `start_row`.
    fn result(&self, start_row: usize) -> Self::Output;
}

/// A gadget that can be compiled into a [`Circuit`] any number of times.
pub trait GateComponent<F>: Component
where
    F: Field,
{
    /// Cells the component reads.
    type Input;

    /// Computes and writes the witness values of an instance placed at
    /// `start_row`.
    fn generate_assignments(
        &self,
        assignment: &mut AssignmentTable<F>,
        input: &Self::Input,
        start_row: usize,
    ) -> Result<Self::Output, Error>;

    /// Adds the component's gates to `circuit`. The first gate must land on
    /// `first_selector_index`.
    fn generate_gates<C>(
        &self,
        circuit: &mut C,
        assignment: &AssignmentTable<F>,
        input: &Self::Input,
        first_selector_index: usize,
    ) -> Result<(), Error>
    where
        C: Circuit<F>;

    /// Wires the instance placed at `start_row` to its inputs.
    fn generate_copy_constraints<C>(
        &self,
        circuit: &mut C,
        assignment: &AssignmentTable<F>,
        input: &Self::Input,
        start_row: usize,
    ) -> Result<(), Error>
    where
        C: Circuit<F>;
}

/// Compiles an instance of `component` placed at `start_row` into
/// `circuit`.
///
/// Gates are only generated the first time a shape is seen by `assignment`;
/// later instances enable the cached selector on their own row.
pub fn generate_circuit<F, G, C>(
    component: &G,
    circuit: &mut C,
    assignment: &mut AssignmentTable<F>,
    input: &G::Input,
    start_row: usize,
) -> Result<G::Output, Error>
where
    F: Field,
    G: GateComponent<F>,
    C: Circuit<F>,
{
    let shape = component.shape();
    let first_selector_index = match assignment.find_selector(&shape) {
        Some(index) => {
            debug!(
                component = shape.name(),
                selector_index = index,
                "selector reused"
            );
            index
        }
        None => {
            let index = assignment.allocate_selector(
                shape,
                circuit.next_selector_index(),
                component.gates_amount(),
            )?;
            component.generate_gates(circuit, assignment, input, index)?;
            index
        }
    };
    assignment.enable_selector(
        first_selector_index,
        start_row + component.selector_offset(),
    )?;
    component.generate_copy_constraints(circuit, assignment, input, start_row)?;
    Ok(component.result(start_row))
}
