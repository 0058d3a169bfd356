// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! The [`ConstraintSystem`] is the ground truth of a circuit: it owns the
//! gates, lookup gates, copy constraints and lookup tables, and hands out
//! selector indices.
//!
//! It is mutated monotonically while gadgets are compiled into it. Several
//! [`CircuitProxy`](super::CircuitProxy) overlays may share it through a
//! [`SharedCircuit`] handle.

use crate::{
    circuit::Circuit,
    constraint_system::{
        export, Constraint, CopyConstraint, Gate, LookupConstraint,
        LookupGate,
    },
    lookup::LookupTableDefinition,
};
use ark_ff::Field;
use core::cell::{Ref, RefCell};
use indexmap::IndexMap;
use std::io;
use std::rc::Rc;
use tracing::{debug, trace, warn};

/// Shared ownership handle to a [`ConstraintSystem`].
///
/// The handle is `!Send`: all mutations happen on the thread that builds
/// the circuit.
pub type SharedCircuit<F> = Rc<RefCell<ConstraintSystem<F>>>;

/// The ConstraintSystem stores the gates, lookup gates, copy constraints
/// and lookup tables of one circuit.
///
/// Gates and lookup gates draw their selector indices from a single,
/// strictly increasing counter. All containers are append-only, so indices
/// handed out stay valid for the lifetime of the system.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""), Default(bound = ""))]
pub struct ConstraintSystem<F>
where
    F: Field,
{
    gates: Vec<Gate<F>>,
    lookup_gates: Vec<LookupGate<F>>,
    copy_constraints: Vec<CopyConstraint>,

    /// Registered definitions, in registration order.
    lookup_tables: Vec<Rc<LookupTableDefinition<F>>>,
    /// Name to stable table index.
    reserved_indices: IndexMap<String, usize>,
    /// Name to definition, one per name.
    reserved_tables: IndexMap<String, Rc<LookupTableDefinition<F>>>,

    next_selector_index: usize,
}

impl<F> ConstraintSystem<F>
where
    F: Field,
{
    /// Generates a new empty `ConstraintSystem`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the system behind a [`SharedCircuit`] handle.
    pub fn into_shared(self) -> SharedCircuit<F> {
        Rc::new(RefCell::new(self))
    }

    /// Gates, ordered by selector index.
    pub fn gates(&self) -> &[Gate<F>] {
        &self.gates
    }

    /// Position of the gate with `selector_index` in [`Self::gates`].
    pub fn gate_position(&self, selector_index: usize) -> Option<usize> {
        self.gates
            .binary_search_by_key(&selector_index, |gate| gate.selector_index)
            .ok()
    }

    /// The gate enabled by `selector_index`, if it is a plain gate.
    pub fn gate(&self, selector_index: usize) -> Option<&Gate<F>> {
        self.gate_position(selector_index).map(|i| &self.gates[i])
    }

    /// Lookup gates, ordered by selector index.
    pub fn lookup_gates(&self) -> &[LookupGate<F>] {
        &self.lookup_gates
    }

    /// The lookup gate enabled by `selector_index`, if any.
    pub fn lookup_gate(&self, selector_index: usize) -> Option<&LookupGate<F>> {
        self.lookup_gates
            .binary_search_by_key(&selector_index, |gate| gate.selector_index)
            .ok()
            .map(|i| &self.lookup_gates[i])
    }

    /// Copy constraints, in insertion order.
    pub fn copy_constraints(&self) -> &[CopyConstraint] {
        &self.copy_constraints
    }

    /// Registered lookup table definitions, in registration order.
    pub fn lookup_tables(&self) -> &[Rc<LookupTableDefinition<F>>] {
        &self.lookup_tables
    }

    /// Returns the number of gates.
    pub fn num_gates(&self) -> usize {
        self.gates.len()
    }

    /// Returns the number of lookup gates.
    pub fn num_lookup_gates(&self) -> usize {
        self.lookup_gates.len()
    }

    /// Reserved table names and their indices.
    pub fn reserved_indices(&self) -> &IndexMap<String, usize> {
        &self.reserved_indices
    }

    /// Reserved table names that have a definition.
    pub fn reserved_tables(
        &self,
    ) -> &IndexMap<String, Rc<LookupTableDefinition<F>>> {
        &self.reserved_tables
    }

    /// The definition reserved under table index `index`.
    pub fn table(&self, index: usize) -> Option<&Rc<LookupTableDefinition<F>>> {
        self.reserved_indices
            .get_index(index)
            .and_then(|(name, _)| self.reserved_tables.get(name))
    }

    /// Index the next gate or lookup gate will receive.
    pub fn next_selector_index(&self) -> usize {
        self.next_selector_index
    }

    fn allocate_selector_index(&mut self) -> usize {
        let selector_index = self.next_selector_index;
        self.next_selector_index += 1;
        selector_index
    }
}

impl<F> Circuit<F> for ConstraintSystem<F>
where
    F: Field,
{
    type View<'a> = &'a ConstraintSystem<F>
    where
        Self: 'a;

    fn view(&self) -> Self::View<'_> {
        self
    }

    fn add_gate(&mut self, constraints: Vec<Constraint<F>>) -> usize {
        let selector_index = self.allocate_selector_index();
        debug!(selector_index, constraints = constraints.len(), "gate added");
        self.gates.push(Gate {
            selector_index,
            constraints,
        });
        selector_index
    }

    fn add_lookup_gate(
        &mut self,
        constraints: Vec<LookupConstraint<F>>,
    ) -> usize {
        let selector_index = self.allocate_selector_index();
        debug!(
            selector_index,
            constraints = constraints.len(),
            "lookup gate added"
        );
        self.lookup_gates.push(LookupGate {
            selector_index,
            constraints,
        });
        selector_index
    }

    fn add_copy_constraint(&mut self, copy_constraint: CopyConstraint) {
        trace!(
            index = self.copy_constraints.len(),
            first = %copy_constraint.first,
            second = %copy_constraint.second,
            "copy constraint added"
        );
        self.copy_constraints.push(copy_constraint);
    }

    fn register_lookup_table(
        &mut self,
        table: Rc<LookupTableDefinition<F>>,
    ) -> usize {
        let index = self.reserve_table(table.name());
        match self.reserved_tables.get(table.name()) {
            Some(existing) => {
                if existing.as_ref() != table.as_ref() {
                    warn!(
                        name = table.name(),
                        "conflicting definition ignored for lookup table"
                    );
                }
            }
            None => {
                self.reserved_tables
                    .insert(table.name().to_owned(), Rc::clone(&table));
                self.lookup_tables.push(table);
            }
        }
        index
    }

    fn reserve_table(&mut self, name: &str) -> usize {
        if let Some(&index) = self.reserved_indices.get(name) {
            return index;
        }
        let index = self.reserved_indices.len();
        self.reserved_indices.insert(name.to_owned(), index);
        debug!(name, index, "lookup table reserved");
        index
    }

    fn export_circuit<W>(&self, sink: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        let used_gates: Vec<usize> =
            self.gates.iter().map(|gate| gate.selector_index).collect();
        let used_copy_constraints: Vec<usize> =
            (0..self.copy_constraints.len()).collect();
        export::write_report(
            sink,
            self,
            &used_gates,
            &used_copy_constraints,
            self.lookup_gates.len(),
        )
    }
}

impl<F> Circuit<F> for SharedCircuit<F>
where
    F: Field,
{
    type View<'a> = Ref<'a, ConstraintSystem<F>>
    where
        Self: 'a;

    fn view(&self) -> Self::View<'_> {
        RefCell::borrow(self)
    }

    fn add_gate(&mut self, constraints: Vec<Constraint<F>>) -> usize {
        RefCell::borrow_mut(self).add_gate(constraints)
    }

    fn add_lookup_gate(
        &mut self,
        constraints: Vec<LookupConstraint<F>>,
    ) -> usize {
        RefCell::borrow_mut(self).add_lookup_gate(constraints)
    }

    fn add_copy_constraint(&mut self, copy_constraint: CopyConstraint) {
        RefCell::borrow_mut(self).add_copy_constraint(copy_constraint)
    }

    fn register_lookup_table(
        &mut self,
        table: Rc<LookupTableDefinition<F>>,
    ) -> usize {
        RefCell::borrow_mut(self).register_lookup_table(table)
    }

    fn reserve_table(&mut self, name: &str) -> usize {
        RefCell::borrow_mut(self).reserve_table(name)
    }

    fn export_circuit<W>(&self, sink: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        RefCell::borrow(self).export_circuit(sink)
    }
}
