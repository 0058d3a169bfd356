// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! Tools & traits for PLONK circuits

use crate::constraint_system::{
    Constraint, ConstraintSystem, CopyConstraint, LookupConstraint,
};
use crate::lookup::LookupTableDefinition;
use ark_ff::Field;
use core::ops::Deref;
use std::io;
use std::rc::Rc;

/// Circuit mutation contract shared by the plain [`ConstraintSystem`], its
/// shared handle and the [`CircuitProxy`] overlay.
///
/// Gate components are written once against this trait and can then be
/// compiled into any of them.
///
/// None of the mutators validate their input: wiring mistakes only show up
/// when the circuit is checked against an assignment.
///
/// [`CircuitProxy`]: crate::constraint_system::CircuitProxy
pub trait Circuit<F>
where
    F: Field,
{
    /// Read access to the underlying constraint system.
    type View<'a>: Deref<Target = ConstraintSystem<F>>
    where
        Self: 'a;

    /// Returns a read-only view of the underlying [`ConstraintSystem`].
    ///
    /// For shared circuits the view holds a borrow, so it must be dropped
    /// before mutating the circuit again.
    fn view(&self) -> Self::View<'_>;

    /// Allocates a fresh selector and stores `constraints` under it.
    /// Returns the selector index.
    fn add_gate(&mut self, constraints: Vec<Constraint<F>>) -> usize;

    /// Single constraint version of [`Circuit::add_gate`].
    fn add_single_gate(&mut self, constraint: Constraint<F>) -> usize {
        self.add_gate(vec![constraint])
    }

    /// Allocates a fresh selector and stores the lookup `constraints` under
    /// it. Returns the selector index.
    fn add_lookup_gate(&mut self, constraints: Vec<LookupConstraint<F>>)
        -> usize;

    /// Single constraint version of [`Circuit::add_lookup_gate`].
    fn add_single_lookup_gate(
        &mut self,
        constraint: LookupConstraint<F>,
    ) -> usize {
        self.add_lookup_gate(vec![constraint])
    }

    /// Appends a copy constraint.
    fn add_copy_constraint(&mut self, copy_constraint: CopyConstraint);

    /// Registers a shared table definition and returns the index its name
    /// is reserved under.
    fn register_lookup_table(
        &mut self,
        table: Rc<LookupTableDefinition<F>>,
    ) -> usize;

    /// Reserves `name` and returns its stable table index. Reserving the
    /// same name again returns the same index.
    fn reserve_table(&mut self, name: &str) -> usize;

    /// Returns the number of gates.
    fn num_gates(&self) -> usize {
        self.view().num_gates()
    }

    /// Returns the number of lookup gates.
    fn num_lookup_gates(&self) -> usize {
        self.view().num_lookup_gates()
    }

    /// Index the next call to [`Circuit::add_gate`] or
    /// [`Circuit::add_lookup_gate`] will return.
    fn next_selector_index(&self) -> usize {
        self.view().next_selector_index()
    }

    /// Writes a human readable report of the circuit to `sink`.
    fn export_circuit<W>(&self, sink: &mut W) -> io::Result<()>
    where
        W: io::Write;
}
