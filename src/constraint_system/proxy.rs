// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! Circuit proxies.
//!
//! A [`CircuitProxy`] forwards every mutation to a shared
//! [`ConstraintSystem`] and records which gates, copy constraints, lookup
//! gates and lookup tables were added through it. Several proxies over the
//! same system partition it into per-gadget views that can be exported on
//! their own.

use crate::{
    circuit::Circuit,
    constraint_system::{
        export, Constraint, ConstraintSystem, CopyConstraint, Gate,
        LookupConstraint, LookupGate, SharedCircuit,
    },
    lookup::LookupTableDefinition,
};
use ark_ff::Field;
use core::cell::{Ref, RefCell};
use std::collections::BTreeSet;
use std::io;
use std::rc::Rc;

/// Recording overlay over a [`SharedCircuit`].
///
/// The recorded sets only ever grow, and only hold indices that are valid
/// in the shared system.
#[derive(derivative::Derivative)]
#[derivative(Debug(bound = ""))]
pub struct CircuitProxy<F>
where
    F: Field,
{
    id: u32,
    circuit: SharedCircuit<F>,
    used_gates: BTreeSet<usize>,
    used_copy_constraints: BTreeSet<usize>,
    used_lookup_gates: BTreeSet<usize>,
    used_lookup_tables: BTreeSet<usize>,
}

impl<F> CircuitProxy<F>
where
    F: Field,
{
    /// Wraps `circuit`. `id` is only used to tell proxies apart.
    pub fn new(circuit: SharedCircuit<F>, id: u32) -> Self {
        Self {
            id,
            circuit,
            used_gates: BTreeSet::new(),
            used_copy_constraints: BTreeSet::new(),
            used_lookup_gates: BTreeSet::new(),
            used_lookup_tables: BTreeSet::new(),
        }
    }

    /// Identifier given at construction.
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Borrows the underlying constraint system.
    pub fn get(&self) -> Ref<'_, ConstraintSystem<F>> {
        RefCell::borrow(&self.circuit)
    }

    /// Another handle to the underlying constraint system.
    pub fn shared(&self) -> SharedCircuit<F> {
        Rc::clone(&self.circuit)
    }

    /// All gates of the underlying system, not just the used ones.
    pub fn gates(&self) -> Ref<'_, [Gate<F>]> {
        Ref::map(self.get(), |cs| cs.gates())
    }

    /// All copy constraints of the underlying system.
    pub fn copy_constraints(&self) -> Ref<'_, [CopyConstraint]> {
        Ref::map(self.get(), |cs| cs.copy_constraints())
    }

    /// All lookup gates of the underlying system.
    pub fn lookup_gates(&self) -> Ref<'_, [LookupGate<F>]> {
        Ref::map(self.get(), |cs| cs.lookup_gates())
    }

    /// All registered lookup tables of the underlying system.
    pub fn lookup_tables(&self) -> Ref<'_, [Rc<LookupTableDefinition<F>>]> {
        Ref::map(self.get(), |cs| cs.lookup_tables())
    }

    /// Selector indices of the gates added through this proxy.
    pub fn used_gates(&self) -> &BTreeSet<usize> {
        &self.used_gates
    }

    /// Positions of the copy constraints added through this proxy.
    pub fn used_copy_constraints(&self) -> &BTreeSet<usize> {
        &self.used_copy_constraints
    }

    /// Selector indices of the lookup gates added through this proxy.
    pub fn used_lookup_gates(&self) -> &BTreeSet<usize> {
        &self.used_lookup_gates
    }

    /// Table indices reserved, registered or looked up through this proxy.
    pub fn used_lookup_tables(&self) -> &BTreeSet<usize> {
        &self.used_lookup_tables
    }
}

impl<F> Circuit<F> for CircuitProxy<F>
where
    F: Field,
{
    type View<'a> = Ref<'a, ConstraintSystem<F>>
    where
        Self: 'a;

    fn view(&self) -> Self::View<'_> {
        self.get()
    }

    fn add_gate(&mut self, constraints: Vec<Constraint<F>>) -> usize {
        let selector_index = self.circuit.add_gate(constraints);
        self.used_gates.insert(selector_index);
        selector_index
    }

    fn add_lookup_gate(
        &mut self,
        constraints: Vec<LookupConstraint<F>>,
    ) -> usize {
        self.used_lookup_tables
            .extend(constraints.iter().map(|c| c.table_id));
        let selector_index = self.circuit.add_lookup_gate(constraints);
        self.used_lookup_gates.insert(selector_index);
        selector_index
    }

    fn add_copy_constraint(&mut self, copy_constraint: CopyConstraint) {
        self.circuit.add_copy_constraint(copy_constraint);
        let size = self.get().copy_constraints().len();
        if let Some(index) = size.checked_sub(1) {
            self.used_copy_constraints.insert(index);
        }
    }

    fn register_lookup_table(
        &mut self,
        table: Rc<LookupTableDefinition<F>>,
    ) -> usize {
        let index = self.circuit.register_lookup_table(table);
        self.used_lookup_tables.insert(index);
        index
    }

    fn reserve_table(&mut self, name: &str) -> usize {
        let index = self.circuit.reserve_table(name);
        self.used_lookup_tables.insert(index);
        index
    }

    fn export_circuit<W>(&self, sink: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        let used_gates: Vec<usize> = self.used_gates.iter().copied().collect();
        let used_copy_constraints: Vec<usize> =
            self.used_copy_constraints.iter().copied().collect();
        export::write_report(
            sink,
            &*self.get(),
            &used_gates,
            &used_copy_constraints,
            self.used_lookup_gates.len(),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        batch_field_test,
        constraint_system::{Expression, Variable},
    };
    use ark_bls12_377::Fr as Bls12_377_scalar_field;
    use ark_bls12_381::Fr as Bls12_381_scalar_field;

    fn boolean<F: Field>(column: usize) -> Constraint<F> {
        let a: Expression<F> = Variable::witness(column, 0).into();
        Constraint::new(a.clone() * (a - Expression::constant(F::one())))
            .unwrap()
    }

    fn copy(a: usize, b: usize) -> CopyConstraint {
        CopyConstraint::new(
            Variable::absolute_witness(a, 0),
            Variable::absolute_witness(b, 0),
        )
    }

    fn test_records_what_it_adds<F>()
    where
        F: Field,
    {
        let shared = ConstraintSystem::<F>::new().into_shared();
        let mut proxy = CircuitProxy::new(Rc::clone(&shared), 7);
        assert_eq!(proxy.id(), 7);

        for column in 0..3 {
            proxy.add_single_gate(boolean(column));
        }
        proxy.add_copy_constraint(copy(0, 1));
        proxy.add_copy_constraint(copy(1, 2));

        assert_eq!(proxy.used_gates().len(), 3);
        assert_eq!(proxy.used_copy_constraints().len(), 2);
        assert_eq!(proxy.gates().len(), 3);
        assert_eq!(proxy.copy_constraints().len(), 2);
        assert_eq!(proxy.num_gates(), 3);
        assert!(proxy
            .used_gates()
            .iter()
            .all(|&s| proxy.get().gate(s).is_some()));
        assert!(proxy
            .used_copy_constraints()
            .iter()
            .all(|&i| i < proxy.copy_constraints().len()));
    }

    fn test_proxies_partition_the_circuit<F>()
    where
        F: Field,
    {
        let shared = ConstraintSystem::<F>::new().into_shared();
        let mut first = CircuitProxy::new(Rc::clone(&shared), 0);
        let mut second = CircuitProxy::new(Rc::clone(&shared), 1);

        first.add_single_gate(boolean(0));
        second.add_single_gate(boolean(1));
        second.add_copy_constraint(copy(0, 1));
        first.add_single_gate(boolean(2));
        first.add_copy_constraint(copy(2, 3));

        let sets = |p: &CircuitProxy<F>| {
            (
                p.used_gates().iter().copied().collect::<Vec<_>>(),
                p.used_copy_constraints().iter().copied().collect::<Vec<_>>(),
            )
        };
        assert_eq!(sets(&first), (vec![0, 2], vec![1]));
        assert_eq!(sets(&second), (vec![1], vec![0]));
        assert_eq!(shared.num_gates(), 3);
        assert!(Rc::ptr_eq(&first.shared(), &second.shared()));
    }

    fn test_lookup_bookkeeping<F>()
    where
        F: Field,
    {
        let shared = ConstraintSystem::<F>::new().into_shared();
        let mut other = CircuitProxy::new(Rc::clone(&shared), 0);
        let mut proxy = CircuitProxy::new(Rc::clone(&shared), 1);

        assert_eq!(other.reserve_table("xor_2"), 0);
        let and = Rc::new(LookupTableDefinition::and_table("and_2", 0, 2));
        assert_eq!(proxy.register_lookup_table(and), 1);

        let input: Vec<Expression<F>> = (0..3)
            .map(|column| Variable::witness(column, 0).into())
            .collect();
        let selector = proxy.add_lookup_gate(vec![LookupConstraint::new(
            0, input,
        )
        .unwrap()]);

        assert_eq!(selector, 0);
        assert_eq!(proxy.used_lookup_gates().len(), 1);
        assert_eq!(
            proxy.used_lookup_tables().iter().copied().collect::<Vec<_>>(),
            vec![0, 1]
        );
        assert_eq!(proxy.lookup_gates().len(), 1);
        assert_eq!(proxy.lookup_tables().len(), 1);
        assert_eq!(
            other.used_lookup_tables().iter().copied().collect::<Vec<_>>(),
            vec![0]
        );
        assert!(other.used_lookup_gates().is_empty());
        assert_eq!(proxy.next_selector_index(), 1);
        assert_eq!(proxy.num_lookup_gates(), 1);
    }

    fn test_export_only_used<F>()
    where
        F: Field,
    {
        let shared = ConstraintSystem::<F>::new().into_shared();
        let mut first = CircuitProxy::new(Rc::clone(&shared), 0);
        let mut second = CircuitProxy::new(Rc::clone(&shared), 1);

        first.add_single_gate(boolean(0));
        let input: Vec<Expression<F>> = vec![Variable::witness(0, 0).into()];
        let lookup = first
            .add_single_lookup_gate(LookupConstraint::new(0, input).unwrap());
        second.add_gate(vec![boolean(1), boolean(2)]);
        first.add_copy_constraint(copy(0, 1));
        second.add_copy_constraint(copy(1, 2));
        assert_eq!(lookup, 1);

        let mut out = Vec::new();
        second.export_circuit(&mut out).unwrap();
        let report = String::from_utf8(out).unwrap();
        assert_eq!(
            report,
            "used_gates_size: 1 gates_size: 2 used_copy_constraints_size: 1 \
             copy_constraints_size: 2 lookup_gates_size: 0\n\
             1: selector: 2 constraints_size: 2\n\
             W1[0] * (W1[0] - 1)\n\
             W2[0] * (W2[0] - 1)\n\
             1: W1@0 W2@0\n"
        );

        // Exporting does not change the proxy.
        let mut again = Vec::new();
        second.export_circuit(&mut again).unwrap();
        assert_eq!(String::from_utf8(again).unwrap(), report);

        // The lookup gate only counts for the proxy that added it.
        let mut out = Vec::new();
        first.export_circuit(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "used_gates_size: 1 gates_size: 2 used_copy_constraints_size: 1 \
             copy_constraints_size: 2 lookup_gates_size: 1\n\
             0: selector: 0 constraints_size: 1\n\
             W0[0] * (W0[0] - 1)\n\
             0: W0@0 W1@0\n"
        );

        let empty = CircuitProxy::new(Rc::clone(&shared), 2);
        let mut out = Vec::new();
        empty.export_circuit(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "used_gates_size: 0 gates_size: 2 used_copy_constraints_size: 0 \
             copy_constraints_size: 2 lookup_gates_size: 0\n"
        );
    }

    // Bls12-381 tests
    batch_field_test!(
        [
            test_records_what_it_adds,
            test_proxies_partition_the_circuit,
            test_lookup_bookkeeping,
            test_export_only_used
        ],
        [] => Bls12_381_scalar_field
    );

    // Bls12-377 tests
    batch_field_test!(
        [
            test_records_what_it_adds,
            test_proxies_partition_the_circuit,
            test_lookup_bookkeeping,
            test_export_only_used
        ],
        [] => Bls12_377_scalar_field
    );
}
