// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! Checks an [`AssignmentTable`] against a [`ConstraintSystem`] without
//! building a proof.

use crate::{
    assignment::AssignmentTable, constraint_system::ConstraintSystem,
    error::Error,
};
use ark_ff::Field;
use tracing::debug;

/// Checks every gate on every row its selector is enabled on, then every
/// lookup gate, then every copy constraint. Returns the first failure.
pub fn is_satisfied<F>(
    circuit: &ConstraintSystem<F>,
    assignment: &AssignmentTable<F>,
) -> Result<(), Error>
where
    F: Field,
{
    for gate in circuit.gates() {
        for row in assignment.enabled_rows(gate.selector_index) {
            for (constraint_index, constraint) in
                gate.constraints.iter().enumerate()
            {
                let value = constraint.evaluate(row, assignment)?;
                if !value.is_zero() {
                    debug!(
                        selector_index = gate.selector_index,
                        constraint_index,
                        row,
                        %constraint,
                        "constraint not satisfied"
                    );
                    return Err(Error::UnsatisfiedConstraint {
                        selector_index: gate.selector_index,
                        constraint_index,
                        row,
                    });
                }
            }
        }
    }

    for gate in circuit.lookup_gates() {
        for row in assignment.enabled_rows(gate.selector_index) {
            for (constraint_index, constraint) in
                gate.constraints.iter().enumerate()
            {
                let table = circuit.table(constraint.table_id).ok_or(
                    Error::UnknownLookupTable {
                        index: constraint.table_id,
                    },
                )?;
                let tuple = constraint.evaluate(row, assignment)?;
                if !table.contains(&tuple) {
                    debug!(
                        selector_index = gate.selector_index,
                        constraint_index,
                        row,
                        table = table.name(),
                        "lookup not satisfied"
                    );
                    return Err(Error::LookupNotSatisfied {
                        selector_index: gate.selector_index,
                        constraint_index,
                        row,
                    });
                }
            }
        }
    }

    for (index, copy) in circuit.copy_constraints().iter().enumerate() {
        if assignment.var_value(&copy.first)?
            != assignment.var_value(&copy.second)?
        {
            debug!(
                index,
                first = %copy.first,
                second = %copy.second,
                "copy constraint violated"
            );
            return Err(Error::CopyConstraintViolated { index });
        }
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        batch_field_test,
        circuit::Circuit,
        config::ArithmetizationParams,
        constraint_system::{
            Constraint, Expression, LookupConstraint, Variable,
        },
        lookup::LookupTableDefinition,
    };
    use ark_bls12_377::Fr as Bls12_377_scalar_field;
    use ark_bls12_381::Fr as Bls12_381_scalar_field;
    use std::rc::Rc;

    fn range_circuit<F: Field>() -> ConstraintSystem<F> {
        let mut cs = ConstraintSystem::<F>::new();
        let table_id = cs.register_lookup_table(Rc::new(
            LookupTableDefinition::range_table("range_4", 4),
        ));
        let value: Expression<F> = Variable::witness(0, 0).into();
        cs.add_lookup_gate(vec![LookupConstraint::new(
            table_id,
            vec![value],
        )
        .unwrap()]);
        cs
    }

    fn test_lookup_gates<F>()
    where
        F: Field,
    {
        let cs = range_circuit::<F>();
        let mut assignment =
            AssignmentTable::<F>::new(ArithmetizationParams::default());
        assignment.set_witness(0, 0, F::from(15u64)).unwrap();
        assignment.set_witness(0, 1, F::from(16u64)).unwrap();
        assignment.enable_selector(0, 0).unwrap();
        assert_eq!(is_satisfied(&cs, &assignment), Ok(()));

        assignment.enable_selector(0, 1).unwrap();
        assert_eq!(
            is_satisfied(&cs, &assignment),
            Err(Error::LookupNotSatisfied {
                selector_index: 0,
                constraint_index: 0,
                row: 1,
            })
        );
    }

    fn test_unknown_table<F>()
    where
        F: Field,
    {
        let mut cs = ConstraintSystem::<F>::new();
        let table_id = cs.reserve_table("never_defined");
        let value: Expression<F> = Variable::witness(0, 0).into();
        cs.add_lookup_gate(vec![LookupConstraint::new(
            table_id,
            vec![value],
        )
        .unwrap()]);
        let mut assignment =
            AssignmentTable::<F>::new(ArithmetizationParams::default());
        assert_eq!(is_satisfied(&cs, &assignment), Ok(()));
        assignment.enable_selector(0, 3).unwrap();
        assert_eq!(
            is_satisfied(&cs, &assignment),
            Err(Error::UnknownLookupTable { index: 0 })
        );
    }

    fn test_rotation_below_first_row<F>()
    where
        F: Field,
    {
        let mut cs = ConstraintSystem::<F>::new();
        let previous: Expression<F> = Variable::witness(0, -1).into();
        cs.add_single_gate(
            Constraint::new(previous - Variable::witness(0, 0)).unwrap(),
        );
        let mut assignment =
            AssignmentTable::<F>::new(ArithmetizationParams::default());
        assignment.enable_selector(0, 1).unwrap();
        assert_eq!(is_satisfied(&cs, &assignment), Ok(()));
        assignment.enable_selector(0, 0).unwrap();
        assert_eq!(
            is_satisfied(&cs, &assignment),
            Err(Error::RowOutOfRange { row: -1 })
        );
    }

    // Bls12-381 tests
    batch_field_test!(
        [
            test_lookup_gates,
            test_unknown_table,
            test_rotation_below_first_row
        ],
        [] => Bls12_381_scalar_field
    );

    // Bls12-377 tests
    batch_field_test!(
        [
            test_lookup_gates,
            test_unknown_table,
            test_rotation_below_first_row
        ],
        [] => Bls12_377_scalar_field
    );
}
