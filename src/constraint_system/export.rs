// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! Plain text circuit reports.

use crate::constraint_system::ConstraintSystem;
use ark_ff::Field;
use std::io;

/// Writes the report of `circuit` restricted to the gates with the selector
/// indices in `used_gates` and the copy constraints at the positions in
/// `used_copy_constraints`. The header is a single line, wrapped here.
///
/// ```text
/// used_gates_size: 1 gates_size: 3 used_copy_constraints_size: 1
///     copy_constraints_size: 2 lookup_gates_size: 0
/// <gate position>: selector: <selector index> constraints_size: <n>
/// <one constraint per line>
/// <copy constraint position>: <first> <second>
/// ```
pub(crate) fn write_report<F, W>(
    sink: &mut W,
    circuit: &ConstraintSystem<F>,
    used_gates: &[usize],
    used_copy_constraints: &[usize],
    lookup_gates_size: usize,
) -> io::Result<()>
where
    F: Field,
    W: io::Write,
{
    writeln!(
        sink,
        "used_gates_size: {} gates_size: {} used_copy_constraints_size: {} \
         copy_constraints_size: {} lookup_gates_size: {}",
        used_gates.len(),
        circuit.num_gates(),
        used_copy_constraints.len(),
        circuit.copy_constraints().len(),
        lookup_gates_size,
    )?;
    for &selector_index in used_gates {
        let position = match circuit.gate_position(selector_index) {
            Some(position) => position,
            None => continue,
        };
        let gate = &circuit.gates()[position];
        writeln!(
            sink,
            "{}: selector: {} constraints_size: {}",
            position,
            gate.selector_index,
            gate.constraints.len()
        )?;
        for constraint in &gate.constraints {
            writeln!(sink, "{}", constraint)?;
        }
    }
    for &index in used_copy_constraints {
        if let Some(copy) = circuit.copy_constraints().get(index) {
            writeln!(sink, "{}: {} {}", index, copy.first, copy.second)?;
        }
    }
    sink.flush()
}
