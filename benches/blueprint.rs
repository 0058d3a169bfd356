// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

use ark_bls12_381::Fr as BlsScalar;
use ark_std::{test_rng, UniformRand};
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use plonk_blueprint::prelude::*;

/// Fills and compiles `instances` logic AND flags laid out on `width`
/// columns, one after the other.
fn build_flags(
    width: usize,
    instances: usize,
    operands: &[(BlsScalar, BlsScalar)],
) -> (SharedCircuit<BlsScalar>, AssignmentTable<BlsScalar>) {
    let params = ArithmetizationParams::new(width, 1, 0, 1)
        .expect("at least one witness column");
    let mut assignment = AssignmentTable::new(params);
    let mut proxy = CircuitProxy::new(ConstraintSystem::new().into_shared(), 0);
    let component = LogicAndFlag::new(0..width).expect("supported width");
    let rows = component.rows_amount();

    for i in 0..instances {
        let (x, y) = operands[i % operands.len()];
        let input = LogicAndFlagInput {
            x: Variable::public_input(0, 2 * i as i32),
            y: Variable::public_input(0, 2 * i as i32 + 1),
        };
        assignment.set_public_input(0, 2 * i, x).unwrap();
        assignment.set_public_input(0, 2 * i + 1, y).unwrap();
        component
            .generate_assignments(&mut assignment, &input, i * rows)
            .unwrap();
        generate_circuit(
            &component,
            &mut proxy,
            &mut assignment,
            &input,
            i * rows,
        )
        .unwrap();
    }
    (proxy.shared(), assignment)
}

fn logic_and_flag_benchmark(c: &mut Criterion) {
    let rng = &mut test_rng();
    let operands: Vec<(BlsScalar, BlsScalar)> = (0..16)
        .map(|i| {
            let x = BlsScalar::rand(rng);
            if i % 4 == 0 {
                (x, BlsScalar::from(0u64))
            } else {
                (x, BlsScalar::rand(rng))
            }
        })
        .collect();

    for width in [2usize, 3, 5] {
        for degree in 6..=12usize {
            let instances = 1 << degree;
            let description =
                format!("Compile {} flags on {} columns", instances, width);
            c.bench_with_input(
                BenchmarkId::new(description.as_str(), degree),
                &instances,
                |b, &instances| {
                    b.iter(|| {
                        build_flags(
                            black_box(width),
                            instances,
                            black_box(&operands),
                        )
                    })
                },
            );

            let (circuit, assignment) =
                build_flags(width, instances, &operands);
            let description =
                format!("Check {} flags on {} columns", instances, width);
            c.bench_with_input(
                BenchmarkId::new(description.as_str(), degree),
                &instances,
                |b, _instances| {
                    b.iter(|| {
                        is_satisfied(
                            black_box(&*circuit.borrow()),
                            black_box(&assignment),
                        )
                        .expect("Failed to satisfy bench circuit!")
                    })
                },
            );
        }
    }
}

criterion_group! {
    name = blueprint;
    config = Criterion::default().sample_size(10);
    targets = logic_and_flag_benchmark
}
criterion_main!(blueprint);
