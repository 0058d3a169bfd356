// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Collection of types and functions needed to build PLONK circuits.
//!
//! Use this as the only import that you need to interact with the principal
//! data structures of the library.

pub use crate::{
    assignment::AssignmentTable,
    circuit::Circuit,
    component::{
        generate_circuit, Component, ComponentLayout, ComponentShape,
        GateComponent, LogicAndFlag, LogicAndFlagInput, LogicAndFlagLayout,
        LogicAndFlagOutput,
    },
    config::ArithmetizationParams,
    constraint_system::{
        is_satisfied, CircuitProxy, ColumnType, Constraint, ConstraintSystem,
        CopyConstraint, Expression, Gate, LookupConstraint, LookupGate,
        SharedCircuit, Variable,
    },
    error::Error,
    lookup::LookupTableDefinition,
};
