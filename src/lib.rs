// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

//! # PLONK blueprint
//!
//! _Circuit construction layer for PLONK arithmetizations_
//!
//! Circuits are described as gates (sets of polynomial constraints over
//! rotated cells, enabled by selector columns), lookup gates and copy
//! constraints, stored in a [`ConstraintSystem`]. Values live in a separate
//! [`AssignmentTable`].
//!
//! Gadgets implement [`GateComponent`] and are compiled with
//! [`generate_circuit`], which reuses the gates of earlier instances with
//! the same shape. A [`CircuitProxy`] records what a gadget added to a
//! shared system so it can be exported on its own.
//!
//! ```
//! use ark_bls12_381::Fr;
//! use plonk_blueprint::prelude::*;
//!
//! let mut circuit = ConstraintSystem::<Fr>::new();
//! let mut assignment = AssignmentTable::new(ArithmetizationParams::default());
//! assignment.set_public_input(0, 0, Fr::from(3u64))?;
//! assignment.set_public_input(0, 1, Fr::from(7u64))?;
//!
//! let flag = LogicAndFlag::new(0..3)?;
//! let input = LogicAndFlagInput {
//!     x: Variable::public_input(0, 0),
//!     y: Variable::public_input(0, 1),
//! };
//! flag.generate_assignments(&mut assignment, &input, 0)?;
//! let output =
//!     generate_circuit(&flag, &mut circuit, &mut assignment, &input, 0)?;
//!
//! assert_eq!(assignment.var_value(&output.output)?, Fr::from(1u64));
//! is_satisfied(&circuit, &assignment)?;
//! # Ok::<(), Error>(())
//! ```
//!
//! [`ConstraintSystem`]: constraint_system::ConstraintSystem
//! [`AssignmentTable`]: assignment::AssignmentTable
//! [`GateComponent`]: component::GateComponent
//! [`generate_circuit`]: component::generate_circuit
//! [`CircuitProxy`]: constraint_system::CircuitProxy

// Variables have always the same names in respect to wires.
#![allow(clippy::many_single_char_names)]
// Bool expr are usually easier to read with match statements.
#![allow(clippy::match_bool)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(missing_docs)]

pub mod assignment;
pub mod circuit;
pub mod component;
pub mod config;
pub mod constraint_system;
pub mod error;
pub mod lookup;
pub mod prelude;

#[cfg(test)]
mod test;
