// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The constraint system module stores the [`ConstraintSystem`] and the
//! [`CircuitProxy`] overlay, together with the variables, expressions and
//! gates circuits are described with.

pub(crate) mod composer;
pub(crate) mod expression;
pub(crate) mod gate;
pub(crate) mod proxy;
pub(crate) mod satisfiability;
pub(crate) mod variable;

mod export;

pub use composer::{ConstraintSystem, SharedCircuit};
pub use expression::{Constraint, Expression};
pub use gate::{CopyConstraint, Gate, LookupConstraint, LookupGate};
pub use proxy::CircuitProxy;
pub use satisfiability::is_satisfied;
pub use variable::{ColumnType, Variable};
