// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! A collection of all possible errors encountered while building circuits.

use crate::constraint_system::ColumnType;

/// Defines all possible errors that can be encountered while building a
/// circuit or filling its assignment table.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Error {
    // Construction errors
    /// This error occurs when a component is instantiated with a witness
    /// width it has no layout for.
    UnsupportedWitnessAmount {
        /// Requested amount of witness columns
        amount: usize,
    },
    /// This error occurs when the columns handed to a component do not match
    /// the width it was declared with.
    WitnessColumnsMismatch {
        /// Amount of witness columns the component expects
        expected: usize,
        /// Amount of witness columns that were provided
        got: usize,
    },
    /// This error occurs when a component layout is built without any
    /// witness column.
    EmptyWitnessColumns,
    /// This error occurs when the arithmetization parameters declare no
    /// witness columns.
    InvalidArithmetizationParams,
    /// This error occurs when a selector [`Variable`] is placed inside a gate
    /// polynomial.
    ///
    /// [`Variable`]: crate::constraint_system::Variable
    SelectorInConstraint,

    // Assignment table errors
    /// This error occurs when a column beyond the ones declared in the
    /// arithmetization parameters is accessed.
    ColumnOutOfRange {
        /// Kind of the accessed column
        column_type: ColumnType,
        /// Index of the accessed column
        index: usize,
        /// Amount of columns of that kind
        available: usize,
    },
    /// This error occurs when a rotation resolves to a negative row.
    RowOutOfRange {
        /// The resolved row
        row: i64,
    },
    /// This error occurs when a selector beyond the declared selector
    /// columns is allocated or enabled.
    SelectorOutOfRange {
        /// Index of the selector
        index: usize,
        /// Amount of selector columns
        available: usize,
    },

    // Satisfiability errors
    /// A gate constraint does not evaluate to zero on an enabled row.
    UnsatisfiedConstraint {
        /// Selector of the failing gate
        selector_index: usize,
        /// Position of the constraint inside the gate
        constraint_index: usize,
        /// Row the selector is enabled on
        row: usize,
    },
    /// The two endpoints of a copy constraint hold different values.
    CopyConstraintViolated {
        /// Position of the copy constraint
        index: usize,
    },
    /// A lookup tuple is not a row of the referenced table.
    LookupNotSatisfied {
        /// Selector of the failing lookup gate
        selector_index: usize,
        /// Position of the lookup constraint inside the gate
        constraint_index: usize,
        /// Row the selector is enabled on
        row: usize,
    },
    /// A lookup constraint references a table index that was never
    /// reserved or has no definition.
    UnknownLookupTable {
        /// The referenced table index
        index: usize,
    },

    // Lookup table errors
    /// This error occurs when a row with the wrong amount of columns is
    /// inserted into a lookup table.
    LookupArityMismatch {
        /// Amount of columns of the table
        expected: usize,
        /// Amount of columns of the row
        got: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedWitnessAmount { amount } => {
                write!(f, "no component layout for {} witness columns", amount)
            }
            Self::WitnessColumnsMismatch { expected, got } => write!(
                f,
                "expected {} witness columns, got {}",
                expected, got
            ),
            Self::EmptyWitnessColumns => {
                write!(f, "component layout has no witness columns")
            }
            Self::InvalidArithmetizationParams => {
                write!(f, "arithmetization needs at least one witness column")
            }
            Self::SelectorInConstraint => {
                write!(f, "selector variables cannot appear in a constraint")
            }
            Self::ColumnOutOfRange {
                column_type,
                index,
                available,
            } => write!(
                f,
                "{:?} column {} out of range ({} available)",
                column_type, index, available
            ),
            Self::RowOutOfRange { row } => {
                write!(f, "row {} is out of range", row)
            }
            Self::SelectorOutOfRange { index, available } => write!(
                f,
                "selector {} out of range ({} available)",
                index, available
            ),
            Self::UnsatisfiedConstraint {
                selector_index,
                constraint_index,
                row,
            } => write!(
                f,
                "constraint {} of gate {} is not satisfied on row {}",
                constraint_index, selector_index, row
            ),
            Self::CopyConstraintViolated { index } => {
                write!(f, "copy constraint {} is violated", index)
            }
            Self::LookupNotSatisfied {
                selector_index,
                constraint_index,
                row,
            } => write!(
                f,
                "lookup constraint {} of gate {} not found in table on row {}",
                constraint_index, selector_index, row
            ),
            Self::UnknownLookupTable { index } => {
                write!(f, "lookup table {} is not defined", index)
            }
            Self::LookupArityMismatch { expected, got } => write!(
                f,
                "lookup table has {} columns, row has {}",
                expected, got
            ),
        }
    }
}

impl std::error::Error for Error {}
