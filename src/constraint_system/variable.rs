// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! This module holds the signal references used in the Constraint System.
//!
//! A [`Variable`] names a cell of the assignment table: a column of a given
//! [`ColumnType`] and a row which is either fixed or a rotation relative to
//! the row a gate is enabled on.

use core::fmt;

/// The kind of column a [`Variable`] points into.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ColumnType {
    /// Prover supplied values
    Witness,
    /// Values shared with the verifier
    PublicInput,
    /// Fixed values, part of the circuit description
    Constant,
    /// Gate-enable markers
    Selector,
}

impl ColumnType {
    fn prefix(&self) -> &'static str {
        match self {
            Self::Witness => "W",
            Self::PublicInput => "PI",
            Self::Constant => "C",
            Self::Selector => "S",
        }
    }
}

/// Reference to a cell of the assignment table.
///
/// For relative variables `rotation` is an offset from the row a gate is
/// evaluated on (`-1`, `0`, `+1`, ...). For absolute variables it holds the
/// row itself.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Variable {
    /// Column index inside the columns of `column_type`
    pub index: usize,
    /// Row offset, or absolute row when `relative` is false
    pub rotation: i32,
    /// Whether `rotation` is resolved against the current row
    pub relative: bool,
    /// Kind of the column
    pub column_type: ColumnType,
}

impl Variable {
    /// Creates a new [`Variable`].
    pub const fn new(
        index: usize,
        rotation: i32,
        relative: bool,
        column_type: ColumnType,
    ) -> Self {
        Self {
            index,
            rotation,
            relative,
            column_type,
        }
    }

    /// Relative reference into witness column `index`.
    pub const fn witness(index: usize, rotation: i32) -> Self {
        Self::new(index, rotation, true, ColumnType::Witness)
    }

    /// Absolute reference to the witness cell at (`index`, `row`).
    pub const fn absolute_witness(index: usize, row: i32) -> Self {
        Self::new(index, row, false, ColumnType::Witness)
    }

    /// Absolute reference to the public input cell at (`index`, `row`).
    pub const fn public_input(index: usize, row: i32) -> Self {
        Self::new(index, row, false, ColumnType::PublicInput)
    }

    /// Absolute reference to the constant cell at (`index`, `row`).
    pub const fn constant(index: usize, row: i32) -> Self {
        Self::new(index, row, false, ColumnType::Constant)
    }

    /// Relative reference to selector column `index`.
    pub const fn selector(index: usize, rotation: i32) -> Self {
        Self::new(index, rotation, true, ColumnType::Selector)
    }

    /// Row this variable resolves to when evaluated on `row`.
    pub fn resolve_row(&self, row: usize) -> i64 {
        if self.relative {
            row as i64 + i64::from(self.rotation)
        } else {
            i64::from(self.rotation)
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = self.column_type.prefix();
        if self.relative {
            match self.rotation {
                0 => write!(f, "{}{}[0]", prefix, self.index),
                r => write!(f, "{}{}[{:+}]", prefix, self.index, r),
            }
        } else {
            write!(f, "{}{}@{}", prefix, self.index, self.rotation)
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_variable_display() {
        assert_eq!(Variable::witness(3, -1).to_string(), "W3[-1]");
        assert_eq!(Variable::witness(0, 0).to_string(), "W0[0]");
        assert_eq!(Variable::witness(1, 1).to_string(), "W1[+1]");
        assert_eq!(Variable::absolute_witness(2, 7).to_string(), "W2@7");
        assert_eq!(Variable::public_input(0, 4).to_string(), "PI0@4");
        assert_eq!(Variable::constant(0, 0).to_string(), "C0@0");
        assert_eq!(Variable::selector(5, 0).to_string(), "S5[0]");
    }

    #[test]
    fn test_resolve_row() {
        assert_eq!(Variable::witness(0, -1).resolve_row(4), 3);
        assert_eq!(Variable::witness(0, -1).resolve_row(0), -1);
        assert_eq!(Variable::absolute_witness(0, 9).resolve_row(4), 9);
    }
}
