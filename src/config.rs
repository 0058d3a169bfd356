// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) ZK-GARAGE. All rights reserved.

//! Arithmetization parameters.

use crate::error::Error;

/// Amount of columns of each kind that an assignment table exposes.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ArithmetizationParams {
    witness_columns: usize,
    public_input_columns: usize,
    constant_columns: usize,
    selector_columns: usize,
}

impl ArithmetizationParams {
    /// Builds a new set of parameters. At least one witness column is
    /// required.
    pub fn new(
        witness_columns: usize,
        public_input_columns: usize,
        constant_columns: usize,
        selector_columns: usize,
    ) -> Result<Self, Error> {
        if witness_columns == 0 {
            return Err(Error::InvalidArithmetizationParams);
        }
        Ok(Self {
            witness_columns,
            public_input_columns,
            constant_columns,
            selector_columns,
        })
    }

    /// Total Number of Witness Columns
    pub fn witness_columns(&self) -> usize {
        self.witness_columns
    }

    /// Total Number of Public Input Columns
    pub fn public_input_columns(&self) -> usize {
        self.public_input_columns
    }

    /// Total Number of Constant Columns
    pub fn constant_columns(&self) -> usize {
        self.constant_columns
    }

    /// Total Number of Selector Columns
    pub fn selector_columns(&self) -> usize {
        self.selector_columns
    }
}

impl Default for ArithmetizationParams {
    #[inline]
    fn default() -> Self {
        Self {
            witness_columns: 15,
            public_input_columns: 1,
            constant_columns: 1,
            selector_columns: 16,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rejects_zero_witness_columns() {
        assert_eq!(
            ArithmetizationParams::new(0, 1, 1, 4),
            Err(Error::InvalidArithmetizationParams)
        );
        let params = ArithmetizationParams::new(3, 0, 0, 1).unwrap();
        assert_eq!(params.witness_columns(), 3);
        assert_eq!(params.public_input_columns(), 0);
        assert_eq!(params.selector_columns(), 1);
    }
}
