// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.
//
// Copyright (c) DUSK NETWORK. All rights reserved.

use crate::error::Error;
use ark_ff::Field;

/// A named table of fixed arity. Lookup constraints assert that a tuple of
/// cell values is one of its rows.
///
/// Definitions are registered once on a
/// [`ConstraintSystem`](crate::constraint_system::ConstraintSystem) and shared
/// by every gate that references them.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LookupTableDefinition<F>
where
    F: Field,
{
    name: String,
    arity: usize,
    rows: Vec<Vec<F>>,
}

impl<F> LookupTableDefinition<F>
where
    F: Field,
{
    /// Create a new, empty table with `arity` columns.
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
            rows: Vec::new(),
        }
    }

    /// Name the table is reserved under.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Amount of columns.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Returns the amount of rows in the table.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Rows of the table.
    pub fn rows(&self) -> &[Vec<F>] {
        &self.rows
    }

    /// Insert a new row
    pub fn insert_row(&mut self, row: Vec<F>) -> Result<(), Error> {
        if row.len() != self.arity {
            return Err(Error::LookupArityMismatch {
                expected: self.arity,
                got: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Whether `tuple` is a row of the table.
    pub fn contains(&self, tuple: &[F]) -> bool {
        self.rows.iter().any(|row| row.as_slice() == tuple)
    }

    /// Attempts to find the last column of a row, given the values of all
    /// the other columns.
    pub fn lookup(&self, inputs: &[F]) -> Option<F> {
        if inputs.len() + 1 != self.arity {
            return None;
        }
        self.rows
            .iter()
            .find(|row| &row[..inputs.len()] == inputs)
            .map(|row| row[inputs.len()])
    }

    fn push_binary_rows(
        &mut self,
        lower_bound: u64,
        n: u32,
        op: impl Fn(u64, u64, u64) -> u64,
    ) {
        let upper_bound = 2u64.pow(n);
        for a in lower_bound..upper_bound {
            for b in lower_bound..upper_bound {
                let c = op(a, b, upper_bound);
                self.rows.push(vec![F::from(a), F::from(b), F::from(c)]);
            }
        }
    }

    /// Creates a single column table holding `0..2^bits`.
    pub fn range_table(name: impl Into<String>, bits: u32) -> Self {
        let mut table = Self::new(name, 1);
        table.rows = (0..2u64.pow(bits)).map(|v| vec![F::from(v)]).collect();
        table
    }

    /// Creates an addition table for addends from the lower bound up to the
    /// upper bound 2^n. The result will be: a + b mod 2^n
    pub fn add_table(
        name: impl Into<String>,
        lower_bound: u64,
        n: u32,
    ) -> Self {
        let mut table = Self::new(name, 3);
        table.push_binary_rows(lower_bound, n, |a, b, p| (a + b) % p);
        table
    }

    /// Creates a multiplication table for factors from the lower bound up to
    /// the upper bound 2^n. The result will be: a * b mod 2^n
    pub fn mul_table(
        name: impl Into<String>,
        lower_bound: u64,
        n: u32,
    ) -> Self {
        let mut table = Self::new(name, 3);
        table.push_binary_rows(lower_bound, n, |a, b, p| (a * b) % p);
        table
    }

    /// Creates an xor table for operands from the lower bound up to the
    /// upper bound 2^n
    pub fn xor_table(
        name: impl Into<String>,
        lower_bound: u64,
        n: u32,
    ) -> Self {
        let mut table = Self::new(name, 3);
        table.push_binary_rows(lower_bound, n, |a, b, p| (a ^ b) % p);
        table
    }

    /// Creates an and table for operands from the lower bound up to the
    /// upper bound 2^n
    pub fn and_table(
        name: impl Into<String>,
        lower_bound: u64,
        n: u32,
    ) -> Self {
        let mut table = Self::new(name, 3);
        table.push_binary_rows(lower_bound, n, |a, b, p| (a & b) % p);
        table
    }
}
