/*
 * Copyright (c) 2024, 2025 The netrel developers
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Errors raised for malformed networks and solver queries.

use thiserror::Error;

/// Error describing invalid solver input.
///
/// All validation happens when a network is built or when a solver is
/// invoked; once the input passed validation the algorithms cannot fail.
/// An unreachable sink or destination is *not* an error, the solvers
/// report it as a regular zero-valued result.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A node index does not exist in the network.
    #[error("node {node} out of range for a network with {num_nodes} nodes")]
    NodeOutOfRange { node: usize, num_nodes: usize },

    /// A capacity matrix is not square.
    #[error("capacity matrix row {row} has {len} entries, expected {expected}")]
    DimensionMismatch { row: usize, len: usize, expected: usize },

    /// A negative capacity was supplied.
    #[error("negative capacity on edge ({from}, {to})")]
    NegativeCapacity { from: usize, to: usize },

    /// A link probability outside `[0, 1]` was supplied.
    #[error("probability {probability} on link ({from}, {to}) outside [0, 1]")]
    InvalidProbability {
        from: usize,
        to: usize,
        probability: f64,
    },

    /// A network with zero nodes was requested.
    #[error("a network must have at least one node")]
    NoNodes,
}

/// The result type used by all fallible operations of this crate.
pub type Result<T> = std::result::Result<T, Error>;
