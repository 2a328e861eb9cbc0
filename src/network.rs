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

//! Passive network models shared by the solvers.
//!
//! Nodes are plain indices in `0..n`. The models only support construction
//! and lookup; all algorithmic state lives in the solvers.

use crate::error::{Error, Result};

use num_traits::{PrimInt, Signed};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A directed network with edge capacities stored as a dense matrix.
///
/// An absent edge is an edge of capacity zero. The capacity type `F` is
/// any signed primitive integer; it should be wide enough to hold the sum
/// of all capacities leaving a single node, since that bounds the value of
/// any flow.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct FlowNetwork<F> {
    num_nodes: usize,
    // row-major `num_nodes * num_nodes`
    capacity: Vec<F>,
}

impl<F> FlowNetwork<F>
where
    F: PrimInt + Signed,
{
    /// Create a network with `n` nodes and no edges.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::NoNodes);
        }
        Ok(FlowNetwork {
            num_nodes: n,
            capacity: vec![F::zero(); n * n],
        })
    }

    /// Build a network from a square capacity matrix.
    ///
    /// Fails if the matrix is not square or contains a negative entry.
    pub fn from_matrix(matrix: &[Vec<F>]) -> Result<Self> {
        let n = matrix.len();
        if n == 0 {
            return Err(Error::NoNodes);
        }
        let mut capacity = Vec::with_capacity(n * n);
        for (u, row) in matrix.iter().enumerate() {
            if row.len() != n {
                return Err(Error::DimensionMismatch {
                    row: u,
                    len: row.len(),
                    expected: n,
                });
            }
            for (v, &c) in row.iter().enumerate() {
                if c < F::zero() {
                    return Err(Error::NegativeCapacity { from: u, to: v });
                }
                capacity.push(c);
            }
        }
        Ok(FlowNetwork {
            num_nodes: n,
            capacity,
        })
    }

    /// Set the capacity of the edge `u -> v`.
    pub fn add_edge(&mut self, u: usize, v: usize, cap: F) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        if cap < F::zero() {
            return Err(Error::NegativeCapacity { from: u, to: v });
        }
        let n = self.num_nodes;
        self.capacity[u * n + v] = cap;
        Ok(())
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Return the capacity of the edge `u -> v` (zero if absent).
    ///
    /// # Panics
    ///
    /// Panics if `u` or `v` is not a node of the network.
    pub fn capacity(&self, u: usize, v: usize) -> F {
        assert!(u < self.num_nodes && v < self.num_nodes);
        self.capacity[u * self.num_nodes + v]
    }

    pub(crate) fn check_node(&self, u: usize) -> Result<()> {
        if u < self.num_nodes {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node: u,
                num_nodes: self.num_nodes,
            })
        }
    }
}

/// An undirected network whose links carry a success probability.
///
/// Each undirected link is stored as two directed adjacency entries. A
/// link with probability zero is valid input and is kept in the adjacency,
/// but the solver never traverses it.
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Debug)]
pub struct ReliabilityNetwork {
    adj: Vec<Vec<(usize, f64)>>,
}

impl ReliabilityNetwork {
    /// Create a network with `n` nodes and no links.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(Error::NoNodes);
        }
        Ok(ReliabilityNetwork {
            adj: vec![Vec::new(); n],
        })
    }

    /// Add an undirected link between `u` and `v` with success probability `p`.
    pub fn add_link(&mut self, u: usize, v: usize, p: f64) -> Result<()> {
        self.add_directed_link(u, v, p)?;
        self.adj[v].push((u, p));
        Ok(())
    }

    /// Add a directed link `u -> v` with success probability `p`.
    pub fn add_directed_link(&mut self, u: usize, v: usize, p: f64) -> Result<()> {
        self.check_node(u)?;
        self.check_node(v)?;
        // NaN fails the range check, too
        if !(0.0..=1.0).contains(&p) {
            return Err(Error::InvalidProbability {
                from: u,
                to: v,
                probability: p,
            });
        }
        self.adj[u].push((v, p));
        Ok(())
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.adj.len()
    }

    /// Return the outgoing links of `u` as `(neighbor, probability)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a node of the network.
    pub fn links(&self, u: usize) -> &[(usize, f64)] {
        &self.adj[u]
    }

    pub(crate) fn check_node(&self, u: usize) -> Result<()> {
        if u < self.adj.len() {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node: u,
                num_nodes: self.adj.len(),
            })
        }
    }
}
