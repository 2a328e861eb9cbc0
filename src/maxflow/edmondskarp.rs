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

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! The algorithm repeatedly augments the flow along a shortest (fewest
//! edges) path of the residual network found by a breadth-first search.
//! Augmenting along shortest paths bounds the number of augmentations by
//! `O(V*E)`, so the total running time on a dense capacity matrix is
//! `O(V^3 * E)` in the worst case and polynomial in any case, in contrast
//! to plain Ford-Fulkerson.
//!
//! # Example
//!
//! ```
//! use netrel::FlowNetwork;
//! use netrel::maxflow::{edmondskarp, EdmondsKarp};
//!
//! let mut g = FlowNetwork::<i64>::new(6)?;
//! g.add_edge(0, 1, 16)?;
//! g.add_edge(0, 2, 13)?;
//! g.add_edge(1, 3, 12)?;
//! g.add_edge(2, 4, 14)?;
//! g.add_edge(3, 5, 20)?;
//! g.add_edge(4, 5, 4)?;
//!
//! assert_eq!(edmondskarp(&g, 0, 5)?, 16);
//!
//! // the final flow respects capacities and is conserved at inner nodes
//! let mut solver = EdmondsKarp::new(&g);
//! solver.solve(0, 5)?;
//! for u in 0..6 {
//!     for v in 0..6 {
//!         assert!(solver.flow(u, v) <= g.capacity(u, v));
//!     }
//! }
//! for u in 1..5 {
//!     let net: i64 = (0..6).map(|v| solver.flow(u, v)).sum();
//!     assert_eq!(net, 0);
//! }
//! # Ok::<(), netrel::Error>(())
//! ```

use crate::error::Result;
use crate::network::FlowNetwork;

use log::{debug, trace};
use num_traits::{NumAssign, PrimInt, Signed};

use std::cmp::min;
use std::collections::VecDeque;

/// Max-flow algorithm of Edmonds and Karp on a dense capacity matrix.
///
/// The solver keeps its working arrays (flow matrix, BFS predecessors and
/// bottlenecks, queue) between calls to [`solve`][EdmondsKarp::solve], so
/// an instance can be reused for several source/sink pairs on the same
/// network without reallocating.
pub struct EdmondsKarp<'a, F> {
    g: &'a FlowNetwork<F>,
    flow: Vec<F>,
    pred: Vec<usize>,
    mincap: Vec<F>,
    queue: VecDeque<usize>,
    value: F,
}

impl<'a, F> EdmondsKarp<'a, F>
where
    F: PrimInt + Signed + NumAssign,
{
    /// Create a new solver instance for a network.
    pub fn new(g: &'a FlowNetwork<F>) -> Self {
        let n = g.num_nodes();
        EdmondsKarp {
            g,
            flow: vec![F::zero(); n * n],
            pred: vec![usize::max_value(); n],
            mincap: vec![F::zero(); n],
            queue: VecDeque::with_capacity(n),
            value: F::zero(),
        }
    }

    /// Return the underlying network.
    pub fn as_network(&self) -> &'a FlowNetwork<F> {
        self.g
    }

    /// Return the value of the latest computed maximum flow.
    pub fn value(&self) -> F {
        self.value
    }

    /// Return the flow on the edge `u -> v`.
    ///
    /// The flow is antisymmetric: the reverse of an edge carrying `f`
    /// units carries `-f`. For every capacitated edge the final flow
    /// satisfies `0 <= flow(u, v) <= capacity(u, v)`.
    pub fn flow(&self, u: usize, v: usize) -> F {
        self.flow[u * self.g.num_nodes() + v]
    }

    /// Compute a maximum flow from `src` to `snk`.
    ///
    /// If `src == snk` the maximum flow is defined to be zero. The flow
    /// and value of a previous run are discarded.
    pub fn solve(&mut self, src: usize, snk: usize) -> Result<()> {
        self.g.check_node(src)?;
        self.g.check_node(snk)?;

        let n = self.g.num_nodes();
        for f in self.flow.iter_mut() {
            *f = F::zero();
        }
        self.pred.fill(usize::max_value());
        self.value = F::zero();

        if src == snk {
            return Ok(());
        }

        let mut rounds = 0usize;
        loop {
            // bfs from the source over edges with positive residual capacity
            self.pred.fill(usize::max_value());
            self.pred[src] = src;
            self.mincap[src] = F::max_value();
            self.queue.clear();
            self.queue.push_back(src);
            'bfs: while let Some(u) = self.queue.pop_front() {
                for v in 0..n {
                    let res = self.g.capacity(u, v) - self.flow[u * n + v];
                    if self.pred[v] == usize::max_value() && res > F::zero() {
                        self.pred[v] = u;
                        self.mincap[v] = min(self.mincap[u], res);
                        if v == snk {
                            break 'bfs;
                        }
                        self.queue.push_back(v);
                    }
                }
            }

            // sink cannot be reached -> stop
            if self.pred[snk] == usize::max_value() {
                break;
            }

            // augment along the path, opening the reverse edges on the way
            let df = self.mincap[snk];
            debug_assert!(df > F::zero());
            let mut arcs = 0usize;
            let mut v = snk;
            while v != src {
                let u = self.pred[v];
                self.flow[u * n + v] += df;
                self.flow[v * n + u] -= df;
                v = u;
                arcs += 1;
            }
            self.value += df;
            rounds += 1;
            trace!("augmented along a {}-arc path", arcs);
        }

        debug!("maximum flow found after {} augmentations", rounds);
        Ok(())
    }

    /// Return the nodes on the source side of a minimum cut.
    ///
    /// These are the nodes still reachable from the source in the residual
    /// network after the last [`solve`][EdmondsKarp::solve]; the total
    /// capacity of the edges leaving this set equals the flow value.
    pub fn mincut(&self) -> Vec<usize> {
        (0..self.g.num_nodes())
            .filter(|&u| self.pred[u] != usize::max_value())
            .collect()
    }
}

/// Solve the max-flow problem using the algorithm of Edmonds-Karp.
///
/// The function computes the value of a maximum flow from `src` to `snk`
/// in `g`. Use [`EdmondsKarp`] directly if the per-edge flow or the
/// minimum cut is needed as well.
pub fn edmondskarp<F>(g: &FlowNetwork<F>, src: usize, snk: usize) -> Result<F>
where
    F: PrimInt + Signed + NumAssign,
{
    let mut maxflow = EdmondsKarp::new(g);
    maxflow.solve(src, snk)?;
    Ok(maxflow.value())
}
