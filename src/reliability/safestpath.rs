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

//! Safest path by maximum end-to-end reliability.
//!
//! A path functions end-to-end with the product of the success
//! probabilities of its links. Maximizing that product is the same as
//! minimizing the sum of `-ln(p)` over the path, since `-ln` maps `(0, 1]`
//! monotonically decreasing onto `[0, inf)` and turns products into sums.
//! The transformed weights are non-negative, so the search is a plain
//! Dijkstra run; the reliability is recovered as `exp(-distance)`.
//!
//! Links with probability zero carry infinite transformed weight and are
//! skipped outright, never fed into the logarithm. Ties between equally
//! reliable paths are broken arbitrarily by the order in which nodes leave
//! the internal priority queue; callers that need a deterministic choice
//! among optima must add their own secondary criterion.
//!
//! # Example
//!
//! ```
//! use netrel::ReliabilityNetwork;
//! use netrel::reliability::safest_path;
//!
//! let mut g = ReliabilityNetwork::new(5)?;
//! g.add_link(0, 1, 0.9)?;
//! g.add_link(1, 2, 0.8)?;
//! g.add_link(2, 3, 0.9)?;
//! g.add_link(3, 4, 0.7)?;
//!
//! let result = safest_path(&g, 0, 4)?;
//! assert!((result.reliability - 0.4536).abs() < 1e-9);
//! assert_eq!(result.path, vec![0, 1, 2, 3, 4]);
//! # Ok::<(), netrel::Error>(())
//! ```

use crate::error::Result;
use crate::network::ReliabilityNetwork;

use log::debug;
use ordered_float::OrderedFloat;

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The outcome of a safest path search.
#[derive(Clone, Debug, PartialEq)]
pub struct PathReliability {
    /// Probability in `[0, 1]` that the path functions end-to-end.
    ///
    /// Zero iff the destination is unreachable.
    pub reliability: f64,
    /// The nodes on the path from source to destination, both inclusive.
    ///
    /// Empty iff the destination is unreachable.
    pub path: Vec<usize>,
}

impl PathReliability {
    fn unreachable() -> Self {
        PathReliability {
            reliability: 0.0,
            path: Vec::new(),
        }
    }
}

/// Safest path solver based on Dijkstra's algorithm.
///
/// The solver keeps its working arrays (distances, parents, heap) between
/// calls to [`solve`][SafestPath::solve], so an instance can be reused for
/// several queries on the same network.
pub struct SafestPath<'a> {
    g: &'a ReliabilityNetwork,
    dist: Vec<f64>,
    parent: Vec<usize>,
    heap: BinaryHeap<Reverse<(OrderedFloat<f64>, usize)>>,
}

impl<'a> SafestPath<'a> {
    /// Create a new solver instance for a network.
    pub fn new(g: &'a ReliabilityNetwork) -> Self {
        let n = g.num_nodes();
        SafestPath {
            g,
            dist: vec![f64::INFINITY; n],
            parent: vec![usize::max_value(); n],
            heap: BinaryHeap::with_capacity(n),
        }
    }

    /// Return the underlying network.
    pub fn as_network(&self) -> &'a ReliabilityNetwork {
        self.g
    }

    /// Find the most reliable path from `src` to `dst`.
    ///
    /// An unreachable destination is a regular result with reliability
    /// zero and an empty path. If `src == dst` the path is the single
    /// node itself with reliability one.
    pub fn solve(&mut self, src: usize, dst: usize) -> Result<PathReliability> {
        self.g.check_node(src)?;
        self.g.check_node(dst)?;

        self.dist.fill(f64::INFINITY);
        self.parent.fill(usize::max_value());
        self.heap.clear();

        self.dist[src] = 0.0;
        self.heap.push(Reverse((OrderedFloat(0.0), src)));

        while let Some(Reverse((OrderedFloat(d), u))) = self.heap.pop() {
            // outdated entry, the node was already settled with a
            // smaller distance
            if d > self.dist[u] {
                continue;
            }
            // the distance of the minimal unsettled node is final
            if u == dst {
                break;
            }
            for &(v, p) in self.g.links(u) {
                if p <= 0.0 {
                    continue;
                }
                let dv = d - p.ln();
                if dv < self.dist[v] {
                    self.dist[v] = dv;
                    self.parent[v] = u;
                    self.heap.push(Reverse((OrderedFloat(dv), v)));
                }
            }
        }

        if self.dist[dst].is_infinite() {
            debug!("node {} is unreachable from {}", dst, src);
            return Ok(PathReliability::unreachable());
        }

        // undo the log transform and collect the path backwards
        let reliability = (-self.dist[dst]).exp();
        let mut path = vec![dst];
        let mut v = dst;
        while v != src {
            v = self.parent[v];
            path.push(v);
        }
        path.reverse();

        debug!(
            "safest {}-{} path has {} nodes, reliability {:.6}",
            src,
            dst,
            path.len(),
            reliability
        );
        Ok(PathReliability { reliability, path })
    }
}

/// Find the most reliable path between two nodes.
///
/// Convenience wrapper around [`SafestPath`] for a single query.
pub fn safest_path(g: &ReliabilityNetwork, src: usize, dst: usize) -> Result<PathReliability> {
    SafestPath::new(g).solve(src, dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn source_equals_destination() {
        let mut g = ReliabilityNetwork::new(2).unwrap();
        g.add_link(0, 1, 0.5).unwrap();
        let result = safest_path(&g, 1, 1).unwrap();
        assert_eq!(result.reliability, 1.0);
        assert_eq!(result.path, vec![1]);
    }

    #[test]
    fn zero_probability_links_are_skipped() {
        let mut g = ReliabilityNetwork::new(3).unwrap();
        g.add_link(0, 1, 0.0).unwrap();
        g.add_link(1, 2, 0.9).unwrap();
        assert_eq!(safest_path(&g, 0, 2).unwrap(), PathReliability::unreachable());
    }

    #[test]
    fn out_of_range_nodes_are_rejected() {
        let g = ReliabilityNetwork::new(2).unwrap();
        assert_eq!(
            safest_path(&g, 0, 2).unwrap_err(),
            Error::NodeOutOfRange {
                node: 2,
                num_nodes: 2
            }
        );
    }

    #[test]
    fn solver_is_reusable() {
        let mut g = ReliabilityNetwork::new(4).unwrap();
        g.add_link(0, 1, 0.5).unwrap();
        g.add_link(1, 2, 0.5).unwrap();

        let mut solver = SafestPath::new(&g);
        let first = solver.solve(0, 2).unwrap();
        assert!((first.reliability - 0.25).abs() < 1e-9);
        assert_eq!(first.path, vec![0, 1, 2]);
        // node 3 is isolated
        assert_eq!(solver.solve(0, 3).unwrap(), PathReliability::unreachable());
        let again = solver.solve(0, 2).unwrap();
        assert_eq!(again, first);
    }
}
