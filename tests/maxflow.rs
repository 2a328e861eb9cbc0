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

use netrel::maxflow::{edmondskarp, EdmondsKarp};
use netrel::{Error, FlowNetwork};

fn network(n: usize, edges: &[(usize, usize, i64)]) -> FlowNetwork<i64> {
    let mut g = FlowNetwork::new(n).unwrap();
    for &(u, v, c) in edges {
        g.add_edge(u, v, c).unwrap();
    }
    g
}

/// Assert flow conservation at all inner nodes and capacity respect on
/// all edges for a solved instance.
fn check_flow(solver: &EdmondsKarp<i64>, src: usize, snk: usize) {
    let g = solver.as_network();
    let n = g.num_nodes();
    for u in 0..n {
        for v in 0..n {
            assert!(
                solver.flow(u, v) <= g.capacity(u, v),
                "flow({}, {}) exceeds capacity",
                u,
                v
            );
            assert_eq!(solver.flow(u, v), -solver.flow(v, u), "flow not antisymmetric");
        }
    }
    for u in (0..n).filter(|&u| u != src && u != snk) {
        let net: i64 = (0..n).map(|v| solver.flow(u, v)).sum();
        assert_eq!(net, 0, "flow not conserved at node {}", u);
    }
}

#[test]
fn two_disjoint_paths() {
    let g = network(
        6,
        &[(0, 1, 16), (0, 2, 13), (1, 3, 12), (2, 4, 14), (3, 5, 20), (4, 5, 4)],
    );
    let mut solver = EdmondsKarp::new(&g);
    solver.solve(0, 5).unwrap();
    assert_eq!(solver.value(), 16);
    check_flow(&solver, 0, 5);
}

#[test]
fn clrs_network() {
    // the classic network from Cormen et al., chapter 26
    let g = network(
        6,
        &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 2, 10),
            (2, 1, 4),
            (1, 3, 12),
            (3, 2, 9),
            (2, 4, 14),
            (4, 3, 7),
            (3, 5, 20),
            (4, 5, 4),
        ],
    );
    let mut solver = EdmondsKarp::new(&g);
    solver.solve(0, 5).unwrap();
    assert_eq!(solver.value(), 23);
    check_flow(&solver, 0, 5);
}

#[test]
fn flow_cancellation_over_reverse_edges() {
    // the only path through 1 -> 4 must be rerouted once the better
    // assignment is found
    let g = network(
        6,
        &[
            (0, 1, 10),
            (0, 2, 10),
            (1, 3, 4),
            (1, 4, 8),
            (2, 4, 9),
            (4, 3, 6),
            (3, 5, 10),
            (4, 5, 10),
        ],
    );
    let mut solver = EdmondsKarp::new(&g);
    solver.solve(0, 5).unwrap();
    assert_eq!(solver.value(), 19);
    check_flow(&solver, 0, 5);
}

#[test]
fn source_equals_sink() {
    let g = network(4, &[(0, 1, 3), (1, 2, 3), (2, 3, 3)]);
    assert_eq!(edmondskarp(&g, 2, 2).unwrap(), 0);
}

#[test]
fn all_capacities_zero() {
    let g = FlowNetwork::<i64>::new(5).unwrap();
    for src in 0..5 {
        for snk in 0..5 {
            assert_eq!(edmondskarp(&g, src, snk).unwrap(), 0);
        }
    }
}

#[test]
fn disconnected_sink() {
    let g = network(4, &[(0, 1, 10), (2, 3, 5)]);
    assert_eq!(edmondskarp(&g, 0, 3).unwrap(), 0);
}

#[test]
fn mincut_capacity_equals_flow_value() {
    let g = network(
        6,
        &[
            (0, 1, 16),
            (0, 2, 13),
            (1, 2, 10),
            (2, 1, 4),
            (1, 3, 12),
            (3, 2, 9),
            (2, 4, 14),
            (4, 3, 7),
            (3, 5, 20),
            (4, 5, 4),
        ],
    );
    let mut solver = EdmondsKarp::new(&g);
    solver.solve(0, 5).unwrap();

    let cut = solver.mincut();
    assert!(cut.contains(&0));
    assert!(!cut.contains(&5));

    let n = g.num_nodes();
    let in_cut = |u: usize| cut.contains(&u);
    let cut_capacity: i64 = (0..n)
        .flat_map(|u| (0..n).map(move |v| (u, v)))
        .filter(|&(u, v)| in_cut(u) && !in_cut(v))
        .map(|(u, v)| g.capacity(u, v))
        .sum();
    assert_eq!(cut_capacity, solver.value());
}

#[test]
fn monotone_in_capacities() {
    let edges = [
        (0usize, 1usize, 16i64),
        (0, 2, 13),
        (1, 3, 12),
        (2, 4, 14),
        (3, 5, 20),
        (4, 5, 4),
    ];
    let base = edmondskarp(&network(6, &edges), 0, 5).unwrap();

    // raising any single capacity must never lower the flow value
    for i in 0..edges.len() {
        let mut raised = edges;
        raised[i].2 += 5;
        let value = edmondskarp(&network(6, &raised), 0, 5).unwrap();
        assert!(value >= base, "raising edge {:?} lowered the flow", edges[i]);
    }
}

#[test]
fn wide_capacities_use_the_callers_type() {
    let mut g = FlowNetwork::<i64>::new(3).unwrap();
    g.add_edge(0, 1, 40_000_000_000).unwrap();
    g.add_edge(1, 2, 30_000_000_000).unwrap();
    assert_eq!(edmondskarp(&g, 0, 2).unwrap(), 30_000_000_000);
}

#[test]
fn malformed_input_is_reported() {
    let g = FlowNetwork::<i64>::new(3).unwrap();
    assert_eq!(
        edmondskarp(&g, 7, 1).unwrap_err(),
        Error::NodeOutOfRange {
            node: 7,
            num_nodes: 3
        }
    );
    assert_eq!(
        edmondskarp(&g, 0, 3).unwrap_err(),
        Error::NodeOutOfRange {
            node: 3,
            num_nodes: 3
        }
    );

    assert!(matches!(
        FlowNetwork::from_matrix(&[vec![0i64, 2], vec![-1, 0]]),
        Err(Error::NegativeCapacity { from: 1, to: 0 })
    ));
    assert!(matches!(
        FlowNetwork::from_matrix(&[vec![0i64, 2, 0], vec![0, 0, 1]]),
        Err(Error::DimensionMismatch { .. })
    ));
}

#[test]
fn from_matrix_matches_add_edge() {
    let matrix = vec![
        vec![0i64, 3, 2, 0],
        vec![0, 0, 5, 2],
        vec![0, 0, 0, 3],
        vec![0, 0, 0, 0],
    ];
    let g = FlowNetwork::from_matrix(&matrix).unwrap();
    let h = network(4, &[(0, 1, 3), (0, 2, 2), (1, 2, 5), (1, 3, 2), (2, 3, 3)]);
    assert_eq!(edmondskarp(&g, 0, 3).unwrap(), edmondskarp(&h, 0, 3).unwrap());
    assert_eq!(edmondskarp(&g, 0, 3).unwrap(), 5);
}
