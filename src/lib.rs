// Copyright (c) 2024, 2025 The netrel developers
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! A library for network flow and path reliability algorithms.
//!
//! The crate provides two solvers over simple in-memory network models:
//!
//! - [`maxflow::edmondskarp()`] computes a maximum flow between two nodes
//!   of a capacitated directed network ([`FlowNetwork`]).
//! - [`reliability::safest_path()`] computes the path between two nodes of a
//!   [`ReliabilityNetwork`] that maximizes the product of per-link success
//!   probabilities.
//!
//! Both solvers are synchronous, deterministic and allocate all of their
//! working state per call (or per solver instance), so independent
//! invocations never share mutable state.

// # Data structures

pub mod network;
pub use self::network::{FlowNetwork, ReliabilityNetwork};

pub mod error;
pub use self::error::{Error, Result};

// # Algorithms

pub mod maxflow;
pub mod reliability;
