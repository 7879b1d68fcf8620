// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! All-pairs shortest paths on dense weighted digraphs.
//!
//! Graphs are given as adjacency matrices ([`SquareMatrix`]) whose
//! entries are [`Weight`]s, with [`Weight::infinity`] marking missing
//! edges. The algorithm of Floyd and Warshall in
//! [`shortestpath::floydwarshall`] computes all distances and, together
//! with [`shortestpath::nexthop`], the shortest paths themselves.
//!
//! ```
//! use rs_apsp::{builder, output};
//! use rs_apsp::shortestpath::floydwarshall;
//!
//! let adj = builder::directed(4, vec![(0, 1, 1.0), (1, 2, 1.0), (0, 2, 3.0), (2, 3, 0.5)]).unwrap();
//! let sp = floydwarshall::solve(&adj).unwrap();
//! assert_eq!(sp.distance(0, 3).unwrap(), 2.5);
//! assert_eq!(output::path_to_string(&sp.path(0, 3).unwrap()), "0 -> 1 -> 2 -> 3");
//! ```

mod num {
    pub use num_traits as traits;
}

// # Data structures

pub mod error;
pub use self::error::{Error, Result};

pub mod weight;
pub use self::weight::Weight;

pub mod matrix;
pub use self::matrix::SquareMatrix;

pub mod builder;

// # Algorithms

pub mod shortestpath;

// # Input and output

pub mod output;

#[cfg(feature = "dimacs")]
pub mod dimacs;
