// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Errors of the shortest path computations.

use std::error;
use std::fmt;

/// Error of a shortest path computation or query.
///
/// A missing path is not an error, it is reported as an empty path.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
    /// A matrix is not square or two matrices have different dimensions.
    DimensionMismatch { expected: usize, got: usize },
    /// A vertex index is out of range.
    InvalidVertex { vertex: usize, num_vertices: usize },
    /// The graph contains a negative cycle through `vertex`.
    NegativeCycle { vertex: usize },
    /// The next hops from `src` towards `dst` do not form a path.
    InvalidNextHop { src: usize, dst: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> std::result::Result<(), fmt::Error> {
        use self::Error::*;
        match self {
            DimensionMismatch { expected, got } => {
                write!(fmt, "Dimension mismatch: expected {}, got {}", expected, got)
            }
            InvalidVertex { vertex, num_vertices } => {
                write!(fmt, "Invalid vertex {} (must be in 0..{})", vertex, num_vertices)
            }
            NegativeCycle { vertex } => write!(fmt, "Negative cycle through vertex {}", vertex),
            InvalidNextHop { src, dst } => write!(fmt, "Next hops from {} to {} do not form a path", src, dst),
        }
    }
}

impl error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
