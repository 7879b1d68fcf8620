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

//! Path reconstruction with a next-hop matrix.
//!
//! The next-hop matrix stores for each pair `(u,v)` the vertex following
//! `u` on the best known path from `u` to `v`, or `None` if no path is
//! known. It is created by [`init`] from the direct edges and updated by
//! [`floydwarshall::distances_with_paths`](super::floydwarshall::distances_with_paths).

use crate::error::{Error, Result};
use crate::matrix::SquareMatrix;
use crate::weight::Weight;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
#[cfg(feature = "serialize")]
use std::convert::TryFrom;

/// The next-hop matrix.
///
/// Only the relaxation of this crate modifies the matrix, so a
/// `NextHop` is either the initial matrix or a fully relaxed one.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serialize",
    serde(try_from = "SquareMatrix<Option<usize>>", into = "SquareMatrix<Option<usize>>")
)]
pub struct NextHop {
    next: SquareMatrix<Option<usize>>,
}

#[cfg(feature = "serialize")]
impl TryFrom<SquareMatrix<Option<usize>>> for NextHop {
    type Error = Error;

    fn try_from(next: SquareMatrix<Option<usize>>) -> Result<Self> {
        for row in next.rows() {
            for &v in row.iter().flatten() {
                next.check_vertex(v)?;
            }
        }
        Ok(NextHop { next })
    }
}

#[cfg(feature = "serialize")]
impl From<NextHop> for SquareMatrix<Option<usize>> {
    fn from(next: NextHop) -> Self {
        next.next
    }
}

/// Create the initial next-hop matrix of an adjacency matrix.
///
/// The next hop from `u` to `v` is `v` if the edge `(u,v)` has finite
/// weight and `None` otherwise. The diagonal follows the same rule.
pub fn init<W: Weight>(adjacency: &SquareMatrix<W>) -> Result<NextHop> {
    let n = adjacency.dim();
    let mut next = SquareMatrix::filled(n, None);
    for u in 0..n {
        for (v, w) in adjacency.row(u).iter().enumerate() {
            if w.is_finite() {
                next[(u, v)] = Some(v);
            }
        }
    }
    Ok(NextHop { next })
}

/// Reconstruct the path from `u` to `v`.
///
/// Returns the sequence of vertices starting at `u` and ending at `v`.
/// The path is empty if there is no path from `u` to `v`.
///
/// On the matrix returned by [`init`] this is the direct edge from `u` to
/// `v` (if any); on a relaxed matrix it is a shortest path.
///
/// # Example
///
/// ```
/// use rs_apsp::SquareMatrix;
/// use rs_apsp::shortestpath::{floydwarshall, nexthop};
///
/// let inf = f64::INFINITY;
/// let adj = SquareMatrix::from_rows(vec![
///     vec![0.0, 1.0, 5.0],
///     vec![inf, 0.0, 1.0],
///     vec![inf, inf, 0.0],
/// ]).unwrap();
///
/// let mut next = nexthop::init(&adj).unwrap();
/// assert_eq!(nexthop::reconstruct(0, 2, &next).unwrap(), vec![0, 2]);
///
/// let dist = floydwarshall::distances_with_paths(&adj, &mut next).unwrap();
/// assert_eq!(dist[(0, 2)], 2.0);
/// assert_eq!(nexthop::reconstruct(0, 2, &next).unwrap(), vec![0, 1, 2]);
/// assert!(nexthop::reconstruct(2, 0, &next).unwrap().is_empty());
/// ```
pub fn reconstruct(u: usize, v: usize, next: &NextHop) -> Result<Vec<usize>> {
    next.path(u, v)
}

impl NextHop {
    /// Return the number of vertices.
    pub fn dim(&self) -> usize {
        self.next.dim()
    }

    /// Return the next hop from `u` towards `v`.
    ///
    /// Panics if `u` or `v` is out of range.
    pub fn get(&self, u: usize, v: usize) -> Option<usize> {
        self.next[(u, v)]
    }

    /// Return the underlying matrix.
    pub fn as_matrix(&self) -> &SquareMatrix<Option<usize>> {
        &self.next
    }

    /// Reconstruct the path from `u` to `v`, see [`reconstruct`].
    ///
    /// Fails with `Error::InvalidNextHop` if the next hops run into a
    /// cycle or break off before reaching `v`. Matrices computed by this
    /// crate never do.
    pub fn path(&self, u: usize, v: usize) -> Result<Vec<usize>> {
        self.next.check_vertex(u)?;
        self.next.check_vertex(v)?;

        let mut cur = match self.next[(u, v)] {
            Some(_) => u,
            None => return Ok(vec![]),
        };

        let invalid = Error::InvalidNextHop { src: u, dst: v };
        let mut path = vec![u];
        while cur != v {
            // a simple path has at most `n` vertices
            if path.len() >= self.dim() {
                return Err(invalid);
            }
            cur = self.next[(cur, v)].ok_or(invalid)?;
            path.push(cur);
        }

        Ok(path)
    }

    /// The relax hook: the path from `i` to `j` now runs through `k`.
    pub(crate) fn relax(&mut self, i: usize, k: usize, j: usize) {
        self.next[(i, j)] = self.next[(i, k)];
    }
}
