// Copyright (c) 2016, 2017, 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! All-Pairs-Shortest-Path algorithm of Floyd and Warshall.
//!
//! The algorithm runs in `O(n^3)` time on an `n x n` adjacency matrix.
//! Entries equal to [`Weight::infinity`] denote missing edges.
//!
//! Negative edge weights are allowed. If the graph contains a negative
//! cycle, the computation fails with [`Error::NegativeCycle`] instead of
//! returning meaningless distances.

use crate::error::{Error, Result};
use crate::matrix::SquareMatrix;
use crate::shortestpath::nexthop::{self, NextHop};
use crate::weight::Weight;

use log::{debug, warn};

/// Solve the All-Pairs-Shortest-Path-Problem with the algorithm of
/// Floyd and Warshall on a directed graph.
///
/// Returns the matrix of shortest path lengths. Unreachable pairs have
/// infinite distance. The adjacency matrix is not modified.
///
/// # Example
/// ```
/// use rs_apsp::SquareMatrix;
/// use rs_apsp::shortestpath::floydwarshall;
///
/// let inf = i32::MAX;
/// let adj = SquareMatrix::from_rows(vec![
///     vec![  0,   6,   5, inf, inf],
///     vec![inf,   0,   7,   3,  -2],
///     vec![inf, inf,   0,  -4, inf],
///     vec![inf,  -1, inf,   0,   8],
///     vec![  2, inf, inf,   7,   0],
/// ]).unwrap();
///
/// let dist = floydwarshall::distances(&adj).unwrap();
/// assert_eq!(dist.into_rows(), vec![
///     vec![ 0, 0, 5, 1,-2],
///     vec![ 0, 0, 5, 1,-2],
///     vec![-5,-5, 0,-4,-7],
///     vec![-1,-1, 4, 0,-3],
///     vec![ 2, 2, 7, 3, 0],
/// ]);
/// ```
pub fn distances<W: Weight>(adjacency: &SquareMatrix<W>) -> Result<SquareMatrix<W>> {
    let mut dist = adjacency.clone();
    relax(&mut dist, None)?;
    Ok(dist)
}

/// Solve the All-Pairs-Shortest-Path-Problem and maintain the next-hop
/// matrix.
///
/// `next` must be the matrix returned by [`nexthop::init`] for the same
/// adjacency matrix. Afterwards it describes shortest paths, see
/// [`nexthop::reconstruct`].
///
/// Fails with `Error::DimensionMismatch` if the dimensions of the two
/// matrices differ. If the computation fails, `next` is left unchanged.
pub fn distances_with_paths<W: Weight>(adjacency: &SquareMatrix<W>, next: &mut NextHop) -> Result<SquareMatrix<W>> {
    if next.dim() != adjacency.dim() {
        return Err(Error::DimensionMismatch {
            expected: adjacency.dim(),
            got: next.dim(),
        });
    }
    let mut dist = adjacency.clone();
    let mut relaxed = next.clone();
    relax(&mut dist, Some(&mut relaxed))?;
    *next = relaxed;
    Ok(dist)
}

/// Solve the All-Pairs-Shortest-Path-Problem including paths.
///
/// # Example
/// ```
/// use rs_apsp::SquareMatrix;
/// use rs_apsp::shortestpath::floydwarshall;
///
/// let inf = f64::INFINITY;
/// let adj = SquareMatrix::from_rows(vec![
///     vec![0.0, 2.0, 2.0, inf, inf, inf],
///     vec![inf, 0.0, 2.0, inf, inf, inf],
///     vec![inf, inf, 0.0, 2.0, 2.0, 6.0],
///     vec![inf, inf, inf, 0.0, inf, 2.0],
///     vec![inf, inf, inf, inf, 0.0, 2.0],
///     vec![inf, inf, inf, inf, inf, 0.0],
/// ]).unwrap();
///
/// let sp = floydwarshall::solve(&adj).unwrap();
/// assert_eq!(sp.distance(0, 3).unwrap(), 4.0);
/// assert_eq!(sp.path(0, 3).unwrap(), vec![0, 2, 3]);
/// assert_eq!(sp.distance(0, 5).unwrap(), 6.0);
/// assert!(sp.path(5, 0).unwrap().is_empty());
/// ```
pub fn solve<W: Weight>(adjacency: &SquareMatrix<W>) -> Result<ShortestPaths<W>> {
    let mut next = nexthop::init(adjacency)?;
    let dist = distances_with_paths(adjacency, &mut next)?;
    Ok(ShortestPaths { dist, next })
}

/// Distances and next hops of all shortest paths.
#[derive(Clone, Debug)]
pub struct ShortestPaths<W> {
    dist: SquareMatrix<W>,
    next: NextHop,
}

impl<W: Weight> ShortestPaths<W> {
    /// Return the matrix of shortest path lengths.
    pub fn distances(&self) -> &SquareMatrix<W> {
        &self.dist
    }

    /// Return the relaxed next-hop matrix.
    pub fn next_hop(&self) -> &NextHop {
        &self.next
    }

    /// Return the length of a shortest path from `u` to `v`.
    pub fn distance(&self, u: usize, v: usize) -> Result<W> {
        self.dist.check_vertex(u)?;
        self.dist.check_vertex(v)?;
        Ok(self.dist[(u, v)])
    }

    /// Return a shortest path from `u` to `v`, empty if there is none.
    pub fn path(&self, u: usize, v: usize) -> Result<Vec<usize>> {
        self.next.path(u, v)
    }

    /// Return the matrix of shortest path lengths, dropping the next hops.
    pub fn into_distances(self) -> SquareMatrix<W> {
        self.dist
    }
}

/// The relaxation loop.
///
/// The loop over the intermediate vertex `k` must be the outermost one.
/// Triples with an infinite part are skipped, so infinity never takes
/// part in an addition.
fn relax<W: Weight>(dist: &mut SquareMatrix<W>, mut next: Option<&mut NextHop>) -> Result<()> {
    let n = dist.dim();
    debug!("Floyd-Warshall on {} vertices (paths: {})", n, next.is_some());

    for k in 0..n {
        for i in 0..n {
            let dist_ik = dist[(i, k)];
            if dist_ik.is_infinite() {
                continue;
            }
            for j in 0..n {
                let dist_kj = dist[(k, j)];
                if dist_kj.is_infinite() {
                    continue;
                }
                let d = dist_ik.add_finite(dist_kj);
                if d < dist[(i, j)] {
                    dist[(i, j)] = d;
                    if let Some(next) = next.as_deref_mut() {
                        next.relax(i, k, j);
                    }
                }
            }
        }
    }

    if let Some(u) = (0..n).find(|&u| dist[(u, u)] < W::zero()) {
        warn!("Negative cycle through vertex {}", u);
        return Err(Error::NegativeCycle { vertex: u });
    }

    debug!("Floyd-Warshall finished");
    Ok(())
}
