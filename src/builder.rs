// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Building adjacency matrices from lists of edges.
//!
//! The returned matrices have a zero diagonal and infinite weight for
//! every pair without an edge. Of several parallel edges only the
//! cheapest one is kept.

use crate::error::Result;
use crate::matrix::SquareMatrix;
use crate::weight::Weight;

/// An empty adjacency matrix on `n` vertices.
pub fn empty<W: Weight>(n: usize) -> SquareMatrix<W> {
    let mut adj = SquareMatrix::filled(n, W::infinity());
    for u in 0..n {
        adj[(u, u)] = W::zero();
    }
    adj
}

/// Build the adjacency matrix of a directed graph on `n` vertices.
///
/// Each arc is a triple `(u, v, w)` of source, sink and weight.
///
/// # Example
///
/// ```
/// use rs_apsp::builder;
///
/// let adj = builder::directed(3, vec![(0, 1, 4), (1, 2, 1), (0, 1, 3)]).unwrap();
/// assert_eq!(adj[(0, 1)], 3);
/// assert_eq!(adj[(1, 0)], i32::MAX);
/// assert_eq!(adj[(2, 2)], 0);
/// ```
pub fn directed<W, I>(n: usize, arcs: I) -> Result<SquareMatrix<W>>
where
    W: Weight,
    I: IntoIterator<Item = (usize, usize, W)>,
{
    let mut adj = empty(n);
    for (u, v, w) in arcs {
        add_arc(&mut adj, u, v, w)?;
    }
    Ok(adj)
}

/// Build the adjacency matrix of an undirected graph on `n` vertices.
///
/// Each edge `(u, v, w)` is inserted in both directions, so the matrix
/// is symmetric.
pub fn undirected<W, I>(n: usize, edges: I) -> Result<SquareMatrix<W>>
where
    W: Weight,
    I: IntoIterator<Item = (usize, usize, W)>,
{
    let mut adj = empty(n);
    for (u, v, w) in edges {
        add_arc(&mut adj, u, v, w)?;
        add_arc(&mut adj, v, u, w)?;
    }
    Ok(adj)
}

/// Insert the arc `(u,v)` unless a cheaper one already exists.
pub(crate) fn add_arc<W: Weight>(adj: &mut SquareMatrix<W>, u: usize, v: usize, w: W) -> Result<()> {
    adj.check_vertex(u)?;
    adj.check_vertex(v)?;
    if w < adj[(u, v)] {
        adj[(u, v)] = w;
    }
    Ok(())
}
