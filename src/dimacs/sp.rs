/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! This module implements a read function for the DIMACS shortest
//! path format. A DIMACS file must look as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p sp <n> <m>`,
//!    where `<n>` is an integer denoting the number of nodes and
//!    `<m>` an integer denoting the number of arcs.
//! 4. after the problem line there must be exactly `m` arc lines
//!    `a <u> <v> <w>` denoting the source and sink nodes of an arc
//!    (numbered `1..n`) and its weight `<w>`.
//!
//! Loops are not allowed. Parallel arcs are accepted, only the
//! cheapest one is kept in the adjacency matrix.

use super::{Error, Lines, Result, Tokens};
use crate::builder;
use crate::matrix::SquareMatrix;
use crate::weight::Weight;

use std::fmt::Display;
use std::io::{Read, Write};
use std::str::FromStr;

/// Read a shortest path instance as adjacency matrix.
pub fn read<R, W>(r: R) -> Result<SquareMatrix<W>>
where
    R: Read,
    W: Weight + FromStr,
    W::Err: Display,
{
    let mut lines = Lines::new(r);

    // Read the problem line.
    let (line, text) = match lines.next() {
        Some(l) => l?,
        None => {
            return Err(Error::Format {
                line: lines.line_number(),
                msg: "unexpected end of file, expected 'p' line".to_string(),
            })
        }
    };
    let mut pline = Tokens::new(&text, line);
    pline.expect("p")?;
    pline.expect("sp")?;
    let nnodes: usize = pline.number()?;
    let nedges: usize = pline.number()?;
    pline.end()?;

    let mut adj = builder::empty(nnodes);
    let mut narcs = 0;

    while let Some(l) = lines.next() {
        let (line, text) = l?;
        let mut toks = Tokens::new(&text, line);
        toks.expect("a")?;
        let u: usize = toks.number()?;
        let v: usize = toks.number()?;
        let w: W = toks.number()?;
        toks.end()?;

        if u < 1 || u > nnodes {
            return Err(Error::Data {
                line: toks.line,
                msg: format!("invalid source node id {} (must be in 1..{})", u, nnodes),
            });
        }

        if v < 1 || v > nnodes {
            return Err(Error::Data {
                line: toks.line,
                msg: format!("invalid sink node id {} (must be in 1..{})", v, nnodes),
            });
        }

        if u == v {
            return Err(Error::Data {
                line: toks.line,
                msg: format!("invalid loop ({},{}) in arc", u, u),
            });
        }

        if w.is_infinite() {
            return Err(Error::Data {
                line: toks.line,
                msg: format!("arc ({},{}) has infinite weight", u, v),
            });
        }

        if narcs == nedges {
            return Err(Error::Data {
                line: toks.line,
                msg: format!("unexpected 'a' line (expected exactly {} arcs)", nedges),
            });
        }

        narcs += 1;
        builder::add_arc(&mut adj, u - 1, v - 1, w).map_err(|e| Error::Data {
            line: toks.line,
            msg: e.to_string(),
        })?;
    }

    if narcs != nedges {
        return Err(Error::Data {
            line: lines.line_number(),
            msg: format!("expected {} arcs, got {}", nedges, narcs),
        });
    }

    Ok(adj)
}

pub fn read_from_file<W>(filename: &str) -> Result<SquareMatrix<W>>
where
    W: Weight + FromStr,
    W::Err: Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write an adjacency matrix as shortest path instance.
///
/// Every finite entry off the diagonal is written as an arc.
pub fn write<Wr, W>(mut w: Wr, adj: &SquareMatrix<W>) -> std::io::Result<()>
where
    Wr: Write,
    W: Weight + Display,
{
    let arcs = (0..adj.dim())
        .flat_map(|u| (0..adj.dim()).map(move |v| (u, v)))
        .filter(|&(u, v)| u != v && adj[(u, v)].is_finite())
        .collect::<Vec<_>>();

    writeln!(w, "p sp {} {}", adj.dim(), arcs.len())?;
    for (u, v) in arcs {
        writeln!(w, "a {} {} {}", u + 1, v + 1, adj[(u, v)])?;
    }

    Ok(())
}

/// Write an adjacency matrix to a named file.
pub fn write_to_file<W>(filename: &str, adj: &SquareMatrix<W>) -> std::io::Result<()>
where
    W: Weight + Display,
{
    write(&mut std::fs::File::create(filename)?, adj)
}
