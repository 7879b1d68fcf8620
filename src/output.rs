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

//! Printing distance matrices and paths.

use crate::matrix::SquareMatrix;
use crate::weight::Weight;

use std::fmt::Display;
use std::io::{self, Write};

/// Write a distance matrix, one row per line.
///
/// Infinite entries are written as `inf`.
pub fn write_distances<Wr, W>(mut w: Wr, dist: &SquareMatrix<W>) -> io::Result<()>
where
    Wr: Write,
    W: Weight + Display,
{
    for row in dist.rows() {
        for (j, d) in row.iter().enumerate() {
            if j > 0 {
                write!(w, " ")?;
            }
            if d.is_infinite() {
                write!(w, "inf")?;
            } else {
                write!(w, "{}", d)?;
            }
        }
        writeln!(w)?;
    }
    Ok(())
}

/// Write a path as `v0 -> v1 -> ... -> vk`.
///
/// An empty path is written as `no path`.
pub fn write_path<Wr: Write>(mut w: Wr, path: &[usize]) -> io::Result<()> {
    writeln!(w, "{}", path_to_string(path))
}

/// Return the string representation of a path, see [`write_path`].
///
/// ```
/// use rs_apsp::output::path_to_string;
///
/// assert_eq!(path_to_string(&[0, 2, 3]), "0 -> 2 -> 3");
/// assert_eq!(path_to_string(&[]), "no path");
/// ```
pub fn path_to_string(path: &[usize]) -> String {
    if path.is_empty() {
        return "no path".to_string();
    }
    path.iter().map(|u| u.to_string()).collect::<Vec<_>>().join(" -> ")
}
