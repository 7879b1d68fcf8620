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

//! A dense square matrix indexed by pairs of vertices.

use crate::error::{Error, Result};

use std::ops::{Index, IndexMut};
use std::slice::ChunksExact;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
#[cfg(feature = "serialize")]
use std::convert::TryFrom;

/// A square `n x n` matrix stored row by row.
///
/// Entries are accessed by `(row, column)` pairs.
///
/// # Example
///
/// ```
/// use rs_apsp::SquareMatrix;
///
/// let m = SquareMatrix::from_rows(vec![vec![0, 1], vec![2, 0]]).unwrap();
/// assert_eq!(m.dim(), 2);
/// assert_eq!(m[(1, 0)], 2);
/// assert_eq!(m.row(0), &[0, 1]);
/// ```
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialize", serde(try_from = "RawMatrix<T>"))]
pub struct SquareMatrix<T> {
    n: usize,
    data: Vec<T>,
}

/// Serialized form of a matrix, checked before use.
#[cfg(feature = "serialize")]
#[derive(Deserialize)]
struct RawMatrix<T> {
    n: usize,
    data: Vec<T>,
}

#[cfg(feature = "serialize")]
impl<T> TryFrom<RawMatrix<T>> for SquareMatrix<T> {
    type Error = Error;

    fn try_from(raw: RawMatrix<T>) -> Result<Self> {
        let expected = raw.n.checked_mul(raw.n).ok_or(Error::DimensionMismatch {
            expected: raw.n,
            got: raw.data.len(),
        })?;
        if raw.data.len() != expected {
            return Err(Error::DimensionMismatch {
                expected,
                got: raw.data.len(),
            });
        }
        Ok(SquareMatrix { n: raw.n, data: raw.data })
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// Create an `n x n` matrix with all entries set to `value`.
    pub fn filled(n: usize, value: T) -> Self {
        SquareMatrix {
            n,
            data: vec![value; n * n],
        }
    }
}

impl<T> SquareMatrix<T> {
    /// Create a matrix from a vector of rows.
    ///
    /// Fails with `Error::DimensionMismatch` if some row does not have
    /// exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        let n = rows.len();
        let mut data = Vec::with_capacity(n * n);
        for row in rows {
            if row.len() != n {
                return Err(Error::DimensionMismatch {
                    expected: n,
                    got: row.len(),
                });
            }
            data.extend(row);
        }
        Ok(SquareMatrix { n, data })
    }

    /// Return the number of rows (and columns).
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Return the entries of row `i`.
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Return an iterator over all rows.
    pub fn rows(&self) -> Rows<T> {
        Rows {
            // `chunks_exact` panics on a zero chunk size
            it: self.data.chunks_exact(self.n.max(1)),
        }
    }

    /// Return an entry or `None` if the position is out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<&T> {
        if i < self.n && j < self.n {
            Some(&self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Apply `f` to every entry.
    pub fn map<U, F>(&self, f: F) -> SquareMatrix<U>
    where
        F: FnMut(&T) -> U,
    {
        SquareMatrix {
            n: self.n,
            data: self.data.iter().map(f).collect(),
        }
    }

    /// Convert the matrix into a vector of rows.
    pub fn into_rows(self) -> Vec<Vec<T>> {
        let n = self.n;
        let mut rows = Vec::with_capacity(n);
        let mut it = self.data.into_iter();
        for _ in 0..n {
            rows.push(it.by_ref().take(n).collect());
        }
        rows
    }

    pub(crate) fn check_vertex(&self, u: usize) -> Result<()> {
        if u < self.n {
            Ok(())
        } else {
            Err(Error::InvalidVertex {
                vertex: u,
                num_vertices: self.n,
            })
        }
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(i < self.n && j < self.n, "index ({},{}) out of range for dimension {}", i, j, self.n);
        &self.data[i * self.n + j]
    }
}

impl<T> IndexMut<(usize, usize)> for SquareMatrix<T> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(i < self.n && j < self.n, "index ({},{}) out of range for dimension {}", i, j, self.n);
        &mut self.data[i * self.n + j]
    }
}

/// Iterator over the rows of a matrix.
pub struct Rows<'a, T> {
    it: ChunksExact<'a, T>,
}

impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        self.it.next()
    }
}

#[cfg(test)]
mod tests {
    use super::SquareMatrix;
    use crate::Error;

    #[test]
    fn test_from_rows() {
        let m = SquareMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
        assert_eq!(m.dim(), 3);
        assert_eq!(m[(0, 2)], 3);
        assert_eq!(m[(2, 0)], 7);
        assert_eq!(m.rows().map(|r| r.iter().sum::<i32>()).collect::<Vec<_>>(), vec![6, 15, 24]);
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.clone().into_rows(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    }

    #[test]
    fn test_ragged_rows() {
        match SquareMatrix::from_rows(vec![vec![1, 2], vec![3]]) {
            Err(Error::DimensionMismatch { expected, got }) => {
                assert_eq!(expected, 2);
                assert_eq!(got, 1);
            }
            _ => panic!("ragged rows must be rejected"),
        }
        assert!(SquareMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).is_err());
    }

    #[test]
    fn test_empty() {
        let m = SquareMatrix::<i32>::from_rows(vec![]).unwrap();
        assert_eq!(m.dim(), 0);
        assert_eq!(m.rows().count(), 0);
        assert!(m.into_rows().is_empty());
    }

    #[test]
    fn test_map() {
        let mut m = SquareMatrix::filled(2, 1);
        m[(0, 1)] = 5;
        assert_eq!(m.map(|&x| x * 2).into_rows(), vec![vec![2, 10], vec![2, 2]]);
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::SquareMatrix;
        use serde_json;

        #[test]
        fn test_serde() {
            let m = SquareMatrix::from_rows(vec![vec![0.0, 1.5], vec![2.0, 0.0]]).unwrap();
            let serialized = serde_json::to_string(&m).unwrap();
            let h: SquareMatrix<f64> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(m, h);
        }

        #[test]
        fn test_reject_non_square() {
            assert!(serde_json::from_str::<SquareMatrix<f64>>(r#"{"n":2,"data":[0.0,1.0,2.0]}"#).is_err());
            assert!(serde_json::from_str::<SquareMatrix<f64>>(r#"{"n":1,"data":[]}"#).is_err());
            let m: SquareMatrix<f64> = serde_json::from_str(r#"{"n":0,"data":[]}"#).unwrap();
            assert_eq!(m.dim(), 0);
        }
    }
}
