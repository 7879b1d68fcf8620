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

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use rs_apsp::shortestpath::{floydwarshall, nexthop};
use rs_apsp::{builder, Error, SquareMatrix};

const INF: i64 = i64::MAX;

/// Random digraph with `n` nodes and arc probability `p`.
///
/// If `dag` is set, arcs only go from smaller to larger nodes and may
/// have negative weights.
fn random_graph(rng: &mut StdRng, n: usize, p: f64, dag: bool) -> SquareMatrix<i64> {
    let mut arcs = vec![];
    for u in 0..n {
        for v in 0..n {
            if u == v || (dag && u > v) || !rng.gen_bool(p) {
                continue;
            }
            let w = if dag { rng.gen_range(-10..20) } else { rng.gen_range(0..20) };
            arcs.push((u, v, w));
        }
    }
    builder::directed(n, arcs).unwrap()
}

/// Shortest distances from `src` by Moore-Bellman-Ford.
fn reference(adj: &SquareMatrix<i64>, src: usize) -> Vec<i64> {
    let n = adj.dim();
    let mut dist = vec![INF; n];
    dist[src] = 0;
    for _ in 0..n {
        for u in 0..n {
            if dist[u] == INF {
                continue;
            }
            for v in 0..n {
                if u != v && adj[(u, v)] != INF && dist[u] + adj[(u, v)] < dist[v] {
                    dist[v] = dist[u] + adj[(u, v)];
                }
            }
        }
    }
    dist
}

fn path_length(adj: &SquareMatrix<i64>, path: &[usize]) -> i64 {
    path.windows(2).map(|e| adj[(e[0], e[1])]).sum()
}

#[test]
fn test_random_graphs() {
    let mut rng = StdRng::seed_from_u64(42);
    for &(n, p, dag) in &[(1, 0.5, false), (5, 0.3, false), (12, 0.2, false), (20, 0.1, false), (15, 0.3, true)] {
        for _ in 0..5 {
            let adj = random_graph(&mut rng, n, p, dag);
            let sp = floydwarshall::solve(&adj).unwrap();
            let dist = sp.distances();

            for u in 0..n {
                assert_eq!(dist.row(u), &reference(&adj, u)[..]);
                assert_eq!(dist[(u, u)], 0);
            }

            for i in 0..n {
                for k in 0..n {
                    for j in 0..n {
                        if dist[(i, k)] != INF && dist[(k, j)] != INF {
                            assert!(dist[(i, j)] <= dist[(i, k)] + dist[(k, j)]);
                        }
                    }
                }
            }

            for u in 0..n {
                for v in 0..n {
                    let path = sp.path(u, v).unwrap();
                    if dist[(u, v)] == INF {
                        assert!(path.is_empty());
                    } else {
                        assert_eq!(path.first(), Some(&u));
                        assert_eq!(path.last(), Some(&v));
                        assert_eq!(path_length(&adj, &path), dist[(u, v)]);
                    }
                }
            }
        }
    }
}

#[test]
fn test_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let adj = random_graph(&mut rng, 16, 0.2, false);
    let first = floydwarshall::distances(&adj).unwrap();
    let second = floydwarshall::distances(&adj).unwrap();
    assert_eq!(first, second);
    // relaxing the result again changes nothing
    assert_eq!(floydwarshall::distances(&first).unwrap(), first);
}

#[test]
fn test_undirected_symmetric() {
    let mut rng = StdRng::seed_from_u64(13);
    let n = 14;
    let mut edges = vec![];
    for u in 0..n {
        for v in u + 1..n {
            if rng.gen_bool(0.25) {
                edges.push((u, v, rng.gen_range(0.0..10.0f64)));
            }
        }
    }
    let adj = builder::undirected(n, edges).unwrap();
    let dist = floydwarshall::distances(&adj).unwrap();
    for u in 0..n {
        for v in 0..n {
            let (a, b) = (dist[(u, v)], dist[(v, u)]);
            assert!(a.is_infinite() == b.is_infinite());
            if a.is_finite() {
                assert!((a - b).abs() < 1e-9);
            }
        }
    }
}

#[test]
fn test_fixture_paths() {
    let adj = builder::directed(
        6,
        vec![
            (0, 1, 2.0),
            (0, 2, 2.0),
            (1, 2, 2.0),
            (2, 3, 2.0),
            (2, 4, 2.0),
            (2, 5, 6.0),
            (3, 5, 2.0),
            (4, 5, 2.0),
        ],
    )
    .unwrap();

    let mut next = nexthop::init(&adj).unwrap();
    // one-hop query on the initial matrix
    assert!(nexthop::reconstruct(0, 3, &next).unwrap().is_empty());
    assert_eq!(nexthop::reconstruct(0, 2, &next).unwrap(), vec![0, 2]);

    let dist = floydwarshall::distances_with_paths(&adj, &mut next).unwrap();
    assert_eq!(dist[(0, 3)], 4.0);
    assert_eq!(nexthop::reconstruct(0, 3, &next).unwrap(), vec![0, 2, 3]);
    assert_eq!(dist[(0, 5)], 6.0);
    let path = nexthop::reconstruct(0, 5, &next).unwrap();
    assert!(path == vec![0, 2, 3, 5] || path == vec![0, 2, 4, 5]);
    assert_eq!(nexthop::reconstruct(4, 4, &next).unwrap(), vec![4]);
    assert!(nexthop::reconstruct(5, 0, &next).unwrap().is_empty());
    assert_eq!(
        nexthop::reconstruct(0, 6, &next),
        Err(Error::InvalidVertex {
            vertex: 6,
            num_vertices: 6
        })
    );
}

#[test]
fn test_negative_cycle() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut adj = random_graph(&mut rng, 10, 0.3, true);
    // cycle 0 -> 1 -> 0 of length -4
    adj[(0, 1)] = -5;
    adj[(1, 0)] = 1;
    match floydwarshall::solve(&adj) {
        Err(Error::NegativeCycle { vertex }) => assert_eq!(vertex, 0),
        Err(e) => panic!("unexpected error: {}", e),
        Ok(_) => panic!("negative cycle not detected"),
    }
}

#[test]
fn test_large_integer_weights() {
    let big = i64::MAX / 2;
    let adj = builder::directed(3, vec![(0, 1, big), (1, 2, big)]).unwrap();
    let dist = floydwarshall::distances(&adj).unwrap();
    assert_eq!(dist[(0, 1)], big);
    // big + big == i64::MAX - 1 is still finite
    assert_eq!(dist[(0, 2)], big + big);
    assert_eq!(dist[(2, 0)], INF);
}
