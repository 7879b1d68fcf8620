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

use time::OffsetDateTime;

use rustop::opts;

use rs_apsp::shortestpath::floydwarshall;
use rs_apsp::{builder, dimacs, output, SquareMatrix};

use std::error::Error;
use std::io;

/// The six node example graph.
fn example() -> rs_apsp::Result<SquareMatrix<f64>> {
    let arcs = vec![
        (0, 1, 2.0),
        (0, 2, 2.0),
        (1, 2, 2.0),
        (2, 3, 2.0),
        (2, 4, 2.0),
        (2, 5, 6.0),
        (3, 5, 2.0),
        (4, 5, 2.0),
    ];
    builder::directed(6, arcs)
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Solve the all-pairs shortest path problem with the algorithm of Floyd-Warshall.";
        opt src:Option<usize>, desc:"Source node of the path to print (0-based).";
        opt dst:Option<usize>, desc:"Destination node of the path to print (0-based).";
        opt quiet:bool, desc:"Do not print the distance matrix.";
        param file:Option<String>, desc:"Instance file name in DIMACS sp format (default: built-in example)";
    }
    .parse_or_exit();

    let tstart = OffsetDateTime::now_utc();
    let adj: SquareMatrix<f64> = match args.file {
        Some(ref file) => dimacs::sp::read_from_file(file)?,
        None => example()?,
    };
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());
    println!("  number of nodes: {}", adj.dim());

    let tstart = OffsetDateTime::now_utc();
    let sp = floydwarshall::solve(&adj)?;
    let tend = OffsetDateTime::now_utc();
    println!("Time: {}", (tend - tstart).as_seconds_f64());

    if !args.quiet {
        output::write_distances(io::stdout().lock(), sp.distances())?;
    }

    if let (Some(src), Some(dst)) = (args.src, args.dst) {
        println!("Distance: {}", sp.distance(src, dst)?);
        output::write_path(io::stdout().lock(), &sp.path(src, dst)?)?;
    }

    Ok(())
}
