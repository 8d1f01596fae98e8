use clap::{App, Arg};
use dpllsat::formula::dimacs::{parse, parse_file};
use dpllsat::*;
use log::LevelFilter;
use std::time::Instant;

fn main() {
    let matches = App::new("dpllsat")
        .about("Decides satisfiability of a DIMACS CNF formula with DPLL")
        .arg(Arg::with_name("INPUT").help("input file (in CNF); reads stdin if absent").index(1))
        .arg(
            Arg::with_name("dimacs-model")
                .long("dimacs-model")
                .help("print the model as a 'v' line of literals"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("increase logging verbosity (overrides RUST_LOG)"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    let f = match matches.value_of("INPUT") {
        Some(path) => parse_file(path),
        None => parse(std::io::stdin()),
    };

    match f {
        Ok(f) => {
            println!(
                "Parsed formula with {} variables and {} clauses",
                f.num_variables(),
                f.num_clauses()
            );

            let start = Instant::now();
            let mut solver = Solver::new(f.clone());
            let result = solver.solve();
            let elapsed = start.elapsed();

            let exit_code = match &result {
                SatResult::Satisfiable(model) => {
                    debug_assert!(model.satisfies(&f));
                    println!("SAT");
                    if matches.is_present("dimacs-model") {
                        let literals = model.literals().map(|l| l.to_dimacs().to_string()).collect::<Vec<_>>();
                        println!("v {} 0", literals.join(" "));
                    } else {
                        println!("Assignment: {}", model);
                    }
                    0
                }
                SatResult::Unsatisfiable => {
                    println!("UNSAT");
                    1
                }
            };
            println!("Solved in {:.3} ms", elapsed.as_secs_f64() * 1000.0);
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("parse error: {}", e);
            std::process::exit(-1);
        }
    }
}

fn init_logging(verbosity: u64) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbosity {
        0 => {}
        1 => {
            builder.filter_level(LevelFilter::Info);
        }
        2 => {
            builder.filter_level(LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(LevelFilter::Trace);
        }
    }
    builder.format_timestamp(None).init();
}
