use clap::{value_t, App, Arg, ArgMatches};
use dpllsat::formula::dimacs::{self, unique_path};
use dpllsat::formula::random::random_formula;
use dpllsat::Formula;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const DEFAULT_OUTPUT_DIR: &str = "tests/cnf";

fn main() {
    env_logger::init();

    let matches = App::new("dpllsat-generate")
        .about("Generates random DIMACS CNF formulas")
        .arg(
            Arg::with_name("vars")
                .long("vars")
                .takes_value(true)
                .default_value("50")
                .help("number of variables"),
        )
        .arg(
            Arg::with_name("clauses")
                .long("clauses")
                .takes_value(true)
                .default_value("200")
                .help("number of clauses"),
        )
        .arg(
            Arg::with_name("min-len")
                .long("min-len")
                .takes_value(true)
                .default_value("2")
                .help("minimum clause length (at least 1)"),
        )
        .arg(
            Arg::with_name("max-len")
                .long("max-len")
                .takes_value(true)
                .default_value("3")
                .help("maximum clause length"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .help("random seed; file i of a batch uses seed + i"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("output file for a single formula; stdout if absent"),
        )
        .arg(
            Arg::with_name("count")
                .long("count")
                .takes_value(true)
                .default_value("1")
                .help("number of files to generate"),
        )
        .arg(
            Arg::with_name("output-dir")
                .long("output-dir")
                .takes_value(true)
                .help("directory for generated files (tests/cnf when --count > 1)"),
        )
        .get_matches();

    let num_vars = value_t!(matches, "vars", usize).unwrap_or_else(|e| e.exit());
    let num_clauses = value_t!(matches, "clauses", usize).unwrap_or_else(|e| e.exit());
    let min_len = value_t!(matches, "min-len", usize).unwrap_or_else(|e| e.exit());
    let max_len = value_t!(matches, "max-len", usize).unwrap_or_else(|e| e.exit());
    let count = value_t!(matches, "count", usize).unwrap_or_else(|e| e.exit());
    let seed = if matches.is_present("seed") {
        Some(value_t!(matches, "seed", u64).unwrap_or_else(|e| e.exit()))
    } else {
        None
    };

    if min_len == 0 || min_len > max_len || (num_vars == 0 && num_clauses > 0) {
        eprintln!("error: need 1 <= min-len <= max-len and at least one variable");
        std::process::exit(2);
    }

    let comments = [
        format!("Random {}-SAT", max_len),
        format!("vars={} clauses={}", num_vars, num_clauses),
    ];
    let comments = comments.iter().map(String::as_str).collect::<Vec<_>>();

    for i in 0..count {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(i as u64)),
            None => StdRng::from_entropy(),
        };
        let formula = random_formula(&mut rng, num_vars, num_clauses, min_len, max_len);

        let written = match destination(&matches, count, i, num_vars, num_clauses) {
            Some(path) => write_file(&formula, &comments, &path).map(|()| {
                println!("Generated: {}", path.display());
                println!("  Variables: {}, Clauses: {}", num_vars, formula.num_clauses());
            }),
            None => {
                let stdout = std::io::stdout();
                let mut writer = stdout.lock();
                dimacs::write(&formula, &comments, &mut writer)
            }
        };

        if let Err(e) = written {
            eprintln!("write error: {}", e);
            std::process::exit(1);
        }
    }
}

/// Where file `i` of `count` goes, or `None` for stdout.
fn destination(
    matches: &ArgMatches,
    count: usize,
    i: usize,
    num_vars: usize,
    num_clauses: usize,
) -> Option<PathBuf> {
    if count == 1 {
        if let Some(path) = matches.value_of("output") {
            return Some(PathBuf::from(path));
        }
    }

    let dir = match matches.value_of("output-dir") {
        Some(dir) => dir,
        None if count > 1 => DEFAULT_OUTPUT_DIR,
        None => return None,
    };

    let base_name = if count > 1 {
        format!("random_{}_{}_{}", num_vars, num_clauses, i + 1)
    } else {
        format!("random_{}_{}", num_vars, num_clauses)
    };
    Some(unique_path(Path::new(dir), &base_name))
}

fn write_file(formula: &Formula, comments: &[&str], path: &Path) -> std::io::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let mut writer = BufWriter::new(File::create(path)?);
    dimacs::write(formula, comments, &mut writer)?;
    writer.flush()
}
