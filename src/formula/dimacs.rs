use crate::formula::{Clause, Formula, Literal, MAX_VARIABLES};
use log::{debug, warn};
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};

pub fn parse<R: Read>(reader: R) -> Result<Formula, DimacsParseError> {
    let reader = BufReader::new(reader);

    let mut clauses = vec![];
    let mut header = None;

    for line in reader.lines() {
        let line = line?;
        let mut line = line.split_whitespace().peekable();

        match line.peek() {
            None => continue,
            Some(token) if token.starts_with('c') || token.starts_with('%') => continue,
            Some(&"p") => {
                let _ = line.next();

                if header.is_some() {
                    return Err(DimacsParseError::Format("duplicate 'p' line".into()));
                }

                if line.next() != Some("cnf") {
                    return Err(DimacsParseError::Format("missing 'cnf'".into()));
                }

                let num_variables = line
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| DimacsParseError::Format("invalid num_variables".into()))?;

                if num_variables > MAX_VARIABLES {
                    return Err(DimacsParseError::Format(format!(
                        "num_variables {} exceeds the maximum of {}",
                        num_variables, MAX_VARIABLES
                    )));
                }

                let num_clauses = line
                    .next()
                    .and_then(|c| c.parse::<usize>().ok())
                    .ok_or_else(|| DimacsParseError::Format("invalid num_clauses".into()))?;

                header = Some((num_variables, num_clauses));
            }
            Some(_) => {
                let num_variables = match header {
                    Some((num_variables, _)) => num_variables,
                    None => return Err(DimacsParseError::Format("missing 'p' line before clauses".into())),
                };

                let mut clause = vec![];
                for x in line {
                    match parse_literal(x, num_variables)? {
                        Some(l) => clause.push(l),
                        None => break,
                    }
                }
                if !clause.is_empty() {
                    clauses.push(Clause::new(clause));
                }
            }
        }
    }

    let (num_variables, num_clauses) =
        header.ok_or_else(|| DimacsParseError::Format("missing 'p' line".into()))?;

    // The declared clause count is advisory
    if clauses.len() != num_clauses {
        warn!("header declares {} clauses but found {}", num_clauses, clauses.len());
    }
    debug!("parsed {} clauses over {} variables", clauses.len(), num_variables);

    Formula::try_with_num_variables(num_variables, clauses)
        .map_err(|e| DimacsParseError::Format(e.to_string()))
}

pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Formula, DimacsParseError> {
    let file = File::open(path)?;
    parse(file)
}

fn parse_literal(s: &str, num_variables: usize) -> Result<Option<Literal>, DimacsParseError> {
    let l = s
        .parse::<i64>()
        .map_err(|_| DimacsParseError::Format(format!("invalid literal '{}'", s)))?;
    match Literal::from_dimacs(l) {
        Some(literal) if literal.idx() > num_variables => {
            Err(DimacsParseError::VariableOutOfRange { literal: l, num_variables })
        }
        literal => Ok(literal),
    }
}

/// Writes `formula` in DIMACS CNF, preceded by one `c` line per comment.
pub fn write<W: Write>(formula: &Formula, comments: &[&str], mut writer: W) -> std::io::Result<()> {
    for comment in comments {
        writeln!(writer, "c {}", comment)?;
    }
    writeln!(writer, "p cnf {} {}", formula.num_variables(), formula.num_clauses())?;
    for clause in formula.clauses() {
        for literal in clause.literals() {
            write!(writer, "{} ", literal.to_dimacs())?;
        }
        writeln!(writer, "0")?;
    }
    Ok(())
}

/// `dir/base_name.cnf`, or the first of `dir/base_name (1).cnf`, `dir/base_name (2).cnf`, ...
/// that does not exist yet.
pub fn unique_path(dir: &Path, base_name: &str) -> PathBuf {
    let path = dir.join(format!("{}.cnf", base_name));
    if !path.exists() {
        return path;
    }
    let mut counter = 1;
    loop {
        let path = dir.join(format!("{} ({}).cnf", base_name, counter));
        if !path.exists() {
            return path;
        }
        counter += 1;
    }
}

#[derive(Debug)]
pub enum DimacsParseError {
    Io(std::io::Error),
    Format(String),
    VariableOutOfRange { literal: i64, num_variables: usize },
}

impl Display for DimacsParseError {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        match self {
            DimacsParseError::Io(e) => write!(f, "{}", e),
            DimacsParseError::Format(msg) => write!(f, "{}", msg),
            DimacsParseError::VariableOutOfRange { literal, num_variables } => write!(
                f,
                "literal {} has variable {} out of range [1, {}]",
                literal,
                literal.unsigned_abs(),
                num_variables
            ),
        }
    }
}

impl std::error::Error for DimacsParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DimacsParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DimacsParseError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
