//! Human-readable and tabular renderings of [Solutions].
use crate::{instance::Instance, solver::Solutions};
use std::fmt;

/// Header row of the batch table.
pub const BATCH_HEADER: &str = "instance_name\tn\tA\tF\tM\tN\tS";

/// Distances and counts are printed as `-1` when there is no path.
struct OrMinusOne(Option<usize>);

impl fmt::Display for OrMinusOne {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{}", v),
            None => write!(f, "-1"),
        }
    }
}

/// The single-instance report.
pub struct Report<'a> {
    pub file: &'a str,
    pub instance: &'a Instance,
    pub solutions: &'a Solutions,
}

impl<'a> fmt::Display for Report<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = self.instance.header();
        let s = self.solutions;
        writeln!(f, "File: {}", self.file)?;
        writeln!(
            f,
            "n = {}, m = {}, r = {}, s = {}, t = {}",
            header.vertices,
            header.edges,
            header.red,
            self.instance.source_name(),
            self.instance.target_name()
        )?;
        writeln!(f, "|R| (from names) = {}", self.instance.red_count())?;
        writeln!(f, "Has undirected edges: {}", self.instance.has_undirected())?;
        writeln!(f)?;
        writeln!(f, "Results:")?;
        writeln!(
            f,
            "  None      (shortest s-t path avoiding internal red): {}",
            OrMinusOne(s.none)
        )?;
        writeln!(
            f,
            "  Some      (exists s-t path with >=1 red)           : {}",
            s.some
        )?;
        writeln!(
            f,
            "  Many      (max #red on s-t path; DAG only)        : {}",
            s.many
        )?;
        writeln!(
            f,
            "  Few       (min #red on s-t path)                  : {}",
            OrMinusOne(s.few)
        )?;
        writeln!(
            f,
            "  Alternate (exists alternating s-t path)           : {}",
            s.alternate
        )
    }
}

/// One row of the batch table.
pub enum BatchRow<'a> {
    Solved {
        name: &'a str,
        vertices: usize,
        solutions: Solutions,
    },
    /// The instance failed to parse; every column is `?`.
    Failed { name: &'a str },
}

impl<'a> fmt::Display for BatchRow<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatchRow::Solved {
                name,
                vertices,
                solutions: s,
            } => write!(
                f,
                "{}\t{}\t{}\t{}\t{}\t{}\t{}",
                name,
                vertices,
                s.alternate,
                OrMinusOne(s.few),
                s.many,
                OrMinusOne(s.none),
                s.some
            ),
            BatchRow::Failed { name } => write!(f, "{}\t?\t?\t?\t?\t?\t?", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve_all, Inapplicable, Many};

    #[test]
    fn single_report() {
        let instance: Instance = "3 2 1\nA C\nA\nB *\nC\nA -> B\nB -> C\n".parse().unwrap();
        let solutions = solve_all(&instance);
        let trial = Report {
            file: "b.txt",
            instance: &instance,
            solutions: &solutions,
        }
        .to_string();
        let oracle = "\
File: b.txt
n = 3, m = 2, r = 1, s = A, t = C
|R| (from names) = 1
Has undirected edges: false

Results:
  None      (shortest s-t path avoiding internal red): -1
  Some      (exists s-t path with >=1 red)           : true
  Many      (max #red on s-t path; DAG only)        : 1
  Few       (min #red on s-t path)                  : 1
  Alternate (exists alternating s-t path)           : true
";
        assert_eq!(trial, oracle);
    }

    #[test]
    fn solved_row() {
        let row = BatchRow::Solved {
            name: "x.txt",
            vertices: 7,
            solutions: Solutions {
                none: None,
                some: true,
                many: Many::Inapplicable(Inapplicable::Cyclic),
                few: Some(2),
                alternate: false,
            },
        };
        assert_eq!(row.to_string(), "x.txt\t7\tfalse\t2\t?!\t-1\ttrue");
    }

    #[test]
    fn failed_row() {
        let row = BatchRow::Failed { name: "bad.txt" };
        assert_eq!(row.to_string(), "bad.txt\t?\t?\t?\t?\t?\t?");
        assert_eq!(BATCH_HEADER.split('\t').count(), 7);
    }
}
