use redscare::batch::{instance_files, run_batch, BatchOptions, BatchSummary};
use std::path::PathBuf;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn table_over_data_dir() {
    let mut out = vec![];
    let mut err = vec![];
    let summary = run_batch(&data_dir(), &BatchOptions::default(), &mut out, &mut err).unwrap();
    assert_eq!(
        summary,
        BatchSummary {
            solved: 5,
            failed: 1
        }
    );

    let trial = String::from_utf8(out).unwrap();
    let oracle = "\
instance_name\tn\tA\tF\tM\tN\tS
a.txt\t2\tfalse\t0\t0\t1\tfalse
b.txt\t3\ttrue\t1\t1\t-1\ttrue
c.txt\t3\ttrue\t1\t?!\t-1\ttrue
cycle.txt\t3\ttrue\t1\t?!\t-1\ttrue
d.txt\t1\ttrue\t1\t1\t0\ttrue
malformed.txt\t?\t?\t?\t?\t?\t?
";
    assert_eq!(trial, oracle);

    let err = String::from_utf8(err).unwrap();
    assert_eq!(
        err,
        "# ERROR on malformed.txt: line 5: unknown vertex name \"c\"\n"
    );
}

#[test]
fn other_extensions_are_ignored() {
    let files = instance_files(
        &data_dir(),
        &BatchOptions {
            extension: "md".to_string(),
        },
    )
    .unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["README.md"]);
}

#[test]
fn missing_directory_fails_the_batch() {
    let mut out = vec![];
    let mut err = vec![];
    let res = run_batch(
        &data_dir().join("no-such-dir"),
        &BatchOptions::default(),
        &mut out,
        &mut err,
    );
    assert!(res.is_err());
}
