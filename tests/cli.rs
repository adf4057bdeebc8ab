//! End-to-end tests for the `protseq` binary.
//!
//! Each test runs inside its own temporary directory so the default
//! `analysis_results.txt` can be checked without touching the source tree.

use rstest::rstest;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const TWO_RECORDS: &str = ">protein1
MKR
HDE
>protein2 with description
ACDEFGHIKLM
";

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_protseq"))
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run protseq")
}

fn write_fasta(dir: &TempDir, name: &str, contents: &str) {
    fs::write(dir.path().join(name), contents).expect("Failed to write fasta");
}

#[test]
fn test_two_record_report() {
    let dir = TempDir::new().unwrap();
    write_fasta(&dir, "input.fasta", TWO_RECORDS);

    let out = run_in(dir.path(), &["input.fasta"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let report = fs::read_to_string(dir.path().join("analysis_results.txt")).unwrap();
    assert!(report.starts_with(&format!(
        "Protein Sequence Analysis Results\n{}\n\n",
        "=".repeat(70)
    )));
    assert_eq!(report.matches("Sequence: ").count(), 2);

    let first = report.find("Sequence: protein1\n").unwrap();
    let second = report.find("Sequence: protein2 with description\n").unwrap();
    assert!(first < second);

    // MKRHDE: K, R, H positive; D, E negative.
    assert!(report.contains(
        "Sequence: protein1\n  Length: 6 aa\n  Molecular Weight: 814.94 Da\n  \
         Hydrophobic residues: 1\n  Positive charges: 3\n  Negative charges: 2\n  \
         Net charge: 1\n\n"
    ));
    assert!(report.contains("  Molecular Weight: 1263.53 Da\n"));
    assert!(report.contains("  Net charge: 0\n"));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Successfully loaded 2 sequence(s)"));
    assert!(stdout.contains("Results written to analysis_results.txt"));
}

#[test]
fn test_missing_argument_exits_with_one() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &[]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &["nope.fasta"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("not found"));
    assert!(!dir.path().join("analysis_results.txt").exists());
}

#[rstest]
#[case::empty_file("")]
#[case::blank_lines("\n\n  \n")]
#[case::data_before_header("SEQ\n>h\nAAA\n")]
#[case::unknown_residue(">h\nAXA\n")]
fn test_failures_produce_no_report(#[case] contents: &str) {
    let dir = TempDir::new().unwrap();
    write_fasta(&dir, "input.fasta", contents);

    let out = run_in(dir.path(), &["input.fasta"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!dir.path().join("analysis_results.txt").exists());
}

#[test]
fn test_partial_mode_writes_good_sequences() {
    let dir = TempDir::new().unwrap();
    write_fasta(&dir, "input.fasta", ">good\nAAA\n>bad\nAXA\n");

    let out = run_in(dir.path(), &["input.fasta", "--partial"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("'bad'"));

    let report = fs::read_to_string(dir.path().join("analysis_results.txt")).unwrap();
    assert!(report.contains("Sequence: good\n"));
    assert!(!report.contains("Sequence: bad\n"));
}

#[rstest]
#[case("csv", "identifier,length,")]
#[case("json", "{")]
fn test_output_formats(#[case] format: &str, #[case] prefix: &str) {
    let dir = TempDir::new().unwrap();
    write_fasta(&dir, "input.fasta", TWO_RECORDS);

    let out = run_in(
        dir.path(),
        &["input.fasta", "--format", format, "--output", "report.out"],
    );
    assert!(out.status.success());
    let report = fs::read_to_string(dir.path().join("report.out")).unwrap();
    assert!(report.starts_with(prefix));
    assert!(report.contains("protein2 with description"));
}

#[test]
fn test_motifs_and_config_file() {
    let dir = TempDir::new().unwrap();
    write_fasta(&dir, "input.fasta", ">p\nMLVLVNGT\n");
    fs::write(
        dir.path().join("config.json"),
        r#"{"output": "from_config.txt", "patterns": ["N[^P][ST]"]}"#,
    )
    .unwrap();

    let out = run_in(
        dir.path(),
        &["input.fasta", "--config", "config.json", "--motif", "lv"],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let report = fs::read_to_string(dir.path().join("from_config.txt")).unwrap();
    assert!(report.contains("  Motif LV: [1, 3]\n"));
    assert!(report.contains("  Motif /N[^P][ST]/: [5]\n"));
}

#[rstest]
#[case("--help")]
#[case("--version")]
fn test_help_exits_zero(#[case] flag: &str) {
    let dir = TempDir::new().unwrap();
    let out = run_in(dir.path(), &[flag]);
    assert_eq!(out.status.code(), Some(0));
    assert!(!out.stdout.is_empty());
}

#[test]
fn test_unknown_flag_exits_with_one() {
    let dir = TempDir::new().unwrap();
    write_fasta(&dir, "input.fasta", TWO_RECORDS);
    let out = run_in(dir.path(), &["input.fasta", "--bogus"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn test_unwritable_output_exits_one() {
    let dir = TempDir::new().unwrap();
    write_fasta(&dir, "input.fasta", TWO_RECORDS);

    let out = run_in(dir.path(), &["input.fasta", "-o", "missing_dir/out.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error writing results"));
    assert!(!dir.path().join("missing_dir").exists());
    assert!(!dir.path().join("analysis_results.txt").exists());
}

#[test]
fn test_failing_sequence_is_named() {
    let dir = TempDir::new().unwrap();
    write_fasta(&dir, "input.fasta", ">good\nAAA\n>bad_one\nAXA\n>bad_two\nAAZ\n");

    let out = run_in(dir.path(), &["input.fasta"]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("Sequence 'bad_one': Unknown amino acid 'X' at position 1"),
        "stderr: {}",
        stderr
    );
}

#[test]
fn test_glycosylation_and_lowercase_pattern() {
    let dir = TempDir::new().unwrap();
    write_fasta(&dir, "input.fasta", ">p\nMNGTLVNPS\n");

    let out = run_in(
        dir.path(),
        &["input.fasta", "--glycosylation", "-p", "l[vi]"],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let report = fs::read_to_string(dir.path().join("analysis_results.txt")).unwrap();
    assert!(report.contains("  Motif /l[vi]/: [4]\n"));
    assert!(report.contains("  Motif /N[^P][ST]/: [1]\n"));
}
