//! End-to-end tests: applicants file in, department rosters out

use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;
use uni_admissions::core::models::University;
use uni_admissions::core::parser::parse_applicants_file;
use uni_admissions::core::roster::write_rosters;

const ALICE_AND_BOB: &str = "\
Alice Smith 90 80 70 60 0 Physics Chemistry Engineering
Bob Jones 95 85 75 65 0 Physics Chemistry Engineering
";

fn read(dir: &Path, name: &str) -> String {
    fs::read_to_string(dir.join(name)).unwrap_or_else(|e| panic!("Failed to read {name}: {e}"))
}

/// Run the `admissions` binary with `stdin` piped in
fn run_cli(args: &[&str], stdin: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_admissions"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start admissions binary");
    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for admissions")
}

#[test]
fn test_capacity_one_loser_moves_to_second_choice() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("applicants.txt");
    fs::write(&input, ALICE_AND_BOB).expect("Failed to write input");

    let pool = parse_applicants_file(&input).expect("input parses");
    let mut university = University::new(1);
    university.enroll(pool);
    write_rosters(&university, temp_dir.path()).expect("rosters written");

    assert_eq!(read(temp_dir.path(), "physics.txt"), "Bob Jones 85.00\n");
    assert_eq!(read(temp_dir.path(), "chemistry.txt"), "Alice Smith 80.00\n");
    assert_eq!(read(temp_dir.path(), "engineering.txt"), "");
    assert_eq!(read(temp_dir.path(), "biotech.txt"), "");
    assert_eq!(read(temp_dir.path(), "mathematics.txt"), "");
}

#[test]
fn test_fixture_rosters() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let pool = parse_applicants_file("tests/fixtures/applicants.txt").expect("fixture parses");
    let mut university = University::new(2);
    let unplaced = university.enroll(pool);
    write_rosters(&university, temp_dir.path()).expect("rosters written");

    let dir = temp_dir.path();
    assert_eq!(
        read(dir, "biotech.txt"),
        "Nancy Crumpler 93.50\nTawanna Sandberg 70.00\n"
    );
    assert_eq!(
        read(dir, "chemistry.txt"),
        "Shantay Voight 91.00\nMarnie Wallace 88.00\n"
    );
    assert_eq!(
        read(dir, "engineering.txt"),
        "Madison Chubbuck 91.00\nRoscoe Dipasquale 89.00\n"
    );
    assert_eq!(
        read(dir, "mathematics.txt"),
        "Ottis Harrelson 94.00\nJermaine Hyman 80.00\n"
    );
    assert_eq!(
        read(dir, "physics.txt"),
        "Ulysses Ota 90.00\nQuintin Sundberg 80.00\n"
    );
    assert_eq!(unplaced.names(), vec!["Kermit Beathard", "Vernon Lenz"]);
}

#[test]
fn test_cli_reads_capacity_from_stdin() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("applicants.txt");
    let out_dir = temp_dir.path().join("rosters");
    fs::write(&input, ALICE_AND_BOB).expect("Failed to write input");

    let output = run_cli(
        &[
            "enroll",
            "-i",
            input.to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
        ],
        "1\n",
    );

    assert!(
        output.status.success(),
        "admissions failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(read(&out_dir, "physics.txt"), "Bob Jones 85.00\n");
    assert_eq!(read(&out_dir, "chemistry.txt"), "Alice Smith 80.00\n");
}

#[test]
fn test_cli_unknown_department_does_not_abort_run() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("applicants.txt");
    let out_dir = temp_dir.path().join("rosters");
    fs::write(&input, "Ann Lee 90 80 70 60 0 Physics Chemistry Art
")
        .expect("Failed to write input");

    let output = run_cli(
        &[
            "enroll",
            "-i",
            input.to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
        ],
        "1\n",
    );

    assert!(
        output.status.success(),
        "admissions failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(read(&out_dir, "physics.txt"), "Ann Lee 80.00\n");
    assert_eq!(read(&out_dir, "chemistry.txt"), "");
}

#[test]
fn test_cli_malformed_line_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("applicants.txt");
    let out_dir = temp_dir.path().join("rosters");
    fs::write(
        &input,
        "Alice Smith 90 80 70 60 0 Physics Chemistry Engineering\nBob Jones 95 85 75 65 0 Physics Chemistry\n",
    )
    .expect("Failed to write input");

    let output = run_cli(
        &[
            "enroll",
            "-i",
            input.to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
            "-c",
            "1",
        ],
        "",
    );

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("line 2"));
    assert!(!out_dir.exists(), "no roster should be written");
}

#[test]
fn test_cli_rejects_invalid_capacity() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = temp_dir.path().join("applicants.txt");
    let out_dir = temp_dir.path().join("rosters");
    fs::write(&input, ALICE_AND_BOB).expect("Failed to write input");

    let output = run_cli(
        &[
            "enroll",
            "-i",
            input.to_str().unwrap(),
            "-o",
            out_dir.to_str().unwrap(),
        ],
        "many\n",
    );

    assert!(!output.status.success());
    assert!(!out_dir.exists());
}
