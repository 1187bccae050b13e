use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("category-totals"));
    cmd.arg("tests/fixtures/transactions.csv").arg("--workers").arg("2");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("category,description,total"))
        .stdout(predicate::str::contains("5411,Supermarkets,50000"))
        .stdout(predicate::str::contains("5812,Restaurants,50000"));

    Ok(())
}

#[test]
fn test_cli_json_input_and_output() {
    let mut cmd = Command::new(cargo_bin!("category-totals"));
    cmd.arg("tests/fixtures/transactions.json")
        .args(["--strategy", "locked", "--output", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"5411\": 50000"))
        .stdout(predicate::str::contains("\"5812\": 50000"));
}

#[test]
fn test_cli_xml_input_and_output() {
    Command::new(cargo_bin!("category-totals"))
        .arg("tests/fixtures/transactions.xml")
        .args(["--strategy", "channel", "--workers", "2", "--output", "xml"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<?xml"))
        .stdout(predicate::str::contains(
            "<category><code>5411</code><description>Supermarkets</description><total>50000</total></category>",
        ))
        .stdout(predicate::str::contains(
            "<category><code>5812</code><description>Restaurants</description><total>50000</total></category>",
        ));
}

#[test]
fn test_cli_all_strategies_on_generated_records() {
    let mut cmd = Command::new(cargo_bin!("category-totals"));
    cmd.args(["--generate", "1000", "--strategy", "all", "--workers", "8"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("5411,Supermarkets,10000000"))
        .stdout(predicate::str::contains("5812,Restaurants,10200000"));
}

#[test]
fn test_cli_truncates_uneven_split() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ID,Bill,Time,MCC,Status").unwrap();
    writeln!(file, "1,100,0,A,Done").unwrap();
    writeln!(file, "2,200,0,B,Done").unwrap();
    writeln!(file, "3,400,0,A,Done").unwrap();
    writeln!(file, "4,300,0,C,Done").unwrap();
    writeln!(file, "5,50,0,B,Done").unwrap();

    Command::new(cargo_bin!("category-totals"))
        .arg(file.path())
        .args(["--workers", "2", "--strategy", "direct", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B,Category not specified,200"));

    Command::new(cargo_bin!("category-totals"))
        .arg(file.path())
        .args(["--workers", "2", "--partition", "remainder-to-last", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("B,Category not specified,250"));
}

#[test]
fn test_cli_rejects_invalid_worker_count() {
    Command::new(cargo_bin!("category-totals"))
        .arg("tests/fixtures/transactions.csv")
        .args(["--workers", "-3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("worker count must be a positive integer"));
}

#[test]
fn test_cli_rejects_unallocatable_worker_count() {
    for strategy in ["locked", "direct", "channel", "all"] {
        Command::new(cargo_bin!("category-totals"))
            .arg("tests/fixtures/transactions.csv")
            .args(["--strategy", strategy, "--workers", "9223372036854775807"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot allocate chunks for 9223372036854775807 workers"));
    }
}

#[test]
fn test_cli_skips_malformed_rows() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "ID,Bill,Time,MCC,Status").unwrap();
    writeln!(file, "1,100,0,5411,Done").unwrap();
    writeln!(file, "2,not_a_number,0,5411,Done").unwrap();
    writeln!(file, "3,5").unwrap();
    writeln!(file, "4,200,0,5411,Done").unwrap();

    Command::new(cargo_bin!("category-totals"))
        .env("RUST_LOG", "warn")
        .arg(file.path())
        .args(["--workers", "1", "--format", "csv"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Skipping unreadable transaction"))
        .stdout(predicate::str::contains("5411,Supermarkets,300"));
}
