use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn seed_csv() -> tempfile::NamedTempFile {
    let mut csv = tempfile::NamedTempFile::new().unwrap();
    writeln!(csv, "term_years, annual_rate_percent, last_updated").unwrap();
    writeln!(csv, "30, 5.0, ").unwrap();
    csv
}

// The server runs until killed, so these tests hand it an already-occupied
// bind address: startup (and the storage selection under test) completes,
// then the bind fails and the process exits.
fn occupied_addr() -> (std::net::TcpListener, String) {
    let guard = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = guard.local_addr().unwrap().to_string();
    (guard, addr)
}

#[cfg(not(feature = "storage-rocksdb"))]
#[test]
fn test_rocksdb_fallback_warning() {
    let csv = seed_csv();
    let (_guard, addr) = occupied_addr();

    let mut cmd = Command::new(cargo_bin!("mortgage-engine"));
    cmd.arg(csv.path())
        .arg("--db-path")
        .arg("some_db")
        .arg("--bind")
        .arg(&addr);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("WARNING: Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."));
}

#[cfg(feature = "storage-rocksdb")]
#[test]
fn test_rocksdb_no_fallback_warning() {
    let csv = seed_csv();
    let (_guard, addr) = occupied_addr();

    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test_db");

    let mut cmd = Command::new(cargo_bin!("mortgage-engine"));
    cmd.arg(csv.path())
        .arg("--db-path")
        .arg(&db_path)
        .arg("--bind")
        .arg(&addr);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("WARNING").not());
}
