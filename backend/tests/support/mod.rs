//! Embedded PostgreSQL bootstrap shared by the Diesel integration suites.
//!
//! A cluster that cannot start fails the test unless `SKIP_TEST_CLUSTER` is
//! truthy, in which case the test logs a skip marker and returns early.

use std::path::PathBuf;
use std::sync::{Mutex, OnceLock, PoisonError};
use std::time::Duration;

use pg_embedded_setup_unpriv::TestCluster;
use uuid::Uuid;

const BOOTSTRAP_ATTEMPTS: u32 = 3;
const BOOTSTRAP_BACKOFF: Duration = Duration::from_millis(500);

static BOOTSTRAP: OnceLock<Mutex<()>> = OnceLock::new();

fn scratch_dirs() -> std::io::Result<(String, String)> {
    let base = std::env::var_os("CARGO_TARGET_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../target"))
        .join("pg-embed")
        .join(format!("{}-{}", std::process::id(), Uuid::new_v4()));
    let install = base.join("install");
    let data = base.join("data");
    std::fs::create_dir_all(&install)?;
    std::fs::create_dir_all(&data)?;
    Ok((
        install.to_string_lossy().into_owned(),
        data.to_string_lossy().into_owned(),
    ))
}

/// Start an embedded cluster, retrying downloads that fail transiently.
///
/// Installation and data directories default to the cargo target directory
/// unless `PG_RUNTIME_DIR` and `PG_DATA_DIR` are both set.
pub fn start_cluster() -> Result<TestCluster, String> {
    let _serialised = BOOTSTRAP
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    let _env = if std::env::var_os("PG_RUNTIME_DIR").is_some()
        && std::env::var_os("PG_DATA_DIR").is_some()
    {
        None
    } else {
        let (install, data) = scratch_dirs().map_err(|err| err.to_string())?;
        Some(env_lock::lock_env([
            ("PG_RUNTIME_DIR", Some(install)),
            ("PG_DATA_DIR", Some(data)),
        ]))
    };

    let mut attempt = 1;
    loop {
        match TestCluster::new() {
            Ok(cluster) => return Ok(cluster),
            Err(err) => {
                let reason = format!("{err:?}");
                let lowered = reason.to_lowercase();
                let transient = ["timed out", "timeout", "connection reset", "dns error"]
                    .iter()
                    .any(|needle| lowered.contains(needle));
                if !transient || attempt >= BOOTSTRAP_ATTEMPTS {
                    return Err(reason);
                }
                std::thread::sleep(BOOTSTRAP_BACKOFF * attempt);
                attempt += 1;
            }
        }
    }
}

/// Turn a bootstrap failure into a skip or a panic per `SKIP_TEST_CLUSTER`.
pub fn skip_or_fail<T>(reason: impl std::fmt::Display) -> Option<T> {
    let skip = std::env::var("SKIP_TEST_CLUSTER")
        .is_ok_and(|value| matches!(value.to_lowercase().as_str(), "1" | "true" | "yes"));
    if skip {
        eprintln!("SKIP-TEST-CLUSTER: {reason}");
        None
    } else {
        panic!("embedded PostgreSQL failed to start: {reason}. Set SKIP_TEST_CLUSTER=1 to skip.");
    }
}
