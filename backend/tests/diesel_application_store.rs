//! `DieselApplicationStore` against embedded PostgreSQL.
//!
//! Each test boots its own cluster and applies the embedded migrations to
//! the default `postgres` database.

use backend::domain::ports::ApplicationStore;
use backend::domain::{ApplicationId, ApplicationStatus, JobApplication, JobApplicationDraft};
use backend::outbound::persistence::{DbPool, DieselApplicationStore, PoolConfig, run_migrations};
use chrono::NaiveDate;
use pg_embedded_setup_unpriv::TestCluster;
use rstest::{fixture, rstest};
use tokio::runtime::Runtime;

mod support;

use support::{skip_or_fail, start_cluster};

// Fields drop in order: the pool before its runtime, the cluster last.
struct StoreContext {
    store: DieselApplicationStore,
    runtime: Runtime,
    _cluster: TestCluster,
}

fn setup() -> Result<StoreContext, String> {
    let runtime = Runtime::new().map_err(|err| err.to_string())?;
    let cluster = start_cluster()?;
    let database_url = cluster.connection().database_url("postgres");
    run_migrations(&database_url).map_err(|err| err.to_string())?;
    let pool = runtime
        .block_on(DbPool::new(PoolConfig::new(database_url).with_max_size(2)))
        .map_err(|err| err.to_string())?;
    Ok(StoreContext {
        store: DieselApplicationStore::new(pool),
        runtime,
        _cluster: cluster,
    })
}

#[fixture]
fn context() -> Option<StoreContext> {
    match setup() {
        Ok(ctx) => Some(ctx),
        Err(reason) => skip_or_fail(reason),
    }
}

fn full_record() -> JobApplication {
    let draft = JobApplicationDraft::new("Acme", "Engineer")
        .expect("valid draft")
        .with_status(Some(ApplicationStatus::Offer))
        .with_link(Some("https://acme.example/jobs/1".to_owned()))
        .with_date_applied(NaiveDate::from_ymd_opt(2024, 3, 1))
        .with_notes(Some("first line\nsecond line".to_owned()))
        .with_description(Some("Rust services".to_owned()));
    JobApplication::new(ApplicationId::generate(), draft)
}

#[rstest]
fn insert_then_find_round_trips_every_column(context: Option<StoreContext>) {
    let Some(ctx) = context else {
        eprintln!("SKIP-TEST-CLUSTER: insert_then_find_round_trips_every_column skipped");
        return;
    };
    let record = full_record();

    let found = ctx.runtime.block_on(async {
        ctx.store.insert(&record).await.expect("insert");
        ctx.store.find_by_key(record.id()).await.expect("find")
    });
    assert_eq!(found, Some(record.clone()));

    let scanned = ctx
        .runtime
        .block_on(ctx.store.scan_all())
        .expect("scan");
    assert!(scanned.contains(&record));
}

#[rstest]
fn overwrite_clears_omitted_fields(context: Option<StoreContext>) {
    let Some(ctx) = context else {
        eprintln!("SKIP-TEST-CLUSTER: overwrite_clears_omitted_fields skipped");
        return;
    };
    let record = full_record();
    let replacement = JobApplication::new(
        record.id().clone(),
        JobApplicationDraft::new("Acme", "Senior Engineer").expect("valid draft"),
    );

    let found = ctx.runtime.block_on(async {
        ctx.store.insert(&record).await.expect("insert");
        ctx.store.overwrite(&replacement).await.expect("overwrite");
        ctx.store.find_by_key(record.id()).await.expect("find")
    });

    let stored = found.expect("record present");
    assert_eq!(stored, replacement);
    assert_eq!(stored.status(), None);
    assert_eq!(stored.draft().link(), None);
    assert_eq!(stored.draft().date_applied(), None);
    assert_eq!(stored.draft().notes(), None);
    assert_eq!(stored.draft().description(), None);
}

#[rstest]
fn overwrite_of_unknown_key_creates_the_record(context: Option<StoreContext>) {
    let Some(ctx) = context else {
        eprintln!("SKIP-TEST-CLUSTER: overwrite_of_unknown_key_creates_the_record skipped");
        return;
    };
    let record = full_record();

    let found = ctx.runtime.block_on(async {
        ctx.store.overwrite(&record).await.expect("overwrite");
        ctx.store.find_by_key(record.id()).await.expect("find")
    });
    assert_eq!(found, Some(record));
}

#[rstest]
fn delete_twice_succeeds_and_find_reports_absence(context: Option<StoreContext>) {
    let Some(ctx) = context else {
        eprintln!("SKIP-TEST-CLUSTER: delete_twice_succeeds_and_find_reports_absence skipped");
        return;
    };
    let record = full_record();

    let found = ctx.runtime.block_on(async {
        ctx.store.insert(&record).await.expect("insert");
        ctx.store.delete_by_key(record.id()).await.expect("first delete");
        ctx.store.delete_by_key(record.id()).await.expect("second delete");
        ctx.store.find_by_key(record.id()).await.expect("find")
    });
    assert_eq!(found, None);
}

#[rstest]
fn find_of_never_stored_key_is_none(context: Option<StoreContext>) {
    let Some(ctx) = context else {
        eprintln!("SKIP-TEST-CLUSTER: find_of_never_stored_key_is_none skipped");
        return;
    };
    let id = ApplicationId::new("never-stored").expect("valid id");

    let found = ctx
        .runtime
        .block_on(ctx.store.find_by_key(&id))
        .expect("find");
    assert_eq!(found, None);
}
