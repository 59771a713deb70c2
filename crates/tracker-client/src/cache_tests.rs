//! Tests for the application list cache.

use super::*;
use crate::gateway::{MockApplicationGateway, Operation};
use async_trait::async_trait;
use rstest::{fixture, rstest};
use std::collections::VecDeque;
use tokio::sync::oneshot;

fn record(id: &str, company: &str) -> JobApplication {
    JobApplication {
        id: id.to_owned(),
        fields: ApplicationInput::new(company, "Engineer"),
    }
}

fn server_error(operation: Operation) -> GatewayError {
    GatewayError::Fetch {
        operation,
        status: 500,
        status_text: "Internal Server Error".to_owned(),
    }
}

#[fixture]
fn input() -> ApplicationInput {
    ApplicationInput::new("Acme", "Engineer")
}

#[rstest]
#[tokio::test]
async fn mount_loads_the_list() {
    let mut gateway = MockApplicationGateway::new();
    gateway
        .expect_list()
        .times(1)
        .returning(|| Ok(vec![record("a1", "Acme")]));

    let cache = ApplicationsCache::mount(gateway).await;

    let snapshot = cache.snapshot();
    assert_eq!(snapshot.applications, vec![record("a1", "Acme")]);
    assert!(!snapshot.loading);
    assert_eq!(snapshot.error, None);
}

#[rstest]
#[tokio::test]
async fn list_failure_is_recorded_and_loading_released() {
    let mut gateway = MockApplicationGateway::new();
    gateway
        .expect_list()
        .times(1)
        .returning(|| Err(server_error(Operation::List)));

    let cache = ApplicationsCache::mount(gateway).await;

    let snapshot = cache.snapshot();
    assert!(!snapshot.loading);
    assert_eq!(
        snapshot.error.as_deref(),
        Some("Error fetching applications: Internal Server Error")
    );
}

#[rstest]
#[tokio::test]
async fn successful_write_refetches_the_list(input: ApplicationInput) {
    let mut gateway = MockApplicationGateway::new();
    gateway
        .expect_create()
        .times(1)
        .returning(|_| Ok("Success".to_owned()));
    gateway
        .expect_list()
        .times(1)
        .returning(|| Ok(vec![record("a1", "Acme")]));
    let cache = ApplicationsCache::new(gateway);

    let message = cache.create(&input).await.expect("create succeeds");

    assert_eq!(message, "Success");
    assert_eq!(cache.snapshot().applications, vec![record("a1", "Acme")]);
}

#[rstest]
#[case::update(Operation::Update)]
#[case::remove(Operation::Remove)]
#[tokio::test]
async fn failed_write_leaves_cache_untouched(#[case] operation: Operation, input: ApplicationInput) {
    let mut gateway = MockApplicationGateway::new();
    gateway
        .expect_list()
        .times(1)
        .returning(|| Ok(vec![record("a1", "Acme")]));
    gateway
        .expect_update()
        .returning(|_, _| Err(server_error(Operation::Update)));
    gateway
        .expect_remove()
        .returning(|_| Err(server_error(Operation::Remove)));
    let cache = ApplicationsCache::mount(gateway).await;
    let before = cache.snapshot();

    let result = match operation {
        Operation::Update => cache.update("a1", &input).await,
        _ => cache.remove("a1").await,
    };

    assert!(matches!(result, Err(GatewayError::Fetch { status: 500, .. })));
    assert_eq!(cache.snapshot(), before);
}

#[rstest]
#[tokio::test]
async fn refetch_failure_after_write_is_kept_as_list_error(input: ApplicationInput) {
    let mut gateway = MockApplicationGateway::new();
    gateway
        .expect_update()
        .withf(|id, _| id.to_string() == "a1")
        .times(1)
        .returning(|id, _| Ok(format!("Updated {id} successfully")));
    gateway
        .expect_list()
        .times(1)
        .returning(|| Err(server_error(Operation::List)));
    let cache = ApplicationsCache::new(gateway);

    let message = cache.update("a1", &input).await.expect("write succeeds");

    assert_eq!(message, "Updated a1 successfully");
    assert!(cache.snapshot().error.is_some());
}

type ListReply = Result<Vec<JobApplication>, GatewayError>;

/// Gateway whose list responses are released by the test.
struct ScriptedGateway {
    replies: Mutex<VecDeque<oneshot::Receiver<ListReply>>>,
}

impl ScriptedGateway {
    fn new(count: usize) -> (Self, Vec<oneshot::Sender<ListReply>>) {
        let (senders, receivers): (Vec<_>, VecDeque<_>) =
            (0..count).map(|_| oneshot::channel()).unzip();
        (
            Self {
                replies: Mutex::new(receivers),
            },
            senders,
        )
    }
}

#[async_trait]
impl ApplicationGateway for ScriptedGateway {
    async fn list(&self) -> Result<Vec<JobApplication>, GatewayError> {
        let reply = {
            let mut replies = self.replies.lock().expect("replies lock");
            replies.pop_front().expect("scripted reply")
        };
        reply.await.expect("reply sender kept alive")
    }

    async fn create(&self, _input: &ApplicationInput) -> Result<String, GatewayError> {
        panic!("create is not scripted")
    }

    async fn update(&self, _id: &str, _input: &ApplicationInput) -> Result<String, GatewayError> {
        panic!("update is not scripted")
    }

    async fn remove(&self, _id: &str) -> Result<String, GatewayError> {
        panic!("remove is not scripted")
    }

    async fn get_one(&self, _id: &str) -> Result<JobApplication, GatewayError> {
        panic!("get_one is not scripted")
    }
}

#[rstest]
#[tokio::test]
async fn stale_list_response_is_discarded() {
    let (gateway, senders) = ScriptedGateway::new(2);
    let mut senders = senders.into_iter();
    let first = senders.next().expect("first sender");
    let second = senders.next().expect("second sender");
    let cache = ApplicationsCache::new(gateway);
    let newer = vec![record("a2", "Globex")];

    let release = async {
        tokio::task::yield_now().await;
        assert!(cache.snapshot().loading);
        second.send(Ok(newer.clone())).expect("second receiver");
        while cache.snapshot().applications != newer {
            tokio::task::yield_now().await;
        }
        first
            .send(Ok(vec![record("a1", "Acme")]))
            .expect("first receiver");
    };
    tokio::join!(cache.refresh(), cache.refresh(), release);

    let snapshot = cache.snapshot();
    assert_eq!(snapshot.applications, newer);
    assert!(!snapshot.loading);
}
