//! Drives the HTTP client and its cache against a live server.

use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{HttpServer, web};
use backend::domain::JobApplicationService;
use backend::inbound::http::build_app;
use backend::inbound::http::state::HttpState;
use backend::outbound::memory::InMemoryApplicationStore;
use tracker_client::{
    ApplicationGateway, ApplicationInput, ApplicationStatus, ApplicationsCache, GatewayError,
    HttpApplicationGateway,
};
use url::Url;

struct LiveServer {
    addr: SocketAddr,
    handle: ServerHandle,
}

impl LiveServer {
    fn start() -> Self {
        let state = web::Data::new(HttpState::from_service(Arc::new(
            JobApplicationService::new(Arc::new(InMemoryApplicationStore::new())),
        )));
        let server = HttpServer::new(move || build_app(state.clone()))
            .workers(1)
            .bind(("127.0.0.1", 0))
            .expect("bind ephemeral port");
        let addr = *server.addrs().first().expect("bound address");
        let server = server.run();
        let handle = server.handle();
        actix_web::rt::spawn(server);
        Self { addr, handle }
    }

    fn gateway(&self) -> HttpApplicationGateway {
        let base = Url::parse(&format!("http://{}/", self.addr)).expect("base url");
        HttpApplicationGateway::new(base).expect("gateway")
    }

    async fn stop(self) {
        self.handle.stop(true).await;
    }
}

#[actix_web::test]
async fn cache_matches_server_after_every_write() {
    let server = LiveServer::start();
    let cache = ApplicationsCache::mount(server.gateway()).await;
    let independent = server.gateway();
    assert!(cache.snapshot().applications.is_empty());

    let message = cache
        .create(&ApplicationInput::new("Acme", "Engineer"))
        .await
        .expect("create");
    assert_eq!(message, "Success");
    let listed = independent.list().await.expect("list");
    assert_eq!(cache.snapshot().applications, listed);
    assert_eq!(listed.len(), 1);

    let id = listed[0].id.clone();
    let edited = listed[0]
        .to_input()
        .with_status(ApplicationStatus::Interview)
        .with_notes("phone screen booked");
    let message = cache.update(&id, &edited).await.expect("update");
    assert_eq!(message, format!("Updated {id} successfully"));
    let listed = independent.list().await.expect("list");
    assert_eq!(cache.snapshot().applications, listed);
    assert_eq!(listed[0].effective_status(), ApplicationStatus::Interview);

    let message = cache.remove(&id).await.expect("remove");
    assert_eq!(message, format!("Delete {id} Successfully"));
    let snapshot = cache.snapshot();
    assert!(snapshot.applications.is_empty());
    assert!(!snapshot.loading);
    assert_eq!(snapshot.error, None);

    server.stop().await;
}

#[actix_web::test]
async fn get_one_reads_a_single_record() {
    let server = LiveServer::start();
    let cache = ApplicationsCache::mount(server.gateway()).await;
    cache
        .create(&ApplicationInput::new("Acme", "Engineer").with_link("https://acme.example/jobs"))
        .await
        .expect("create");
    let listed = cache.snapshot().applications;

    let fetched = cache
        .gateway()
        .get_one(&listed[0].id)
        .await
        .expect("get one");
    assert_eq!(fetched, listed[0]);
    assert_eq!(
        fetched.fields.link.as_deref(),
        Some("https://acme.example/jobs")
    );

    server.stop().await;
}

#[actix_web::test]
async fn missing_record_is_a_fetch_error() {
    let server = LiveServer::start();

    let err = server
        .gateway()
        .get_one("missing")
        .await
        .expect_err("missing record");
    assert!(matches!(err, GatewayError::Fetch { status: 404, .. }));
    assert_eq!(err.to_string(), "Error fetching application: Not Found");

    server.stop().await;
}

#[actix_web::test]
async fn rejected_write_leaves_cache_untouched() {
    let server = LiveServer::start();
    let cache = ApplicationsCache::mount(server.gateway()).await;

    let err = cache
        .create(&ApplicationInput::new("", "Engineer"))
        .await
        .expect_err("blank company");
    assert!(matches!(err, GatewayError::Fetch { status: 400, .. }));
    assert_eq!(err.to_string(), "Error creating application: Bad Request");
    assert!(cache.snapshot().applications.is_empty());

    server.stop().await;
}
