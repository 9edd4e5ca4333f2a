//! The standard gRPC health service follows model readiness.

mod common;

use std::time::Duration;

use common::TestServer;
use domain_word2vec::{LoadOutcome, LookupStrategy, ModelReadiness, ModelSource};
use rpc::word2vec::word2_vec_service_server::SERVICE_NAME;
use test_utils::{TestModel, fixtures};
use tonic_health::pb::HealthCheckRequest;
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;

async fn wait_for_status(server: &TestServer, expected: ServingStatus) -> bool {
    let mut client = HealthClient::new(
        tonic::transport::Endpoint::new(server.url())
            .unwrap()
            .connect()
            .await
            .unwrap(),
    );
    for _ in 0..50 {
        let response = client
            .check(HealthCheckRequest {
                service: SERVICE_NAME.to_string(),
            })
            .await
            .unwrap()
            .into_inner();
        if response.status == expected as i32 {
            return true;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    false
}

#[tokio::test]
async fn test_health_serving_once_ready() {
    let model = TestModel::text(&fixtures::sample_words());
    let readiness = ModelReadiness::new();
    let load = readiness.start(ModelSource::new(model.path(), LookupStrategy::Flat));

    let server = TestServer::start(readiness).await;
    assert_eq!(load.wait().await, LoadOutcome::Ready);

    assert!(wait_for_status(&server, ServingStatus::Serving).await);
}

#[tokio::test]
async fn test_health_not_serving_after_failed_load() {
    let model = TestModel::raw("broken.txt", "fire 1.0 oops\n");
    let readiness = ModelReadiness::new();
    let load = readiness.start(ModelSource::new(model.path(), LookupStrategy::Flat));

    let server = TestServer::start(readiness).await;
    assert!(matches!(load.wait().await, LoadOutcome::Failed(_)));

    assert!(wait_for_status(&server, ServingStatus::NotServing).await);
}
