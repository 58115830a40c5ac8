//! Fixtures for tests that stand in for the Bootpay gateway.

pub mod mock_gateway;

pub use mock_gateway::MockGatewayResponse;

use crate::{ClientConfig, GatewayClient};

/// Client pointed at a mock server, e.g. `wiremock::MockServer::uri()`.
pub fn test_client(base_url: &str) -> GatewayClient {
    GatewayClient::from_config(
        ClientConfig::new("test-application-id", "test-private-key").with_base_url(base_url),
    )
    .expect("Failed to build test client")
}
