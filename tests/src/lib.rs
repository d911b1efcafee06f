//! Shared helpers for the workspace integration tests.

use eln_common::credentials::ApiKey;
use eln_core::client::ElnClient;

/// The key every test client authenticates with.
pub const TEST_KEY: &str = "test-key";

/// Builds a client pointed at a mock server.
pub fn test_client(base_url: &str) -> ElnClient {
    let key = ApiKey::new(TEST_KEY).expect("test key is not blank");
    ElnClient::new(base_url, &key).expect("test key fits in a header")
}
