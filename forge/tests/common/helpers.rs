//! Builder and assertion helpers for forge tests

use std::sync::{Arc, Mutex};

use serde_json::Value;

use forge::traits::{MockAuthSource, MockDatasetLoader, MockRemoteCall};
use forge::{Forge, ForgeError, OfflineNames};
use shared::{ApiFailure, Endpoint};

use super::fixtures::TestFixtures;

/// Request bodies seen by the mock remote, in call order
pub type CapturedBodies = Arc<Mutex<Vec<Value>>>;

/// Builder for a `Forge` wired to mocks
pub struct ForgeBuilder {
    remote: MockRemoteCall,
    auth: MockAuthSource,
    offline: Arc<OfflineNames>,
}

impl ForgeBuilder {
    /// Auth always yields the fixture token; the remote expects nothing
    pub fn new() -> Self {
        let mut auth = MockAuthSource::new();
        auth.expect_auth_token()
            .returning(|| TestFixtures::AUTH_TOKEN.to_string())
            .times(0..);

        let mut loader = MockDatasetLoader::new();
        loader
            .expect_load()
            .returning(|| Ok(TestFixtures::dataset()))
            .times(0..=1);

        Self {
            remote: MockRemoteCall::new(),
            auth,
            offline: Arc::new(OfflineNames::new(loader)),
        }
    }

    /// Expect one call to `endpoint` answered with `response`
    pub fn with_response(self, endpoint: Endpoint, response: Value) -> Self {
        self.capturing(endpoint, response, Arc::default())
    }

    /// Like [`ForgeBuilder::with_response`], recording the request body
    pub fn capturing(mut self, endpoint: Endpoint, response: Value, bodies: CapturedBodies) -> Self {
        self.remote
            .expect_call()
            .withf(move |e, _, token| *e == endpoint && token == TestFixtures::AUTH_TOKEN)
            .times(1)
            .returning(move |_, body, _| {
                bodies.lock().unwrap().push(body);
                Ok(response.clone())
            });
        self
    }

    /// Expect one call to `endpoint` that fails with `failure`
    pub fn with_failure(mut self, endpoint: Endpoint, failure: ApiFailure) -> Self {
        self.remote
            .expect_call()
            .withf(move |e, _, _| *e == endpoint)
            .times(1)
            .returning(move |_, _, _| Err(failure.clone()));
        self
    }

    pub fn build(self) -> Forge<MockRemoteCall, MockAuthSource> {
        Forge::with_offline(self.remote, self.auth, self.offline)
    }
}

pub struct TestHelpers;

impl TestHelpers {
    /// The `prompt` string of a captured request body
    pub fn prompt_of(body: &Value) -> &str {
        body["prompt"].as_str().unwrap_or_default()
    }

    pub fn assert_message(result: Result<impl std::fmt::Debug, ForgeError>, expected: &str) {
        match result {
            Ok(value) => panic!("expected error \"{expected}\", got {value:?}"),
            Err(e) => assert_eq!(e.to_string(), expected),
        }
    }
}
