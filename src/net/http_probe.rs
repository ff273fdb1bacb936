use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use http_body_util::Empty;
use humantime::format_duration;
use hyper::{Request, StatusCode, Uri};
use hyper_util::client::legacy::connect::HttpConnector;
use hyper_util::client::legacy::Client;
use hyper_util::rt::TokioExecutor;

use crate::health::{HealthProbe, ProbeOutcome};

type RequestBody = Empty<Bytes>;

/// Issues a single GET per check; only `200 OK` counts as ready.
#[derive(Clone)]
pub struct HttpProbe {
    uri: Uri,
    timeout: Duration,
    client: Client<HttpConnector, RequestBody>,
}

impl HttpProbe {
    pub fn new(uri: Uri, timeout: Duration) -> Self {
        let mut connector = HttpConnector::new();
        connector.set_connect_timeout(Some(timeout));
        let client = Client::builder(TokioExecutor::new())
            .pool_max_idle_per_host(0)
            .build(connector);
        Self {
            uri,
            timeout,
            client,
        }
    }
}

#[async_trait]
impl HealthProbe for HttpProbe {
    async fn check(&self) -> ProbeOutcome {
        let request = match Request::get(self.uri.clone()).body(RequestBody::new()) {
            Ok(request) => request,
            Err(err) => return ProbeOutcome::NotReady(format!("invalid request: {err}")),
        };

        tracing::trace!(uri = %self.uri, "health probe request");
        match tokio::time::timeout(self.timeout, self.client.request(request)).await {
            Ok(Ok(response)) if response.status() == StatusCode::OK => ProbeOutcome::Ready,
            Ok(Ok(response)) => ProbeOutcome::NotReady(format!("status {}", response.status())),
            Ok(Err(err)) => ProbeOutcome::NotReady(err.to_string()),
            Err(_) => ProbeOutcome::NotReady(format!(
                "no response within {}",
                format_duration(self.timeout)
            )),
        }
    }
}
