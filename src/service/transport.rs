use async_trait::async_trait;
use serde_json::Value;
use snafu::ResultExt;
use url::Url;

use crate::{config::ClientConfig, error, util};

/// HTTP GET returning a decoded JSON body.
///
/// Implementations decide what counts as a failed response and report it as
/// [`error::Error::TransportError`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: Url) -> util::Result<Value>;

    /// Release the underlying resources. Called once, by `Client::close`.
    fn close(self)
    where
        Self: Sized,
    {
    }
}

/// reqwest-backed transport. Pooling, TLS and proxying are left to reqwest.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> util::Result<Self> {
        let mut builder = reqwest::Client::builder().timeout(config.timeout());

        if let Some(proxy) = &config.proxy {
            tracing::debug!("transport::new | Using proxy {}", proxy);
            builder = builder.proxy(reqwest::Proxy::all(proxy.as_str()).context(error::TransportSnafu)?);
        }

        Ok(Self {
            client: builder.build().context(error::TransportSnafu)?,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: Url) -> util::Result<Value> {
        let body = self
            .client
            .get(url)
            .send()
            .await
            .context(error::TransportSnafu)?
            .error_for_status()
            .context(error::TransportSnafu)?
            .text()
            .await
            .context(error::TransportSnafu)?;

        serde_json::from_str(&body).context(error::SerdeJsonSnafu)
    }
}
