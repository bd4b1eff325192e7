use base64::{Engine, prelude::BASE64_STANDARD};
use ureq::{Agent, http::header::AUTHORIZATION};
use url::Url;

use crate::{config::Config, prelude::*};

/// Delivers a command body to the gateway and returns the raw response body.
pub trait Transport {
    fn post(&self, body: &str) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, body: &str) -> Result<String> {
        (**self).post(body)
    }
}

/// Blocking HTTP transport with basic authentication.
pub struct HttpTransport {
    agent: Agent,
    endpoint: Url,
    authorization: String,
}

impl HttpTransport {
    #[instrument(skip_all, fields(host = %config.host))]
    pub fn new(config: &Config) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let agent = Agent::config_builder().timeout_global(Some(config.timeout)).build().into();
        let credentials =
            BASE64_STANDARD.encode(format!("{}:{}", config.cloud_id, config.install_code));
        Ok(Self { agent, endpoint, authorization: format!("Basic {credentials}") })
    }
}

impl Transport for HttpTransport {
    #[instrument(skip_all, level = Level::DEBUG, fields(endpoint = %self.endpoint))]
    fn post(&self, body: &str) -> Result<String> {
        let response = self
            .agent
            .post(self.endpoint.as_str())
            .header(AUTHORIZATION, &self.authorization)
            .send(body)?
            .body_mut()
            .read_to_string()?;
        trace!(n_bytes = response.len(), "received");
        Ok(response)
    }
}
