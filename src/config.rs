use std::{
    fmt::{Debug, Formatter},
    time::Duration,
};

use bon::Builder;
use url::Url;

use crate::prelude::*;

/// Gateway connection parameters.
///
/// Both credentials are printed on the gateway label.
#[must_use]
#[derive(Clone, Builder)]
pub struct Config {
    /// Gateway IP address or host name, optionally followed by a port: `192.168.1.10`.
    #[builder(into)]
    pub host: String,

    /// Cloud ID, sent as the HTTP basic auth username.
    #[builder(into)]
    pub cloud_id: String,

    /// Install code, sent as the HTTP basic auth password.
    #[builder(into)]
    pub install_code: String,

    /// Bounded wait for every single round trip.
    #[builder(default = Config::DEFAULT_TIMEOUT)]
    pub timeout: Duration,
}

impl Config {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(2);

    const ENDPOINT_PATH: &str = "cgi-bin/post_manager";

    pub fn new(
        host: impl Into<String>,
        cloud_id: impl Into<String>,
        install_code: impl Into<String>,
    ) -> Self {
        Self::builder().host(host).cloud_id(cloud_id).install_code(install_code).build()
    }

    /// The only endpoint the gateway exposes for both commands.
    pub fn endpoint(&self) -> Result<Url> {
        Url::parse(&format!("http://{}/", self.host))
            .and_then(|base| base.join(Self::ENDPOINT_PATH))
            .map_err(|source| Error::InvalidHost { host: self.host.clone(), source })
    }
}

impl Debug for Config {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("cloud_id", &self.cloud_id)
            .field("install_code", &"***")
            .field("timeout", &self.timeout)
            .finish()
    }
}
