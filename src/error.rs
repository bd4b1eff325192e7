use thiserror::Error;

/// Everything that can go wrong during a read cycle.
///
/// Absent readings are *not* errors: a blank demand or a corrupted summation
/// comes back as [`None`] from the accessors. An `Error` means that the cycle
/// produced no snapshot at all.
#[derive(Debug, Error)]
pub enum Error {
    #[error("`{host}` is not a valid gateway address")]
    InvalidHost {
        host: String,

        #[source]
        source: url::ParseError,
    },

    /// Timeout, connection refusal, or a non-successful HTTP status.
    #[error("gateway request failed: {0}")]
    Transport(#[from] ureq::Error),

    /// The gateway answered with something that is not XML.
    #[error("gateway response is not well-formed XML: {0}")]
    MalformedResponse(#[from] roxmltree::Error),

    /// Well-formed XML without a single named `<Variable>`, for example an `<Error>` page.
    #[error("gateway response has no named variables")]
    UnexpectedResponse,

    #[error("device list is empty")]
    EmptyDeviceList,

    #[error("{count} devices found, but only a single device is supported")]
    MultipleDevices { count: usize },

    #[error("hardware address must not be empty")]
    EmptyHardwareAddress,
}

impl Error {
    /// The next scheduled cycle may succeed without any intervention.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::EmptyDeviceList)
    }

    /// The gateway does not speak the protocol this crate expects anymore.
    #[must_use]
    pub const fn is_contract_break(&self) -> bool {
        matches!(self, Self::MalformedResponse(_) | Self::UnexpectedResponse)
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(ureq::Error::Timeout(_)))
    }
}
