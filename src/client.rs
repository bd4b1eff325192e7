use crate::{
    api::{Attributes, Command, HttpTransport, Transport, parse_hardware_addresses},
    config::Config,
    prelude::*,
    reading::Readings,
};

/// Stateless gateway client: every cycle discovers the device and queries it again.
pub struct GatewayClient<T = HttpTransport> {
    transport: T,
}

impl GatewayClient {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_transport(HttpTransport::new(config)?))
    }
}

impl<T: Transport> GatewayClient<T> {
    pub const fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    /// List the hardware addresses of the metered devices.
    ///
    /// An unreachable gateway means no devices: only a malformed response is an error.
    #[instrument(skip_all)]
    pub fn discover_device_addresses(&self) -> Result<Vec<String>> {
        info!("listing devices…");
        let body = match self.post(&Command::DeviceList) {
            Ok(body) => body,
            Err(error) => {
                warn!(%error, "failed to list the devices");
                return Ok(Vec::new());
            }
        };
        let hardware_addresses = parse_hardware_addresses(&body)?;
        info!(n_devices = hardware_addresses.len(), "listed");
        Ok(hardware_addresses)
    }

    /// Fetch the raw device query response.
    #[instrument(skip_all, fields(hardware_address = hardware_address))]
    pub fn query_device(&self, hardware_address: &str) -> Result<String> {
        if hardware_address.is_empty() {
            return Err(Error::EmptyHardwareAddress);
        }
        info!("querying…");
        self.post(&Command::DeviceQuery { hardware_address })
            .inspect_err(|error| warn!(%error, "failed to query the device"))
    }

    /// Discover the single device, query it, and parse its variables.
    ///
    /// A response without any named variable is not a device query response.
    pub fn query_attributes(&self) -> Result<Attributes> {
        let hardware_addresses = self.discover_device_addresses()?;
        let hardware_address = match hardware_addresses.as_slice() {
            [hardware_address] => hardware_address,
            [] => {
                warn!("device list is empty");
                return Err(Error::EmptyDeviceList);
            }
            _ => {
                warn!(n_devices = hardware_addresses.len(), "only a single device is supported");
                return Err(Error::MultipleDevices { count: hardware_addresses.len() });
            }
        };
        let attributes = Attributes::parse(&self.query_device(hardware_address)?)?;
        if !attributes.iter().any(|variable| variable.name().is_some()) {
            warn!(n_variables = attributes.len(), "no named variables in the response");
            return Err(Error::UnexpectedResponse);
        }
        Ok(attributes)
    }

    /// Run a full discover-query-parse cycle and validate the readings.
    pub fn run_cycle(&self) -> Result<Readings> {
        let readings = Readings::from_attributes(&self.query_attributes()?);
        info!(
            demand = ?readings.instantaneous_demand,
            delivered = ?readings.summation_delivered,
            received = ?readings.summation_received,
            "read",
        );
        Ok(readings)
    }

    fn post(&self, command: &Command<'_>) -> Result<String> {
        trace!(command = command.name(), "posting…");
        self.transport.post(&command.body())
    }
}
