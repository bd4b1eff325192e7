use crate::{
    api::{HttpTransport, Transport},
    client::GatewayClient,
    config::Config,
    prelude::*,
    quantity::{KilowattHours, Kilowatts},
    reading::Readings,
};

/// Caching reader.
///
/// [`EagleReader::refresh`] runs a single cycle and keeps its readings, so that
/// all the accessors return values from the same response snapshot without
/// touching the network. A failed refresh leaves all the readings absent.
///
/// There is no internal synchronization: share an instance behind a lock, or
/// create one per thread.
pub struct EagleReader<T = HttpTransport> {
    client: GatewayClient<T>,
    readings: Readings,
    last_error: Option<Error>,
}

impl EagleReader {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self::with_client(GatewayClient::new(config)?))
    }
}

impl<T: Transport> EagleReader<T> {
    pub fn with_client(client: GatewayClient<T>) -> Self {
        Self { client, readings: Readings::default(), last_error: None }
    }

    /// Replace the cached readings with a fresh snapshot.
    ///
    /// On failure, the readings are cleared and the error is kept for [`EagleReader::last_error`].
    #[instrument(skip_all)]
    pub fn refresh(&mut self) -> Result<Readings, &Error> {
        match self.client.run_cycle() {
            Ok(readings) => {
                self.readings = readings;
                self.last_error = None;
                Ok(readings)
            }
            Err(error) => {
                warn!(%error, "refresh failed, readings are unavailable");
                self.readings = Readings::default();
                Err(&*self.last_error.insert(error))
            }
        }
    }

    pub const fn readings(&self) -> &Readings {
        &self.readings
    }

    /// Why the last refresh produced no readings.
    pub const fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    pub const fn instantaneous_demand(&self) -> Option<Kilowatts> {
        self.readings.instantaneous_demand
    }

    pub const fn summation_delivered(&self) -> Option<KilowattHours> {
        self.readings.summation_delivered
    }

    pub const fn summation_received(&self) -> Option<KilowattHours> {
        self.readings.summation_received
    }

    pub fn net_total(&self) -> Option<KilowattHours> {
        self.readings.net_total()
    }
}
