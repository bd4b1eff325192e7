use serde::Serialize;

use crate::{
    api::Attributes,
    prelude::*,
    quantity::{KilowattHours, Kilowatts},
};

pub const INSTANTANEOUS_DEMAND: &str = "zigbee:InstantaneousDemand";
pub const CURRENT_SUMMATION_DELIVERED: &str = "zigbee:CurrentSummationDelivered";
pub const CURRENT_SUMMATION_RECEIVED: &str = "zigbee:CurrentSummationReceived";

/// Validated readings taken from a single device query response.
#[must_use]
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Readings {
    pub instantaneous_demand: Option<Kilowatts>,
    pub summation_delivered: Option<KilowattHours>,
    pub summation_received: Option<KilowattHours>,
}

impl Readings {
    pub fn from_attributes(attributes: &Attributes) -> Self {
        Self {
            instantaneous_demand: demand(attributes.lookup(INSTANTANEOUS_DEMAND)),
            summation_delivered: summation(
                CURRENT_SUMMATION_DELIVERED,
                attributes.lookup(CURRENT_SUMMATION_DELIVERED),
            ),
            summation_received: summation(
                CURRENT_SUMMATION_RECEIVED,
                attributes.lookup(CURRENT_SUMMATION_RECEIVED),
            ),
        }
    }

    /// Delivered minus received, when both are known.
    #[must_use]
    pub fn net_total(&self) -> Option<KilowattHours> {
        Some(self.summation_delivered? - self.summation_received?)
    }
}

/// The gateway occasionally reports a blank demand.
fn demand(value: Option<&str>) -> Option<Kilowatts> {
    let Some(value) = value.map(str::trim) else {
        debug!(name = INSTANTANEOUS_DEMAND, "not present");
        return None;
    };
    if value.is_empty() {
        warn!(name = INSTANTANEOUS_DEMAND, "blank value");
        return None;
    }
    parse(INSTANTANEOUS_DEMAND, value).map(Kilowatts)
}

/// The gateway occasionally reports a summation with the decimal point in the wrong place,
/// which shows up as exactly six zeros after the point.
fn summation(name: &str, value: Option<&str>) -> Option<KilowattHours> {
    let Some(value) = value.map(str::trim) else {
        debug!(name, "not present");
        return None;
    };
    if has_zeroed_fraction(value) {
        warn!(name, value, "zeroed fraction, ignoring");
        return None;
    }
    parse(name, value).map(KilowattHours)
}

/// Without a decimal point, the whole value is compared.
fn has_zeroed_fraction(value: &str) -> bool {
    value.split_once('.').map_or(value, |(_, fraction)| fraction) == "000000"
}

fn parse(name: &str, value: &str) -> Option<f64> {
    value.parse().inspect_err(|error| warn!(name, value, %error, "not a number")).ok()
}
