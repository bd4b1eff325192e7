#[macro_use]
mod macros;

mod energy;
mod power;

pub use self::{energy::KilowattHours, power::Kilowatts};
