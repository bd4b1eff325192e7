//! Rainforest Eagle-200 local API: `POST /cgi-bin/post_manager` with an XML command.

mod command;
#[cfg(test)]
pub mod fixtures;
mod response;
mod transport;

#[cfg(test)]
pub use self::transport::scripted::ScriptedTransport;
pub use self::{
    command::Command,
    response::{Attributes, Variable, parse_hardware_addresses},
    transport::{HttpTransport, Transport},
};
