#![doc = include_str!("../README.md")]

pub mod api;
mod client;
mod config;
mod error;
mod prelude;
pub mod quantity;
mod reader;
pub mod reading;

pub use self::{
    client::GatewayClient,
    config::Config,
    error::Error,
    reader::EagleReader,
    reading::Readings,
};
