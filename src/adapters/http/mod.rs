//! HTTP adapter - client for the remote persistence service.

mod dto;
mod gateway;

pub use gateway::{HttpCheckInGateway, HttpGatewayConfig};
