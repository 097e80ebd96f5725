pub mod client;
pub mod mapper;
pub mod transport;
