pub mod gateway;
pub mod resolve;
