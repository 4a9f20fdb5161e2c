pub mod catalog;
pub mod ports;
pub mod services;
