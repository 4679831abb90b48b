//! Core domain types for remote-settings

mod remote;

pub use remote::Remote;
