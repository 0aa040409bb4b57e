//! Bind orchestration: validate, then hand the request to the carrier the
//! caller named. No detection or selection happens here.

pub mod service;

pub use service::{BindService, BindServiceTrait};
