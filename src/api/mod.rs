//! Client for the remote location-data API.

mod client;

pub use client::{ApiError, LocationClient};
