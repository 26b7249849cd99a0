//! HTTP transport shared by the token manager and the dispatcher

pub mod client;

pub use client::{HttpClient, HttpClientBuilder};
