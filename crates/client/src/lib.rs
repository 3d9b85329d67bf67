//! Celuzador phone-lookup API client.
//!
//! This crate sends the single RapidAPI-authenticated lookup request and
//! classifies the response into a decoded JSON value or a [`ClientError`].

pub mod client;
mod endpoints;
pub mod error;
pub mod models;

pub use client::CeluzadorClient;
pub use client::builder::CeluzadorClientBuilder;
pub use error::{ClientError, Result};
pub use models::ResponseBody;
