//! Nexus registry access
//!
//! Wire types for the component search API and the REST client used to
//! enumerate and delete image components.

pub mod client;
pub mod component;

pub use client::{NexusClient, NexusClientBuilder};
pub use component::{ImageComponent, RawComponent, SearchResponse};
