//! Bordeaux Métropole open-data API client and response types.
//!
//! Two endpoints are used: the `SV_ARRET_P` feature layer for the stop
//! list, and the `saeiv_arret_passages` process for estimated passages.

mod client;
mod dump;
mod error;
mod types;

pub use client::{OpenDataClient, OpenDataConfig};
pub use error::OpenDataError;
pub use types::{
    Feature, FeatureCollection, PassageCollection, PassageProperties, StopCollection,
    StopProperties,
};
