//! Testing helpers for [Torrust Hyper Collection](https://docs.rs/torrust-hyper-collection).
pub mod configuration;
