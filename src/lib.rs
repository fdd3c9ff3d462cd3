//! **Torrust Hyper Collection** is a library to serve paged, sorted
//! collections of resources following the hyper collection conventions.
//!
//! A client asks for a collection with five optional query parameters:
//!
//! ```text
//! GET /users?sort=name&reverse=true&limit=10&offset=50&details=minimal
//! ```
//!
//! and gets an envelope with the page and the links to its neighbours:
//!
//! ```json
//! {
//!     "items": ["/users/150", "/users/149", "..."],
//!     "sort": "name",
//!     "reverse": true,
//!     "limit": 10,
//!     "offset": 50,
//!     "previous": "?sort=name&reverse=true&limit=10&offset=40&details=minimal",
//!     "next": "?sort=name&reverse=true&limit=10&offset=60&details=minimal",
//!     "total": 200,
//!     "details": "minimal"
//! }
//! ```
//!
//! # Table of contents
//!
//! - [Components](#components)
//! - [Configuration](#configuration)
//! - [Console](#console)
//!
//! # Components
//!
//! - [`core`]: the evaluator. It is a pure function of a collection snapshot
//!   and a validated query, independent of the delivery layer.
//! - [`bootstrap`]: configuration and logging setup for applications.
//! - [`console`]: a command line tool evaluating queries on JSON files.
//!
//! Authentication, persistence and HTTP routing are left to the application
//! embedding the evaluator.
//!
//! # Configuration
//!
//! The configuration is a TOML file. The default one is:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [collection]
//! null_ordering = "last"
//! default_details = "minimal"
//! ```
//!
//! Refer to the [`torrust-hyper-collection-configuration`](https://docs.rs/torrust-hyper-collection-configuration)
//! crate for all the options and how to override them with environment
//! variables.
//!
//! # Console
//!
//! ```text
//! cargo run -- demos/users.json --query "sort=name&limit=2&details=all" --pretty
//! ```
pub mod bootstrap;
pub mod console;
pub mod core;
