//! Console application evaluating collection requests on JSON files.
//!
//! It plays the role of the delivery layer: it reads a collection of JSON
//! records, decodes a query string, evaluates it and prints the envelope.
//!
//! ```text
//! cargo run -- demos/users.json --query "sort=name&reverse=true&limit=2" | jq
//! ```
//!
//! Output:
//!
//! ```json
//! {
//!   "items": ["3", "2"],
//!   "sort": "name",
//!   "reverse": true,
//!   "limit": 2,
//!   "offset": 0,
//!   "previous": null,
//!   "next": "?sort=name&reverse=true&limit=2&offset=2&details=minimal",
//!   "total": 5,
//!   "details": "minimal"
//! }
//! ```
pub mod app;
pub mod logger;
pub mod printer;
