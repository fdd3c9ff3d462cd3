//! Application bootstrapping.
//!
//! Applications embedding the evaluator load the configuration first and set
//! up logging with it, before evaluating any request.
pub mod config;
pub mod logging;
