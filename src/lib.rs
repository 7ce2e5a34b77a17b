//! Library crate for the document translation service.
//!
//! The core of the service is a path-addressed extract/batch/reinsert
//! pipeline over nested JSON documents:
//!
//! - [`document`] walks a document and indexes every string leaf by path
//! - [`provider`] submits one batched translation exchange per request
//! - [`rebuild`] writes the translations back at their original paths
//! - [`translate`] composes the three for a single request
//!
//! [`server`] exposes the pipeline over HTTP and [`config`] wires in the
//! environment. Modules are exposed publicly so integration tests can
//! exercise them directly.

pub mod config;
pub mod document;
pub mod error;
pub mod language;
pub mod provider;
pub mod rebuild;
pub mod server;
pub mod translate;
