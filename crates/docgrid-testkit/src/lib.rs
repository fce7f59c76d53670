//! Test utilities for docgrid
//!
//! This crate provides shared testing utilities used across the docgrid workspace:
//!
//! - [`mock`]: a shared mockito server for HTTP tests
//! - [`fixtures`]: HTML documents with coordinate tables

pub mod fixtures;
pub mod mock;

pub use fixtures::{NO_TABLE_DOCUMENT, published_document, table_document};
pub use mock::{get_shared_mock_server, mock_document};
