//! Data models for documents, the canonical field catalog, and configuration.

pub mod catalog;
pub mod config;
pub mod document;
