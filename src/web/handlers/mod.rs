//! HTTP request handlers organized by add-on resource

pub mod catalog;
pub mod health;
pub mod manifest;
pub mod meta;
pub mod stream;
