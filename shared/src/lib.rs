//! # CartHub Shared
//!
//! Configuration structures and common types shared by every CartHub
//! service crate. Nothing in this crate performs I/O; configuration is
//! loaded from the environment and handed to components at construction.

pub mod config;
pub mod types;
