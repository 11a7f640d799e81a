//! # CartHub Core
//!
//! Core business logic and domain layer for the CartHub backend.
//! This crate contains domain entities, the token authority, the
//! dependency verifier, write orchestration services, repository
//! interfaces, and error types shared by every service surface.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;
