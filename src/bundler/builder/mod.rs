//! Packaging orchestration and coordination.
//!
//! This module provides the main [`Bundler`] orchestrator that drives a
//! packaging run end to end.
//!
//! # Overview
//!
//! The bundler:
//! 1. Resolves the author and repository from version control
//! 2. Resets the work and publish directories
//! 3. Fetches and extracts the release archive
//! 4. Reads the release version
//! 5. Writes the package and returns a [`BundledArtifact`]
//!
//! # Module Organization
//!
//! - [`checksum`] - SHA256 checksum calculation for artifacts
//! - [`orchestrator`] - Main [`Bundler`] struct and packaging operations
//!
//! [`BundledArtifact`]: crate::bundler::BundledArtifact

mod checksum;
mod orchestrator;

pub use checksum::calculate_sha256;
pub use orchestrator::Bundler;
