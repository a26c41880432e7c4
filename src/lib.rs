// Copyright 2025 Motordex Contributors
// SPDX-License-Identifier: Apache-2.0

//! Motordex - catalog content bridge for the cars REST API.
//!
//! Resolves brand/model names against a remote catalog, triggers
//! AI-generated recommendation content there, and serves one internal
//! endpoint reporting whether content exists for a brand/model pair.

pub mod api;
pub mod client;
pub mod config;
pub mod content;
pub mod error;
pub mod model;
