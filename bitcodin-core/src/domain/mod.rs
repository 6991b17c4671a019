//! Core domain types
//!
//! This module contains the resources returned by the bitcodin API. They are
//! passive records: the remote service is the source of truth and nothing here
//! mutates relationships locally.

pub mod encoding_profile;
pub mod input;
pub mod job;
pub mod output;
pub mod transfer;

/// Server-assigned resource identifier
pub type ResourceId = u64;
