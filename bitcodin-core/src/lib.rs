//! Bitcodin Core
//!
//! Value types for the bitcodin encoding API.
//!
//! This crate contains:
//! - Domain types: Resources as the API returns them (Input, EncodingProfile, Job, etc.)
//! - DTOs: Request bodies sent to the API when creating resources
//!
//! Domain records always carry their server-assigned identifier, request DTOs never do.
//! A value holding an id therefore only exists after a successful create (or get) call.

pub mod domain;
pub mod dto;
