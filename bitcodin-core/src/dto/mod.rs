//! Data Transfer Objects sent to the bitcodin API
//!
//! DTOs are the request bodies for create calls. None of them carries an
//! identifier; ids are assigned by the service and come back in the
//! corresponding domain type.

pub mod encoding_profile;
pub mod input;
pub mod job;
pub mod output;
