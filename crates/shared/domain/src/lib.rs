//! # Domain Models
//!
//! This crate contains pure registration types with a single dependency (`serde`).
//! Keep it lean: no I/O, networking, or rule logic. Just data and simple helpers.

pub mod config;
pub mod constants;
pub mod student;
