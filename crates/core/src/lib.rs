//! Domain types and validation for the storyboard generation service.
//!
//! This crate is deliberately free of I/O: it defines the story and scene
//! model plus the validation rules the gateway and pipeline layers enforce.

pub mod error;
pub mod story;
pub mod storyboard;
