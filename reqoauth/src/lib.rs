#![doc = include_str!("../README.md")]

pub use reqoauth_core::*;

#[cfg(feature = "default-context")]
mod context;
#[cfg(feature = "default-context")]
pub use context::default_context;

pub mod oauth1;
