//! Core image types shared by the `line-scan-*` crates.
//!
//! This crate is intentionally small: borrowed color frames, owned
//! single-channel images and logger setup. It does *not* depend on any
//! concrete image decoding library.

mod image;
mod logger;

pub use image::{ChannelOrder, FrameError, FrameView, GrayImage};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::{init_with_level, parse_level};
