// SPDX-License-Identifier: MPL-2.0
//! `iced_image_element` is an embeddable image element for Iced UIs.
//!
//! It resolves the displayed width and height of an image from explicit
//! props or style entries when possible, and otherwise from an asynchronous
//! intrinsic-size query, optionally capping the width while preserving the
//! aspect ratio. While the size is unknown it renders a loading indicator,
//! and after a failed query a bordered placeholder with optional alt text.

pub mod config;
pub mod element;
pub mod error;
pub mod probe;
pub mod source;
pub mod style;

pub use element::{Effect, Inputs, Message, State};
pub use source::Source;
