// SPDX-License-Identifier: MPL-2.0
//! The image element: dimension resolution plus render selection.

mod component;
mod spinner;
mod view;

pub use component::{Effect, Inputs, Message, PassProps, Phase, RenderCase, ResolvedSize, State};
pub use view::view;
