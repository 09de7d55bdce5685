// SPDX-License-Identifier: MPL-2.0
//! Default intrinsic-size capability backed by the `image` crate.

use crate::element::Message;
use crate::error::{Error, Result};
use crate::source::Source;
use iced::Task;

/// Reads the intrinsic pixel dimensions of `source` without decoding it.
///
/// Only filesystem-backed locators are supported here; hosts with remote
/// sources run their own prober and feed `Message::SizeResolved` directly.
pub async fn intrinsic_size(source: Source) -> Result<(f32, f32)> {
    let path = source
        .path()
        .ok_or_else(|| Error::SizeQuery(format!("unsupported locator: {}", source.uri())))?;
    let (width, height) = image_rs::image_dimensions(&path)?;
    Ok((width as f32, height as f32))
}

/// Adapts the probe to the element's message loop.
///
/// Hosts map `Effect::QuerySize { source, generation }` through this task and
/// route the produced message back into `State::handle`.
pub fn query_task(source: Source, generation: u64) -> Task<Message> {
    Task::perform(intrinsic_size(source), move |result| {
        Message::SizeResolved { generation, result }
    })
}
