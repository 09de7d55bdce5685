// SPDX-License-Identifier: MPL-2.0
//! Render selection for the image element.

use super::component::{Message, RenderCase, State};
use super::spinner::Spinner;
use crate::config;
use iced::widget::{container, mouse_area, text, Image, Space};
use iced::{alignment, font, Border, Color, ContentFit, Element, Font, Length, Theme};

/// Light gray used for the error placeholder border.
const BORDER_COLOR: Color = Color::from_rgb(0.83, 0.83, 0.83);

/// Diameter of the loading spinner.
const SPINNER_SIZE: f32 = 16.0;

/// Renders the element.
///
/// Three mutually exclusive outcomes: a spinner while the size is unresolved,
/// a bordered placeholder after a failed query, otherwise the image at its
/// resolved size wrapped in a press detector.
pub fn view(state: &State) -> Element<'_, Message> {
    match state.render_case() {
        RenderCase::Loading => loading_placeholder(state),
        RenderCase::Error => error_placeholder(state.alt()),
        RenderCase::Image => resolved_image(state),
    }
}

fn loading_placeholder(state: &State) -> Element<'_, Message> {
    let (width, height) = state.placeholder_dimensions();
    let spinner = Spinner::new(
        state.spinner_rotation(),
        SPINNER_SIZE.min(width).min(height),
    );

    container(spinner.into_element())
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn error_placeholder(alt: Option<&str>) -> Element<'_, Message> {
    let size = config::ERROR_PLACEHOLDER_SIZE;
    let content: Element<'_, Message> = match alt {
        Some(alt) => text(alt)
            .size(12)
            .font(Font {
                style: font::Style::Italic,
                ..Font::DEFAULT
            })
            .into(),
        None => Space::new().into(),
    };

    container(content)
        .width(Length::Fixed(size))
        .height(Length::Fixed(size))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .clip(true)
        .style(|_theme: &Theme| container::Style {
            border: Border {
                color: BORDER_COLOR,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

fn resolved_image(state: &State) -> Element<'_, Message> {
    let size = state.size();
    let pass = state.inputs().pass_props;

    let mut image = Image::new(state.inputs().source.handle())
        .content_fit(pass.content_fit.unwrap_or(ContentFit::Contain))
        .width(size.width.to_length())
        .height(size.height.to_length());
    if let Some(opacity) = pass.opacity {
        image = image.opacity(opacity);
    }

    mouse_area(image).on_press(Message::Pressed).into()
}
