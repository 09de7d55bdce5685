// SPDX-License-Identifier: MPL-2.0
//! Image element state and dimension resolution.
//!
//! The element resolves its displayed size synchronously when both width and
//! height can be derived from props or style, and otherwise asks the host to
//! run an intrinsic-size query. Each query carries a generation number;
//! completions from a superseded pass are dropped, so a late result can never
//! overwrite a newer one and a torn-down element is never mutated.

use crate::config;
use crate::error::Error;
use crate::source::Source;
use crate::style::{extract_dimensions, Dimension, StyleInput, StyleValue};
use std::time::Duration;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Pass-through attributes forwarded to the image widget. Empty by convention.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PassProps {
    /// Overrides the default `Contain` fit.
    pub content_fit: Option<iced::ContentFit>,
    /// Widget opacity, 0.0 to 1.0.
    pub opacity: Option<f32>,
}

/// Inputs for one resolution pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Inputs {
    /// Image resource to render.
    pub source: Source,
    /// Alternative text shown in the error placeholder.
    pub alt: Option<String>,
    /// Explicit width prop; takes precedence over style entries.
    pub width: Option<StyleValue>,
    /// Explicit height prop; takes precedence over style entries.
    pub height: Option<StyleValue>,
    /// Single style entry or ordered sequence of entries.
    pub style: Option<StyleInput>,
    /// Cap applied to intrinsically-queried images.
    pub max_width: Option<f32>,
    /// Placeholder size before the intrinsic size is known.
    pub initial_dimensions: (f32, f32),
    /// Device pixel-density ratio dividing raw intrinsic pixels.
    pub scale_factor: f32,
    /// Extra attributes for the image primitive.
    pub pass_props: PassProps,
}

impl Inputs {
    /// Inputs with defaults for everything but the source.
    #[must_use]
    pub fn new(source: impl Into<Source>) -> Self {
        Self {
            source: source.into(),
            alt: None,
            width: None,
            height: None,
            style: None,
            max_width: None,
            initial_dimensions: (
                config::DEFAULT_INITIAL_DIMENSION,
                config::DEFAULT_INITIAL_DIMENSION,
            ),
            scale_factor: config::DEFAULT_SCALE_FACTOR,
            pass_props: PassProps::default(),
        }
    }

    /// Sets the alt text.
    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Sets the explicit width prop.
    #[must_use]
    pub fn width(mut self, width: impl Into<StyleValue>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets the explicit height prop.
    #[must_use]
    pub fn height(mut self, height: impl Into<StyleValue>) -> Self {
        self.height = Some(height.into());
        self
    }

    /// Sets the style input.
    #[must_use]
    pub fn style(mut self, style: StyleInput) -> Self {
        self.style = Some(style);
        self
    }

    /// Sets the width cap for intrinsically-queried images.
    #[must_use]
    pub fn max_width(mut self, max_width: f32) -> Self {
        self.max_width = Some(max_width);
        self
    }

    /// Sets the device pixel-density ratio.
    #[must_use]
    pub fn scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }
}

/// Final width/height pair the element renders at.
///
/// Only ever committed as a whole, so the renderer never observes a width
/// from one pass paired with a height from another.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedSize {
    pub width: Dimension,
    pub height: Dimension,
}

impl ResolvedSize {
    /// A size in logical pixels.
    #[must_use]
    pub fn px(width: f32, height: f32) -> Self {
        Self {
            width: Dimension::Px(width),
            height: Dimension::Px(height),
        }
    }
}

/// Resolution phase.
///
/// An explicit tag instead of a zero-size sentinel, so a legitimately
/// zero-sized explicit dimension is distinguishable from "not yet resolved".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Intrinsic-size query in flight, nothing resolved yet.
    Loading,
    /// A size has been committed.
    Resolved,
    /// The last intrinsic-size query failed.
    Failed,
}

/// The three mutually exclusive render outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderCase {
    /// Fixed-size loading indicator.
    Loading,
    /// Bordered placeholder with optional alt text.
    Error,
    /// The image at its resolved size.
    Image,
}

/// Messages for the image element.
#[derive(Debug, Clone)]
pub enum Message {
    /// Completion of an intrinsic-size query, in raw pixels.
    SizeResolved {
        generation: u64,
        result: Result<(f32, f32), Error>,
    },
    /// Animate the loading spinner.
    SpinnerTick,
    /// The rendered image was clicked or tapped.
    Pressed,
}

/// Side effects the host should perform after a resolution pass or message.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Run an intrinsic-size query against `source` and feed the result back
    /// as `Message::SizeResolved` with the same generation.
    QuerySize { source: Source, generation: u64 },
    /// The image was pressed; carries the source locator.
    Pressed { uri: String },
}

/// Image element state.
#[derive(Debug, Clone)]
pub struct State {
    inputs: Inputs,
    phase: Phase,
    size: ResolvedSize,
    generation: u64,
    spinner_rotation: f32,
    last_error: Option<Error>,
}

impl State {
    /// Creates the element and runs the first resolution pass.
    pub fn new(inputs: Inputs) -> (Self, Effect) {
        let (width, height) = inputs.initial_dimensions;
        let mut state = Self {
            inputs: inputs.clone(),
            phase: Phase::Loading,
            size: ResolvedSize::px(width, height),
            generation: 0,
            spinner_rotation: 0.0,
            last_error: None,
        };
        let effect = state.resolve(inputs);
        (state, effect)
    }

    /// Runs a resolution pass with fresh inputs.
    ///
    /// Call again whenever the host receives new props for this element.
    /// When both dimensions are derivable from props or style the size is
    /// committed synchronously and no query is issued; otherwise the returned
    /// effect asks the host to probe the source.
    pub fn resolve(&mut self, inputs: Inputs) -> Effect {
        // Every pass gets a fresh generation, so completions of queries
        // issued by earlier passes can no longer land.
        self.generation += 1;
        self.inputs = inputs;
        let (style_width, style_height) = extract_dimensions(
            self.inputs.style.as_ref(),
            self.inputs.width.as_ref(),
            self.inputs.height.as_ref(),
        );

        if let (Some(width), Some(height)) = (style_width, style_height) {
            self.commit(ResolvedSize {
                width: width.to_dimension(),
                height: height.to_dimension(),
            });
            return Effect::None;
        }

        if self.phase != Phase::Resolved {
            // A previously resolved size stays visible while the new query
            // runs; otherwise show the loading placeholder.
            self.phase = Phase::Loading;
        }
        Effect::QuerySize {
            source: self.inputs.source.clone(),
            generation: self.generation,
        }
    }

    /// Handles an element message.
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::SizeResolved { generation, result } => {
                if generation != self.generation {
                    // Completion of a superseded pass, or of one issued before
                    // the element was torn down: drop it silently.
                    return Effect::None;
                }
                match result {
                    Ok((raw_width, raw_height)) => {
                        // Raw pixels to logical units.
                        let width = raw_width / self.inputs.scale_factor;
                        let height = raw_height / self.inputs.scale_factor;
                        match self.inputs.max_width {
                            None => self.commit(ResolvedSize::px(width, height)),
                            Some(max_width) => {
                                let optimal_width = max_width.min(width);
                                let optimal_height = optimal_width * height / width;
                                self.commit(ResolvedSize::px(optimal_width, optimal_height));
                            }
                        }
                    }
                    Err(error) => {
                        // The last committed size stays in place for layout;
                        // rendering switches to the error placeholder.
                        self.phase = Phase::Failed;
                        self.last_error = Some(error);
                    }
                }
                Effect::None
            }
            Message::SpinnerTick => {
                if self.phase == Phase::Loading {
                    self.spinner_rotation =
                        (self.spinner_rotation + SPINNER_SPEED) % std::f32::consts::TAU;
                }
                Effect::None
            }
            Message::Pressed => Effect::Pressed {
                uri: self.inputs.source.uri().to_string(),
            },
        }
    }

    /// Ticks the spinner while a query is outstanding.
    pub fn subscription(&self) -> iced::Subscription<Message> {
        if self.phase == Phase::Loading {
            iced::time::every(Duration::from_millis(16)).map(|_| Message::SpinnerTick)
        } else {
            iced::Subscription::none()
        }
    }

    /// Pure render selection from the current phase.
    #[must_use]
    pub fn render_case(&self) -> RenderCase {
        match self.phase {
            Phase::Loading => RenderCase::Loading,
            Phase::Failed => RenderCase::Error,
            Phase::Resolved => RenderCase::Image,
        }
    }

    fn commit(&mut self, size: ResolvedSize) {
        self.size = size;
        self.phase = Phase::Resolved;
        self.last_error = None;
    }

    /// The currently committed size.
    #[must_use]
    pub fn size(&self) -> &ResolvedSize {
        &self.size
    }

    /// The current resolution phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The latest inputs.
    #[must_use]
    pub fn inputs(&self) -> &Inputs {
        &self.inputs
    }

    /// Generation of the current resolution pass.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Alt text for the error placeholder, if any.
    #[must_use]
    pub fn alt(&self) -> Option<&str> {
        self.inputs.alt.as_deref()
    }

    /// Error retained from the last failed query.
    #[must_use]
    pub fn last_error(&self) -> Option<&Error> {
        self.last_error.as_ref()
    }

    /// Current spinner rotation angle in radians.
    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Size of the loading placeholder box.
    #[must_use]
    pub fn placeholder_dimensions(&self) -> (f32, f32) {
        let (width, height) = self.inputs.initial_dimensions;
        if width > 0.0 && height > 0.0 {
            (width, height)
        } else {
            (
                config::LOADING_PLACEHOLDER_SIZE,
                config::LOADING_PLACEHOLDER_SIZE,
            )
        }
    }
}
