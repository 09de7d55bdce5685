// SPDX-License-Identifier: MPL-2.0
use iced_image_element::config::{self, Config};
use iced_image_element::element::{Effect, Inputs, Message, Phase, RenderCase, State};
use iced_image_element::error::Error;
use iced_image_element::source::Source;
use iced_image_element::style::{Dimension, StyleInput, StyleMap};
use tempfile::tempdir;

fn inputs_from_config(config: &Config, uri: &str) -> Inputs {
    let mut inputs = Inputs::new(Source::new(uri));
    inputs.initial_dimensions = config.initial_dimensions();
    inputs.max_width = config.max_width;
    inputs
}

#[test]
fn configured_element_resolves_through_the_full_query_cycle() {
    // Persist a configuration, load it back, and drive an element with it.
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");
    let config = Config {
        initial_width: 24.0,
        initial_height: 24.0,
        max_width: Some(100.0),
    };
    config::save_to_path(&config, &config_path).expect("Failed to write config file");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config from path");

    let (mut state, effect) = State::new(inputs_from_config(&loaded, "/pictures/banner.png"));

    // No explicit dimensions: the element asks for an intrinsic-size query
    // and shows the configured placeholder in the meantime.
    let Effect::QuerySize { source, generation } = effect else {
        panic!("expected a size query");
    };
    assert_eq!(source.uri(), "/pictures/banner.png");
    assert_eq!(state.render_case(), RenderCase::Loading);
    assert_eq!(state.placeholder_dimensions(), (24.0, 24.0));

    // Query completes: the configured cap clamps the width and the height
    // scales to preserve the aspect ratio.
    state.handle(Message::SizeResolved {
        generation,
        result: Ok((200.0, 100.0)),
    });
    assert_eq!(state.phase(), Phase::Resolved);
    assert_eq!(state.size().width, Dimension::Px(100.0));
    assert_eq!(state.size().height, Dimension::Px(50.0));

    // A press reports the source locator back to the host.
    let pressed = state.handle(Message::Pressed);
    assert_eq!(
        pressed,
        Effect::Pressed {
            uri: "/pictures/banner.png".to_string(),
        }
    );
}

#[test]
fn styled_element_never_queries_and_failure_path_shows_alt() {
    // Style-driven sizes resolve synchronously.
    let styled = Inputs::new(Source::new("/pictures/avatar.png")).style(StyleInput::Sequence(
        vec![
            StyleMap::default().with_width(50.0),
            StyleMap::default().with_width(100.0).with_height(80.0),
        ],
    ));
    let (styled_state, effect) = State::new(styled);
    assert_eq!(effect, Effect::None);
    assert_eq!(styled_state.size().width, Dimension::Px(50.0));
    assert_eq!(styled_state.size().height, Dimension::Px(80.0));

    // An unsized element whose query fails renders the error placeholder
    // with the provided alt text.
    let unsized_inputs = Inputs::new(Source::new("/pictures/broken.png")).alt("a photo");
    let (mut failed_state, _) = State::new(unsized_inputs);
    failed_state.handle(Message::SizeResolved {
        generation: failed_state.generation(),
        result: Err(Error::SizeQuery("header truncated".into())),
    });

    assert_eq!(failed_state.render_case(), RenderCase::Error);
    assert_eq!(failed_state.alt(), Some("a photo"));
}
