// SPDX-License-Identifier: MPL-2.0
//! Style inputs and the width/height extraction rules.
//!
//! An element may receive its dimensions three ways: explicit `width`/`height`
//! props, a single style entry, or an ordered sequence of style entries.
//! Props always win; in a sequence the first entry defining a field wins and
//! later entries never overwrite it.

use iced::Length;

/// Raw width/height input, as supplied by props or style entries.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Numeric logical pixels.
    Number(f32),
    /// Textual value, either a pixel count or a percentage like `"50%"`.
    Text(String),
}

impl StyleValue {
    /// Converts the raw value into a committed dimension.
    ///
    /// Values containing a percent sign are preserved verbatim. Everything
    /// else goes through an integer-prefix parse; malformed text becomes NaN
    /// and flows into layout unchanged.
    #[must_use]
    pub fn to_dimension(&self) -> Dimension {
        match self {
            StyleValue::Number(n) => Dimension::Px(n.trunc()),
            StyleValue::Text(s) if s.contains('%') => Dimension::Percent(s.clone()),
            StyleValue::Text(s) => Dimension::Px(parse_integer_prefix(s)),
        }
    }
}

impl From<f32> for StyleValue {
    fn from(n: f32) -> Self {
        StyleValue::Number(n)
    }
}

impl From<&str> for StyleValue {
    fn from(s: &str) -> Self {
        StyleValue::Text(s.to_string())
    }
}

/// A committed width or height value.
#[derive(Debug, Clone, PartialEq)]
pub enum Dimension {
    /// Logical pixels.
    Px(f32),
    /// Percentage string preserved verbatim, e.g. `"50%"`.
    Percent(String),
}

impl Dimension {
    /// Maps the dimension onto an iced length.
    ///
    /// Percentages defer to the parent layout axis: a full (or unparsable)
    /// percentage fills it, smaller ones take a fill portion.
    #[must_use]
    pub fn to_length(&self) -> Length {
        match self {
            Dimension::Px(v) => Length::Fixed(*v),
            Dimension::Percent(raw) => {
                let percent = parse_integer_prefix(raw);
                if percent.is_nan() || percent >= 100.0 {
                    Length::Fill
                } else {
                    Length::FillPortion(percent.max(1.0) as u16)
                }
            }
        }
    }
}

/// Parses the leading integer of a string, NaN when there is none.
fn parse_integer_prefix(raw: &str) -> f32 {
    let trimmed = raw.trim();
    let bytes = trimmed.as_bytes();
    let start = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let mut end = start;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == start {
        return f32::NAN;
    }
    trimmed[..end].parse::<f32>().unwrap_or(f32::NAN)
}

/// One style entry with optional dimensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleMap {
    pub width: Option<StyleValue>,
    pub height: Option<StyleValue>,
}

impl StyleMap {
    /// Sets the width of this entry.
    #[must_use]
    pub fn with_width(mut self, width: impl Into<StyleValue>) -> Self {
        self.width = Some(width.into());
        self
    }

    /// Sets the height of this entry.
    #[must_use]
    pub fn with_height(mut self, height: impl Into<StyleValue>) -> Self {
        self.height = Some(height.into());
        self
    }
}

/// Style as received by the element: a single entry or an ordered sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleInput {
    Single(StyleMap),
    Sequence(Vec<StyleMap>),
}

/// Derives `(width, height)` from props and style.
///
/// Explicit props take precedence. Style entries only fill fields that are
/// still unset; a sequence is scanned in order, so its first entry defining a
/// field wins.
pub fn extract_dimensions(
    style: Option<&StyleInput>,
    width_prop: Option<&StyleValue>,
    height_prop: Option<&StyleValue>,
) -> (Option<StyleValue>, Option<StyleValue>) {
    let mut width = width_prop.cloned();
    let mut height = height_prop.cloned();

    match style {
        Some(StyleInput::Sequence(entries)) => {
            for entry in entries {
                if width.is_none() {
                    width = entry.width.clone();
                }
                if height.is_none() {
                    height = entry.height.clone();
                }
            }
        }
        Some(StyleInput::Single(entry)) => {
            if width.is_none() {
                width = entry.width.clone();
            }
            if height.is_none() {
                height = entry.height.clone();
            }
        }
        None => {}
    }

    (width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_text_is_preserved_verbatim() {
        let value = StyleValue::Text("50%".to_string());
        assert_eq!(value.to_dimension(), Dimension::Percent("50%".to_string()));
    }

    #[test]
    fn pixel_text_parses_integer_prefix() {
        assert_eq!(
            StyleValue::Text("120px".to_string()).to_dimension(),
            Dimension::Px(120.0)
        );
        assert_eq!(
            StyleValue::Text("  -8 ".to_string()).to_dimension(),
            Dimension::Px(-8.0)
        );
    }

    #[test]
    fn malformed_text_becomes_nan() {
        match StyleValue::Text("auto".to_string()).to_dimension() {
            Dimension::Px(v) => assert!(v.is_nan()),
            other => panic!("expected Px, got {:?}", other),
        }
    }

    #[test]
    fn numbers_are_truncated_to_whole_pixels() {
        assert_eq!(StyleValue::Number(50.9).to_dimension(), Dimension::Px(50.0));
    }

    #[test]
    fn props_take_precedence_over_style() {
        let style = StyleInput::Single(StyleMap::default().with_width(10.0).with_height(20.0));
        let width_prop = StyleValue::Number(99.0);

        let (width, height) = extract_dimensions(Some(&style), Some(&width_prop), None);

        assert_eq!(width, Some(StyleValue::Number(99.0)));
        assert_eq!(height, Some(StyleValue::Number(20.0)));
    }

    #[test]
    fn sequence_first_entry_wins() {
        let style = StyleInput::Sequence(vec![
            StyleMap::default().with_width(50.0),
            StyleMap::default().with_width(100.0).with_height(80.0),
        ]);

        let (width, height) = extract_dimensions(Some(&style), None, None);

        assert_eq!(width, Some(StyleValue::Number(50.0)));
        assert_eq!(height, Some(StyleValue::Number(80.0)));
    }

    #[test]
    fn missing_style_yields_nothing() {
        let (width, height) = extract_dimensions(None, None, None);
        assert!(width.is_none());
        assert!(height.is_none());
    }

    #[test]
    fn px_maps_to_fixed_length() {
        assert_eq!(Dimension::Px(42.0).to_length(), Length::Fixed(42.0));
    }

    #[test]
    fn percent_maps_to_fill_or_portion() {
        assert_eq!(
            Dimension::Percent("100%".to_string()).to_length(),
            Length::Fill
        );
        assert_eq!(
            Dimension::Percent("50%".to_string()).to_length(),
            Length::FillPortion(50)
        );
    }
}
