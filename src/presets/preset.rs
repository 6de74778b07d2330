// SPDX-License-Identifier: MPL-2.0
//! Stored preset records.
//!
//! Fields keep the raw text of the design controls so stored lists stay
//! readable by any tool that understands the format:
//!
//! ```json
//! {"number":"7","bgType":"linear","direction":"90","shape":"20%","colors":["#5a4fcf","#a38fff"]}
//! ```
//!
//! Reading is lenient: numbers are accepted where text is expected, missing
//! or mistyped fields read as empty, and the design falls back per field.

use crate::domain::design::{
    BackgroundType, ColorList, DesignState, GradientDirection, HexColor, Shape,
};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Snapshot of a design as stored in the preset list.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Preset {
    /// Label input text, unclamped.
    #[serde(deserialize_with = "lenient_text")]
    pub number: String,
    #[serde(rename = "bgType", deserialize_with = "lenient_text")]
    pub bg_type: String,
    /// Gradient angle in degrees, as text.
    #[serde(deserialize_with = "lenient_text")]
    pub direction: String,
    /// CSS border-radius value.
    #[serde(deserialize_with = "lenient_text")]
    pub shape: String,
    #[serde(deserialize_with = "lenient_colors")]
    pub colors: Vec<String>,
}

/// Text fields also accept numbers and booleans; anything else reads as "".
fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null | Value::Array(_) | Value::Object(_) => String::new(),
    })
}

/// Keeps the string entries of a color array.
fn lenient_colors<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(color) => Some(color),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Background settings shared between presets: everything but label and shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub background: BackgroundType,
    pub direction: GradientDirection,
    pub colors: ColorList,
}

impl Preset {
    /// Copies the current design.
    #[must_use]
    pub fn capture(state: &DesignState) -> Self {
        Self {
            number: state.label_input().to_string(),
            bg_type: state.background().keyword().to_string(),
            direction: state.direction().to_string(),
            shape: state.shape().css_value().to_string(),
            colors: state.colors().to_strings(),
        }
    }

    /// Resolves the stored background settings.
    ///
    /// Unparseable colors are skipped and the palette is brought back within
    /// its length bounds.
    #[must_use]
    pub fn theme(&self) -> Theme {
        let colors = self
            .colors
            .iter()
            .filter_map(|raw| HexColor::parse(raw))
            .collect();
        Theme {
            background: BackgroundType::from_keyword(&self.bg_type),
            direction: GradientDirection::parse(&self.direction),
            colors: ColorList::normalized(colors),
        }
    }

    /// Stored shape, or the default shape for values outside the fixed set.
    #[must_use]
    pub fn shape(&self) -> Shape {
        Shape::from_css(&self.shape).unwrap_or_default()
    }

    /// Overwrites the whole design, label included.
    pub fn apply_to(&self, state: &mut DesignState) {
        state.set_label_input(self.number.clone());
        state.set_shape(self.shape());
        self.apply_theme_to(state);
    }

    /// Overwrites background type, direction and colors only.
    pub fn apply_theme_to(&self, state: &mut DesignState) {
        let theme = self.theme();
        state.set_background(theme.background);
        state.set_direction(theme.direction);
        state.set_colors(theme.colors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customized_state() -> DesignState {
        let mut state = DesignState::default();
        state.set_label_input("37");
        state.set_background(BackgroundType::Radial);
        state.set_direction(GradientDirection::new(45));
        state.set_shape(Shape::Circle);
        state.colors_mut().push_default();
        state
    }

    #[test]
    fn capture_keeps_raw_control_values() {
        let preset = Preset::capture(&customized_state());
        assert_eq!(preset.number, "37");
        assert_eq!(preset.bg_type, "radial");
        assert_eq!(preset.direction, "45");
        assert_eq!(preset.shape, "50%");
        assert_eq!(preset.colors, vec!["#5a4fcf", "#a38fff", "#ffffff"]);
    }

    #[test]
    fn serializes_with_stored_field_names() {
        let json = serde_json::to_string(&Preset::capture(&DesignState::default())).unwrap();
        assert_eq!(
            json,
            r##"{"number":"1","bgType":"linear","direction":"90","shape":"20%","colors":["#5a4fcf","#a38fff"]}"##
        );
    }

    #[test]
    fn apply_restores_full_snapshot() {
        let saved = customized_state();
        let preset = Preset::capture(&saved);

        let mut state = DesignState::default();
        preset.apply_to(&mut state);
        assert_eq!(state, saved);
    }

    #[test]
    fn apply_theme_leaves_label_and_shape() {
        let preset = Preset::capture(&customized_state());

        let mut state = DesignState::default();
        state.set_label_input("5");
        state.set_shape(Shape::Square);
        preset.apply_theme_to(&mut state);

        assert_eq!(state.label_input(), "5");
        assert_eq!(state.shape(), Shape::Square);
        assert_eq!(state.background(), BackgroundType::Radial);
        assert_eq!(state.direction().degrees(), 45);
        assert_eq!(state.colors().len(), 3);
    }

    #[test]
    fn theme_tolerates_damaged_records() {
        let preset = Preset {
            number: "x".into(),
            bg_type: "conic".into(),
            direction: "left".into(),
            shape: "3px".into(),
            colors: vec!["#123456".into(), "blue".into()],
        };
        let theme = preset.theme();
        assert_eq!(theme.background, BackgroundType::Radial);
        assert_eq!(theme.direction, GradientDirection::default());
        assert_eq!(theme.colors.to_strings(), vec!["#123456", "#ffffff"]);
        assert_eq!(preset.shape(), Shape::default());
    }

    #[test]
    fn reads_numbers_where_text_is_expected() {
        let preset: Preset = serde_json::from_str(
            r##"{"number":7,"bgType":"solid","direction":45,"shape":"50%","colors":["#102030",3,"#405060"]}"##,
        )
        .unwrap();
        assert_eq!(preset.number, "7");
        assert_eq!(preset.direction, "45");
        assert_eq!(preset.colors, vec!["#102030", "#405060"]);
        assert_eq!(preset.theme().direction.degrees(), 45);
    }

    #[test]
    fn missing_fields_fall_back_per_field() {
        let preset: Preset = serde_json::from_str(r#"{"number":"3","colors":null}"#).unwrap();

        let mut state = DesignState::default();
        preset.apply_to(&mut state);
        assert_eq!(state.label().value(), 3);
        assert_eq!(state.background(), BackgroundType::Radial);
        assert_eq!(state.direction(), GradientDirection::default());
        assert_eq!(state.shape(), Shape::default());
        assert_eq!(state.colors().len(), 2);
    }
}
