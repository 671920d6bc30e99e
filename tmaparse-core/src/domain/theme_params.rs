//! Theme parameters: the palette the client applies to a Mini App

use crate::casing::snake_to_camel;
use crate::error::TransformError;
use crate::input::Input;
use crate::rgb::Rgb;
use crate::transformers::object::decode_object;
use crate::transformers::{create_transformer_gen, rgb, TransformerGen};
use crate::Result;
use serde::Serialize;
use serde_json::Value;
use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

/// Colors keyed by camelCase name (`bgColor`, `textColor`, ...).
///
/// The platform adds keys over time, so unknown keys are kept rather than
/// rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ThemeParams {
    colors: BTreeMap<String, Rgb>,
}

macro_rules! color_accessors {
    ($($(#[$doc:meta])* $method:ident => $key:literal;)*) => {
        $(
            $(#[$doc])*
            pub fn $method(&self) -> Option<Rgb> {
                self.get($key)
            }
        )*
    };
}

impl ThemeParams {
    /// Color stored under a camelCase key
    pub fn get(&self, key: &str) -> Option<Rgb> {
        self.colors.get(key).copied()
    }

    /// Number of colors
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if no colors are set
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Iterate colors ordered by key
    pub fn iter(&self) -> impl Iterator<Item = (&str, Rgb)> {
        self.colors.iter().map(|(k, v)| (k.as_str(), *v))
    }

    color_accessors! {
        /// `accent_text_color`
        accent_text_color => "accentTextColor";
        /// `bg_color`
        bg_color => "bgColor";
        /// `bottom_bar_bg_color`
        bottom_bar_bg_color => "bottomBarBgColor";
        /// `button_color`
        button_color => "buttonColor";
        /// `button_text_color`
        button_text_color => "buttonTextColor";
        /// `destructive_text_color`
        destructive_text_color => "destructiveTextColor";
        /// `header_bg_color`
        header_bg_color => "headerBgColor";
        /// `hint_color`
        hint_color => "hintColor";
        /// `link_color`
        link_color => "linkColor";
        /// `secondary_bg_color`
        secondary_bg_color => "secondaryBgColor";
        /// `section_bg_color`
        section_bg_color => "sectionBgColor";
        /// `section_header_text_color`
        section_header_text_color => "sectionHeaderTextColor";
        /// `section_separator_color`
        section_separator_color => "sectionSeparatorColor";
        /// `subtitle_text_color`
        subtitle_text_color => "subtitleTextColor";
        /// `text_color`
        text_color => "textColor";
    }
}

/// Transformer generator for theme parameters (`ThemeParams`).
///
/// Input is an object, or a JSON-encoded object, with snake_case keys. Every
/// value must be a color, and no two keys may share a camelCase form.
pub fn transformer() -> TransformerGen<ThemeParams> {
    create_transformer_gen("ThemeParams", |value| {
        let map = decode_object(value, "ThemeParams")?;
        let color = rgb();
        let mut colors = BTreeMap::new();
        for (key, raw) in map.iter() {
            match colors.entry(snake_to_camel(key)) {
                Entry::Occupied(slot) => {
                    let target = slot.key().clone();
                    return Err(TransformError::malformed(
                        "ThemeParams",
                        format!("key {key:?} repeats {target:?}"),
                    )
                    .in_field(target));
                }
                Entry::Vacant(slot) => {
                    let parsed = color
                        .parse(raw)
                        .map_err(|e| e.in_field(slot.key().clone()))?;
                    slot.insert(parsed);
                }
            }
        }
        Ok(ThemeParams { colors })
    })
}

/// Parse theme parameters from a JSON value.
///
/// Text is the JSON document itself (`{"bg_color":"#000"}`), never a
/// query string.
pub fn parse(input: impl Into<Value>) -> Result<ThemeParams> {
    transformer().parse(Input::Object(input.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use serde_json::json;

    #[test]
    fn test_keys_and_colors_normalized() {
        let theme = parse(json!({
            "bg_color": "#000",
            "text_color": "#FFFFFF",
            "button_color": "rgb(36, 129, 204)",
            "some_future_color": "#123456"
        }))
        .unwrap();

        assert_eq!(theme.len(), 4);
        assert_eq!(theme.bg_color().map(|c| c.to_string()).as_deref(), Some("#000000"));
        assert_eq!(theme.text_color(), Some(Rgb::new(255, 255, 255)));
        assert_eq!(theme.button_color(), Some(Rgb::new(36, 129, 204)));
        assert_eq!(theme.get("someFutureColor"), Some(Rgb::new(0x12, 0x34, 0x56)));
        assert_eq!(theme.hint_color(), None);
    }

    #[test]
    fn test_json_string_input() {
        let theme = parse(json!(r##"{"bg_color":"#17212b"}"##)).unwrap();
        assert_eq!(theme.bg_color(), Some(Rgb::new(0x17, 0x21, 0x2b)));

        let empty = parse(json!("{}")).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_rejects_bad_color_with_path() {
        let err = parse(json!({"link_color": "blue"})).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
        assert_eq!(err.path().to_string(), "ThemeParams.linkColor");
    }

    #[test]
    fn test_str_input_is_json() {
        let theme = parse(r##"{"bg_color":"#000"}"##).unwrap();
        assert_eq!(theme.bg_color(), Some(Rgb::new(0, 0, 0)));

        let theme = parse(String::from(r##"{"text_color":"#fff"}"##)).unwrap();
        assert_eq!(theme.text_color(), Some(Rgb::new(255, 255, 255)));

        let err = parse("bg_color=%23000").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MalformedInput { .. }));
        assert_eq!(err.path().to_string(), "ThemeParams");
    }

    #[test]
    fn test_rejects_colliding_keys() {
        let err = parse(json!({"bg_color": "#000", "bgColor": "#fff"})).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MalformedInput { .. }));
        assert_eq!(err.path().to_string(), "ThemeParams.bgColor");
    }

    #[test]
    fn test_rejects_empty_string() {
        let err = parse(json!("")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MalformedInput { .. }));
    }

    #[test]
    fn test_serializes_camel_case_hex() {
        let theme = parse(json!({"bg_color": "#fff"})).unwrap();
        assert_eq!(serde_json::to_value(&theme).unwrap(), json!({"bgColor": "#ffffff"}));
    }
}
