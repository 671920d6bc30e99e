//! Launch parameters: everything the client passes to a Mini App on start

use super::init_data::{self, InitData};
use super::theme_params::{self, ThemeParams};
use crate::error::TransformError;
use crate::input::{Input, SearchParams};
use crate::schema::{FromRecord, Record, Schema};
use crate::transformers::{boolean, create_transformer_gen, search_params, string, TransformerGen};
use crate::Result;
use serde::Serialize;
use url::Url;

/// Parsed launch parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LaunchParams {
    /// True if the app was launched in inline mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bot_inline: Option<bool>,
    /// Parsed `tgWebAppData`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_data: Option<InitData>,
    /// `tgWebAppData` exactly as received, for signature checks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub init_data_raw: Option<String>,
    /// Client platform (`android`, `ios`, `tdesktop`, ...)
    pub platform: String,
    /// True if the settings button should be shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_settings: Option<bool>,
    /// `startapp` parameter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_param: Option<String>,
    /// Client palette
    pub theme_params: ThemeParams,
    /// Supported Mini Apps API version
    pub version: String,
}

impl FromRecord for LaunchParams {
    fn from_record(mut record: Record) -> Result<Self> {
        Ok(Self {
            bot_inline: record.take("botInline")?,
            init_data: record.take("initData")?,
            init_data_raw: record.take("initDataRaw")?,
            platform: record.take("platform")?,
            show_settings: record.take("showSettings")?,
            start_param: record.take("startParam")?,
            theme_params: record.take("themeParams")?,
            version: record.take("version")?,
        })
    }
}

/// Transformer generator for launch parameters (`LaunchParams`)
pub fn transformer() -> TransformerGen<LaunchParams> {
    create_transformer_gen("LaunchParams", |value| {
        let schema = Schema::builder("LaunchParams")
            .field_from("botInline", "tgWebAppBotInline", boolean().optional())
            .field_from("initData", "tgWebAppData", init_data::transformer().optional())
            .field_from("initDataRaw", "tgWebAppData", string().optional())
            .field_from("platform", "tgWebAppPlatform", string())
            .field_from("showSettings", "tgWebAppShowSettings", boolean().optional())
            .field_from("startParam", "tgWebAppStartParam", string().optional())
            .field_from("themeParams", "tgWebAppThemeParams", theme_params::transformer().required())
            .field_from("version", "tgWebAppVersion", string())
            .build()?;

        search_params::<LaunchParams>(schema).parse(value)
    })
}

/// Parse launch parameters from a query string or parameter collection
pub fn parse(input: impl Into<Input>) -> Result<LaunchParams> {
    transformer().parse(input)
}

/// Parse launch parameters out of a full launch URL.
///
/// Query parameters come first, then fragment parameters (the client puts
/// launch parameters in the fragment); the first occurrence of a key wins.
pub fn parse_url(url: &str) -> Result<LaunchParams> {
    let url = Url::parse(url).map_err(|e| {
        TransformError::malformed("launch URL", e.to_string()).rooted_at("LaunchParams")
    })?;

    let mut params: SearchParams = url.query_pairs().into_owned().collect();
    if let Some(fragment) = url.fragment() {
        for (k, v) in SearchParams::parse(fragment).iter() {
            params.append(k, v);
        }
    }
    parse(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn base() -> SearchParams {
        SearchParams::new()
            .with("tgWebAppPlatform", "tdesktop")
            .with("tgWebAppThemeParams", "{}")
            .with("tgWebAppVersion", "7.0")
    }

    #[test]
    fn test_optional_params_may_be_missing() {
        let lp = parse(base()).unwrap();
        assert_eq!(lp.platform, "tdesktop");
        assert_eq!(lp.version, "7.0");
        assert!(lp.theme_params.is_empty());
        assert_eq!(lp.bot_inline, None);
        assert_eq!(lp.init_data, None);
        assert_eq!(lp.init_data_raw, None);
        assert_eq!(lp.show_settings, None);
        assert_eq!(lp.start_param, None);
    }

    #[test]
    fn test_bot_inline_is_boolean() {
        let lp = parse(base().with("tgWebAppBotInline", "false")).unwrap();
        assert_eq!(lp.bot_inline, Some(false));

        let err = parse(base().with("tgWebAppBotInline", "str")).unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::TypeMismatch { .. }));
        assert_eq!(err.path().to_string(), "LaunchParams.botInline");
    }

    #[test]
    fn test_init_data_and_raw_read_same_key() {
        let raw = SearchParams::new().with("auth_date", "1").with("hash", "abc");
        let lp = parse(base().with("tgWebAppData", raw.to_string())).unwrap();

        let init = lp.init_data.unwrap();
        assert_eq!(init.auth_date.timestamp(), 1);
        assert_eq!(init.hash, "abc");
        assert_eq!(lp.init_data_raw.as_deref(), Some("auth_date=1&hash=abc"));
    }

    #[test]
    fn test_nested_init_data_error_path() {
        let err = parse(base().with("tgWebAppData", "auth_date=1")).unwrap_err();
        assert_eq!(err.path().to_string(), "LaunchParams.initData.hash");
        assert_eq!(err.kind(), &ErrorKind::MissingRequiredField);
    }

    #[test]
    fn test_theme_params_required_and_validated() {
        let lp = parse(
            base()
                .with("tgWebAppStartParam", "start-param")
                .with("tgWebAppShowSettings", "false"),
        )
        .unwrap();
        assert_eq!(lp.start_param.as_deref(), Some("start-param"));
        assert_eq!(lp.show_settings, Some(false));

        let no_theme = SearchParams::new()
            .with("tgWebAppPlatform", "ios")
            .with("tgWebAppVersion", "7.0");
        let err = parse(no_theme).unwrap_err();
        assert_eq!(err.path().to_string(), "LaunchParams.themeParams");
    }

    #[test]
    fn test_parse_url_reads_fragment() {
        let url = "https://example.com/app?tgWebAppStartParam=ref42#tgWebAppPlatform=ios\
                   &tgWebAppVersion=7.2&tgWebAppThemeParams=%7B%22bg_color%22%3A%22%23ffffff%22%7D";
        let lp = parse_url(url).unwrap();
        assert_eq!(lp.platform, "ios");
        assert_eq!(lp.start_param.as_deref(), Some("ref42"));
        assert_eq!(lp.theme_params.bg_color().map(|c| c.to_string()).as_deref(), Some("#ffffff"));
    }

    #[test]
    fn test_parse_url_rejects_garbage() {
        let err = parse_url("not a url").unwrap_err();
        assert!(matches!(err.kind(), ErrorKind::MalformedInput { .. }));
        assert_eq!(err.path().root(), Some("LaunchParams"));
    }
}
