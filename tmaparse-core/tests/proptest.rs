//! Property-based tests using proptest

use proptest::prelude::*;
use serde_json::{json, Value};
use tmaparse_core::{
    casing::{camel_to_snake, snake_to_camel},
    init_data, launch_params, theme_params,
    transformers::{boolean, integer, number, string},
    Rgb, Schema, SearchParams,
};

/// Arbitrary JSON values a few levels deep
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>()
            .prop_filter("finite", |n| n.is_finite())
            .prop_map(|n| json!(n)),
        ".{0,24}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::hash_map("[a-z_]{1,12}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #[test]
    fn prop_init_data_never_panics(raw in ".{0,256}") {
        // Should either succeed or return an error, never panic
        let _ = init_data::parse(raw.as_str());
    }

    #[test]
    fn prop_launch_params_never_panics(value in arb_json()) {
        let _ = launch_params::parse(value);
    }

    #[test]
    fn prop_theme_params_never_panics(value in arb_json()) {
        let _ = theme_params::parse(value);
    }

    #[test]
    fn prop_errors_always_rooted(value in arb_json()) {
        if let Err(err) = init_data::parse(value) {
            prop_assert_eq!(err.path().root(), Some("InitData"));
        }
    }

    #[test]
    fn prop_integer_strings_coerce(n in any::<i64>()) {
        prop_assert_eq!(integer().parse(&json!(n.to_string())).unwrap(), n);
        prop_assert_eq!(integer().parse(&json!(n)).unwrap(), n);
    }

    #[test]
    fn prop_number_strings_coerce(n in -1.0e12f64..1.0e12f64) {
        let parsed = number().parse(&json!(n.to_string())).unwrap();
        prop_assert_eq!(parsed, n);
    }

    #[test]
    fn prop_boolean_rejects_other_strings(s in "[a-zA-Z0-9]{0,8}") {
        prop_assume!(s != "true" && s != "false");
        prop_assert!(boolean().parse(&json!(s)).is_err());
    }

    #[test]
    fn prop_snake_camel_round_trip(words in prop::collection::vec("[a-z]{1,8}", 1..5)) {
        let snake = words.join("_");
        let camel = snake_to_camel(&snake);
        prop_assert_eq!(camel_to_snake(&camel), snake);
    }

    #[test]
    fn prop_hex_colors_normalize(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let upper = format!("#{:02X}{:02X}{:02X}", r, g, b);
        let parsed: Rgb = upper.parse().unwrap();
        prop_assert_eq!(parsed, Rgb::new(r, g, b));
        prop_assert_eq!(parsed.to_string(), upper.to_lowercase());

        let functional: Rgb = format!("rgb({}, {}, {})", r, g, b).parse().unwrap();
        prop_assert_eq!(functional, parsed);
    }

    #[test]
    fn prop_fail_fast_is_deterministic(
        bad_count in "[a-z]{1,6}",
        flag_a in ".{0,6}",
        flag_b in ".{0,6}",
    ) {
        // `count` is declared first, so its error wins whatever `flag` holds
        let schema = Schema::builder("Form")
            .field("count", integer())
            .field("flag", boolean())
            .field("label", string().optional())
            .build()
            .unwrap();

        let collect = |flag: &str| {
            let params = SearchParams::new()
                .with("count", bad_count.clone())
                .with("flag", flag);
            tmaparse_core::transformers::search_params::<Form>(schema.clone())
                .parse(&params.to_value())
                .unwrap_err()
        };

        let a = collect(&flag_a);
        let b = collect(&flag_b);
        prop_assert_eq!(a.kind(), b.kind());
        prop_assert_eq!(a.path(), b.path());
        prop_assert_eq!(a.path().to_string(), "count");
    }
}

#[derive(Debug)]
#[allow(dead_code)]
struct Form {
    count: i64,
    flag: bool,
    label: Option<String>,
}

impl tmaparse_core::FromRecord for Form {
    fn from_record(mut record: tmaparse_core::Record) -> tmaparse_core::Result<Self> {
        Ok(Self {
            count: record.take("count")?,
            flag: record.take("flag")?,
            label: record.take("label")?,
        })
    }
}
