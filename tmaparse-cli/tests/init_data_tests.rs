use std::fs;
use tempfile::tempdir;
use tmaparse_cli::commands::{init_data, Output, Source};
use tmaparse_core::{ErrorKind, TransformError};

const RAW: &str = "query_id=AAHdF6IQAAAAAN0XohDhrOrc\
    &user=%7B%22id%22%3A279058397%2C%22first_name%22%3A%22Vladislav%22%2C%22is_premium%22%3Atrue%7D\
    &auth_date=1716922846\
    &hash=89d6079ad6762351f38c6dbbc41bb53048019256a9443988af7a48bcad16ba31";

#[test]
fn test_init_data_raw_argument() {
    let init = init_data::execute(Source::raw(RAW), Output::default()).unwrap();
    assert_eq!(init.user.map(|u| u.id), Some(279058397));
    assert_eq!(init.auth_date.timestamp(), 1716922846);
}

#[test]
fn test_init_data_from_file_with_trailing_newline() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("init_data.txt");
    fs::write(&input, format!("{}\n", RAW)).unwrap();

    let init = init_data::execute(Source::file(input.to_str().unwrap()), Output::default()).unwrap();
    assert_eq!(
        init.hash,
        "89d6079ad6762351f38c6dbbc41bb53048019256a9443988af7a48bcad16ba31"
    );
}

#[test]
fn test_init_data_writes_json_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("init_data.json");

    init_data::execute(
        Source::raw(RAW),
        Output {
            json: false,
            file: Some(output.to_str().unwrap()),
        },
    )
    .unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(written["user"]["firstName"], "Vladislav");
    assert_eq!(written["user"]["isPremium"], true);
    assert_eq!(written["queryId"], "AAHdF6IQAAAAAN0XohDhrOrc");
    assert!(written.get("receiver").is_none());
}

#[test]
fn test_init_data_rejection_keeps_transform_error() {
    let err = init_data::execute(Source::raw("auth_date=1"), Output::default()).unwrap_err();

    let cause = err.downcast_ref::<TransformError>().unwrap();
    assert_eq!(cause.kind(), &ErrorKind::MissingRequiredField);
    assert_eq!(cause.path().to_string(), "InitData.hash");
    assert_eq!(err.to_string(), "Invalid init data");
}

#[test]
fn test_init_data_missing_file() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("nope.txt");

    let err = init_data::execute(Source::file(missing.to_str().unwrap()), Output::default())
        .unwrap_err();
    assert!(err.to_string().contains("Failed to read input file"));
}

#[test]
fn test_source_requires_exactly_one_input() {
    assert!(Source {
        raw: None,
        input: None
    }
    .read()
    .is_err());

    assert!(Source {
        raw: Some("a=b"),
        input: Some("file.txt")
    }
    .read()
    .is_err());
}
