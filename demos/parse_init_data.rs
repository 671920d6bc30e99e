//! Init data and launch parameters parsing example

use tmaparse_core::{init_data, launch_params, SearchParams};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("tmaparse Init Data Example\n");

    // Init data as the client sends it in `tgWebAppData`
    let raw = SearchParams::new()
        .with("query_id", "AAHdF6IQAAAAAN0XohDhrOrc")
        .with(
            "user",
            r#"{"id":279058397,"first_name":"Vladislav","last_name":"Kibenko","username":"vdkfrost","language_code":"ru","is_premium":true,"allows_write_to_pm":true}"#,
        )
        .with("auth_date", "1716922846")
        .with("hash", "89d6079ad6762351f38c6dbbc41bb53048019256a9443988af7a48bcad16ba31")
        .to_string();

    let init = init_data::parse(raw.as_str())?;
    println!("Signed at: {}", init.auth_date);
    if let Some(user) = &init.user {
        println!("User:      {} (@{})", user.first_name, user.username.as_deref().unwrap_or("-"));
    }

    // The same data wrapped in a launch URL
    let url = format!(
        "https://example.com/app#{}",
        SearchParams::new()
            .with("tgWebAppData", raw)
            .with("tgWebAppPlatform", "tdesktop")
            .with("tgWebAppVersion", "7.2")
            .with("tgWebAppThemeParams", r##"{"bg_color":"#17212b","text_color":"#f5f5f5"}"##)
    );
    let lp = launch_params::parse_url(&url)?;
    println!("\nPlatform:  {} (API {})", lp.platform, lp.version);
    for (key, color) in lp.theme_params.iter() {
        println!("  {:<12} {}", key, color);
    }

    // Failures carry the full path to the offending field
    match init_data::parse("auth_date=1&hash=abc&user=%7B%22id%22%3A%22x%22%7D") {
        Ok(_) => println!("\nUnexpectedly valid"),
        Err(e) => println!("\nRejected: {}", e),
    }

    Ok(())
}
