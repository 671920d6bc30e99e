use super::{line, theme_params::print_colors, Output, Source};
use anyhow::Result;
use colored::*;
use tmaparse_core::{launch_params, LaunchParams};
use tracing::info;

pub fn execute(source: Source<'_>, from_url: bool, output: Output<'_>) -> Result<LaunchParams> {
    let raw = source.read()?;

    let parsed = if from_url {
        info!("Parsing launch URL");
        launch_params::parse_url(&raw)
    } else {
        info!("Parsing launch parameters ({} bytes)", raw.len());
        launch_params::parse(raw)
    };
    let lp = parsed.map_err(|e| output.reject("launch parameters", e))?;

    output.emit(&lp, |lp| {
        println!("{} Launch parameters are valid", "✓".green());
        println!("\n=== Launch Parameters ===");
        line("Platform", Some(&lp.platform));
        line("Version", Some(&lp.version));
        line("Start param", lp.start_param.as_deref());
        line("Bot inline", lp.bot_inline);
        line("Show settings", lp.show_settings);

        match &lp.init_data {
            Some(init) => {
                line("Init data", Some("present".green()));
                line("Auth date", Some(init.auth_date.to_rfc3339()));
                line("User ID", init.user.as_ref().map(|u| u.id));
            }
            None => line("Init data", Some("absent".yellow())),
        }

        println!("\n=== Theme ({} colors) ===", lp.theme_params.len());
        print_colors(&lp.theme_params);
    })?;

    Ok(lp)
}
