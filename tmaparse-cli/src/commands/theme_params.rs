use super::{Output, Source};
use anyhow::Result;
use colored::*;
use tmaparse_core::{theme_params, ThemeParams};
use tracing::info;

pub fn execute(source: Source<'_>, output: Output<'_>) -> Result<ThemeParams> {
    let raw = source.read()?;
    info!("Parsing theme parameters ({} bytes)", raw.len());

    let theme = theme_params::parse(raw)
        .map_err(|e| output.reject("theme parameters", e))?;

    output.emit(&theme, |theme| {
        println!("{} Theme parameters are valid", "✓".green());
        println!("\n=== Theme ({} colors) ===", theme.len());
        print_colors(theme);
    })?;

    Ok(theme)
}

pub(crate) fn print_colors(theme: &ThemeParams) {
    for (key, color) in theme.iter() {
        let swatch = "  ".on_truecolor(color.red(), color.green(), color.blue());
        println!("{:<24}{} {}", key, color, swatch);
    }
}
