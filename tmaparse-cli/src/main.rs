use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use tmaparse_cli::commands::{self, Output, Source};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "tmaparse")]
#[command(about = "tmaparse - Validate and inspect Telegram Mini Apps launch data", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Raw value, or `-` to read stdin
    raw: Option<String>,

    /// Read the raw value from a file (`-` for stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// Write the parsed record as JSON to a file
    #[arg(short, long)]
    output: Option<String>,
}

impl InputArgs {
    fn source(&self) -> Source<'_> {
        Source {
            raw: self.raw.as_deref(),
            input: self.input.as_deref(),
        }
    }

    fn output(&self, json: bool) -> Output<'_> {
        Output {
            json,
            file: self.output.as_deref(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Parse init data (the `tgWebAppData` query string)
    InitData {
        #[command(flatten)]
        args: InputArgs,
    },

    /// Parse launch parameters
    LaunchParams {
        #[command(flatten)]
        args: InputArgs,

        /// Treat the input as a full launch URL
        #[arg(long)]
        url: bool,
    },

    /// Parse theme parameters (a JSON object)
    ThemeParams {
        #[command(flatten)]
        args: InputArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::InitData { args } => {
            commands::init_data::execute(args.source(), args.output(cli.json)).map(drop)
        }

        Commands::LaunchParams { args, url } => {
            commands::launch_params::execute(args.source(), url, args.output(cli.json)).map(drop)
        }

        Commands::ThemeParams { args } => {
            commands::theme_params::execute(args.source(), args.output(cli.json)).map(drop)
        }
    }
}
