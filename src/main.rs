use clap::Parser;
use seqmorph::cli::{self, Commands};
use seqmorph::commands;
use seqmorph::config::Config;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() {
    let args = cli::Args::parse();

    let level = if args.debug {
        Level::TRACE
    } else if args.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging is unavailable: {}", e);
    }

    let config = Config::load();

    let result = match args.command {
        Commands::Convert {
            source,
            destination,
            input_format,
            output_format,
            line_wrap,
            transforms,
        } => commands::convert::run(
            &source,
            &destination,
            input_format,
            output_format,
            &transforms.to_options(),
            line_wrap,
            &config,
        ),
        Commands::Mogrify {
            files,
            input_format,
            line_wrap,
            transforms,
        } => commands::mogrify::run(
            &files,
            input_format,
            &transforms.to_options(),
            line_wrap,
            &config,
        ),
        Commands::Info {
            files,
            input_format,
            format,
            width,
            output,
        } => commands::info::run(
            &files,
            input_format,
            format,
            width.unwrap_or(config.describe_width),
            output.as_deref(),
        ),
        Commands::Align {
            source,
            destination,
        } => commands::align::run(&source, &destination),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
