use clap::Parser;
use hwlabel::input::{recognized_text, InputSource};
use hwlabel::render::render;
use hwlabel_core::config::{Config, OutputFormat};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "hwlabel", about = "Extract the hardware id and boot tick from label OCR text")]
struct Cli {
    /// Recognized text to read. Omit or pass `-` for stdin.
    file: Option<PathBuf>,

    /// Output format; overrides `output.format` from the config file.
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Input is a JSON array of positioned lines (`{"text", "bbox"}`).
    #[arg(long)]
    lines: bool,

    /// Config file to use instead of ~/.config/hwlabel/config.toml.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write debug logs to stderr.
    #[arg(long)]
    debug: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|_| Config::defaults()),
    };

    if cli.debug {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
            )
            .init();
        tracing::info!("hwlabel debug log started");
    }

    let source = InputSource::from_arg(cli.file.as_deref());
    let raw = recognized_text(source.read_to_string()?, cli.lines)?;
    let result = hwlabel_core::normalize(&raw);

    let format: OutputFormat = cli.format.unwrap_or(config.output.format);
    println!("{}", render(&result, format, &config.output.placeholder)?);
    Ok(())
}
