use clap::Parser;
use std::path::PathBuf;
use webready::{config, output, process};

#[derive(Parser)]
#[command(name = "webready")]
#[command(about = "Batch-convert an image tree into web-ready derivatives")]
#[command(long_about = "\
Batch-convert an image tree into web-ready derivatives

Walks the source tree and, for every JPEG or PNG found, writes a width-capped
progressive JPEG, a small thumbnail for blur-up placeholders, and (by
default) a WebP alternate, mirroring the directory structure:

  images/                         images_optimized/
  ├── summer/                     ├── summer/
  │   ├── beach.jpg               │   ├── beach.jpg    (max 1600px wide, q85)
  │   └── dunes.png               │   ├── beach.webp   (q80)
  └── winter/                     │   ├── dunes.jpg
      └── lodge.jpeg              │   └── dunes.webp
                                  ├── winter/
                                  │   ├── lodge.jpg
                                  │   └── lodge.webp
                                  └── thumbs/
                                      ├── summer/...   (max 400px wide, q70)
                                      └── winter/...

Every run reprocesses every file; there is no cache or manifest. One bad
file never aborts the batch: it is reported and the walk continues.

Run 'webready --print-config' for a documented config file with all options.")]
#[command(version)]
struct Cli {
    /// Source tree of images to convert (default: from config)
    #[arg(long)]
    source: Option<PathBuf>,

    /// Root of the output tree (default: from config)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip the WebP alternates
    #[arg(long)]
    no_webp: bool,

    /// Carry EXIF/ICC metadata over to the JPEG outputs
    #[arg(long)]
    keep_metadata: bool,

    /// Log per-file diagnostics (ignored files, walk errors)
    #[arg(short, long)]
    verbose: bool,

    /// Print a stock config file with all options documented
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", config::stock_config_toml());
        return Ok(());
    }

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if cli.verbose { "debug" } else { "warn" }),
    )
    .init();

    let mut convert_config = config::load_config(cli.config.as_deref())?;
    if let Some(source) = cli.source {
        convert_config.source_root = source;
    }
    if let Some(output_root) = cli.output {
        convert_config.output_root = output_root;
    }
    if cli.no_webp {
        convert_config.make_webp = false;
    }
    if cli.keep_metadata {
        convert_config.strip_metadata = false;
    }

    let summary = process::run(&convert_config)?;
    output::print_summary(&summary);

    Ok(())
}
