//! metabind CLI entrypoint
//! Parses command-line arguments, runs one backend and maps failures to exit codes.
#![deny(unsafe_code)]

use std::io::{self, Write};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing::{Level, debug};
use tracing_subscriber::EnvFilter;

use metabind::core::config::DEFAULT_SERVER;
use metabind::generation::{MetadataSource, format_server_status};
use metabind::{
    Backend, BackendRegistry, Error, FileSystemOutputService, GenerationDriver, GeneratorConfig,
    HttpMetadataClient, Language,
};

#[derive(Parser, Debug)]
#[command(name = "metabind")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Target language: java, csharp, python or typescript
    language: String,

    /// Print the server status, the type translation table and debug logs
    #[arg(short, long)]
    verbose: bool,

    /// Address of the server to read metadata from
    #[arg(long, value_name = "IP:PORT", default_value = DEFAULT_SERVER)]
    usecloud: String,

    /// Destination directory [default: <crate dir>/src-gen/main/<language dir>]
    #[arg(long, value_name = "DIR")]
    dest: Option<PathBuf>,

    /// Keep existing files in the destination directory
    #[arg(long)]
    no_clear: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_writer(io::stderr)
        .init();

    let language = match Language::from_str(&cli.language) {
        Ok(language) => language,
        Err(e) => fail(Error::from(e)),
    };

    let (driver, backend) = match connect(&cli, language).await {
        Ok(prepared) => prepared,
        Err(e) => fail(e),
    };

    print!("Generating {} bindings... ", language.display_name());
    io::stdout().flush().context("Failed to flush stdout")?;

    match driver.run(backend.as_ref()).await {
        Ok(summary) => {
            if let Some(table) = &summary.translation_table {
                print!("{table}");
            }
            println!("done (in {:.3}s)", summary.elapsed.as_secs_f64());
            Ok(())
        }
        Err(e) => {
            println!("failed");
            fail(e)
        }
    }
}

/// Resolve the backend and run configuration. In verbose mode the server
/// status is fetched and shown before any generation work starts.
async fn connect(
    cli: &Cli,
    language: Language,
) -> Result<(GenerationDriver, Arc<dyn Backend>), Error> {
    let registry = BackendRegistry::new();
    let backend = registry.get(language)?;

    let dest = cli
        .dest
        .clone()
        .unwrap_or_else(|| GeneratorConfig::default_dest_dir(language.output_dir()));
    let config = GeneratorConfig::new(&cli.usecloud, dest)?
        .with_verbose(cli.verbose)
        .with_clear_dir(!cli.no_clear);

    let source = Arc::new(HttpMetadataClient::new(&config)?);
    if config.verbose {
        let status = source.about().await?;
        println!("{}", format_server_status(config.base_url.as_str(), &status));
    }

    let output = Arc::new(FileSystemOutputService::new(config.dest_dir.clone()));
    Ok((GenerationDriver::new(config, source, output), backend))
}

fn fail(e: Error) -> ! {
    let code = e.exit_code();
    debug!(exit_code = code, "Generation aborted");
    eprintln!("Error: {e}");
    std::process::exit(code)
}
