use anyhow::{Context, Result};
use log::{LevelFilter, debug, error, info};
use simplelog::{ColorChoice, ConfigBuilder, TermLogger, TerminalMode};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use ycmflags::{CompletionConfig, Config, resolver};

mod cli;
use cli::AppConfig;

const PACKAGE_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

// ----------------------------------------------------------------------------
// Logging
// ----------------------------------------------------------------------------

fn init_logging(filter: LevelFilter) -> Result<()> {
    let config = ConfigBuilder::new()
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();

    // stdout carries the JSON payload, so diagnostics go to stderr.
    TermLogger::init(filter, config, TerminalMode::Stderr, ColorChoice::Auto)
        .context("Failed to initialize logging")
}

// ----------------------------------------------------------------------------
// Output
// ----------------------------------------------------------------------------

fn open_output_file(path: &Path) -> Result<BufWriter<File>> {
    debug!("Opening output file: {}", path.display());
    let file = File::create(path).with_context(|| {
        format!("Failed to create output file: {}", path.display())
    })?;
    Ok(BufWriter::new(file))
}

fn write_completion<W: Write>(
    mut writer: W,
    completion: &CompletionConfig,
    pretty_print: bool,
) -> Result<()> {
    if pretty_print {
        serde_json::to_writer_pretty(&mut writer, completion)
            .context("Failed to write JSON output")?;
    } else {
        serde_json::to_writer(&mut writer, completion)
            .context("Failed to write JSON output")?;
    }

    writeln!(writer).context("Failed to write JSON output")?;
    writer.flush().context("Failed to flush output")?;

    Ok(())
}

// ----------------------------------------------------------------------------
// Application
// ----------------------------------------------------------------------------

fn run(app: AppConfig) -> Result<()> {
    info!("ycmflags v{} - {}", PACKAGE_VERSION, PACKAGE_DESCRIPTION);

    let working_directory = match app.working_directory {
        Some(dir) => dir,
        None => resolver::directory_of_this_binary()
            .context("Failed to determine the default working directory")?,
    };

    debug!(
        "Anchoring relative include paths at {}",
        working_directory.display()
    );

    let completion = resolver::flags_for_file_in(
        &app.filename,
        &app.options,
        &Config::default(),
        &working_directory,
    );

    info!(
        "Emitting {} flag(s) for {}",
        completion.flags.len(),
        app.filename.display()
    );

    match &app.output_path {
        Some(path) => {
            let writer = open_output_file(path)?;
            write_completion(writer, &completion, app.pretty_print)?;
        }
        None => {
            // Humans at a terminal get indented JSON; pipes get the compact
            // form unless explicitly asked otherwise.
            let pretty_print =
                app.pretty_print || atty::is(atty::Stream::Stdout);
            write_completion(io::stdout().lock(), &completion, pretty_print)?;
        }
    }

    info!("Finished");

    Ok(())
}

// ----------------------------------------------------------------------------
// Main entry point
// ----------------------------------------------------------------------------

fn main() -> Result<()> {
    let app = match AppConfig::from_args() {
        Ok(app) => app,
        Err(message) => {
            eprintln!("{message}");
            std::process::exit(2);
        }
    };

    init_logging(app.log_level.into())?;

    if let Err(e) = run(app) {
        error!("Application error: {:?}", e);
        std::process::exit(1);
    };

    Ok(())
}

// ----------------------------------------------------------------------------
// Tests
// ----------------------------------------------------------------------------
