// ABOUTME: CLI for running the guide transformer over files and rendering slugs from a content directory.
// ABOUTME: Prints cleaned HTML, or JSON with headings, to stdout or a file.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use guidehub_content::{decode_html, FsContentStore, GuideRenderer, OverrideRegistry};
use guidehub_sanitize::{Options, Pipeline, Transformer};
use log::{debug, LevelFilter};

/// Clean scraped guide HTML into site markup.
#[derive(Parser, Debug)]
#[command(name = "guidehub")]
#[command(about = "Transform scraped reference HTML into guide pages", long_about = None)]
struct Cli {
    /// Enable debug logging (per-pass node counts).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Transform an HTML file (or stdin) and print the cleaned fragment.
    Transform {
        /// Input file; "-" reads stdin.
        #[arg(default_value = "-")]
        input: String,

        /// Print {"html", "headings"} JSON instead of raw HTML.
        #[arg(long)]
        json: bool,

        /// JSON options file; missing fields keep their defaults.
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Skip the final tag/attribute safelist.
        #[arg(long)]
        no_safelist: bool,

        /// Output file (default: stdout).
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render a guide slug from a content directory.
    Render {
        slug: String,

        /// Directory holding <slug>.html files.
        #[arg(long, value_name = "DIR")]
        content_dir: PathBuf,

        /// JSON file of curated pages keyed by slug.
        #[arg(long, value_name = "FILE")]
        overrides: Option<PathBuf>,

        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Print the full page as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List the rewrite passes in the order they run.
    Passes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        })
        .init();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Transform {
            input,
            json,
            config,
            no_safelist,
            output,
        } => {
            let mut options = load_options(config.as_deref())?;
            if no_safelist {
                options.enforce_safelist = false;
            }
            let transformer = Transformer::new(options).context("invalid options")?;

            let raw = decode_html(&read_input(&input)?);
            let rendered = transformer.render(&raw);
            debug!("{} heading(s) extracted", rendered.headings.len());

            let text = if json {
                serde_json::to_string_pretty(&rendered)?
            } else {
                rendered.html
            };
            write_output(output.as_deref(), &text)
        }
        Command::Render {
            slug,
            content_dir,
            overrides,
            config,
            json,
        } => {
            let transformer =
                Transformer::new(load_options(config.as_deref())?).context("invalid options")?;
            let mut renderer = GuideRenderer::new(FsContentStore::new(&content_dir), transformer);
            if let Some(path) = overrides {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()))?;
                renderer = renderer.with_overrides(
                    OverrideRegistry::from_json(&text)
                        .with_context(|| format!("failed to load {}", path.display()))?,
                );
            }

            let page = renderer
                .render(&slug)
                .with_context(|| format!("failed to render {}", slug))?;
            let text = if json {
                serde_json::to_string_pretty(&page)?
            } else {
                page.html
            };
            write_output(None, &text)
        }
        Command::Passes => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            for name in Pipeline::default_passes().pass_names() {
                writeln!(out, "{}", name)?;
            }
            Ok(())
        }
    }
}

fn load_options(path: Option<&Path>) -> Result<Options> {
    let Some(path) = path else {
        return Ok(Options::default());
    };
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    Options::from_json(&text).with_context(|| format!("failed to load {}", path.display()))
}

fn read_input(target: &str) -> Result<Vec<u8>> {
    if target == "-" {
        let mut buf = Vec::new();
        io::stdin().read_to_end(&mut buf)?;
        return Ok(buf);
    }
    fs::read(target).with_context(|| format!("failed to read {}", target))
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => fs::write(path, format!("{}\n", text))
            .with_context(|| format!("failed to write {}", path.display())),
        None => {
            println!("{}", text);
            Ok(())
        }
    }
}
