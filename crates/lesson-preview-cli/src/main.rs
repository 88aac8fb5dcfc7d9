use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lesson_preview_config::Config;
use lesson_preview_engine::{
    DEFAULT_STYLESHEET, PreviewError, PreviewMeta, check_input_size, highlight, io, open_preview,
    render,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

mod sink;

use sink::BrowserSink;

#[derive(Parser)]
#[command(name = "lesson-preview", version, about = "Render lesson markdown to HTML")]
struct Cli {
    /// Config file to use instead of ~/.config/lesson-preview/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the HTML fragment for a markdown file (stdin when omitted)
    Render { input: Option<PathBuf> },
    /// Print highlighted HTML for a Solidity source file (stdin when omitted)
    Highlight { input: Option<PathBuf> },
    /// Write a stand-alone preview document and open it
    Preview {
        input: Option<PathBuf>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        module: Option<u32>,
        #[arg(long)]
        lesson: Option<u32>,
        /// Where to write the document, defaults to the configured output directory
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write the document without opening a browser
        #[arg(long)]
        no_open: bool,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Render { input } => {
            let markdown = read_input(input.as_deref(), &config)?;
            println!("{}", render(&markdown));
        }
        Command::Highlight { input } => {
            let code = read_input(input.as_deref(), &config)?;
            println!("{}", highlight(&code));
        }
        Command::Preview {
            input,
            title,
            module,
            lesson,
            output,
            no_open,
        } => {
            let markdown = read_input(input.as_deref(), &config)?;
            let meta = PreviewMeta {
                title,
                module_number: module,
                lesson_number: lesson,
            };
            let stylesheet = load_stylesheet(&config)?;
            let target = output.unwrap_or_else(|| {
                config
                    .output_dir
                    .join(preview_file_name(input.as_deref(), &meta))
            });
            let mut sink = BrowserSink::new(target, config.open_browser && !no_open);

            match open_preview(&mut sink, &markdown, &meta, &stylesheet) {
                Ok(()) => log::info!("Preview written to {}", sink.path().display()),
                Err(PreviewError::NothingToPreview) => {
                    eprintln!("Nothing to preview: the lesson content is empty");
                    process::exit(1);
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    let config = match path {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display()))?,
        None => Config::load_or_default()?,
    };
    Ok(config)
}

fn read_input(path: Option<&Path>, config: &Config) -> Result<String> {
    let text = match path {
        Some(path) if path != Path::new("-") => io::read_markdown(path)?,
        _ => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };
    check_input_size(&text, config.input_limit())?;
    Ok(text)
}

fn load_stylesheet(config: &Config) -> Result<String> {
    match &config.stylesheet {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read stylesheet {}", path.display())),
        None => Ok(DEFAULT_STYLESHEET.to_string()),
    }
}

fn preview_file_name(input: Option<&Path>, meta: &PreviewMeta) -> String {
    if let (Some(module), Some(lesson)) = (meta.module_number, meta.lesson_number) {
        return format!("module-{module}-lesson-{lesson}.html");
    }
    input
        .filter(|path| *path != Path::new("-"))
        .and_then(Path::file_stem)
        .map(|stem| format!("{}.html", stem.to_string_lossy()))
        .unwrap_or_else(|| "preview.html".to_string())
}
