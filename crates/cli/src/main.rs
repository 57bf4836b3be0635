use clap::{Parser, Subcommand};
use contentful::RichText;
use folio_core::config::{
    accent_color_from_env_value, date_format_from_env_value, teaser_block_limit_from_env_value,
};
use folio_core::{
    ColorMode, CoreConfig, DocumentRenderer, RenderContext, RenderMode, ViewportClass,
};
use folio_types::CssColor;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio rich-text document renderer CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a rich-text document file to HTML
    Render {
        /// Path to the document JSON
        file: PathBuf,
        /// Render mode (page or teaser)
        #[arg(long, default_value = "page")]
        mode: RenderMode,
        /// Viewport class (desktop or mobile)
        #[arg(long, default_value = "desktop")]
        viewport: ViewportClass,
        /// Colour mode (light or dark)
        #[arg(long, default_value = "light")]
        color_mode: ColorMode,
        /// Accent colour for cards
        #[arg(long)]
        accent: Option<CssColor>,
        /// Instance key of a video card to render as activated, e.g. `v1#0` (repeatable)
        #[arg(long = "activate")]
        activate: Vec<String>,
    },
    /// Render a document and list every diagnostic
    Check {
        /// Path to the document JSON
        file: PathBuf,
    },
}

/// Renderer configured from `FOLIO_*` environment variables.
fn renderer_from_env() -> Result<DocumentRenderer, Box<dyn std::error::Error>> {
    let config = CoreConfig::new(
        teaser_block_limit_from_env_value(std::env::var("FOLIO_TEASER_BLOCK_LIMIT").ok())?,
        accent_color_from_env_value(std::env::var("FOLIO_ACCENT_COLOR").ok())?,
        date_format_from_env_value(std::env::var("FOLIO_DATE_FORMAT").ok()),
    )?;
    Ok(DocumentRenderer::new(config))
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Render {
            file,
            mode,
            viewport,
            color_mode,
            accent,
            activate,
        }) => {
            let renderer = renderer_from_env()?;
            let document = match RichText::read_file(&file) {
                Ok(document) => document,
                Err(e) => {
                    eprintln!("Error reading {}: {}", file.display(), e);
                    return Ok(ExitCode::FAILURE);
                }
            };

            let mut ctx = RenderContext::new()
                .with_mode(mode)
                .with_viewport(viewport)
                .with_color_mode(color_mode)
                .with_activations(activate.into_iter().collect());
            if let Some(accent) = accent {
                ctx = ctx.with_accent_color(accent);
            }

            let rendered = renderer.render(&document, &ctx);
            println!("{}", rendered.to_html());
            for diagnostic in &rendered.diagnostics {
                eprintln!("warning: {}", diagnostic);
            }
        }
        Some(Commands::Check { file }) => {
            let renderer = renderer_from_env()?;
            let document = match RichText::read_file(&file) {
                Ok(document) => document,
                Err(e) => {
                    eprintln!("Error reading {}: {}", file.display(), e);
                    return Ok(ExitCode::FAILURE);
                }
            };

            let rendered = renderer.render(&document, &RenderContext::new());
            if rendered.diagnostics.is_empty() {
                println!("No problems found in {} nodes.", document.len());
            } else {
                for diagnostic in &rendered.diagnostics {
                    println!("{}", diagnostic);
                }
                return Ok(ExitCode::FAILURE);
            }
        }
        None => {
            println!("Use 'folio --help' for commands");
        }
    }

    Ok(ExitCode::SUCCESS)
}
