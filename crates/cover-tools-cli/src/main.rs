use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use cover_compose::{CoverDoc, FontBook, Template, TemplateId};

#[derive(Parser)]
#[command(name = "covr", about = "Book cover tools CLI", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a cover document to a PNG at the design resolution
    Render {
        /// Input cover document (JSON)
        #[arg(short, long)]
        doc: PathBuf,

        /// Output PNG file (defaults to the template's export file name)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Background image to commit before rendering, overriding the
        /// document's `background_image`
        #[arg(long)]
        background: Option<PathBuf>,

        /// Font file to use instead of the system search list
        #[arg(long)]
        font: Option<PathBuf>,
    },

    /// List built-in templates and their fields
    Templates,

    /// Write a starter document carrying a template's defaults
    Init {
        /// Template to start from
        #[arg(long, default_value = "classic", value_enum)]
        template: TemplateArg,

        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum TemplateArg {
    Classic,
    Styled,
}

impl From<TemplateArg> for TemplateId {
    fn from(arg: TemplateArg) -> Self {
        match arg {
            TemplateArg::Classic => Self::Classic,
            TemplateArg::Styled => Self::Styled,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            doc,
            output,
            background,
            font,
        } => {
            let doc = CoverDoc::load(&doc).await?;
            let template_id = doc.template;
            let image_path = background.or_else(|| doc.background_image.clone());

            let mut session = doc.into_session()?;
            if let Some(path) = image_path {
                let image = cover_compose::decode_image(&path).await?;
                session.restore_committed(Arc::new(image));
            }

            let fonts = match font {
                Some(path) => FontBook::from_path(path)?,
                None => FontBook::from_system()?,
            };

            let output = output.unwrap_or_else(|| {
                PathBuf::from(Template::builtin(template_id).export_file_name)
            });

            let (width, height) =
                cover_compose::export_png(session.snapshot(), Arc::new(fonts), &output).await?;
            println!("Rendered {width}×{height} → {}", output.display());
        }

        Commands::Templates => {
            for id in TemplateId::all() {
                let template = Template::builtin(id);
                let styling = if template.styleable {
                    ", per-field styling"
                } else {
                    ""
                };
                println!(
                    "{} — {}×{}, {} fields{}",
                    template.name,
                    template.width,
                    template.height,
                    template.fields.len(),
                    styling
                );
                for field in &template.fields {
                    println!("  {:<12} {}", field.key, field.label);
                }
            }
        }

        Commands::Init { template, output } => {
            let doc = CoverDoc::for_template(template.into());
            doc.save(&output).await?;
            println!("Wrote starter document → {}", output.display());
        }
    }

    Ok(())
}
