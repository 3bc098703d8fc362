use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;

use gongwen::{
    AppConfig, ColorDepth, DocumentCategory, DocumentContext, ExportMode, GenerationRequest,
    PreviewFormat, StylePreference,
    catalog::{DOCUMENT_TYPES, document_types_in, find_document_type},
    document::{generate_outline, parse_document},
    export::{export_document, write_exported},
    format_prompt,
    generate::{generate_document, generator_from_config},
    profile::{UNIT_PROFILES, find_profile, resolve_background},
    reference::extract_reference,
    render::{
        ansi::{AnsiOptions, render_to_ansi},
        html::render_to_html,
        render_document,
    },
    viewer::run_viewer,
};

#[derive(Parser, Debug)]
#[command(
    version,
    about = "gongwen - Chinese official document drafting toolkit",
    long_about = "Generate, parse, preview and export Chinese official documents (公文) with the conventional layout."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the supported document types
    Types {
        #[arg(long, value_enum)]
        category: Option<DocumentCategory>,
    },
    /// List the preset unit profiles
    Profiles,
    /// Print the generation prompt without calling the service
    Prompt(PromptArgs),
    /// Generate a draft
    Generate {
        #[command(flatten)]
        prompt: PromptArgs,

        #[arg(long, help = "Model identifier, overrides the config file")]
        model: Option<String>,

        #[arg(long)]
        temperature: Option<f32>,

        #[arg(long, short = 'o', help = "Write the draft to this file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long, default_value_t = false, help = "Copy the draft to the clipboard")]
        copy: bool,
    },
    /// Print the parsed structure as JSON
    Parse {
        /// Draft text file, or - for stdin
        input: PathBuf,
    },
    /// Print the section outline
    Outline { input: PathBuf },
    /// Show the draft with official-document styling
    Preview {
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = PreviewFormat::Ansi)]
        format: PreviewFormat,

        #[arg(long, value_enum, default_value = "auto")]
        color_depth: ColorDepth,
    },
    /// Export the draft as a .docx file
    Export {
        input: PathBuf,

        /// Output file or directory (defaults to the current directory)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        #[arg(long, default_value_t = false, help = "Use the raw-line segmentation")]
        legacy: bool,
    },
    /// Print the text extracted from a reference file
    Extract { file: PathBuf },
    /// Show or initialize the config file
    Config {
        #[arg(long, default_value_t = false, help = "Write the default config file")]
        init: bool,
    },
}

#[derive(Args, Debug)]
struct PromptArgs {
    /// Document type id, see `gongwen types`
    #[arg(long)]
    doc_type: String,

    #[arg(long, default_value = "")]
    subject: String,

    #[arg(long, default_value = "")]
    recipients: String,

    #[arg(long = "keyword")]
    keywords: Vec<String>,

    #[arg(long, default_value = "")]
    requirements: String,

    #[arg(long, default_value = "")]
    background: String,

    #[arg(long, help = "Preset unit profile used when --background is empty, see `gongwen profiles`")]
    profile: Option<String>,

    #[arg(long = "reference", help = "Reference file quoted in the prompt (repeatable)")]
    references: Vec<PathBuf>,

    #[arg(long, default_value_t = 4)]
    formality: u8,

    #[arg(long, default_value_t = 3)]
    detail: u8,

    #[arg(long, default_value = "党政机关公文")]
    tone: String,

    #[arg(long, default_value = "标准结构")]
    structure: String,
}

impl PromptArgs {
    fn build_prompt(&self, config: &AppConfig) -> Result<String> {
        let Some(document_type) = find_document_type(&self.doc_type) else {
            bail!("未知的公文类型: {} (使用 `gongwen types` 查看)", self.doc_type);
        };

        let profile = match self.profile.as_deref() {
            Some(id) => match find_profile(id) {
                Some(profile) => Some(profile),
                None => bail!("未知的单位预设: {id} (使用 `gongwen profiles` 查看)"),
            },
            None => None,
        };

        let context = DocumentContext {
            subject: self.subject.clone(),
            recipients: self.recipients.clone(),
            keywords: self.keywords.clone(),
            special_requirements: self.requirements.clone(),
            background: resolve_background(&self.background, profile),
            references: self
                .references
                .iter()
                .map(|path| extract_reference(path, config.max_reference_chars))
                .collect(),
        };
        let preferences = StylePreference {
            formality_level: self.formality,
            tone_style: self.tone.clone(),
            detail_level: self.detail,
            structure_preference: self.structure.clone(),
        };

        Ok(format_prompt(document_type, &context, &preferences))
    }
}

fn init_tracing() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gongwen=info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        return Ok(text);
    }
    tokio::fs::read_to_string(input)
        .await
        .with_context(|| format!("failed to read {}", input.display()))
}

fn resolve_color_depth(requested: ColorDepth) -> ColorDepth {
    match requested {
        ColorDepth::Auto if !std::io::stdout().is_terminal() => ColorDepth::Monochrome,
        ColorDepth::Auto => match std::env::var("COLORTERM").as_deref() {
            Ok("truecolor") | Ok("24bit") => ColorDepth::TrueColor,
            _ => ColorDepth::Extended,
        },
        other => other,
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    match cli.command {
        Command::Types { category } => {
            let types: Vec<_> = match category {
                Some(category) => document_types_in(category).collect(),
                None => DOCUMENT_TYPES.iter().collect(),
            };
            for doc_type in types {
                println!(
                    "{} {:<20} {:<8} [{}] {}",
                    doc_type.icon,
                    doc_type.id,
                    doc_type.name,
                    doc_type.category.label(),
                    doc_type.description
                );
            }
        }
        Command::Profiles => {
            for profile in UNIT_PROFILES {
                println!("{:<12} {} ({})", profile.id, profile.name, profile.sub_name);
            }
        }
        Command::Prompt(args) => {
            println!("{}", args.build_prompt(&config)?);
        }
        Command::Generate {
            prompt,
            model,
            temperature,
            output,
            copy,
        } => {
            let mut request = GenerationRequest::new(prompt.build_prompt(&config)?, &config);
            if let Some(model) = model {
                request.model = model;
            }
            if let Some(temperature) = temperature {
                request.temperature = temperature;
            }

            let generator = generator_from_config(&config);
            let content = match generate_document(generator.as_ref(), &request, config.timeout()).await {
                Ok(content) => content,
                Err(err) => {
                    tracing::error!(error = %err, "generation failed");
                    bail!(err.user_message());
                }
            };

            match output {
                Some(path) => {
                    tokio::fs::write(&path, &content)
                        .await
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    info!(path = %path.display(), "draft written");
                }
                None => println!("{content}"),
            }

            if copy {
                let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
                clipboard.set_text(content)?;
                eprintln!("已复制到剪贴板");
            }
        }
        Command::Parse { input } => {
            let structure = parse_document(&read_input(&input).await?);
            println!("{}", serde_json::to_string_pretty(&structure)?);
        }
        Command::Outline { input } => {
            let structure = parse_document(&read_input(&input).await?);
            for item in generate_outline(&structure) {
                let indent = "  ".repeat(item.level.saturating_sub(1) as usize);
                println!("{indent}{}", item.title);
            }
        }
        Command::Preview {
            input,
            format,
            color_depth,
        } => {
            let structure = parse_document(&read_input(&input).await?);
            match format {
                PreviewFormat::Ansi => {
                    let options = AnsiOptions {
                        color_depth: resolve_color_depth(color_depth),
                        ..AnsiOptions::default()
                    };
                    print!("{}", render_to_ansi(&render_document(&structure), &options)?);
                }
                PreviewFormat::Html => {
                    println!("{}", render_to_html(&render_document(&structure), &structure.title));
                }
                PreviewFormat::Tui => {
                    let color_enabled = resolve_color_depth(color_depth) != ColorDepth::Monochrome;
                    run_viewer(&structure, config.viewer.clone(), color_enabled)?;
                }
            }
        }
        Command::Export {
            input,
            output,
            legacy,
        } => {
            let mode = if legacy {
                ExportMode::Legacy
            } else {
                ExportMode::Structured
            };
            let exported = export_document(&read_input(&input).await?, mode)?;
            let target = output.unwrap_or_else(|| PathBuf::from("."));
            let path = write_exported(&exported, &target)?;
            println!("{}", path.display());
        }
        Command::Extract { file } => {
            let reference = extract_reference(&file, config.max_reference_chars);
            eprintln!("{} ({:?})", reference.file_name, reference.method);
            println!("{}", reference.text);
        }
        Command::Config { init } => {
            if init {
                AppConfig::init_default()?;
            }
            match AppConfig::get_config_path() {
                Some(path) => println!("{}", path.display()),
                None => bail!("no config directory on this platform"),
            }
        }
    }

    Ok(())
}
