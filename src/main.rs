//! MarkMe - Markdown to sanitized HTML, plus a small local document library.
//!
//! This binary provides the CLI over the markme crates: rendering files or
//! stdin, and managing documents, the profile and settings in a JSON store.

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, Command, DocsAction, ProfileAction, SettingsAction};
use log::{debug, error, info, LevelFilter};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use chrono::{DateTime, Utc};
use markme_config::Config;
use markme_core::{DocumentDraft, MarkmeError, Result, Settings, TextStats};
use markme_render::{excerpt, RenderFeatures, Renderer};
use markme_sanitize::is_safe_url;
use markme_store::export::{
    bio_filename, bio_markdown, documents_json, export_filename, write_export, ALL_DOCUMENTS_FILE,
};
use markme_store::{DocumentStore, JsonFileStore, Library};

fn main() {
    let cli = <Cli as ClapParser>::parse();

    // Handle --paths flag
    if cli.show_paths {
        cli::show_paths();
        return;
    }

    // Set up logging
    setup_logging(&cli.log_level);
    info!("MarkMe v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("{}", e);
        std::process::exit(1);
    }
}

/// Set up logging based on the log level argument.
fn setup_logging(level: &str) {
    let filter = match level.to_lowercase().as_str() {
        "trace" => LevelFilter::Trace,
        "debug" => LevelFilter::Debug,
        "info" => LevelFilter::Info,
        "warn" => LevelFilter::Warn,
        "error" => LevelFilter::Error,
        _ => LevelFilter::Warn,
    };

    env_logger::Builder::new()
        .filter_level(filter)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

/// Main application logic.
fn run(cli: &Cli) -> Result<()> {
    let config = Config::load_with_override(cli.config.as_deref())?;
    debug!("Loaded config: {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        None => {
            let markdown = read_input(None)?;
            let renderer = Renderer::new(create_features(&config, false, false));
            write_output(None, &renderer.render(&markdown), &mut out)
        }
        Some(Command::Render {
            file,
            output,
            no_links,
            no_images,
        }) => {
            let markdown = read_input(file.as_deref())?;
            let renderer = Renderer::new(create_features(&config, *no_links, *no_images));
            write_output(output.as_deref(), &renderer.render(&markdown), &mut out)
        }
        Some(Command::Stats { file }) => {
            let markdown = read_input(file.as_deref())?;
            print_stats(&TextStats::of(&markdown), &mut out)
        }
        Some(Command::Docs { action }) => {
            let mut library = open_library(cli, &config)?;
            run_docs(action, &mut library, &config, Utc::now(), &mut out)
        }
        Some(Command::Profile { action }) => {
            let mut library = open_library(cli, &config)?;
            run_profile(action, &mut library, &config, Utc::now(), &mut out)
        }
        Some(Command::Settings { action }) => {
            let mut library = open_library(cli, &config)?;
            run_settings(action, &mut library, &mut out)
        }
    }
}

/// Open the JSON store named by `--store` or the config.
fn open_library(cli: &Cli, config: &Config) -> Result<Library<JsonFileStore>> {
    let path = match &cli.store {
        Some(path) => path.clone(),
        None => config.store_path()?,
    };
    debug!("Using store {}", path.display());
    let store = JsonFileStore::open(path)?;
    Ok(Library::with_expiry_days(store, config.store.expiry_days))
}

/// Create render features from config and CLI switches.
fn create_features(config: &Config, no_links: bool, no_images: bool) -> RenderFeatures {
    let mut features = RenderFeatures::from_config(&config.features);
    if no_links {
        features.links = false;
    }
    if no_images {
        features.images = false;
    }
    features
}

/// Read a whole file, or stdin when no path is given.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

/// Write to a file, or to `out` when no path is given.
fn write_output<W: Write>(path: Option<&Path>, content: &str, out: &mut W) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            info!("Wrote {} bytes to {}", content.len(), path.display());
        }
        None => {
            writeln!(out, "{}", content)?;
        }
    }
    Ok(())
}

fn print_stats<W: Write>(stats: &TextStats, out: &mut W) -> Result<()> {
    writeln!(out, "words       {}", stats.words)?;
    writeln!(out, "characters  {}", stats.characters)?;
    Ok(())
}

fn format_time(time: Option<DateTime<Utc>>) -> String {
    time.map(|t| t.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "never".to_string())
}

fn run_docs<S: DocumentStore, W: Write>(
    action: &DocsAction,
    library: &mut Library<S>,
    config: &Config,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<()> {
    match action {
        DocsAction::List { search } => {
            let docs = match search {
                Some(term) => library.search(term, now)?,
                None => library.documents(now)?,
            };
            if docs.is_empty() {
                writeln!(out, "No documents.")?;
            }
            for doc in docs {
                let tags = if doc.tags.is_empty() {
                    String::new()
                } else {
                    format!("  [{}]", doc.tags.join(", "))
                };
                writeln!(
                    out,
                    "{}  {}{}  (expires {})",
                    doc.id,
                    doc.title,
                    tags,
                    format_time(doc.expires_at)
                )?;
                let preview = excerpt(&doc.content, config.store.excerpt_chars).replace('\n', " ");
                if !preview.is_empty() {
                    writeln!(out, "    {}", preview)?;
                }
            }
        }
        DocsAction::Show { id, html } => {
            let doc = library
                .document(id, now)?
                .ok_or_else(|| MarkmeError::NotFound(id.clone()))?;
            if *html {
                let renderer = Renderer::new(RenderFeatures::from_config(&config.features));
                writeln!(out, "{}", renderer.render(&doc.content))?;
            } else {
                writeln!(out, "{}", doc.content)?;
            }
        }
        DocsAction::Save {
            title,
            id,
            tags,
            file,
        } => {
            let mut draft = DocumentDraft::new(title.clone(), read_input(file.as_deref())?);
            if let Some(id) = id {
                draft = draft.with_id(id.clone());
            }
            if !tags.is_empty() {
                draft = draft.with_tags(tags.iter().cloned());
            }
            let doc = library.save(draft, now)?;
            writeln!(out, "{}", doc.id)?;
        }
        DocsAction::Delete { id } => {
            if !library.delete(id, now)? {
                return Err(MarkmeError::NotFound(id.clone()));
            }
            writeln!(out, "Deleted {}", id)?;
        }
        DocsAction::Extend { id } => {
            let doc = library
                .extend(id, now)?
                .ok_or_else(|| MarkmeError::NotFound(id.clone()))?;
            writeln!(out, "{} now expires {}", doc.id, format_time(doc.expires_at))?;
        }
        DocsAction::Export { id, out_dir } => {
            let doc = library
                .document(id, now)?
                .ok_or_else(|| MarkmeError::NotFound(id.clone()))?;
            let path = write_export(out_dir, &export_filename(&doc.title), &doc.content)?;
            writeln!(out, "{}", path.display())?;
        }
        DocsAction::ExportAll { out_dir } => {
            let docs = library.documents(now)?;
            let path = write_export(out_dir, ALL_DOCUMENTS_FILE, &documents_json(&docs)?)?;
            writeln!(out, "{}", path.display())?;
        }
        DocsAction::Init => match library.initialize_defaults(now)? {
            Some(doc) => writeln!(out, "Created {}", doc.id)?,
            None => writeln!(out, "Library is not empty; nothing to do.")?,
        },
        DocsAction::Cleanup => {
            let removed = library.cleanup(now)?;
            writeln!(out, "Removed {} expired document(s)", removed)?;
        }
    }
    Ok(())
}

fn run_profile<S: DocumentStore, W: Write>(
    action: &ProfileAction,
    library: &mut Library<S>,
    config: &Config,
    now: DateTime<Utc>,
    out: &mut W,
) -> Result<()> {
    match action {
        ProfileAction::Show { html } => {
            let profile = library.profile()?;
            let stats = library.stats(now)?;
            writeln!(out, "name        {}", profile.name)?;
            if let Some(avatar) = &profile.avatar {
                writeln!(out, "avatar      {}", avatar)?;
            }
            writeln!(out, "documents   {}", stats.total_documents)?;
            writeln!(out, "words       {}", stats.total_words)?;
            writeln!(out, "updated     {}", format_time(stats.last_updated))?;
            writeln!(out)?;
            if *html {
                let renderer = Renderer::new(RenderFeatures::from_config(&config.features));
                writeln!(out, "{}", renderer.render(&profile.bio))?;
            } else {
                writeln!(out, "{}", profile.bio)?;
            }
        }
        ProfileAction::Set { name, bio, avatar } => {
            let mut profile = library.profile()?;
            if let Some(name) = name {
                profile.name = name.clone();
            }
            if let Some(bio) = bio {
                profile.bio = bio.clone();
            }
            if let Some(avatar) = avatar {
                profile.avatar = if avatar.is_empty() {
                    None
                } else if is_safe_url(avatar) {
                    Some(avatar.clone())
                } else {
                    return Err(MarkmeError::Invalid(format!(
                        "avatar URL not allowed: {}",
                        avatar
                    )));
                };
            }
            library.save_profile(&profile)?;
            writeln!(out, "Profile saved")?;
        }
        ProfileAction::Export { out_dir } => {
            let profile = library.profile()?;
            let path = write_export(out_dir, &bio_filename(&profile.name), &bio_markdown(&profile))?;
            writeln!(out, "{}", path.display())?;
        }
    }
    Ok(())
}

fn run_settings<S: DocumentStore, W: Write>(
    action: &SettingsAction,
    library: &mut Library<S>,
    out: &mut W,
) -> Result<()> {
    let settings = match action {
        SettingsAction::Show => library.settings()?,
        SettingsAction::Set {
            theme,
            font_size,
            font_family,
            auto_save,
        } => {
            let mut settings = library.settings()?;
            if let Some(theme) = theme {
                settings.theme = *theme;
            }
            if let Some(font_size) = font_size {
                settings.font_size = font_size.clone();
            }
            if let Some(font_family) = font_family {
                settings.font_family = font_family.clone();
            }
            if let Some(auto_save) = auto_save {
                settings.auto_save = *auto_save;
            }
            library.save_settings(&settings)?;
            settings
        }
        SettingsAction::Reset => {
            let settings = Settings::default();
            library.save_settings(&settings)?;
            settings
        }
    };

    writeln!(out, "theme        {}", settings.theme)?;
    writeln!(out, "font-size    {}", settings.font_size)?;
    writeln!(out, "font-family  {}", settings.font_family)?;
    writeln!(out, "auto-save    {}", settings.auto_save)?;
    Ok(())
}
