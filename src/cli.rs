//! Command-line interface for MarkMe.

use clap::{Parser, Subcommand};
use markme_core::Theme;
use std::path::PathBuf;

/// MarkMe - render a small Markdown dialect to sanitized HTML and keep a
/// local library of expiring documents.
#[derive(Parser, Debug)]
#[command(
    name = "markme",
    author = "MarkMe Contributors",
    version,
    about = "Render Markdown to sanitized HTML and manage a local document library",
    after_help = "Examples:\n  \
                  cat notes.md | markme\n  \
                  markme render notes.md -o notes.html\n  \
                  markme docs save --title 'Ideas' --tag draft ideas.md\n  \
                  markme docs show example --html"
)]
pub struct Cli {
    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(short = 'l', long = "loglevel", default_value = "warn", global = true)]
    pub log_level: String,

    /// Use a custom config file or inline TOML
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Use this store file instead of the configured one
    #[arg(long = "store", value_name = "PATH", global = true)]
    pub store: Option<PathBuf>,

    /// Show configuration paths and exit
    #[arg(long = "paths")]
    pub show_paths: bool,

    /// What to do (renders stdin when omitted)
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render Markdown to sanitized HTML
    Render {
        /// Input file (reads stdin if not provided)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Write HTML here instead of stdout
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Leave [text](url) untouched
        #[arg(long = "no-links")]
        no_links: bool,

        /// Leave ![alt](url) untouched
        #[arg(long = "no-images")]
        no_images: bool,
    },

    /// Count words and characters
    Stats {
        /// Input file (reads stdin if not provided)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Manage stored documents
    Docs {
        #[command(subcommand)]
        action: DocsAction,
    },

    /// Show or edit the profile
    Profile {
        #[command(subcommand)]
        action: ProfileAction,
    },

    /// Show or edit settings
    Settings {
        #[command(subcommand)]
        action: SettingsAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum DocsAction {
    /// List live documents
    List {
        /// Only titles containing this text (case-insensitive)
        #[arg(short = 's', long = "search")]
        search: Option<String>,
    },

    /// Print a document
    Show {
        id: String,

        /// Print rendered HTML instead of Markdown
        #[arg(long = "html")]
        html: bool,
    },

    /// Create a document, or update it when --id names an existing one
    Save {
        /// Document title
        #[arg(short = 't', long = "title")]
        title: String,

        /// Id of the document to update
        #[arg(long = "id")]
        id: Option<String>,

        /// Tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Markdown file (reads stdin if not provided)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,
    },

    /// Delete a document
    Delete { id: String },

    /// Restart a document's expiry
    Extend { id: String },

    /// Export one document as Markdown
    Export {
        id: String,

        /// Directory to write into
        #[arg(short = 'o', long = "out-dir", default_value = ".")]
        out_dir: PathBuf,
    },

    /// Export all documents as JSON
    ExportAll {
        /// Directory to write into
        #[arg(short = 'o', long = "out-dir", default_value = ".")]
        out_dir: PathBuf,
    },

    /// Seed the example document into an empty library
    Init,

    /// Remove expired documents
    Cleanup,
}

#[derive(Subcommand, Debug)]
pub enum ProfileAction {
    /// Print the profile and library totals
    Show {
        /// Render the bio to HTML
        #[arg(long = "html")]
        html: bool,
    },

    /// Update profile fields
    Set {
        #[arg(long = "name")]
        name: Option<String>,

        #[arg(long = "bio")]
        bio: Option<String>,

        /// Avatar URL (http, https or relative)
        #[arg(long = "avatar")]
        avatar: Option<String>,
    },

    /// Export the bio as Markdown
    Export {
        /// Directory to write into
        #[arg(short = 'o', long = "out-dir", default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print the settings
    Show,

    /// Update settings
    Set {
        /// light, dark or system
        #[arg(long = "theme")]
        theme: Option<Theme>,

        #[arg(long = "font-size")]
        font_size: Option<String>,

        #[arg(long = "font-family")]
        font_family: Option<String>,

        #[arg(long = "auto-save")]
        auto_save: Option<bool>,
    },

    /// Restore the default settings
    Reset,
}

/// Show paths information.
pub fn show_paths() {
    use markme_config::Config;

    let config_path = Config::config_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "(not found)".to_string());
    let store_path = Config::load()
        .unwrap_or_default()
        .store_path()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|_| "(not found)".to_string());

    println!("paths:");
    println!("  config                {}", config_path);
    println!("  store                 {}", store_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_default() {
        let cli = Cli::parse_from(["markme"]);
        assert!(cli.command.is_none());
        assert_eq!(cli.log_level, "warn");
        assert!(cli.store.is_none());
        assert!(!cli.show_paths);
    }

    #[test]
    fn test_cli_parse_render() {
        let cli = Cli::parse_from(["markme", "render", "in.md", "-o", "out.html", "--no-links"]);
        match cli.command {
            Some(Command::Render {
                file,
                output,
                no_links,
                no_images,
            }) => {
                assert_eq!(file, Some(PathBuf::from("in.md")));
                assert_eq!(output, Some(PathBuf::from("out.html")));
                assert!(no_links);
                assert!(!no_images);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["markme", "docs", "list", "-l", "debug", "--store", "s.json"]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.store, Some(PathBuf::from("s.json")));
    }

    #[test]
    fn test_cli_parse_docs_save() {
        let cli = Cli::parse_from([
            "markme", "docs", "save", "--title", "Ideas", "--tag", "a", "--tag", "b", "ideas.md",
        ]);
        match cli.command {
            Some(Command::Docs {
                action: DocsAction::Save { title, id, tags, file },
            }) => {
                assert_eq!(title, "Ideas");
                assert!(id.is_none());
                assert_eq!(tags, vec!["a", "b"]);
                assert_eq!(file, Some(PathBuf::from("ideas.md")));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_export_all_default_dir() {
        let cli = Cli::parse_from(["markme", "docs", "export-all"]);
        match cli.command {
            Some(Command::Docs {
                action: DocsAction::ExportAll { out_dir },
            }) => assert_eq!(out_dir, PathBuf::from(".")),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_parse_settings_theme() {
        let cli = Cli::parse_from(["markme", "settings", "set", "--theme", "dark", "--auto-save", "false"]);
        match cli.command {
            Some(Command::Settings {
                action: SettingsAction::Set { theme, auto_save, .. },
            }) => {
                assert_eq!(theme, Some(Theme::Dark));
                assert_eq!(auto_save, Some(false));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_theme() {
        let result = Cli::try_parse_from(["markme", "settings", "set", "--theme", "neon"]);
        assert!(result.is_err());
    }
}
