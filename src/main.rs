//! termfolio CLI
//!
//! A portfolio that lives in the terminal. Running it with no
//! subcommand opens the interactive TUI; subcommands print portfolio
//! data or manage the persisted theme preference.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use termfolio::content::Content;
use termfolio::prefs::{FilePreference, TerminalScheme, ThemeStore};
use termfolio::report::{format_projects, format_skills};
use termfolio::types::{OutputFormat, ProjectCategory};

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "A personal portfolio for the terminal")]
#[command(version)]
struct Cli {
    /// Force the light theme for this session (not persisted)
    #[arg(long, global = true, conflicts_with = "dark")]
    light: bool,

    /// Force the dark theme for this session (not persisted)
    #[arg(long, global = true)]
    dark: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List portfolio projects
    Projects {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,

        /// Only show one category (web, mobile, fullstack, backend)
        #[arg(long)]
        category: Option<String>,
    },

    /// List skills with proficiency levels
    Skills {
        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },

    /// Show or change the persisted theme preference
    Theme {
        /// Persist a preference
        #[arg(long, value_enum)]
        set: Option<ThemeArg>,

        /// Forget the persisted preference (fall back to the terminal's scheme)
        #[arg(long, conflicts_with = "set")]
        clear: bool,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let dark_override = match (cli.dark, cli.light) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    };

    let result = match cli.command {
        None => cmd_tui(dark_override),
        Some(Commands::Projects { format, category }) => {
            cmd_projects(format.into(), category.as_deref())
        }
        Some(Commands::Skills { format }) => cmd_skills(format.into()),
        Some(Commands::Theme { set, clear }) => cmd_theme(set, clear),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn theme_store() -> ThemeStore<FilePreference, TerminalScheme> {
    ThemeStore::new(FilePreference::at_default_location(), TerminalScheme::from_env())
}

fn cmd_tui(dark_override: Option<bool>) -> Result<(), String> {
    let theme = theme_store();
    termfolio::tui::run::run(&theme, dark_override).map_err(|e| e.to_string())
}

fn cmd_projects(format: OutputFormat, category: Option<&str>) -> Result<(), String> {
    let filter = match category {
        Some(name) => Some(
            ProjectCategory::parse(name)
                .ok_or_else(|| format!("Unknown category: {} (web, mobile, fullstack, backend)", name))?,
        ),
        None => None,
    };

    let content = Content::bundled();
    let projects = content.filtered_projects(filter);
    print!("{}", format_projects(&projects, format));

    Ok(())
}

fn cmd_skills(format: OutputFormat) -> Result<(), String> {
    let content = Content::bundled();
    print!("{}", format_skills(&content.skills, format));

    Ok(())
}

fn cmd_theme(set: Option<ThemeArg>, clear: bool) -> Result<(), String> {
    let prefs = FilePreference::at_default_location();

    if clear {
        prefs.clear().map_err(|e| e.to_string())?;
        println!("Theme preference cleared.");
        return Ok(());
    }

    if let Some(choice) = set {
        use termfolio::prefs::PreferenceStore;
        let dark = matches!(choice, ThemeArg::Dark);
        prefs.store(dark).map_err(|e| e.to_string())?;
        println!("Theme set to {}.", if dark { "dark" } else { "light" });
        return Ok(());
    }

    let store = ThemeStore::new(prefs, TerminalScheme::from_env());
    let dark = store.initialize();
    println!("Current theme: {}", if dark { "dark" } else { "light" });
    println!("Preference file: {}", termfolio::prefs::default_preference_path().display());

    Ok(())
}
