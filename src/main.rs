use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pasteboard_lib::bootstrap::{
    build_factory, init_tracing_subscriber, load_config, resolve_config_path, LoggingSettings,
};
use pb_app::{PasteboardFactory, PasteboardInstance};
use pb_core::config::PasteboardConfig;
use pb_core::pasteboard::{PasteboardUrl, SelectedTextMode, SmartReplaceOption};
use pb_core::ports::{AnnotateMode, FramePort, MarkupBridgePort, ScriptingPolicy, UrlResolution};

#[derive(Parser)]
#[command(name = "pasteboard-cli")]
#[command(about = "Exercise the pasteboard adapter against the host clipboard", long_about = None)]
struct Cli {
    /// Target the primary selection instead of the clipboard
    #[arg(long, global = true)]
    primary: bool,

    /// Configuration file (defaults to $PASTEBOARD_CONFIG or the user config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Host backend: system, memory or none
    #[arg(long, global = true)]
    backend: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the formats on the selection as JSON
    Types,
    /// Print the plain text on the selection
    ReadText,
    /// Print one format as a string
    Read {
        /// MIME type to read
        mime: String,
    },
    /// Copy plain text
    WriteText {
        text: String,
        /// Mark the copy as smart-replaceable
        #[arg(long)]
        smart: bool,
    },
    /// Copy a URL
    WriteUrl { url: String },
    /// Copy markup, with an optional plain-text alternative
    WriteHtml {
        markup: String,
        #[arg(long)]
        text: Option<String>,
    },
    /// List local file paths on the selection as JSON
    Files,
    /// Clear the selection
    Clear,
    /// Report whether the last copy allows smart replacement
    SmartReplace,
}

/// Stand-in for the engine when copying markup from the command line:
/// the "range" is the markup itself and the "selection" is its text.
struct CliMarkup {
    text: String,
}

impl MarkupBridgePort for CliMarkup {
    type Range = String;
    type Document = ();
    type Fragment = String;

    fn serialize(&self, range: &String, _annotate: AnnotateMode, _urls: UrlResolution) -> String {
        range.clone()
    }

    fn parse_fragment_from_markup(
        &self,
        _document: &(),
        markup: &str,
        _base_url: &str,
        _policy: ScriptingPolicy,
    ) -> Option<String> {
        Some(markup.to_string())
    }

    fn parse_fragment_from_text(&self, _context: &String, text: &str) -> Option<String> {
        Some(text.to_string())
    }
}

impl FramePort for CliMarkup {
    type Document = ();

    fn document(&self) -> &() {
        &()
    }

    fn selected_text(&self) -> String {
        self.text.clone()
    }

    fn selected_text_for_data_transfer(&self) -> String {
        self.text.clone()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config.clone().or_else(resolve_config_path) {
        Some(path) => load_config(&path)?,
        None => PasteboardConfig::empty(),
    };
    init_tracing_subscriber(&LoggingSettings::from_config(&config))?;

    let factory = build_factory(&config, cli.backend.as_deref())?;
    run(&factory, cli.primary, cli.command)
}

fn open(factory: &PasteboardFactory, primary: bool) -> PasteboardInstance {
    if primary {
        factory.create_for_global_selection()
    } else {
        factory.create_for_copy_and_paste()
    }
}

fn run(factory: &PasteboardFactory, primary: bool, command: Commands) -> Result<()> {
    let mut pasteboard = open(factory, primary);

    match command {
        Commands::Types => {
            println!("{}", serde_json::to_string_pretty(&pasteboard.types())?);
        }
        Commands::ReadText => {
            println!("{}", pasteboard.read_plain_text().text);
        }
        Commands::Read { mime } => {
            println!("{}", pasteboard.read_string(&mime));
        }
        Commands::WriteText { text, smart } => {
            let option = if smart {
                SmartReplaceOption::CanSmartReplace
            } else {
                SmartReplaceOption::CannotSmartReplace
            };
            pasteboard.write_plain_text(&text, option);
        }
        Commands::WriteUrl { url } => {
            anyhow::ensure!(!url.is_empty(), "URL must not be empty");
            pasteboard.write_url(&PasteboardUrl::new(url));
        }
        Commands::WriteHtml { markup, text } => {
            let markup_port = CliMarkup {
                text: text.unwrap_or_else(|| markup.clone()),
            };
            pasteboard.write_selection(
                &markup_port,
                &markup,
                false,
                &markup_port,
                SelectedTextMode::DefaultSelectedText,
            );
        }
        Commands::Files => {
            let files: Vec<String> = pasteboard
                .read_filenames()
                .iter()
                .map(|path| path.display().to_string())
                .collect();
            println!("{}", serde_json::to_string_pretty(&files)?);
        }
        Commands::Clear => {
            pasteboard.clear();
        }
        Commands::SmartReplace => {
            println!("{}", pasteboard.can_smart_replace());
        }
    }

    Ok(())
}
