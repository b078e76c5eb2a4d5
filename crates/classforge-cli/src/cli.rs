//! Command-line interface for the classforge utility
//!
//! Provides the interactive class-building menu and a non-interactive mode
//! that replays command scripts.

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use tracing::info;

use crate::menu::{Menu, MenuOutcome};
use classforge::core::logging::init_logging;
use classforge::diagram::CharacterSet;
use classforge::{Session, SessionConfig, Strictness};

/// Classforge - Model classes, draw UML diagrams and generate Python skeletons
#[derive(Parser)]
#[command(name = "classforge")]
#[command(about = "Build class models and turn them into UML diagrams and Python code")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Set log level (trace|debug|info|warn|error)
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Set log format (compact|pretty|json)
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,

    /// Reject relationships that name classes not created yet
    #[arg(long)]
    pub strict: bool,
}

/// Log level options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Log format options
#[derive(Copy, Clone, Debug, clap::ValueEnum, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Compact => "compact",
            LogFormat::Pretty => "pretty",
            LogFormat::Json => "json",
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build a model step by step from a numbered menu
    Interactive {
        /// Graphviz file rewritten after every change
        #[arg(short, long, default_value = "UMLDiagram.dot")]
        diagram: PathBuf,

        /// Character set for the diagram preview
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,
    },

    /// Replay a command script
    Run {
        /// Script file (use - for stdin)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output file for generated Python code (use - for stdout)
        #[arg(short, long)]
        code: Option<PathBuf>,

        /// Output file for the diagram (use - for stdout)
        #[arg(short, long)]
        diagram: Option<PathBuf>,

        /// Diagram output format
        #[arg(long, value_enum, default_value_t = DiagramFormat::Dot)]
        format: DiagramFormat,

        /// Print a text preview of the diagram
        #[arg(long)]
        preview: bool,

        /// Character set for the diagram preview
        #[arg(long, value_enum, default_value_t = StyleChoice::Unicode)]
        style: StyleChoice,
    },
}

/// Supported preview character sets
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum StyleChoice {
    Ascii,
    Unicode,
}

impl From<StyleChoice> for CharacterSet {
    fn from(value: StyleChoice) -> Self {
        match value {
            StyleChoice::Ascii => CharacterSet::Ascii,
            StyleChoice::Unicode => CharacterSet::Unicode,
        }
    }
}

/// Diagram serializations
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq, Default)]
pub enum DiagramFormat {
    /// Graphviz DOT source
    #[default]
    Dot,
    /// Graph description as JSON
    Json,
}

/// Main CLI application
pub struct ClassforgeApp {
    config: SessionConfig,
}

impl ClassforgeApp {
    /// Create a new application instance with default settings
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        Self { config }
    }

    /// Run the application with the given CLI arguments
    pub fn run(mut self, cli: Cli) -> Result<()> {
        // Environment variables take precedence over CLI flags
        let log_level_str = std::env::var("CLASSFORGE_LOG_LEVEL")
            .ok()
            .or_else(|| std::env::var("RUST_LOG").ok())
            .or_else(|| Some(cli.log_level.as_str().to_string()));

        let log_format_str = std::env::var("CLASSFORGE_LOG_FORMAT")
            .ok()
            .or_else(|| Some(cli.log_format.as_str().to_string()));

        if let Err(e) = init_logging(log_level_str.as_deref(), log_format_str.as_deref()) {
            eprintln!("Warning: Failed to initialize logging: {}", e);
        }

        if cli.verbose {
            eprintln!("Classforge v{}", env!("CARGO_PKG_VERSION"));
        }

        if cli.strict {
            self.config = self.config.with_strictness(Strictness::Strict);
        }

        match cli.command {
            Commands::Interactive { diagram, style } => {
                self.interactive_command(diagram, style, cli.verbose)
            }
            Commands::Run {
                input,
                code,
                diagram,
                format,
                preview,
                style,
            } => {
                let request = RunRequest {
                    code,
                    diagram,
                    format,
                    preview,
                    style,
                };
                self.run_command(input, request, cli.verbose)
            }
        }
    }

    /// Handle the interactive command
    fn interactive_command(&self, diagram: PathBuf, style: StyleChoice, verbose: bool) -> Result<()> {
        if verbose {
            eprintln!("Writing diagram to {}", diagram.display());
        }

        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut menu = Menu::new(self.session(), stdin.lock(), stdout.lock())
            .with_diagram_path(Some(diagram))
            .with_style(style.into());

        match menu.run()? {
            MenuOutcome::Finished(path) => {
                if verbose {
                    eprintln!("Generated code in {}", path.display());
                }
            }
            MenuOutcome::Closed => info!("Input closed before code generation"),
        }
        Ok(())
    }

    /// Handle the run command
    fn run_command(&self, input: Option<PathBuf>, request: RunRequest, verbose: bool) -> Result<()> {
        let content = self.read_input(input)?;

        if verbose {
            eprintln!("Read {} bytes of input", content.len());
        }

        let session = self.build_session(&content)?;

        if verbose {
            eprintln!(
                "Built model with {} classes",
                session.model().class_count()
            );
        }

        for rendered in self.render(&session, &request)? {
            self.write_output(rendered.target, &rendered.content)?;
        }
        Ok(())
    }

    /// Replay a script into a fresh session
    pub fn build_session(&self, script: &str) -> Result<Session> {
        let mut session = self.session();
        session.run_script(script)?;
        Ok(session)
    }

    /// Produce every artifact the request asks for
    ///
    /// With no outputs requested the generated code goes to stdout.
    fn render(&self, session: &Session, request: &RunRequest) -> Result<Vec<Rendered>> {
        let mut outputs = Vec::new();

        if request.preview {
            outputs.push(Rendered {
                target: None,
                content: session.preview(request.style.into()),
            });
        }

        if let Some(path) = &request.diagram {
            let graph = session.project_diagram();
            let content = match request.format {
                DiagramFormat::Dot => graph.to_dot(),
                DiagramFormat::Json => graph.to_json()?,
            };
            outputs.push(Rendered {
                target: Some(path.clone()),
                content,
            });
        }

        if request.code.is_some() || outputs.is_empty() {
            outputs.push(Rendered {
                target: request.code.clone(),
                content: session.synthesize_code(),
            });
        }

        Ok(outputs)
    }

    fn session(&self) -> Session {
        Session::with_config(self.config.clone())
    }

    /// Read input from file or stdin
    pub fn read_input(&self, input: Option<PathBuf>) -> Result<String> {
        match input {
            Some(path) if path.to_string_lossy() != "-" => fs::read_to_string(&path)
                .map_err(|e| anyhow!("Failed to read input file '{}': {}", path.display(), e)),
            _ => {
                let mut content = String::new();
                io::stdin().read_to_string(&mut content)?;
                Ok(content)
            }
        }
    }

    /// Write output to file or stdout
    pub fn write_output(&self, output: Option<PathBuf>, content: &str) -> Result<()> {
        let stdout_content = if content.is_empty() || content.ends_with('\n') {
            content.to_string()
        } else {
            format!("{}\n", content)
        };

        match output {
            Some(path) if path.to_string_lossy() != "-" => {
                fs::write(&path, content).map_err(|e| {
                    anyhow!("Failed to write output file '{}': {}", path.display(), e)
                })?;
            }
            _ => {
                print!("{}", stdout_content);
                io::stdout().flush()?;
            }
        }
        Ok(())
    }
}

impl Default for ClassforgeApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Outputs requested by the run command
struct RunRequest {
    code: Option<PathBuf>,
    diagram: Option<PathBuf>,
    format: DiagramFormat,
    preview: bool,
    style: StyleChoice,
}

struct Rendered {
    target: Option<PathBuf>,
    content: String,
}
