//! Command-line interface definition using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// showbuild - broadcast rundown editing engine
#[derive(Parser, Debug)]
#[command(name = "showbuild")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to state directory
    #[arg(short, long, env = "SHOWBUILD_STATE_DIR", global = true)]
    pub state_dir: Option<PathBuf>,

    /// Base URL of the show API
    #[arg(long, env = "SHOWBUILD_API_URL", global = true)]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add up durations ("1:30", "1:02:03", "45")
    Duration {
        #[arg(required = true)]
        values: Vec<String>,
    },

    /// Compose cue markup
    Cue {
        /// Cue kind (gfx, fsq, sot, vo, nat, pkg, vox, mus, live)
        kind: String,

        #[arg(long, default_value = "")]
        slug: String,

        #[arg(short, long)]
        duration: Option<String>,

        #[arg(short, long, default_value = "")]
        body: String,

        /// Extra fields such as reporter=Kim or sourceFile=clip.mp4
        #[arg(short, long = "field", value_name = "KEY=VALUE")]
        fields: Vec<String>,
    },

    /// Check a value against an item field rule
    Validate {
        rule: Rule,
        value: String,
    },

    /// Inspect and edit the color profile
    Color {
        #[command(subcommand)]
        action: ColorCommand,
    },

    /// Show an episode rundown
    Rundown {
        episode: String,
    },

    /// Move an item within an episode rundown and save the new order
    Reorder {
        episode: String,
        /// Current position (1-based)
        from: usize,
        /// New position (1-based)
        to: usize,
    },

    /// Log in to the show API
    Login {
        username: String,

        #[arg(short, long, env = "SHOWBUILD_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Discard the stored session
    Logout,

    /// Show session and configuration
    Status,

    /// Resolve where navigating to a path lands
    Route {
        path: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ColorCommand {
    /// Token and hex color for a key
    Resolve { key: String },

    /// Hex color of a palette token
    Hex { token: String },

    /// Set the token of a key (requires login)
    Set { key: String, token: String },

    /// Fetch a profile from the API
    Load {
        #[arg(short, long)]
        profile: Option<String>,
    },

    /// List every resolved key
    List,
}

/// Field rule for `validate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Rule {
    Slug,
    Title,
    Duration,
    Link,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
