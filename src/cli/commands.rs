//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "itemtags")]
#[command(about = "Validate Item and Tag payloads", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $ITEMTAGS_CONFIG or ./itemtags.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a JSON payload and print its normalized form
    Validate {
        /// Schema name (item, item-create, item-update, tag, tag-create, tag-update)
        schema: String,

        /// JSON file to read (default: stdin, or '-')
        file: Option<PathBuf>,

        /// Print compact JSON regardless of config
        #[arg(long)]
        compact: bool,
    },

    /// List available schemas
    Schemas,

    /// Write a default config file
    Init {
        /// Directory or file to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
