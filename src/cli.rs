//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI parser for `buildlens`.
#[derive(Debug, Parser)]
#[command(name = "buildlens", version, about = "Inspect bundler build-session snapshots")]
pub struct Cli {
    /// Data source: a snapshot file path or an `http(s)://` dev-server URL.
    /// Falls back to the `BUILDLENS_DATA` env var, then `.data/sample.json`.
    #[arg(long, global = true)]
    pub data: Option<String>,

    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Summarize the build session: metadata, module list, build duration.
    Session,
    /// Show a module with its chunks, assets, and per-hook call metrics.
    Module {
        /// Module id (typically a file path).
        id: String,
        /// Show the module's transform calls instead of the full detail.
        #[arg(long)]
        transforms: bool,
    },
    /// Show an asset with its owning chunk and chunk-level import relations.
    Asset {
        /// Output filename of the asset.
        filename: String,
    },
    /// Show a chunk with its module list and primary asset.
    Chunk {
        /// Numeric chunk id.
        chunk_id: u32,
    },
    /// Show a resolved package.
    Package {
        /// Composite key in the form `name@version`.
        id: String,
    },
    /// Show a plugin's recorded calls split by hook kind.
    Plugin {
        /// Numeric plugin id.
        plugin_id: u32,
    },
    /// Write the snapshot as a `window.__data = ...;` delivery payload.
    Export {
        /// Output path for the payload.
        #[arg(long, default_value = "build-data.js")]
        out: PathBuf,
    },
}
