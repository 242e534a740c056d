//! CLI module - Command-line interface for fabstatus
//!
//! This module provides a structured CLI using clap for argument parsing.

mod commands;

use clap::{Parser, Subcommand};

/// fabstatus - Fabrication equipment status service
#[derive(Parser)]
#[command(name = "fabstatus")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API server (default)
    #[command(alias = "daemon")]
    Serve,

    /// Create tables and insert demo users and equipment if absent
    Seed,

    /// List equipment from the local database
    #[command(alias = "ls")]
    List {
        /// Exact status, e.g. "DOWN"
        #[arg(long)]
        status: Option<String>,
        /// Exact area, e.g. "Metrology"
        #[arg(long)]
        area: Option<String>,
        /// Case-insensitive text in name or description
        #[arg(long)]
        search: Option<String>,
    },

    /// Print the stored form of a password hash
    HashPassword {
        /// Plaintext password
        password: String,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}

pub use commands::*;
