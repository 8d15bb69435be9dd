use std::{io::Write, path::PathBuf};

use anyhow::Result;
use clap::{Parser, Subcommand};
use vault_abi::{EntryKind, VaultVersion};

pub mod export;
pub mod info;
pub mod logging;
pub mod parse;

use parse::{parse_entry_id, EntryId, OutputFormat};

/// Inspect the ABI tables of every released vault contract version.
///
/// All data is embedded in the binary, no network access is performed.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Options {
    #[clap(flatten)]
    pub logging: logging::Config,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List the known versions with their entry counts.
    Versions,
    /// Print the ABI table of one version.
    Show {
        /// Contract version, e.g. `v0.5.0`, `0.5.0` or `vaultAbi_v0_5_0`.
        #[clap(long, env = "VAULT_ABI_VERSION", default_value_t = VaultVersion::LATEST)]
        abi_version: VaultVersion,

        /// Only print entries of this kind (constructor, function, event, error).
        #[clap(long)]
        kind: Option<EntryKind>,

        #[clap(long, value_enum, default_value_t)]
        format: OutputFormat,
    },
    /// Report in which versions a function, event or error with this name exists.
    Find { name: String },
    /// Print function and error selectors and event topics of one version.
    Selectors {
        #[clap(long, env = "VAULT_ABI_VERSION", default_value_t = VaultVersion::LATEST)]
        abi_version: VaultVersion,
    },
    /// Find the entries matching a 4 byte selector or a 32 byte event topic.
    Lookup {
        #[clap(value_parser = parse_entry_id)]
        id: EntryId,
    },
    /// Validate every embedded ABI table.
    Check,
    /// Write the canonical JSON of every version to a directory.
    Export {
        /// Output directory, created if missing.
        #[clap(long, short)]
        out: PathBuf,
    },
}

pub fn run(command: &Commands, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Versions => info::display_versions(out),
        Commands::Show {
            abi_version,
            kind,
            format,
        } => info::display_table(out, *abi_version, *kind, *format),
        Commands::Find { name } => info::display_presence(out, name),
        Commands::Selectors { abi_version } => info::display_selectors(out, *abi_version),
        Commands::Lookup { id } => info::lookup(out, *id),
        Commands::Check => info::check_all(out),
        Commands::Export { out: out_dir } => {
            for path in export::export_all(out_dir)? {
                writeln!(out, "{}", path.display())?;
            }
            Ok(())
        },
    }
}
