use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use treeforge::core::parse::{ParseMode, ParseOptions};
use treeforge::core::walk::{LastMarker, ListingOrder, PrintOptions, SkipList};

#[derive(Parser, Debug)]
#[command(name = "treeforge", version)]
#[command(
    about = "Print directory trees and create folder structures from indented text",
    long_about = None
)]
pub struct Cli {
    /// Increase log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Runs the interactive menu when omitted
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the tree of an existing directory
    Print(PrintArgs),
    /// Create directories and empty files from indented notation
    Create(CreateArgs),
    /// Choose between printing and creating from a menu
    Interactive(InteractiveArgs),
}

#[derive(Args, Debug)]
pub struct PrintArgs {
    /// Directory to print (defaults to current directory)
    pub path: Option<PathBuf>,

    /// Comma-separated entry names to skip (exact match)
    #[arg(short, long, value_name = "NAMES")]
    pub skip: Vec<String>,

    /// Treat `*` and `?` in skip names as wildcards
    #[arg(long)]
    pub skip_glob: bool,

    /// Sort entries by name instead of keeping the filesystem order
    #[arg(long)]
    pub sort: bool,

    /// Decide the last branch before skipping entries, as the original tree printer did
    #[arg(long)]
    pub raw_markers: bool,
}

impl PrintArgs {
    pub fn options(&self) -> PrintOptions {
        PrintOptions {
            skip: self
                .skip
                .iter()
                .flat_map(|list| SkipList::parse_list(list))
                .collect(),
            glob_skip: self.skip_glob,
            order: if self.sort {
                ListingOrder::Sorted
            } else {
                ListingOrder::Native
            },
            last_marker: if self.raw_markers {
                LastMarker::Raw
            } else {
                LastMarker::Filtered
            },
        }
    }
}

#[derive(Args, Debug)]
pub struct CreateArgs {
    /// Folder to create the structure in (defaults to current directory)
    pub base: Option<PathBuf>,

    /// Read the notation from a file (`path` or `file:path`) instead of stdin
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<String>,

    /// Reject notation with inconsistent indentation or missing names
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug, Default)]
pub struct InteractiveArgs {
    /// Reject notation with inconsistent indentation or missing names
    #[arg(long)]
    pub strict: bool,
}

pub fn parse_options(strict: bool) -> ParseOptions {
    ParseOptions {
        mode: if strict {
            ParseMode::Strict
        } else {
            ParseMode::Lenient
        },
    }
}
