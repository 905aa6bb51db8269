use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use log::debug;

use crate::app::{FILE_PREFIX, create_tree, load_notation, print_tree};
use crate::core::parse::ParseOptions;
use crate::core::walk::{PrintOptions, SkipList};
use crate::fs::FileSystem;

/// A menu-driven prompt session over an explicit reader and writer.
pub struct Session<R, W> {
    input: R,
    output: W,
    /// Used whenever a path prompt is answered with an empty line.
    cwd: PathBuf,
    parse: ParseOptions,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, cwd: impl Into<PathBuf>) -> Self {
        Self {
            input,
            output,
            cwd: cwd.into(),
            parse: ParseOptions::default(),
        }
    }

    pub fn with_parse_options(mut self, parse: ParseOptions) -> Self {
        self.parse = parse;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub async fn run<F: FileSystem>(&mut self, fs: &F) -> Result<()> {
        writeln!(self.output, "Folder Structure Generator/Creator")?;
        writeln!(self.output, "=================================")?;

        let choice = self.ask(
            "Choose an option (1 - Print folder structure, 2 - Make folder structure): ",
        )?;
        debug!("menu choice {choice:?}");

        match choice.as_deref().map(str::trim) {
            Some("1") => self.print_flow(fs).await,
            Some("2") => self.create_flow(fs).await,
            _ => {
                writeln!(self.output, "Invalid option selected.")?;
                Ok(())
            }
        }
    }

    async fn print_flow<F: FileSystem>(&mut self, fs: &F) -> Result<()> {
        let root = self.ask_path("Enter the folder path: ")?;
        let skip = self
            .ask("Enter folders to skip (comma-separated, or leave empty): ")?
            .map(|answer| SkipList::parse_list(&answer))
            .unwrap_or_default();

        writeln!(self.output, "\nFolder Structure:")?;
        let options = PrintOptions {
            skip,
            ..PrintOptions::default()
        };
        print_tree(fs, &root, &options, &mut self.output).await
    }

    async fn create_flow<F: FileSystem>(&mut self, fs: &F) -> Result<()> {
        let base = self.ask_path("Enter the main folder path (parent folder): ")?;

        writeln!(self.output, "\nEnter the folder structure.")?;
        writeln!(
            self.output,
            "For file input, enter the file path or \"file:path/to/file\"."
        )?;
        writeln!(
            self.output,
            "For manual input, just start typing and end with an empty line:"
        )?;

        let first = self.ask("> ")?.unwrap_or_default();
        let text = if first.starts_with(FILE_PREFIX) {
            match load_notation(fs, &first).await {
                Ok(text) => {
                    writeln!(
                        self.output,
                        "\nRead {} lines from file.",
                        text.split('\n').count()
                    )?;
                    text
                }
                Err(err) => {
                    writeln!(self.output, "\nError reading the file: {err}")?;
                    return Ok(());
                }
            }
        } else {
            self.read_block(first)?
        };

        writeln!(self.output, "\nCreating folder structure...")?;
        create_tree(fs, &base, &text, &self.parse, &mut self.output).await?;
        writeln!(self.output, "\nFolder structure creation complete!")?;
        Ok(())
    }

    /// Collect `first` and every following line up to an empty line or end of input.
    fn read_block(&mut self, first: String) -> Result<String> {
        let mut text = first;
        text.push('\n');

        writeln!(self.output, "Enter folder structure (empty line to finish):")?;
        while let Some(line) = self.ask("> ")? {
            if line.is_empty() {
                break;
            }
            text.push_str(&line);
            text.push('\n');
        }

        Ok(text)
    }

    fn ask_path(&mut self, question: &str) -> Result<PathBuf> {
        match self.ask(question)? {
            Some(answer) if !answer.trim().is_empty() => Ok(PathBuf::from(answer.trim())),
            _ => Ok(self.cwd.clone()),
        }
    }

    /// Prompt and read one line. `None` at end of input.
    fn ask(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("cannot read input")?;
        if read == 0 {
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\n', '\r']).to_owned()))
    }
}
