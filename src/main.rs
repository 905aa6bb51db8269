mod cli;

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug};

use cli::{Cli, Command, CreateArgs, InteractiveArgs, PrintArgs, parse_options};
use treeforge::app;
use treeforge::fs::RealFileSystem;
use treeforge::session::Session;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    debug!("parsed arguments: {cli:?}");

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("treeforge: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if verbose > 0 {
        let level = match verbose {
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        };
        builder.filter_level(level);
    }
    builder.init();
}

async fn run(command: Option<Command>) -> Result<()> {
    let fs = RealFileSystem;
    match command {
        Some(Command::Print(args)) => print(&fs, args).await,
        Some(Command::Create(args)) => create(&fs, args).await,
        Some(Command::Interactive(args)) => interactive(&fs, args).await,
        None => interactive(&fs, InteractiveArgs::default()).await,
    }
}

async fn print(fs: &RealFileSystem, args: PrintArgs) -> Result<()> {
    let root = args.path.clone().unwrap_or_else(|| PathBuf::from("."));
    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::print_tree(fs, &root, &args.options(), &mut out).await?;
    out.flush()?;
    Ok(())
}

async fn create(fs: &RealFileSystem, args: CreateArgs) -> Result<()> {
    let base = args.base.unwrap_or_else(|| PathBuf::from("."));
    let text = match args.input.as_deref() {
        Some(source) => app::load_notation(fs, source).await?,
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("cannot read notation from stdin")?;
            text
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    app::create_tree(fs, &base, &text, &parse_options(args.strict), &mut out).await?;
    out.flush()?;
    Ok(())
}

async fn interactive(fs: &RealFileSystem, args: InteractiveArgs) -> Result<()> {
    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let stdin = io::stdin();
    let mut session = Session::new(stdin.lock(), io::stdout(), cwd)
        .with_parse_options(parse_options(args.strict));
    session.run(fs).await
}
