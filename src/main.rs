use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use minibit::artifacts::core::{PagerWriter, should_page};
use minibit::{Config, LogOptions, Repository, RepositoryError};
use minus::Pager;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "minibit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A minimal local version control system",
    long_about = "minibit stores file snapshots as content-addressed objects, \
    keeps a linear history per branch and merges branches file by file. \
    Everything lives in a .minibit directory next to your files.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command initializes a new repository in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<String>,
    },
    #[command(
        name = "add",
        about = "Stage files for the next commit",
        long_about = "This command stores the content of the given files and records them in the index. \
        Directories are staged recursively."
    )]
    Add {
        #[arg(index = 1, required = true, help = "The files or directories to stage")]
        paths: Vec<String>,
    },
    #[command(
        name = "commit",
        about = "Create a new commit with the specified message",
        long_about = "This command records the staged files on top of the current commit."
    )]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(
        name = "log",
        about = "Show the commit history",
        long_about = "This command lists the commits reachable from HEAD by following first parents."
    )]
    Log {
        #[arg(long, help = "Show each commit on a single line")]
        oneline: bool,
        #[arg(long = "abbrev-commit", help = "Show abbreviated commit IDs")]
        abbrev_commit: bool,
    },
    #[command(
        name = "branch",
        about = "Create or list branches",
        long_about = "With a name, this command creates a branch at the current commit. \
        Without one, it lists every branch and marks the current one."
    )]
    Branch {
        #[arg(index = 1, help = "The name of the branch to create")]
        name: Option<String>,
    },
    #[command(
        name = "checkout",
        about = "Switch to a branch or commit",
        long_about = "This command updates the working tree to the snapshot of a branch or commit. \
        Checking out a commit ID detaches HEAD."
    )]
    Checkout {
        #[arg(index = 1, help = "Branch name or commit ID")]
        target: String,
    },
    #[command(
        name = "merge",
        about = "Merge a branch into the current one",
        long_about = "This command combines the snapshot of another branch with the current one. \
        Files changed on both sides are reported as conflicts; stage a resolution and merge again."
    )]
    Merge {
        #[arg(index = 1, help = "The branch to merge")]
        branch: String,
    },
    #[command(
        name = "diff",
        about = "Compare two blobs line by line",
        long_about = "This command compares the lines of two stored blobs position by position."
    )]
    Diff {
        #[arg(index = 1, help = "The old blob ID")]
        old: String,
        #[arg(index = 2, help = "The new blob ID")]
        new: String,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        It requires the SHA of the object to be specified."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
}

fn open_repository(
    pwd: &Path,
    writer: Box<dyn std::io::Write>,
    config: &Config,
) -> Result<Repository> {
    Ok(Repository::open(pwd, writer)?.with_config(config.clone()))
}

// Merge conflicts exit with 1, every other failure with 128
const CONFLICT_EXIT_CODE: u8 = 1;
const FATAL_EXIT_CODE: u8 = 128;

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::load_from_env();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:?}");
            exit_code(&error)
        }
    }
}

fn exit_code(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<RepositoryError>() {
        Some(error) if error.is_conflict() => ExitCode::from(CONFLICT_EXIT_CODE),
        _ => ExitCode::from(FATAL_EXIT_CODE),
    }
}

fn run(cli: &Cli, config: Config) -> Result<()> {
    let pwd = std::env::current_dir().context("Unable to read the current directory")?;
    let stdout = || Box::new(std::io::stdout());

    match &cli.command {
        Commands::Init { path } => {
            let path = path.as_deref().map(PathBuf::from).unwrap_or(pwd);
            let mut repository = Repository::new(&path, stdout())?.with_config(config);

            repository.init()?;
        }
        Commands::Add { paths } => {
            let mut repository = open_repository(&pwd, stdout(), &config)?;
            let paths = paths
                .iter()
                .map(|path| repository.worktree().relative_path(&pwd, Path::new(path)))
                .collect::<Result<Vec<_>, _>>()?;

            repository.add(&paths)?;
        }
        Commands::Commit { message } => {
            let mut repository = open_repository(&pwd, stdout(), &config)?;

            repository.commit(message)?;
        }
        Commands::Log {
            oneline,
            abbrev_commit,
        } => {
            let opts = LogOptions {
                oneline: *oneline,
                abbrev_commit: *abbrev_commit,
            };

            if should_page(&config) {
                let pager = Pager::new();
                let writer = Box::new(PagerWriter::new(pager.clone()));
                let repository = open_repository(&pwd, writer, &config)?;

                repository.log(&opts)?;
                minus::page_all(pager)?;
            } else {
                let repository = open_repository(&pwd, stdout(), &config)?;

                repository.log(&opts)?;
            }
        }
        Commands::Branch { name } => {
            let mut repository = open_repository(&pwd, stdout(), &config)?;

            match name {
                Some(name) => {
                    repository.create_branch(name)?;
                }
                None => {
                    repository.list_branches()?;
                }
            }
        }
        Commands::Checkout { target } => {
            let mut repository = open_repository(&pwd, stdout(), &config)?;

            repository.checkout(target)?;
        }
        Commands::Merge { branch } => {
            let mut repository = open_repository(&pwd, stdout(), &config)?;

            repository.merge(branch)?;
        }
        Commands::Diff { old, new } => {
            let repository = open_repository(&pwd, stdout(), &config)?;

            repository.diff(old, new)?;
        }
        Commands::CatFile { sha } => {
            let repository = open_repository(&pwd, stdout(), &config)?;

            repository.cat_file(sha)?;
        }
    }

    Ok(())
}
