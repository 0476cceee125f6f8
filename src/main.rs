use anyhow::Result;
use bit_store::areas::repository::Repository;
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bit",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A content-addressable object store in git's format",
    long_about = "Stores blobs and trees under the SHA-1 of their content, \
    using the same loose object layout as git, so objects written by either tool \
    can be read by the other.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        short = 'C',
        global = true,
        default_value = ".",
        help = "Run as if started in this directory"
    )]
    directory: PathBuf,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "init",
        about = "Initialize a new repository",
        long_about = "This command creates the .git directory skeleton and the HEAD pointer \
        in the current directory or at the specified path."
    )]
    Init {
        #[arg(index = 1, help = "The path to the repository")]
        path: Option<PathBuf>,
    },
    #[command(
        name = "cat-file",
        about = "Print the content of an object",
        long_about = "This command prints the content of an object in the repository. \
        Blobs are printed verbatim, trees one entry per line."
    )]
    CatFile {
        #[arg(short = 'p', long, help = "The object SHA to print")]
        sha: String,
    },
    #[command(
        name = "hash-object",
        about = "Hash an object and optionally write it to the object database",
        long_about = "This command hashes a file as a blob and can write it to the object \
        database. It requires the path to the file to be specified."
    )]
    HashObject {
        #[arg(short, long, required = false, help = "Write the object to the object database")]
        write: bool,
        #[arg(index = 1)]
        file: PathBuf,
    },
    #[command(
        name = "ls-tree",
        about = "List the contents of a tree object",
        long_about = "This command lists the entries of a tree object sorted by name."
    )]
    LsTree {
        #[arg(long, help = "List only entry names")]
        name_only: bool,
        #[arg(index = 1, help = "The tree SHA to list")]
        sha: String,
    },
    #[command(
        name = "write-tree",
        about = "Store the working directory as a tree object",
        long_about = "This command writes every file of the working directory as a blob, \
        every directory as a tree, and prints the SHA of the root tree."
    )]
    WriteTree,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match &cli.command {
        Commands::Init { path } => {
            let path = match path {
                Some(path) => cli.directory.join(path),
                None => cli.directory.clone(),
            };
            let repository = Repository::new(&path, Box::new(std::io::stdout()))?;

            repository.init()?;
            writeln!(
                repository.writer(),
                "Initialized empty Git repository in {}",
                repository.git_path().display()
            )?;
        }
        Commands::CatFile { sha } => {
            let repository = Repository::new(&cli.directory, Box::new(std::io::stdout()))?;

            repository.cat_file(sha)?
        }
        Commands::HashObject { write, file } => {
            let repository = Repository::new(&cli.directory, Box::new(std::io::stdout()))?;

            repository.hash_object(file, *write)?;
        }
        Commands::LsTree { name_only, sha } => {
            let repository = Repository::new(&cli.directory, Box::new(std::io::stdout()))?;

            repository.ls_tree(sha, *name_only)?
        }
        Commands::WriteTree => {
            let repository = Repository::new(&cli.directory, Box::new(std::io::stdout()))?;

            repository.write_tree()?;
        }
    }

    Ok(())
}
