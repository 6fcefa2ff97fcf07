use clap::{ArgAction, Parser as ClapParser, Subcommand};
use jsque::{
    CompileOptions,
    cli::{self, CliError, DocumentFormat, QueryOptions, QueryOutcome},
    parser::DEFAULT_MAX_OPERATIONS,
};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

#[derive(ClapParser)]
#[command(name = "jsque")]
#[command(about = "jsque - path queries over JSON and YAML documents")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG also applies.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a query against a document
    Eval {
        /// The jsque query, e.g. '@[*].name'
        query: String,

        /// Document text (reads --file or stdin if not provided)
        #[arg(short, long, conflicts_with = "file")]
        input: Option<String>,

        /// Read the document from a file
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Input document format
        #[arg(long, value_enum, default_value_t = DocumentFormat::Json)]
        from: DocumentFormat,

        /// Output format (defaults to the input format)
        #[arg(long, value_enum)]
        to: Option<DocumentFormat>,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't execute
        #[arg(long)]
        syntax_only: bool,

        /// Reject queries with more operations than this
        #[arg(long, default_value_t = DEFAULT_MAX_OPERATIONS)]
        max_operations: usize,
    },

    /// Validate a query and print its canonical form and operations
    Check {
        /// The jsque query to validate
        query: String,
    },

    /// Print the tokens of a query, one per line
    Tokens {
        /// The jsque query to tokenize
        query: String,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Eval {
            query,
            input,
            file,
            from,
            to,
            pretty,
            syntax_only,
            max_operations,
        } => {
            let options = QueryOptions {
                query,
                input: None,
                from,
                syntax_only,
                compile: CompileOptions { max_operations },
            };
            run_eval(&options, || read_input(input, file), to.unwrap_or(from), pretty)
        }
        Commands::Check { query } => jsque::compile(&query)
            .map(|q| println!("{}", cli::describe_query(&q)))
            .map_err(CliError::from),
        Commands::Tokens { query } => {
            cli::render_tokens(&query).map(|tokens| println!("{}", tokens))
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    match verbose {
        0 => {}
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

fn read_input(input: Option<String>, file: Option<PathBuf>) -> Result<Option<String>, CliError> {
    if input.is_some() {
        return Ok(input);
    }
    if let Some(path) = file {
        log::debug!("reading document from {}", path.display());
        return Ok(Some(fs::read_to_string(path)?));
    }
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    Ok(Some(buffer))
}

fn run_eval(
    options: &QueryOptions,
    read_input: impl FnOnce() -> Result<Option<String>, CliError>,
    to: DocumentFormat,
    pretty: bool,
) -> Result<(), CliError> {
    match cli::execute_query_from(options, read_input)? {
        QueryOutcome::SyntaxValid(_) => println!("Syntax is valid"),
        QueryOutcome::Success(output) => {
            println!("{}", cli::render_document(&output, to, pretty)?);
        }
    }
    Ok(())
}
