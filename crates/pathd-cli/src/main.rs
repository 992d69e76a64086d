#![forbid(unsafe_code)]

use std::io::Read;

use pathd::{PathParser, PathToken, SvgPath};
use serde::Serialize;

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Path(pathd::ParseError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Path(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<pathd::ParseError> for CliError {
    fn from(value: pathd::ParseError) -> Self {
        Self::Path(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    Tokens,
    #[default]
    Parse,
    Format,
    Absolute,
    Relative,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    compact: bool,
}

fn usage() -> &'static str {
    "pathd-cli\n\
\n\
USAGE:\n\
  pathd-cli tokens [--pretty] [<path-data>|-]\n\
  pathd-cli [parse] [--pretty] [<path-data>|-]\n\
  pathd-cli format [--compact] [<path-data>|-]\n\
  pathd-cli absolute [--compact] [<path-data>|-]\n\
  pathd-cli relative [--compact] [<path-data>|-]\n\
\n\
NOTES:\n\
  - <path-data> is the value of an SVG `d` attribute, quoted as one argument.\n\
  - If <path-data> is omitted or '-', input is read from stdin.\n\
  - tokens dumps the raw token stream as JSON, including a trailing error\n\
    token when the input is malformed.\n\
  - parse prints the commands as JSON arrays; format prints path text, one\n\
    command per line (--compact for the single-line implicit-repetition form).\n\
  - absolute/relative rewrite every command to that coordinate mode first.\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "tokens" => args.command = Command::Tokens,
            "parse" => args.command = Command::Parse,
            "format" => args.command = Command::Format,
            "absolute" => args.command = Command::Absolute,
            "relative" => args.command = Command::Relative,
            "--pretty" => args.pretty = true,
            "--compact" => args.compact = true,
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path_data) => Ok(path_data.to_string()),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn print_path(path: &SvgPath, compact: bool) {
    if compact {
        println!("{}", path.to_compact_string());
    } else {
        println!("{path}");
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let input = read_input(args.input.as_deref())?;

    match args.command {
        Command::Tokens => {
            let tokens: Vec<PathToken> = PathParser::new(&input).collect();
            write_json(&tokens, args.pretty)
        }
        Command::Parse => {
            let path: SvgPath = input.parse()?;
            write_json(&path, args.pretty)
        }
        Command::Format => {
            let path: SvgPath = input.parse()?;
            print_path(&path, args.compact);
            Ok(())
        }
        Command::Absolute => {
            let mut path: SvgPath = input.parse()?;
            path.to_absolute();
            print_path(&path, args.compact);
            Ok(())
        }
        Command::Relative => {
            let mut path: SvgPath = input.parse()?;
            path.to_relative();
            print_path(&path, args.compact);
            Ok(())
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
