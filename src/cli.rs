use std::path::PathBuf;

pub const USAGE: &str = "\
tabset — compound tabs widget for the terminal

USAGE: tabset [--tabs <FILE>]

Shows a tab list and the panel of the selected tab. Without --tabs, tab
definitions are read from <config dir>/tabset/tabs.json when it exists,
otherwise the built-in Home / Profile / Settings set is shown.

OPTIONS:
  --tabs <FILE>    Load tab definitions from a JSON file
  --print-config   Print the built-in tab definitions as JSON
  -h, --help       Print this help message
  -V, --version    Print version

Set TABSET_LOG (e.g. TABSET_LOG=debug) to write a log file next to the config.";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Run { tabs_file: Option<PathBuf> },
    PrintConfig,
    Help,
    Version,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CliError {
    #[error("Missing value for '{0}'\n\nRun 'tabset --help' for usage.")]
    MissingValue(String),

    #[error("Unknown argument '{0}'\n\nRun 'tabset --help' for usage.")]
    UnknownArgument(String),
}

/// Parses arguments, excluding the program name.
///
/// `--help` and `--version` win over everything else.
pub fn parse_args<I>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Ok(Command::Help);
    }
    if args.iter().any(|a| a == "--version" || a == "-V") {
        return Ok(Command::Version);
    }

    let mut tabs_file = None;
    let mut print_config = false;
    let mut iter = args.into_iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--tabs" => {
                let value = iter
                    .next()
                    .ok_or_else(|| CliError::MissingValue(arg.clone()))?;
                tabs_file = Some(PathBuf::from(value));
            }
            "--print-config" => print_config = true,
            _ => {
                if let Some(value) = arg.strip_prefix("--tabs=") {
                    if value.is_empty() {
                        return Err(CliError::MissingValue("--tabs".to_string()));
                    }
                    tabs_file = Some(PathBuf::from(value));
                } else {
                    return Err(CliError::UnknownArgument(arg));
                }
            }
        }
    }

    if print_config {
        return Ok(Command::PrintConfig);
    }
    Ok(Command::Run { tabs_file })
}
