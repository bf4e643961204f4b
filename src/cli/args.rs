//! Command-line argument parsing.
//!
//! ```text
//! formwiz [--api <URL>] <FORM_ID>
//! formwiz [--api <URL>] --inspect <FORM_ID>
//! formwiz --version | --help
//! ```

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Open the interactive wizard for a form
    Fill {
        form_id: String,
        api_url: Option<String>,
    },
    /// Print a plain-text outline of a form and exit
    Inspect {
        form_id: String,
        api_url: Option<String>,
    },
    /// Arguments could not be understood; carries the reason
    Invalid(String),
}

pub const USAGE: &str = "\
Usage: formwiz [OPTIONS] <FORM_ID>

Fill out a club form in the terminal.

Options:
      --api <URL>          Forms API base URL (overrides FORMWIZ_API_URL)
      --inspect <FORM_ID>  Print the form's sections and fields, then exit
  -V, --version            Print version
  -h, --help               Print help";

/// Parse command-line arguments, skipping the program name.
///
/// `--version` and `--help` win wherever they appear.
///
/// ```
/// use formwiz::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["formwiz".to_string(), "12".to_string()];
/// assert_eq!(
///     parse_args(args.into_iter()),
///     CliCommand::Fill { form_id: "12".to_string(), api_url: None }
/// );
/// ```
pub fn parse_args<I>(args: I) -> CliCommand
where
    I: Iterator<Item = String>,
{
    let mut api_url = None;
    let mut inspect = None;
    let mut form_id = None;

    let mut args = args.skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return CliCommand::Version,
            "--help" | "-h" => return CliCommand::Help,
            "--api" => match args.next() {
                Some(url) => api_url = Some(url),
                None => return CliCommand::Invalid("--api requires a URL".to_string()),
            },
            "--inspect" => match args.next() {
                Some(id) => inspect = Some(id),
                None => return CliCommand::Invalid("--inspect requires a form id".to_string()),
            },
            flag if flag.starts_with('-') => {
                return CliCommand::Invalid(format!("unknown option '{}'", flag));
            }
            _ if form_id.is_some() => {
                return CliCommand::Invalid(format!("unexpected argument '{}'", arg));
            }
            _ => form_id = Some(arg),
        }
    }

    match (inspect, form_id) {
        (Some(form_id), None) => CliCommand::Inspect { form_id, api_url },
        (None, Some(form_id)) => CliCommand::Fill { form_id, api_url },
        (Some(_), Some(extra)) => CliCommand::Invalid(format!("unexpected argument '{}'", extra)),
        (None, None) => CliCommand::Invalid("missing <FORM_ID>".to_string()),
    }
}
