use anyhow::{Result, bail};
use std::path::PathBuf;

pub const USAGE: &str = "\
Usage: blockpress [OPTIONS] [FILE]

Compiles a markdown FILE (or stdin when FILE is `-` or missing) into blocks
and publishes it as a new page.

Options:
      --dry-run        Compile and store in memory; print the result
      --json           Print the publish report as JSON
      --config PATH    Read settings from PATH instead of the default
      --title TEXT     Page title (derived from the text when omitted)
      --summary TEXT   Page summary
      --tag TAG        Add a tag; may be repeated
      --url URL        Source URL recorded on the page
  -h, --help           Print this help";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Args {
    pub dry_run: bool,
    pub json: bool,
    pub config: Option<PathBuf>,
    pub title: Option<String>,
    pub summary: Option<String>,
    pub tags: Vec<String>,
    pub url: Option<String>,
    /// `None` reads stdin.
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Publish(Args),
    Help,
}

impl Args {
    /// Parses arguments, program name excluded.
    pub fn parse<I, S>(args: I) -> Result<Command>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut parsed = Args::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(Command::Help),
                "--dry-run" => parsed.dry_run = true,
                "--json" => parsed.json = true,
                "--config" => parsed.config = Some(value(&arg, args.next())?.into()),
                "--title" => parsed.title = Some(value(&arg, args.next())?),
                "--summary" => parsed.summary = Some(value(&arg, args.next())?),
                "--tag" => parsed.tags.push(value(&arg, args.next())?),
                "--url" => parsed.url = Some(value(&arg, args.next())?),
                "-" => set_input(&mut parsed, None)?,
                flag if flag.starts_with('-') => bail!("Unknown option `{flag}`"),
                _ => set_input(&mut parsed, Some(PathBuf::from(&arg)))?,
            }
        }

        Ok(Command::Publish(parsed))
    }
}

fn value(flag: &str, next: Option<String>) -> Result<String> {
    match next {
        Some(v) => Ok(v),
        None => bail!("Option `{flag}` needs a value"),
    }
}

fn set_input(args: &mut Args, input: Option<PathBuf>) -> Result<()> {
    if args.input.is_some() {
        bail!("Only one input file may be given");
    }
    args.input = input;
    Ok(())
}
