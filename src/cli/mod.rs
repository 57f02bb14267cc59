use clap::{ArgAction, Parser};
use std::ffi::OsString;

mod help;

#[derive(Parser, Debug)]
#[command(name = "rummage", version)]
#[command(
    about = "Find files that have not been accessed within a time period",
    long_about = help::TOP_LONG_ABOUT,
    after_help = help::TOP_AFTER_HELP,
    disable_help_flag = true
)]
pub struct Cli {
    /// Threshold in minutes
    #[arg(short = 'm', value_name = "MINUTES", group = "unit", allow_negative_numbers = true)]
    pub minutes: Option<String>,

    /// Threshold in hours
    #[arg(short = 'h', value_name = "HOURS", group = "unit", allow_negative_numbers = true)]
    pub hours: Option<String>,

    /// Threshold in days
    #[arg(short = 'd', value_name = "DAYS", group = "unit", allow_negative_numbers = true)]
    pub days: Option<String>,

    /// Print one JSON object per stale file instead of plain lines
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log level (off, error, warn, info, debug, trace); overrides -v
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<log::LevelFilter>,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Directories or files to scan; without a unit flag the first one is a day count
    #[arg(value_name = "PATH", allow_negative_numbers = true)]
    pub paths: Vec<OsString>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("rummage").chain(args.iter().copied()))
    }

    #[test]
    fn definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn short_h_means_hours() {
        let cli = parse(&["-h", "2", "a", "b"]).unwrap();
        assert_eq!(cli.hours.as_deref(), Some("2"));
        assert_eq!(cli.paths, vec![OsString::from("a"), OsString::from("b")]);
    }

    #[test]
    fn attached_values_parse() {
        let cli = parse(&["-m5"]).unwrap();
        assert_eq!(cli.minutes.as_deref(), Some("5"));
        assert!(cli.paths.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn non_utf8_paths_are_accepted() {
        use std::os::unix::ffi::OsStringExt;

        let root = OsString::from_vec(b"caf\xe9".to_vec());
        let cli = Cli::try_parse_from([OsString::from("rummage"), "-d".into(), "5".into(), root.clone()])
            .unwrap();
        assert_eq!(cli.paths, vec![root]);
    }

    #[test]
    fn negative_values_reach_the_resolver() {
        let cli = parse(&["-d", "-3"]).unwrap();
        assert_eq!(cli.days.as_deref(), Some("-3"));
    }

    #[test]
    fn legacy_count_is_a_positional() {
        let cli = parse(&["7", "dir/"]).unwrap();
        assert!(cli.minutes.is_none() && cli.hours.is_none() && cli.days.is_none());
        assert_eq!(cli.paths, vec![OsString::from("7"), OsString::from("dir/")]);
    }

    #[test]
    fn units_are_exclusive() {
        let err = parse(&["-m", "5", "-h", "2"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn unit_cannot_repeat() {
        assert!(parse(&["-d", "1", "-d", "2"]).is_err());
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = parse(&["-x", "1"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn verbosity_counts() {
        let cli = parse(&["-vv", "-d", "1"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
