use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::core::{
    DEFAULT_HEIGHT, DEFAULT_LINE_WIDTH, DEFAULT_PALETTE, DEFAULT_SCALE, DEFAULT_TITLE,
    DEFAULT_WIDTH, Rgb,
};

/// Top-level CLI structure.
///
/// `-h` is the height, so help is only reachable as `--help`.
#[derive(Parser, Debug)]
#[command(
    name = "sixplot",
    version,
    about = "Plot a `Y` or `X Y` data file to PNG and preview it via SIXEL",
    disable_help_flag = true
)]
pub struct Cli {
    /// Data file: one `Y` or `X Y` record per line, `#`/`%` start comments
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Plot width in points
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Plot height in points
    #[arg(short = 'h', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// SIXEL scale factor (the saved PNG is unaffected)
    #[arg(short, long, default_value_t = DEFAULT_SCALE)]
    pub scale: f64,

    /// Line width in points
    #[arg(long, default_value_t = DEFAULT_LINE_WIDTH)]
    pub line_width: f64,

    /// Line color (name or `#RRGGBB`)
    #[arg(long, value_name = "COLOR", default_value_t = DEFAULT_PALETTE.line)]
    pub line_color: Rgb,

    /// Marker color (name or `#RRGGBB`)
    #[arg(long, value_name = "COLOR", default_value_t = DEFAULT_PALETTE.scatter)]
    pub scatter_color: Rgb,

    /// Background color (name or `#RRGGBB`)
    #[arg(long, value_name = "COLOR", default_value_t = DEFAULT_PALETTE.background)]
    pub background: Rgb,

    /// Chart title
    #[arg(short, long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Omit title, grid and axis labels
    #[arg(long)]
    pub bare: bool,

    /// Emit debug diagnostics
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, error::ErrorKind};

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("sixplot").chain(args.iter().copied()))
    }

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = parse(&["data.txt"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("data.txt"));
        assert_eq!((cli.width, cli.height), (1200, 1200));
        assert!((cli.scale - 1.0).abs() < f64::EPSILON);
        assert_eq!(cli.line_color, Rgb::BLACK);
        assert_eq!(cli.background, Rgb::WHITE);
        assert_eq!(cli.title, "Data Plot");
        assert!(!cli.bare);
    }

    #[test]
    fn short_flags_follow_classic_names() {
        let cli = parse(&["-w", "100", "-h", "50", "-s", "2", "data.txt"]).unwrap();
        assert_eq!((cli.width, cli.height), (100, 50));
        assert!((cli.scale - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn colors_accept_names_and_hex() {
        let cli = parse(&[
            "--line-color",
            "red",
            "--background",
            "#101010",
            "--line-width",
            "2.5",
            "d",
        ])
        .unwrap();
        assert_eq!(cli.line_color, Rgb::RED);
        assert_eq!(cli.background, Rgb::new(16, 16, 16));
        assert!((cli.line_width - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn bad_color_is_a_usage_error() {
        let err = parse(&["--scatter-color", "nope", "d"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
    }

    #[test]
    fn exactly_one_file() {
        assert_eq!(
            parse(&[]).unwrap_err().kind(),
            ErrorKind::MissingRequiredArgument
        );
        assert_eq!(
            parse(&["a.txt", "b.txt"]).unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
    }

    #[test]
    fn long_help_still_works() {
        assert_eq!(
            parse(&["--help"]).unwrap_err().kind(),
            ErrorKind::DisplayHelp
        );
    }
}
