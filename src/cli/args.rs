use clap::Parser;
use std::path::PathBuf;

use crate::subtitle::Rational;

#[derive(Parser, Debug)]
#[command(name = "srttool")]
#[command(version)]
#[command(about = "Retime, shift and clean up SubRip (SRT) subtitle files", long_about = None)]
pub struct Cli {
    /// Subtitle file to process
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Edit the file in place instead of printing to stdout
    #[arg(short, long)]
    pub in_place: bool,

    /// Convert timestamps from one frame rate to another (e.g. 25 23.976)
    #[arg(short, long, num_args = 2, value_names = ["FROM", "TO"])]
    pub fps: Option<Vec<Rational>>,

    /// Shift every timestamp by SECONDS (may be negative)
    #[arg(short, long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub shift: Option<Rational>,

    /// Clear hearing impaired lines (any line containing [...])
    #[arg(short, long)]
    pub clear: bool,

    /// Keep hearing impaired lines even if the config file enables --clear
    #[arg(long, conflicts_with = "clear")]
    pub no_clear: bool,

    /// Rewrap three-line subtitles into two balanced lines
    #[arg(short = '3', long)]
    pub three: bool,

    /// Leave three-line subtitles alone even if the config file enables --three
    #[arg(long, conflicts_with = "three")]
    pub no_three: bool,

    /// Increase log verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all logging
    #[arg(short, long)]
    pub quiet: bool,

    /// Use custom config file
    #[arg(long, value_name = "FILE", env = "SRTTOOL_CONFIG")]
    pub config: Option<PathBuf>,
}
