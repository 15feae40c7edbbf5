use crate::package::Package;
use crate::report::OutputFormat;
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(
    name = "fitness-tracker",
    about = "Compute distance, speed and calories from fitness sensor packages"
)]
pub struct Cli {
    /// Sensor packages as CODE:n1,n2,... (SWM, RUN or WLK).
    ///
    /// Default: the built-in demo packages.
    #[arg(value_name = "PACKAGE")]
    pub packages: Vec<Package>,

    /// Print each summary as a JSON object instead of a sentence
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v, -vv). Defaults to INFO.
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Decrease log verbosity (-q, -qq). Defaults to INFO.
    #[arg(short = 'q', long, action = ArgAction::Count, global = true)]
    pub quiet: u8,
}

impl Cli {
    #[must_use]
    pub const fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["fitness-tracker"]).unwrap();
        assert!(cli.packages.is_empty());
        assert_eq!(cli.format(), OutputFormat::Text);
        assert_eq!((cli.verbose, cli.quiet), (0, 0));
    }

    #[test]
    fn test_packages_and_flags() {
        let cli = Cli::try_parse_from([
            "fitness-tracker",
            "--json",
            "-vv",
            "RUN:15000,1,75",
            "WLK:9000,1,75,180",
        ])
        .unwrap();
        assert_eq!(
            cli.packages,
            [
                Package::new("RUN", &[15000.0, 1.0, 75.0]),
                Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
            ]
        );
        assert_eq!(cli.format(), OutputFormat::Json);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_malformed_package_is_rejected() {
        assert!(Cli::try_parse_from(["fitness-tracker", "RUN:fast"]).is_err());
    }
}
