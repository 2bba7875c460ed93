use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Tick rate, i.e. number of ticks per second (overrides config)"
    )]
    pub tick_rate: Option<f64>,

    #[arg(
        short,
        long,
        value_name = "FLOAT",
        help = "Frame rate, i.e. number of frames per second (overrides config)"
    )]
    pub frame_rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_rates_default_to_none() {
        let cli = Cli::parse_from(["echotui"]);
        assert!(cli.tick_rate.is_none());
        assert!(cli.frame_rate.is_none());
    }

    #[test]
    fn test_rates_can_be_overridden() {
        let cli = Cli::parse_from(["echotui", "--tick-rate", "10", "--frame-rate", "60"]);
        assert_eq!(cli.tick_rate, Some(10.0));
        assert_eq!(cli.frame_rate, Some(60.0));
    }
}
