use clap::Parser;
use lopa_core::budget::clamp_secs;
use lopa_search::jump::STAGNATION_SECS;
use std::time::Duration;

/// Flags for the randomized solver. Parsing is deliberately lenient:
/// unrecognized tokens are skipped and a `--time` value that is not a
/// float falls back to the default, both silently.
#[derive(Parser, Debug, Default)]
#[command(
    name = "lopa-jump",
    about = "LOPA - randomized longest-path approximation over weighted graphs",
    disable_help_flag = true,
    disable_version_flag = true,
    ignore_errors = true
)]
pub struct JumpArgs {
    /// Stagnation budget in seconds (default 60)
    #[arg(long = "time", allow_negative_numbers = true)]
    time: Option<String>,
}

impl JumpArgs {
    /// The stagnation budget, falling back to the default on any value
    /// that does not parse as a float.
    pub fn stagnation(&self) -> Duration {
        let secs = self
            .time
            .as_deref()
            .and_then(|s| s.parse::<f64>().ok())
            .unwrap_or(STAGNATION_SECS);
        clamp_secs(secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> JumpArgs {
        JumpArgs::parse_from(argv)
    }

    #[test]
    fn no_flags_gives_the_default_budget() {
        let args = parse(&["lopa-jump"]);
        assert_eq!(args.stagnation(), Duration::from_secs(60));
    }

    #[test]
    fn time_flag_overrides_the_budget() {
        let args = parse(&["lopa-jump", "--time", "2.5"]);
        assert_eq!(args.stagnation(), Duration::from_secs_f64(2.5));
    }

    #[test]
    fn unparsable_time_is_silently_ignored() {
        let args = parse(&["lopa-jump", "--time", "soon"]);
        assert_eq!(args.stagnation(), Duration::from_secs(60));
    }

    #[test]
    fn unrecognized_tokens_are_skipped() {
        let args = parse(&["lopa-jump", "--time", "1.0", "--bogus", "extra"]);
        // ignore_errors keeps parsing past the unknown tokens.
        assert_eq!(args.stagnation(), Duration::from_secs(1));
    }

    #[test]
    fn unknown_leading_flag_does_not_abort() {
        let args = parse(&["lopa-jump", "--bogus"]);
        assert_eq!(args.stagnation(), Duration::from_secs(60));
    }

    #[test]
    fn negative_time_clamps_to_zero() {
        let args = parse(&["lopa-jump", "--time", "-3"]);
        assert_eq!(args.stagnation(), Duration::ZERO);
    }
}
