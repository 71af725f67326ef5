use clap::Parser;
use tracing_subscriber::EnvFilter;

use scorecard::api::ScorecardSession;
use scorecard::scale::ScaleKind;
use scorecard::store::RatingPolicy;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Main topic shown on the center tile.
    #[arg(short, long, default_value = "Company Strategy")]
    topic: String,

    /// Rating scale variant: ordinal (1-5) or percent (0-100).
    #[arg(short, long, default_value = "ordinal")]
    scale: ScaleKind,

    /// Reject out-of-range ratings instead of clamping them.
    #[arg(long, default_value_t = false)]
    strict_ratings: bool,

    /// Start with edit mode off; fields render as static text.
    #[arg(long, default_value_t = false)]
    read_only: bool,

    #[arg(long, default_value_t = false)]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "scorecard=debug"
    } else {
        "scorecard=warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let policy = if cli.strict_ratings {
        RatingPolicy::Strict
    } else {
        RatingPolicy::Clamp
    };

    let mut session = ScorecardSession::new(&cli.topic, cli.scale.scale()).with_policy(policy);
    if cli.read_only {
        session.toggle_edit_mode();
    }

    cmd::run::run(&mut session);
}
