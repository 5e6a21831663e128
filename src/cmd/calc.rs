use crate::reports;
use clap::Args;
use ecotally::api::EcoSession;
use ecotally::config::Config;
use ecotally::emission::TransportMode;
use ecotally::ledger::PointsLedger;
use ecotally::EcoResult;

/// Raw inputs for one day, as the user reports them.
#[derive(Args, Debug, Clone)]
pub struct DayInput {
    /// car, bus, bicycle or walk
    #[arg(short, long)]
    pub mode: String,

    /// Travel distance in km
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub distance: f64,

    /// Daily electricity usage in kWh
    #[arg(short, long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub electricity: f64,
}

#[derive(Args, Debug, Clone)]
pub struct CalcArgs {
    #[command(flatten)]
    pub day: DayInput,

    #[command(flatten)]
    pub config: Config,
}

pub fn run<L: PointsLedger>(args: &CalcArgs, session: &EcoSession<L>) -> EcoResult<()> {
    let mode = TransportMode::parse(&args.day.mode)?;
    let report = session.estimate(mode, args.day.distance, args.day.electricity)?;
    reports::print_daily_report(&report, &session.policy);
    Ok(())
}
