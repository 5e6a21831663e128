use crate::cmd::calc::DayInput;
use crate::reports;
use clap::Args;
use ecotally::api::EcoSession;
use ecotally::config::Config;
use ecotally::emission::TransportMode;
use ecotally::ledger::PointsLedger;
use ecotally::EcoResult;

#[derive(Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(short, long, default_value = "")]
    pub user: String,

    #[command(flatten)]
    pub day: DayInput,

    #[command(flatten)]
    pub config: Config,
}

pub fn run<L: PointsLedger>(args: &LogArgs, session: &mut EcoSession<L>) -> EcoResult<()> {
    let mode = TransportMode::parse(&args.day.mode)?;
    let logged = session.log_day(&args.user, mode, args.day.distance, args.day.electricity)?;

    reports::print_daily_report(&logged.report, &session.policy);
    match logged.record {
        Some(rec) => reports::print_user_record(&rec),
        None => println!("\nℹ️  No username given. Points were not saved."),
    }
    Ok(())
}
