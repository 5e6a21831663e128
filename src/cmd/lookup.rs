use crate::reports;
use clap::Args;
use ecotally::api::EcoSession;
use ecotally::ledger::PointsLedger;
use ecotally::EcoResult;

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Username, matched without regard to case
    pub name: String,
}

pub fn run<L: PointsLedger>(args: &LookupArgs, session: &EcoSession<L>) -> EcoResult<()> {
    match session.lookup(&args.name)? {
        Some(entry) => reports::print_leaderboard(std::slice::from_ref(&entry)),
        None => println!("\n🔎 No user named '{}' on the leaderboard.", args.name.trim()),
    }
    Ok(())
}
