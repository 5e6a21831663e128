use crate::reports;
use clap::Args;
use ecotally::api::EcoSession;
use ecotally::ledger::PointsLedger;
use ecotally::EcoResult;

#[derive(Args, Debug, Clone)]
pub struct LeaderboardArgs {
    /// Show only the first N places
    #[arg(short = 'n', long)]
    pub top: Option<usize>,
}

pub fn run<L: PointsLedger>(args: &LeaderboardArgs, session: &EcoSession<L>) -> EcoResult<()> {
    let board = session.leaderboard()?;
    if board.is_empty() {
        println!("\n🏁 Leaderboard is empty. Log a day to get on the board.");
        return Ok(());
    }

    let shown = args.top.unwrap_or(board.len()).min(board.len());
    reports::print_leaderboard(&board[..shown]);
    if shown < board.len() {
        println!("   ... and {} more", board.len() - shown);
    }
    Ok(())
}
