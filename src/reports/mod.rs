use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use ecotally::api::DailyReport;
use ecotally::ledger::UserRecord;
use ecotally::points::PointsPolicy;
use ecotally::ranking::LeaderboardEntry;
use ecotally::region::RegionOverview;

pub fn print_daily_report(report: &DailyReport, policy: &PointsPolicy) {
    println!("\nYour Daily Carbon Emissions ({})", report.mode);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![
        Cell::new("Transport"),
        Cell::new(format!("{:.2} kg CO2", report.emissions.transport))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Electricity"),
        Cell::new(format!("{:.2} kg CO2", report.emissions.electricity))
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        Cell::new(format!("{:.2} kg CO2", report.emissions.total))
            .add_attribute(Attribute::Bold)
            .set_alignment(CellAlignment::Right),
    ]);
    table.add_row(vec![
        Cell::new(format!("Points (baseline {:.1} kg)", policy.baseline())),
        points_cell(report.points),
    ]);
    println!("{}", table);

    if report.points < 0.0 {
        println!("💡 Tip: low-carbon transport and saving electricity earn points.");
    }
}

pub fn print_user_record(rec: &UserRecord) {
    println!(
        "\n✅ Saved for '{}': {:.0} points (was {:.0})",
        rec.username, rec.cumulative_points, rec.previous_cumulative_points
    );
}

pub fn print_leaderboard(entries: &[LeaderboardEntry]) {
    println!("\n🏆 === POINTS LEADERBOARD === 🏆");
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Rank").add_attribute(Attribute::Bold),
        Cell::new("User").add_attribute(Attribute::Bold),
        Cell::new("Points").fg(Color::Cyan),
        Cell::new("Prev"),
        Cell::new("Move"),
    ]);

    for e in entries {
        table.add_row(vec![
            Cell::new(e.rank).set_alignment(CellAlignment::Right),
            Cell::new(&e.username),
            Cell::new(format!("{:.0}", e.cumulative_points)).set_alignment(CellAlignment::Right),
            Cell::new(e.previous_rank).set_alignment(CellAlignment::Right),
            movement_cell(e.rank_change),
        ]);
    }
    println!("{}", table);
}

pub fn print_region_overview(overview: &RegionOverview) {
    println!("\n🗺️  {} State Overview", overview.state);
    println!(
        "Total CO2 emissions: {:.1} million metric tons",
        overview.total_emissions_million_mt()
    );

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);
    table.add_row(vec![
        Cell::new("County").add_attribute(Attribute::Bold),
        Cell::new("Emissions (Mt)").fg(Color::Cyan),
        Cell::new("Lat"),
        Cell::new("Lon"),
    ]);

    for c in overview.counties_by_emissions() {
        table.add_row(vec![
            Cell::new(c.county),
            Cell::new(format!("{:.0}", c.emissions_mt)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", c.lat)).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.3}", c.lon)).set_alignment(CellAlignment::Right),
        ]);
    }
    println!("{}", table);
    println!(
        "County indicators sum to {:.0} Mt (simulated).",
        overview.county_total_million_mt()
    );
}

fn points_cell(points: f64) -> Cell {
    let cell = Cell::new(format!("{:+.0}", points)).set_alignment(CellAlignment::Right);
    if points > 0.0 {
        cell.fg(Color::Green)
    } else if points < 0.0 {
        cell.fg(Color::Red)
    } else {
        cell
    }
}

fn movement_cell(change: i64) -> Cell {
    let cell = match change {
        0 => Cell::new("="),
        c if c > 0 => Cell::new(format!("▲{}", c)).fg(Color::Green),
        c => Cell::new(format!("▼{}", -c)).fg(Color::Red),
    };
    cell.set_alignment(CellAlignment::Center)
}
