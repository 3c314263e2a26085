//! Prediction pool simulation.
//!
//! With `--data <DIR>` loads a season from json files and prints the league table,
//! leaderboard and baseline validation. Without it, runs built-in scenarios showing
//! official results, provisional edits, backup export/import and validation.

use chrono::Utc;
use clap::Parser;
use porra_core::*;
use std::collections::BTreeMap;
use std::error::Error;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "porra-sim")]
#[command(about = "League table and prediction leaderboard calculator", long_about = None)]
struct Cli {
    /// Data directory with matches.json, participants.json, predictions.json, ...
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Only list fixtures of this matchday ("all" or a number)
    #[arg(short, long, default_value = "all")]
    matchday: MatchdayFilter,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match &cli.data {
        Some(dir) => run_dataset(dir, cli.matchday, cli.verbose)?,
        None => run_scenarios(cli.verbose)?,
    }
    Ok(())
}

fn run_dataset(dir: &Path, matchday: MatchdayFilter, verbose: bool) -> Result<(), Box<dyn Error>> {
    let config = PoolConfig::league_phase().with_rules_from_dir(dir)?;
    if let Err(e) = config.validate() {
        return Err(format!("invalid configuration: {:?}", e).into());
    }

    let season = Season::load_dir(dir, &config.data_paths)?;
    let mut engine_config = EngineConfig::from(&config);
    engine_config.verbose = verbose;
    let engine = Engine::new(season, engine_config);

    let overrides = OverrideSet::new();
    print_fixtures(&engine.fixture_views(&overrides, matchday));
    print_recalculation(&engine.recalculate(&overrides));
    Ok(())
}

fn run_scenarios(verbose: bool) -> Result<(), Box<dyn Error>> {
    println!("Prediction Pool Engine Simulation");
    println!("League phase, sign 2 pts, exact score +3 pts\n");

    let config = EngineConfig {
        verbose,
        ..EngineConfig::default()
    };
    let engine = Engine::new(demo_season()?, config);

    scenario_1_official_results(&engine);
    scenario_2_provisional_edit(&engine)?;
    scenario_3_backup_round_trip(&engine)?;
    scenario_4_rule_change(&engine);

    println!("\nAll simulations completed successfully.");
    Ok(())
}

/// Official results only. Totals match the baseline.
fn scenario_1_official_results(engine: &Engine) {
    println!("Scenario 1: Official Results\n");
    let overrides = OverrideSet::new();
    print_fixtures(&engine.fixture_views(&overrides, MatchdayFilter::All));
    print_recalculation(&engine.recalculate(&overrides));
}

/// Enter a pending result one side at a time.
fn scenario_2_provisional_edit(engine: &Engine) -> Result<(), Box<dyn Error>> {
    println!("Scenario 2: Provisional Edit\n");
    let mut overrides = OverrideSet::new();

    println!("  Setting home goals of fixture 5 to 1...");
    let half = engine.apply_edit(&mut overrides, ScoreEdit::home(FixtureId(5), Some(1)))?;
    println!("  Fixture still pending, leader: {}", leader(&half));

    println!("  Setting away goals of fixture 5 to 3...");
    let full = engine.apply_edit(&mut overrides, ScoreEdit::away(FixtureId(5), Some(3)))?;
    print_fixtures(&engine.fixture_views(&overrides, MatchdayFilter::Matchday(3)));
    print_recalculation(&full);

    let restored = engine.restore(&mut overrides);
    println!("  Restored official results, leader: {}\n", leader(&restored));
    Ok(())
}

/// Export the override set, then import it into a fresh set.
fn scenario_3_backup_round_trip(engine: &Engine) -> Result<(), Box<dyn Error>> {
    println!("Scenario 3: Backup Round Trip\n");
    let mut overrides = OverrideSet::new();
    overrides.set_home(FixtureId(6), Some(2));
    overrides.set_away(FixtureId(6), Some(2));
    overrides.set_away(FixtureId(1), Some(0));

    let backup = OverrideBackup::export(&overrides, Utc::now());
    let json = backup.to_json()?;
    println!("  Exported {} edits to {}", overrides.len(), backup.file_name());

    let imported = import_backup(&json)?;
    println!("  Imported {} edits, identical: {}", imported.len(), imported == overrides);

    let result = engine.recalculate(&imported);
    println!("  {}\n", result.validation);
    Ok(())
}

/// Same inputs, different rules.
fn scenario_4_rule_change(engine: &Engine) {
    println!("Scenario 4: Rule Change\n");
    let rescored = engine.clone().with_rules(ScoringRules::new(1, 2));
    let result = rescored.recalculate(&OverrideSet::new());
    println!("  Sign 1 pt, exact +2 pts");
    print_leaderboard(&result.leaderboard);
    println!("  {}", result.validation);
}

fn leader(result: &Recalculation) -> String {
    result
        .leaderboard
        .first()
        .map(|r| format!("{} ({} pts)", r.stat.name, r.stat.total_points))
        .unwrap_or_else(|| "nobody".to_string())
}

fn print_fixtures(views: &[FixtureView]) {
    for v in views {
        let sign = v.sign.map(|s| format!("({})", s)).unwrap_or_default();
        let status = if v.played { "played" } else { "pending" };
        let edited = if v.edited { " *" } else { "" };
        println!(
            "  MD{} {} {:>14} {:^5} {:<14} {} {}{}",
            v.matchday,
            v.kickoff.format("%d/%m/%Y"),
            v.home,
            v.score.to_string(),
            v.away,
            status,
            sign,
            edited
        );
    }
    println!();
}

fn print_leaderboard(leaderboard: &[RankedParticipant]) {
    println!("  {:>3} {:<10} {:>4} {:>5} {:>4} {:>6}", "Pos", "Player", "Pts", "Exact", "Sign", "Played");
    for r in leaderboard {
        println!(
            "  {:>3} {:<10} {:>4} {:>5} {:>4} {:>6}",
            r.rank, r.stat.name, r.stat.total_points, r.stat.exact_hits, r.stat.sign_hits, r.stat.played_matches
        );
    }
}

fn print_recalculation(result: &Recalculation) {
    println!("  {:>3} {:<14} {:>3} {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>4}", "Pos", "Team", "Pts", "P", "W", "D", "L", "GF", "GA", "GD");
    for (i, t) in result.standings.iter().enumerate() {
        println!(
            "  {:>3} {:<14} {:>3} {:>2} {:>2} {:>2} {:>2} {:>3} {:>3} {:>4}",
            i + 1, t.name, t.points, t.played, t.wins, t.draws, t.losses, t.goals_for, t.goals_against, t.goal_difference
        );
    }
    println!();
    print_leaderboard(&result.leaderboard);

    if let Some(h) = &result.highlights {
        println!(
            "  Most exact: {} ({}), most sign: {} ({}), leader avg {} pts/match",
            h.most_exact_hits.participant,
            h.most_exact_hits.value,
            h.most_sign_hits.participant,
            h.most_sign_hits.value,
            h.leader_points_per_match
        );
    }
    println!("  {}\n", result.validation);
}

fn demo_season() -> Result<Season, SeasonError> {
    let fixture = |id: u32, matchday: u32, home: &str, away: &str, goals: Option<(u32, u32)>| RawFixture {
        id: FixtureId(id),
        matchday,
        datetime: format!("2024-09-{:02}T19:00:00Z", 16 + id),
        home: home.to_string(),
        away: away.to_string(),
        home_goals: goals.map(|g| g.0),
        away_goals: goals.map(|g| g.1),
    };

    let fixtures = vec![
        fixture(1, 1, "Liverpool", "Sporting", Some((2, 0))),
        fixture(2, 1, "Leverkusen", "Salzburg", Some((1, 1))),
        fixture(3, 2, "Sporting", "Leverkusen", Some((1, 2))),
        fixture(4, 2, "Salzburg", "Liverpool", Some((0, 3))),
        fixture(5, 3, "Liverpool", "Leverkusen", None),
        fixture(6, 3, "Salzburg", "Sporting", None),
    ];

    let picks = |rows: &[(u32, u32, u32)]| -> BTreeMap<FixtureId, Prediction> {
        rows.iter()
            .map(|&(id, h, a)| (FixtureId(id), Prediction::exact(h, a)))
            .collect()
    };

    let mut predictions = RawPredictions::new();
    predictions.insert("Ana".to_string(), picks(&[(1, 2, 0), (2, 2, 1), (3, 0, 1), (4, 1, 2), (5, 2, 1), (6, 1, 1)]));
    predictions.insert("Luis".to_string(), picks(&[(1, 1, 0), (2, 1, 1), (3, 1, 1), (4, 0, 3), (5, 1, 3), (6, 0, 2)]));
    predictions.insert("Marta".to_string(), picks(&[(1, 3, 1), (2, 0, 0), (3, 1, 2), (4, 0, 2), (5, 1, 1)]));
    predictions.insert("Pablo".to_string(), picks(&[(1, 0, 1), (2, 1, 0), (3, 2, 2)]));

    Season::from_input(SeasonInput {
        fixtures,
        participants: ["Ana", "Luis", "Marta", "Pablo"].iter().map(|s| s.to_string()).collect(),
        predictions,
        teams: ["Liverpool", "Leverkusen", "Sporting", "Salzburg"]
            .iter()
            .map(|s| RawTeam { team: s.to_string() })
            .collect(),
        baseline: vec![
            BaselineEntry::new("Ana", 9),
            BaselineEntry::new("Luis", 12),
            BaselineEntry::new("Marta", 11),
            BaselineEntry::new("Pablo", 0),
        ],
    })
}
