//! Property-based tests for the table and leaderboard math.
//!
//! These tests verify invariants hold under random fixtures, overrides and predictions.

use porra_core::*;
use proptest::prelude::*;

const TEAMS: [&str; 6] = ["Aston Villa", "Benfica", "Celtic", "Dortmund", "Estrela", "Feyenoord"];

// Strategies for generating test data
fn goals_strategy() -> impl Strategy<Value = Option<u32>> {
    prop_oneof![1 => Just(None), 4 => (0u32..6).prop_map(Some)]
}

// (home index, away index, home goals, away goals). index 6 = a team not in the list
fn fixture_strategy() -> impl Strategy<Value = (usize, usize, Option<u32>, Option<u32>)> {
    (0usize..7, 0usize..7, goals_strategy(), goals_strategy())
}

fn team_list() -> Vec<Team> {
    TEAMS
        .iter()
        .enumerate()
        .map(|(i, name)| Team { id: TeamId(i as u32), name: name.to_string() })
        .collect()
}

fn build_fixtures(rows: &[(usize, usize, Option<u32>, Option<u32>)]) -> Vec<Fixture> {
    let resolve = |i: usize| -> (String, Option<TeamId>) {
        match TEAMS.get(i) {
            Some(name) => (name.to_string(), Some(TeamId(i as u32))),
            None => ("Unlisted".to_string(), None),
        }
    };
    rows.iter()
        .enumerate()
        .map(|(n, &(h, a, hg, ag))| {
            let (home, home_team) = resolve(h);
            let (away, away_team) = resolve(a);
            Fixture {
                id: FixtureId(n as u32 + 1),
                matchday: (n / 3) as u32 + 1,
                kickoff: chrono::DateTime::from_timestamp(1_726_000_000 + n as i64 * 86_400, 0).unwrap(),
                home,
                away,
                home_team,
                away_team,
                official: PartialScore::new(hg, ag),
            }
        })
        .collect()
}

fn build_overrides(fixture_count: usize, edits: &[(usize, Option<u32>, Option<u32>)]) -> OverrideSet {
    let mut overrides = OverrideSet::new();
    if fixture_count == 0 {
        return overrides;
    }
    for &(idx, h, a) in edits {
        let id = FixtureId((idx % fixture_count) as u32 + 1);
        overrides.insert(id, ScoreOverride::new(h, a));
    }
    overrides
}

proptest! {
    /// Sign is defined exactly when both sides are present
    #[test]
    fn sign_defined_iff_both_sides(home in goals_strategy(), away in goals_strategy()) {
        let s = sign(home, away);
        prop_assert_eq!(s.is_some(), home.is_some() && away.is_some());
        if let (Some(h), Some(a)) = (home, away) {
            let expected = if h > a { Sign::HomeWin } else if h == a { Sign::Draw } else { Sign::AwayWin };
            prop_assert_eq!(s, Some(expected));
        }
    }

    /// Recomputing from identical inputs gives identical tables
    #[test]
    fn standings_deterministic(
        rows in proptest::collection::vec(fixture_strategy(), 0..30),
        edits in proptest::collection::vec((0usize..30, goals_strategy(), goals_strategy()), 0..8),
    ) {
        let teams = team_list();
        let fixtures = build_fixtures(&rows);
        let overrides = build_overrides(fixtures.len(), &edits);

        let first = compute_standings(&teams, &fixtures, &overrides);
        let second = compute_standings(&teams, &fixtures, &overrides);
        prop_assert_eq!(first, second);
    }

    /// Every played fixture between two listed teams adds exactly two results
    #[test]
    fn results_sum_to_twice_played(
        rows in proptest::collection::vec(fixture_strategy(), 0..30),
        edits in proptest::collection::vec((0usize..30, goals_strategy(), goals_strategy()), 0..8),
    ) {
        let teams = team_list();
        let fixtures = build_fixtures(&rows);
        let overrides = build_overrides(fixtures.len(), &edits);

        let table = compute_standings(&teams, &fixtures, &overrides);
        let results: u32 = table.iter().map(|t| t.wins + t.draws + t.losses).sum();
        let played = played_results(&fixtures, &overrides)
            .filter(|(f, _)| f.known_teams().is_some())
            .count() as u32;
        prop_assert_eq!(results, 2 * played);

        let total_played: u32 = table.iter().map(|t| t.played).sum();
        prop_assert_eq!(total_played, 2 * played);
    }

    /// Goal difference identity and table ordering hold after every computation
    #[test]
    fn goal_difference_and_order(
        rows in proptest::collection::vec(fixture_strategy(), 0..30),
    ) {
        let teams = team_list();
        let fixtures = build_fixtures(&rows);
        let table = compute_standings(&teams, &fixtures, &OverrideSet::new());

        prop_assert_eq!(table.len(), teams.len());
        for t in &table {
            prop_assert_eq!(t.goal_difference, i64::from(t.goals_for) - i64::from(t.goals_against));
            prop_assert_eq!(t.points, 3 * t.wins + t.draws);
        }
        for pair in table.windows(2) {
            prop_assert!(compare_standings(&pair[0], &pair[1]) != std::cmp::Ordering::Greater);
            if pair[0].points == pair[1].points {
                prop_assert!(pair[0].goal_difference >= pair[1].goal_difference);
            }
        }
    }

    /// Competition ranks: rank = 1 + number of entries strictly ahead
    #[test]
    fn competition_rank_counts_strictly_ahead(
        points in proptest::collection::vec(0u32..20, 0..25),
    ) {
        let stats: Vec<ParticipantStat> = points
            .iter()
            .enumerate()
            .map(|(i, &p)| ParticipantStat {
                participant_id: ParticipantId(i as u32),
                name: format!("p{}", i),
                total_points: p,
                exact_hits: 0,
                sign_hits: 0,
                played_matches: 0,
            })
            .collect();

        let ranked = rank_participants(stats);
        for r in &ranked {
            let ahead = ranked.iter().filter(|o| o.stat.total_points > r.stat.total_points).count();
            prop_assert_eq!(r.rank, ahead + 1);
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].stat.total_points >= pair[1].stat.total_points);
        }
    }

    /// Points come only from sign and exact bonuses; exact implies the full bonus
    #[test]
    fn scoring_bounded_and_consistent(
        actual in (goals_strategy(), goals_strategy()),
        pred in (goals_strategy(), goals_strategy()),
        sign_pts in 0u32..5,
        exact_pts in 0u32..5,
    ) {
        let rules = ScoringRules::new(sign_pts, exact_pts);
        let prediction = Prediction::new(pred.0, pred.1);
        let scored = score_prediction(PartialScore::new(actual.0, actual.1), Some(&prediction), &rules);

        prop_assert!(scored.points <= rules.max_points());
        prop_assert_eq!(scored.points, rules.points_for(scored.outcome));
        if actual.0.is_none() || actual.1.is_none() {
            prop_assert_eq!(scored.points, 0);
        }
        if pred.0.is_none() {
            prop_assert_eq!(scored.outcome, ScoreOutcome::NoPrediction);
        }
        if scored.outcome == ScoreOutcome::ExactScore {
            prop_assert_eq!(pred, actual);
        }
    }
}
