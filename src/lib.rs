// porra-core: prediction pool engine. league table, participant leaderboard, baseline check.
// every result is a pure function of fixtures, overrides, predictions and rules.
// all computation is deterministic with no external I/O outside season loading.
//
// file map (search X.0 for structs, X.1+ for logic):
//   1.x  types.rs: primitives: FixtureId, TeamId, ParticipantId, PartialScore, Scoreline
//   2.x  sign.rs: 1/X/2 outcome of a scoreline
//   3.x  fixture.rs: fixtures, matchday filter, listing rows
//   4.x  overrides.rs: provisional edits, backup export/import
//   4.2  resolver.rs: effective result per fixture
//   5.x  prediction.rs: predictions keyed by (participant, fixture)
//   5.1  standings.rs: league table and tie-breaks
//   6.x  scoring.rs: rules, outcome tags, points per prediction
//   7.x  ranking.rs: leaderboard with competition ranks
//   8.x  validation.rs: baseline discrepancies
//   8.1  statistics.rs: leaderboard highlights
//   9.x  config.rs: rules, data file names, validation
//   9.2  season.rs: json records -> id-resolved season
//   10.x engine/: recalculation over a borrowed override snapshot

// core computation modules
pub mod fixture;
pub mod prediction;
pub mod ranking;
pub mod resolver;
pub mod scoring;
pub mod sign;
pub mod standings;
pub mod types;
pub mod validation;

// orchestration
pub mod engine;
pub mod statistics;

// integration modules
pub mod config;
pub mod overrides;
pub mod season;

// re exports for convenience
pub use engine::*;
pub use fixture::*;
pub use overrides::*;
pub use prediction::*;
pub use ranking::*;
pub use resolver::*;
pub use scoring::*;
pub use sign::*;
pub use standings::*;
pub use statistics::*;
pub use types::*;
pub use validation::*;
pub use config::{ConfigError, DataPaths, PoolConfig};
pub use season::{RawFixture, RawPredictions, RawTeam, Season, SeasonError, SeasonInput};
