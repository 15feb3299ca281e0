use crate::domain::expectations::Expectations;
use crate::domain::findings::{CheckKind, CheckReport, Finding, Statistic};
use crate::domain::model::{Dataset, PlayerPool, TeamSet};
use crate::domain::ports::Check;
use std::collections::{BTreeMap, HashMap};

const UNSPECIFIED_POSITION: &str = "(unspecified)";

/// Share of `count` in `total`, in percent. An empty pool has a 0% share.
pub fn percentage(count: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    count as f64 * 100.0 / total as f64
}

/// Per-team goalkeeper quota plus the pool-wide goalkeeper share.
pub fn verify_position_distribution(
    players: &PlayerPool,
    teams: &TeamSet,
    expectations: &Expectations,
) -> CheckReport {
    let goalkeeper = expectations.goalkeeper_position.as_str();
    let mut positions: HashMap<&str, &str> = HashMap::new();
    let mut histogram: BTreeMap<&str, usize> = BTreeMap::new();

    for player in players.players() {
        let position = player.position().unwrap_or(UNSPECIFIED_POSITION);
        if let Some(id) = player.id() {
            positions.insert(id, position);
        }
        *histogram.entry(position).or_insert(0) += 1;
    }

    let total = players.len();
    let mut statistics: Vec<Statistic> = histogram
        .iter()
        .map(|(position, count)| {
            Statistic::new(
                *position,
                format!("{} players ({:.1}%)", count, percentage(*count, total)),
            )
        })
        .collect();

    let mut findings = Vec::new();
    for team in teams.iter() {
        let goalkeepers = team
            .roster()
            .iter()
            .filter(|id| positions.get(id.as_str()) == Some(&goalkeeper))
            .count();

        if goalkeepers < expectations.goalkeepers_min || goalkeepers > expectations.goalkeepers_max {
            findings.push(Finding::GoalkeeperQuota {
                team: team.key.clone(),
                goalkeepers,
                min: expectations.goalkeepers_min,
                max: expectations.goalkeepers_max,
            });
        }
    }

    let goalkeeper_percent = percentage(histogram.get(goalkeeper).copied().unwrap_or(0), total);
    statistics.push(Statistic::new(
        "Goalkeeper percentage",
        format!(
            "{:.1}% (target: ~{}%)",
            goalkeeper_percent, expectations.goalkeeper_target_percent
        ),
    ));

    // 容許誤差邊界本身算通過
    if (goalkeeper_percent - expectations.goalkeeper_target_percent).abs()
        > expectations.goalkeeper_tolerance_percent
    {
        findings.push(Finding::GoalkeeperShare {
            percent: goalkeeper_percent,
            target: expectations.goalkeeper_target_percent,
            tolerance: expectations.goalkeeper_tolerance_percent,
        });
    }

    CheckReport::new(CheckKind::PositionDistribution, statistics, findings)
}

pub struct PositionDistributionCheck;

impl Check for PositionDistributionCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::PositionDistribution
    }

    fn run(&self, dataset: &Dataset, expectations: &Expectations) -> CheckReport {
        verify_position_distribution(&dataset.players, &dataset.teams, expectations)
    }
}
