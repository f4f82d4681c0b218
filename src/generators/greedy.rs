//! Greedy coin change and activity selection.
//!
//! Neither generator repairs the greedy choice. Coin change over a non-canonical denomination
//! set (`{4, 3, 1}` for 6) pays with more coins than necessary, and the trace shows exactly that.

use crate::foundation::config::Limits;
use crate::foundation::error::{TraceError, TraceResult};
use crate::projection::greedy::{ActivityProjector, CoinProjector};
use crate::trace::{Recorder, StepRecord, Trace, TraceGenerator};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoinCount {
    pub coin: u32,
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum CoinEvent {
    Select { coin: u32 },
    /// `count` whole coins of `coin` taken in one record.
    Take { coin: u32, count: u64 },
    Skip { coin: u32 },
    Complete { coins: u64, exact: bool },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoinStep {
    #[serde(flatten)]
    pub event: CoinEvent,
    pub message: String,
    pub remaining: u64,
    /// Coins taken so far, largest denomination first.
    pub taken: Vec<CoinCount>,
    pub total_coins: u64,
}

impl StepRecord for CoinStep {
    fn action(&self) -> &'static str {
        match self.event {
            CoinEvent::Select { .. } => "select",
            CoinEvent::Take { .. } => "take",
            CoinEvent::Skip { .. } => "skip",
            CoinEvent::Complete { .. } => "complete",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

fn validate_coins(coins: &[u32], amount: u32) -> TraceResult<()> {
    if coins.is_empty() {
        return Err(TraceError::validation(
            "coin change needs at least one denomination",
        ));
    }
    Limits::check_len("denomination set", coins.len(), Limits::MAX_COINS)?;
    if coins.contains(&0) {
        return Err(TraceError::validation("denominations must be positive"));
    }
    if amount > Limits::MAX_COIN_AMOUNT {
        return Err(TraceError::validation(format!(
            "amount {amount} exceeds {}",
            Limits::MAX_COIN_AMOUNT
        )));
    }
    Ok(())
}

/// Largest-denomination-first change making.
#[tracing::instrument(skip(coins), fields(denominations = coins.len()))]
pub fn coin_change(coins: &[u32], amount: u32) -> TraceResult<Trace<CoinStep>> {
    validate_coins(coins, amount)?;

    let mut denominations = coins.to_vec();
    denominations.sort_unstable_by(|a, b| b.cmp(a));
    denominations.dedup();

    let mut rec = Recorder::new();
    let mut remaining = u64::from(amount);
    let mut taken: Vec<CoinCount> = Vec::new();
    let mut total_coins = 0u64;

    for coin in denominations {
        if remaining == 0 {
            break;
        }
        rec.push(CoinStep {
            event: CoinEvent::Select { coin },
            message: format!("consider coin {coin} with {remaining} left to pay"),
            remaining,
            taken: taken.clone(),
            total_coins,
        });

        let value = u64::from(coin);
        if value <= remaining {
            let count = remaining / value;
            remaining -= count * value;
            total_coins += count;
            taken.push(CoinCount { coin, count });
            rec.push(CoinStep {
                event: CoinEvent::Take { coin, count },
                message: format!("take {count} x {coin}, {remaining} left"),
                remaining,
                taken: taken.clone(),
                total_coins,
            });
        } else {
            rec.push(CoinStep {
                event: CoinEvent::Skip { coin },
                message: format!("coin {coin} is larger than {remaining}: skip"),
                remaining,
                taken: taken.clone(),
                total_coins,
            });
        }
    }

    let exact = remaining == 0;
    let message = if exact {
        format!("paid {amount} with {total_coins} coin(s)")
    } else {
        format!("{remaining} of {amount} cannot be paid with these coins")
    };
    rec.push(CoinStep {
        event: CoinEvent::Complete {
            coins: total_coins,
            exact,
        },
        message,
        remaining,
        taken,
        total_coins,
    });
    Ok(rec.finish())
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Activity {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub start: u32,
    pub finish: u32,
}

impl Activity {
    pub fn new(start: u32, finish: u32) -> Self {
        Self {
            name: None,
            start,
            finish,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActivityEvent {
    /// `index` is the position in the finish-sorted order, `activity` the input index.
    Select {
        index: usize,
        activity: usize,
        start: u32,
        finish: u32,
    },
    Reject {
        index: usize,
        activity: usize,
        start: u32,
        finish: u32,
    },
    Complete {
        chosen: Vec<usize>,
        count: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivityStep {
    #[serde(flatten)]
    pub event: ActivityEvent,
    pub message: String,
    /// Input indices in finish-time order.
    pub order: Vec<usize>,
    /// Selected positions in the finish-sorted order.
    pub selected: Vec<usize>,
    pub last_finish: Option<u32>,
}

impl StepRecord for ActivityStep {
    fn action(&self) -> &'static str {
        match self.event {
            ActivityEvent::Select { .. } => "select",
            ActivityEvent::Reject { .. } => "reject",
            ActivityEvent::Complete { .. } => "complete",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Input indices sorted by finish time, ties kept in input order.
pub(crate) fn finish_order(activities: &[Activity]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..activities.len()).collect();
    order.sort_by_key(|&i| activities[i].finish);
    order
}

/// Earliest-finish-first interval scheduling.
#[tracing::instrument(skip(activities), fields(activities = activities.len()))]
pub fn activity_selection(activities: &[Activity]) -> TraceResult<Trace<ActivityStep>> {
    Limits::check_len("activity list", activities.len(), Limits::MAX_ACTIVITIES)?;
    if let Some(i) = activities.iter().position(|a| a.start > a.finish) {
        return Err(TraceError::validation(format!(
            "activity {i} starts after it finishes"
        )));
    }

    let order = finish_order(activities);
    let mut rec = Recorder::new();
    let mut selected = Vec::new();
    let mut last_finish: Option<u32> = None;

    for (index, &activity) in order.iter().enumerate() {
        let Activity { start, finish, .. } = activities[activity];
        let compatible = last_finish.is_none_or(|f| start >= f);
        let (event, message) = if compatible {
            selected.push(index);
            last_finish = Some(finish);
            (
                ActivityEvent::Select {
                    index,
                    activity,
                    start,
                    finish,
                },
                format!("select activity {activity} [{start}, {finish})"),
            )
        } else {
            (
                ActivityEvent::Reject {
                    index,
                    activity,
                    start,
                    finish,
                },
                format!(
                    "reject activity {activity} [{start}, {finish}): overlaps until {}",
                    last_finish.unwrap_or_default()
                ),
            )
        };
        rec.push(ActivityStep {
            event,
            message,
            order: order.clone(),
            selected: selected.clone(),
            last_finish,
        });
    }

    let count = selected.len();
    rec.push(ActivityStep {
        event: ActivityEvent::Complete {
            chosen: selected.clone(),
            count,
        },
        message: format!("{count} compatible activities selected"),
        order,
        selected,
        last_finish,
    });
    Ok(rec.finish())
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoinChange {
    pub coins: Vec<u32>,
    pub amount: u32,
}

impl TraceGenerator for CoinChange {
    type Step = CoinStep;
    type Projector = CoinProjector;

    fn name(&self) -> &'static str {
        "coin_change"
    }

    fn generate(&self) -> TraceResult<Trace<CoinStep>> {
        coin_change(&self.coins, self.amount)
    }

    fn projector(&self) -> CoinProjector {
        CoinProjector::new(self.amount)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActivitySelection {
    pub activities: Vec<Activity>,
}

impl TraceGenerator for ActivitySelection {
    type Step = ActivityStep;
    type Projector = ActivityProjector;

    fn name(&self) -> &'static str {
        "activity_selection"
    }

    fn generate(&self) -> TraceResult<Trace<ActivityStep>> {
        activity_selection(&self.activities)
    }

    fn projector(&self) -> ActivityProjector {
        ActivityProjector::new(finish_order(&self.activities))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/greedy.rs"]
mod tests;
