use crate::foundation::config::Limits;
use crate::foundation::error::{TraceError, TraceResult};
use crate::projection::table::KnapsackProjector;
use crate::trace::{Recorder, StepRecord, Trace, TraceGenerator};

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Item {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub weight: u32,
    pub value: u32,
}

impl Item {
    pub fn new(weight: u32, value: u32) -> Self {
        Self {
            name: None,
            weight,
            value,
        }
    }

    fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("item {}", index + 1),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum KnapsackEvent {
    /// Cell `dp[row][capacity]` is about to be filled from item `item` (`row == item + 1`).
    Check {
        item: usize,
        row: usize,
        capacity: usize,
    },
    Skip {
        item: usize,
        row: usize,
        capacity: usize,
        value: u64,
    },
    Include {
        item: usize,
        row: usize,
        capacity: usize,
        value: u64,
        include_value: u64,
        exclude_value: u64,
    },
    Exclude {
        item: usize,
        row: usize,
        capacity: usize,
        value: u64,
        include_value: u64,
        exclude_value: u64,
    },
    Backtrack {
        item: usize,
        row: usize,
        capacity_before: usize,
        capacity_after: usize,
    },
    Complete {
        /// Selected item indices, ascending.
        items: Vec<usize>,
        total_value: u64,
        total_weight: u64,
    },
}

impl KnapsackEvent {
    /// Table cell this record is about.
    pub fn cell(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Check { row, capacity, .. }
            | Self::Skip { row, capacity, .. }
            | Self::Include { row, capacity, .. }
            | Self::Exclude { row, capacity, .. } => Some((row, capacity)),
            Self::Backtrack {
                row,
                capacity_before,
                ..
            } => Some((row, capacity_before)),
            Self::Complete { .. } => None,
        }
    }

    pub fn item(&self) -> Option<usize> {
        match *self {
            Self::Check { item, .. }
            | Self::Skip { item, .. }
            | Self::Include { item, .. }
            | Self::Exclude { item, .. }
            | Self::Backtrack { item, .. } => Some(item),
            Self::Complete { .. } => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct KnapsackStep {
    #[serde(flatten)]
    pub event: KnapsackEvent,
    pub message: String,
    /// Full `(items + 1) x (capacity + 1)` table after this record.
    pub table: Vec<Vec<u64>>,
    /// Items judged selected so far during backtracking, in the order they were found.
    pub selected: Vec<usize>,
    /// Capacity left for the items not yet backtracked.
    pub residual: usize,
}

impl StepRecord for KnapsackStep {
    fn action(&self) -> &'static str {
        match self.event {
            KnapsackEvent::Check { .. } => "check",
            KnapsackEvent::Skip { .. } => "skip",
            KnapsackEvent::Include { .. } => "include",
            KnapsackEvent::Exclude { .. } => "exclude",
            KnapsackEvent::Backtrack { .. } => "backtrack",
            KnapsackEvent::Complete { .. } => "complete",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

fn validate(items: &[Item], capacity: u32) -> TraceResult<()> {
    Limits::check_len("knapsack item list", items.len(), Limits::MAX_KNAPSACK_ITEMS)?;
    if capacity > Limits::MAX_KNAPSACK_CAPACITY {
        return Err(TraceError::validation(format!(
            "knapsack capacity {capacity} exceeds {}",
            Limits::MAX_KNAPSACK_CAPACITY
        )));
    }
    Ok(())
}

/// 0/1 knapsack by bottom-up DP, then backtracking from `dp[n][capacity]`.
///
/// Ties between including and excluding an item go to exclude.
#[tracing::instrument(skip(items), fields(items = items.len()))]
pub fn knapsack(items: &[Item], capacity: u32) -> TraceResult<Trace<KnapsackStep>> {
    validate(items, capacity)?;

    let cap = capacity as usize;
    let n = items.len();
    let mut dp = vec![vec![0u64; cap + 1]; n + 1];
    let mut rec = Recorder::new();

    for (item, it) in items.iter().enumerate() {
        let row = item + 1;
        let weight = it.weight as usize;
        let label = it.label(item);
        for w in 0..=cap {
            rec.push(KnapsackStep {
                event: KnapsackEvent::Check {
                    item,
                    row,
                    capacity: w,
                },
                message: format!(
                    "{label} (weight {}, value {}) at capacity {w}",
                    it.weight, it.value
                ),
                table: dp.clone(),
                selected: Vec::new(),
                residual: cap,
            });

            let exclude_value = dp[row - 1][w];
            let (event, message) = if weight > w {
                dp[row][w] = exclude_value;
                (
                    KnapsackEvent::Skip {
                        item,
                        row,
                        capacity: w,
                        value: exclude_value,
                    },
                    format!("{label} does not fit in {w}: keep {exclude_value} from above"),
                )
            } else {
                let include_value = dp[row - 1][w - weight] + u64::from(it.value);
                if include_value > exclude_value {
                    dp[row][w] = include_value;
                    (
                        KnapsackEvent::Include {
                            item,
                            row,
                            capacity: w,
                            value: include_value,
                            include_value,
                            exclude_value,
                        },
                        format!("include {label}: {include_value} beats {exclude_value}"),
                    )
                } else {
                    dp[row][w] = exclude_value;
                    (
                        KnapsackEvent::Exclude {
                            item,
                            row,
                            capacity: w,
                            value: exclude_value,
                            include_value,
                            exclude_value,
                        },
                        format!("exclude {label}: {exclude_value} is at least {include_value}"),
                    )
                }
            };
            rec.push(KnapsackStep {
                event,
                message,
                table: dp.clone(),
                selected: Vec::new(),
                residual: cap,
            });
        }
    }

    let mut residual = cap;
    let mut selected = Vec::new();
    for item in (0..n).rev() {
        let row = item + 1;
        if dp[row][residual] == dp[row - 1][residual] {
            continue;
        }
        let before = residual;
        residual -= items[item].weight as usize;
        selected.push(item);
        rec.push(KnapsackStep {
            event: KnapsackEvent::Backtrack {
                item,
                row,
                capacity_before: before,
                capacity_after: residual,
            },
            message: format!(
                "dp[{row}][{before}] differs from the row above: take {}, {residual} capacity left",
                items[item].label(item)
            ),
            table: dp.clone(),
            selected: selected.clone(),
            residual,
        });
    }

    let mut chosen = selected.clone();
    chosen.sort_unstable();
    let total_value: u64 = chosen.iter().map(|&i| u64::from(items[i].value)).sum();
    let total_weight: u64 = chosen.iter().map(|&i| u64::from(items[i].weight)).sum();
    debug_assert_eq!(total_value, dp[n][cap]);
    rec.push(KnapsackStep {
        event: KnapsackEvent::Complete {
            items: chosen.clone(),
            total_value,
            total_weight,
        },
        message: format!(
            "best value {total_value} with weight {total_weight} using items {chosen:?}"
        ),
        table: dp,
        selected: chosen,
        residual,
    });
    Ok(rec.finish())
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Knapsack {
    pub items: Vec<Item>,
    pub capacity: u32,
}

impl TraceGenerator for Knapsack {
    type Step = KnapsackStep;
    type Projector = KnapsackProjector;

    fn name(&self) -> &'static str {
        "knapsack"
    }

    fn generate(&self) -> TraceResult<Trace<KnapsackStep>> {
        knapsack(&self.items, self.capacity)
    }

    fn projector(&self) -> KnapsackProjector {
        KnapsackProjector::new(self.items.len(), self.capacity as usize)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/knapsack.rs"]
mod tests;
