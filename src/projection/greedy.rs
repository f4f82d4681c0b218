use crate::generators::greedy::{ActivityEvent, ActivityStep, CoinCount, CoinEvent, CoinStep};
use crate::projection::Projector;
use crate::trace::StepRecord;

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CoinView {
    pub action: Option<&'static str>,
    /// Denomination under consideration.
    pub coin: Option<u32>,
    pub remaining: u64,
    pub taken: Vec<CoinCount>,
    pub total_coins: u64,
    pub exact: Option<bool>,
}

#[derive(Clone, Copy, Debug)]
pub struct CoinProjector {
    amount: u32,
}

impl CoinProjector {
    pub fn new(amount: u32) -> Self {
        Self { amount }
    }
}

impl Projector for CoinProjector {
    type Step = CoinStep;
    type View = CoinView;

    fn blank(&self) -> CoinView {
        CoinView {
            action: None,
            coin: None,
            remaining: u64::from(self.amount),
            taken: Vec::new(),
            total_coins: 0,
            exact: None,
        }
    }

    fn project(&self, step: &CoinStep) -> CoinView {
        let (coin, exact) = match step.event {
            CoinEvent::Select { coin } | CoinEvent::Take { coin, .. } | CoinEvent::Skip { coin } => {
                (Some(coin), None)
            }
            CoinEvent::Complete { exact, .. } => (None, Some(exact)),
        };
        CoinView {
            action: Some(step.action()),
            coin,
            remaining: step.remaining,
            taken: step.taken.clone(),
            total_coins: step.total_coins,
            exact,
        }
    }

    fn apply(&self, view: &mut CoinView, step: &CoinStep) {
        view.action = Some(step.action());
        match step.event {
            CoinEvent::Select { coin } | CoinEvent::Skip { coin } => view.coin = Some(coin),
            CoinEvent::Take { coin, count } => {
                view.coin = Some(coin);
                view.remaining -= u64::from(coin) * count;
                view.total_coins += count;
                view.taken.push(CoinCount { coin, count });
            }
            CoinEvent::Complete { exact, .. } => {
                view.coin = None;
                view.exact = Some(exact);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct ActivityView {
    pub action: Option<&'static str>,
    pub order: Vec<usize>,
    pub current: Option<usize>,
    pub selected: Vec<usize>,
    pub last_finish: Option<u32>,
    pub finished: bool,
}

#[derive(Clone, Debug)]
pub struct ActivityProjector {
    order: Vec<usize>,
}

impl ActivityProjector {
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }
}

impl Projector for ActivityProjector {
    type Step = ActivityStep;
    type View = ActivityView;

    fn blank(&self) -> ActivityView {
        ActivityView {
            action: None,
            order: self.order.clone(),
            current: None,
            selected: Vec::new(),
            last_finish: None,
            finished: false,
        }
    }

    fn project(&self, step: &ActivityStep) -> ActivityView {
        let current = match step.event {
            ActivityEvent::Select { index, .. } | ActivityEvent::Reject { index, .. } => {
                Some(index)
            }
            ActivityEvent::Complete { .. } => None,
        };
        ActivityView {
            action: Some(step.action()),
            order: step.order.clone(),
            current,
            selected: step.selected.clone(),
            last_finish: step.last_finish,
            finished: current.is_none(),
        }
    }

    fn apply(&self, view: &mut ActivityView, step: &ActivityStep) {
        view.action = Some(step.action());
        match step.event {
            ActivityEvent::Select { index, finish, .. } => {
                view.current = Some(index);
                view.selected.push(index);
                view.last_finish = Some(finish);
            }
            ActivityEvent::Reject { index, .. } => view.current = Some(index),
            ActivityEvent::Complete { .. } => {
                view.current = None;
                view.finished = true;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/greedy.rs"]
mod tests;
