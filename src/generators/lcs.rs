use crate::foundation::config::Limits;
use crate::foundation::error::TraceResult;
use crate::projection::table::LcsProjector;
use crate::trace::{Recorder, StepRecord, Trace, TraceGenerator};

/// Which neighbor a non-matching cell copied its value from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    Up,
    Left,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LcsEvent {
    Match {
        row: usize,
        col: usize,
        ch: char,
        value: u32,
    },
    Max {
        row: usize,
        col: usize,
        value: u32,
        from: Origin,
    },
    Backtrack {
        row: usize,
        col: usize,
        ch: char,
    },
    Complete {
        lcs: String,
        length: usize,
    },
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LcsStep {
    #[serde(flatten)]
    pub event: LcsEvent,
    pub message: String,
    pub table: Vec<Vec<u32>>,
    /// Suffix of the subsequence recovered so far.
    pub collected: String,
}

impl StepRecord for LcsStep {
    fn action(&self) -> &'static str {
        match self.event {
            LcsEvent::Match { .. } => "match",
            LcsEvent::Max { .. } => "max",
            LcsEvent::Backtrack { .. } => "backtrack",
            LcsEvent::Complete { .. } => "complete",
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

#[tracing::instrument(skip(a, b), fields(a_len = a.chars().count(), b_len = b.chars().count()))]
pub fn lcs(a: &str, b: &str) -> TraceResult<Trace<LcsStep>> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    Limits::check_len("first string", a.len(), Limits::MAX_LCS_LEN)?;
    Limits::check_len("second string", b.len(), Limits::MAX_LCS_LEN)?;

    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0u32; n + 1]; m + 1];
    let mut rec = Recorder::new();

    for row in 1..=m {
        for col in 1..=n {
            let (event, message) = if a[row - 1] == b[col - 1] {
                let ch = a[row - 1];
                let value = dp[row - 1][col - 1] + 1;
                dp[row][col] = value;
                (
                    LcsEvent::Match {
                        row,
                        col,
                        ch,
                        value,
                    },
                    format!("'{ch}' matches: dp[{row}][{col}] = diagonal + 1 = {value}"),
                )
            } else {
                let (up, left) = (dp[row - 1][col], dp[row][col - 1]);
                let (value, from) = if up >= left {
                    (up, Origin::Up)
                } else {
                    (left, Origin::Left)
                };
                dp[row][col] = value;
                (
                    LcsEvent::Max {
                        row,
                        col,
                        value,
                        from,
                    },
                    format!(
                        "'{}' vs '{}': dp[{row}][{col}] = max({up}, {left}) = {value}",
                        a[row - 1],
                        b[col - 1]
                    ),
                )
            };
            rec.push(LcsStep {
                event,
                message,
                table: dp.clone(),
                collected: String::new(),
            });
        }
    }

    let (mut row, mut col) = (m, n);
    let mut collected: Vec<char> = Vec::new();
    while row > 0 && col > 0 {
        if a[row - 1] == b[col - 1] {
            let ch = a[row - 1];
            collected.insert(0, ch);
            rec.push(LcsStep {
                event: LcsEvent::Backtrack { row, col, ch },
                message: format!("'{ch}' at dp[{row}][{col}] is part of the subsequence"),
                table: dp.clone(),
                collected: collected.iter().collect(),
            });
            row -= 1;
            col -= 1;
        } else if dp[row - 1][col] >= dp[row][col - 1] {
            row -= 1;
        } else {
            col -= 1;
        }
    }

    let lcs: String = collected.iter().collect();
    let length = collected.len();
    rec.push(LcsStep {
        event: LcsEvent::Complete {
            lcs: lcs.clone(),
            length,
        },
        message: format!("longest common subsequence \"{lcs}\" has length {length}"),
        table: dp,
        collected: lcs,
    });
    Ok(rec.finish())
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Lcs {
    pub a: String,
    pub b: String,
}

impl TraceGenerator for Lcs {
    type Step = LcsStep;
    type Projector = LcsProjector;

    fn name(&self) -> &'static str {
        "lcs"
    }

    fn generate(&self) -> TraceResult<Trace<LcsStep>> {
        lcs(&self.a, &self.b)
    }

    fn projector(&self) -> LcsProjector {
        LcsProjector::new(self.a.chars().count(), self.b.chars().count())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generators/lcs.rs"]
mod tests;
