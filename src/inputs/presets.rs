//! Built-in demonstration inputs.

use std::str::FromStr;

use crate::foundation::core::Cell;
use crate::foundation::error::TraceError;
use crate::generators::mst::{Edge, Graph};
use crate::generators::pathfinding::Maze;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MazePreset {
    /// 5x5 loop around a single wall.
    Easy,
    /// 7x7 corridors with one dead end.
    Medium,
    Hard,
    /// Goal sits behind a wall and is reached through the bottom corridor.
    CompareA,
    CompareB,
}

impl MazePreset {
    pub const ALL: [MazePreset; 5] = [
        Self::Easy,
        Self::Medium,
        Self::Hard,
        Self::CompareA,
        Self::CompareB,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::CompareA => "compare_a",
            Self::CompareB => "compare_b",
        }
    }

    pub fn maze(self) -> Maze {
        let (rows, start, goal) = match self {
            Self::Easy => (EASY, Cell::new(1, 1), Cell::new(3, 3)),
            Self::Medium => (MEDIUM, Cell::new(1, 1), Cell::new(5, 5)),
            Self::Hard => (HARD, Cell::new(1, 1), Cell::new(7, 7)),
            Self::CompareA => (COMPARE_A, Cell::new(1, 1), Cell::new(1, 5)),
            Self::CompareB => (COMPARE_B, Cell::new(1, 1), Cell::new(7, 7)),
        };
        Maze {
            grid: parse_rows(rows),
            start,
            goal,
        }
    }
}

const EASY: &[&str] = &["11111", "10001", "10101", "10001", "11111"];

const MEDIUM: &[&str] = &[
    "1111111", "1000101", "1010101", "1010001", "1011101", "1000001", "1111111",
];

const HARD: &[&str] = &[
    "111111111",
    "100010001",
    "101010101",
    "101000101",
    "101111101",
    "100000001",
    "111011101",
    "100000001",
    "111111111",
];

const COMPARE_A: &[&str] = &[
    "1111111", "1001001", "1001001", "1011001", "1000001", "1111101", "1111111",
];

const COMPARE_B: &[&str] = &[
    "111111111",
    "101000101",
    "101010101",
    "100010001",
    "111011101",
    "100000101",
    "101110101",
    "100000001",
    "111111111",
];

fn parse_rows(rows: &[&str]) -> Vec<Vec<u8>> {
    rows.iter()
        .map(|r| r.bytes().map(|b| b - b'0').collect())
        .collect()
}

impl FromStr for MazePreset {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| unknown("maze", s, Self::ALL.map(Self::name)))
    }
}

/// Network-building scenarios for the spanning tree algorithms.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphPreset {
    /// Fibre links between six cities.
    Internet,
    /// Power grid joining two plants and four districts.
    Power,
    /// Toll roads between seven towns.
    Road,
}

impl GraphPreset {
    pub const ALL: [GraphPreset; 3] = [Self::Internet, Self::Power, Self::Road];

    pub fn name(self) -> &'static str {
        match self {
            Self::Internet => "internet",
            Self::Power => "power",
            Self::Road => "road",
        }
    }

    pub fn graph(self) -> Graph {
        let (nodes, edges) = match self {
            Self::Internet => ("ABCDEF", INTERNET),
            Self::Power => ("ABCDEF", POWER),
            Self::Road => ("ABCDEFG", ROAD),
        };
        Graph {
            nodes: nodes.chars().map(String::from).collect(),
            edges: edges
                .iter()
                .map(|&(from, to, w)| Edge::new(from, to, w))
                .collect(),
            start: None,
        }
    }
}

type EdgeList = &'static [(&'static str, &'static str, u32)];

const INTERNET: EdgeList = &[
    ("A", "B", 4),
    ("A", "C", 8),
    ("A", "D", 6),
    ("B", "D", 5),
    ("B", "E", 3),
    ("C", "D", 3),
    ("C", "F", 4),
    ("D", "E", 7),
    ("E", "F", 6),
];

const POWER: EdgeList = &[
    ("A", "B", 10),
    ("A", "C", 6),
    ("A", "F", 5),
    ("B", "C", 7),
    ("B", "D", 8),
    ("C", "D", 4),
    ("C", "E", 9),
    ("C", "F", 6),
    ("D", "E", 5),
    ("E", "F", 7),
];

const ROAD: EdgeList = &[
    ("A", "B", 7),
    ("A", "C", 5),
    ("A", "D", 9),
    ("B", "D", 8),
    ("B", "E", 5),
    ("C", "D", 6),
    ("C", "F", 7),
    ("D", "E", 6),
    ("D", "F", 8),
    ("D", "G", 9),
    ("E", "G", 6),
    ("F", "G", 4),
];

impl FromStr for GraphPreset {
    type Err = TraceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| unknown("graph", s, Self::ALL.map(Self::name)))
    }
}

fn unknown<const N: usize>(kind: &str, name: &str, known: [&str; N]) -> TraceError {
    TraceError::validation(format!(
        "unknown {kind} preset '{name}' (expected one of: {})",
        known.join(", ")
    ))
}

#[cfg(test)]
#[path = "../../tests/unit/inputs/presets.rs"]
mod tests;
