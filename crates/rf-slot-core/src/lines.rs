//! Winning combination scanning over a single line of symbol codes
//!
//! A scan runs three passes over a working copy of the line:
//!
//! 1. Triples of the same winning symbol, one match per start index.
//! 2. Wildcard matches: a wildcard sandwiched between two equal winning
//!    symbols (which also rewrites the wildcard in the working copy), and
//!    runs extended outwards from the wildcard towards each winning neighbour.
//! 3. Degenerate full-line matches when every cell is losing, or every cell
//!    is a wildcard.
//!
//! Results are concatenated in pass order and never deduplicated.

use serde::{Deserialize, Serialize};

use crate::symbols::{LOSING_SYMBOLS, SymbolCode, WILDCARD, is_losing, is_wildcard, is_winning};

/// A detected combination: symbol plus the line indices it covers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(SymbolCode, Vec<usize>)", into = "(SymbolCode, Vec<usize>)")]
pub struct Match {
    pub symbol: SymbolCode,
    pub indices: Vec<usize>,
}

impl Match {
    pub fn new(symbol: SymbolCode, indices: Vec<usize>) -> Self {
        Self { symbol, indices }
    }
}

impl From<(SymbolCode, Vec<usize>)> for Match {
    fn from((symbol, indices): (SymbolCode, Vec<usize>)) -> Self {
        Self { symbol, indices }
    }
}

impl From<Match> for (SymbolCode, Vec<usize>) {
    fn from(m: Match) -> Self {
        (m.symbol, m.indices)
    }
}

/// Result of scanning a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanOutcome {
    /// Matches in pass order
    pub matches: Vec<Match>,
    /// Working copy after wildcard resolution
    pub line: Vec<SymbolCode>,
}

/// Single-use scanner holding the working copy of a line
#[derive(Debug, Clone)]
pub struct LineScanner {
    working: Vec<SymbolCode>,
    matches: Vec<Match>,
}

impl LineScanner {
    pub fn new(line: &[SymbolCode]) -> Self {
        Self {
            working: line.to_vec(),
            matches: Vec::new(),
        }
    }

    /// Run all passes and return the matches with the resolved line
    pub fn scan(mut self) -> ScanOutcome {
        self.triple_runs();
        self.wildcard_matches();
        self.full_line();

        log::debug!(
            "Scanned line of {} symbols: {} matches",
            self.working.len(),
            self.matches.len()
        );

        ScanOutcome {
            matches: self.matches,
            line: self.working,
        }
    }

    fn record(&mut self, symbol: SymbolCode, indices: Vec<usize>) {
        log::trace!("Match {} at {:?}", symbol, indices);
        self.matches.push(Match::new(symbol, indices));
    }

    fn triple_runs(&mut self) {
        let starts: Vec<(usize, SymbolCode)> = self
            .working
            .windows(3)
            .enumerate()
            .filter(|(_, w)| is_winning(w[0]) && w[0] == w[1] && w[0] == w[2])
            .map(|(i, w)| (i, w[0]))
            .collect();

        for (i, symbol) in starts {
            self.record(symbol, vec![i, i + 1, i + 2]);
        }
    }

    fn wildcard_matches(&mut self) {
        let len = self.working.len();

        for i in 0..len {
            if !is_wildcard(self.working[i]) {
                continue;
            }

            // Sandwich: the wildcard takes the neighbours' value in the working copy
            if i > 0 && i + 1 < len {
                let prev = self.working[i - 1];
                let next = self.working[i + 1];
                if prev == next && is_winning(prev) {
                    self.working[i] = prev;
                    self.record(prev, vec![i - 1, i, i + 1]);
                }
            }

            let mut neighbours = Vec::with_capacity(2);
            if i > 0 {
                neighbours.push(self.working[i - 1]);
            }
            if i + 1 < len {
                neighbours.push(self.working[i + 1]);
            }

            for symbol in neighbours {
                if is_winning(symbol) {
                    let run = self.run_through(i, symbol);
                    self.record(symbol, run);
                }
            }
        }
    }

    /// Contiguous indices around `origin` holding `symbol` or a wildcard.
    /// `origin` itself is always included.
    fn run_through(&self, origin: usize, symbol: SymbolCode) -> Vec<usize> {
        let extends = |code: SymbolCode| code == WILDCARD || code == symbol;

        let mut run: Vec<usize> = (0..origin)
            .rev()
            .take_while(|&j| extends(self.working[j]))
            .collect();
        run.reverse();
        run.push(origin);
        run.extend(
            (origin + 1..self.working.len()).take_while(|&j| extends(self.working[j])),
        );
        run
    }

    /// An empty line counts as all-losing.
    fn full_line(&mut self) {
        let indices: Vec<usize> = (0..self.working.len()).collect();

        if self.working.iter().all(|&code| is_losing(code)) {
            self.record(LOSING_SYMBOLS[0], indices);
        } else if self.working.iter().all(|&code| is_wildcard(code)) {
            self.record(WILDCARD, indices);
        }
    }
}

/// Scan a line without touching the caller's data
pub fn scan_line(line: &[SymbolCode]) -> ScanOutcome {
    LineScanner::new(line).scan()
}

/// Named entry point that resolves wildcards in place
pub struct WinningCombinations;

impl WinningCombinations {
    /// Scan `line` and write the resolved working copy back into it
    pub fn call(line: &mut [SymbolCode]) -> Vec<Match> {
        let outcome = scan_line(line);
        line.copy_from_slice(&outcome.line);
        outcome.matches
    }
}
