// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Mock attendance stamps and sidebar quotes.

use rand::seq::SliceRandom;

/// One cell on the attendance board.
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    pub id: u32,
    pub achieved: bool,
    pub date: Option<String>,
}

/// The mock attendance record: ten days, first three stamped.
pub fn initial_stamps() -> Vec<Stamp> {
    (1..=10)
        .map(|i| Stamp {
            id: i,
            achieved: i <= 3,
            date: (i <= 3).then(|| format!("2023-10-{}", 23 + i)),
        })
        .collect()
}

static QUOTES: [&str; 3] = [
    "작은 점이 모여 선이 됩니다.",
    "오늘 켠 불빛이 내일의 별이 됩니다.",
    "혼자가 아니에요, 우리가 함께 공부하고 있습니다.",
];

/// A quote for the sidebar, picked once per run.
pub fn pick_quote() -> &'static str {
    QUOTES
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or(QUOTES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_three_stamps_are_achieved_with_dates() {
        let stamps = initial_stamps();
        assert_eq!(stamps.len(), 10);
        assert_eq!(stamps.iter().filter(|s| s.achieved).count(), 3);
        assert_eq!(stamps[0].date.as_deref(), Some("2023-10-24"));
        assert_eq!(stamps[2].date.as_deref(), Some("2023-10-26"));
        assert!(stamps[3].date.is_none());
    }

    #[test]
    fn quote_comes_from_the_pool() {
        let quote = pick_quote();
        assert!(QUOTES.contains(&quote));
    }
}
