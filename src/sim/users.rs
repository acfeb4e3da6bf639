// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Simulated "who else is studying" presence data.
//!
//! The light map shows other students as glowing dots. There is no real
//! presence service; a `UserProvider` hands the map a batch of locations,
//! and the production implementation fabricates them with random positions
//! and a handful of study messages.

use rand::seq::SliceRandom;
use rand::Rng;

/// One remote student on the light map. Coordinates are percentages of the
/// map area (0-100).
#[derive(Debug, Clone, PartialEq)]
pub struct UserLocation {
    pub id: String,
    pub x: f32,
    pub y: f32,
    pub active: bool,
    pub message: Option<String>,
}

/// Source of presence data for the light map. The map re-queries this each
/// time it opens.
pub trait UserProvider {
    fn users(&mut self) -> Vec<UserLocation>;
}

static STUDY_MESSAGES: [&str; 12] = [
    "토익 공부중",
    "미적분학",
    "중간고사",
    "졸려요",
    "코딩 테스트",
    "자격증",
    "수능 대박",
    "빡공",
    "잠깐 휴식",
    "달리는 중",
    "밤샘각",
    "파이팅",
];

/// Fabricates a fresh crowd of students on every query.
pub struct SimulatedUsers {
    count: usize,
}

impl SimulatedUsers {
    pub fn new() -> Self {
        Self { count: 20 }
    }
}

impl Default for SimulatedUsers {
    fn default() -> Self {
        Self::new()
    }
}

impl UserProvider for SimulatedUsers {
    fn users(&mut self) -> Vec<UserLocation> {
        let mut rng = rand::thread_rng();

        // Keep dots away from the map edges (10-90%).
        let mut users: Vec<UserLocation> = (0..self.count)
            .map(|i| UserLocation {
                id: format!("user-{}", i),
                x: rng.gen_range(10.0..90.0),
                y: rng.gen_range(10.0..90.0),
                active: rng.gen_bool(0.8),
                message: None,
            })
            .collect();

        // 5 or 6 of them are saying something.
        let mut indices: Vec<usize> = (0..users.len()).collect();
        indices.shuffle(&mut rng);
        let message_count = rng.gen_range(5..=6).min(users.len());
        for &i in indices.iter().take(message_count) {
            let message = STUDY_MESSAGES[rng.gen_range(0..STUDY_MESSAGES.len())];
            users[i].message = Some(message.to_string());
        }

        users
    }
}
