//! Canonical seed fixtures
//!
//! The seed case gets the day key of whatever instant it is loaded on,
//! so a freshly seeded store always has a "today" case.

use chrono::{DateTime, Utc};

use jury_core::{day_key, Case, Evidence, Stance, Verdict};

/// The demo case loaded into a fresh store
pub fn seed_case(now: DateTime<Utc>) -> Case {
    Case {
        id: day_key(now),
        title: "The Case of the Accidental Permaban".to_string(),
        description: "The defendant (a junior mod) accidentally banned the subreddit's most \
                      popular artist because their dog stepped on the \"Ban\" key. The artist \
                      is suing for 1 million lost Karma."
            .to_string(),
        plaintiff: "/u/ArtisticLegend".to_string(),
        defendant: "/u/ClumsyMod".to_string(),
        evidence: vec![
            Evidence::new(
                "ev-seed-1",
                "Exhibit A: The Keyboard",
                "A high-resolution photo showing a single Golden Retriever hair wedged under \
                 the \"Enter\" key.",
            ),
            Evidence::new(
                "ev-seed-2",
                "Witness Testimony",
                "\"I heard a sharp bark, a frantic clicking sound, and then u/ClumsyMod sobbing \
                 loudly.\" - The Next Door Neighbor",
            ),
            Evidence::new(
                "ev-seed-3",
                "Character Note",
                "The defendant's profile shows they have been a member of r/GoodBoys for 8 years.",
            ),
        ],
        created_at: now.timestamp_millis(),
    }
}

/// Two historical verdicts on the seed case, vote counts included
pub fn seed_verdicts(case_id: &str) -> Vec<Verdict> {
    vec![
        Verdict {
            id: "v-seed-1".to_string(),
            case_id: case_id.to_string(),
            author: "LegalBeagle".to_string(),
            stance: Stance::Innocent,
            text: "It was a \"Paw-sitively\" honest mistake. No intent to harm was established."
                .to_string(),
            votes: 42,
        },
        Verdict {
            id: "v-seed-2".to_string(),
            case_id: case_id.to_string(),
            author: "KarmaCop".to_string(),
            stance: Stance::Guilty,
            text: "Gross negligence! A mod's keyboard is a loaded weapon. 10 years of community \
                   service in /r/new."
                .to_string(),
            votes: 15,
        },
    ]
}
