//! Client-side game state machine.
//!
//! The presentation flow is a pure transition core over four phases:
//! `Unregistered → Registered → Answering → Answered`. Transport lives in
//! [`crate::client::api`]; nothing here performs I/O, so every transition is
//! unit-testable.

use std::collections::HashSet;

use rand::Rng;

use crate::domain::{Question, QuizRound, User, pick_next_question};

/// Presentation phase of the quiz session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Collecting a username; nothing loaded yet.
    Unregistered,
    /// Registration succeeded; no question on screen yet.
    Registered,
    /// A round is displayed and an option may be selected.
    Answering {
        /// The current round payload.
        round: QuizRound,
        /// Currently highlighted option; selection alone does not submit.
        selected: Option<String>,
    },
    /// The submission outcome is displayed.
    Answered {
        /// The round that was played.
        round: QuizRound,
        /// The submitted option.
        selected: String,
        /// Whether the submission was correct.
        is_correct: bool,
    },
}

/// Ephemeral client session state. Not persisted anywhere.
#[derive(Debug)]
pub struct GameState {
    dataset: Vec<Question>,
    used: HashSet<String>,
    phase: Phase,
    score: Option<User>,
    referrer: Option<User>,
}

impl GameState {
    /// Start an unregistered session over a fetched dataset.
    pub fn new(dataset: Vec<Question>) -> Self {
        Self {
            dataset,
            used: HashSet::new(),
            phase: Phase::Unregistered,
            score: None,
            referrer: None,
        }
    }

    /// Current presentation phase.
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Latest fetched user record, if any.
    pub fn score(&self) -> Option<&User> {
        self.score.as_ref()
    }

    /// Referring user resolved from an inbound challenge link.
    pub fn referrer(&self) -> Option<&User> {
        self.referrer.as_ref()
    }

    /// Record the resolved referrer for display while unregistered.
    pub fn show_referrer(&mut self, user: User) {
        self.referrer = Some(user);
    }

    /// Mark registration as complete.
    pub fn registered(&mut self) {
        if self.phase == Phase::Unregistered {
            self.phase = Phase::Registered;
        }
    }

    /// Refresh the cached user record after a score fetch.
    pub fn update_score(&mut self, user: User) {
        self.score = Some(user);
    }

    /// Pick the next round and enter `Answering`.
    ///
    /// Returns `false` when the dataset is empty; the phase is left
    /// unchanged so the caller can surface the gap instead of crashing on a
    /// missing question.
    pub fn next_round<R: Rng>(&mut self, rng: &mut R) -> bool {
        match pick_next_question(&self.dataset, &mut self.used, rng) {
            Some(round) => {
                self.phase = Phase::Answering {
                    round,
                    selected: None,
                };
                true
            }
            None => false,
        }
    }

    /// Highlight an option. Only valid while answering; returns whether the
    /// selection was applied.
    pub fn select(&mut self, option: impl Into<String>) -> bool {
        if let Phase::Answering { selected, .. } = &mut self.phase {
            *selected = Some(option.into());
            true
        } else {
            false
        }
    }

    /// The option currently selected for submission, if any.
    pub fn selected_option(&self) -> Option<&str> {
        match &self.phase {
            Phase::Answering { selected, .. } => selected.as_deref(),
            Phase::Answered { selected, .. } => Some(selected),
            _ => None,
        }
    }

    /// The round currently on screen, if any.
    pub fn current_round(&self) -> Option<&QuizRound> {
        match &self.phase {
            Phase::Answering { round, .. } | Phase::Answered { round, .. } => Some(round),
            _ => None,
        }
    }

    /// Apply the submission outcome, entering `Answered`.
    ///
    /// Ignored unless a selection exists in `Answering`; submission without
    /// a selection is not a legal transition.
    pub fn answered(&mut self, is_correct: bool) {
        if let Phase::Answering {
            round,
            selected: Some(selected),
        } = &self.phase
        {
            self.phase = Phase::Answered {
                round: round.clone(),
                selected: selected.clone(),
                is_correct,
            };
        }
    }

    /// Build the shareable challenge link embedding this user's referral
    /// code. `None` until a user record is available.
    pub fn challenge_link(&self, base_url: &str) -> Option<String> {
        let user = self.score.as_ref()?;
        Some(format!(
            "{}?invitedBy={}",
            base_url.trim_end_matches('/'),
            user.referral_code()
        ))
    }
}
