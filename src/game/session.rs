//! file: session.rs
//! author: Jacob Xie
//! date: 2025/12/20 13:04:18 Saturday
//! brief: the quiz state machine; owns score, question and round timing

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, info, warn};

use super::{Action, Catalog, Clock, Feedback, Phase, Question, RoundClock, SystemClock};
use crate::{
    config::{GameConfig, RoundConfig},
    error::Result,
};

/// All mutable game state. Changes only through the methods below, each of
/// which checks the current phase first; triggers arriving in a phase with
/// no matching transition are ignored.
#[derive(Debug)]
pub struct GameSession<C: Clock = SystemClock> {
    catalog: Catalog,
    round: RoundConfig,
    clock: C,
    rng: StdRng,
    phase: Phase,
    score: u32,
    best_score: u32,
    question: Option<Question>,
    selected: Option<usize>,
    feedback: Option<Feedback>,
    feedback_started_at: Option<u64>,
    round_clock: RoundClock,
}

impl<C: Clock> GameSession<C> {
    pub fn new(catalog: Catalog, round: RoundConfig, clock: C) -> Self {
        Self::with_rng(catalog, round, clock, StdRng::from_entropy())
    }

    pub fn with_rng(catalog: Catalog, round: RoundConfig, clock: C, rng: StdRng) -> Self {
        Self {
            catalog,
            round,
            clock,
            rng,
            phase: Phase::Menu,
            score: 0,
            best_score: 0,
            question: None,
            selected: None,
            feedback: None,
            feedback_started_at: None,
            round_clock: RoundClock::default(),
        }
    }

    /// Validates the configured catalog before any round can start.
    pub fn from_config(config: &GameConfig, clock: C) -> Result<Self> {
        config.validate()?;
        let catalog = config.build_catalog()?;
        Ok(Self::new(catalog, config.round.clone(), clock))
    }

    /// Returns whether the action changed anything.
    pub fn dispatch(&mut self, action: Action) -> Result<bool> {
        match action {
            Action::StartGame => self.start_game(),
            Action::SelectOption(index) => Ok(self.select_option(index)),
            Action::ReturnToMenu => Ok(self.return_to_menu()),
        }
    }

    pub fn start_game(&mut self) -> Result<bool> {
        if !matches!(self.phase, Phase::Menu | Phase::GameOver) {
            debug!(phase = ?self.phase, "start ignored");
            return Ok(false);
        }
        let question = Question::generate(self.catalog.entries(), &mut self.rng)?;
        let now = self.clock.now_ms();

        self.score = 0;
        self.round_clock.start(now);
        self.show_question(question);
        info!(duration_secs = self.round.duration_secs, "game started");
        Ok(true)
    }

    pub fn select_option(&mut self, index: usize) -> bool {
        if self.phase != Phase::Playing || self.selected.is_some() {
            debug!(phase = ?self.phase, index, "selection ignored");
            return false;
        }
        let Some(question) = &self.question else {
            return false;
        };
        if index >= question.options().len() {
            warn!(index, options = question.options().len(), "option index out of range");
            return false;
        }

        let correct = question.is_correct(index);
        if correct {
            self.score = self.score.saturating_add(self.round.score_increment);
            self.best_score = self.best_score.max(self.score);
        }
        debug!(index, correct, score = self.score, "answered");

        let now = self.clock.now_ms();
        self.selected = Some(index);
        self.feedback = Some(Feedback::from_correct(correct));
        self.feedback_started_at = Some(now);
        self.round_clock.pause(now);
        self.phase = Phase::Feedback;
        true
    }

    pub fn return_to_menu(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            debug!(phase = ?self.phase, "return to menu ignored");
            return false;
        }
        self.phase = Phase::Menu;
        info!("back to menu");
        true
    }

    /// Polled once per frame. Ends the round when time runs out and moves
    /// on from feedback once it has been shown long enough.
    pub fn tick(&mut self) -> Result<bool> {
        let now = self.clock.now_ms();
        match self.phase {
            Phase::Playing if self.remaining_secs() == 0 => {
                self.phase = Phase::GameOver;
                info!(score = self.score, "game over");
                Ok(true)
            }
            Phase::Feedback => {
                let started = self.feedback_started_at.unwrap_or(now);
                if now.saturating_sub(started) < self.round.feedback_ms {
                    return Ok(false);
                }
                let question = Question::generate(self.catalog.entries(), &mut self.rng)?;
                self.round_clock.resume(now);
                self.show_question(question);
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    fn show_question(&mut self, question: Question) {
        self.question = Some(question);
        self.selected = None;
        self.feedback = None;
        self.feedback_started_at = None;
        self.phase = Phase::Playing;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn question(&self) -> Option<&Question> {
        self.question.as_ref()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn feedback_is_correct(&self) -> Option<bool> {
        self.feedback.map(Feedback::is_correct)
    }

    pub fn remaining_secs(&self) -> u64 {
        self.round_clock
            .remaining_secs(self.clock.now_ms(), self.round.duration_secs)
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
