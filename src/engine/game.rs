//! Per-session game state and its transitions
//!
//! The engine is pure computation over a state value passed in and returned;
//! the caller owns persistence and per-session serialization. A state moves
//! `NotStarted -> InProgress -> {Won, Lost}`; the terminal states are final
//! for a given puzzle id, and a new active puzzle resets the state while
//! deciding whether the win streak survives the gap.

use super::validate::{Rejection, validate};
use crate::core::{Puzzle, ScoredGuess, Word};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Maximum number of guesses per puzzle
pub const MAX_GUESSES: usize = 6;

/// Stored-date format, the same ISO layout the activation dates use
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Notification class relayed to the player
///
/// The specific message text is a presentation concern; the engine only
/// classifies outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// Outcome of a submission that was not rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The guess was scored and appended to the game
    Accepted(ScoredGuess),
    /// The game was already complete; nothing changed
    AlreadyFinished,
}

impl Submission {
    /// Notification class for the caller to relay
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::Accepted(_) => Severity::Success,
            Self::AlreadyFinished => Severity::Info,
        }
    }
}

/// Derived lifecycle phase of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    NotStarted,
    InProgress,
    Won,
    Lost,
}

/// One player's progress against one puzzle
///
/// Serializes with the field names the session store has always used, so
/// previously stored sessions keep deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    #[serde(rename = "guid")]
    puzzle_id: String,
    guesses: Vec<ScoredGuess>,
    is_complete: bool,
    is_won: bool,
    #[serde(rename = "date")]
    puzzle_date: Option<String>,
    streak: u32,
}

impl GameState {
    /// Empty state bound to `puzzle`, carrying `streak` forward
    fn fresh(puzzle: &Puzzle, streak: u32) -> Self {
        Self {
            puzzle_id: puzzle.id().to_string(),
            guesses: Vec::new(),
            is_complete: false,
            is_won: false,
            puzzle_date: puzzle
                .activation_date()
                .map(|date| date.format(DATE_FORMAT).to_string()),
            streak,
        }
    }

    /// Id of the puzzle this state was played against
    #[inline]
    #[must_use]
    pub fn puzzle_id(&self) -> &str {
        &self.puzzle_id
    }

    /// Scored guesses in play order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[ScoredGuess] {
        &self.guesses
    }

    /// Whether no further guesses may be appended
    #[inline]
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.is_complete
    }

    /// Whether the game ended on an all-Correct guess
    #[inline]
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.is_won
    }

    /// Count of consecutive successfully-continued winning days
    #[inline]
    #[must_use]
    pub const fn streak(&self) -> u32 {
        self.streak
    }

    /// ISO date of the puzzle this state belongs to, if known
    #[must_use]
    pub fn puzzle_date(&self) -> Option<&str> {
        self.puzzle_date.as_deref()
    }

    /// Current lifecycle phase
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_complete {
            if self.is_won {
                GameStatus::Won
            } else {
                GameStatus::Lost
            }
        } else if self.guesses.is_empty() {
            GameStatus::NotStarted
        } else {
            GameStatus::InProgress
        }
    }

    /// Bind a stored state to the active puzzle; call once per session read
    ///
    /// If the stored state already belongs to `puzzle`, completion flags are
    /// recomputed from the guesses (an idempotent refresh) and nothing else
    /// changes. Otherwise the state resets to an empty game for the new
    /// puzzle; the streak carries over only when the old state is a fresh
    /// enough carry-over (see [`GameState::streak`] expiry below).
    ///
    /// Streak expiry: a won game tolerates a one-calendar-day gap to the new
    /// puzzle's activation date; anything else (lost, abandoned, missing or
    /// unparseable dates) tolerates none.
    #[must_use]
    pub fn engage(self, puzzle: &Puzzle) -> Self {
        if self.puzzle_id == puzzle.id() {
            let mut state = self;
            state.refresh_completion();
            return state;
        }

        let streak = if self.stale_carry_over(puzzle) {
            0
        } else {
            self.streak
        };

        debug!(
            puzzle_id = puzzle.id(),
            streak, "starting a fresh game for the active puzzle"
        );
        Self::fresh(puzzle, streak)
    }

    /// Recompute `is_complete` / `is_won` from the scored guesses
    fn refresh_completion(&mut self) {
        let won = self
            .guesses
            .last()
            .is_some_and(ScoredGuess::is_all_correct);

        self.is_won = won;
        self.is_complete = won || self.guesses.len() == MAX_GUESSES;
    }

    /// Whether this carry-over is too old for its streak to survive
    ///
    /// Fails safe: any missing or unparseable date counts as stale.
    fn stale_carry_over(&self, puzzle: &Puzzle) -> bool {
        let Some(new_date) = puzzle.activation_date() else {
            return true;
        };
        let Some(old_raw) = self.puzzle_date.as_deref() else {
            return true;
        };

        let old_date = match NaiveDate::parse_from_str(old_raw, DATE_FORMAT) {
            Ok(date) => date,
            Err(err) => {
                warn!(%err, date = old_raw, "stored puzzle date is unparseable, treating as stale");
                return true;
            }
        };

        let gap = (new_date - old_date).num_days();

        // A win earns a one-day grace period; everything else must continue
        // the same day.
        let grace = i64::from(self.is_complete && self.is_won);
        gap > grace
    }

    /// Submit one guess against the active puzzle
    ///
    /// A completed game returns [`Submission::AlreadyFinished`] without
    /// mutation. Otherwise the guess is validated, scored, and appended;
    /// an all-Correct guess wins (streak + 1), a sixth miss loses (streak 0).
    ///
    /// # Errors
    /// Returns a [`Rejection`] when validation refuses the guess or when a
    /// length-5 candidate is not a scorable word; the state is left untouched
    /// and no turn is consumed.
    pub fn submit_guess(
        &mut self,
        guess: &str,
        puzzle: &Puzzle,
    ) -> Result<Submission, Rejection> {
        if self.is_complete {
            return Ok(Submission::AlreadyFinished);
        }

        validate(guess, self)?;

        let word = Word::new(guess)
            .map_err(|_| Rejection::WordNotRecognized(guess.to_string()))?;
        let scored = ScoredGuess::score(&word, puzzle.word());

        self.guesses.push(scored);
        self.puzzle_id = puzzle.id().to_string();
        self.puzzle_date = puzzle
            .activation_date()
            .map(|date| date.format(DATE_FORMAT).to_string());

        if scored.is_all_correct() {
            self.is_won = true;
            self.is_complete = true;
            self.streak += 1;
            debug!(
                puzzle_id = %self.puzzle_id,
                guesses = self.guesses.len(),
                streak = self.streak,
                "game won"
            );
        } else if self.guesses.len() == MAX_GUESSES {
            self.is_complete = true;
            self.is_won = false;
            self.streak = 0;
            debug!(puzzle_id = %self.puzzle_id, "game lost, out of guesses");
        }

        Ok(Submission::Accepted(scored))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn date(iso: &str) -> NaiveDate {
        iso.parse().unwrap()
    }

    fn puzzle(secret: &str, iso_date: &str) -> Puzzle {
        Puzzle::new(
            format!("{iso_date}#0"),
            Word::new(secret).unwrap(),
            date(iso_date),
        )
    }

    fn won_state(secret: &str, iso_date: &str) -> GameState {
        let puzzle = puzzle(secret, iso_date);
        let mut state = GameState::default().engage(&puzzle);
        state.submit_guess(secret, &puzzle).unwrap();
        assert!(state.is_won());
        state
    }

    #[test]
    fn engage_creates_empty_state_for_new_player() {
        let puzzle = puzzle("apple", "2024-03-01");
        let state = GameState::default().engage(&puzzle);

        assert_eq!(state.puzzle_id(), "2024-03-01#0");
        assert_eq!(state.puzzle_date(), Some("2024-03-01"));
        assert!(state.guesses().is_empty());
        assert!(!state.is_complete());
        assert_eq!(state.streak(), 0);
        assert_eq!(state.status(), GameStatus::NotStarted);
    }

    #[test]
    fn engage_same_puzzle_preserves_guesses() {
        let puzzle = puzzle("apple", "2024-03-01");
        let mut state = GameState::default().engage(&puzzle);
        state.submit_guess("alert", &puzzle).unwrap();

        let state = state.engage(&puzzle);
        assert_eq!(state.guesses().len(), 1);
        assert_eq!(state.status(), GameStatus::InProgress);
    }

    #[test]
    fn engage_refresh_is_idempotent() {
        let puzzle = puzzle("apple", "2024-03-01");
        let mut state = GameState::default().engage(&puzzle);
        state.submit_guess("apple", &puzzle).unwrap();

        let refreshed = state.clone().engage(&puzzle).engage(&puzzle);
        assert_eq!(refreshed, state);
    }

    #[test]
    fn win_increments_streak_by_exactly_one() {
        let puzzle = puzzle("apple", "2024-03-01");
        let mut state = GameState::default().engage(&puzzle);
        state.submit_guess("alert", &puzzle).unwrap();
        state.submit_guess("apple", &puzzle).unwrap();

        assert_eq!(state.status(), GameStatus::Won);
        assert!(state.is_complete());
        assert_eq!(state.streak(), 1);
        assert!(state.guesses().last().unwrap().is_all_correct());
    }

    #[test]
    fn six_misses_lose_and_reset_streak() {
        let puzzle = puzzle("apple", "2024-03-01");
        let mut state = GameState::default().engage(&puzzle);

        // Six distinct wrong guesses; each keeps the constraints of the one
        // before it (every guess keeps 'a' in front and reuses revealed
        // letters), so validation accepts them all.
        for guess in ["alert", "amble", "angle", "ankle", "addle", "agile"] {
            let outcome = state.submit_guess(guess, &puzzle).unwrap();
            assert!(matches!(outcome, Submission::Accepted(_)));
        }

        assert_eq!(state.guesses().len(), MAX_GUESSES);
        assert_eq!(state.status(), GameStatus::Lost);
        assert!(state.is_complete());
        assert!(!state.is_won());
        assert_eq!(state.streak(), 0);
    }

    #[test]
    fn completed_game_reports_already_finished_without_mutation() {
        let mut state = won_state("apple", "2024-03-01");
        let before = state.clone();
        let puzzle = puzzle("apple", "2024-03-01");

        let outcome = state.submit_guess("slate", &puzzle).unwrap();
        assert_eq!(outcome, Submission::AlreadyFinished);
        assert_eq!(outcome.severity(), Severity::Info);
        assert_eq!(state, before);
    }

    #[test]
    fn accepted_guess_is_success_class() {
        let puzzle = puzzle("apple", "2024-03-01");
        let mut state = GameState::default().engage(&puzzle);
        let outcome = state.submit_guess("alert", &puzzle).unwrap();
        assert_eq!(outcome.severity(), Severity::Success);
    }

    #[test]
    fn rejected_guess_leaves_state_unchanged() {
        let puzzle = puzzle("apple", "2024-03-01");
        let mut state = GameState::default().engage(&puzzle);
        state.submit_guess("alert", &puzzle).unwrap();
        let before = state.clone();

        // moves the solved 'a'
        let rejection = state.submit_guess("crane", &puzzle).unwrap_err();
        assert_eq!(rejection, Rejection::PositionLocked('a'));
        assert_eq!(state, before);
    }

    #[test]
    fn unrecognizable_five_char_guess_is_rejected_as_unknown_word() {
        let puzzle = puzzle("apple", "2024-03-01");
        let mut state = GameState::default().engage(&puzzle);

        let rejection = state.submit_guess("a1b2c", &puzzle).unwrap_err();
        assert_eq!(
            rejection,
            Rejection::WordNotRecognized("a1b2c".to_string())
        );
        assert!(state.guesses().is_empty());
    }

    #[test]
    fn next_day_after_win_preserves_streak() {
        let state = won_state("apple", "2024-03-01");
        let next = puzzle("slate", "2024-03-02");

        let state = state.engage(&next);
        assert_eq!(state.streak(), 1);
        assert!(state.guesses().is_empty());
        assert_eq!(state.puzzle_id(), "2024-03-02#0");
    }

    #[test]
    fn two_day_gap_after_win_resets_streak() {
        let state = won_state("apple", "2024-03-01");
        let later = puzzle("slate", "2024-03-03");

        let state = state.engage(&later);
        assert_eq!(state.streak(), 0);
    }

    #[test]
    fn same_day_second_puzzle_after_loss_keeps_zero_streak() {
        let puzzle_one = puzzle("apple", "2024-03-01");
        let mut state = GameState::default().engage(&puzzle_one);
        for guess in ["alert", "amble", "angle", "ankle", "addle", "agile"] {
            state.submit_guess(guess, &puzzle_one).unwrap();
        }
        assert_eq!(state.status(), GameStatus::Lost);

        let state = state.engage(&puzzle("slate", "2024-03-01"));
        assert_eq!(state.streak(), 0);
    }

    #[test]
    fn abandoned_game_loses_streak_on_next_day() {
        let first = puzzle("apple", "2024-03-01");
        let mut state = won_state("crane", "2024-02-29").engage(&first);
        assert_eq!(state.streak(), 1);

        // one non-winning guess, then the player walks away
        state.submit_guess("alert", &first).unwrap();
        assert!(!state.is_complete());

        let state = state.engage(&puzzle("slate", "2024-03-02"));
        assert_eq!(state.streak(), 0);
    }

    #[test]
    fn missing_activation_date_resets_streak() {
        let state = won_state("apple", "2024-03-01");
        let undated = Puzzle::undated("practice", Word::new("slate").unwrap());

        let state = state.engage(&undated);
        assert_eq!(state.streak(), 0);
    }

    #[test]
    fn unparseable_stored_date_resets_streak() {
        let json = r#"{
            "guid": "old-puzzle",
            "guesses": [],
            "isComplete": true,
            "isWon": true,
            "date": "03/01/2024",
            "streak": 4
        }"#;
        let state: GameState = serde_json::from_str(json).unwrap();

        let state = state.engage(&puzzle("slate", "2024-03-02"));
        assert_eq!(state.streak(), 0);
    }

    #[test]
    fn state_serializes_with_session_field_names() {
        let state = won_state("apple", "2024-03-01");
        let json = serde_json::to_string(&state).unwrap();

        assert!(json.contains("\"guid\""));
        assert!(json.contains("\"isComplete\":true"));
        assert!(json.contains("\"isWon\":true"));
        assert!(json.contains("\"date\":\"2024-03-01\""));
        assert!(json.contains("\"streak\":1"));
    }

    #[test]
    fn state_round_trips_through_json() {
        let mut state = GameState::default().engage(&puzzle("apple", "2024-03-01"));
        state
            .submit_guess("alert", &puzzle("apple", "2024-03-01"))
            .unwrap();

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
