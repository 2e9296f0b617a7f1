//! Session controller

use std::sync::Arc;

use chrono::{DateTime, Utc};

use jury_core::{
    day_key, format_countdown, Case, CaseDraft, JuryError, Result, Stance, User, UserProfile,
    Verdict, VerdictDraft,
};
use jury_court::{rank, CourtService, VoteDirection};

use crate::phase::Phase;
use crate::profile;

/// What the viewer is looking at.
///
/// `NoCase` sits outside the three-phase machine: court is adjourned and
/// the only forward action is creating a case.
#[derive(Debug)]
pub enum SessionState {
    NoCase,
    Active {
        /// Per-viewer copy; reveal flags flip here and are never
        /// written back, so viewers cannot interfere with each other
        case: Case,
        verdicts: Vec<Verdict>,
        phase: Phase,
    },
}

/// One viewer's run through today's case.
///
/// Holds the court service explicitly; a new day's case means a fresh
/// controller built with [`Session::load`].
pub struct Session {
    court: Arc<CourtService>,
    user: User,
    profile: UserProfile,
    state: SessionState,
}

impl Session {
    /// Fetch today's case and its verdicts and derive the starting
    /// phase: no case → `NoCase`; the viewer already ruled → `Result`;
    /// everything already revealed (including a case with no evidence)
    /// → `Deliberation`; otherwise `Discovery`.
    pub async fn load(court: Arc<CourtService>, user: User) -> Result<Self> {
        let profile = UserProfile::new(user.username.clone());
        let state = match court.today_case().await? {
            None => SessionState::NoCase,
            Some(case) => {
                let verdicts = court.verdicts_for_case(&case.id).await?;
                let already_ruled = verdicts.iter().any(|v| v.author == user.username);
                let phase = if already_ruled {
                    Phase::Result
                } else if case.evidence.iter().all(|e| e.is_revealed) {
                    Phase::Deliberation
                } else {
                    Phase::Discovery
                };
                SessionState::Active {
                    case,
                    verdicts,
                    phase,
                }
            }
        };
        Ok(Self {
            court,
            user,
            profile,
            state,
        })
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn phase(&self) -> Option<Phase> {
        match &self.state {
            SessionState::Active { phase, .. } => Some(*phase),
            SessionState::NoCase => None,
        }
    }

    pub fn case(&self) -> Option<&Case> {
        match &self.state {
            SessionState::Active { case, .. } => Some(case),
            SessionState::NoCase => None,
        }
    }

    pub fn verdicts(&self) -> &[Verdict] {
        match &self.state {
            SessionState::Active { verdicts, .. } => verdicts,
            SessionState::NoCase => &[],
        }
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    /// Reveal one evidence item on the viewer's copy. Idempotent: a
    /// second reveal is a no-op and awards nothing. When the last item
    /// flips, the phase advances Discovery → Deliberation. Returns
    /// whether anything changed.
    pub fn reveal_evidence(&mut self, evidence_id: &str) -> bool {
        let SessionState::Active { case, phase, .. } = &mut self.state else {
            return false;
        };
        let Some(item) = case.evidence.iter_mut().find(|e| e.id == evidence_id) else {
            tracing::warn!(evidence_id, "reveal target not on active case");
            return false;
        };
        if !item.reveal() {
            return false;
        }
        profile::award_reveal(&mut self.profile);

        if case.evidence.iter().all(|e| e.is_revealed) && phase.can_advance_to(Phase::Deliberation)
        {
            *phase = Phase::Deliberation;
        }
        true
    }

    /// Submit the viewer's ruling on the active case.
    ///
    /// Only legal during Deliberation; a success awards XP, extends the
    /// streak, re-ranks the local verdict list with the new entry, and
    /// moves the session to `Result`.
    pub async fn submit(&mut self, text: impl Into<String>, stance: Stance) -> Result<Verdict> {
        let case_id = match &self.state {
            SessionState::Active { case, phase, .. } if *phase == Phase::Deliberation => {
                case.id.clone()
            }
            SessionState::Active { .. } => {
                return Err(JuryError::InvalidVerdict(
                    "rulings are only accepted during deliberation".to_string(),
                ))
            }
            SessionState::NoCase => {
                return Err(JuryError::InvalidVerdict(
                    "no case is in session".to_string(),
                ))
            }
        };

        let draft = VerdictDraft::new(case_id, self.user.username.clone(), text, stance);
        let verdict = self.court.submit_verdict(draft).await?;

        if let SessionState::Active {
            verdicts, phase, ..
        } = &mut self.state
        {
            verdicts.push(verdict.clone());
            *verdicts = rank(std::mem::take(verdicts));
            *phase = Phase::Result;
        }
        profile::award_submission(&mut self.profile, &verdict.case_id);
        Ok(verdict)
    }

    /// Cast a vote on a verdict and fold the new count into the local
    /// ranking. A missing target is logged and swallowed (`Ok(None)`,
    /// view unchanged); store failures surface to the caller.
    pub async fn cast_vote(
        &mut self,
        verdict_id: &str,
        direction: VoteDirection,
    ) -> Result<Option<i64>> {
        let votes = match self.court.vote(verdict_id, &self.user.id, direction).await {
            Ok(votes) => votes,
            Err(JuryError::NotFound(target)) => {
                tracing::warn!(%target, "vote target missing, ignoring");
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        if let SessionState::Active { verdicts, .. } = &mut self.state {
            if let Some(v) = verdicts.iter_mut().find(|v| v.id == verdict_id) {
                v.votes = votes;
            }
            *verdicts = rank(std::mem::take(verdicts));
        }
        Ok(Some(votes))
    }

    /// Create today's case. Only meaningful from `NoCase`; reloads the
    /// session state on success.
    pub async fn create_case(&mut self, draft: CaseDraft) -> Result<Case> {
        if !matches!(self.state, SessionState::NoCase) {
            return Err(JuryError::DuplicateCase(
                "a case is already in session".to_string(),
            ));
        }
        let case = self.court.create_case(draft).await?;
        let verdicts = self.court.verdicts_for_case(&case.id).await?;
        let phase = if case.evidence.iter().all(|e| e.is_revealed) {
            Phase::Deliberation
        } else {
            Phase::Discovery
        };
        self.state = SessionState::Active {
            case: case.clone(),
            verdicts,
            phase,
        };
        Ok(case)
    }

    /// Display countdown to the next UTC midnight
    pub fn countdown(&self, now: DateTime<Utc>) -> String {
        format_countdown(now)
    }

    /// A case from a previous UTC day is locked for play
    pub fn is_locked(&self, now: DateTime<Utc>) -> bool {
        match &self.state {
            SessionState::Active { case, .. } => case.id != day_key(now),
            SessionState::NoCase => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jury_store::MemoryStorage;

    fn user() -> User {
        User::new("t2_dev_winner", "Judge_Reddit")
    }

    async fn session_with_seeded_store() -> Session {
        let storage = Arc::new(MemoryStorage::seeded(Utc::now()).unwrap());
        let court = Arc::new(CourtService::new(storage));
        Session::load(court, user()).await.unwrap()
    }

    #[tokio::test]
    async fn test_load_without_case_is_no_case() {
        let court = Arc::new(CourtService::new(Arc::new(MemoryStorage::new())));
        let session = Session::load(court, user()).await.unwrap();
        assert!(matches!(session.state(), SessionState::NoCase));
        assert!(session.phase().is_none());
        assert!(session.verdicts().is_empty());
    }

    #[tokio::test]
    async fn test_load_with_case_starts_in_discovery() {
        let session = session_with_seeded_store().await;
        assert_eq!(session.phase(), Some(Phase::Discovery));
        assert_eq!(session.verdicts().len(), 2);
    }

    #[tokio::test]
    async fn test_reveal_is_idempotent_and_awards_once() {
        let mut session = session_with_seeded_store().await;
        assert!(session.reveal_evidence("ev-seed-1"));
        assert_eq!(session.profile().xp, 10);

        // Second reveal of the same item changes nothing
        assert!(!session.reveal_evidence("ev-seed-1"));
        assert_eq!(session.profile().xp, 10);
        assert_eq!(session.phase(), Some(Phase::Discovery));
    }

    #[tokio::test]
    async fn test_unknown_evidence_is_ignored() {
        let mut session = session_with_seeded_store().await;
        assert!(!session.reveal_evidence("ev-nope"));
        assert_eq!(session.profile().xp, 0);
    }

    #[tokio::test]
    async fn test_submit_outside_deliberation_rejected() {
        let mut session = session_with_seeded_store().await;
        assert_eq!(session.phase(), Some(Phase::Discovery));
        let err = session.submit("Guilty!", Stance::Guilty).await.unwrap_err();
        assert!(matches!(err, JuryError::InvalidVerdict(_)));
    }

    #[tokio::test]
    async fn test_locked_when_case_is_from_another_day() {
        let session = session_with_seeded_store().await;
        let now = Utc::now();
        assert!(!session.is_locked(now));
        assert!(session.is_locked(now + chrono::Duration::days(1)));
    }
}
