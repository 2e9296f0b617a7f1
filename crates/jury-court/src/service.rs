//! Court Service operations

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use jury_core::{
    day_key, today_key, Case, CaseDraft, JuryError, Result, Verdict, VerdictDraft, VERDICT_MAX_LEN,
};
use jury_store::{Storage, COLLECTION_CASES, COLLECTION_VERDICTS};

use crate::ranking::rank;

/// Direction of a single vote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VoteDirection {
    Up,
    Down,
}

impl VoteDirection {
    pub fn delta(&self) -> i64 {
        match self {
            VoteDirection::Up => 1,
            VoteDirection::Down => -1,
        }
    }
}

/// Sole authority for case/verdict persistence and ranking.
///
/// Every operation reads a whole backing collection, mutates in memory,
/// and writes the whole collection back, per the storage contract. A
/// store failure aborts before any local effect; validation failures
/// reject before any write.
pub struct CourtService {
    storage: Arc<dyn Storage>,
}

impl CourtService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Today's case, if one exists. Absence is not an error.
    pub async fn today_case(&self) -> Result<Option<Case>> {
        self.case_for_day(&today_key()).await
    }

    /// The case for an explicit day key
    pub async fn case_for_day(&self, key: &str) -> Result<Option<Case>> {
        let cases = self.load_cases().await?;
        Ok(cases.into_iter().find(|c| c.id == key))
    }

    /// Create today's case from a draft.
    ///
    /// At most one case per day key may exist; a collision is rejected
    /// with `DuplicateCase` rather than silently appended.
    pub async fn create_case(&self, draft: CaseDraft) -> Result<Case> {
        self.create_case_at(draft, Utc::now()).await
    }

    /// Create a case keyed to an explicit instant
    pub async fn create_case_at(&self, draft: CaseDraft, now: DateTime<Utc>) -> Result<Case> {
        let mut cases = self.load_cases().await?;
        let key = day_key(now);
        if cases.iter().any(|c| c.id == key) {
            return Err(JuryError::DuplicateCase(format!(
                "a case already exists for {}",
                key
            )));
        }

        let case = Case::from_draft(draft, now);
        tracing::info!(case_id = %case.id, title = %case.title, "case created");
        cases.push(case.clone());
        self.store_cases(&cases).await?;
        Ok(case)
    }

    /// All verdicts on a case, ranked by `(votes desc, submitted asc)`
    pub async fn verdicts_for_case(&self, case_id: &str) -> Result<Vec<Verdict>> {
        let verdicts = self.load_verdicts().await?;
        Ok(rank(
            verdicts.into_iter().filter(|v| v.case_id == case_id).collect(),
        ))
    }

    /// Submit a verdict.
    ///
    /// Text must be non-empty after trimming and at most
    /// [`VERDICT_MAX_LEN`] characters; one verdict per author per case.
    /// The stored verdict carries a server-assigned id and zero votes.
    pub async fn submit_verdict(&self, draft: VerdictDraft) -> Result<Verdict> {
        let text = draft.text.trim().to_string();
        if text.is_empty() {
            return Err(JuryError::InvalidVerdict("verdict text is empty".to_string()));
        }
        if text.chars().count() > VERDICT_MAX_LEN {
            return Err(JuryError::InvalidVerdict(format!(
                "verdict text exceeds {} characters",
                VERDICT_MAX_LEN
            )));
        }

        let mut verdicts = self.load_verdicts().await?;
        if verdicts
            .iter()
            .any(|v| v.case_id == draft.case_id && v.author == draft.author)
        {
            return Err(JuryError::DuplicateSubmission(format!(
                "{} already ruled on case {}",
                draft.author, draft.case_id
            )));
        }

        let verdict = Verdict::from_draft(VerdictDraft { text, ..draft });
        tracing::info!(
            verdict_id = %verdict.id,
            case_id = %verdict.case_id,
            author = %verdict.author,
            stance = %verdict.stance,
            "verdict submitted"
        );
        verdicts.push(verdict.clone());
        self.store_verdicts(&verdicts).await?;
        Ok(verdict)
    }

    /// Apply a ±1 vote delta and return the new count.
    ///
    /// The voter id is logged only: the same voter may vote repeatedly,
    /// a stated non-goal of this design.
    pub async fn vote(
        &self,
        verdict_id: &str,
        voter_id: &str,
        direction: VoteDirection,
    ) -> Result<i64> {
        let mut verdicts = self.load_verdicts().await?;
        let verdict = verdicts
            .iter_mut()
            .find(|v| v.id == verdict_id)
            .ok_or_else(|| JuryError::NotFound(format!("verdict {}", verdict_id)))?;

        verdict.votes += direction.delta();
        let votes = verdict.votes;
        tracing::info!(verdict_id, voter_id, votes, "vote applied");
        self.store_verdicts(&verdicts).await?;
        Ok(votes)
    }

    async fn load_cases(&self) -> Result<Vec<Case>> {
        decode_records(self.storage.get(COLLECTION_CASES).await?.unwrap_or_default())
    }

    async fn store_cases(&self, cases: &[Case]) -> Result<()> {
        self.storage
            .put(COLLECTION_CASES, encode_records(cases)?)
            .await
    }

    async fn load_verdicts(&self) -> Result<Vec<Verdict>> {
        decode_records(
            self.storage
                .get(COLLECTION_VERDICTS)
                .await?
                .unwrap_or_default(),
        )
    }

    async fn store_verdicts(&self, verdicts: &[Verdict]) -> Result<()> {
        self.storage
            .put(COLLECTION_VERDICTS, encode_records(verdicts)?)
            .await
    }
}

fn decode_records<T: serde::de::DeserializeOwned>(records: Vec<Value>) -> Result<Vec<T>> {
    records
        .into_iter()
        .map(|r| serde_json::from_value(r).map_err(JuryError::from))
        .collect()
}

fn encode_records<T: serde::Serialize>(items: &[T]) -> Result<Vec<Value>> {
    items
        .iter()
        .map(|i| serde_json::to_value(i).map_err(JuryError::from))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use jury_core::Stance;
    use jury_store::MemoryStorage;

    fn service() -> CourtService {
        CourtService::new(Arc::new(MemoryStorage::new()))
    }

    fn draft() -> CaseDraft {
        CaseDraft::new("The Permaban", "A dog stepped on the ban key.", "/u/p", "/u/d")
            .with_evidence("Exhibit A", "The Keyboard")
    }

    #[tokio::test]
    async fn test_today_case_absent_on_empty_store() {
        assert!(service().today_case().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_create_then_fetch_by_day_key() {
        let court = service();
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        let created = court.create_case_at(draft(), now).await.unwrap();
        assert_eq!(created.id, "2024-03-09");

        let found = court.case_for_day("2024-03-09").await.unwrap().unwrap();
        assert_eq!(found.title, "The Permaban");
        // A different day key misses
        assert!(court.case_for_day("2024-03-10").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_duplicate_case_rejected() {
        let court = service();
        let now = Utc.with_ymd_and_hms(2024, 3, 9, 8, 0, 0).unwrap();
        court.create_case_at(draft(), now).await.unwrap();

        // Later the same UTC day collides
        let later = Utc.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap();
        let err = court.create_case_at(draft(), later).await.unwrap_err();
        assert!(matches!(err, JuryError::DuplicateCase(_)));
    }

    #[tokio::test]
    async fn test_submit_assigns_id_and_zero_votes() {
        let court = service();
        let verdict = court
            .submit_verdict(VerdictDraft::new(
                "2024-03-09",
                "Judge_Reddit",
                "  Guilty as charged  ",
                Stance::Guilty,
            ))
            .await
            .unwrap();

        assert_eq!(verdict.votes, 0);
        assert_eq!(verdict.text, "Guilty as charged");
        assert!(!verdict.id.is_empty());
    }

    #[tokio::test]
    async fn test_submit_rejects_empty_text() {
        let err = service()
            .submit_verdict(VerdictDraft::new("c", "a", "   ", Stance::Esh))
            .await
            .unwrap_err();
        assert!(matches!(err, JuryError::InvalidVerdict(_)));
    }

    #[tokio::test]
    async fn test_submit_rejects_over_length_text() {
        let long = "x".repeat(VERDICT_MAX_LEN + 1);
        let err = service()
            .submit_verdict(VerdictDraft::new("c", "a", long, Stance::Esh))
            .await
            .unwrap_err();
        assert!(matches!(err, JuryError::InvalidVerdict(_)));
    }

    #[tokio::test]
    async fn test_submit_accepts_exactly_max_length() {
        let exact = "x".repeat(VERDICT_MAX_LEN);
        let verdict = service()
            .submit_verdict(VerdictDraft::new("c", "a", exact, Stance::Esh))
            .await
            .unwrap();
        assert_eq!(verdict.text.chars().count(), VERDICT_MAX_LEN);
    }

    #[tokio::test]
    async fn test_duplicate_submission_rejected() {
        let court = service();
        court
            .submit_verdict(VerdictDraft::new("c", "a", "first", Stance::Guilty))
            .await
            .unwrap();

        let err = court
            .submit_verdict(VerdictDraft::new("c", "a", "second", Stance::Innocent))
            .await
            .unwrap_err();
        assert!(matches!(err, JuryError::DuplicateSubmission(_)));

        // Same author on a different case is fine
        court
            .submit_verdict(VerdictDraft::new("other", "a", "third", Stance::Esh))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_vote_round_trip_restores_count() {
        let court = service();
        let verdict = court
            .submit_verdict(VerdictDraft::new("c", "a", "ruling", Stance::Guilty))
            .await
            .unwrap();

        let up = court.vote(&verdict.id, "t2_voter", VoteDirection::Up).await.unwrap();
        assert_eq!(up, 1);
        let down = court
            .vote(&verdict.id, "t2_voter", VoteDirection::Down)
            .await
            .unwrap();
        assert_eq!(down, verdict.votes);
    }

    #[tokio::test]
    async fn test_vote_unknown_verdict_is_not_found() {
        let err = service()
            .vote("missing", "t2_voter", VoteDirection::Up)
            .await
            .unwrap_err();
        assert!(matches!(err, JuryError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_verdict_listing_filters_and_ranks() {
        let court = service();
        for (author, text) in [("a", "one"), ("b", "two"), ("c", "three")] {
            court
                .submit_verdict(VerdictDraft::new("case-1", author, text, Stance::Guilty))
                .await
                .unwrap();
        }
        court
            .submit_verdict(VerdictDraft::new("case-2", "a", "elsewhere", Stance::Esh))
            .await
            .unwrap();

        let listed = court.verdicts_for_case("case-1").await.unwrap();
        assert_eq!(listed.len(), 3);
        // All zero votes: submission order is the tie-break
        let authors: Vec<&str> = listed.iter().map(|v| v.author.as_str()).collect();
        assert_eq!(authors, vec!["a", "b", "c"]);

        // Voting re-ranks
        court.vote(&listed[2].id, "t2_voter", VoteDirection::Up).await.unwrap();
        let reranked = court.verdicts_for_case("case-1").await.unwrap();
        assert_eq!(reranked[0].author, "c");
    }
}
