//! Deterministic verdict ranking

use jury_core::Verdict;

/// Order verdicts by vote count descending.
///
/// The sort is stable, so verdicts with equal votes keep their insertion
/// (submission) order: the ranking key is `(votes desc, submitted asc)`.
pub fn rank(mut verdicts: Vec<Verdict>) -> Vec<Verdict> {
    verdicts.sort_by(|a, b| b.votes.cmp(&a.votes));
    verdicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use jury_core::{Stance, VerdictDraft};

    fn verdict(id: &str, author: &str, votes: i64) -> Verdict {
        let mut v = Verdict::from_draft(VerdictDraft::new(
            "2024-03-09",
            author,
            "ruling",
            Stance::Guilty,
        ));
        v.id = id.to_string();
        v.votes = votes;
        v
    }

    #[test]
    fn test_rank_empty() {
        assert!(rank(Vec::new()).is_empty());
    }

    #[test]
    fn test_rank_single() {
        let ranked = rank(vec![verdict("v1", "a", 7)]);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].id, "v1");
    }

    #[test]
    fn test_rank_by_votes_descending() {
        let ranked = rank(vec![
            verdict("low", "a", 3),
            verdict("high", "b", 42),
            verdict("mid", "c", 15),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["high", "mid", "low"]);
    }

    #[test]
    fn test_rank_ties_keep_submission_order() {
        let ranked = rank(vec![
            verdict("first", "a", 5),
            verdict("second", "b", 5),
            verdict("third", "c", 5),
        ]);
        let ids: Vec<&str> = ranked.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_rank_negative_votes_sink() {
        let ranked = rank(vec![verdict("down", "a", -2), verdict("zero", "b", 0)]);
        let ids: Vec<&str> = ranked.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["zero", "down"]);
    }
}
