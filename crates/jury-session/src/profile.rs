//! Session XP and streak accounting
//!
//! Idempotence of the reveal award is the caller's discipline: the
//! session only calls [`award_reveal`] when an item flips for the first
//! time.

use jury_core::UserProfile;

/// XP for examining a piece of evidence for the first time
pub const XP_PER_REVEAL: u32 = 10;
/// XP for submitting a verdict
pub const XP_PER_SUBMISSION: u32 = 50;
/// XP required per level
pub const XP_PER_LEVEL: u32 = 100;

/// Award the first-reveal bonus
pub fn award_reveal(profile: &mut UserProfile) {
    profile.xp += XP_PER_REVEAL;
    refresh_level(profile);
}

/// Award the submission bonus and extend the streak.
///
/// `day` is the day key of the submission; no decay rule applies.
pub fn award_submission(profile: &mut UserProfile, day: &str) {
    profile.xp += XP_PER_SUBMISSION;
    profile.streak += 1;
    profile.last_played = Some(day.to_string());
    refresh_level(profile);
}

fn refresh_level(profile: &mut UserProfile) {
    profile.level = 1 + profile.xp / XP_PER_LEVEL;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_award() {
        let mut profile = UserProfile::new("Judge_Reddit");
        award_reveal(&mut profile);
        assert_eq!(profile.xp, 10);
        assert_eq!(profile.level, 1);
        assert_eq!(profile.streak, 0);
    }

    #[test]
    fn test_submission_award_extends_streak() {
        let mut profile = UserProfile::new("Judge_Reddit");
        award_submission(&mut profile, "2024-03-09");
        assert_eq!(profile.xp, 50);
        assert_eq!(profile.streak, 1);
        assert_eq!(profile.last_played.as_deref(), Some("2024-03-09"));
    }

    #[test]
    fn test_level_threshold_at_hundred_xp() {
        let mut profile = UserProfile::new("Judge_Reddit");
        // Three reveals and a submission: 80 xp, still level 1
        for _ in 0..3 {
            award_reveal(&mut profile);
        }
        award_submission(&mut profile, "2024-03-09");
        assert_eq!(profile.xp, 80);
        assert_eq!(profile.level, 1);

        // Two more reveals cross the threshold
        award_reveal(&mut profile);
        award_reveal(&mut profile);
        assert_eq!(profile.xp, 100);
        assert_eq!(profile.level, 2);
    }
}
