//! Score table for runs
//!
//! A run is scored by its length and how many of its ends are open. The
//! same table serves both sides of a candidate cell: the mover's own run
//! (attack) and the opponent's run the cell would block (defense), the
//! latter weighted at 90%.

/// Whose run a score describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The mover's own run through the cell
    Attack,
    /// The opponent's run that playing the cell blocks
    Defense,
}

impl Role {
    /// Weight in tenths: attack 1.0, defense 0.9
    #[inline]
    pub const fn weight_tenths(self) -> i32 {
        match self {
            Role::Attack => 10,
            Role::Defense => 9,
        }
    }
}

/// Pattern scores, unweighted
pub struct PatternScore;

impl PatternScore {
    /// Five or more - wins whatever the role or ends
    pub const FIVE: i32 = 1_000_000;

    /// Open four: _OOOO_
    pub const OPEN_FOUR: i32 = 50_000;
    /// Closed four: XOOOO_
    pub const CLOSED_FOUR: i32 = 10_000;
    /// Dead four: XOOOOX
    pub const DEAD_FOUR: i32 = 5_000;

    pub const OPEN_THREE: i32 = 5_000;
    pub const CLOSED_THREE: i32 = 1_000;
    pub const DEAD_THREE: i32 = 500;

    pub const OPEN_TWO: i32 = 500;
    pub const CLOSED_TWO: i32 = 100;
    pub const DEAD_TWO: i32 = 50;

    /// Lone stone, per open end
    pub const SINGLE_PER_OPEN_END: i32 = 10;
}

/// Score of a run of `count` stones with `open_ends` open ends.
///
/// Every table entry is a multiple of 10, so the 0.9 defense weight stays
/// integral.
#[must_use]
pub fn score_for(count: u8, open_ends: u8, role: Role) -> i32 {
    let base = match (count, open_ends) {
        (5.., _) => return PatternScore::FIVE,
        (4, 2) => PatternScore::OPEN_FOUR,
        (4, 1) => PatternScore::CLOSED_FOUR,
        (4, _) => PatternScore::DEAD_FOUR,
        (3, 2) => PatternScore::OPEN_THREE,
        (3, 1) => PatternScore::CLOSED_THREE,
        (3, _) => PatternScore::DEAD_THREE,
        (2, 2) => PatternScore::OPEN_TWO,
        (2, 1) => PatternScore::CLOSED_TWO,
        (2, _) => PatternScore::DEAD_TWO,
        (1, open) => PatternScore::SINGLE_PER_OPEN_END * i32::from(open),
        _ => 0,
    };
    base * role.weight_tenths() / 10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_ignores_role_and_ends() {
        for open in 0..=2 {
            assert_eq!(score_for(5, open, Role::Attack), 1_000_000);
            assert_eq!(score_for(5, open, Role::Defense), 1_000_000);
        }
        assert_eq!(score_for(7, 0, Role::Defense), 1_000_000);
    }

    #[test]
    fn test_attack_table() {
        assert_eq!(score_for(4, 2, Role::Attack), 50_000);
        assert_eq!(score_for(4, 1, Role::Attack), 10_000);
        assert_eq!(score_for(4, 0, Role::Attack), 5_000);
        assert_eq!(score_for(3, 2, Role::Attack), 5_000);
        assert_eq!(score_for(3, 1, Role::Attack), 1_000);
        assert_eq!(score_for(3, 0, Role::Attack), 500);
        assert_eq!(score_for(2, 2, Role::Attack), 500);
        assert_eq!(score_for(2, 1, Role::Attack), 100);
        assert_eq!(score_for(2, 0, Role::Attack), 50);
        assert_eq!(score_for(1, 2, Role::Attack), 20);
        assert_eq!(score_for(1, 1, Role::Attack), 10);
        assert_eq!(score_for(1, 0, Role::Attack), 0);
    }

    #[test]
    fn test_defense_is_ninety_percent() {
        assert_eq!(score_for(4, 2, Role::Defense), 45_000);
        assert_eq!(score_for(4, 1, Role::Defense), 9_000);
        assert_eq!(score_for(3, 0, Role::Defense), 450);
        assert_eq!(score_for(2, 0, Role::Defense), 45);
        assert_eq!(score_for(1, 1, Role::Defense), 9);
        assert_eq!(score_for(1, 2, Role::Defense), 18);
    }

    #[test]
    fn test_score_hierarchy() {
        assert!(PatternScore::FIVE > PatternScore::OPEN_FOUR);
        assert!(PatternScore::OPEN_FOUR > PatternScore::CLOSED_FOUR);
        assert!(PatternScore::CLOSED_FOUR > PatternScore::DEAD_FOUR);
        assert!(PatternScore::CLOSED_THREE > PatternScore::OPEN_TWO);
        assert!(PatternScore::OPEN_TWO > PatternScore::CLOSED_TWO);
    }
}
