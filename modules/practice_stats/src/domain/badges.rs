use std::collections::HashSet;

use crate::contract::model::BadgeType;

/// Badge types to create for `streak`, in ascending threshold order,
/// skipping anything already in `earned`.
pub fn badges_to_award(streak: u32, earned: &HashSet<BadgeType>) -> Vec<BadgeType> {
    BadgeType::ALL
        .into_iter()
        .filter(|badge| streak >= badge.minimum_streak() && !earned.contains(badge))
        .collect()
}
