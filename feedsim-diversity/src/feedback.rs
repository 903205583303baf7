use feedsim_core::models::{DiversityItem, InterestProfile, Phase, SlotType};

/// Simulated positive feedback on an allocated item.
///
/// Only a like on an exploration-slot item seen during the expand phase
/// establishes a secondary interest; likes elsewhere leave the profile
/// untouched. Returns the resulting profile either way.
pub fn like_exploration_item(
    interest: &mut InterestProfile,
    item: &DiversityItem,
) -> InterestProfile {
    if item.slot_type == SlotType::Exploration && item.phase == Phase::Expand {
        interest.secondary = Some(item.category);
    }
    *interest
}

/// Explicit reset: clear the learned secondary interest.
pub fn reset_interest(interest: &mut InterestProfile) -> InterestProfile {
    interest.secondary = None;
    *interest
}
