//! Profile access policy
//!
//! A profile may be viewed or edited by its owner or by a superuser,
//! nobody else. Both checks use the same predicate on purpose: the
//! product has no read-only observers.

use crate::auth::CurrentUser;
use uuid::Uuid;

/// Reason a requester was granted access to a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessGrant {
    /// The requester is the profile's owner
    Owner,
    /// The requester is a superuser
    Privileged,
}

/// Message returned when a profile view is denied
pub const VIEW_DENIED: &str = "You are not allowed to view this profile.";

/// Message returned when a profile edit is denied
pub const EDIT_DENIED: &str = "You are not allowed to edit this profile.";

/// Decide whether `requester` may access the profile of `target_id`
pub fn check_access(requester: &CurrentUser, target_id: Uuid) -> Option<AccessGrant> {
    if requester.id == target_id {
        Some(AccessGrant::Owner)
    } else if requester.is_superuser {
        Some(AccessGrant::Privileged)
    } else {
        None
    }
}

pub fn can_view(requester: &CurrentUser, target_id: Uuid) -> bool {
    check_access(requester, target_id).is_some()
}

pub fn can_edit(requester: &CurrentUser, target_id: Uuid) -> bool {
    check_access(requester, target_id).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: Uuid, is_superuser: bool) -> CurrentUser {
        CurrentUser {
            id,
            username: "someone".to_string(),
            is_superuser,
        }
    }

    #[test]
    fn owner_gets_access_to_own_profile() {
        let id = Uuid::new_v4();
        let requester = user(id, false);
        assert_eq!(check_access(&requester, id), Some(AccessGrant::Owner));
        assert!(can_view(&requester, id));
        assert!(can_edit(&requester, id));
    }

    #[test]
    fn superuser_gets_access_to_any_profile() {
        let requester = user(Uuid::new_v4(), true);
        let other = Uuid::new_v4();
        assert_eq!(check_access(&requester, other), Some(AccessGrant::Privileged));
        assert!(can_view(&requester, other));
        assert!(can_edit(&requester, other));
    }

    #[test]
    fn superuser_owner_is_reported_as_owner() {
        let id = Uuid::new_v4();
        let requester = user(id, true);
        assert_eq!(check_access(&requester, id), Some(AccessGrant::Owner));
    }

    #[test]
    fn regular_user_is_denied_other_profiles() {
        let requester = user(Uuid::new_v4(), false);
        let other = Uuid::new_v4();
        assert_eq!(check_access(&requester, other), None);
        assert!(!can_view(&requester, other));
        assert!(!can_edit(&requester, other));
    }

    #[test]
    fn view_and_edit_agree() {
        let cases = [
            (user(Uuid::new_v4(), false), Uuid::new_v4()),
            (user(Uuid::new_v4(), true), Uuid::new_v4()),
        ];
        for (requester, target) in cases {
            assert_eq!(can_view(&requester, target), can_edit(&requester, target));
        }
    }
}
