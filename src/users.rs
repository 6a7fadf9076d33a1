//! Users

use uuid::Uuid;

/// An opaque purchasing user.
///
/// Every call to [`User::new`] produces a distinct identity. The pricing engine only uses the
/// identity to remember who has already received a happy-hour gift today.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct User {
    id: Uuid,
    underage: bool,
}

impl User {
    /// Creates a new, distinct user.
    #[must_use]
    pub fn new(underage: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            underage,
        }
    }

    /// Returns the unique id of this user.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns whether the user is a minor.
    #[must_use]
    pub fn is_underage(&self) -> bool {
        self.underage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn users_are_distinct_identities() {
        let a = User::new(false);
        let b = User::new(false);

        assert_ne!(a.id(), b.id());
        assert_ne!(a, b);
    }

    #[test]
    fn underage_flag_round_trips() {
        assert!(User::new(true).is_underage());
        assert!(!User::new(false).is_underage());
    }

    #[test]
    fn clones_share_the_identity() {
        let user = User::new(true);
        let clone = user.clone();

        assert_eq!(user.id(), clone.id());
        assert_eq!(user, clone);
    }
}
