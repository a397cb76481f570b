//! Owner and group name lookup

use uzers::{Groups, Users, UsersCache};

/// Resolves uids and gids to names, caching lookups for the process lifetime.
///
/// Ids without a passwd/group entry render as the number itself.
pub struct OwnerNames {
    cache: UsersCache,
}

impl OwnerNames {
    pub fn new() -> Self {
        Self {
            cache: UsersCache::new(),
        }
    }

    pub fn user(&self, uid: u32) -> String {
        self.cache
            .get_user_by_uid(uid)
            .map(|u| u.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| uid.to_string())
    }

    pub fn group(&self, gid: u32) -> String {
        self.cache
            .get_group_by_gid(gid)
            .map(|g| g.name().to_string_lossy().into_owned())
            .unwrap_or_else(|| gid.to_string())
    }
}

impl Default for OwnerNames {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_ids_fall_back_to_number() {
        let names = OwnerNames::new();
        // Far outside any allocated range
        assert_eq!(names.user(3_999_999_999), "3999999999");
        assert_eq!(names.group(3_999_999_999), "3999999999");
    }

    #[test]
    fn test_current_user_resolves() {
        let names = OwnerNames::new();
        let uid = uzers::get_current_uid();
        let expected = uzers::get_current_username()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| uid.to_string());
        assert_eq!(names.user(uid), expected);
    }
}
