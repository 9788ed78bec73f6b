use serde::Serialize;

use super::error::StoreError;

/// One persisted user record. The id is assigned by the store on creation
/// and stays stable until the record is deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    pub id: i64,
    pub username: String,
    pub display_name: String,
    pub phone: String,
    pub email: String,
    pub enabled: bool,
    pub roles: String,
}

impl UserRecord {
    /// Human-readable label for the enabled flag.
    pub fn enabled_label(&self) -> &'static str {
        if self.enabled { "Yes" } else { "No" }
    }
}

/// Input for creating a record. Everything except the id, which the store
/// allocates itself.
#[derive(Debug, Clone, Default)]
pub struct NewUser {
    pub username: String,
    pub display_name: String,
    pub phone: String,
    pub email: String,
    pub enabled: bool,
    pub roles: String,
}

impl NewUser {
    /// All text fields are required. Returns the first empty one.
    pub fn validate(&self) -> Result<(), StoreError> {
        for (name, value) in [
            ("username", &self.username),
            ("display_name", &self.display_name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("roles", &self.roles),
        ] {
            if value.trim().is_empty() {
                return Err(StoreError::EmptyField(name));
            }
        }
        Ok(())
    }
}

/// Derived display view over a listed working set. With `hide_disabled` set,
/// keeps only enabled records; relative order is preserved either way.
pub fn filtered(records: &[UserRecord], hide_disabled: bool) -> Vec<UserRecord> {
    if !hide_disabled {
        return records.to_vec();
    }
    records.iter().filter(|u| u.enabled).cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, enabled: bool) -> UserRecord {
        UserRecord {
            id,
            username: format!("user{id}"),
            display_name: format!("User {id}"),
            phone: "555-0100".into(),
            email: format!("user{id}@example.com"),
            enabled,
            roles: "member".into(),
        }
    }

    #[test]
    fn enabled_label_maps_to_yes_no() {
        assert_eq!(record(1, true).enabled_label(), "Yes");
        assert_eq!(record(1, false).enabled_label(), "No");
    }

    #[test]
    fn filtered_off_returns_everything() {
        let records = vec![record(1, true), record(2, false), record(3, true)];
        assert_eq!(filtered(&records, false), records);
    }

    #[test]
    fn filtered_keeps_only_enabled_in_order() {
        let records = vec![record(1, false), record(2, true), record(3, false)];
        let visible = filtered(&records, true);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 2);

        let records = vec![record(3, true), record(1, true), record(2, false)];
        let visible = filtered(&records, true);
        let ids: Vec<i64> = visible.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn filtered_result_is_subset_of_unfiltered() {
        let records = vec![record(1, true), record(2, false), record(3, true)];
        let all = filtered(&records, false);
        let visible = filtered(&records, true);
        assert!(visible.iter().all(|u| all.contains(u)));
        assert!(visible.iter().all(|u| u.enabled));
    }

    #[test]
    fn validate_rejects_each_empty_field() {
        let full = NewUser {
            username: "alice".into(),
            display_name: "Alice".into(),
            phone: "555-0100".into(),
            email: "alice@example.com".into(),
            enabled: true,
            roles: "admin".into(),
        };
        assert!(full.validate().is_ok());

        for field in ["username", "display_name", "phone", "email", "roles"] {
            let mut user = full.clone();
            match field {
                "username" => user.username.clear(),
                "display_name" => user.display_name.clear(),
                "phone" => user.phone.clear(),
                "email" => user.email.clear(),
                "roles" => user.roles = "   ".into(),
                _ => unreachable!(),
            }
            match user.validate() {
                Err(StoreError::EmptyField(name)) => assert_eq!(name, field),
                other => panic!("expected EmptyField for {field}, got {other:?}"),
            }
        }
    }
}
