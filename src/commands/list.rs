use anyhow::Result;
use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};

use crate::store::{UserRecord, UserStore, filtered};
use crate::ui::prelude::*;

/// List the user table, optionally hiding disabled records.
///
/// A storage read error is recoverable: warn and render the empty state
/// instead of failing the command.
pub fn list_users(store: &UserStore, hide_disabled: bool) -> Result<()> {
    let users = match store.list() {
        Ok(users) => users,
        Err(e) => {
            emit(
                Level::Warn,
                "user.list.read_failed",
                &format!("Could not read user records: {e}"),
                None,
            );
            Vec::new()
        }
    };

    let visible = filtered(&users, hide_disabled);

    match get_output_format() {
        OutputFormat::Json => {
            let data = serde_json::json!({
                "users": visible,
                "count": visible.len(),
                "total": users.len(),
                "hide_disabled": hide_disabled,
            });
            emit(
                Level::Info,
                "user.list",
                &format!("{} user(s)", visible.len()),
                Some(data),
            );
        }
        OutputFormat::Text => {
            if visible.is_empty() {
                if hide_disabled && !users.is_empty() {
                    println!("No enabled users ({} hidden).", users.len());
                } else {
                    println!("No users yet. Add one with `userlist add`.");
                }
                return Ok(());
            }

            println!("{}", render_table(&visible));
            if hide_disabled && visible.len() < users.len() {
                println!(
                    "{} of {} user(s) shown, disabled hidden.",
                    visible.len(),
                    users.len()
                );
            } else {
                println!("{} user(s).", visible.len());
            }
        }
    }

    Ok(())
}

fn render_table(users: &[UserRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "ID",
            "Username",
            "Display Name",
            "Phone",
            "Email",
            "Enabled",
            "Roles",
        ]);

    for user in users {
        table.add_row(vec![
            user.id.to_string(),
            user.username.clone(),
            user.display_name.clone(),
            user.phone.clone(),
            user.email.clone(),
            user.enabled_label().to_string(),
            user.roles.clone(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_renders_one_row_per_user() {
        let users = vec![
            UserRecord {
                id: 1,
                username: "alice".into(),
                display_name: "Alice".into(),
                phone: "555-0100".into(),
                email: "alice@example.com".into(),
                enabled: true,
                roles: "admin".into(),
            },
            UserRecord {
                id: 2,
                username: "bob".into(),
                display_name: "Bob".into(),
                phone: "555-0101".into(),
                email: "bob@example.com".into(),
                enabled: false,
                roles: "member".into(),
            },
        ];

        let rendered = render_table(&users).to_string();
        assert!(rendered.contains("alice"));
        assert!(rendered.contains("Yes"));
        assert!(rendered.contains("bob"));
        assert!(rendered.contains("No"));
    }
}
