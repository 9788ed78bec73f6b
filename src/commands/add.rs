use anyhow::{Context, Result, bail};
use clap::Args;
use dialoguer::{Confirm, Input};

use crate::store::{NewUser, StoreError, UserStore};
use crate::ui::prelude::*;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Login name
    #[arg(long)]
    pub username: Option<String>,

    /// Name shown in the user table
    #[arg(long)]
    pub display_name: Option<String>,

    /// Phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// Email address
    #[arg(long)]
    pub email: Option<String>,

    /// Free-form roles, e.g. "admin" or "support,billing"
    #[arg(long)]
    pub roles: Option<String>,

    /// Create the record with the enabled flag off
    #[arg(long)]
    pub disabled: bool,
}

/// Create a new user record. Fields not given as flags are prompted for in
/// text mode; JSON mode requires all of them up front.
pub fn add_user(store: &UserStore, args: &AddArgs) -> Result<()> {
    let new = collect_fields(args)?;

    // Caller-side validation: an empty field must never reach storage and
    // should read as a validation failure, not a storage error.
    if let Err(StoreError::EmptyField(field)) = new.validate() {
        bail!("{} is required, the user was not created", field);
    }

    let id = store.create(&new).context("user not created")?;

    match get_output_format() {
        OutputFormat::Json => {
            let data = serde_json::json!({
                "id": id,
                "username": new.username,
                "enabled": new.enabled,
            });
            emit(
                Level::Success,
                "user.add",
                &format!("Created user '{}' with id {}", new.username, id),
                Some(data),
            );
        }
        OutputFormat::Text => {
            emit(
                Level::Success,
                "user.add",
                &format!("Created user '{}' with id {}", new.username, id),
                None,
            );
        }
    }

    Ok(())
}

/// Assemble the record fields from flags, falling back to an interactive
/// form for anything missing.
fn collect_fields(args: &AddArgs) -> Result<NewUser> {
    let interactive = get_output_format() == OutputFormat::Text;
    let prompted = [
        &args.username,
        &args.display_name,
        &args.phone,
        &args.email,
        &args.roles,
    ]
    .iter()
    .any(|field| field.is_none());

    let username = field_value(&args.username, "Username", interactive)?;
    let display_name = field_value(&args.display_name, "Display name", interactive)?;
    let phone = field_value(&args.phone, "Phone", interactive)?;
    let email = field_value(&args.email, "Email", interactive)?;
    let roles = field_value(&args.roles, "Roles", interactive)?;

    let enabled = if !args.disabled && prompted && interactive {
        Confirm::new()
            .with_prompt("Enabled?")
            .default(true)
            .interact()?
    } else {
        !args.disabled
    };

    Ok(NewUser {
        username,
        display_name,
        phone,
        email,
        roles,
        enabled,
    })
}

fn field_value(flag: &Option<String>, prompt: &str, interactive: bool) -> Result<String> {
    match flag {
        Some(value) => Ok(value.clone()),
        None if interactive => Ok(Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?),
        // JSON mode is non-interactive; let validation name the field
        None => Ok(String::new()),
    }
}
