use simcop_core::{
    grant_permission, inspect_user, revoke_permission, AdminError, GrantOutcome, RevokeOutcome,
    UserPermissionStore, UserRecord,
};

use crate::cli_args::{PermissionArgs, ShowUserArgs};
use crate::modules::system::CommandContext;

fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

pub(crate) async fn handle_grant(
    args: PermissionArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let mut lines = Vec::new();
    let result = run_grant(&ctx.store(), &args.username, &args.permission, &mut lines).await;
    print_lines(&lines);
    result
}

pub(crate) async fn handle_revoke(
    args: PermissionArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let mut lines = Vec::new();
    let result = run_revoke(&ctx.store(), &args.username, &args.permission, &mut lines).await;
    print_lines(&lines);
    result
}

pub(crate) async fn handle_show_user(
    args: ShowUserArgs,
    ctx: &CommandContext<'_>,
) -> anyhow::Result<()> {
    let record = inspect_user(&ctx.store(), &args.username).await?;
    print_lines(&render_user(&record));
    Ok(())
}

/// Grants and appends the status lines, then the final state of the user.
/// Lines written before a failure stay in `out`.
pub(crate) async fn run_grant<S>(
    store: &S,
    username: &str,
    permission: &str,
    out: &mut Vec<String>,
) -> anyhow::Result<()>
where
    S: UserPermissionStore + ?Sized,
{
    let username = username.trim();
    let permission = permission.trim();

    match grant_permission(store, username, permission).await? {
        GrantOutcome::Granted { before, after } => {
            out.push(format!("Current permissions: {before}"));
            out.push(format!("✅ Permission {permission} granted to {username}"));
            out.push(format!("New permissions: {after}"));
        }
        GrantOutcome::AlreadyPresent { permissions } => {
            out.push(format!("Current permissions: {permissions}"));
            out.push(format!(
                "ℹ️ User {username} already has permission {permission}"
            ));
        }
        GrantOutcome::UserNotFound => {
            out.push(format!("❌ User '{username}' not found"));
        }
    }

    final_state(store, username, out).await
}

pub(crate) async fn run_revoke<S>(
    store: &S,
    username: &str,
    permission: &str,
    out: &mut Vec<String>,
) -> anyhow::Result<()>
where
    S: UserPermissionStore + ?Sized,
{
    let username = username.trim();
    let permission = permission.trim();

    match revoke_permission(store, username, permission).await? {
        RevokeOutcome::Revoked { before, after } => {
            out.push(format!("Current permissions: {before}"));
            out.push(format!("✅ Permission {permission} revoked from {username}"));
            out.push(format!("New permissions: {after}"));
        }
        RevokeOutcome::NotPresent { permissions } => {
            out.push(format!("Current permissions: {permissions}"));
            out.push(format!(
                "ℹ️ User {username} does not have permission {permission}"
            ));
        }
        RevokeOutcome::UserNotFound => {
            out.push(format!("❌ User '{username}' not found"));
        }
    }

    final_state(store, username, out).await
}

// Re-reads the row so the operator sees what is stored now. An unknown user
// has no final state.
async fn final_state<S>(store: &S, username: &str, out: &mut Vec<String>) -> anyhow::Result<()>
where
    S: UserPermissionStore + ?Sized,
{
    match inspect_user(store, username).await {
        Ok(record) => {
            out.push(String::new());
            out.push("--- Final state ---".to_string());
            out.extend(render_user(&record));
            Ok(())
        }
        Err(AdminError::UserNotFound(_)) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

pub(crate) fn render_user(record: &UserRecord) -> Vec<String> {
    vec![
        format!("User: {}", record.username),
        format!("Role: {}", record.role),
        format!(
            "Permissions ({}): {}",
            record.permissions.len(),
            record.permissions
        ),
    ]
}
