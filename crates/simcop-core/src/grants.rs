use tracing::info;

use crate::error::{AdminError, AdminResult};
use crate::models::UserRecord;
use crate::permissions::PermissionList;
use crate::services::{GrantOutcome, RevokeOutcome, UserPermissionStore};

fn normalize_username(username: &str) -> AdminResult<&str> {
    let username = username.trim();
    if username.is_empty() {
        return Err(AdminError::InvalidInput("username is required".to_string()));
    }
    Ok(username)
}

fn normalize_permission(permission: &str) -> AdminResult<&str> {
    let permission = permission.trim();
    if permission.is_empty() {
        return Err(AdminError::InvalidInput(
            "permission token is required".to_string(),
        ));
    }
    Ok(permission)
}

fn decode_for(username: &str, raw: Option<&str>) -> AdminResult<PermissionList> {
    PermissionList::decode(raw).map_err(|source| AdminError::PermissionDecode {
        username: username.to_string(),
        source,
    })
}

async fn write_back<S>(
    store: &S,
    username: &str,
    expected: Option<&str>,
    permissions: &PermissionList,
) -> AdminResult<()>
where
    S: UserPermissionStore + ?Sized,
{
    let written = store
        .store_permissions(username, expected, &permissions.encode())
        .await?;
    if written == 0 {
        return Err(AdminError::ConcurrentUpdate(username.to_string()));
    }
    Ok(())
}

/// Adds `permission` to the user's list unless it is already there.
///
/// Reads the stored list, decodes it and writes the extended list back,
/// conditional on the column still holding what was read. An unknown user
/// is an outcome rather than an error and leads to no write.
pub async fn grant_permission<S>(
    store: &S,
    username: &str,
    permission: &str,
) -> AdminResult<GrantOutcome>
where
    S: UserPermissionStore + ?Sized,
{
    let username = normalize_username(username)?;
    let permission = normalize_permission(permission)?;

    let Some(stored) = store.load_permissions(username).await? else {
        info!(event = "grant_skipped", username, reason = "user_not_found");
        return Ok(GrantOutcome::UserNotFound);
    };
    let before = decode_for(username, stored.raw.as_deref())?;
    let mut after = before.clone();
    if !after.grant(permission) {
        info!(event = "grant_noop", username, permission);
        return Ok(GrantOutcome::AlreadyPresent {
            permissions: before,
        });
    }

    write_back(store, username, stored.raw.as_deref(), &after).await?;
    info!(
        event = "permission_granted",
        username,
        permission,
        count = after.len()
    );
    Ok(GrantOutcome::Granted { before, after })
}

/// Removes every occurrence of `permission` from the user's list.
pub async fn revoke_permission<S>(
    store: &S,
    username: &str,
    permission: &str,
) -> AdminResult<RevokeOutcome>
where
    S: UserPermissionStore + ?Sized,
{
    let username = normalize_username(username)?;
    let permission = normalize_permission(permission)?;

    let Some(stored) = store.load_permissions(username).await? else {
        info!(event = "revoke_skipped", username, reason = "user_not_found");
        return Ok(RevokeOutcome::UserNotFound);
    };
    let before = decode_for(username, stored.raw.as_deref())?;
    let mut after = before.clone();
    if !after.revoke(permission) {
        info!(event = "revoke_noop", username, permission);
        return Ok(RevokeOutcome::NotPresent {
            permissions: before,
        });
    }

    write_back(store, username, stored.raw.as_deref(), &after).await?;
    info!(
        event = "permission_revoked",
        username,
        permission,
        count = after.len()
    );
    Ok(RevokeOutcome::Revoked { before, after })
}

pub async fn inspect_user<S>(store: &S, username: &str) -> AdminResult<UserRecord>
where
    S: UserPermissionStore + ?Sized,
{
    let username = normalize_username(username)?;
    let stored = store
        .find_user(username)
        .await?
        .ok_or_else(|| AdminError::UserNotFound(username.to_string()))?;
    UserRecord::from_stored(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{DEFAULT_PERMISSION, DEFAULT_TARGET_USERNAME};
    use crate::testing::MemoryUsers;

    fn list(tokens: &[&str]) -> PermissionList {
        PermissionList::from(tokens)
    }

    #[tokio::test]
    async fn grant_appends_missing_permission() {
        let store = MemoryUsers::with_user(
            DEFAULT_TARGET_USERNAME,
            "ADMINISTRATOR",
            Some(r#"["PERSONNEL_VIEW"]"#),
        );

        let outcome = grant_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect("grant");

        assert_eq!(
            outcome,
            GrantOutcome::Granted {
                before: list(&["PERSONNEL_VIEW"]),
                after: list(&["PERSONNEL_VIEW", "PERSONNEL"]),
            }
        );
        assert_eq!(
            store.raw_permissions(DEFAULT_TARGET_USERNAME).as_deref(),
            Some(r#"["PERSONNEL_VIEW","PERSONNEL"]"#)
        );
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn grant_is_noop_when_present() {
        let store =
            MemoryUsers::with_user(DEFAULT_TARGET_USERNAME, "ADMINISTRATOR", Some(r#"["PERSONNEL"]"#));

        let outcome = grant_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect("grant");

        assert_eq!(
            outcome,
            GrantOutcome::AlreadyPresent {
                permissions: list(&["PERSONNEL"]),
            }
        );
        assert_eq!(store.writes(), 0);
        assert_eq!(
            store.raw_permissions(DEFAULT_TARGET_USERNAME).as_deref(),
            Some(r#"["PERSONNEL"]"#)
        );
    }

    #[tokio::test]
    async fn grant_twice_matches_grant_once() {
        let store = MemoryUsers::with_user(
            DEFAULT_TARGET_USERNAME,
            "ADMINISTRATOR",
            Some(r#"["DASHBOARD","MAP"]"#),
        );

        grant_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect("first grant");
        let after_first = store.raw_permissions(DEFAULT_TARGET_USERNAME);
        let second = grant_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect("second grant");

        assert!(matches!(second, GrantOutcome::AlreadyPresent { .. }));
        assert_eq!(store.raw_permissions(DEFAULT_TARGET_USERNAME), after_first);
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn grant_for_unknown_user_writes_nothing() {
        let store = MemoryUsers::with_user("someone.else", "USER", Some("[]"));

        let outcome = grant_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect("grant");

        assert_eq!(outcome, GrantOutcome::UserNotFound);
        assert_eq!(store.writes(), 0);
        assert_eq!(store.raw_permissions("someone.else").as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn grant_on_null_column_starts_a_list() {
        let store = MemoryUsers::with_user(DEFAULT_TARGET_USERNAME, "USER", None);

        let outcome = grant_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect("grant");

        assert_eq!(
            outcome,
            GrantOutcome::Granted {
                before: PermissionList::default(),
                after: list(&["PERSONNEL"]),
            }
        );
        assert_eq!(
            store.raw_permissions(DEFAULT_TARGET_USERNAME).as_deref(),
            Some(r#"["PERSONNEL"]"#)
        );
    }

    #[tokio::test]
    async fn grant_fails_on_malformed_permissions_without_writing() {
        let store =
            MemoryUsers::with_user(DEFAULT_TARGET_USERNAME, "USER", Some("DASHBOARD, MAP"));

        let err = grant_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect_err("decode failure");

        assert!(matches!(err, AdminError::PermissionDecode { .. }));
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn grant_reports_concurrent_change() {
        let store =
            MemoryUsers::with_user(DEFAULT_TARGET_USERNAME, "USER", Some(r#"["DASHBOARD"]"#));
        store.interfere_after_read(Some(r#"["DASHBOARD","INTEL"]"#));

        let err = grant_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect_err("concurrent update");

        assert!(matches!(err, AdminError::ConcurrentUpdate(ref name) if name == DEFAULT_TARGET_USERNAME));
        assert_eq!(
            store.raw_permissions(DEFAULT_TARGET_USERNAME).as_deref(),
            Some(r#"["DASHBOARD","INTEL"]"#)
        );
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn grant_trims_inputs_and_rejects_blank_ones() {
        let store = MemoryUsers::with_user(DEFAULT_TARGET_USERNAME, "USER", Some("[]"));

        let outcome = grant_permission(&store, " santiago.salazar ", " PERSONNEL ")
            .await
            .expect("grant");
        assert_eq!(
            outcome,
            GrantOutcome::Granted {
                before: PermissionList::default(),
                after: list(&["PERSONNEL"]),
            }
        );

        let err = grant_permission(&store, DEFAULT_TARGET_USERNAME, "   ")
            .await
            .expect_err("blank permission");
        assert!(matches!(err, AdminError::InvalidInput(_)));
        let err = grant_permission(&store, "", DEFAULT_PERMISSION)
            .await
            .expect_err("blank username");
        assert!(matches!(err, AdminError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn revoke_removes_and_is_idempotent() {
        let store = MemoryUsers::with_user(
            DEFAULT_TARGET_USERNAME,
            "USER",
            Some(r#"["MAP","PERSONNEL","UNITS"]"#),
        );

        let first = revoke_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect("revoke");
        assert_eq!(
            first,
            RevokeOutcome::Revoked {
                before: list(&["MAP", "PERSONNEL", "UNITS"]),
                after: list(&["MAP", "UNITS"]),
            }
        );

        let second = revoke_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect("revoke again");
        assert_eq!(
            second,
            RevokeOutcome::NotPresent {
                permissions: list(&["MAP", "UNITS"]),
            }
        );
        assert_eq!(store.writes(), 1);
    }

    #[tokio::test]
    async fn revoke_for_unknown_user_writes_nothing() {
        let store = MemoryUsers::default();
        let outcome = revoke_permission(&store, DEFAULT_TARGET_USERNAME, DEFAULT_PERMISSION)
            .await
            .expect("revoke");
        assert_eq!(outcome, RevokeOutcome::UserNotFound);
        assert_eq!(store.writes(), 0);
    }

    #[tokio::test]
    async fn inspect_user_decodes_row() {
        let store = MemoryUsers::with_user(
            DEFAULT_TARGET_USERNAME,
            "ADMINISTRATOR",
            Some(r#"["DASHBOARD"]"#),
        );

        let record = inspect_user(&store, DEFAULT_TARGET_USERNAME)
            .await
            .expect("inspect");
        assert_eq!(record.role, "ADMINISTRATOR");
        assert_eq!(record.permissions, list(&["DASHBOARD"]));

        let err = inspect_user(&store, "ghost")
            .await
            .expect_err("missing user");
        assert!(matches!(err, AdminError::UserNotFound(ref name) if name == "ghost"));
    }
}
