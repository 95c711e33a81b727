/**
 * Account Seeding
 *
 * Creates the configured admin and VIP accounts at startup. Each account
 * is looked up by email first, so restarting the server never duplicates
 * or overwrites an existing account (a changed seed password in the
 * environment does not reset a stored one).
 */

use sqlx::SqlitePool;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::users::{create_user, get_user_by_email, NewUser};
use crate::backend::error::BackendError;
use crate::backend::server::config::SeedAccount;

/// Create every seed account that does not exist yet
///
/// # Returns
///
/// Number of accounts created by this call
pub async fn seed_accounts<'a, I>(
    pool: &SqlitePool,
    passwords: &PasswordHasher,
    accounts: I,
) -> Result<usize, BackendError>
where
    I: IntoIterator<Item = &'a SeedAccount>,
{
    let mut created = 0;

    for account in accounts {
        if get_user_by_email(pool, &account.email).await?.is_some() {
            tracing::debug!("Seed account {} already exists", account.email);
            continue;
        }

        let password_hash = passwords.hash(&account.password).await?;
        let user = create_user(
            pool,
            NewUser {
                username: account.username.clone(),
                email: account.email.clone(),
                password_hash,
                is_admin: account.is_admin,
            },
        )
        .await?;

        tracing::info!(
            "Seeded {} account {} ({})",
            if user.is_admin { "admin" } else { "regular" },
            user.username,
            user.email
        );
        created += 1;
    }

    Ok(created)
}
