use std::future::Future;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ModelTrait, QueryFilter};
use thiserror::Error;

use crate::entity::{accounts, admins, dealers};

/// Which variant table an account lives in.
#[derive(Clone, Debug, PartialEq)]
pub enum AccountKind {
    Admin(admins::Model),
    Dealer(dealers::Model),
}

impl AccountKind {
    pub fn role(&self) -> &'static str {
        match self {
            AccountKind::Admin(_) => "admin",
            AccountKind::Dealer(_) => "dealer",
        }
    }
}

/// What the authentication boundary needs to know about a principal.
pub trait UserDetails {
    fn account_id(&self) -> i64;
    fn username(&self) -> &str;
    fn password_hash(&self) -> &str;
    fn authorities(&self) -> Vec<String>;
    fn is_enabled(&self) -> bool;
}

/// An account together with its variant row, if one exists.
#[derive(Clone, Debug, PartialEq)]
pub struct AccountDetails {
    pub account: accounts::Model,
    pub kind: Option<AccountKind>,
}

impl AccountDetails {
    pub fn role(&self) -> Option<&'static str> {
        self.kind.as_ref().map(AccountKind::role)
    }
}

impl UserDetails for AccountDetails {
    fn account_id(&self) -> i64 {
        self.account.id
    }

    fn username(&self) -> &str {
        &self.account.username
    }

    fn password_hash(&self) -> &str {
        &self.account.password
    }

    fn authorities(&self) -> Vec<String> {
        self.role().map(|r| vec![r.to_string()]).unwrap_or_default()
    }

    fn is_enabled(&self) -> bool {
        self.account.enabled
    }
}

pub trait AccountRepository: Send + Sync {
    fn find_by_username(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<AccountDetails>, DbErr>> + Send;
}

#[derive(Clone)]
pub struct OrmAccountRepository {
    conn: DatabaseConnection,
}

impl OrmAccountRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

impl AccountRepository for OrmAccountRepository {
    async fn find_by_username(&self, username: &str) -> Result<Option<AccountDetails>, DbErr> {
        let Some(account) = accounts::Entity::find()
            .filter(accounts::Column::Username.eq(username))
            .one(&self.conn)
            .await?
        else {
            return Ok(None);
        };

        let kind = match account.find_related(admins::Entity).one(&self.conn).await? {
            Some(admin) => Some(AccountKind::Admin(admin)),
            None => account
                .find_related(dealers::Entity)
                .one(&self.conn)
                .await?
                .map(AccountKind::Dealer),
        };

        Ok(Some(AccountDetails { account, kind }))
    }
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("user not found: {0}")]
    UsernameNotFound(String),

    #[error("account lookup failed")]
    Repository(#[from] DbErr),
}

/// Resolves a username into the account record used for authentication.
/// Reads only; never mutates the account.
pub struct UserDetailsService<R> {
    repository: R,
}

impl<R: AccountRepository> UserDetailsService<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn load_user_by_username(&self, username: &str) -> Result<AccountDetails, LookupError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or_else(|| LookupError::UsernameNotFound(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use chrono::Utc;

    use super::*;

    struct InMemoryAccounts(HashMap<String, AccountDetails>);

    impl AccountRepository for InMemoryAccounts {
        async fn find_by_username(&self, username: &str) -> Result<Option<AccountDetails>, DbErr> {
            Ok(self.0.get(username).cloned())
        }
    }

    fn dealer(id: i64, username: &str) -> AccountDetails {
        let now = Utc::now().fixed_offset();
        AccountDetails {
            account: accounts::Model {
                id,
                username: username.into(),
                password: "hash".into(),
                enabled: true,
                created_at: now,
                updated_at: now,
            },
            kind: Some(AccountKind::Dealer(dealers::Model {
                id_account: id,
                company_name: None,
                address: None,
                phone: None,
            })),
        }
    }

    #[tokio::test]
    async fn present_username_returns_that_account() {
        let repo = InMemoryAccounts(HashMap::from([("acme".to_string(), dealer(3, "acme"))]));
        let service = UserDetailsService::new(repo);

        let found = service.load_user_by_username("acme").await.unwrap();
        assert_eq!(found.account_id(), 3);
        assert_eq!(found.username(), "acme");
        assert_eq!(found.authorities(), vec!["dealer".to_string()]);
    }

    #[tokio::test]
    async fn absent_username_is_not_found() {
        let service = UserDetailsService::new(InMemoryAccounts(HashMap::new()));

        let err = service.load_user_by_username("ghost").await.unwrap_err();
        assert!(matches!(err, LookupError::UsernameNotFound(name) if name == "ghost"));
    }
}
