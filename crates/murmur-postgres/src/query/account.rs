//! Account repository.

use std::future::Future;

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use uuid::Uuid;

use crate::model::{Account, NewAccount};
use crate::{PgConnection, PgError, PgResult, schema};

/// Repository for account database operations.
pub trait AccountRepository {
    /// Creates a new account.
    fn create_account(
        &mut self,
        account: NewAccount,
    ) -> impl Future<Output = PgResult<Account>> + Send;

    /// Finds an account by its unique identifier.
    fn find_account_by_id(
        &mut self,
        account_id: Uuid,
    ) -> impl Future<Output = PgResult<Option<Account>>> + Send;

    /// Inserts the account if its email address is not yet registered, then
    /// returns the stored row either way.
    ///
    /// Used to seed the fixed identity the stub session provider resolves.
    fn ensure_account(
        &mut self,
        account: NewAccount,
    ) -> impl Future<Output = PgResult<Account>> + Send;
}

impl AccountRepository for PgConnection {
    async fn create_account(&mut self, account: NewAccount) -> PgResult<Account> {
        use schema::accounts;

        let account = diesel::insert_into(accounts::table)
            .values(&account)
            .returning(Account::as_returning())
            .get_result(self)
            .await
            .map_err(PgError::from)?;

        Ok(account)
    }

    async fn find_account_by_id(&mut self, account_id: Uuid) -> PgResult<Option<Account>> {
        use schema::accounts::dsl::*;

        let account = accounts
            .filter(id.eq(account_id))
            .select(Account::as_select())
            .first(self)
            .await
            .optional()
            .map_err(PgError::from)?;

        Ok(account)
    }

    async fn ensure_account(&mut self, account: NewAccount) -> PgResult<Account> {
        use schema::accounts::dsl::*;

        diesel::insert_into(accounts)
            .values(&account)
            .on_conflict(email_address)
            .do_nothing()
            .execute(self)
            .await
            .map_err(PgError::from)?;

        let stored = accounts
            .filter(email_address.eq(&account.email_address))
            .select(Account::as_select())
            .first(self)
            .await
            .map_err(PgError::from)?;

        Ok(stored)
    }
}
