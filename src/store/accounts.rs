use crate::core::{Account, Page, Result, StoreError};
use crate::storage::LocalStorage;
use log::{debug, warn};

/// Storage key for the serialized account collection
pub const USERS_KEY: &str = "tasksort_users";
/// Storage key for the serialized session record
pub const SESSION_KEY: &str = "current_user";

/// Account store
///
/// Owns the account collection and the single session pointer. At most
/// one account exists per email; the session, if present, is always a
/// copy of a record produced by a successful login.
pub struct AccountStore<S: LocalStorage> {
    storage: S,
    accounts: Vec<Account>,
    session: Option<Account>,
    recovered: bool,
}

impl<S: LocalStorage> AccountStore<S> {
    const SEED_EMAIL: &'static str = "TaskSort@example.com";
    const SEED_PASSWORD: &'static str = "12345678";
    const SEED_DISPLAY_NAME: &'static str = "Juan Pablo";

    /// Open the store, loading accounts and the persisted session
    ///
    /// When no account collection exists in storage the demonstration
    /// account is seeded in memory; it reaches storage together with the
    /// first successful registration. Unreadable payloads under either
    /// key are recoverable: seed/none fallback plus a logged diagnostic.
    pub fn open(storage: S) -> Result<Self> {
        let mut store = Self {
            storage,
            accounts: Vec::new(),
            session: None,
            recovered: false,
        };
        store.load()?;
        Ok(store)
    }

    fn load(&mut self) -> Result<()> {
        self.accounts = match self.storage.get_item(USERS_KEY)? {
            None => Self::seed(),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(accounts) => accounts,
                Err(err) => {
                    let fault = StoreError::Corrupted {
                        key: USERS_KEY.to_string(),
                        detail: err.to_string(),
                    };
                    warn!("discarding unreadable account data: {fault}");
                    self.recovered = true;
                    Self::seed()
                }
            },
        };

        self.session = match self.storage.get_item(SESSION_KEY)? {
            None => None,
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(account) => Some(account),
                Err(err) => {
                    let fault = StoreError::Corrupted {
                        key: SESSION_KEY.to_string(),
                        detail: err.to_string(),
                    };
                    warn!("discarding unreadable session data: {fault}");
                    self.recovered = true;
                    None
                }
            },
        };
        Ok(())
    }

    fn seed() -> Vec<Account> {
        vec![Account {
            email: Self::SEED_EMAIL.to_string(),
            password: Self::SEED_PASSWORD.to_string(),
            display_name: Self::SEED_DISPLAY_NAME.to_string(),
        }]
    }

    fn save(&self) -> Result<()> {
        let payload = serde_json::to_string(&self.accounts)
            .map_err(|err| StoreError::Serialize(err.to_string()))?;
        self.storage.set_item(USERS_KEY, &payload)?;
        debug!("synchronization complete");
        Ok(())
    }

    /// Register a new account
    ///
    /// Emails are compared case-sensitively; a collision is a
    /// duplicate-identity failure and nothing is appended or persisted.
    /// Field format is deliberately not validated here.
    pub fn register(&mut self, email: &str, password: &str, display_name: &str) -> Result<()> {
        if self.accounts.iter().any(|account| account.email == email) {
            return Err(StoreError::DuplicateIdentity(email.to_string()));
        }
        self.accounts.push(Account {
            email: email.to_string(),
            password: password.to_string(),
            display_name: display_name.to_string(),
        });
        if let Err(err) = self.save() {
            self.accounts.pop();
            return Err(err);
        }
        Ok(())
    }

    /// Log in with an email/password pair
    ///
    /// The first record matching both fields exactly becomes the session
    /// (persisted as a full copy under `current_user`); the display name
    /// is returned for the welcome message. A mismatch rejects the
    /// credentials and leaves all session state untouched.
    pub fn login(&mut self, email: &str, password: &str) -> Result<String> {
        let found = self
            .accounts
            .iter()
            .find(|account| account.email == email && account.password == password)
            .cloned();
        let Some(account) = found else {
            return Err(StoreError::CredentialsRejected);
        };

        let payload = serde_json::to_string(&account)
            .map_err(|err| StoreError::Serialize(err.to_string()))?;
        self.storage.set_item(SESSION_KEY, &payload)?;
        let display_name = account.display_name.clone();
        self.session = Some(account);
        Ok(display_name)
    }

    /// Log out, gated on an explicit confirmation
    ///
    /// The confirmation callback is the presentation layer's yes/no
    /// prompt. A decline returns `Ok(false)` with all state untouched;
    /// an accept clears the session pointer and the persisted session
    /// value and returns `Ok(true)`.
    pub fn logout<F>(&mut self, confirm: F) -> Result<bool>
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return Ok(false);
        }
        self.storage.remove_item(SESSION_KEY)?;
        self.session = None;
        Ok(true)
    }

    /// Page-load access check
    ///
    /// Evaluated once per page load before any other logic: an
    /// authenticated visitor on the landing page is redirected to the
    /// task page, an unauthenticated visitor anywhere else is redirected
    /// to the landing page. Advisory only - there is no server to
    /// enforce it.
    pub fn route_guard(&self, current: Page) -> Option<Page> {
        match (self.session.is_some(), current) {
            (true, Page::Landing) => Some(Page::Tasks),
            (false, Page::Tasks) => Some(Page::Landing),
            _ => None,
        }
    }

    /// The currently authenticated account, if any
    pub fn current_user(&self) -> Option<&Account> {
        self.session.as_ref()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Whether opening the store discarded an unreadable persisted payload
    pub fn recovered(&self) -> bool {
        self.recovered
    }
}
