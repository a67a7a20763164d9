//! Authentication boundary: password hashing, bearer tokens and the
//! username lookup the login flow is built on.

pub mod password;
pub mod token;
pub mod user_details;

pub use user_details::{
    AccountDetails, AccountKind, AccountRepository, LookupError, OrmAccountRepository,
    UserDetails, UserDetailsService,
};
