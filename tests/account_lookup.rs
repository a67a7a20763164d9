mod common;

use dealer_portal_api::security::{
    AccountKind, LookupError, OrmAccountRepository, UserDetails, UserDetailsService,
};

#[tokio::test]
async fn finds_admin_and_dealer_by_username() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", None).await?;

    let service = UserDetailsService::new(OrmAccountRepository::new(state.orm.clone()));

    let found = service.load_user_by_username("root").await?;
    assert_eq!(found.account_id(), admin.account_id);
    assert!(matches!(found.kind, Some(AccountKind::Admin(_))));
    assert_eq!(found.authorities(), vec!["admin".to_string()]);
    assert!(found.is_enabled());

    let found = service.load_user_by_username("acme").await?;
    assert_eq!(found.account_id(), dealer.account_id);
    assert_eq!(found.username(), "acme");
    assert!(matches!(found.kind, Some(AccountKind::Dealer(_))));
    assert_ne!(found.password_hash(), "acmepass");
    Ok(())
}

#[tokio::test]
async fn unknown_username_is_reported() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let service = UserDetailsService::new(OrmAccountRepository::new(state.orm.clone()));

    match service.load_user_by_username("nobody").await {
        Err(LookupError::UsernameNotFound(name)) => assert_eq!(name, "nobody"),
        other => panic!("expected UsernameNotFound, got {other:?}"),
    }
    Ok(())
}
