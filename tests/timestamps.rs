mod common;

use std::time::Duration;

use dealer_portal_api::{
    dto::products::UpdateProductRequest, entity::accounts, services::product_service,
};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

#[tokio::test]
async fn created_at_is_fixed_and_updated_at_advances() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let product = common::create_product(&state, &admin, "T-1").await?;
    assert_eq!(product.created_at, product.updated_at);

    tokio::time::sleep(Duration::from_millis(20)).await;

    let updated = product_service::update_product(
        &state,
        &admin,
        product.id,
        UpdateProductRequest {
            name: Some("Renamed".into()),
            ..Default::default()
        },
    )
    .await?
    .into_data()
    .expect("product");

    assert_eq!(updated.created_at, product.created_at);
    assert!(updated.updated_at > product.updated_at);
    Ok(())
}

#[tokio::test]
async fn explicit_created_at_is_ignored_on_update() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;

    let account = accounts::Entity::find_by_id(admin.account_id)
        .one(&state.orm)
        .await?
        .expect("account");
    let original = account.created_at;

    let mut active: accounts::ActiveModel = account.into();
    active.created_at = Set(original - chrono::Duration::days(30));
    active.enabled = Set(false);
    let saved = active.update(&state.orm).await?;

    assert_eq!(saved.created_at, original);
    assert!(!saved.enabled);
    Ok(())
}
