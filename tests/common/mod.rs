#![allow(dead_code)]

use dealer_portal_api::{
    config::AuthSettings,
    db::run_migrations,
    dto::{
        accounts::{CreateAdminRequest, RegisterDealerRequest},
        products::CreateProductRequest,
    },
    entity::{accounts, admins},
    middleware::auth::{AuthUser, ROLE_ADMIN, ROLE_DEALER},
    models::Product,
    security::password::hash_password,
    services::{account_service, product_service},
    state::AppState,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ConnectOptions, Database, Set};

pub const TEST_SECRET: &str = "test-secret";

/// Fresh in-memory database with the full schema applied. Every pooled
/// connection would open its own empty database, so the pool holds one.
pub async fn setup_state() -> anyhow::Result<AppState> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let orm = Database::connect(options).await?;
    run_migrations(&orm).await?;
    Ok(AppState::new(
        orm,
        AuthSettings {
            jwt_secret: TEST_SECRET.into(),
            token_ttl_hours: 1,
        },
    ))
}

/// Inserts an admin directly; the service path requires an admin caller.
pub async fn bootstrap_admin(
    state: &AppState,
    username: &str,
    password: &str,
) -> anyhow::Result<AuthUser> {
    let account = accounts::ActiveModel {
        username: Set(username.to_string()),
        password: Set(hash_password(password)?),
        enabled: Set(true),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;
    admins::ActiveModel {
        id_account: Set(account.id),
        require_login_email_confirmation: Set(false),
    }
    .insert(&state.orm)
    .await?;

    Ok(AuthUser {
        account_id: account.id,
        role: ROLE_ADMIN.into(),
    })
}

pub async fn create_admin(
    state: &AppState,
    by: &AuthUser,
    username: &str,
) -> anyhow::Result<AuthUser> {
    let admin = account_service::create_admin(
        state,
        by,
        CreateAdminRequest {
            username: username.into(),
            password: "secret123".into(),
            require_login_email_confirmation: false,
        },
    )
    .await?
    .into_data()
    .ok_or_else(|| anyhow::anyhow!("missing admin"))?;

    Ok(AuthUser {
        account_id: admin.account.id,
        role: ROLE_ADMIN.into(),
    })
}

pub async fn register_dealer(
    state: &AppState,
    username: &str,
    password: &str,
    phone: Option<&str>,
) -> anyhow::Result<AuthUser> {
    let dealer = account_service::register_dealer(
        state,
        RegisterDealerRequest {
            username: username.into(),
            password: password.into(),
            company_name: Some(format!("{username} Ltd")),
            address: None,
            phone: phone.map(str::to_string),
        },
    )
    .await?
    .into_data()
    .ok_or_else(|| anyhow::anyhow!("missing dealer"))?;

    Ok(AuthUser {
        account_id: dealer.account.id,
        role: ROLE_DEALER.into(),
    })
}

pub fn product_request(sku: &str, name: &str) -> CreateProductRequest {
    CreateProductRequest {
        sku: sku.into(),
        name: name.into(),
        short_description: None,
        image: None,
        descriptions: None,
        videos: None,
        specifications: None,
        retail_price: Decimal::new(1250, 2),
        show_on_homepage: false,
        is_featured: false,
        publish_status: None,
        stock: 5,
    }
}

pub async fn create_product(
    state: &AppState,
    admin: &AuthUser,
    sku: &str,
) -> anyhow::Result<Product> {
    product_service::create_product(state, admin, product_request(sku, &format!("Product {sku}")))
        .await?
        .into_data()
        .ok_or_else(|| anyhow::anyhow!("missing product"))
}
