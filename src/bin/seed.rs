use dealer_portal_api::{
    config::AppConfig,
    db::{OrmConn, create_orm_conn, run_migrations},
    entity::{
        accounts, admins, category_blogs, dealers,
        product_serials::{self, ProductSerialStatus},
        products::{self, PublishStatus},
    },
    security::password::hash_password,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url).await?;
    run_migrations(&orm).await?;

    let admin_id = ensure_admin(&orm, "admin", "admin123").await?;
    let dealer_id = ensure_dealer(&orm, "dealer", "dealer123").await?;
    seed_catalog(&orm).await?;
    ensure_category(&orm, "News").await?;

    println!("Seed completed. Admin ID: {admin_id}, Dealer ID: {dealer_id}");
    Ok(())
}

async fn ensure_account(orm: &OrmConn, username: &str, password: &str) -> anyhow::Result<(i64, bool)> {
    if let Some(existing) = accounts::Entity::find()
        .filter(accounts::Column::Username.eq(username))
        .one(orm)
        .await?
    {
        return Ok((existing.id, false));
    }

    let account = accounts::ActiveModel {
        username: Set(username.to_string()),
        password: Set(hash_password(password)?),
        enabled: Set(true),
        ..Default::default()
    }
    .insert(orm)
    .await?;
    Ok((account.id, true))
}

async fn ensure_admin(orm: &OrmConn, username: &str, password: &str) -> anyhow::Result<i64> {
    let (id, created) = ensure_account(orm, username, password).await?;
    if created {
        admins::ActiveModel {
            id_account: Set(id),
            require_login_email_confirmation: Set(false),
        }
        .insert(orm)
        .await?;
    }
    Ok(id)
}

async fn ensure_dealer(orm: &OrmConn, username: &str, password: &str) -> anyhow::Result<i64> {
    let (id, created) = ensure_account(orm, username, password).await?;
    if created {
        dealers::ActiveModel {
            id_account: Set(id),
            company_name: Set(Some("Demo Trading Co.".into())),
            address: Set(Some("1 Harbour Road".into())),
            phone: Set(Some("0900000001".into())),
        }
        .insert(orm)
        .await?;
    }
    Ok(id)
}

async fn seed_catalog(orm: &OrmConn) -> anyhow::Result<()> {
    let samples = [
        ("DP-100", "Desk Phone 100", Decimal::new(129_00, 2), 25, true),
        ("DP-200", "Desk Phone 200", Decimal::new(189_00, 2), 10, false),
        ("HS-10", "Wireless Headset", Decimal::new(59_90, 2), 40, true),
    ];

    for (sku, name, price, stock, featured) in samples {
        let exists = products::Entity::find()
            .filter(products::Column::Sku.eq(sku))
            .one(orm)
            .await?
            .is_some();
        if exists {
            continue;
        }

        let product = products::ActiveModel {
            sku: Set(sku.to_string()),
            name: Set(name.to_string()),
            short_description: Set(Some(format!("{name} sample product"))),
            retail_price: Set(price),
            show_on_homepage: Set(featured),
            is_featured: Set(featured),
            is_deleted: Set(false),
            publish_status: Set(PublishStatus::Published),
            stock: Set(stock),
            ..Default::default()
        }
        .insert(orm)
        .await?;

        for n in 1..=3 {
            product_serials::ActiveModel {
                serial: Set(format!("{sku}-{n:04}")),
                status: Set(ProductSerialStatus::InStock),
                id_product: Set(product.id),
                ..Default::default()
            }
            .insert(orm)
            .await?;
        }
    }

    Ok(())
}

async fn ensure_category(orm: &OrmConn, name: &str) -> anyhow::Result<()> {
    let exists = category_blogs::Entity::find()
        .filter(category_blogs::Column::Name.eq(name))
        .one(orm)
        .await?
        .is_some();
    if !exists {
        category_blogs::ActiveModel {
            name: Set(name.to_string()),
            ..Default::default()
        }
        .insert(orm)
        .await?;
    }
    Ok(())
}
