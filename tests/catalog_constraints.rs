mod common;

use dealer_portal_api::{
    dto::{
        accounts::UpdateDealerRequest,
        catalog::{
            CreateBulkDiscountRequest, CreateSerialRequest, RegisterWarrantyRequest,
            UpdateBulkDiscountRequest, UpdateSerialStatusRequest,
        },
        orders::{CreateOrderRequest, OrderLineRequest},
    },
    entity::{product_serials::ProductSerialStatus, products},
    error::AppError,
    services::{
        account_service, bulk_discount_service, order_service, serial_service, warranty_service,
    },
};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Set};

#[tokio::test]
async fn duplicate_sku_is_a_conflict() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;

    common::create_product(&state, &admin, "P-100").await?;
    let err = common::create_product(&state, &admin, "P-100")
        .await
        .expect_err("second insert must fail");
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::Conflict(_))
    ));

    // The table constraint holds even when the service check is bypassed.
    let raw = products::ActiveModel {
        sku: Set("P-100".into()),
        name: Set("Shadow".into()),
        retail_price: Set(Decimal::ONE),
        show_on_homepage: Set(false),
        is_featured: Set(false),
        is_deleted: Set(false),
        publish_status: Set(products::PublishStatus::Unpublished),
        stock: Set(0),
        ..Default::default()
    }
    .insert(&state.orm)
    .await;
    assert!(raw.is_err());
    Ok(())
}

#[tokio::test]
async fn serials_are_unique_and_default_to_in_stock() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let product = common::create_product(&state, &admin, "P-200").await?;

    let created = serial_service::create_serial(
        &state,
        &admin,
        CreateSerialRequest {
            product_id: product.id,
            serial: "SN-1".into(),
            status: None,
        },
    )
    .await?
    .into_data()
    .expect("serial");
    assert_eq!(created.status, ProductSerialStatus::InStock);

    let read = serial_service::get_by_serial(&state, "SN-1")
        .await?
        .into_data()
        .expect("serial");
    assert_eq!(read.id, created.id);
    assert_eq!(read.product_id, product.id);
    assert_eq!(read.status, ProductSerialStatus::InStock);

    let dup = serial_service::create_serial(
        &state,
        &admin,
        CreateSerialRequest {
            product_id: product.id,
            serial: "SN-1".into(),
            status: None,
        },
    )
    .await;
    assert!(matches!(dup, Err(AppError::Conflict(_))));

    let moved = serial_service::update_serial_status(
        &state,
        &admin,
        created.id,
        UpdateSerialStatusRequest {
            status: ProductSerialStatus::AllocatedToDealer,
        },
    )
    .await?
    .into_data()
    .expect("serial");
    assert_eq!(moved.status, ProductSerialStatus::AllocatedToDealer);

    let in_stock =
        serial_service::list_for_product(&state, product.id, Some(ProductSerialStatus::InStock))
            .await?
            .into_data()
            .expect("list");
    assert!(in_stock.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn one_warranty_per_serial() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let product = common::create_product(&state, &admin, "P-300").await?;
    serial_service::create_serial(
        &state,
        &admin,
        CreateSerialRequest {
            product_id: product.id,
            serial: "SN-W".into(),
            status: None,
        },
    )
    .await?;

    let request = || RegisterWarrantyRequest {
        serial: "SN-W".into(),
        customer_name: Some("Jo".into()),
        customer_email: None,
        customer_phone: None,
        customer_address: None,
        purchase_date: None,
    };

    let warranty = warranty_service::register_warranty(&state, request())
        .await?
        .into_data()
        .expect("warranty");
    assert!(warranty.warranty_code.starts_with("WR-"));
    assert_eq!(warranty.status, "ACTIVE");

    let by_code = warranty_service::get_by_code(&state, &warranty.warranty_code)
        .await?
        .into_data()
        .expect("warranty");
    assert_eq!(by_code.id, warranty.id);

    let by_serial = warranty_service::get_for_serial(&state, "SN-W")
        .await?
        .into_data()
        .expect("warranty");
    assert_eq!(by_serial.id, warranty.id);

    let again = warranty_service::register_warranty(&state, request()).await;
    assert!(matches!(again, Err(AppError::Conflict(_))));

    let unknown = warranty_service::register_warranty(
        &state,
        RegisterWarrantyRequest {
            serial: "SN-missing".into(),
            ..request()
        },
    )
    .await;
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn dealer_phone_must_be_unique() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    common::register_dealer(&state, "first", "pass1234", Some("0901")).await?;

    let err = common::register_dealer(&state, "second", "pass1234", Some("0901"))
        .await
        .expect_err("phone reuse must fail");
    assert!(matches!(
        err.downcast_ref::<AppError>(),
        Some(AppError::Conflict(_))
    ));

    // A dealer without a phone never collides.
    common::register_dealer(&state, "third", "pass1234", None).await?;
    common::register_dealer(&state, "fourth", "pass1234", None).await?;
    Ok(())
}

#[tokio::test]
async fn order_code_must_be_unique() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", None).await?;
    let product = common::create_product(&state, &admin, "P-400").await?;

    let request = || CreateOrderRequest {
        order_code: Some("ORD-FIXED".into()),
        items: vec![OrderLineRequest {
            product_id: product.id,
            quantity: 1,
        }],
    };

    order_service::create_order(&state, &dealer, request()).await?;
    let dup = order_service::create_order(&state, &dealer, request()).await;
    assert!(matches!(dup, Err(AppError::Conflict(_))));
    Ok(())
}

#[tokio::test]
async fn bulk_discount_tiers_are_validated() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let product = common::create_product(&state, &admin, "P-500").await?;

    let bad = bulk_discount_service::create_bulk_discount(
        &state,
        &admin,
        CreateBulkDiscountRequest {
            product_id: product.id,
            min_quantity: 10,
            max_quantity: Some(5),
            discount_percent: Decimal::new(5, 0),
        },
    )
    .await;
    assert!(matches!(bad, Err(AppError::BadRequest(_))));

    let tier = bulk_discount_service::create_bulk_discount(
        &state,
        &admin,
        CreateBulkDiscountRequest {
            product_id: product.id,
            min_quantity: 10,
            max_quantity: None,
            discount_percent: Decimal::new(5, 0),
        },
    )
    .await?
    .into_data()
    .expect("tier");

    let listed = bulk_discount_service::list_for_product(&state, product.id)
        .await?
        .into_data()
        .expect("list");
    assert_eq!(listed.items.len(), 1);

    bulk_discount_service::delete_bulk_discount(&state, &admin, tier.id).await?;
    let gone = bulk_discount_service::delete_bulk_discount(&state, &admin, tier.id).await;
    assert!(matches!(gone, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn explicit_null_clears_optional_fields() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let product = common::create_product(&state, &admin, "P-600").await?;

    let tier = bulk_discount_service::create_bulk_discount(
        &state,
        &admin,
        CreateBulkDiscountRequest {
            product_id: product.id,
            min_quantity: 10,
            max_quantity: Some(50),
            discount_percent: Decimal::new(5, 0),
        },
    )
    .await?
    .into_data()
    .expect("tier");

    let untouched: UpdateBulkDiscountRequest = serde_json::from_str(r#"{"min_quantity": 20}"#)?;
    let tier = bulk_discount_service::update_bulk_discount(&state, &admin, tier.id, untouched)
        .await?
        .into_data()
        .expect("tier");
    assert_eq!((tier.min_quantity, tier.max_quantity), (20, Some(50)));

    let cleared: UpdateBulkDiscountRequest = serde_json::from_str(r#"{"max_quantity": null}"#)?;
    let tier = bulk_discount_service::update_bulk_discount(&state, &admin, tier.id, cleared)
        .await?
        .into_data()
        .expect("tier");
    assert_eq!(tier.max_quantity, None);

    let dealer = common::register_dealer(&state, "acme", "acmepass", Some("0903")).await?;
    let keep: UpdateDealerRequest = serde_json::from_str(r#"{"address": "Main St"}"#)?;
    let profile = account_service::update_dealer(&state, &dealer, dealer.account_id, keep)
        .await?
        .into_data()
        .expect("dealer");
    assert_eq!(profile.phone.as_deref(), Some("0903"));

    let clear: UpdateDealerRequest = serde_json::from_str(r#"{"phone": null}"#)?;
    let profile = account_service::update_dealer(&state, &dealer, dealer.account_id, clear)
        .await?
        .into_data()
        .expect("dealer");
    assert_eq!(profile.phone, None);
    assert_eq!(profile.address.as_deref(), Some("Main St"));
    Ok(())
}
