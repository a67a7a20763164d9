mod common;

use dealer_portal_api::{
    dto::cart::PutCartItemRequest,
    entity::{dealer_cart_items, product_of_carts},
    error::AppError,
    services::{cart_service, product_service},
};
use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

#[tokio::test]
async fn putting_the_same_product_twice_keeps_one_line() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", None).await?;
    let product = common::create_product(&state, &admin, "C-1").await?;

    for quantity in [2, 7] {
        cart_service::put_cart_item(
            &state,
            &dealer,
            PutCartItemRequest {
                product_id: product.id,
                quantity,
            },
        )
        .await?;
    }

    let cart = cart_service::list_cart(&state, &dealer)
        .await?
        .into_data()
        .expect("cart");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 7);
    assert_eq!(cart.items[0].product.id, product.id);

    assert_eq!(dealer_cart_items::Entity::find().count(&state.orm).await?, 1);
    assert_eq!(product_of_carts::Entity::find().count(&state.orm).await?, 1);

    // A second row with the same composite key is refused by the table.
    let line = &cart.items[0];
    let dup = dealer_cart_items::ActiveModel {
        id_dealer: Set(line.dealer_id),
        id_product_of_cart: Set(line.product_of_cart_id),
        quantity: Set(1),
        ..Default::default()
    }
    .insert(&state.orm)
    .await;
    assert!(dup.is_err());
    Ok(())
}

#[tokio::test]
async fn cart_is_per_dealer_and_removable() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let first = common::register_dealer(&state, "first", "pass1234", None).await?;
    let second = common::register_dealer(&state, "second", "pass1234", None).await?;
    let product = common::create_product(&state, &admin, "C-2").await?;

    for dealer in [&first, &second] {
        cart_service::put_cart_item(
            &state,
            dealer,
            PutCartItemRequest {
                product_id: product.id,
                quantity: 1,
            },
        )
        .await?;
    }
    assert_eq!(product_of_carts::Entity::find().count(&state.orm).await?, 1);

    cart_service::remove_cart_item(&state, &first, product.id).await?;
    let first_cart = cart_service::list_cart(&state, &first)
        .await?
        .into_data()
        .expect("cart");
    let second_cart = cart_service::list_cart(&state, &second)
        .await?
        .into_data()
        .expect("cart");
    assert!(first_cart.items.is_empty());
    assert_eq!(second_cart.items.len(), 1);

    let again = cart_service::remove_cart_item(&state, &first, product.id).await;
    assert!(matches!(again, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn cart_rejects_bad_input_and_admins() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", None).await?;
    let product = common::create_product(&state, &admin, "C-3").await?;

    let zero = cart_service::put_cart_item(
        &state,
        &dealer,
        PutCartItemRequest {
            product_id: product.id,
            quantity: 0,
        },
    )
    .await;
    assert!(matches!(zero, Err(AppError::BadRequest(_))));

    let missing = cart_service::put_cart_item(
        &state,
        &dealer,
        PutCartItemRequest {
            product_id: product.id + 100,
            quantity: 1,
        },
    )
    .await;
    assert!(matches!(missing, Err(AppError::BadRequest(_))));

    let as_admin = cart_service::list_cart(&state, &admin).await;
    assert!(matches!(as_admin, Err(AppError::Forbidden)));
    Ok(())
}

#[tokio::test]
async fn a_product_has_one_cart_offer() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", None).await?;
    let product = common::create_product(&state, &admin, "C-5").await?;

    let existing = product_of_carts::ActiveModel {
        id_product: Set(product.id),
        ..Default::default()
    }
    .insert(&state.orm)
    .await?;

    let dup = product_of_carts::ActiveModel {
        id_product: Set(product.id),
        ..Default::default()
    }
    .insert(&state.orm)
    .await;
    assert!(dup.is_err());

    let line = cart_service::put_cart_item(
        &state,
        &dealer,
        PutCartItemRequest {
            product_id: product.id,
            quantity: 3,
        },
    )
    .await?
    .into_data()
    .expect("line");
    assert_eq!(line.product_of_cart_id, existing.id);
    assert_eq!(product_of_carts::Entity::find().count(&state.orm).await?, 1);
    Ok(())
}

#[tokio::test]
async fn cart_hides_soft_deleted_products() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", None).await?;
    let kept = common::create_product(&state, &admin, "C-6").await?;
    let dropped = common::create_product(&state, &admin, "C-7").await?;

    for product_id in [kept.id, dropped.id] {
        cart_service::put_cart_item(
            &state,
            &dealer,
            PutCartItemRequest {
                product_id,
                quantity: 1,
            },
        )
        .await?;
    }
    product_service::delete_product(&state, &admin, dropped.id).await?;

    let cart = cart_service::list_cart(&state, &dealer)
        .await?
        .into_data()
        .expect("cart");
    let ids: Vec<i64> = cart.items.iter().map(|line| line.product.id).collect();
    assert_eq!(ids, vec![kept.id]);
    Ok(())
}
