mod common;

use dealer_portal_api::{
    dto::{
        blogs::CreateBlogRequest,
        orders::{CreateOrderRequest, OrderLineRequest},
    },
    routes::params::{BlogQuery, OrderListQuery, ProductQuery},
    services::{blog_service, order_service, product_service},
};
use serde_json::json;

#[tokio::test]
async fn deleted_products_stay_addressable_but_leave_listings() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let kept = common::create_product(&state, &admin, "S-1").await?;
    let dropped = common::create_product(&state, &admin, "S-2").await?;

    product_service::delete_product(&state, &admin, dropped.id).await?;

    let by_id = product_service::get_product(&state, dropped.id)
        .await?
        .into_data()
        .expect("product");
    assert!(by_id.is_deleted);

    let listed = product_service::list_products(&state, ProductQuery::default())
        .await?
        .into_data()
        .expect("list");
    let ids: Vec<i64> = listed.items.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![kept.id]);
    Ok(())
}

#[tokio::test]
async fn deleted_blogs_stay_addressable_but_leave_listings() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;

    let blog = blog_service::create_blog(
        &state,
        &admin,
        CreateBlogRequest {
            title: "Launch".into(),
            description: None,
            image: Some(json!({ "url": "launch.png" })),
            introduction: Some(json!([{ "type": "paragraph", "text": "Hello" }])),
            show_on_homepage: true,
            category_id: None,
        },
    )
    .await?
    .into_data()
    .expect("blog");

    blog_service::delete_blog(&state, &admin, blog.id).await?;

    let by_id = blog_service::get_blog(&state, blog.id)
        .await?
        .into_data()
        .expect("blog");
    assert!(by_id.is_deleted);
    assert_eq!(by_id.image, Some(json!({ "url": "launch.png" })));

    let listed = blog_service::list_blogs(&state, BlogQuery::default())
        .await?
        .into_data()
        .expect("list");
    assert!(listed.items.is_empty());
    Ok(())
}

#[tokio::test]
async fn deleted_orders_stay_addressable_but_leave_listings() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", None).await?;
    let product = common::create_product(&state, &admin, "S-3").await?;

    let placed = order_service::create_order(
        &state,
        &dealer,
        CreateOrderRequest {
            order_code: None,
            items: vec![OrderLineRequest {
                product_id: product.id,
                quantity: 2,
            }],
        },
    )
    .await?
    .into_data()
    .expect("order");

    order_service::delete_order(&state, &admin, placed.order.id).await?;

    let by_id = order_service::get_order(&state, &admin, placed.order.id)
        .await?
        .into_data()
        .expect("order");
    assert!(by_id.order.is_deleted);
    assert_eq!(by_id.items.len(), 1);

    for caller in [&admin, &dealer] {
        let listed = order_service::list_orders(&state, caller, OrderListQuery::default())
            .await?
            .into_data()
            .expect("list");
        assert!(listed.items.is_empty());
    }
    Ok(())
}
