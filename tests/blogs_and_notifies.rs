mod common;

use dealer_portal_api::{
    dto::{
        blogs::{CreateBlogRequest, CreateCategoryRequest, UpdateBlogRequest},
        notifies::CreateNotifyRequest,
    },
    error::AppError,
    routes::params::{BlogQuery, NotifyQuery},
    services::{blog_service, notify_service},
};
use serde_json::json;

fn blog(title: &str, category_id: Option<i64>) -> CreateBlogRequest {
    CreateBlogRequest {
        title: title.into(),
        description: Some("body".into()),
        image: None,
        introduction: None,
        show_on_homepage: false,
        category_id,
    }
}

#[tokio::test]
async fn category_lists_its_active_blogs() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;

    let news = blog_service::create_category(
        &state,
        &admin,
        CreateCategoryRequest {
            name: "News".into(),
        },
    )
    .await?
    .into_data()
    .expect("category");

    let kept = blog_service::create_blog(&state, &admin, blog("Kept", Some(news.id)))
        .await?
        .into_data()
        .expect("blog");
    let dropped = blog_service::create_blog(&state, &admin, blog("Dropped", Some(news.id)))
        .await?
        .into_data()
        .expect("blog");
    blog_service::create_blog(&state, &admin, blog("Loose", None)).await?;
    blog_service::delete_blog(&state, &admin, dropped.id).await?;

    let with_blogs = blog_service::get_category(&state, news.id)
        .await?
        .into_data()
        .expect("category");
    assert_eq!(with_blogs.category.name, "News");
    let ids: Vec<i64> = with_blogs.blogs.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![kept.id]);

    let filtered = blog_service::list_blogs(
        &state,
        BlogQuery {
            category_id: Some(news.id),
            ..Default::default()
        },
    )
    .await?
    .into_data()
    .expect("list");
    assert_eq!(filtered.items.len(), 1);

    let unknown = blog_service::create_blog(&state, &admin, blog("Orphan", Some(news.id + 50))).await;
    assert!(matches!(unknown, Err(AppError::BadRequest(_))));
    Ok(())
}

#[tokio::test]
async fn blog_json_fields_must_be_structured() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let created = blog_service::create_blog(&state, &admin, blog("Post", None))
        .await?
        .into_data()
        .expect("blog");

    let scalar = blog_service::update_blog(
        &state,
        &admin,
        created.id,
        UpdateBlogRequest {
            introduction: Some(json!("plain text")),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(scalar, Err(AppError::BadRequest(_))));

    let updated = blog_service::update_blog(
        &state,
        &admin,
        created.id,
        UpdateBlogRequest {
            introduction: Some(json!({ "blocks": [] })),
            show_on_homepage: Some(true),
            ..Default::default()
        },
    )
    .await?
    .into_data()
    .expect("blog");
    assert_eq!(updated.introduction, Some(json!({ "blocks": [] })));
    assert!(updated.show_on_homepage);
    Ok(())
}

#[tokio::test]
async fn notifications_track_read_state() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    let dealer = common::register_dealer(&state, "acme", "acmepass", None).await?;

    let mut ids = Vec::new();
    for title in ["New dealer", "Order placed"] {
        let notify = notify_service::create_notify(
            &state,
            &admin,
            CreateNotifyRequest {
                title: title.into(),
                message: None,
                time: None,
                notify_type: Some("SYSTEM".into()),
            },
        )
        .await?
        .into_data()
        .expect("notify");
        assert!(!notify.is_read);
        ids.push(notify.id);
    }

    let unread = notify_service::unread_count(&state, &admin)
        .await?
        .into_data()
        .expect("count");
    assert_eq!(unread.unread, 2);

    let read = notify_service::mark_read(&state, &admin, ids[0])
        .await?
        .into_data()
        .expect("notify");
    assert!(read.is_read);

    let unread_only = notify_service::list_notifies(
        &state,
        &admin,
        NotifyQuery {
            unread_only: Some(true),
            ..Default::default()
        },
    )
    .await?
    .into_data()
    .expect("list");
    assert_eq!(unread_only.items.len(), 1);
    assert_eq!(unread_only.items[0].id, ids[1]);

    let as_dealer = notify_service::unread_count(&state, &dealer).await;
    assert!(matches!(as_dealer, Err(AppError::Forbidden)));
    Ok(())
}

#[tokio::test]
async fn listing_far_past_the_last_page_is_empty() -> anyhow::Result<()> {
    let state = common::setup_state().await?;
    let admin = common::bootstrap_admin(&state, "root", "rootpass").await?;
    blog_service::create_blog(&state, &admin, blog("Only", None)).await?;

    let response = blog_service::list_blogs(
        &state,
        BlogQuery {
            page: Some(i64::MAX),
            per_page: Some(100),
            ..Default::default()
        },
    )
    .await?;
    let meta = response.meta.clone().expect("meta");
    let page = response.into_data().expect("list");
    assert!(page.items.is_empty());
    assert_eq!(meta.total, Some(1));
    Ok(())
}
