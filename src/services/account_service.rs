use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Set, TransactionTrait,
};

use crate::{
    dto::accounts::{
        CreateAdminRequest, DealerList, RegisterDealerRequest, SetEnabledRequest,
        UpdateDealerRequest,
    },
    entity::{accounts, admins, dealers},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ensure_admin},
    models::{Account, Admin, Dealer},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    security::password::hash_password,
    services::require_non_blank,
    state::AppState,
};

pub async fn create_admin(
    state: &AppState,
    user: &AuthUser,
    payload: CreateAdminRequest,
) -> AppResult<ApiResponse<Admin>> {
    ensure_admin(user)?;
    require_non_blank("username", &payload.username)?;
    require_non_blank("password", &payload.password)?;

    let txn = state.orm.begin().await?;
    let account = insert_account(&txn, &payload.username, &payload.password).await?;
    let admin = admins::ActiveModel {
        id_account: Set(account.id),
        require_login_email_confirmation: Set(payload.require_login_email_confirmation),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    tracing::info!(account_id = account.id, created_by = user.account_id, "admin created");
    Ok(ApiResponse::success(
        "Admin created",
        Admin::new(account, admin),
        None,
    ))
}

pub async fn register_dealer(
    state: &AppState,
    payload: RegisterDealerRequest,
) -> AppResult<ApiResponse<Dealer>> {
    require_non_blank("username", &payload.username)?;
    require_non_blank("password", &payload.password)?;
    let phone = normalize_phone(payload.phone);

    let txn = state.orm.begin().await?;
    if let Some(phone) = phone.as_deref() {
        ensure_phone_free(&txn, phone, None).await?;
    }
    let account = insert_account(&txn, &payload.username, &payload.password).await?;
    let dealer = dealers::ActiveModel {
        id_account: Set(account.id),
        company_name: Set(payload.company_name),
        address: Set(payload.address),
        phone: Set(phone),
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    tracing::info!(account_id = account.id, "dealer registered");
    Ok(ApiResponse::success(
        "Dealer registered",
        Dealer::new(account, dealer),
        None,
    ))
}

pub async fn get_admin(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<Admin>> {
    ensure_admin(user)?;
    let admin = load_admin(&state.orm, id).await?;
    Ok(ApiResponse::success("Admin", admin, None))
}

/// Admins may read any dealer; a dealer only itself.
pub async fn get_dealer(
    state: &AppState,
    user: &AuthUser,
    id: i64,
) -> AppResult<ApiResponse<Dealer>> {
    ensure_self_or_admin(user, id)?;
    let dealer = load_dealer(&state.orm, id).await?;
    Ok(ApiResponse::success("Dealer", dealer, None))
}

pub async fn list_dealers(
    state: &AppState,
    user: &AuthUser,
    pagination: Pagination,
) -> AppResult<ApiResponse<DealerList>> {
    ensure_admin(user)?;
    let (page, limit, offset) = pagination.normalize();

    let finder = dealers::Entity::find().order_by_asc(dealers::Column::IdAccount);
    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .find_also_related(accounts::Entity)
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .filter_map(|(dealer, account)| account.map(|a| Dealer::new(a, dealer)))
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("Dealers", DealerList { items }, Some(meta)))
}

pub async fn update_dealer(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: UpdateDealerRequest,
) -> AppResult<ApiResponse<Dealer>> {
    ensure_self_or_admin(user, id)?;

    let existing = dealers::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: dealers::ActiveModel = existing.into();
    if let Some(company_name) = payload.company_name {
        active.company_name = Set(Some(company_name));
    }
    if let Some(address) = payload.address {
        active.address = Set(Some(address));
    }
    if let Some(phone) = payload.phone {
        let phone = normalize_phone(phone);
        if let Some(phone) = &phone {
            ensure_phone_free(&state.orm, phone, Some(id)).await?;
        }
        active.phone = Set(phone);
    }
    if active.is_changed() {
        active.update(&state.orm).await?;
    }

    let dealer = load_dealer(&state.orm, id).await?;
    Ok(ApiResponse::success("Updated", dealer, Some(Meta::empty())))
}

pub async fn set_account_enabled(
    state: &AppState,
    user: &AuthUser,
    id: i64,
    payload: SetEnabledRequest,
) -> AppResult<ApiResponse<Account>> {
    ensure_admin(user)?;
    if id == user.account_id && !payload.enabled {
        return Err(AppError::BadRequest("cannot disable your own account".into()));
    }

    let existing = accounts::Entity::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or(AppError::NotFound)?;

    let mut active: accounts::ActiveModel = existing.into();
    active.enabled = Set(payload.enabled);
    let account = active.update(&state.orm).await?;

    tracing::info!(account_id = id, enabled = payload.enabled, "account enabled flag changed");
    Ok(ApiResponse::success("Updated", account.into(), Some(Meta::empty())))
}

pub(crate) async fn load_admin<C: ConnectionTrait>(conn: &C, id: i64) -> AppResult<Admin> {
    match admins::Entity::find_by_id(id)
        .find_also_related(accounts::Entity)
        .one(conn)
        .await?
    {
        Some((admin, Some(account))) => Ok(Admin::new(account, admin)),
        _ => Err(AppError::NotFound),
    }
}

pub(crate) async fn load_dealer<C: ConnectionTrait>(conn: &C, id: i64) -> AppResult<Dealer> {
    match dealers::Entity::find_by_id(id)
        .find_also_related(accounts::Entity)
        .one(conn)
        .await?
    {
        Some((dealer, Some(account))) => Ok(Dealer::new(account, dealer)),
        _ => Err(AppError::NotFound),
    }
}

fn ensure_self_or_admin(user: &AuthUser, account_id: i64) -> AppResult<()> {
    if user.is_admin() || user.account_id == account_id {
        Ok(())
    } else {
        Err(AppError::Forbidden)
    }
}

fn normalize_phone(phone: Option<String>) -> Option<String> {
    phone
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
}

async fn insert_account<C: ConnectionTrait>(
    conn: &C,
    username: &str,
    password: &str,
) -> AppResult<accounts::Model> {
    let username = username.trim();
    let taken = accounts::Entity::find()
        .filter(accounts::Column::Username.eq(username))
        .count(conn)
        .await?;
    if taken > 0 {
        return Err(AppError::Conflict("Username is already taken".into()));
    }

    let account = accounts::ActiveModel {
        username: Set(username.to_string()),
        password: Set(hash_password(password)?),
        enabled: Set(true),
        ..Default::default()
    }
    .insert(conn)
    .await?;
    Ok(account)
}

async fn ensure_phone_free<C: ConnectionTrait>(
    conn: &C,
    phone: &str,
    except: Option<i64>,
) -> AppResult<()> {
    let mut finder = dealers::Entity::find().filter(dealers::Column::Phone.eq(phone));
    if let Some(id) = except {
        finder = finder.filter(dealers::Column::IdAccount.ne(id));
    }
    if finder.count(conn).await? > 0 {
        return Err(AppError::Conflict("Phone is already registered".into()));
    }
    Ok(())
}
