use crate::{
    dto::auth::{LoginRequest, LoginResponse, Profile},
    error::{AppError, AppResult},
    middleware::auth::{AuthUser, ROLE_ADMIN, ROLE_DEALER},
    response::{ApiResponse, Meta},
    security::{
        LookupError, OrmAccountRepository, UserDetails, UserDetailsService,
        password::verify_password, token::issue_token,
    },
    services::account_service::{load_admin, load_dealer},
    state::AppState,
};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub async fn login(
    state: &AppState,
    payload: LoginRequest,
) -> AppResult<ApiResponse<LoginResponse>> {
    let LoginRequest { username, password } = payload;
    let username = username.trim();
    let lookup = UserDetailsService::new(OrmAccountRepository::new(state.orm.clone()));

    let details = match lookup.load_user_by_username(username).await {
        Ok(details) => details,
        Err(LookupError::UsernameNotFound(_)) => {
            tracing::debug!(%username, "login for unknown username");
            return Err(AppError::BadRequest(INVALID_CREDENTIALS.into()));
        }
        Err(LookupError::Repository(err)) => return Err(err.into()),
    };

    if !verify_password(&password, details.password_hash())? {
        return Err(AppError::BadRequest(INVALID_CREDENTIALS.into()));
    }
    if !details.is_enabled() {
        return Err(AppError::Forbidden);
    }
    // An account with no admin/dealer row has no authority to act on anything.
    let role = details.role().ok_or(AppError::Forbidden)?;

    let token = issue_token(&state.auth, details.account_id(), role)?;

    tracing::info!(account_id = details.account_id(), role, "logged in");
    Ok(ApiResponse::success(
        "Logged in",
        LoginResponse {
            token: format!("Bearer {}", token),
            role: role.to_string(),
        },
        Some(Meta::empty()),
    ))
}

pub async fn profile(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<Profile>> {
    let profile = match user.role.as_str() {
        ROLE_ADMIN => Profile {
            role: user.role.clone(),
            admin: Some(load_admin(&state.orm, user.account_id).await?),
            dealer: None,
        },
        ROLE_DEALER => Profile {
            role: user.role.clone(),
            admin: None,
            dealer: Some(load_dealer(&state.orm, user.account_id).await?),
        },
        _ => return Err(AppError::Forbidden),
    };
    Ok(ApiResponse::success("Profile", profile, None))
}
