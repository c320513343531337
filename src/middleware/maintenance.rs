//! Maintenance-mode access-control gate.
//!
//! Interposed ahead of normal routing. Per request it reads the cached
//! settings snapshot (refreshing from the store on a miss, defaulting on
//! store failure) and evaluates bypass conditions in fixed order:
//!
//! 1. maintenance mode off → allow
//! 2. authenticated super admin → allow
//! 3. client IP in the whitelist → allow
//! 4. otherwise → 503 with the configured downtime estimate
//!
//! The gate only reads: neither the settings snapshot nor the user is
//! mutated, and repeated evaluation of unchanged inputs yields the same
//! decision.

use std::str::FromStr;

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::info;

use crate::middleware::auth::AuthUser;
use crate::middleware::role::UserRole;
use crate::modules::settings::model::GeneralSettings;
use crate::state::AppState;
use crate::utils::client_ip::resolve_client_ip;
use crate::utils::jwt::Claims;
use crate::utils::response::MaintenanceResponse;

/// Outcome of evaluating the gate against one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    Allow,
    Blocked { estimated_time: String },
}

/// Gate middleware. Layered on the API router so it runs ahead of
/// authentication, ban checks, and routing.
pub async fn maintenance_gate(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let settings = state.settings.general().await;

    // Fast path, no need to touch headers when the site is open.
    if !settings.maintenance_mode {
        return next.run(req).await;
    }

    let (mut parts, body) = req.into_parts();

    // Absent or invalid credentials simply skip the privilege bypass.
    let user = AuthUser::from_request_parts(&mut parts, &state).await.ok();
    let client_ip = resolve_client_ip(&parts.headers, &parts.extensions);

    let req = Request::from_parts(parts, body);

    match evaluate(&settings, &client_ip, user.as_ref().map(|u| &u.0)) {
        GateDecision::Allow => next.run(req).await,
        GateDecision::Blocked { estimated_time } => {
            info!(client_ip = %client_ip, "Request blocked by maintenance mode");
            MaintenanceResponse::new(estimated_time).into_response()
        }
    }
}

/// Decide whether a request passes the gate. Pure: same settings and
/// request context always produce the same decision.
pub fn evaluate(
    settings: &GeneralSettings,
    client_ip: &str,
    user: Option<&Claims>,
) -> GateDecision {
    if !settings.maintenance_mode {
        return GateDecision::Allow;
    }

    if let Some(claims) = user {
        let is_super_admin = UserRole::from_str(&claims.role)
            .map(|role| role == UserRole::SuperAdmin)
            .unwrap_or(false);
        if is_super_admin {
            return GateDecision::Allow;
        }
    }

    if parse_whitelist(&settings.whitelist_ips)
        .iter()
        .any(|ip| ip == client_ip)
    {
        return GateDecision::Allow;
    }

    GateDecision::Blocked {
        estimated_time: settings.estimated_time.clone(),
    }
}

/// Parse the comma-separated whitelist into trimmed, non-empty entries.
/// Entries are opaque strings; nothing checks that they are well-formed
/// IP addresses.
pub fn parse_whitelist(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whitelist_trims_entries() {
        assert_eq!(
            parse_whitelist(" 1.2.3.4 , 5.6.7.8"),
            vec!["1.2.3.4".to_string(), "5.6.7.8".to_string()]
        );
    }

    #[test]
    fn test_parse_whitelist_drops_empty_entries() {
        assert_eq!(parse_whitelist(""), Vec::<String>::new());
        assert_eq!(parse_whitelist(" , ,"), Vec::<String>::new());
        assert_eq!(parse_whitelist("1.2.3.4,,"), vec!["1.2.3.4".to_string()]);
    }

    #[test]
    fn test_parse_whitelist_keeps_malformed_entries() {
        // Entries are opaque strings, never validated as IP addresses.
        assert_eq!(
            parse_whitelist("not-an-ip"),
            vec!["not-an-ip".to_string()]
        );
    }
}
