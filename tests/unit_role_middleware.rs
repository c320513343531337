use parley::middleware::auth::AuthUser;
use parley::middleware::role::{UserRole, check_min_role};
use parley::utils::jwt::Claims;

fn create_test_auth_user(role: &str) -> AuthUser {
    let claims = Claims {
        sub: "00000000-0000-0000-0000-000000000000".to_string(),
        email: "test@example.com".to_string(),
        role: role.to_string(),
        exp: 9999999999,
        iat: 1234567890,
    };
    AuthUser(claims)
}

#[test]
fn test_check_min_role_exact_match() {
    let auth_user = create_test_auth_user("super_admin");
    assert!(check_min_role(&auth_user, UserRole::SuperAdmin).is_ok());

    let auth_user = create_test_auth_user("admin");
    assert!(check_min_role(&auth_user, UserRole::Admin).is_ok());

    let auth_user = create_test_auth_user("moderator");
    assert!(check_min_role(&auth_user, UserRole::Moderator).is_ok());

    let auth_user = create_test_auth_user("member");
    assert!(check_min_role(&auth_user, UserRole::Member).is_ok());
}

#[test]
fn test_check_min_role_higher_role_passes() {
    let auth_user = create_test_auth_user("super_admin");
    assert!(check_min_role(&auth_user, UserRole::Admin).is_ok());
    assert!(check_min_role(&auth_user, UserRole::Moderator).is_ok());
    assert!(check_min_role(&auth_user, UserRole::Member).is_ok());

    let auth_user = create_test_auth_user("admin");
    assert!(check_min_role(&auth_user, UserRole::Moderator).is_ok());
}

#[test]
fn test_check_min_role_lower_role_rejected() {
    let auth_user = create_test_auth_user("member");
    assert!(check_min_role(&auth_user, UserRole::Moderator).is_err());
    assert!(check_min_role(&auth_user, UserRole::Admin).is_err());

    let auth_user = create_test_auth_user("admin");
    assert!(check_min_role(&auth_user, UserRole::SuperAdmin).is_err());
}

#[test]
fn test_check_min_role_invalid_role_rejected() {
    let auth_user = create_test_auth_user("janitor");
    assert!(check_min_role(&auth_user, UserRole::Member).is_err());
}

#[test]
fn test_role_ordering() {
    assert!(UserRole::SuperAdmin.privilege_level() > UserRole::Admin.privilege_level());
    assert!(UserRole::Admin.privilege_level() > UserRole::Moderator.privilege_level());
    assert!(UserRole::Moderator.privilege_level() > UserRole::Member.privilege_level());
}
