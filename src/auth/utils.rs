use crate::{
    auth::Claims,
    errors::{AppError, AppResult},
    models::domain::Role,
};

pub fn require_role(claims: &Claims, role: Role) -> AppResult<()> {
    if claims.role != role {
        return Err(AppError::Forbidden(format!(
            "Only {} accounts can perform this action",
            role
        )));
    }
    Ok(())
}

/// Takes the second whitespace-separated segment of an `Authorization` value,
/// so `"Bearer abc"` yields `abc`. The scheme itself is not checked.
pub fn bearer_token(header: &str) -> Option<&str> {
    header.split_whitespace().nth(1)
}
