//! Declarative authorization policies.
//!
//! Each endpoint names one `Policy` constant; `authorize` is the only place
//! role and ownership checks happen. Handlers never compare role strings.

use crate::database::models::UserRole;
use crate::error::ApiError;
use crate::middleware::AuthUser;

/// Ownership requirement evaluated against the endpoint's target user id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Role membership alone is enough
    None,
    /// The target must be the caller, unless the caller is an admin
    SelfOrAdmin,
}

#[derive(Debug)]
pub struct Policy {
    pub roles: &'static [UserRole],
    pub ownership: Ownership,
}

// Donor surface
pub const LIST_RECEIVERS: Policy = Policy {
    roles: &[UserRole::Donor],
    ownership: Ownership::None,
};
pub const DEACTIVATE_DONATOR: Policy = Policy {
    roles: &[UserRole::Donor, UserRole::Admin],
    ownership: Ownership::SelfOrAdmin,
};
pub const MANAGE_FAVORITES: Policy = Policy {
    roles: &[UserRole::Donor],
    ownership: Ownership::None,
};
pub const ADD_DONATION: Policy = Policy {
    roles: &[UserRole::Donor],
    ownership: Ownership::None,
};
pub const LIST_DONATIONS_MADE: Policy = Policy {
    roles: &[UserRole::Donor],
    ownership: Ownership::None,
};
pub const BROWSE_CAUSE_PRODUCTS: Policy = Policy {
    roles: &[UserRole::Donor],
    ownership: Ownership::None,
};

// Receiver surface
pub const DEACTIVATE_RECEIVER: Policy = Policy {
    roles: &[UserRole::Receiver, UserRole::Admin],
    ownership: Ownership::SelfOrAdmin,
};
pub const LIST_DONATIONS_RECEIVED: Policy = Policy {
    roles: &[UserRole::Receiver],
    ownership: Ownership::None,
};
pub const MANAGE_PIX_KEYS: Policy = Policy {
    roles: &[UserRole::Receiver],
    ownership: Ownership::None,
};
pub const MANAGE_PRODUCTS: Policy = Policy {
    roles: &[UserRole::Receiver],
    ownership: Ownership::None,
};

/// Evaluate a policy for the authenticated caller. `target` is the user id
/// the endpoint acts on, for policies with an ownership requirement.
pub fn authorize(user: &AuthUser, policy: &Policy, target: Option<i32>) -> Result<(), ApiError> {
    if !policy.roles.contains(&user.role) {
        return Err(ApiError::forbidden(
            "Unauthorized access: role not allowed for this endpoint",
        ));
    }

    match policy.ownership {
        Ownership::None => Ok(()),
        Ownership::SelfOrAdmin => {
            if user.role == UserRole::Admin || target == Some(user.user_id) {
                Ok(())
            } else {
                Err(ApiError::forbidden(
                    "Unauthorized: you can only act on your own account",
                ))
            }
        }
    }
}
