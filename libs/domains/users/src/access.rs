//! Role capability matrix.
//!
//! Services never enforce roles; presentation layers (the console menu in
//! particular) ask this one function before offering an operation. Keeping
//! the rule here means there is a single place to change it.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Role;

/// The operations a presentation layer can gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// Read-only product queries: view, search, low-stock report
    ViewInventory,
    /// Product mutations: add, update, delete
    ManageInventory,
    /// Stock-quantity adjustment only
    AdjustStock,
    /// User CRUD
    ManageUsers,
}

/// Whether a role may perform an operation.
///
/// Admin can do everything; staff can do everything except manage users.
pub fn can_access(role: Role, operation: Operation) -> bool {
    match operation {
        Operation::ViewInventory | Operation::ManageInventory | Operation::AdjustStock => true,
        Operation::ManageUsers => role == Role::Admin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_admin_can_do_everything() {
        for op in [
            Operation::ViewInventory,
            Operation::ManageInventory,
            Operation::AdjustStock,
            Operation::ManageUsers,
        ] {
            assert!(can_access(Role::Admin, op), "admin denied {:?}", op);
        }
    }

    #[test]
    fn test_staff_cannot_manage_users() {
        assert!(can_access(Role::Staff, Operation::ViewInventory));
        assert!(can_access(Role::Staff, Operation::ManageInventory));
        assert!(can_access(Role::Staff, Operation::AdjustStock));
        assert!(!can_access(Role::Staff, Operation::ManageUsers));
    }
}
