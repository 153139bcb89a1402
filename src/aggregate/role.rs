//! Role selection: the single place where the privileged/standard branch
//! lives. Everything that needs a query variant asks here instead of
//! re-branching on the role.

use crate::auth::Role;
use crate::gateway::{MembershipQuery, TenantScope};

/// Which membership query variant a caller may issue.
pub fn membership_query(role: Role) -> MembershipQuery {
    match role {
        Role::Privileged => MembershipQuery::AllMembers,
        Role::Standard => MembershipQuery::OwnMembers,
    }
}

/// Which tenant enumeration a caller may issue.
pub fn tenant_scope(role: Role) -> TenantScope {
    match role {
        Role::Privileged => TenantScope::AllTenants,
        Role::Standard => TenantScope::CallerTenants,
    }
}
