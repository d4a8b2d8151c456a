//! Capability scopes handed in by the authorisation layer.
//!
//! Authentication happens elsewhere; the engine only receives the resolved
//! scope of the acting user and answers what that scope may see or decide.

use serde::{Deserialize, Serialize};
use urlaub_core::EmployeeId;

/// What the acting user is allowed to touch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "scope", rename_all = "kebab-case")]
pub enum Scope {
    /// Only the user's own requests.
    #[serde(rename = "self")]
    Own {
        /// The acting user.
        actor: EmployeeId,
    },
    /// Every employee of one market (branch).
    ManagerOfMarket {
        /// The acting manager.
        actor: EmployeeId,
        /// The managed market.
        market: String,
    },
    /// Everything.
    Admin {
        /// The acting administrator.
        actor: EmployeeId,
    },
}

impl Scope {
    /// The acting user.
    pub fn actor(&self) -> &EmployeeId {
        match self {
            Scope::Own { actor } | Scope::ManagerOfMarket { actor, .. } | Scope::Admin { actor } => {
                actor
            }
        }
    }

    /// Whether the scope may read requests and budgets of `owner`, who
    /// belongs to `owner_market` when known.
    pub fn can_view(&self, owner: &EmployeeId, owner_market: Option<&str>) -> bool {
        match self {
            Scope::Own { actor } => actor == owner,
            Scope::ManagerOfMarket { actor, market } => {
                actor == owner || owner_market == Some(market.as_str())
            }
            Scope::Admin { .. } => true,
        }
    }

    /// Whether the scope may approve or reject `owner`'s requests. Nobody
    /// decides on their own requests except an administrator.
    pub fn can_decide(&self, owner: &EmployeeId, owner_market: Option<&str>) -> bool {
        match self {
            Scope::Own { .. } => false,
            Scope::ManagerOfMarket { actor, market } => {
                actor != owner && owner_market == Some(market.as_str())
            }
            Scope::Admin { .. } => true,
        }
    }
}
