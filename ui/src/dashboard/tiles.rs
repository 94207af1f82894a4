//! Static navigation tables for the dashboard grid and the bottom tab bar.

use crate::routes::Route;
use crate::t;

/// A navigation target reachable from the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Destination {
    Home,
    Invest,
    Rewards,
    Wallet,
    Deposit,
    Withdraw,
    History,
    Referral,
    Support,
    About,
    Profile,
}

/// 3×3 grid, row by row.
pub static TILES: [Destination; 9] = [
    Destination::Invest,
    Destination::Rewards,
    Destination::Wallet,
    Destination::Deposit,
    Destination::Withdraw,
    Destination::History,
    Destination::Referral,
    Destination::Support,
    Destination::About,
];

pub static TABS: [Destination; 5] = [
    Destination::Home,
    Destination::Invest,
    Destination::Rewards,
    Destination::Wallet,
    Destination::Profile,
];

impl Destination {
    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/dashboard",
            Self::Invest => "/invest",
            Self::Rewards => "/rewards",
            Self::Wallet => "/wallet",
            Self::Deposit => "/deposit",
            Self::Withdraw => "/withdraw",
            Self::History => "/history",
            Self::Referral => "/referral",
            Self::Support => "/support",
            Self::About => "/about",
            Self::Profile => "/profile",
        }
    }

    pub fn route(self) -> Route {
        Route::resolve(self.path())
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Home => "🏠",
            Self::Invest => "📈",
            Self::Rewards => "🎁",
            Self::Wallet => "👛",
            Self::Deposit => "⬇️",
            Self::Withdraw => "⬆️",
            Self::History => "🧾",
            Self::Referral => "🤝",
            Self::Support => "💬",
            Self::About => "ℹ️",
            Self::Profile => "👤",
        }
    }

    pub fn label(self) -> String {
        match self {
            Self::Home => t!("nav-home"),
            Self::Invest => t!("nav-invest"),
            Self::Rewards => t!("nav-rewards"),
            Self::Wallet => t!("nav-wallet"),
            Self::Deposit => t!("nav-deposit"),
            Self::Withdraw => t!("nav-withdraw"),
            Self::History => t!("nav-history"),
            Self::Referral => t!("nav-referral"),
            Self::Support => t!("nav-support"),
            Self::About => t!("nav-about"),
            Self::Profile => t!("nav-profile"),
        }
    }
}
