//! Navigation sidebar.

use leptos::*;
use leptos_router::use_location;

use crate::config::{APP_NAME, APP_VERSION};

/// A sidebar entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub title: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

pub const MAIN_NAV: [NavItem; 4] = [
    NavItem {
        title: "File Upload",
        icon: "📤",
        href: "/upload",
    },
    NavItem {
        title: "Analysis Dashboard",
        icon: "📊",
        href: "/analysis",
    },
    NavItem {
        title: "Recommendations",
        icon: "💡",
        href: "/recommendations",
    },
    NavItem {
        title: "Reports",
        icon: "📄",
        href: "/reports",
    },
];

pub const ADMIN_NAV: [NavItem; 2] = [
    NavItem {
        title: "User Management",
        icon: "👥",
        href: "/admin/users",
    },
    NavItem {
        title: "System Settings",
        icon: "⚙️",
        href: "/admin/settings",
    },
];

impl NavItem {
    /// Exact path match; `/upload` is not active on `/upload/x`.
    pub fn is_active(&self, pathname: &str) -> bool {
        pathname.trim_end_matches('/') == self.href
    }
}

fn nav_group(label: &'static str, items: &'static [NavItem]) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <div class="sidebar-group">
            <p class="sidebar-group-label">{label}</p>
            <ul class="sidebar-menu">
                {items
                    .iter()
                    .map(|item| {
                        let active = move || pathname.with(|path| item.is_active(path));
                        view! {
                            <li>
                                <a
                                    href=item.href
                                    class=move || {
                                        if active() { "sidebar-link active" } else { "sidebar-link" }
                                    }
                                >
                                    <span class="sidebar-icon">{item.icon}</span>
                                    <span class="sidebar-title">{item.title}</span>
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn AppSidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <span class="logo">"🏦"</span>
                <span class="brand-name">{APP_NAME}</span>
            </div>
            {nav_group("Main Features", &MAIN_NAV)}
            {nav_group("Administration", &ADMIN_NAV)}
            <div class="sidebar-footer">{format!("{} {}", APP_NAME, APP_VERSION)}</div>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_matches_exact_path() {
        let upload = MAIN_NAV[0];
        assert!(upload.is_active("/upload"));
        assert!(upload.is_active("/upload/"));
        assert!(!upload.is_active("/analysis"));
        assert!(!ADMIN_NAV[0].is_active("/admin"));
    }

    #[test]
    fn test_every_route_has_one_entry() {
        let hrefs: Vec<&str> = MAIN_NAV.iter().chain(ADMIN_NAV.iter()).map(|i| i.href).collect();
        assert_eq!(
            hrefs,
            [
                "/upload",
                "/analysis",
                "/recommendations",
                "/reports",
                "/admin/users",
                "/admin/settings"
            ]
        );
    }
}
