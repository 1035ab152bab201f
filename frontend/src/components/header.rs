use leptos::*;

use super::SidebarState;

/// The signed-in relationship manager shown in the user menu.
#[derive(Clone, Copy, Debug)]
pub struct CurrentUser {
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
}

pub const CURRENT_USER: CurrentUser = CurrentUser {
    name: "John Smith",
    role: "Relationship Manager",
    email: "john.smith@bank.com",
};

/// Up to two uppercase initials ("John Smith" -> "JS").
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[component]
pub fn Header() -> impl IntoView {
    let sidebar = expect_context::<SidebarState>();
    let (menu_open, set_menu_open) = create_signal(false);

    let on_logout = move |_| {
        set_menu_open.set(false);
        log::info!("👋 Log out requested for {}", CURRENT_USER.email);
    };

    view! {
        <header class="dashboard-header">
            <div class="header-left">
                <button
                    class="sidebar-toggle"
                    aria-label="Toggle sidebar"
                    on:click=move |_| sidebar.toggle()
                >
                    "☰"
                </button>
                <h1 class="header-title">"Treasury Solutions Dashboard"</h1>
            </div>
            <div class="header-right">
                <button class="icon-button" aria-label="Notifications">"🔔"</button>
                <div class="user-menu">
                    <button
                        class="avatar"
                        aria-haspopup="menu"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {initials(CURRENT_USER.name)}
                    </button>
                    <Show when=move || menu_open.get() fallback=|| view! { }>
                        <div class="user-menu-dropdown" role="menu">
                            <div class="user-menu-label">
                                <p class="user-name">{CURRENT_USER.name}</p>
                                <p class="user-role">{CURRENT_USER.role}</p>
                                <p class="user-email">{CURRENT_USER.email}</p>
                            </div>
                            <button class="user-menu-item" on:click=move |_| set_menu_open.set(false)>
                                "👤 Profile"
                            </button>
                            <button class="user-menu-item" on:click=on_logout>
                                "🚪 Log out"
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </header>
    }
}
