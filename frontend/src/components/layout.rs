//! Dashboard shell: collapsible sidebar, header and the routed page.

use leptos::*;
use leptos_router::Outlet;

use super::{AppSidebar, Header};

/// Whether the sidebar is expanded. Provided by [`DashboardLayout`].
#[derive(Clone, Copy)]
pub struct SidebarState(pub RwSignal<bool>);

impl SidebarState {
    pub fn toggle(&self) {
        self.0.update(|open| *open = !*open);
    }

    pub fn is_open(&self) -> bool {
        self.0.get()
    }
}

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let sidebar = SidebarState(create_rw_signal(true));
    provide_context(sidebar);

    view! {
        <div class=move || {
            if sidebar.is_open() { "dashboard" } else { "dashboard sidebar-collapsed" }
        }>
            <AppSidebar/>
            <div class="dashboard-main">
                <Header/>
                <main class="dashboard-content">
                    <div class="container">
                        <Outlet/>
                    </div>
                </main>
            </div>
        </div>
    }
}
