//! Treasury Solutions - Frontend Rust/Leptos Application
//!
//! A WebAssembly dashboard where relationship managers upload a client's
//! bank statements, or link the client's bank account, to start a
//! treasury analysis.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  App (config, data source, toasts in context)                │
//! ├──────────────┬──────────────────────────────────────────────┤
//! │  AppSidebar  │  Header (toggle, title, user menu)           │
//! │              ├──────────────────────────────────────────────┤
//! │  Main        │  Outlet                                      │
//! │  Admin       │  ├── UploadPage                              │
//! │              │  │   ├── Manual: ClientInfoForm, FileDropzone │
//! │              │  │   └── Connect: BankConnectionModal        │
//! │              │  ├── AnalysisPage                            │
//! │              │  └── ComingSoonPage                          │
//! └──────────────┴──────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Build-time configuration and limits
//! - [`types`] - Domain and wire types, errors
//! - [`workflow`] - Upload and bank connection state machines
//! - [`services`] - Live and mock data sources
//! - [`notifications`] - Toasts
//! - [`components`] - UI components (layout, pages, forms)

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::notifications::{Toaster, ToastQueue};

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod notifications;
pub mod services;
pub mod types;
pub mod workflow;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Client and files
    AcceptedFileType, ClientInfo,
    // Banks
    Bank, BankConnectionRequest, BankCredentials,
    // API
    AnalysisStatus, BankConnection, Client, ConnectBankResponse, UploadStatementResponse,
    // Analysis, products and reports
    AnalysisMetrics, Recommendation, ReportData, Transaction, TransactionFilter, TreasuryProduct,
    // Errors
    AppError, AppResult, ValidationError,
};

// Components
pub use components::*;

// Services
pub use services::{DataSource, LiveSource, MockSource, TreasuryService};

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    provide_context(TreasuryService::from_config(&config));
    provide_context(config);
    provide_context(create_rw_signal(ToastQueue::default()));

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Routes>
                <Route path="/" view=DashboardLayout>
                    <Route path="" view=|| view! { <Redirect path="/upload"/> }/>
                    <Route path="upload" view=UploadPage/>
                    <Route path="analysis" view=AnalysisPage/>
                    <Route
                        path="recommendations"
                        view=|| view! {
                            <ComingSoonPage
                                title="Treasury Recommendations"
                                description="AI-powered treasury product recommendations based on your transaction patterns."
                            />
                        }
                    />
                    <Route
                        path="reports"
                        view=|| view! {
                            <ComingSoonPage
                                title="Reports & Analytics"
                                description="Comprehensive treasury reports and downloadable summaries."
                            />
                        }
                    />
                    <Route
                        path="admin/users"
                        view=|| view! {
                            <ComingSoonPage
                                title="User Management"
                                description="Manage user roles and permissions for the treasury platform."
                            />
                        }
                    />
                    <Route
                        path="admin/settings"
                        view=|| view! {
                            <ComingSoonPage
                                title="System Settings"
                                description="Configure system parameters and treasury analysis rules."
                            />
                        }
                    />
                </Route>
            </Routes>
            <Toaster/>
        </Router>
    }
}
