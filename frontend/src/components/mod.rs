//! UI Components for the Treasury Solutions dashboard.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`DashboardLayout`] - Shell with sidebar, header and routed page
//! - [`AppSidebar`] - Grouped navigation
//! - [`Header`] - Sidebar toggle, title and user menu
//!
//! # Pages
//! - [`UploadPage`] - Manual upload and bank connection tabs
//! - [`AnalysisPage`] - Status of an upload or bank link
//! - [`ComingSoonPage`] - Placeholder for unbuilt sections
//!
//! # Feature Components
//! - [`ClientInfoForm`] - Business name and account numbers
//! - [`FileDropzone`] - Statement selection with drag & drop
//! - [`BankConnectionModal`] - Bank link dialog
//! - [`ConnectedAccounts`] - Existing bank links

mod analysis;
mod bank_modal;
mod client_info_form;
mod coming_soon;
mod connected_accounts;
mod file_dropzone;
mod header;
mod layout;
mod sidebar;
mod upload_page;

pub use analysis::*;
pub use bank_modal::*;
pub use client_info_form::*;
pub use coming_soon::*;
pub use connected_accounts::*;
pub use file_dropzone::*;
pub use header::*;
pub use layout::*;
pub use sidebar::*;
pub use upload_page::*;
