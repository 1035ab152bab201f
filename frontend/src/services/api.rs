//! HTTP client for the treasury API.
//!
//! Thin wrapper over `gloo-net` (browser `fetch`). Every failure is mapped to
//! an [`AppError`]; nothing here panics.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::{File, FormData};

use super::DataSource;
use crate::types::{
    AcceptRecommendationRequest, AnalysisMetrics, AnalysisStatus, AppError, AppResult,
    BankConnection, BankConnectionRequest, Client, ClientInfo, ConnectBankResponse,
    GenerateReportRequest, Recommendation, RejectRecommendationRequest, ReportData, Transaction,
    TransactionFilter, TreasuryProduct, UploadStatementResponse,
};
use crate::workflow::StagedFile;

/// Talks to the remote treasury API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LiveSource {
    base_url: String,
}

impl LiveSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Multipart body: one `files[i]` part per statement plus a `clientInfo` JSON part.
fn statement_form(files: &[StagedFile<File>], client_info: &ClientInfo) -> AppResult<FormData> {
    let form_data = FormData::new()
        .map_err(|e| AppError::Network(format!("Failed to create FormData: {:?}", e)))?;

    for (index, file) in files.iter().enumerate() {
        form_data
            .append_with_blob_and_filename(&format!("files[{}]", index), &file.payload, &file.name)
            .map_err(|e| AppError::Network(format!("Failed to append {}: {:?}", file.name, e)))?;
    }

    let client_json = serde_json::to_string(client_info)
        .map_err(|e| AppError::Decode(format!("Failed to serialize client info: {}", e)))?;
    form_data
        .append_with_str("clientInfo", &client_json)
        .map_err(|e| AppError::Network(format!("Failed to append client info: {:?}", e)))?;

    Ok(form_data)
}

async fn send(request: Request) -> AppResult<Response> {
    let response = request
        .send()
        .await
        .map_err(|e| AppError::Network(format!("HTTP request failed: {}", e)))?;

    if !response.ok() {
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(AppError::Server {
            status: response.status(),
            message,
        });
    }

    Ok(response)
}

async fn read_json<T: DeserializeOwned>(request: Request) -> AppResult<T> {
    send(request)
        .await?
        .json::<T>()
        .await
        .map_err(|e| AppError::Decode(format!("Failed to parse response: {}", e)))
}

fn build_error(e: gloo_net::Error) -> AppError {
    AppError::Network(format!("Failed to build request: {}", e))
}

async fn get_json<T: DeserializeOwned>(url: &str) -> AppResult<T> {
    read_json(Request::get(url).build().map_err(build_error)?).await
}

async fn post_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> AppResult<T> {
    read_json(Request::post(url).json(body).map_err(build_error)?).await
}

/// Turn a 404 into `NotFound(what)`; other results pass through.
fn or_not_found<T>(result: AppResult<T>, what: &str) -> AppResult<T> {
    match result {
        Err(AppError::Server { status: 404, .. }) => Err(AppError::NotFound(what.to_string())),
        other => other,
    }
}

impl DataSource for LiveSource {
    type Payload = File;

    async fn upload_statement(
        &self,
        files: &[StagedFile<File>],
        client_info: &ClientInfo,
    ) -> AppResult<UploadStatementResponse> {
        let form_data = statement_form(files, client_info)?;
        let request = Request::post(&self.url("/api/statements/upload"))
            .body(form_data)
            .map_err(build_error)?;
        read_json(request).await
    }

    async fn get_upload_status(&self, upload_id: &str) -> AppResult<AnalysisStatus> {
        get_json(&self.url(&format!("/api/statements/upload/{}/status", upload_id))).await
    }

    async fn connect_bank(
        &self,
        request: &BankConnectionRequest,
    ) -> AppResult<ConnectBankResponse> {
        post_json(&self.url("/api/banks/connect"), request).await
    }

    async fn get_bank_connections(&self) -> AppResult<Vec<BankConnection>> {
        get_json(&self.url("/api/banks/connections")).await
    }

    async fn disconnect_bank(&self, connection_id: &str) -> AppResult<bool> {
        #[derive(serde::Deserialize)]
        struct Disconnected {
            success: bool,
        }

        let url = self.url(&format!("/api/banks/connections/{}", connection_id));
        let body: Disconnected =
            read_json(Request::delete(&url).build().map_err(build_error)?).await?;
        Ok(body.success)
    }

    async fn get_clients(&self) -> AppResult<Vec<Client>> {
        get_json(&self.url("/api/clients")).await
    }

    async fn get_client(&self, client_id: &str) -> AppResult<Client> {
        let url = self.url(&format!("/api/clients/{}", client_id));
        or_not_found(get_json(&url).await, "Client")
    }

    async fn get_analysis_metrics(&self, client_id: &str) -> AppResult<AnalysisMetrics> {
        get_json(&self.url(&format!("/api/analysis/{}/metrics", client_id))).await
    }

    async fn get_analysis_status(&self, client_id: &str) -> AppResult<AnalysisStatus> {
        get_json(&self.url(&format!("/api/analysis/{}/status", client_id))).await
    }

    async fn get_transactions(
        &self,
        client_id: &str,
        filter: &TransactionFilter,
    ) -> AppResult<Vec<Transaction>> {
        let url = self.url(&format!("/api/transactions/{}", client_id));
        let pairs = filter.query_pairs();
        let request = Request::get(&url)
            .query(pairs.iter().map(|(key, value)| (*key, value.as_str())))
            .build()
            .map_err(build_error)?;
        read_json(request).await
    }

    async fn get_transaction_categories(&self, client_id: &str) -> AppResult<Vec<String>> {
        get_json(&self.url(&format!("/api/transactions/{}/categories", client_id))).await
    }

    async fn get_recommendations(&self, client_id: &str) -> AppResult<Vec<Recommendation>> {
        get_json(&self.url(&format!("/api/recommendations/{}", client_id))).await
    }

    async fn accept_recommendation(
        &self,
        request: &AcceptRecommendationRequest,
    ) -> AppResult<Recommendation> {
        let url = self.url(&format!(
            "/api/recommendations/{}/accept",
            request.recommendation_id
        ));
        or_not_found(post_json(&url, request).await, "Recommendation")
    }

    async fn reject_recommendation(
        &self,
        request: &RejectRecommendationRequest,
    ) -> AppResult<Recommendation> {
        let url = self.url(&format!(
            "/api/recommendations/{}/reject",
            request.recommendation_id
        ));
        or_not_found(post_json(&url, request).await, "Recommendation")
    }

    async fn get_treasury_products(&self) -> AppResult<Vec<TreasuryProduct>> {
        get_json(&self.url("/api/products")).await
    }

    async fn get_treasury_product(&self, product_id: &str) -> AppResult<TreasuryProduct> {
        let url = self.url(&format!("/api/products/{}", product_id));
        or_not_found(get_json(&url).await, "Product")
    }

    async fn generate_report(&self, request: &GenerateReportRequest) -> AppResult<ReportData> {
        post_json(&self.url("/api/reports/generate"), request).await
    }

    async fn get_report_preview(&self, client_id: &str) -> AppResult<ReportData> {
        get_json(&self.url(&format!("/api/reports/{}/preview", client_id))).await
    }
}
