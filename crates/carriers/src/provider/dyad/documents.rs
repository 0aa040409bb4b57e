//! ACE Hub document retrieval.
//!
//! Quote, policy, application and binder documents for a Dyad quote number,
//! fetched from `/acehub/GetDocument`. The call goes through the same
//! transport as quotes and binds, so it shares the carrier's credentials,
//! retry policy and circuit.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::DyadWire;
use crate::errors::CarrierError;
use crate::transport::HttpCarrierTransport;

pub const DOCUMENT_PATH: &str = "/acehub/GetDocument";

/// Commercial package, the only line ACE Hub files documents under.
const PACKAGE_LOB_CODE: &str = "CPKGE";
const RESPONSE_FORMAT: &str = "JSON";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    Quote,
    Policy,
    Application,
    Binder,
}

/// Whose copy of the document to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentCopy {
    #[default]
    Agent,
    Insured,
    Company,
}

/// Which documents to fetch for a quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentQuery {
    pub quote_number: String,
    pub kinds: Vec<DocumentKind>,
    pub copy: DocumentCopy,
    pub login_id: String,
    pub carriers: Vec<String>,
}

impl DocumentQuery {
    /// The agent's copy of the quote document.
    pub fn new(quote_number: impl Into<String>) -> Self {
        Self {
            quote_number: quote_number.into(),
            kinds: vec![DocumentKind::Quote],
            copy: DocumentCopy::default(),
            login_id: String::new(),
            carriers: Vec::new(),
        }
    }

    pub fn with_kinds(mut self, kinds: impl IntoIterator<Item = DocumentKind>) -> Self {
        self.kinds = kinds.into_iter().collect();
        self
    }

    pub fn with_copy(mut self, copy: DocumentCopy) -> Self {
        self.copy = copy;
        self
    }

    pub fn with_login_id(mut self, login_id: impl Into<String>) -> Self {
        self.login_id = login_id.into();
        self
    }

    /// Restrict to documents from the named underlying carrier.
    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carriers.push(carrier.into());
        self
    }
}

// ============================================================================
// Request
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AceHubDocumentRequest {
    #[serde(rename = "SignonRq")]
    pub signon: Signon,
    #[serde(rename = "InsuranceSvcRq")]
    pub service: DocumentServiceRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Signon {
    #[serde(rename = "SignonPswd")]
    pub password: SignonPassword,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignonPassword {
    #[serde(rename = "CustId")]
    pub customer: CustomerId,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CustomerId {
    #[serde(rename = "CustLoginId")]
    pub login_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentServiceRequest {
    #[serde(rename = "RqUID")]
    pub request_id: String,
    #[serde(rename = "IRH_QuoteNo")]
    pub quote_number: String,
    #[serde(rename = "comIRH_CarrierRequestExt")]
    pub carriers: CarrierRequest,
    #[serde(rename = "comIRH_AdditionalQueTypeExt")]
    pub response_format: String,
    #[serde(rename = "DocumentPolicyQuoteInqRq")]
    pub inquiry: DocumentInquiry,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierRequest {
    #[serde(rename = "comIRH_CarrierInfoExt")]
    pub carriers: Vec<CarrierInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CarrierInfo {
    #[serde(rename = "IRH_CarrierName")]
    pub name: String,
    #[serde(rename = "IRH_AdmittedStatus")]
    pub admitted_status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentInquiry {
    #[serde(rename = "LOBCd")]
    pub lob_code: String,
    #[serde(rename = "TransactionRequestDt")]
    pub requested_at: DateTime<Utc>,
    #[serde(rename = "DocumentList")]
    pub documents: DocumentList,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentList {
    #[serde(rename = "DocumentDetail")]
    pub details: Vec<DocumentDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentDetail {
    #[serde(rename = "DocumentCd")]
    pub kind: DocumentKind,
    #[serde(rename = "DocumentCopyType")]
    pub copy: DocumentCopy,
}

impl AceHubDocumentRequest {
    pub fn new(query: &DocumentQuery) -> Self {
        Self::at(query, Uuid::new_v4(), Utc::now())
    }

    /// Builds the request with a fixed id and timestamp.
    pub fn at(query: &DocumentQuery, request_id: Uuid, requested_at: DateTime<Utc>) -> Self {
        Self {
            signon: Signon {
                password: SignonPassword {
                    customer: CustomerId {
                        login_id: query.login_id.clone(),
                    },
                },
            },
            service: DocumentServiceRequest {
                request_id: request_id.to_string(),
                quote_number: query.quote_number.clone(),
                carriers: CarrierRequest {
                    carriers: query
                        .carriers
                        .iter()
                        .map(|name| CarrierInfo {
                            name: name.clone(),
                            admitted_status: "N".to_string(),
                        })
                        .collect(),
                },
                response_format: RESPONSE_FORMAT.to_string(),
                inquiry: DocumentInquiry {
                    lob_code: PACKAGE_LOB_CODE.to_string(),
                    requested_at,
                    documents: DocumentList {
                        details: query
                            .kinds
                            .iter()
                            .map(|&kind| DocumentDetail {
                                kind,
                                copy: query.copy,
                            })
                            .collect(),
                    },
                },
            },
        }
    }
}

// ============================================================================
// Response
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AceHubDocumentResponse {
    #[serde(rename = "InsuranceSvcRs")]
    pub service: Option<DocumentServiceResponse>,
    #[serde(rename = "Status")]
    pub status: Option<AceHubStatus>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocumentServiceResponse {
    #[serde(rename = "RqUID")]
    pub request_id: String,
    #[serde(rename = "IRH_QuoteNo")]
    pub quote_number: String,
    #[serde(rename = "Documents")]
    pub documents: Option<Vec<AceHubDocument>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AceHubDocument {
    #[serde(rename = "DocumentType")]
    pub document_type: String,
    #[serde(rename = "DocumentFormat")]
    pub format: String,
    /// File contents, base64-encoded as the carrier sent them.
    #[serde(rename = "DocumentBase64")]
    pub content_base64: String,
    #[serde(rename = "FileName")]
    pub file_name: String,
    #[serde(rename = "CarrierName")]
    pub carrier_name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AceHubStatus {
    #[serde(rename = "StatusCd")]
    pub code: String,
    #[serde(rename = "StatusDesc")]
    pub description: String,
    #[serde(rename = "Errors")]
    pub errors: Option<Vec<AceHubStatusError>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AceHubStatusError {
    #[serde(rename = "ErrorCd")]
    pub code: String,
    #[serde(rename = "ErrorDesc")]
    pub description: String,
}

impl AceHubDocumentResponse {
    /// The returned documents, or the carrier's error messages when it
    /// reported any.
    pub fn into_documents(self) -> Result<Vec<AceHubDocument>, Vec<String>> {
        let errors: Vec<String> = self
            .status
            .and_then(|status| status.errors)
            .unwrap_or_default()
            .into_iter()
            .map(|e| match (e.code.trim(), e.description.trim()) {
                ("", description) => description.to_string(),
                (code, "") => code.to_string(),
                (code, description) => format!("{}: {}", code, description),
            })
            .filter(|message| !message.is_empty())
            .collect();
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(self
            .service
            .and_then(|service| service.documents)
            .unwrap_or_default())
    }
}

/// Fetches carrier documents for a previously issued quote.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    async fn get_document(
        &self,
        request: &AceHubDocumentRequest,
        cancel: &CancellationToken,
    ) -> Result<AceHubDocumentResponse, CarrierError>;
}

#[async_trait]
impl DocumentSource for HttpCarrierTransport<DyadWire> {
    async fn get_document(
        &self,
        request: &AceHubDocumentRequest,
        cancel: &CancellationToken,
    ) -> Result<AceHubDocumentResponse, CarrierError> {
        self.post(DOCUMENT_PATH, request, cancel).await
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use chrono::TimeZone;
    use reqwest::Client;
    use serde_json::{json, Value};

    use super::*;
    use crate::provider::dyad::TOKEN_PATH;
    use crate::transport::{CarrierAuth, RetryPolicy, TokenExchange};

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn transport(base: &str) -> HttpCarrierTransport<DyadWire> {
        let exchange = TokenExchange::new(
            Client::new(),
            format!("{}{}", base, TOKEN_PATH),
            "client",
            "shh",
        );
        HttpCarrierTransport::<DyadWire>::new(
            Client::new(),
            base,
            CarrierAuth::ClientCredentials(exchange),
        )
        .with_retry(RetryPolicy {
            max_retries: 2,
            base_delay: Duration::from_millis(1),
        })
    }

    fn token_route(router: Router) -> Router {
        router.route(
            TOKEN_PATH,
            post(|| async { Json(json!({ "access_token": "doc-token", "expires_in": 3600 })) }),
        )
    }

    #[test]
    fn test_request_shape() {
        let query = DocumentQuery::new("DY-100")
            .with_kinds([DocumentKind::Quote, DocumentKind::Binder])
            .with_copy(DocumentCopy::Insured)
            .with_login_id("agent-7")
            .with_carrier("Hartford");
        let requested_at = Utc.with_ymd_and_hms(2025, 7, 1, 12, 0, 0).unwrap();
        let request = AceHubDocumentRequest::at(&query, Uuid::nil(), requested_at);

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["SignonRq"]["SignonPswd"]["CustId"]["CustLoginId"], "agent-7");
        let service = &json["InsuranceSvcRq"];
        assert_eq!(service["RqUID"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(service["IRH_QuoteNo"], "DY-100");
        assert_eq!(service["comIRH_AdditionalQueTypeExt"], "JSON");
        assert_eq!(
            service["comIRH_CarrierRequestExt"]["comIRH_CarrierInfoExt"][0],
            json!({ "IRH_CarrierName": "Hartford", "IRH_AdmittedStatus": "N" })
        );
        let inquiry = &service["DocumentPolicyQuoteInqRq"];
        assert_eq!(inquiry["LOBCd"], "CPKGE");
        assert_eq!(inquiry["TransactionRequestDt"], "2025-07-01T12:00:00Z");
        assert_eq!(
            inquiry["DocumentList"]["DocumentDetail"],
            json!([
                { "DocumentCd": "QUOTE", "DocumentCopyType": "INSURED" },
                { "DocumentCd": "BINDER", "DocumentCopyType": "INSURED" }
            ])
        );
    }

    #[test]
    fn test_status_errors_become_messages() {
        let response: AceHubDocumentResponse = serde_json::from_value(json!({
            "Status": {
                "StatusCd": "500",
                "Errors": [
                    { "ErrorCd": "DOC404", "ErrorDesc": "No documents for quote" },
                    { "ErrorDesc": "Try again later" },
                    {}
                ]
            }
        }))
        .unwrap();

        assert_eq!(
            response.into_documents().unwrap_err(),
            vec![
                "DOC404: No documents for quote".to_string(),
                "Try again later".to_string()
            ]
        );
    }

    #[test]
    fn test_missing_documents_is_empty() {
        let response: AceHubDocumentResponse =
            serde_json::from_value(json!({ "Status": { "StatusCd": "0" } })).unwrap();
        assert!(response.into_documents().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_document_uses_exchanged_token() {
        let router = token_route(Router::new()).route(
            DOCUMENT_PATH,
            post(|headers: HeaderMap, Json(body): Json<Value>| async move {
                let authorized = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    == Some("Bearer doc-token");
                if !authorized {
                    return (StatusCode::UNAUTHORIZED, Json(json!({})));
                }
                let quote = body["InsuranceSvcRq"]["IRH_QuoteNo"].clone();
                (
                    StatusCode::OK,
                    Json(json!({
                        "InsuranceSvcRs": {
                            "IRH_QuoteNo": quote,
                            "Documents": [{
                                "DocumentType": "QUOTE",
                                "DocumentFormat": "PDF",
                                "DocumentBase64": "JVBERi0=",
                                "FileName": "quote.pdf",
                                "CarrierName": "Hartford"
                            }]
                        },
                        "Status": { "StatusCd": "0", "StatusDesc": "Success" }
                    })),
                )
            }),
        );
        let base = serve(router).await;

        let request = AceHubDocumentRequest::new(&DocumentQuery::new("DY-100"));
        let response = transport(&base)
            .get_document(&request, &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            response.service.as_ref().map(|s| s.quote_number.as_str()),
            Some("DY-100")
        );
        let documents = response.into_documents().unwrap();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].file_name, "quote.pdf");
        assert_eq!(documents[0].content_base64, "JVBERi0=");
    }

    #[tokio::test]
    async fn test_get_document_retries_transient_failures() {
        let hits = Arc::new(AtomicU32::new(0));
        let counter = hits.clone();
        let router = token_route(Router::new()).route(
            DOCUMENT_PATH,
            post(move || {
                let counter = counter.clone();
                async move {
                    if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                        return (StatusCode::GATEWAY_TIMEOUT, Json(json!({})));
                    }
                    (StatusCode::OK, Json(json!({ "InsuranceSvcRs": { "Documents": [] } })))
                }
            }),
        );
        let base = serve(router).await;

        let request = AceHubDocumentRequest::new(&DocumentQuery::new("DY-100"));
        let response = transport(&base)
            .get_document(&request, &CancellationToken::new())
            .await
            .unwrap();

        assert!(response.into_documents().unwrap().is_empty());
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }
}
