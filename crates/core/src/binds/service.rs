use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures::FutureExt;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

use coverhub_carriers::models::non_blank;
use coverhub_carriers::{CarrierRegistry, GenericBindRequest, GenericBindResponse};

use crate::errors::{panic_message, GatewayError, Result};

/// Binds a previously issued quote with the carrier that issued it.
#[async_trait]
pub trait BindServiceTrait: Send + Sync {
    /// Never fails: every problem comes back as an unsuccessful response.
    async fn process_bind(
        &self,
        request: &GenericBindRequest,
        cancel: &CancellationToken,
    ) -> GenericBindResponse;
}

pub struct BindService {
    carriers: CarrierRegistry,
}

impl BindService {
    pub fn new(carriers: CarrierRegistry) -> Self {
        Self { carriers }
    }

    async fn run(
        &self,
        request: &GenericBindRequest,
        cancel: &CancellationToken,
    ) -> Result<GenericBindResponse> {
        validate(request)?;

        let lob = request.line_of_business;
        let provider = request.provider;
        info!(%lob, %provider, quote_id = %request.quote_id, "Binding quote");

        let carrier = self
            .carriers
            .get(provider)
            .ok_or(GatewayError::UnsupportedCombination { lob, provider })?;

        let mut response = carrier.bind(request, cancel).await?;
        if response.quote_id.is_none() {
            response.quote_id = Some(request.quote_id.clone());
        }
        Ok(response)
    }
}

/// Up-front checks, first violation wins.
fn validate(request: &GenericBindRequest) -> Result<()> {
    if non_blank(Some(request.quote_id.as_str())).is_none() {
        return Err(GatewayError::Validation(
            "QuoteId is required for binding".to_string(),
        ));
    }
    if !request.line_of_business.is_known() {
        return Err(GatewayError::Validation(
            "Line of Business must be specified for binding".to_string(),
        ));
    }
    if !request.provider.is_known() {
        return Err(GatewayError::Validation(
            "Provider must be specified for binding".to_string(),
        ));
    }
    Ok(())
}

#[async_trait]
impl BindServiceTrait for BindService {
    async fn process_bind(
        &self,
        request: &GenericBindRequest,
        cancel: &CancellationToken,
    ) -> GenericBindResponse {
        let lob = request.line_of_business;
        let provider = request.provider;

        let outcome = AssertUnwindSafe(self.run(request, cancel))
            .catch_unwind()
            .await
            .unwrap_or_else(|payload| Err(GatewayError::Panicked(panic_message(payload))));

        match outcome {
            Ok(response) => {
                if response.success {
                    info!(%lob, %provider, policy = ?response.policy_number, "Bind completed");
                } else {
                    warn!(%lob, %provider, errors = ?response.errors, "Carrier declined bind");
                }
                response
            }
            Err(err) => {
                let message = match &err {
                    GatewayError::Validation(message) => {
                        warn!(%lob, %provider, "Rejected bind request: {}", message);
                        message.clone()
                    }
                    other if other.is_configuration() => {
                        error!(%lob, %provider, kind = "configuration", "{}", other);
                        format!("Error processing bind: {}", other)
                    }
                    other => {
                        error!(%lob, %provider, "Error processing bind request: {}", other);
                        format!("Error processing bind: {}", other)
                    }
                };
                GenericBindResponse {
                    quote_id: Some(request.quote_id.clone()),
                    ..GenericBindResponse::failure(lob, provider, vec![message])
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coverhub_carriers::{CarrierError, LineOfBusiness, PaymentInfo, ProviderType};
    use rust_decimal_macros::dec;

    use crate::test_support::{FakeCarrier, Script};

    fn bind_request(quote_id: &str, lob: LineOfBusiness, provider: ProviderType) -> GenericBindRequest {
        GenericBindRequest {
            quote_id: quote_id.to_string(),
            line_of_business: lob,
            provider,
            payment: Some(PaymentInfo {
                amount: dec!(1500),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    fn service_for(carrier: &std::sync::Arc<FakeCarrier>) -> BindService {
        BindService::new(CarrierRegistry::new().with(carrier.clone()))
    }

    #[tokio::test]
    async fn test_blank_quote_id_is_rejected_without_call() {
        let carrier = FakeCarrier::new(ProviderType::Dyad, Script::Succeed);
        let service = service_for(&carrier);

        let response = service
            .process_bind(
                &bind_request("   ", LineOfBusiness::Property, ProviderType::Dyad),
                &CancellationToken::new(),
            )
            .await;

        assert!(!response.success);
        assert_eq!(response.errors, vec!["QuoteId is required for binding".to_string()]);
        assert_eq!(carrier.calls(), 0);
    }

    #[tokio::test]
    async fn test_validation_reports_first_violation_only() {
        let carrier = FakeCarrier::new(ProviderType::Dyad, Script::Succeed);
        let service = service_for(&carrier);

        let response = service
            .process_bind(
                &bind_request("", LineOfBusiness::Unknown, ProviderType::Unknown),
                &CancellationToken::new(),
            )
            .await;
        assert_eq!(response.errors, vec!["QuoteId is required for binding".to_string()]);

        let response = service
            .process_bind(
                &bind_request("Q-1", LineOfBusiness::Unknown, ProviderType::Unknown),
                &CancellationToken::new(),
            )
            .await;
        assert_eq!(
            response.errors,
            vec!["Line of Business must be specified for binding".to_string()]
        );

        let response = service
            .process_bind(
                &bind_request("Q-1", LineOfBusiness::Flood, ProviderType::Unknown),
                &CancellationToken::new(),
            )
            .await;
        assert_eq!(
            response.errors,
            vec!["Provider must be specified for binding".to_string()]
        );
        assert_eq!(response.quote_id.as_deref(), Some("Q-1"));
        assert_eq!(carrier.calls(), 0);
    }

    #[tokio::test]
    async fn test_bind_dispatches_to_named_provider() {
        let carrier = FakeCarrier::new(ProviderType::Herald, Script::Succeed);
        let service = service_for(&carrier);

        let response = service
            .process_bind(
                &bind_request("HQ-77", LineOfBusiness::GeneralLiability, ProviderType::Herald),
                &CancellationToken::new(),
            )
            .await;

        assert!(response.success);
        assert_eq!(response.provider, ProviderType::Herald);
        assert_eq!(response.policy_number.as_deref(), Some("Herald-P-1"));
        assert_eq!(response.quote_id.as_deref(), Some("HQ-77"));
        assert_eq!(carrier.calls(), 1);
    }

    #[tokio::test]
    async fn test_unregistered_provider_fails() {
        let carrier = FakeCarrier::new(ProviderType::Herald, Script::Succeed);
        let service = service_for(&carrier);

        let response = service
            .process_bind(
                &bind_request("Q-9", LineOfBusiness::Flood, ProviderType::Zywave),
                &CancellationToken::new(),
            )
            .await;

        assert!(!response.success);
        assert_eq!(response.provider, ProviderType::Zywave);
        assert!(response.errors[0].starts_with("Error processing bind: "));
    }

    #[tokio::test]
    async fn test_transport_failure_is_folded() {
        let carrier = FakeCarrier::new(
            ProviderType::Dyad,
            Script::Fail(|provider| CarrierError::Timeout { provider }),
        );
        let service = service_for(&carrier);

        let response = service
            .process_bind(
                &bind_request("DQ-1", LineOfBusiness::WorkerCompensation, ProviderType::Dyad),
                &CancellationToken::new(),
            )
            .await;

        assert!(!response.success);
        assert_eq!(response.line_of_business, LineOfBusiness::WorkerCompensation);
        assert_eq!(response.errors, vec!["Error processing bind: Timeout: Dyad".to_string()]);
    }

    #[tokio::test]
    async fn test_carrier_decline_keeps_provider_messages() {
        let carrier = FakeCarrier::new(
            ProviderType::Zywave,
            Script::Reject(vec!["Quote expired".to_string()]),
        );
        let service = service_for(&carrier);

        let response = service
            .process_bind(
                &bind_request("ZQ-3", LineOfBusiness::Flood, ProviderType::Zywave),
                &CancellationToken::new(),
            )
            .await;

        assert!(!response.success);
        assert_eq!(response.errors, vec!["Quote expired".to_string()]);
        assert_eq!(response.quote_id.as_deref(), Some("ZQ-3"));
    }
}
