use tracing::error;

use super::envelope::ProcedureResponse;
use crate::models::bpsp::BpspPoint;
use crate::services::query_gateway::QueryGateway;

/// The `bpsp` procedure router.
#[derive(Clone)]
pub struct BpspRouter {
    gateway: QueryGateway,
}

impl BpspRouter {
    pub fn new(gateway: QueryGateway) -> Self {
        Self { gateway }
    }

    /// `bpsp.getHistory`: five years of BPSP points, oldest first.
    pub async fn get_history(&self) -> ProcedureResponse<BpspPoint> {
        let result = self.gateway.get_bpsp_data().await;
        if let Err(e) = &result {
            error!(error = %e, "Error fetching BPSP data");
        }
        result.into()
    }
}
