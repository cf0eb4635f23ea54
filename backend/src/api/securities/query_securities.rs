//! In-memory securities query service.

use std::sync::OnceLock;

use common::{
    query_error::QueryFailure,
    security::Security,
    security_query::{SecurityPage, SecurityQuery},
    security_service::SecurityQueryService,
};
use tracing::{debug, info, warn};

use crate::api::securities::securities_filter::SecuritiesFilter;
use crate::mock_utils::{
    securities_mock::load_mock_securities,
    service_config::{ServiceConfig, service_config_from_env},
};

pub struct InMemorySecurityService {
    securities: Vec<Security>,
    config: ServiceConfig,
}

impl InMemorySecurityService {
    pub fn new(securities: Vec<Security>, config: ServiceConfig) -> Self {
        Self { securities, config }
    }

    pub fn with_mock_data(config: ServiceConfig) -> anyhow::Result<Self> {
        Ok(Self::new(load_mock_securities()?, config))
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    pub fn securities(&self) -> &[Security] {
        &self.securities
    }

    fn answer(&self, query: &SecurityQuery) -> Result<SecurityPage, QueryFailure> {
        if query.limit < query.skip {
            return Err(QueryFailure::InvalidQuery(format!("limit {} is before skip {}", query.limit, query.skip)));
        }
        let filter = SecuritiesFilter::from_criteria(&query.filters)?;
        let matching = self.securities.iter().filter(|security| filter.matches(security)).collect::<Vec<_>>();

        let total_count = matching.len() as u64;
        let start = (query.skip.min(total_count)) as usize;
        let end = (query.limit.min(total_count)) as usize;
        let securities = matching[start..end].iter().map(|security| (*security).clone()).collect::<Vec<_>>();

        Ok(SecurityPage { securities, total_count })
    }
}

impl SecurityQueryService for InMemorySecurityService {
    async fn query_securities(&self, query: SecurityQuery) -> Result<SecurityPage, QueryFailure> {
        debug!("securities query: {}", serde_json::to_string(&query).unwrap_or_default());
        let latency = self.config.latency;
        let delayed_answer = async {
            tokio::time::sleep(latency).await;
            self.answer(&query)
        };
        let result = match self.config.timeout {
            Some(timeout) => match tokio::time::timeout(timeout, delayed_answer).await {
                Ok(result) => result,
                Err(_elapsed) => Err(QueryFailure::Timeout),
            },
            None => delayed_answer.await,
        };
        match &result {
            Ok(page) => info!(
                "securities query served: skip={} limit={} returned={} total={}",
                query.skip,
                query.limit,
                page.securities.len(),
                page.total_count
            ),
            Err(e) => warn!("securities query rejected: {e}"),
        }
        result
    }
}


static SHARED_SERVICE: OnceLock<InMemorySecurityService> = OnceLock::new();

/// Process-wide service backed by the bundled mock data and the environment config.
pub fn shared_service() -> &'static InMemorySecurityService {
    SHARED_SERVICE.get_or_init(|| {
        let config = service_config_from_env().unwrap_or_else(|e| {
            warn!("falling back to default securities service config: {e:#}");
            ServiceConfig::default()
        });
        InMemorySecurityService::with_mock_data(config).unwrap_or_else(|e| {
            warn!("serving an empty securities list: {e:#}");
            InMemorySecurityService::new(Vec::new(), config)
        })
    })
}

pub async fn query_securities(query: SecurityQuery) -> Result<SecurityPage, QueryFailure> {
    shared_service().query_securities(query).await
}
