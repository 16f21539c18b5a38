/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::DomainService;
use crate::error::AppError;
use crate::model::endpoints;
use crate::model::query::ListQuery;
use crate::model::requests::{CreateDomainRequest, DomainRecordRequest};
use crate::presentation::domain::{Domain, DomainRecord};
use async_trait::async_trait;
use tracing::{debug, info};

#[async_trait]
impl DomainService for Client {
    async fn get_domains(&self, query: Option<&ListQuery>) -> Result<Vec<Domain>, AppError> {
        let domains: Vec<Domain> = self.execute(endpoints::get_domains(query)).await?;
        debug!("Domains obtained: {}", domains.len());
        Ok(domains)
    }

    async fn create_domain(&self, request: &CreateDomainRequest) -> Result<Domain, AppError> {
        info!("Creating domain {}", request.name);
        self.execute(endpoints::create_domain(request)).await
    }

    async fn get_domain(&self, domain_name: &str) -> Result<Domain, AppError> {
        self.execute(endpoints::get_domain(domain_name)).await
    }

    async fn destroy_domain(&self, domain_name: &str) -> Result<(), AppError> {
        info!("Destroying domain {}", domain_name);
        self.execute(endpoints::destroy_domain(domain_name)).await
    }

    async fn get_domain_records(
        &self,
        domain_name: &str,
        query: Option<&ListQuery>,
    ) -> Result<Vec<DomainRecord>, AppError> {
        let records: Vec<DomainRecord> = self
            .execute(endpoints::get_domain_records(domain_name, query))
            .await?;
        debug!("Records obtained for {}: {}", domain_name, records.len());
        Ok(records)
    }

    async fn create_domain_record(
        &self,
        domain_name: &str,
        request: &DomainRecordRequest,
    ) -> Result<DomainRecord, AppError> {
        info!(
            "Creating {} record {} in {}",
            request.record_type, request.name, domain_name
        );
        self.execute(endpoints::create_domain_record(domain_name, request))
            .await
    }

    async fn get_domain_record(
        &self,
        domain_name: &str,
        record_id: u64,
    ) -> Result<DomainRecord, AppError> {
        self.execute(endpoints::get_domain_record(domain_name, record_id))
            .await
    }

    async fn update_domain_record(
        &self,
        domain_name: &str,
        record_id: u64,
        request: &DomainRecordRequest,
    ) -> Result<DomainRecord, AppError> {
        info!("Updating record {} in {}", record_id, domain_name);
        self.execute(endpoints::update_domain_record(
            domain_name,
            record_id,
            request,
        ))
        .await
    }

    async fn destroy_domain_record(
        &self,
        domain_name: &str,
        record_id: u64,
    ) -> Result<(), AppError> {
        info!("Destroying record {} in {}", record_id, domain_name);
        self.execute(endpoints::destroy_domain_record(domain_name, record_id))
            .await
    }
}
