use crate::error::AppError;
use crate::model::query::ListQuery;
use crate::model::requests::{CreateDomainRequest, DomainRecordRequest};
use crate::presentation::domain::{Domain, DomainRecord};
use async_trait::async_trait;

/// Interface for the DNS service
#[async_trait]
pub trait DomainService: Send + Sync {
    /// Lists all domains
    async fn get_domains(&self, query: Option<&ListQuery>) -> Result<Vec<Domain>, AppError>;

    /// Creates a domain pointing at an IP address
    async fn create_domain(&self, request: &CreateDomainRequest) -> Result<Domain, AppError>;

    /// Gets a domain by name
    async fn get_domain(&self, domain_name: &str) -> Result<Domain, AppError>;

    /// Deletes a domain and all of its records
    async fn destroy_domain(&self, domain_name: &str) -> Result<(), AppError>;

    /// Lists the records of a domain
    async fn get_domain_records(
        &self,
        domain_name: &str,
        query: Option<&ListQuery>,
    ) -> Result<Vec<DomainRecord>, AppError>;

    /// Creates a record
    ///
    /// # Arguments
    /// * `domain_name` - Domain the record belongs to
    /// * `request` - Record type, name and data, plus the optional priority, port and weight
    async fn create_domain_record(
        &self,
        domain_name: &str,
        request: &DomainRecordRequest,
    ) -> Result<DomainRecord, AppError>;

    /// Gets one record
    async fn get_domain_record(
        &self,
        domain_name: &str,
        record_id: u64,
    ) -> Result<DomainRecord, AppError>;

    /// Replaces a record
    async fn update_domain_record(
        &self,
        domain_name: &str,
        record_id: u64,
        request: &DomainRecordRequest,
    ) -> Result<DomainRecord, AppError>;

    /// Deletes a record
    async fn destroy_domain_record(&self, domain_name: &str, record_id: u64)
    -> Result<(), AppError>;
}
