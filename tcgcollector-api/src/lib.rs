pub mod endpoints;
mod client;
mod error;
mod macros;
pub mod repositories;
pub mod request;

pub use crate::client::{CallOptions, Client, ClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use crate::error::{ErrorKind, ErrorResponse, SendError, TcgApiError};
pub use crate::request::{EmptyResponse, FromResponse, RequestData};
pub use tokio_util::sync::CancellationToken;
use repositories::*;

pub struct Request;

impl Request {
    pub fn new() -> Self {
        Self {}
    }

    /// Health, statistics and service configuration.
    pub fn system() -> SystemRepository {
        SystemRepository::new()
    }

    pub fn auth() -> AuthRepository {
        AuthRepository::new()
    }

    pub fn audit_log() -> AuditLogRepository {
        AuditLogRepository::new()
    }

    pub fn cards() -> CardRepository {
        CardRepository::new()
    }

    pub fn card_variants() -> CardVariantRepository {
        CardVariantRepository::new()
    }

    pub fn card_grades() -> CardGradeRepository {
        CardGradeRepository::new()
    }

    pub fn card_lists() -> CardListRepository {
        CardListRepository::new()
    }

    pub fn sets() -> SetRepository {
        SetRepository::new()
    }

    pub fn expansions() -> ExpansionRepository {
        ExpansionRepository::new()
    }

    pub fn collections() -> CollectionRepository {
        CollectionRepository::new()
    }

    pub fn users() -> UserRepository {
        UserRepository::new()
    }

    pub fn images() -> ImageRepository {
        ImageRepository::new()
    }

    pub fn news_posts() -> NewsPostRepository {
        NewsPostRepository::new()
    }

    pub fn card_database_logs() -> CardDatabaseLogRepository {
        CardDatabaseLogRepository::new()
    }

    pub fn catalog() -> CatalogRepository {
        CatalogRepository::new()
    }

    pub fn references() -> ReferenceRepository {
        ReferenceRepository::new()
    }
}
