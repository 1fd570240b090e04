use thiserror::Error;

/// Ошибки загрузки и валидации конфигурации фильтров
#[derive(Debug, Error)]
pub enum FilterConfigError {
    #[error("Filter '{id}' has unsupported type '{kind}'")]
    UnsupportedKind { id: String, kind: String },

    #[error("Filter '{id}' has invalid config: {source}")]
    InvalidKindConfig {
        id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Query param '{param}' is declared by both '{first}' and '{second}'")]
    DuplicateQueryParam {
        param: String,
        first: String,
        second: String,
    },

    #[error("Sort config refers to unknown conflicting filter '{0}'")]
    UnknownConflictingFilter(String),

    #[error("Filter '{id}' has min price {min} greater than max price {max}")]
    InvalidPriceBounds { id: String, min: i64, max: i64 },

    #[error("Invalid search page config JSON: {0}")]
    Json(#[from] serde_json::Error),
}
