use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortOption {
    pub key: String,
    pub label: String,
}

/// Настройки сортировки результатов поиска
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortConfig {
    /// Показывать ли контрол сортировки
    pub active: bool,
    #[serde(default = "default_query_param_name")]
    pub query_param_name: String,
    /// Option that only makes sense while a conflicting filter is active
    #[serde(default = "default_relevance_key")]
    pub relevance_key: String,
    /// Опция, если в URL нет параметра сортировки
    #[serde(default = "default_sort_key")]
    pub default_key: String,
    /// Filter ids whose activity conflicts with the regular sort options
    #[serde(default)]
    pub conflicting_filters: Vec<String>,
    #[serde(default)]
    pub options: Vec<SortOption>,
}

fn default_query_param_name() -> String {
    "sort".to_string()
}

fn default_relevance_key() -> String {
    "relevance".to_string()
}

fn default_sort_key() -> String {
    "createdAt".to_string()
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            active: false,
            query_param_name: default_query_param_name(),
            relevance_key: default_relevance_key(),
            default_key: default_sort_key(),
            conflicting_filters: Vec::new(),
            options: Vec::new(),
        }
    }
}
