//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Entity counts shown on the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardCounts {
    pub tools: usize,
    pub blog_posts: usize,
    pub pages: usize,
}

/// One entry of the tool type select.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolTypeOption {
    pub value: String,
    pub label: String,
}
