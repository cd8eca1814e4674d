//! Audit log queries.

use std::collections::HashMap;

use pocketid_client::{ListParams, Result};

use crate::types::{AuditLogEntry, Paginated};

impl super::PocketIdAdminClient {
    /// List audit log entries for the key's own user.
    pub async fn list_own_audit_logs(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Paginated<AuditLogEntry>> {
        self.client
            .get_list("/api/audit-logs", params)
            .await?
            .into_json()
    }

    /// List audit log entries across all users.
    pub async fn list_all_audit_logs(
        &self,
        params: Option<&ListParams>,
    ) -> Result<Paginated<AuditLogEntry>> {
        self.client
            .get_list("/api/audit-logs/all", params)
            .await?
            .into_json()
    }

    /// Distinct client names occurring in the audit log, for filtering.
    pub async fn audit_log_client_names(&self) -> Result<Vec<String>> {
        self.client
            .get("/api/audit-logs/filters/client-names", &[])
            .await?
            .into_json()
    }

    /// User id → username mapping occurring in the audit log, for filtering.
    pub async fn audit_log_users(&self) -> Result<HashMap<String, String>> {
        self.client
            .get("/api/audit-logs/filters/users", &[])
            .await?
            .into_json()
    }
}
