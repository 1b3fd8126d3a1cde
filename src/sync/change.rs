use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use crate::config::Config;
use crate::event::EventName;

pub const RECORD_TTL: i64 = 60;
pub const RECORD_TYPE: &str = "CNAME";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ChangeAction {
    Upsert,
    Delete,
}

impl ChangeAction {
    pub fn for_event(event_name: &EventName) -> Option<Self> {
        match event_name {
            EventName::CreateService => Some(Self::Upsert),
            EventName::DeleteService => Some(Self::Delete),
            EventName::Other(_) => None,
        }
    }

    pub fn comment(self) -> &'static str {
        match self {
            ChangeAction::Upsert => "ECS service registered",
            ChangeAction::Delete => "ECS service deregistered",
        }
    }
}

impl Display for ChangeAction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ChangeAction::Upsert => f.write_str("UPSERT"),
            ChangeAction::Delete => f.write_str("DELETE"),
        }
    }
}

/// One CNAME mutation in the private hosted zone.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct DnsChangeRequest {
    pub zone_id: String,
    pub action: ChangeAction,
    pub record_name: String,
    pub record_type: &'static str,
    pub ttl_seconds: i64,
    pub target_value: String,
}

impl DnsChangeRequest {
    pub fn new(
        config: &Config,
        action: ChangeAction,
        service_name: &str,
        target_value: impl Into<String>,
    ) -> Self {
        Self {
            zone_id: config.hosted_zone_id.clone(),
            action,
            record_name: record_name(service_name, &config.private_zone_domain),
            record_type: RECORD_TYPE,
            ttl_seconds: RECORD_TTL,
            target_value: target_value.into(),
        }
    }

    pub fn comment(&self) -> &'static str {
        self.action.comment()
    }
}

/// Fully qualified record name, always ending with a single dot.
pub fn record_name(service_name: &str, private_zone_domain: &str) -> String {
    format!("{}.{}.", service_name, private_zone_domain)
}

/// Receipt of a submitted change, in the shape the DNS provider reports it.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeResponse {
    pub change_info: ChangeInfo,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ChangeInfo {
    pub id: String,
    pub status: String,
    pub submitted_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn build_upsert_request() {
        let config = Config::new("ecs.internal", "Z0123456789", "prod");

        let change = DnsChangeRequest::new(
            &config,
            ChangeAction::Upsert,
            "billing",
            "lb-1-123.elb.amazonaws.com",
        );

        assert_eq!(change.zone_id, "Z0123456789");
        assert_eq!(change.record_name, "billing.ecs.internal.");
        assert_eq!(change.record_type, "CNAME");
        assert_eq!(change.ttl_seconds, 60);
        assert_eq!(change.target_value, "lb-1-123.elb.amazonaws.com");
        assert_eq!(change.comment(), "ECS service registered");
    }

    #[test]
    fn trailing_dot_zone_domain() {
        let config = Config::new("ecs.internal.", "Z0123456789", "prod");

        let change = DnsChangeRequest::new(&config, ChangeAction::Delete, "billing", "lb");

        assert_eq!(change.record_name, "billing.ecs.internal.");
        assert_eq!(change.comment(), "ECS service deregistered");
    }

    #[test]
    fn action_for_event() {
        assert_eq!(
            ChangeAction::for_event(&EventName::CreateService),
            Some(ChangeAction::Upsert)
        );
        assert_eq!(
            ChangeAction::for_event(&EventName::DeleteService),
            Some(ChangeAction::Delete)
        );
        assert_eq!(
            ChangeAction::for_event(&EventName::Other("UpdateService".to_string())),
            None
        );
        assert_eq!(ChangeAction::Upsert.to_string(), "UPSERT");
    }

    #[test]
    fn serialize_change_response() {
        let response = ChangeResponse {
            change_info: ChangeInfo {
                id: "/change/C2682N5HXP0BZ4".to_string(),
                status: "PENDING".to_string(),
                submitted_at: "2026-10-14T08:00:00Z".to_string(),
                comment: Some("ECS service registered".to_string()),
            },
        };

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "ChangeInfo": {
                    "Id": "/change/C2682N5HXP0BZ4",
                    "Status": "PENDING",
                    "SubmittedAt": "2026-10-14T08:00:00Z",
                    "Comment": "ECS service registered"
                }
            })
        );
    }
}
