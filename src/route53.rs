use std::fmt::{self, Debug, Formatter};

use anyhow::Result;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_route53::types::{
    Change, ChangeAction as Route53Action, ChangeBatch, ResourceRecord, ResourceRecordSet, RrType,
};
use aws_sdk_route53::Client;
use tap::TapFallible;
use tracing::{error, info, instrument};

use crate::sync::{ChangeAction, ChangeInfo, ChangeResponse, DnsChangeRequest, DnsRecordStore};

#[derive(Clone)]
pub struct Route53Dns {
    client: Client,
}

impl Debug for Route53Dns {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route53Dns")
            .field("client", &"Client".to_string())
            .finish()
    }
}

impl Route53Dns {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl DnsRecordStore for Route53Dns {
    #[instrument(err)]
    async fn change_record(&self, change: &DnsChangeRequest) -> Result<ChangeResponse> {
        let change_batch = create_change_batch(change)?;

        info!(?change_batch, "create change batch");

        let change_resp = self
            .client
            .change_resource_record_sets()
            .hosted_zone_id(&change.zone_id)
            .change_batch(change_batch)
            .send()
            .await
            .tap_err(|err| {
                error!(zone_id = %change.zone_id, record_name = %change.record_name, %err, "change resource record sets failed");
            })?;

        info!(?change_resp, "get change resource record sets response done");

        let change_info = change_resp.change_info().ok_or_else(|| {
            error!(?change, "change response doesn't have change info");

            anyhow::anyhow!("change response for {} doesn't have change info", change.record_name)
        })?;

        Ok(ChangeResponse {
            change_info: ChangeInfo {
                id: change_info.id().to_string(),
                status: change_info.status().as_str().to_string(),
                submitted_at: change_info.submitted_at().to_string(),
                comment: change_info.comment().map(str::to_string),
            },
        })
    }
}

fn create_change_batch(change: &DnsChangeRequest) -> Result<ChangeBatch> {
    let action = match change.action {
        ChangeAction::Upsert => Route53Action::Upsert,
        ChangeAction::Delete => Route53Action::Delete,
    };

    let record_set = ResourceRecordSet::builder()
        .name(&change.record_name)
        .r#type(RrType::from(change.record_type))
        .ttl(change.ttl_seconds)
        .resource_records(
            ResourceRecord::builder()
                .value(&change.target_value)
                .build()?,
        )
        .build()?;

    let change_batch = ChangeBatch::builder()
        .comment(change.comment())
        .changes(
            Change::builder()
                .action(action)
                .resource_record_set(record_set)
                .build()?,
        )
        .build()?;

    Ok(change_batch)
}
