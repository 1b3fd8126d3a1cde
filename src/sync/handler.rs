use serde::{Serialize, Serializer};
use serde_json::Value;
use tap::TapFallible;
use tracing::{error, info, instrument};

use crate::config::Config;
use crate::event::{EcsEvent, LifecycleEvent};
use crate::sync::{
    ChangeAction, ChangeResponse, DnsChangeRequest, DnsRecordStore, Error, LoadBalancerDirectory,
};

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SkipReason {
    ForeignCluster,
    UnhandledEvent,
}

/// Result of one invocation. A skipped event serializes as `0`.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Outcome {
    Skipped(SkipReason),
    Changed(ChangeResponse),
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Outcome::Skipped(_) => serializer.serialize_u8(0),
            Outcome::Changed(response) => response.serialize(serializer),
        }
    }
}

pub struct ServiceDnsSync<D, S> {
    config: Config,
    directory: D,
    record_store: S,
}

impl<D, S> ServiceDnsSync<D, S> {
    pub fn new(config: Config, directory: D, record_store: S) -> Self {
        Self {
            config,
            directory,
            record_store,
        }
    }
}

impl<D, S> ServiceDnsSync<D, S>
where
    D: LoadBalancerDirectory + Sync,
    S: DnsRecordStore + Sync,
{
    #[instrument(err, skip(self, event))]
    pub async fn handle(&self, event: Value) -> Result<Outcome, Error> {
        info!(%event, "received event");

        let event = EcsEvent::from_value(event).tap_err(|err| {
            error!(%err, "parse event failed");
        })?;

        let cluster = event.cluster()?;
        if cluster != self.config.managed_cluster {
            info!(
                cluster,
                managed_cluster = %self.config.managed_cluster,
                "This event does not apply to us. No action taken."
            );

            return Ok(Outcome::Skipped(SkipReason::ForeignCluster));
        }

        let event = LifecycleEvent::try_from(event).tap_err(|err| {
            error!(%err, "validate event failed");
        })?;

        info!(?event, "get lifecycle event");

        let action = match ChangeAction::for_event(&event.event_name) {
            Some(action) => action,
            None => {
                info!(
                    event_name = %event.event_name,
                    service_name = %event.service_name,
                    "This event does not apply to us. No action taken."
                );

                return Ok(Outcome::Skipped(SkipReason::UnhandledEvent));
            }
        };

        let load_balancer_name = event.require_load_balancer()?;

        let load_balancer = self
            .directory
            .describe_load_balancer(load_balancer_name)
            .await
            .map_err(Error::LoadBalancerLookup)?
            .ok_or_else(|| {
                error!(load_balancer_name, "load balancer is not exist");

                Error::LoadBalancerNotFound(load_balancer_name.to_string())
            })?;

        info!(?load_balancer, "get load balancer done");

        let change = DnsChangeRequest::new(
            &self.config,
            action,
            &event.service_name,
            load_balancer.canonical_dns_name,
        );

        info!(?change, "create dns change request");

        let response = self
            .record_store
            .change_record(&change)
            .await
            .map_err(Error::DnsChange)?;

        info!(?response, %action, record_name = %change.record_name, "change dns record success");

        Ok(Outcome::Changed(response))
    }
}
