use std::fmt::{self, Display, Formatter};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InvalidEventError {
    #[error("event is not an ecs service lifecycle event: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("event doesn't have field {0}")]
    MissingField(&'static str),

    #[error("service {0} doesn't have a named load balancer")]
    NoLoadBalancer(String),
}

/// ECS API call delivered through EventBridge, as recorded by CloudTrail.
///
/// Only the fields the sync needs are modelled; every one of them is optional
/// here and checked by [`EcsEvent::cluster`] and [`LifecycleEvent::try_from`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EcsEvent {
    pub detail: Option<EventDetail>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub event_name: Option<String>,
    pub request_parameters: Option<RequestParameters>,
    pub response_elements: Option<ResponseElements>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    pub cluster: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResponseElements {
    pub service: Option<ServiceElement>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceElement {
    pub service_name: Option<String>,
    pub load_balancers: Option<Vec<LoadBalancerElement>>,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerElement {
    pub load_balancer_name: Option<String>,
}

impl EcsEvent {
    pub fn from_value(value: Value) -> Result<Self, InvalidEventError> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn cluster(&self) -> Result<&str, InvalidEventError> {
        self.detail
            .as_ref()
            .and_then(|detail| detail.request_parameters.as_ref())
            .and_then(|params| params.cluster.as_deref())
            .ok_or(InvalidEventError::MissingField(
                "detail.requestParameters.cluster",
            ))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventName {
    CreateService,
    DeleteService,
    Other(String),
}

impl From<String> for EventName {
    fn from(name: String) -> Self {
        match name.as_str() {
            "CreateService" => Self::CreateService,
            "DeleteService" => Self::DeleteService,
            _ => Self::Other(name),
        }
    }
}

impl Display for EventName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            EventName::CreateService => f.write_str("CreateService"),
            EventName::DeleteService => f.write_str("DeleteService"),
            EventName::Other(name) => f.write_str(name),
        }
    }
}

/// A validated service lifecycle notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifecycleEvent {
    pub event_name: EventName,
    pub cluster: String,
    pub service_name: String,
    /// Name of the first load balancer attached to the service, if it has one.
    pub load_balancer_name: Option<String>,
}

impl LifecycleEvent {
    pub fn require_load_balancer(&self) -> Result<&str, InvalidEventError> {
        self.load_balancer_name
            .as_deref()
            .ok_or_else(|| InvalidEventError::NoLoadBalancer(self.service_name.clone()))
    }
}

impl TryFrom<EcsEvent> for LifecycleEvent {
    type Error = InvalidEventError;

    fn try_from(event: EcsEvent) -> Result<Self, Self::Error> {
        let cluster = event.cluster()?.to_string();

        let detail = event
            .detail
            .ok_or(InvalidEventError::MissingField("detail"))?;

        let event_name = detail
            .event_name
            .ok_or(InvalidEventError::MissingField("detail.eventName"))?;

        let service = detail
            .response_elements
            .and_then(|elements| elements.service)
            .ok_or(InvalidEventError::MissingField(
                "detail.responseElements.service",
            ))?;

        let service_name = service.service_name.ok_or(InvalidEventError::MissingField(
            "detail.responseElements.service.serviceName",
        ))?;

        let load_balancer_name = service
            .load_balancers
            .and_then(|load_balancers| load_balancers.into_iter().next())
            .and_then(|load_balancer| load_balancer.load_balancer_name);

        Ok(Self {
            event_name: event_name.into(),
            cluster,
            service_name,
            load_balancer_name,
        })
    }
}
