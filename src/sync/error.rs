use thiserror::Error;

use crate::event::InvalidEventError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid event: {0}")]
    InvalidEvent(#[from] InvalidEventError),

    #[error("look up load balancer failed: {0}")]
    LoadBalancerLookup(#[source] anyhow::Error),

    #[error("load balancer {0} is not exist")]
    LoadBalancerNotFound(String),

    #[error("change dns record failed: {0}")]
    DnsChange(#[source] anyhow::Error),
}
