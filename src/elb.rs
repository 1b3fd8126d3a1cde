use std::fmt::{self, Debug, Formatter};

use anyhow::Result;
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_elasticloadbalancing::operation::describe_load_balancers::{
    DescribeLoadBalancersError, DescribeLoadBalancersOutput,
};
use aws_sdk_elasticloadbalancing::Client;
use tracing::{error, info, instrument};

use crate::sync::{LoadBalancerDirectory, LoadBalancerRecord};

/// Classic Elastic Load Balancing lookups.
#[derive(Clone)]
pub struct ElbDirectory {
    client: Client,
}

impl Debug for ElbDirectory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElbDirectory")
            .field("client", &"Client".to_string())
            .finish()
    }
}

impl ElbDirectory {
    pub fn new(sdk_config: &SdkConfig) -> Self {
        Self {
            client: Client::new(sdk_config),
        }
    }
}

#[async_trait]
impl LoadBalancerDirectory for ElbDirectory {
    #[instrument(err)]
    async fn describe_load_balancer(&self, name: &str) -> Result<Option<LoadBalancerRecord>> {
        let describe_resp = match self
            .client
            .describe_load_balancers()
            .load_balancer_names(name)
            .send()
            .await
        {
            Err(err) if err.as_service_error().map(is_not_found).unwrap_or(false) => {
                info!(name, "load balancer is not exist");

                return Ok(None);
            }

            Err(err) => {
                error!(name, %err, "describe load balancer failed");

                return Err(err.into());
            }

            Ok(resp) => resp,
        };

        info!(?describe_resp, "get describe load balancers response done");

        canonical_dns_name(name, &describe_resp)
    }
}

fn is_not_found(err: &DescribeLoadBalancersError) -> bool {
    err.is_access_point_not_found_exception()
}

/// Only the first description is used.
fn canonical_dns_name(
    name: &str,
    describe_resp: &DescribeLoadBalancersOutput,
) -> Result<Option<LoadBalancerRecord>> {
    let description = match describe_resp.load_balancer_descriptions().first() {
        None => {
            info!(name, "describe load balancers returned nothing");

            return Ok(None);
        }

        Some(description) => description,
    };

    let canonical_dns_name = description.dns_name().ok_or_else(|| {
        error!(name, "load balancer doesn't have dns name");

        anyhow::anyhow!("load balancer {} doesn't have dns name", name)
    })?;

    info!(name, canonical_dns_name, "get load balancer dns name success");

    Ok(Some(LoadBalancerRecord {
        name: name.to_string(),
        canonical_dns_name: canonical_dns_name.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use aws_sdk_elasticloadbalancing::types::error::AccessPointNotFoundException;
    use aws_sdk_elasticloadbalancing::types::LoadBalancerDescription;

    use super::*;

    fn description(name: &str, dns_name: Option<&str>) -> LoadBalancerDescription {
        LoadBalancerDescription::builder()
            .load_balancer_name(name)
            .set_dns_name(dns_name.map(str::to_string))
            .build()
    }

    #[test]
    fn access_point_not_found() {
        let err = DescribeLoadBalancersError::AccessPointNotFoundException(
            AccessPointNotFoundException::builder()
                .message("There is no ACTIVE Load Balancer named 'lb-1'")
                .build(),
        );

        assert!(is_not_found(&err));
    }

    #[test]
    fn empty_describe_response() {
        let describe_resp = DescribeLoadBalancersOutput::builder().build();

        assert_eq!(canonical_dns_name("lb-1", &describe_resp).unwrap(), None);
    }

    #[test]
    fn first_description_wins() {
        let describe_resp = DescribeLoadBalancersOutput::builder()
            .load_balancer_descriptions(description("lb-1", Some("lb-1-123.elb.amazonaws.com")))
            .load_balancer_descriptions(description("lb-1", Some("lb-1-456.elb.amazonaws.com")))
            .build();

        assert_eq!(
            canonical_dns_name("lb-1", &describe_resp).unwrap(),
            Some(LoadBalancerRecord {
                name: "lb-1".to_string(),
                canonical_dns_name: "lb-1-123.elb.amazonaws.com".to_string(),
            })
        );
    }

    #[test]
    fn description_without_dns_name() {
        let describe_resp = DescribeLoadBalancersOutput::builder()
            .load_balancer_descriptions(description("lb-1", None))
            .build();

        assert!(canonical_dns_name("lb-1", &describe_resp).is_err());
    }
}
