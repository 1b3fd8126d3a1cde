use anyhow::Result;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, info_span, Instrument};

use crate::config::Config;
use crate::elb::ElbDirectory;
use crate::route53::Route53Dns;
use crate::sync::{Outcome, ServiceDnsSync};

type AwsServiceDnsSync = ServiceDnsSync<ElbDirectory, Route53Dns>;

pub async fn run_handler() -> Result<()> {
    let config = Config::from_env()?;

    info!(?config, "load config done");

    let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let sync = ServiceDnsSync::new(
        config,
        ElbDirectory::new(&sdk_config),
        Route53Dns::new(&sdk_config),
    );

    info!("init elb and route53 clients");

    let sync = &sync;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        handle_event(sync, event)
    }))
    .await
    .map_err(|err| anyhow::anyhow!("lambda runtime stopped: {}", err))
}

async fn handle_event(
    sync: &AwsServiceDnsSync,
    event: LambdaEvent<Value>,
) -> Result<Outcome, lambda_runtime::Error> {
    let request_id = event.context.request_id.clone();

    let outcome = sync
        .handle(event.payload)
        .instrument(info_span!("handle ecs event", %request_id))
        .await
        .map_err(|err| {
            error!(%request_id, %err, "sync service dns failed");

            err
        })?;

    Ok(outcome)
}
