use anyhow::Result;

pub mod config;
mod control;
pub mod elb;
pub mod event;
pub mod route53;
pub mod sync;
mod trace;

pub async fn run() -> Result<()> {
    trace::init_tracing()?;

    let result = control::run_handler().await;

    trace::stop_tracing();

    result
}
