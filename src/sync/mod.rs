pub use change::{ChangeAction, ChangeInfo, ChangeResponse, DnsChangeRequest};
pub use directory::{LoadBalancerDirectory, LoadBalancerRecord};
pub use error::Error;
pub use handler::{Outcome, ServiceDnsSync, SkipReason};
pub use record_store::DnsRecordStore;

mod change;
mod directory;
mod error;
mod handler;
mod record_store;
