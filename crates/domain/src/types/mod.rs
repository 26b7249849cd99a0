//! Domain types: token/claims, the response envelope, and the per-resource
//! records and parameter sets

pub mod alert;
pub mod auth;
pub mod budget;
pub mod contact;
pub mod device;
pub mod envelope;
pub mod location;
pub mod notification;
pub mod query;
pub mod rule;
pub mod subscription;
pub mod usage;
pub mod user;

pub use alert::{UsageAlert, UsageAlertQuery, UsageAlertsParams};
pub use auth::{IdentityClaims, Token};
pub use budget::{Budget, BudgetsParams};
pub use contact::{Contact, ContactsParams};
pub use device::{Device, DeviceParams, DevicesParams};
pub use envelope::{Envelope, PagedEnvelope, Pagination, ResponseEnvelope};
pub use location::{Location, LocationPatch, LocationsParams};
pub use notification::{Notification, NotificationsParams};
pub use query::{Paging, QueryPairs, QueryParameters, SortDirection};
pub use rule::{EventRule, EventRulesParams, UsageAlertRule, UsageAlertRulesParams};
pub use subscription::{Subscription, SubscriptionsParams};
pub use usage::{Bucket, Flow, Operation, QueryUsageRequest, UsageQuery, Units};
pub use user::User;
