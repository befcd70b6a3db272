//! Profile module - the customer record scored by the churn model.
//!
//! - `attributes` - enumerated attribute values and their service labels
//! - `customer_profile` - the copy-on-write profile value
//! - `field_change` - typed single-field edits and raw input parsing

mod attributes;
mod customer_profile;
mod field_change;

pub use attributes::{
    parse_yes_no, yes_no_label, Contract, Gender, InternetService, ParentService, PaymentMethod,
    ServiceOption,
};
pub use customer_profile::{CustomerProfile, TENURE_MAX, TENURE_MIN};
pub use field_change::{AddOn, FieldChange, NumericInputPolicy, ProfileField};
