use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One page of results from the customer-infringements listing endpoint.
/// An empty cursor signals the end of the result set.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct InfringementPage {
    #[serde(default)]
    pub cursor: String,
    #[serde(default, rename = "customerInfringements")]
    pub customer_infringements: Vec<CustomerInfringements>,
}

/// The infringements relating to a specific customer in a given period.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CustomerInfringements {
    #[serde(default, rename = "elsCustomerId")]
    pub els_customer_id: String,
    #[serde(default, rename = "vendorCustomerId")]
    pub vendor_customer_id: String,
    #[serde(default)]
    pub infringements: Vec<Infringement>,
}

/// A specific EULA licence infringement.
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Infringement {
    #[serde(default, rename = "eulaPeriod")]
    pub eula_period: String,
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub month: u32,
    #[serde(default, rename = "eulaPolicyId")]
    pub eula_policy_id: String,
    #[serde(default, rename = "vendorId")]
    pub vendor_id: String,
    #[serde(default, rename = "featureId")]
    pub feature_id: String,
    #[serde(default, rename = "licenceSetId")]
    pub licence_set_id: String,
    #[serde(default, rename = "licenceIndex")]
    pub licence_index: i32,
    #[serde(default, rename = "numUsers")]
    pub num_users: i32,
}

/// A freshly created access key, as returned by the key-creation endpoint.
#[derive(Debug, Deserialize, Serialize)]
pub struct CreatedAccessKey {
    pub id: String,
    #[serde(rename = "secretAccessKey")]
    pub secret_access_key: String,
    #[serde(default, rename = "expiryDate")]
    pub expiry_date: Option<DateTime<Utc>>,
}
