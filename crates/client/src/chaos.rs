//! Failure-path probes that drive the API on purpose.
//!
//! Each scenario exercises one documented error answer so the whole
//! chain, procedure included, can be watched failing in a controlled
//! way. Telemetry captures what happened; nothing here asserts.

use std::fmt;
use std::str::FromStr;

use crate::customers::CustomerClient;
use crate::error::ClientError;
use crate::http::TokenProvider;
use crate::model::{Customer, Delivery};
use crate::telemetry::{Properties, TelemetrySink};

/// Customer id no seeded database contains.
pub const MISSING_CUSTOMER_ID: i64 = 99_999_999;

/// One failure path to probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// Read a customer that does not exist; the API answers 404.
    MissingCustomerLookup,
    /// Delete a customer that does not exist; the API answers 400.
    MissingCustomerDelete,
    /// Insert a customer whose name is already taken; the unique index
    /// fails the procedure and surfaces as a 500.
    DuplicateCustomerName,
    /// Raise the synthetic runtime fault without touching the network.
    RuntimeFault,
}

impl Scenario {
    pub const ALL: [Self; 4] = [
        Self::MissingCustomerLookup,
        Self::MissingCustomerDelete,
        Self::DuplicateCustomerName,
        Self::RuntimeFault,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingCustomerLookup => "missing-customer-lookup",
            Self::MissingCustomerDelete => "missing-customer-delete",
            Self::DuplicateCustomerName => "duplicate-customer-name",
            Self::RuntimeFault => "runtime-fault",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for scenario names nobody defined.
#[derive(Debug, thiserror::Error)]
#[error("unknown scenario: {0}")]
pub struct UnknownScenario(String);

impl FromStr for Scenario {
    type Err = UnknownScenario;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == value)
            .ok_or_else(|| UnknownScenario(value.to_owned()))
    }
}

/// The exact row the seed data already contains, name collision included.
#[must_use]
pub fn duplicate_customer() -> Customer {
    Customer {
        customer_id: None,
        customer_name: Some("Tailspin Toys (Head Office)".to_owned()),
        phone_number: Some("(308) 555-0100".to_owned()),
        fax_number: Some("(308) 555-0101".to_owned()),
        website_url: Some("http://www.tailspintoys.com".to_owned()),
        delivery: Delivery {
            address_line1: Some("Shop 38".to_owned()),
            address_line2: Some("1877 Mittal Road".to_owned()),
            postal_code: Some("90419".to_owned()),
        },
    }
}

/// Outcome of one scenario run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChaosReport {
    pub scenario: Scenario,
    /// Display text of the captured error; `None` when the scenario
    /// unexpectedly succeeded.
    pub error: Option<String>,
}

/// Drives scenarios against a live API and records what happens.
pub struct ChaosRunner<T, K> {
    customers: CustomerClient<T>,
    telemetry: K,
    base_properties: Properties,
}

impl<T, K> ChaosRunner<T, K>
where
    T: TokenProvider + Send + Sync,
    K: TelemetrySink,
{
    #[must_use]
    pub fn new(customers: CustomerClient<T>, telemetry: K, base_properties: Properties) -> Self {
        Self {
            customers,
            telemetry,
            base_properties,
        }
    }

    /// Run one scenario: emit its start event, execute it, and capture
    /// any error into the sink.
    pub async fn run(&self, scenario: Scenario) -> ChaosReport {
        let mut properties = self.base_properties.clone();
        properties.insert("scenario".to_owned(), scenario.to_string());
        self.telemetry
            .track_event(&format!("chaos: {scenario}"), &properties);

        let error = match self.execute(scenario, &mut properties).await {
            Ok(()) => None,
            Err(err) => {
                self.telemetry.track_error(&err, &properties);
                Some(err.to_string())
            }
        };
        ChaosReport { scenario, error }
    }

    async fn execute(
        &self,
        scenario: Scenario,
        properties: &mut Properties,
    ) -> Result<(), ClientError> {
        match scenario {
            Scenario::MissingCustomerLookup => {
                properties.insert("customer_id".to_owned(), MISSING_CUSTOMER_ID.to_string());
                self.customers.get(MISSING_CUSTOMER_ID).await.map(|_| ())
            }
            Scenario::MissingCustomerDelete => {
                properties.insert("customer_id".to_owned(), MISSING_CUSTOMER_ID.to_string());
                self.customers.delete(MISSING_CUSTOMER_ID).await
            }
            Scenario::DuplicateCustomerName => {
                self.customers.add(&duplicate_customer()).await.map(|_| ())
            }
            Scenario::RuntimeFault => Err(ClientError::RuntimeFault),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::http::{ApiClient, StaticTokenProvider};
    use crate::telemetry::MemoryTelemetry;

    #[test]
    fn should_parse_every_scenario_name() {
        for scenario in Scenario::ALL {
            assert_eq!(scenario.as_str().parse::<Scenario>().unwrap(), scenario);
        }
    }

    #[test]
    fn should_reject_unknown_scenario_name() {
        let err = "set-the-building-on-fire".parse::<Scenario>().unwrap_err();

        assert!(err.to_string().contains("set-the-building-on-fire"));
    }

    #[test]
    fn should_collide_with_the_seeded_tailspin_row() {
        let payload = duplicate_customer();

        assert_eq!(
            payload.customer_name.as_deref(),
            Some("Tailspin Toys (Head Office)")
        );
        assert_eq!(payload.customer_id, None);
    }

    #[tokio::test]
    async fn should_capture_runtime_fault_without_network() {
        let telemetry = Arc::new(MemoryTelemetry::new());
        let mut base = Properties::new();
        base.insert("user_DisplayName".to_owned(), "Ada Lovelace".to_owned());
        let runner = ChaosRunner::new(
            CustomerClient::new(ApiClient::new(
                "http://127.0.0.1:9",
                StaticTokenProvider::new("unused"),
            )),
            Arc::clone(&telemetry),
            base,
        );

        let report = runner.run(Scenario::RuntimeFault).await;

        assert_eq!(report.scenario, Scenario::RuntimeFault);
        assert_eq!(report.error.as_deref(), Some("synthetic runtime fault"));

        let events = telemetry.events();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].name, "chaos: runtime-fault");
        assert_eq!(events[0].properties["scenario"], "runtime-fault");
        assert_eq!(events[0].properties["user_DisplayName"], "Ada Lovelace");

        let errors = telemetry.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].name, "synthetic runtime fault");
    }
}
