//! Typed client for the customer routes.

use reqwest::Method;

use crate::error::ClientError;
use crate::http::{ApiClient, TokenProvider, expect_success};
use crate::model::Customer;

/// Typed wrapper over the customer resource.
///
/// Each method maps onto exactly one route; status handling is uniform,
/// so a 404 on `get` and a 400 on `delete` both surface as
/// [`ClientError::Api`] carrying the status.
pub struct CustomerClient<T> {
    api: ApiClient<T>,
}

impl<T> CustomerClient<T>
where
    T: TokenProvider + Send + Sync,
{
    #[must_use]
    pub fn new(api: ApiClient<T>) -> Self {
        Self { api }
    }

    /// `GET /customers`
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] when the request fails or the response is
    /// not a success.
    pub async fn list(&self) -> Result<Vec<Customer>, ClientError> {
        let response = self
            .api
            .request(Method::GET, "customers")
            .await?
            .send()
            .await?;
        Ok(expect_success(response)?.json().await?)
    }

    /// `GET /customer/{id}`
    ///
    /// # Errors
    ///
    /// An unknown id surfaces as [`ClientError::Api`] with status 404.
    pub async fn get(&self, id: i64) -> Result<Customer, ClientError> {
        let response = self
            .api
            .request(Method::GET, &format!("customer/{id}"))
            .await?
            .send()
            .await?;
        Ok(expect_success(response)?.json().await?)
    }

    /// `PUT /customer`
    ///
    /// # Errors
    ///
    /// A payload the store refuses surfaces as [`ClientError::Api`] with
    /// status 400; a name collision surfaces with status 500.
    pub async fn add(&self, customer: &Customer) -> Result<Customer, ClientError> {
        let response = self
            .api
            .request(Method::PUT, "customer")
            .await?
            .json(customer)
            .send()
            .await?;
        Ok(expect_success(response)?.json().await?)
    }

    /// `PATCH /customer/{id}`
    ///
    /// # Errors
    ///
    /// An update that touches no row surfaces as [`ClientError::Api`] with
    /// status 400.
    pub async fn update(&self, id: i64, customer: &Customer) -> Result<(), ClientError> {
        let response = self
            .api
            .request(Method::PATCH, &format!("customer/{id}"))
            .await?
            .json(customer)
            .send()
            .await?;
        expect_success(response)?;
        Ok(())
    }

    /// `DELETE /customer/{id}`
    ///
    /// # Errors
    ///
    /// A delete that touches no row surfaces as [`ClientError::Api`] with
    /// status 400.
    pub async fn delete(&self, id: i64) -> Result<(), ClientError> {
        let response = self
            .api
            .request(Method::DELETE, &format!("customer/{id}"))
            .await?
            .send()
            .await?;
        expect_success(response)?;
        Ok(())
    }
}
