//! The shipped `customer`/`customers` procedure set.
//!
//! Five statements over the `customers` table, mirroring what a `web.*`
//! stored-procedure schema would contain: list and read return rows as
//! JSON text (`json_object`/`json_group_array`), create inserts from the
//! payload and returns the new row, update patches only the fields the
//! payload carries, delete removes by key.

use procgate_domain::error::DispatchError;
use procgate_domain::procedure::ProcedureName;
use procgate_domain::resource::Resource;
use procgate_domain::verb::Verb;

use crate::catalog::{ParamSlot, ProcedureCatalog, ProcedureDef};
use crate::error::StoreError;

const LIST: &str = r"
    SELECT json_group_array(json_object(
        'CustomerID', CustomerID,
        'CustomerName', CustomerName,
        'PhoneNumber', PhoneNumber,
        'FaxNumber', FaxNumber,
        'WebsiteURL', WebsiteURL,
        'Delivery', json_object(
            'AddressLine1', DeliveryAddressLine1,
            'AddressLine2', DeliveryAddressLine2,
            'PostalCode', DeliveryPostalCode
        )
    ))
    FROM (SELECT * FROM customers ORDER BY CustomerID)
";

const GET: &str = r"
    SELECT json_object(
        'CustomerID', CustomerID,
        'CustomerName', CustomerName,
        'PhoneNumber', PhoneNumber,
        'FaxNumber', FaxNumber,
        'WebsiteURL', WebsiteURL,
        'Delivery', json_object(
            'AddressLine1', DeliveryAddressLine1,
            'AddressLine2', DeliveryAddressLine2,
            'PostalCode', DeliveryPostalCode
        )
    )
    FROM customers
    WHERE CustomerID = ?1
";

const PUT: &str = r"
    INSERT INTO customers (
        CustomerName, PhoneNumber, FaxNumber, WebsiteURL,
        DeliveryAddressLine1, DeliveryAddressLine2, DeliveryPostalCode
    )
    SELECT
        json_extract(?1, '$.CustomerName'),
        json_extract(?1, '$.PhoneNumber'),
        json_extract(?1, '$.FaxNumber'),
        json_extract(?1, '$.WebsiteURL'),
        json_extract(?1, '$.Delivery.AddressLine1'),
        json_extract(?1, '$.Delivery.AddressLine2'),
        json_extract(?1, '$.Delivery.PostalCode')
    WHERE trim(coalesce(json_extract(?1, '$.CustomerName'), '')) <> ''
    RETURNING json_object(
        'CustomerID', CustomerID,
        'CustomerName', CustomerName,
        'PhoneNumber', PhoneNumber,
        'FaxNumber', FaxNumber,
        'WebsiteURL', WebsiteURL,
        'Delivery', json_object(
            'AddressLine1', DeliveryAddressLine1,
            'AddressLine2', DeliveryAddressLine2,
            'PostalCode', DeliveryPostalCode
        )
    )
";

const PATCH: &str = r"
    UPDATE customers SET
        CustomerName = coalesce(json_extract(?1, '$.CustomerName'), CustomerName),
        PhoneNumber = coalesce(json_extract(?1, '$.PhoneNumber'), PhoneNumber),
        FaxNumber = coalesce(json_extract(?1, '$.FaxNumber'), FaxNumber),
        WebsiteURL = coalesce(json_extract(?1, '$.WebsiteURL'), WebsiteURL),
        DeliveryAddressLine1 = coalesce(json_extract(?1, '$.Delivery.AddressLine1'), DeliveryAddressLine1),
        DeliveryAddressLine2 = coalesce(json_extract(?1, '$.Delivery.AddressLine2'), DeliveryAddressLine2),
        DeliveryPostalCode = coalesce(json_extract(?1, '$.Delivery.PostalCode'), DeliveryPostalCode)
    WHERE CustomerID = ?2
";

const DELETE: &str = "DELETE FROM customers WHERE CustomerID = ?1";

/// The resource declaration the shipped procedures serve.
///
/// # Errors
///
/// Returns [`DispatchError::InvalidEntityName`] only if the built-in names
/// were edited into something invalid.
pub fn resource() -> Result<Resource, DispatchError> {
    Resource::new("customer", "customers", "CustomerID")
}

/// Register the customer procedure set for [`resource`].
///
/// # Errors
///
/// Returns [`StoreError::DuplicateProcedure`] when one of the names is
/// already taken.
pub fn register(catalog: &mut ProcedureCatalog, resource: &Resource) -> Result<(), StoreError> {
    let defs = [
        ProcedureDef::new(
            ProcedureName::derive(Verb::Get, resource.collection()),
            LIST,
            &[],
        ),
        ProcedureDef::new(
            ProcedureName::derive(Verb::Get, resource.item()),
            GET,
            &[ParamSlot::Id],
        ),
        ProcedureDef::new(
            ProcedureName::derive(Verb::Put, resource.item()),
            PUT,
            &[ParamSlot::Json],
        ),
        ProcedureDef::new(
            ProcedureName::derive(Verb::Patch, resource.item()),
            PATCH,
            &[ParamSlot::Json, ParamSlot::Id],
        ),
        ProcedureDef::new(
            ProcedureName::derive(Verb::Delete, resource.item()),
            DELETE,
            &[ParamSlot::Id],
        ),
    ];
    for def in defs {
        catalog.register(def)?;
    }
    Ok(())
}
