//! Resource — explicit declaration of one dispatchable REST resource.

use crate::entity::EntityName;
use crate::error::DispatchError;

/// Static description of a resource, registered once at startup.
///
/// Entity names double as URL path segments, so declaring a resource pins
/// down its whole surface: `GET /{collection}` lists, while
/// `PUT /{item}` and `{GET,PATCH,DELETE} /{item}/{id}` address single rows.
/// `id_field` names the JSON field carrying the integer key in returned
/// rows; create handlers use it to build the `Location` reference.
#[derive(Debug, Clone)]
pub struct Resource {
    item: EntityName,
    collection: EntityName,
    id_field: String,
}

impl Resource {
    /// Declare a resource from its singular and plural entity names plus
    /// the id field of its JSON shape.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::InvalidEntityName`] when either name fails
    /// entity-name validation.
    pub fn new(
        item: &str,
        collection: &str,
        id_field: impl Into<String>,
    ) -> Result<Self, DispatchError> {
        Ok(Self {
            item: EntityName::new(item)?,
            collection: EntityName::new(collection)?,
            id_field: id_field.into(),
        })
    }

    /// The singular entity name, used for single-row operations.
    #[must_use]
    pub fn item(&self) -> &EntityName {
        &self.item
    }

    /// The plural entity name, used by list.
    #[must_use]
    pub fn collection(&self) -> &EntityName {
        &self.collection
    }

    /// The JSON field holding the integer key in returned rows.
    #[must_use]
    pub fn id_field(&self) -> &str {
        &self.id_field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_normalize_entity_names() {
        let resource = Resource::new("Customer", "Customers", "CustomerID").unwrap();
        assert_eq!(resource.item().as_str(), "customer");
        assert_eq!(resource.collection().as_str(), "customers");
        assert_eq!(resource.id_field(), "CustomerID");
    }

    #[test]
    fn should_reject_invalid_item_name() {
        assert!(matches!(
            Resource::new("cust omer", "customers", "CustomerID"),
            Err(DispatchError::InvalidEntityName(_))
        ));
    }

    #[test]
    fn should_reject_invalid_collection_name() {
        assert!(matches!(
            Resource::new("customer", "customers!", "CustomerID"),
            Err(DispatchError::InvalidEntityName(_))
        ));
    }
}
