//! Resource registry — the explicit, startup-time routing table.
//!
//! Registration replaces any runtime name guessing: a resource is
//! dispatchable iff it was registered here, and misdeclared names fail at
//! startup instead of per request.

use std::collections::HashMap;

use procgate_domain::error::DispatchError;
use procgate_domain::resource::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Half {
    Item,
    Collection,
}

/// A path slug resolved against the registry.
#[derive(Debug, Clone, Copy)]
pub enum ResourceRef<'a> {
    /// The slug addresses single rows of this resource.
    Item(&'a Resource),
    /// The slug addresses the whole collection of this resource.
    Collection(&'a Resource),
}

/// Lookup table from path slugs to registered resources.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    resources: Vec<Resource>,
    slugs: HashMap<String, (usize, Half)>,
}

impl ResourceRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource, claiming both of its path slugs.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::DuplicateResource`] when either slug is
    /// already claimed, or when the item and collection names collide.
    pub fn register(&mut self, resource: Resource) -> Result<(), DispatchError> {
        let item = resource.item().as_str().to_owned();
        let collection = resource.collection().as_str().to_owned();
        if item == collection || self.slugs.contains_key(&item) {
            return Err(DispatchError::DuplicateResource(item));
        }
        if self.slugs.contains_key(&collection) {
            return Err(DispatchError::DuplicateResource(collection));
        }
        let index = self.resources.len();
        self.resources.push(resource);
        self.slugs.insert(item, (index, Half::Item));
        self.slugs.insert(collection, (index, Half::Collection));
        Ok(())
    }

    /// Resolve a path slug.
    ///
    /// Lookups are case-insensitive because entity names are stored
    /// lowercase; unknown slugs resolve to `None`.
    #[must_use]
    pub fn find(&self, slug: &str) -> Option<ResourceRef<'_>> {
        let lowered = slug.to_ascii_lowercase();
        let (index, half) = self.slugs.get(&lowered)?;
        let resource = &self.resources[*index];
        Some(match half {
            Half::Item => ResourceRef::Item(resource),
            Half::Collection => ResourceRef::Collection(resource),
        })
    }

    /// Iterate over the registered resources, in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Resource> {
        self.resources.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer() -> Resource {
        Resource::new("customer", "customers", "CustomerID").unwrap()
    }

    #[test]
    fn should_resolve_item_and_collection_slugs() {
        let mut registry = ResourceRegistry::new();
        registry.register(customer()).unwrap();

        assert!(matches!(
            registry.find("customer"),
            Some(ResourceRef::Item(resource)) if resource.id_field() == "CustomerID"
        ));
        assert!(matches!(
            registry.find("customers"),
            Some(ResourceRef::Collection(_))
        ));
    }

    #[test]
    fn should_resolve_slugs_case_insensitively() {
        let mut registry = ResourceRegistry::new();
        registry.register(customer()).unwrap();

        assert!(matches!(
            registry.find("Customers"),
            Some(ResourceRef::Collection(_))
        ));
    }

    #[test]
    fn should_return_none_for_unknown_slugs() {
        let mut registry = ResourceRegistry::new();
        registry.register(customer()).unwrap();

        assert!(registry.find("widgets").is_none());
    }

    #[test]
    fn should_reject_slug_collisions_across_resources() {
        let mut registry = ResourceRegistry::new();
        registry.register(customer()).unwrap();

        let colliding = Resource::new("customers", "customerses", "ID").unwrap();
        assert!(matches!(
            registry.register(colliding),
            Err(DispatchError::DuplicateResource(slug)) if slug == "customers"
        ));
    }

    #[test]
    fn should_reject_resource_whose_own_names_collide() {
        let mut registry = ResourceRegistry::new();
        let fish = Resource::new("fish", "fish", "FishID").unwrap();

        assert!(matches!(
            registry.register(fish),
            Err(DispatchError::DuplicateResource(_))
        ));
    }

    #[test]
    fn should_iterate_in_registration_order() {
        let mut registry = ResourceRegistry::new();
        registry.register(customer()).unwrap();
        registry
            .register(Resource::new("order", "orders", "OrderID").unwrap())
            .unwrap();

        let items: Vec<&str> = registry.iter().map(|r| r.item().as_str()).collect();
        assert_eq!(items, ["customer", "order"]);
    }
}
