//! Entity base.
//!
//! An [`Entity`] pairs a stable identifier with an attribute bag it owns
//! exclusively. The id is assigned once at construction and never changes;
//! props are only reachable through shared references, so mutation has to go
//! through the owning entity type.

use serde::Serialize;
use uuid::Uuid;

/// Identity-bearing object that can be stored in a repository.
pub trait DomainEntity: Clone + Send + Sync + 'static {
    /// Stable identifier assigned at construction.
    fn id(&self) -> Uuid;
}

/// Generic entity: an id plus the props it owns.
///
/// Serializes canonically as `{ "id": ..., ...props }` with no hidden fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entity<P> {
    id: Uuid,
    #[serde(flatten)]
    props: P,
}

impl<P> Entity<P> {
    /// Build an entity, generating a v4 UUID when no id is supplied.
    pub fn new(props: P, id: Option<Uuid>) -> Self {
        Self {
            id: id.unwrap_or_else(Uuid::new_v4),
            props,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    /// Swap in a new prop set, keeping the id.
    ///
    /// Only entity types in this crate may call it, after validating `props`.
    pub(crate) fn replace_props(&mut self, props: P) {
        self.props = props;
    }
}

impl<P: Serialize> Entity<P> {
    /// Canonical JSON projection: `{ id, ...props }`.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

impl<P> DomainEntity for Entity<P>
where
    P: Clone + Send + Sync + 'static,
{
    fn id(&self) -> Uuid {
        self.id
    }
}
