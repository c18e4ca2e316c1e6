use core::any::TypeId;

use alloc::boxed::Box;

use gx_utils::TypeIdMap;

use super::Contract;

// -----------------------------------------------------------------------------
// ContractRegistry

/// The central store of [`Contract`]s, keyed by type identity.
///
/// A type is serializable exactly when a contract is registered for it; the
/// write context treats a missing contract as a contract violation.
///
/// The registry is built up front and only read during serialization, so one
/// registry can back any number of sequential serialization calls.
///
/// # Example
///
/// ```
/// use gx_ser::contract::{Contract, ContractRegistry};
/// use gx_ser::write::WriteContext;
/// use gx_ser::{GraphObject, MarkupSink, WriteError};
///
/// struct Empty;
/// struct EmptyContract;
///
/// impl Contract for EmptyContract {
///     fn name(&self) -> &str { "Empty" }
///     fn namespace(&self) -> &str { "" }
///     fn write_value(
///         &self,
///         _ctx: &mut WriteContext<'_>,
///         _sink: &mut dyn MarkupSink,
///         _object: &dyn GraphObject,
///     ) -> Result<(), WriteError> {
///         Ok(())
///     }
/// }
///
/// let mut registry = ContractRegistry::new();
/// registry.register::<Empty>(EmptyContract);
///
/// assert!(registry.contains(core::any::TypeId::of::<Empty>()));
/// ```
pub struct ContractRegistry {
    contracts: TypeIdMap<Box<dyn Contract>>,
}

impl ContractRegistry {
    /// Creates an empty registry.
    #[inline]
    pub const fn new() -> Self {
        Self {
            contracts: TypeIdMap::new(),
        }
    }

    /// Registers `contract` for the type `T`, replacing any previous
    /// registration for `T`.
    pub fn register<T: ?Sized + 'static>(&mut self, contract: impl Contract + 'static) {
        self.contracts.insert_type::<T>(Box::new(contract));
    }

    /// Registers a boxed contract under an explicit type identity.
    pub fn register_boxed(&mut self, type_id: TypeId, contract: Box<dyn Contract>) {
        self.contracts.insert(type_id, contract);
    }

    /// The contract registered for the given type identity, if any.
    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&dyn Contract> {
        self.contracts.get(&type_id).map(Box::as_ref)
    }

    /// Whether a contract is registered for the given type identity.
    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.contracts.contains(&type_id)
    }

    /// The number of registered contracts.
    #[inline]
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Whether the registry has no contracts.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }
}

impl Default for ContractRegistry {
    /// See [`ContractRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
