//! Locating mixin-base generic arguments in a candidate's ancestry.
//!
//! Both binding roles share one walk: from the candidate strictly upward
//! through the base chain toward `object`, stopping at the first ancestor
//! that is an instantiation of a marked mixin-base definition. The role then
//! selects which of that instantiation's arguments to read off.

use crate::registry::TypeRegistry;
use crate::types::{ArgumentRole, TypeId};
use tracing::trace;

/// Reads generic arguments off the mixin-base ancestor of a candidate type.
pub struct GenericArgumentFinder<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> GenericArgumentFinder<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Find the generic argument `role` selects on the first mixin-base
    /// instantiation in `candidate`'s base chain.
    ///
    /// Returns `None` when no mixin-base ancestor exists, or when the found
    /// instantiation does not supply the requested argument. The first
    /// matching ancestor terminates the walk either way.
    pub fn find_generic_argument(&self, candidate: TypeId, role: ArgumentRole) -> Option<TypeId> {
        let mut current = Some(candidate);
        while let Some(ty) = current {
            let def = self.registry.get(ty)?;
            if let Some(definition) = def.definition {
                if self.registry.is_mixin_base(definition) {
                    let found = role.select(&def.args);
                    trace!(
                        candidate = candidate.0,
                        ancestor = ty.0,
                        ?role,
                        found = ?found,
                        "GenericArgumentFinder::find_generic_argument"
                    );
                    return found;
                }
            }
            current = def.base;
        }
        None
    }
}

/// Convenience wrapper over [`GenericArgumentFinder`].
pub fn find_generic_argument(
    registry: &TypeRegistry,
    candidate: TypeId,
    role: ArgumentRole,
) -> Option<TypeId> {
    GenericArgumentFinder::new(registry).find_generic_argument(candidate, role)
}

#[cfg(test)]
#[path = "../tests/argument_finder_tests.rs"]
mod tests;
