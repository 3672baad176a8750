//! Supertype queries over the registered type lattice.
//!
//! Assignability is subtype-relation querying over a small, closed DAG of
//! supertype edges (base chain plus interface extension), walked explicitly
//! rather than asked of a runtime type system. Instantiations share the
//! edges of their definition.

use crate::registry::TypeRegistry;
use crate::types::TypeId;
use rustc_hash::FxHashSet;

/// Direct supertype edges of a type: its base (if any) followed by its
/// declared interfaces.
pub fn direct_supertypes(registry: &TypeRegistry, id: TypeId) -> Vec<TypeId> {
    let Some(def) = registry.get(id) else {
        return Vec::new();
    };
    let mut edges = Vec::with_capacity(1 + def.interfaces.len());
    if let Some(base) = def.base {
        edges.push(base);
    }
    edges.extend(def.interfaces.iter().copied());
    edges
}

/// The base-type chain of `id`, from the type itself up to `object`.
///
/// Interfaces are not part of the chain; this is the single-inheritance
/// spine the argument finder walks.
pub fn base_chain(registry: &TypeRegistry, id: TypeId) -> Vec<TypeId> {
    let mut chain = Vec::new();
    let mut current = Some(id);
    while let Some(ty) = current {
        chain.push(ty);
        current = registry.get(ty).and_then(|def| def.base);
    }
    chain
}

/// Whether `general` is assignable from `specific`: `specific` is the same
/// type as `general` or reaches it through supertype edges.
pub fn is_assignable_from(registry: &TypeRegistry, general: TypeId, specific: TypeId) -> bool {
    if general == specific {
        return true;
    }
    let mut visited = FxHashSet::default();
    let mut stack = vec![specific];
    while let Some(ty) = stack.pop() {
        if !visited.insert(ty) {
            continue;
        }
        for edge in direct_supertypes(registry, ty) {
            if edge == general {
                return true;
            }
            stack.push(edge);
        }
    }
    false
}

#[cfg(test)]
#[path = "../tests/hierarchy_tests.rs"]
mod tests;
