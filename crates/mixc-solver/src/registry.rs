//! Type registration and storage.
//!
//! `TypeRegistry` is the single store every algorithm reads from. It owns
//! the name interner, hands out `TypeId`s, and content-interns closed
//! instantiations so that equal (definition, args) pairs always resolve to
//! the same `TypeId`. That interning is what makes closure deterministic:
//! closing the same mixin against the same target twice yields the same
//! handle, not merely an equal one.

use crate::types::{TypeDef, TypeId, TypeKind, TypeParamInfo};
use dashmap::{DashMap, DashSet};
use mixc_common::{Atom, Interner};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use tracing::trace;

/// Thread-safe storage for type definitions.
///
/// Uses `DashMap` so registration and queries need no external coordination.
///
/// ## Usage
///
/// ```
/// use mixc_solver::{TypeDef, TypeRegistry};
///
/// let registry = TypeRegistry::new();
/// let name = registry.intern_name("Target");
/// let id = registry.register(TypeDef::class(name));
/// assert_eq!(registry.display(id), "Target");
/// ```
pub struct TypeRegistry {
    /// Name interner shared by all registrations and diagnostics.
    interner: Interner,

    /// `TypeId` -> `TypeDef` mapping.
    defs: DashMap<TypeId, TypeDef>,

    /// (definition, args) -> interned instantiation.
    instantiations: DashMap<(TypeId, Vec<TypeId>), TypeId>,

    /// Definitions marked as the well-known mixin base.
    mixin_bases: DashSet<TypeId>,

    /// Next available `TypeId`.
    next_id: AtomicU32,
}

impl TypeRegistry {
    /// Create a registry with `object` and `int` pre-seeded.
    pub fn new() -> Self {
        let registry = Self {
            interner: Interner::new(),
            defs: DashMap::new(),
            instantiations: DashMap::new(),
            mixin_bases: DashSet::new(),
            next_id: AtomicU32::new(TypeId::FIRST_USER),
        };

        let object = registry.intern_name("object");
        let mut object_def = TypeDef::class(object);
        object_def.base = None;
        registry.defs.insert(TypeId::OBJECT, object_def);

        let int = registry.intern_name("int");
        registry.defs.insert(TypeId::INT, TypeDef::value_type(int));

        registry
    }

    /// Intern a name string.
    pub fn intern_name(&self, s: &str) -> Atom {
        self.interner.intern(s)
    }

    /// Resolve an interned name.
    pub fn resolve_name(&self, atom: Atom) -> Arc<str> {
        self.interner.resolve(atom)
    }

    fn allocate(&self) -> TypeId {
        TypeId(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Register a new type and return its `TypeId`.
    pub fn register(&self, def: TypeDef) -> TypeId {
        let id = self.allocate();
        trace!(
            type_id = id.0,
            kind = ?def.kind,
            name = %self.interner.resolve(def.name),
            "TypeRegistry::register"
        );
        self.defs.insert(id, def);
        id
    }

    /// Get a type definition by `TypeId`.
    pub fn get(&self, id: TypeId) -> Option<TypeDef> {
        self.defs.get(&id).map(|r| r.clone())
    }

    /// Get the kind of a type.
    pub fn kind(&self, id: TypeId) -> Option<TypeKind> {
        self.defs.get(&id).map(|r| r.kind)
    }

    /// Get the name atom of a type.
    pub fn name(&self, id: TypeId) -> Option<Atom> {
        self.defs.get(&id).map(|r| r.name)
    }

    /// Get the declared parameter shape of a `Parameter`-kind type.
    pub fn param_info(&self, id: TypeId) -> Option<TypeParamInfo> {
        self.defs.get(&id).and_then(|r| r.param.clone())
    }

    /// Mark a definition as a well-known mixin base.
    pub fn mark_mixin_base(&self, definition: TypeId) {
        self.mixin_bases.insert(definition);
    }

    /// Whether a definition is marked as a mixin base.
    pub fn is_mixin_base(&self, definition: TypeId) -> bool {
        self.mixin_bases.contains(&definition)
    }

    /// Intern a closed instantiation of `definition` with `args`.
    ///
    /// Equal (definition, args) pairs always return the same `TypeId`.
    /// An empty argument list, or an unregistered definition, returns the
    /// definition unchanged.
    ///
    /// The instantiation inherits the definition's supertype edges; the
    /// closer validates argument/parameter fit before relying on them.
    pub fn instantiate(&self, definition: TypeId, args: &[TypeId]) -> TypeId {
        if args.is_empty() {
            return definition;
        }
        let Some(template) = self.get(definition) else {
            trace!(
                definition = definition.0,
                "TypeRegistry::instantiate called with unregistered definition"
            );
            return definition;
        };
        let key = (definition, args.to_vec());
        *self
            .instantiations
            .entry(key)
            .or_insert_with(|| {
                let id = self.allocate();
                trace!(
                    type_id = id.0,
                    definition = definition.0,
                    args = ?args,
                    "TypeRegistry::instantiate"
                );
                self.defs.insert(
                    id,
                    TypeDef {
                        name: template.name,
                        kind: template.kind,
                        base: template.base,
                        interfaces: template.interfaces.clone(),
                        params: Vec::new(),
                        definition: Some(definition),
                        args: args.iter().copied().collect(),
                        param: None,
                    },
                );
                id
            })
            .value()
    }

    /// Whether a type is, or transitively contains, an unbound generic
    /// parameter.
    pub fn contains_parameters(&self, id: TypeId) -> bool {
        let Some(def) = self.defs.get(&id) else {
            return false;
        };
        match def.kind {
            TypeKind::Parameter => true,
            _ if def.is_open_generic() => true,
            _ => {
                let args: Vec<TypeId> = def.args.iter().copied().collect();
                drop(def);
                args.iter().any(|&arg| self.contains_parameters(arg))
            }
        }
    }

    /// Render a type name for diagnostics: `Name` or `Name<A, B>`.
    pub fn display(&self, id: TypeId) -> String {
        let Some(def) = self.get(id) else {
            return format!("<unknown type {}>", id.0);
        };
        let name = self.interner.resolve(def.name);
        if def.args.is_empty() {
            return name.to_string();
        }
        let args = def
            .args
            .iter()
            .map(|&arg| self.display(arg))
            .collect::<Vec<_>>()
            .join(", ");
        format!("{name}<{args}>")
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Check if the registry holds only the seeded types.
    pub fn is_empty(&self) -> bool {
        self.defs.len() <= 2
    }
}

impl Default for TypeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../tests/registry_tests.rs"]
mod tests;
