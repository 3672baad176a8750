//! Core type model for the mixin closer.
//!
//! There is no runtime reflection to lean on, so the metadata the algorithms
//! operate over (types, supertype edges, generic parameters, constraints,
//! binding annotations) is an explicit data model registered once up front.
//! The unification and closing algorithms are pure computations over these
//! structures.

use bitflags::bitflags;
use mixc_common::Atom;
use smallvec::SmallVec;

/// Identifier of a registered type.
///
/// `TypeId`s are cheap handles into the [`TypeRegistry`](crate::TypeRegistry);
/// equality of handles is equality of types, because instantiations are
/// content-interned.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    /// Sentinel value for an invalid `TypeId`.
    pub const INVALID: Self = Self(0);

    /// The universal base class (`object`). Every class chain terminates here.
    pub const OBJECT: Self = Self(1);

    /// The canonical concrete value type (`int`). A bare value-type
    /// constraint unifies to this type.
    pub const INT: Self = Self(2);

    /// First `TypeId` handed out for user registrations.
    pub const FIRST_USER: u32 = 3;

    /// Check if this `TypeId` is valid.
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

/// Kind of a registered type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// A class. Participates in single inheritance via its base edge.
    Class,
    /// An interface. May extend any number of other interfaces.
    Interface,
    /// A value type. No subtypes; assignable only to itself, `object`, and
    /// its declared interfaces.
    ValueType,
    /// An unbound generic parameter slot.
    Parameter,
}

bitflags! {
    /// Special (non-type) constraints on a generic parameter.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SpecialConstraints: u8 {
        /// The parameter must be instantiated with a value type.
        const VALUE_TYPE = 1 << 0;
        /// The parameter must be instantiated with a reference type.
        const REFERENCE_TYPE = 1 << 1;
    }
}

/// Which generic argument of the mixin-base ancestor a chain binding reads.
///
/// The two roles are stateless strategies sharing one base-chain walk; see
/// [`GenericArgumentFinder`](crate::GenericArgumentFinder).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ArgumentRole {
    /// The first generic argument of the mixin-base instantiation.
    Target,
    /// The second generic argument, when the instantiation has one.
    Next,
}

impl ArgumentRole {
    /// Select this role's argument from an instantiation's argument list.
    #[inline]
    pub fn select(self, args: &[TypeId]) -> Option<TypeId> {
        match self {
            ArgumentRole::Target => args.first().copied(),
            ArgumentRole::Next => args.get(1).copied(),
        }
    }
}

/// Binding annotation attached to a generic parameter.
///
/// A parameter carries a list of these so that the invalid "more than one
/// annotation" state is representable; the closer rejects it with a
/// configuration error rather than silently picking one.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Binding {
    /// Bind to the target type's own generic argument at `position`.
    TargetArgument { position: usize },
    /// Close explicitly via constraint unification.
    Constraints,
    /// Bind to the argument found on the mixin-base ancestor of the target.
    ChainArgument(ArgumentRole),
}

/// Declared shape of one generic parameter: its constraints, special
/// constraints, position, and binding annotations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParamInfo {
    /// Parameter name (for diagnostics).
    pub name: Atom,
    /// Declared position in the owning parameter list.
    pub position: usize,
    /// Declared type constraints, in declaration order.
    pub constraints: Vec<TypeId>,
    /// Special constraints (value type / reference type).
    pub special: SpecialConstraints,
    /// Binding annotations. Empty means unannotated.
    pub bindings: Vec<Binding>,
}

impl TypeParamInfo {
    /// Create an unconstrained, unannotated parameter.
    pub fn new(name: Atom, position: usize) -> Self {
        Self {
            name,
            position,
            constraints: Vec::new(),
            special: SpecialConstraints::empty(),
            bindings: Vec::new(),
        }
    }

    /// Set the declared type constraints.
    pub fn with_constraints(mut self, constraints: Vec<TypeId>) -> Self {
        self.constraints = constraints;
        self
    }

    /// Set the special constraints.
    pub fn with_special(mut self, special: SpecialConstraints) -> Self {
        self.special = special;
        self
    }

    /// Add a binding annotation.
    pub fn with_binding(mut self, binding: Binding) -> Self {
        self.bindings.push(binding);
        self
    }
}

/// A registered type: class, interface, value type, generic parameter, open
/// generic definition, or closed instantiation.
///
/// Open generic definitions have a non-empty `params` list (each entry a
/// `Parameter`-kind registration); closed instantiations carry their
/// `definition` plus `args`.
#[derive(Clone, Debug)]
pub struct TypeDef {
    /// Name of the type (for diagnostics).
    pub name: Atom,
    /// Kind of the type.
    pub kind: TypeKind,
    /// Base type edge. `None` for `object`, interfaces, and parameters.
    pub base: Option<TypeId>,
    /// Implemented (classes) or extended (interfaces) interfaces.
    pub interfaces: Vec<TypeId>,
    /// Generic parameters; non-empty marks an open generic definition.
    /// Each entry is a `Parameter`-kind `TypeId`.
    pub params: Vec<TypeId>,
    /// For instantiations: the open definition this closes.
    pub definition: Option<TypeId>,
    /// For instantiations: the supplied generic arguments.
    pub args: SmallVec<[TypeId; 4]>,
    /// For `Parameter`-kind entries: the declared parameter shape.
    pub param: Option<TypeParamInfo>,
}

impl TypeDef {
    /// Create a class deriving directly from `object`.
    pub fn class(name: Atom) -> Self {
        Self {
            name,
            kind: TypeKind::Class,
            base: Some(TypeId::OBJECT),
            interfaces: Vec::new(),
            params: Vec::new(),
            definition: None,
            args: SmallVec::new(),
            param: None,
        }
    }

    /// Create an interface.
    pub fn interface(name: Atom) -> Self {
        Self {
            name,
            kind: TypeKind::Interface,
            base: None,
            interfaces: Vec::new(),
            params: Vec::new(),
            definition: None,
            args: SmallVec::new(),
            param: None,
        }
    }

    /// Create a value type.
    pub fn value_type(name: Atom) -> Self {
        Self {
            name,
            kind: TypeKind::ValueType,
            base: Some(TypeId::OBJECT),
            interfaces: Vec::new(),
            params: Vec::new(),
            definition: None,
            args: SmallVec::new(),
            param: None,
        }
    }

    /// Create a generic parameter registration.
    pub fn parameter(info: TypeParamInfo) -> Self {
        Self {
            name: info.name,
            kind: TypeKind::Parameter,
            base: None,
            interfaces: Vec::new(),
            params: Vec::new(),
            definition: None,
            args: SmallVec::new(),
            param: Some(info),
        }
    }

    /// Create an open generic class definition over the given parameters.
    pub fn open_generic(name: Atom, params: Vec<TypeId>) -> Self {
        Self {
            params,
            ..Self::class(name)
        }
    }

    /// Set the base type edge.
    pub fn with_base(mut self, base: TypeId) -> Self {
        self.base = Some(base);
        self
    }

    /// Set implemented/extended interfaces.
    pub fn with_interfaces(mut self, interfaces: Vec<TypeId>) -> Self {
        self.interfaces = interfaces;
        self
    }

    /// Whether this entry is an open generic definition.
    #[inline]
    pub fn is_open_generic(&self) -> bool {
        !self.params.is_empty()
    }

    /// Whether this entry is a closed instantiation.
    #[inline]
    pub fn is_instantiation(&self) -> bool {
        self.definition.is_some()
    }
}
