//! Generic mixin type closing.
//!
//! This crate closes open generic "mixin" types against concrete target
//! classes. It has three cooperating pieces:
//!
//! - **`ConstraintUnifier`**: collapses a generic parameter's declared
//!   constraints into a single concrete type
//! - **`GenericArgumentFinder`**: reads generic arguments off the mixin-base
//!   ancestor in a type's base chain
//! - **`GenericTypeCloser`**: combines binding annotations and constraint
//!   inference into a full argument list, substitutes it, and validates the
//!   closed type
//!
//! All metadata lives in an explicit [`TypeRegistry`] built at registration
//! time; every query is a pure, deterministic computation over it, safe to
//! run concurrently.
//!
//! ```
//! use mixc_solver::{GenericTypeCloser, TypeDef, TypeParamInfo, TypeRegistry};
//!
//! let registry = TypeRegistry::new();
//! let disposable = registry.register(TypeDef::interface(registry.intern_name("IDisposable")));
//! let t = registry.register(TypeDef::parameter(
//!     TypeParamInfo::new(registry.intern_name("T"), 0).with_constraints(vec![disposable]),
//! ));
//! let mixin = registry.register(TypeDef::open_generic(registry.intern_name("M"), vec![t]));
//! let target = registry.register(TypeDef::class(registry.intern_name("C")));
//!
//! let closed = GenericTypeCloser::new(&registry).close(mixin, target).unwrap();
//! assert_eq!(registry.display(closed), "M<IDisposable>");
//! ```

pub mod argument_finder;
pub mod closer;
pub mod diagnostics;
pub mod hierarchy;
pub mod registry;
pub mod types;
pub mod unify;

pub use argument_finder::{GenericArgumentFinder, find_generic_argument};
pub use closer::GenericTypeCloser;
pub use diagnostics::{ErrorKind, SolverError};
pub use hierarchy::{base_chain, direct_supertypes, is_assignable_from};
pub use registry::TypeRegistry;
pub use types::{ArgumentRole, Binding, SpecialConstraints, TypeDef, TypeId, TypeKind, TypeParamInfo};
pub use unify::ConstraintUnifier;
