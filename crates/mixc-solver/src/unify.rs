//! Constraint unification for generic parameters.
//!
//! Given a generic parameter, collapse its declared constraint set into the
//! single concrete type that satisfies every member, or fail descriptively.
//! The unification target is the most specific member of the set: the one
//! every other member is assignable from.

use crate::diagnostics::SolverError;
use crate::hierarchy::is_assignable_from;
use crate::registry::TypeRegistry;
use crate::types::{SpecialConstraints, TypeId, TypeKind, TypeParamInfo};
use tracing::trace;

/// Diagnostic name of the value-type special constraint.
const VALUE_TYPE_MARKER: &str = "ValueType";

/// Unifies a generic parameter's constraints into one concrete type.
///
/// Stateless over the borrowed registry; each call is an independent pure
/// computation.
pub struct ConstraintUnifier<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> ConstraintUnifier<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Unify the constraints of `param` into a single concrete type.
    ///
    /// `param` must be a `Parameter`-kind registration. With no constraints
    /// at all the result is `object`; a bare value-type constraint yields
    /// the canonical concrete value type.
    pub fn unify(&self, param: TypeId) -> Result<TypeId, SolverError> {
        let info = self
            .registry
            .param_info(param)
            .ok_or_else(|| SolverError::InvalidArgument {
                type_name: self.registry.display(param),
            })?;

        trace!(
            param = %self.registry.resolve_name(info.name),
            constraints = info.constraints.len(),
            special = ?info.special,
            "ConstraintUnifier::unify"
        );

        // Parameter-typed constraints are a hard failure, checked before any
        // unification is attempted.
        for &constraint in &info.constraints {
            if self.registry.kind(constraint) == Some(TypeKind::Parameter) {
                return Err(SolverError::NotSupported {
                    param: self.param_name(&info),
                    constraint: self.registry.display(constraint),
                });
            }
        }

        if info.special.contains(SpecialConstraints::VALUE_TYPE) {
            // A value type cannot satisfy additional reference constraints
            // under this model.
            if let Some(&first) = info.constraints.first() {
                return Err(SolverError::InconclusiveConstraints {
                    param: self.param_name(&info),
                    first: VALUE_TYPE_MARKER.to_string(),
                    second: self.registry.display(first),
                });
            }
            return Ok(TypeId::INT);
        }

        match info.constraints.as_slice() {
            [] => Ok(TypeId::OBJECT),
            [single] => Ok(*single),
            constraints => self.unify_set(&info, constraints),
        }
    }

    /// Find the unique most specific member of a multi-constraint set.
    fn unify_set(
        &self,
        info: &TypeParamInfo,
        constraints: &[TypeId],
    ) -> Result<TypeId, SolverError> {
        let winner = constraints.iter().copied().find(|&candidate| {
            constraints
                .iter()
                .all(|&other| is_assignable_from(self.registry, other, candidate))
        });
        if let Some(unified) = winner {
            return Ok(unified);
        }

        // No single member satisfies the whole set; report the first
        // unrelated pair in declaration order.
        for (i, &first) in constraints.iter().enumerate() {
            for &second in &constraints[i + 1..] {
                if is_assignable_from(self.registry, first, second)
                    || is_assignable_from(self.registry, second, first)
                {
                    continue;
                }
                let both_classes = self.registry.kind(first) == Some(TypeKind::Class)
                    && self.registry.kind(second) == Some(TypeKind::Class);
                let param = self.param_name(info);
                let first = self.registry.display(first);
                let second = self.registry.display(second);
                return Err(if both_classes {
                    SolverError::ConflictingConstraints {
                        param,
                        first,
                        second,
                    }
                } else {
                    SolverError::InconclusiveConstraints {
                        param,
                        first,
                        second,
                    }
                });
            }
        }

        // Pairwise-related sets always have a least member, so this is only
        // reachable through an inconsistent registry; report the head pair.
        Err(SolverError::InconclusiveConstraints {
            param: self.param_name(info),
            first: self.registry.display(constraints[0]),
            second: self.registry.display(constraints[1]),
        })
    }

    fn param_name(&self, info: &TypeParamInfo) -> String {
        self.registry.resolve_name(info.name).to_string()
    }
}

#[cfg(test)]
#[path = "../tests/unify_tests.rs"]
mod tests;
