//! Closing open generic mixins against concrete target classes.
//!
//! For each unbound parameter the closer either honors an explicit binding
//! annotation (a target-type argument position, or a chain argument read off
//! the target's mixin-base ancestor) or falls back to constraint
//! unification. The assembled argument list is interned into a closed type,
//! which is then validated against the declared generic constraints.

use crate::argument_finder::GenericArgumentFinder;
use crate::diagnostics::{SolverError, splice_reason};
use crate::hierarchy::is_assignable_from;
use crate::registry::TypeRegistry;
use crate::types::{Binding, SpecialConstraints, TypeId, TypeKind, TypeParamInfo};
use crate::unify::ConstraintUnifier;
use tracing::{debug, trace};

/// Closes open generic mixin definitions against a fixed target type.
pub struct GenericTypeCloser<'a> {
    registry: &'a TypeRegistry,
}

impl<'a> GenericTypeCloser<'a> {
    pub fn new(registry: &'a TypeRegistry) -> Self {
        Self { registry }
    }

    /// Close `mixin` against `target`, returning the interned closed type.
    ///
    /// A mixin without generic parameters is returned unchanged. Closure is
    /// atomic: either every parameter resolves and the closed type
    /// validates, or the whole operation fails with a descriptive error and
    /// no effect beyond interning.
    pub fn close(&self, mixin: TypeId, target: TypeId) -> Result<TypeId, SolverError> {
        let mixin_def = self
            .registry
            .get(mixin)
            .ok_or_else(|| SolverError::InvalidArgument {
                type_name: self.registry.display(mixin),
            })?;

        if mixin_def.params.is_empty() {
            return Ok(mixin);
        }

        let mixin_name = self.registry.display(mixin);
        let target_name = self.registry.display(target);
        debug!(mixin = %mixin_name, target = %target_name, "GenericTypeCloser::close");

        if self.registry.contains_parameters(target) {
            return Err(SolverError::OpenTargetClass {
                mixin: mixin_name,
                target: target_name,
            });
        }

        let params = self.collect_params(&mixin_def.params)?;
        self.check_bindings(&mixin_name, &params)?;

        let target_args: Vec<TypeId> = self
            .registry
            .get(target)
            .map(|def| def.args.iter().copied().collect())
            .unwrap_or_default();

        let finder = GenericArgumentFinder::new(self.registry);
        let mut args = Vec::with_capacity(params.len());
        for (param_id, info) in &params {
            let bound = match info.bindings.first() {
                Some(Binding::TargetArgument { position }) => Some(self.target_argument(
                    &mixin_name,
                    &target_name,
                    info,
                    &target_args,
                    *position,
                )?),
                Some(Binding::ChainArgument(role)) => {
                    // A missing mixin-base ancestor leaves the parameter
                    // without a chain binding; it falls through to
                    // constraint-based resolution like an unannotated one.
                    finder.find_generic_argument(target, *role)
                }
                Some(Binding::Constraints) | None => None,
            };
            let arg = match bound {
                Some(arg) => arg,
                None => self.close_via_constraints(&mixin_name, &target_name, *param_id, info)?,
            };
            trace!(
                param = %self.registry.resolve_name(info.name),
                arg = %self.registry.display(arg),
                "resolved mixin type argument"
            );
            args.push(arg);
        }

        let closed = self.registry.instantiate(mixin, &args);
        self.validate(&params, &args)?;
        Ok(closed)
    }

    fn collect_params(
        &self,
        param_ids: &[TypeId],
    ) -> Result<Vec<(TypeId, TypeParamInfo)>, SolverError> {
        param_ids
            .iter()
            .map(|&id| {
                self.registry
                    .param_info(id)
                    .map(|info| (id, info))
                    .ok_or_else(|| SolverError::InvalidArgument {
                        type_name: self.registry.display(id),
                    })
            })
            .collect()
    }

    /// Reject double annotations and chain bindings outside the leading
    /// positions of the parameter list.
    fn check_bindings(
        &self,
        mixin_name: &str,
        params: &[(TypeId, TypeParamInfo)],
    ) -> Result<(), SolverError> {
        for (_, info) in params {
            if info.bindings.len() > 1 {
                return Err(SolverError::MultipleBindings {
                    param: self.registry.resolve_name(info.name).to_string(),
                    mixin: mixin_name.to_string(),
                });
            }
        }

        let mut seen_non_chain = false;
        for (_, info) in params {
            let is_chain = matches!(info.bindings.first(), Some(Binding::ChainArgument(_)));
            if is_chain && seen_non_chain {
                return Err(SolverError::ChainBindingNotLeading {
                    param: self.registry.resolve_name(info.name).to_string(),
                    mixin: mixin_name.to_string(),
                });
            }
            if !is_chain {
                seen_non_chain = true;
            }
        }
        Ok(())
    }

    fn target_argument(
        &self,
        mixin_name: &str,
        target_name: &str,
        info: &TypeParamInfo,
        target_args: &[TypeId],
        position: usize,
    ) -> Result<TypeId, SolverError> {
        target_args.get(position).copied().ok_or_else(|| {
            SolverError::TargetArgumentOutOfRange {
                param: self.registry.resolve_name(info.name).to_string(),
                mixin: mixin_name.to_string(),
                position,
                target: target_name.to_string(),
                arity: target_args.len(),
            }
        })
    }

    /// Resolve a parameter with no usable binding through its constraints.
    fn close_via_constraints(
        &self,
        mixin_name: &str,
        target_name: &str,
        param_id: TypeId,
        info: &TypeParamInfo,
    ) -> Result<TypeId, SolverError> {
        if info.constraints.is_empty() && info.special.is_empty() {
            return Err(SolverError::MissingBindingInformation {
                param: self.registry.resolve_name(info.name).to_string(),
                mixin: mixin_name.to_string(),
                target: target_name.to_string(),
            });
        }
        ConstraintUnifier::new(self.registry)
            .unify(param_id)
            .map_err(|inner| SolverError::UnresolvableParameter {
                mixin: mixin_name.to_string(),
                target: target_name.to_string(),
                reason: splice_reason(&inner.to_string()),
            })
    }

    /// Validate every substituted argument against its parameter's declared
    /// constraints.
    ///
    /// Constraints that reference sibling parameters are checked against the
    /// sibling's resolved argument.
    fn validate(
        &self,
        params: &[(TypeId, TypeParamInfo)],
        args: &[TypeId],
    ) -> Result<(), SolverError> {
        for (position, ((_, info), &arg)) in params.iter().zip(args).enumerate() {
            for &constraint in &info.constraints {
                let required = self.resolve_constraint_target(constraint, params, args);
                if !is_assignable_from(self.registry, required, arg) {
                    return Err(self.violation(arg, position, info));
                }
            }
            let arg_kind = self.registry.kind(arg);
            if info.special.contains(SpecialConstraints::VALUE_TYPE)
                && arg_kind != Some(TypeKind::ValueType)
            {
                return Err(self.violation(arg, position, info));
            }
            if info.special.contains(SpecialConstraints::REFERENCE_TYPE)
                && arg_kind == Some(TypeKind::ValueType)
            {
                return Err(self.violation(arg, position, info));
            }
        }
        Ok(())
    }

    fn resolve_constraint_target(
        &self,
        constraint: TypeId,
        params: &[(TypeId, TypeParamInfo)],
        args: &[TypeId],
    ) -> TypeId {
        if self.registry.kind(constraint) == Some(TypeKind::Parameter) {
            if let Some(index) = params.iter().position(|(id, _)| *id == constraint) {
                return args[index];
            }
        }
        constraint
    }

    fn violation(&self, arg: TypeId, position: usize, info: &TypeParamInfo) -> SolverError {
        SolverError::ConstraintViolation {
            argument: self.registry.display(arg),
            position,
            param: self.registry.resolve_name(info.name).to_string(),
        }
    }
}

#[cfg(test)]
#[path = "../tests/closer_tests.rs"]
mod tests;
