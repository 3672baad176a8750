//! Failure taxonomy for unification and closing.
//!
//! Every failure is a structured variant carrying the implicated names, and
//! `Display` renders a fixed-format message. The message text is part of the
//! observable contract: callers and tests match on the exact strings, so any
//! wording change here is a breaking change.

use std::fmt;

/// Broad failure category, independent of message wording.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Caller passed a non-parameter where a generic parameter was required.
    InvalidArgument,
    /// The constraint graph contains a feature the unifier cannot reason
    /// about.
    NotSupported,
    /// Multiple constraints with no single unification target.
    InconclusiveConstraints,
    /// Two incompatible concrete-class constraints.
    ConflictingConstraints,
    /// Composite closer-level misconfiguration.
    Configuration,
}

/// A unification or closing failure.
///
/// Variants carry pre-rendered names (not interned atoms) because errors are
/// terminal and cold; resolving names eagerly keeps `Display` pure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SolverError {
    /// The type given to the unifier is not a generic parameter.
    InvalidArgument {
        /// Display name of the offending type.
        type_name: String,
    },

    /// A constraint is itself an unbound generic parameter.
    NotSupported {
        /// Parameter whose constraint list is affected.
        param: String,
        /// The parameter-typed constraint.
        constraint: String,
    },

    /// Multiple constraints with no single unification target.
    InconclusiveConstraints {
        /// Parameter being unified.
        param: String,
        /// First implicated constraint, in declaration order.
        first: String,
        /// Second implicated constraint.
        second: String,
    },

    /// Two unrelated concrete classes among the constraints.
    ConflictingConstraints {
        /// Parameter being unified.
        param: String,
        /// First implicated class, in declaration order.
        first: String,
        /// Second implicated class.
        second: String,
    },

    /// The closing target still contains generic parameters.
    OpenTargetClass { mixin: String, target: String },

    /// A parameter carries more than one binding annotation.
    MultipleBindings { param: String, mixin: String },

    /// Chain-bound parameters do not form a contiguous prefix.
    ChainBindingNotLeading { param: String, mixin: String },

    /// A target-argument binding points past the target's arity.
    TargetArgumentOutOfRange {
        param: String,
        mixin: String,
        position: usize,
        target: String,
        arity: usize,
    },

    /// Constraint unification failed for an otherwise unbound parameter.
    UnresolvableParameter {
        mixin: String,
        target: String,
        /// The inner unifier message, lowercased for splicing.
        reason: String,
    },

    /// A parameter has neither a binding annotation nor constraints.
    MissingBindingInformation {
        param: String,
        mixin: String,
        target: String,
    },

    /// A substituted argument violates its parameter's declared constraints.
    ConstraintViolation {
        argument: String,
        position: usize,
        param: String,
    },
}

impl SolverError {
    /// The failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SolverError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            SolverError::NotSupported { .. } => ErrorKind::NotSupported,
            SolverError::InconclusiveConstraints { .. } => ErrorKind::InconclusiveConstraints,
            SolverError::ConflictingConstraints { .. } => ErrorKind::ConflictingConstraints,
            _ => ErrorKind::Configuration,
        }
    }
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::InvalidArgument { type_name } => {
                write!(f, "Type '{type_name}' is not a generic parameter.")
            }
            SolverError::NotSupported { param, constraint } => write!(
                f,
                "The generic parameter '{param}' has a constraint '{constraint}' which is itself \
                 a generic parameter; such constraints are not supported."
            ),
            SolverError::InconclusiveConstraints {
                param,
                first,
                second,
            } => write!(
                f,
                "The generic parameter '{param}' has inconclusive constraints '{first}' and \
                 '{second}', which cannot be unified into a single type."
            ),
            SolverError::ConflictingConstraints {
                param,
                first,
                second,
            } => write!(
                f,
                "The generic parameter '{param}' has conflicting constraints '{first}' and \
                 '{second}'; two unrelated classes cannot be unified into a single type."
            ),
            SolverError::OpenTargetClass { mixin, target } => write!(
                f,
                "The generic mixin '{mixin}' applied to class '{target}' cannot be closed \
                 because the target class must not contain generic parameters."
            ),
            SolverError::MultipleBindings { param, mixin } => write!(
                f,
                "Type parameter '{param}' of generic mixin '{mixin}' has more than one binding \
                 specification."
            ),
            SolverError::ChainBindingNotLeading { param, mixin } => write!(
                f,
                "Type parameter '{param}' of generic mixin '{mixin}' is bound to a chain \
                 argument, but chain-bound parameters must form a contiguous prefix of the \
                 parameter list."
            ),
            SolverError::TargetArgumentOutOfRange {
                param,
                mixin,
                position,
                target,
                arity,
            } => write!(
                f,
                "Type parameter '{param}' of generic mixin '{mixin}' is bound to generic \
                 argument {position} of target class '{target}', but '{target}' only has {arity} \
                 generic arguments."
            ),
            SolverError::UnresolvableParameter {
                mixin,
                target,
                reason,
            } => write!(
                f,
                "The generic mixin '{mixin}' applied to class '{target}' cannot be \
                 automatically closed because {reason}"
            ),
            SolverError::MissingBindingInformation {
                param,
                mixin,
                target,
            } => write!(
                f,
                "Type parameter '{param}' of generic mixin '{mixin}' applied to class \
                 '{target}' does not have any binding information; supply a binding \
                 specification or close the mixin explicitly."
            ),
            SolverError::ConstraintViolation {
                argument,
                position,
                param,
            } => write!(
                f,
                "Generic argument '{argument}' at position {position} violates the constraint \
                 of type parameter '{param}'."
            ),
        }
    }
}

impl std::error::Error for SolverError {}

/// Lowercase the first character of a rendered message so it can be spliced
/// after "cannot be automatically closed because".
pub(crate) fn splice_reason(message: &str) -> String {
    let mut chars = message.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
