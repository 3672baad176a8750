use super::*;
use crate::types::{TypeDef, TypeParamInfo};

/// Register an open mixin-base definition with `arity` parameters.
fn mixin_base(registry: &TypeRegistry, name: &str, arity: usize) -> TypeId {
    let params = (0..arity)
        .map(|position| {
            let param_name = registry.intern_name(&format!("T{position}"));
            registry.register(TypeDef::parameter(TypeParamInfo::new(param_name, position)))
        })
        .collect();
    let id = registry.register(TypeDef::open_generic(registry.intern_name(name), params));
    registry.mark_mixin_base(id);
    id
}

#[test]
fn no_mixin_base_ancestor_returns_none() {
    let registry = TypeRegistry::new();
    let plain = registry.register(TypeDef::class(registry.intern_name("Plain")));
    assert_eq!(
        find_generic_argument(&registry, plain, ArgumentRole::Target),
        None
    );
    assert_eq!(
        find_generic_argument(&registry, plain, ArgumentRole::Next),
        None
    );
}

#[test]
fn target_role_reads_the_first_argument() {
    let registry = TypeRegistry::new();
    let base = mixin_base(&registry, "Mixin", 1);
    let a = registry.register(TypeDef::class(registry.intern_name("A")));
    let ancestor = registry.instantiate(base, &[a]);
    let derived = registry.register(TypeDef::class(registry.intern_name("Derived")).with_base(ancestor));

    assert_eq!(
        find_generic_argument(&registry, derived, ArgumentRole::Target),
        Some(a)
    );
}

#[test]
fn next_role_on_a_one_argument_instantiation_returns_none() {
    let registry = TypeRegistry::new();
    let base = mixin_base(&registry, "Mixin", 1);
    let a = registry.register(TypeDef::class(registry.intern_name("A")));
    let ancestor = registry.instantiate(base, &[a]);
    let derived = registry.register(TypeDef::class(registry.intern_name("Derived")).with_base(ancestor));

    assert_eq!(
        find_generic_argument(&registry, derived, ArgumentRole::Next),
        None
    );
}

#[test]
fn next_role_reads_the_second_argument() {
    let registry = TypeRegistry::new();
    let base = mixin_base(&registry, "Mixin", 2);
    let a = registry.register(TypeDef::class(registry.intern_name("A")));
    let b = registry.register(TypeDef::class(registry.intern_name("B")));
    let ancestor = registry.instantiate(base, &[a, b]);
    let derived = registry.register(TypeDef::class(registry.intern_name("Derived")).with_base(ancestor));

    assert_eq!(
        find_generic_argument(&registry, derived, ArgumentRole::Target),
        Some(a)
    );
    assert_eq!(
        find_generic_argument(&registry, derived, ArgumentRole::Next),
        Some(b)
    );
}

#[test]
fn walk_starts_at_the_most_derived_type() {
    let registry = TypeRegistry::new();
    let base = mixin_base(&registry, "Mixin", 2);
    let a = registry.register(TypeDef::class(registry.intern_name("A")));
    let b = registry.register(TypeDef::class(registry.intern_name("B")));
    let ancestor = registry.instantiate(base, &[a, b]);
    let mid = registry.register(TypeDef::class(registry.intern_name("Mid")).with_base(ancestor));
    let leaf = registry.register(TypeDef::class(registry.intern_name("Leaf")).with_base(mid));

    assert_eq!(
        find_generic_argument(&registry, leaf, ArgumentRole::Target),
        Some(a)
    );
}

#[test]
fn first_matching_ancestor_terminates_the_walk() {
    let registry = TypeRegistry::new();
    let outer_base = mixin_base(&registry, "Inner", 2);
    let b = registry.register(TypeDef::class(registry.intern_name("B")));
    let c = registry.register(TypeDef::class(registry.intern_name("C")));
    let deep = registry.instantiate(outer_base, &[b, c]);

    // A second mixin-base definition whose instantiations sit above `deep`.
    let t = registry.register(TypeDef::parameter(TypeParamInfo::new(
        registry.intern_name("T0"),
        0,
    )));
    let near_base = registry.register(
        TypeDef::open_generic(registry.intern_name("Outer"), vec![t]).with_base(deep),
    );
    registry.mark_mixin_base(near_base);

    let a = registry.register(TypeDef::class(registry.intern_name("A")));
    let near = registry.instantiate(near_base, &[a]);
    let derived = registry.register(TypeDef::class(registry.intern_name("Derived")).with_base(near));

    // `near` is hit before `deep`: Target reads its single argument and Next
    // finds nothing, even though `deep` could supply a second argument.
    assert_eq!(
        find_generic_argument(&registry, derived, ArgumentRole::Target),
        Some(a)
    );
    assert_eq!(
        find_generic_argument(&registry, derived, ArgumentRole::Next),
        None
    );
}

#[test]
fn finder_struct_and_free_function_agree() {
    let registry = TypeRegistry::new();
    let base = mixin_base(&registry, "Mixin", 1);
    let a = registry.register(TypeDef::class(registry.intern_name("A")));
    let ancestor = registry.instantiate(base, &[a]);
    let derived = registry.register(TypeDef::class(registry.intern_name("Derived")).with_base(ancestor));

    let finder = GenericArgumentFinder::new(&registry);
    assert_eq!(
        finder.find_generic_argument(derived, ArgumentRole::Target),
        find_generic_argument(&registry, derived, ArgumentRole::Target)
    );
}
