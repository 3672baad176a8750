use super::*;

#[test]
fn seeded_types_are_present() {
    let registry = TypeRegistry::new();
    assert_eq!(registry.kind(TypeId::OBJECT), Some(TypeKind::Class));
    assert_eq!(registry.kind(TypeId::INT), Some(TypeKind::ValueType));
    assert_eq!(registry.display(TypeId::OBJECT), "object");
    assert_eq!(registry.display(TypeId::INT), "int");
    assert!(registry.is_empty());
}

#[test]
fn register_allocates_fresh_ids() {
    let registry = TypeRegistry::new();
    let a = registry.register(TypeDef::class(registry.intern_name("A")));
    let b = registry.register(TypeDef::class(registry.intern_name("B")));
    assert_ne!(a, b);
    assert!(a.is_valid());
    assert_eq!(registry.display(a), "A");
    assert_eq!(registry.display(b), "B");
    assert!(!registry.is_empty());
}

#[test]
fn instantiate_interns_by_content() {
    let registry = TypeRegistry::new();
    let t = registry.register(TypeDef::parameter(TypeParamInfo::new(
        registry.intern_name("T"),
        0,
    )));
    let list = registry.register(TypeDef::open_generic(registry.intern_name("List"), vec![t]));
    let a = registry.register(TypeDef::class(registry.intern_name("A")));
    let b = registry.register(TypeDef::class(registry.intern_name("B")));

    let first = registry.instantiate(list, &[a]);
    let second = registry.instantiate(list, &[a]);
    let other = registry.instantiate(list, &[b]);
    assert_eq!(first, second);
    assert_ne!(first, other);
    assert_ne!(first, list);
}

#[test]
fn instantiate_with_no_args_is_identity() {
    let registry = TypeRegistry::new();
    let a = registry.register(TypeDef::class(registry.intern_name("A")));
    assert_eq!(registry.instantiate(a, &[]), a);
}

#[test]
fn instantiate_with_unregistered_definition_is_identity() {
    let registry = TypeRegistry::new();
    let ghost = TypeId(999);
    let a = registry.register(TypeDef::class(registry.intern_name("A")));
    assert_eq!(registry.instantiate(ghost, &[a]), ghost);
}

#[test]
fn display_renders_argument_lists() {
    let registry = TypeRegistry::new();
    let t = registry.register(TypeDef::parameter(TypeParamInfo::new(
        registry.intern_name("T"),
        0,
    )));
    let u = registry.register(TypeDef::parameter(TypeParamInfo::new(
        registry.intern_name("U"),
        1,
    )));
    let pair = registry.register(TypeDef::open_generic(
        registry.intern_name("Pair"),
        vec![t, u],
    ));
    let a = registry.register(TypeDef::class(registry.intern_name("A")));

    let closed = registry.instantiate(pair, &[a, TypeId::INT]);
    assert_eq!(registry.display(closed), "Pair<A, int>");

    let nested = registry.instantiate(pair, &[closed, a]);
    assert_eq!(registry.display(nested), "Pair<Pair<A, int>, A>");
}

#[test]
fn contains_parameters_sees_through_instantiations() {
    let registry = TypeRegistry::new();
    let t = registry.register(TypeDef::parameter(TypeParamInfo::new(
        registry.intern_name("T"),
        0,
    )));
    let list = registry.register(TypeDef::open_generic(registry.intern_name("List"), vec![t]));
    let a = registry.register(TypeDef::class(registry.intern_name("A")));

    assert!(registry.contains_parameters(t));
    assert!(registry.contains_parameters(list));
    assert!(!registry.contains_parameters(a));

    let closed = registry.instantiate(list, &[a]);
    assert!(!registry.contains_parameters(closed));

    let open = registry.instantiate(list, &[t]);
    assert!(registry.contains_parameters(open));
}

#[test]
fn mixin_base_marking() {
    let registry = TypeRegistry::new();
    let t = registry.register(TypeDef::parameter(TypeParamInfo::new(
        registry.intern_name("T"),
        0,
    )));
    let base = registry.register(TypeDef::open_generic(
        registry.intern_name("Mixin"),
        vec![t],
    ));
    assert!(!registry.is_mixin_base(base));
    registry.mark_mixin_base(base);
    assert!(registry.is_mixin_base(base));
}
