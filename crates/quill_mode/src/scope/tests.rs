use super::*;

fn function_scope(arena: &mut Arena, outer: Option<VarId>) -> ScopeId {
    arena.push_scope(ScopeFrame {
        prev: None,
        vars: outer,
        block: false,
    })
}

fn block_scope(arena: &mut Arena, prev: ScopeId, vars: Option<VarId>) -> ScopeId {
    arena.push_scope(ScopeFrame {
        prev: Some(prev),
        vars,
        block: true,
    })
}

#[test]
fn default_vars_are_this_and_arguments() {
    let arena = Arena::new();
    let names: Vec<&str> = names(&arena, Some(arena.default_vars()))
        .map(|n| arena.resolve(n))
        .collect();
    assert_eq!(names, ["this", "arguments"]);
}

#[test]
fn lookup_walks_saved_lists() {
    let mut arena = Arena::new();
    let x = arena.intern("x");
    let y = arena.intern("y");
    let outer = arena.push_var(x, None);
    let func = function_scope(&mut arena, Some(outer));
    let locals = arena.push_var(y, Some(arena.default_vars()));

    assert!(in_scope(&arena, Some(locals), Some(func), x));
    assert!(in_scope(&arena, Some(locals), Some(func), y));
    assert!(!in_scope(&arena, None, None, x));
}

#[test]
fn hoisting_targets_the_function_list() {
    let mut arena = Arena::new();
    let v = arena.intern("v");
    let func = function_scope(&mut arena, None);
    let fn_locals = Some(arena.default_vars());
    let body = block_scope(&mut arena, func, fn_locals);
    let inner = block_scope(&mut arena, body, None);

    let hoisted = hoist_var(&mut arena, inner, v);
    let Some(hoisted) = hoisted else {
        panic!("function scope present, hoist must succeed");
    };
    assert_ne!(hoisted, inner);
    assert!(in_scope(&arena, None, Some(hoisted), v));

    // The rebuilt outermost block saves the function list plus `v`.
    let Some(rebuilt_body) = arena.scope(hoisted).prev else {
        panic!("inner block keeps its parent");
    };
    assert!(in_list(&arena, v, arena.scope(rebuilt_body).vars));
    assert_eq!(arena.scope(rebuilt_body).prev, Some(func));

    // Old snapshots are untouched.
    assert!(!in_scope(&arena, None, Some(inner), v));
}

#[test]
fn hoisting_twice_is_idempotent() {
    let mut arena = Arena::new();
    let v = arena.intern("v");
    let func = function_scope(&mut arena, None);
    let body = block_scope(&mut arena, func, None);
    let Some(first) = hoist_var(&mut arena, body, v) else {
        panic!("hoist must succeed");
    };
    assert_eq!(hoist_var(&mut arena, first, v), Some(first));
}

#[test]
fn hoisting_without_function_is_global() {
    let mut arena = Arena::new();
    let v = arena.intern("v");
    let top_block = arena.push_scope(ScopeFrame {
        prev: None,
        vars: None,
        block: true,
    });
    assert_eq!(hoist_var(&mut arena, top_block, v), None);
}
