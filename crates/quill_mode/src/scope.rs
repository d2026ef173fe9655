//! Scope chain and variable lists.
//!
//! A scope frame is pushed for every function (`block == false`) and every
//! braced block, `for` head and `switch` body (`block == true`). The frame
//! saves the variable list that was current when it opened; popping it
//! restores that list. Lists are singly linked and shared between states.

use smallvec::SmallVec;

use crate::arena::{Arena, Name, ScopeId, VarId};

/// One entry in the scope chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ScopeFrame {
    pub prev: Option<ScopeId>,
    /// Variables of the enclosing scope, restored on pop.
    pub vars: Option<VarId>,
    /// Block scopes are transparent to `var` declarations.
    pub block: bool,
}

/// One binding in a variable list.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct VarNode {
    pub name: Name,
    pub next: Option<VarId>,
}

/// Iterate the names of a variable list, newest first.
pub fn names(arena: &Arena, list: Option<VarId>) -> impl Iterator<Item = Name> + '_ {
    std::iter::successors(list, |&id| arena.var(id).next).map(|id| arena.var(id).name)
}

pub fn in_list(arena: &Arena, name: Name, list: Option<VarId>) -> bool {
    names(arena, list).any(|n| n == name)
}

/// Whether `name` is bound in the current local list or in any list saved
/// by an enclosing scope frame.
pub fn in_scope(
    arena: &Arena,
    local_vars: Option<VarId>,
    context: Option<ScopeId>,
    name: Name,
) -> bool {
    if in_list(arena, name, local_vars) {
        return true;
    }
    std::iter::successors(context, |&id| arena.scope(id).prev)
        .any(|id| in_list(arena, name, arena.scope(id).vars))
}

/// Bind a function-scoped name from inside nested block scopes.
///
/// The binding lands in the list saved by the outermost block of the
/// enclosing function, which is the function's own variable list. Every
/// block frame between there and `context` is re-allocated so existing
/// snapshots keep their view. Returns the new innermost scope, or `None`
/// when no function encloses the blocks (the caller then treats the name
/// as global).
pub(crate) fn hoist_var(arena: &mut Arena, context: ScopeId, name: Name) -> Option<ScopeId> {
    let mut blocks: SmallVec<[ScopeId; 8]> = SmallVec::new();
    let mut cursor = Some(context);
    while let Some(id) = cursor {
        let scope = arena.scope(id);
        if !scope.block {
            break;
        }
        blocks.push(id);
        cursor = scope.prev;
    }
    cursor?;

    let &outermost = blocks.last()?;
    let outer = *arena.scope(outermost);
    if in_list(arena, name, outer.vars) {
        return Some(context);
    }
    let vars = arena.push_var(name, outer.vars);
    let mut rebuilt = arena.push_scope(ScopeFrame {
        vars: Some(vars),
        ..outer
    });
    for &id in blocks.iter().rev().skip(1) {
        let block = *arena.scope(id);
        rebuilt = arena.push_scope(ScopeFrame {
            prev: Some(rebuilt),
            ..block
        });
    }
    Some(rebuilt)
}

#[cfg(test)]
mod tests;
