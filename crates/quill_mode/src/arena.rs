//! Append-only storage for persistent line-state data.
//!
//! Line states are snapshotted after every line, so the lexical chain, the
//! scope chain and the variable lists are persistent: a push allocates a new
//! node pointing at its predecessor, and nothing is ever mutated in a way a
//! snapshot could observe (the one exception is a frame's `align` flag, which
//! only moves from unset to set). Nodes live in the [`Arena`] owned by the
//! mode and are addressed by `u32` ids, so a state is a handful of integers
//! plus its continuation stack and clones cheaply.

use std::fmt;

use rustc_hash::FxHashMap;

use crate::lexical::LexFrame;
use crate::scope::{ScopeFrame, VarNode};

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash)]
        #[repr(transparent)]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Index into the arena.
            #[inline]
            pub const fn index(self) -> usize {
                self.0 as usize
            }

            #[inline]
            pub const fn raw(self) -> u32 {
                self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_id!(
    /// Index of a [`LexFrame`].
    FrameId
);
define_id!(
    /// Index of a [`ScopeFrame`].
    ScopeId
);
define_id!(
    /// Index of a [`VarNode`].
    VarId
);
define_id!(
    /// Interned identifier.
    Name
);

#[allow(
    clippy::cast_possible_truncation,
    reason = "arena indices are u32; one editor session never allocates 4G nodes"
)]
#[inline]
fn next_index(len: usize) -> u32 {
    len as u32
}

/// Node counts, for diagnostics.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ArenaStats {
    pub frames: usize,
    pub scopes: usize,
    pub vars: usize,
    pub names: usize,
}

/// Owner of every frame, scope and variable node referenced by line states.
pub struct Arena {
    frames: Vec<LexFrame>,
    scopes: Vec<ScopeFrame>,
    vars: Vec<VarNode>,
    name_map: FxHashMap<Box<str>, Name>,
    name_text: Vec<Box<str>>,
    /// `this` → `arguments`, the implicit bindings of every function scope.
    default_vars: VarId,
}

impl Arena {
    pub fn new() -> Self {
        let mut arena = Arena {
            frames: Vec::with_capacity(64),
            scopes: Vec::with_capacity(16),
            vars: Vec::with_capacity(32),
            name_map: FxHashMap::default(),
            name_text: Vec::new(),
            default_vars: VarId::new(0),
        };
        let arguments = arena.intern("arguments");
        let this = arena.intern("this");
        let tail = arena.push_var(arguments, None);
        arena.default_vars = arena.push_var(this, Some(tail));
        arena
    }

    #[inline]
    pub fn default_vars(&self) -> VarId {
        self.default_vars
    }

    // ─── Lexical frames ─────────────────────────────────────────────

    pub fn push_frame(&mut self, frame: LexFrame) -> FrameId {
        let id = FrameId::new(next_index(self.frames.len()));
        self.frames.push(frame);
        id
    }

    #[inline]
    pub fn frame(&self, id: FrameId) -> &LexFrame {
        &self.frames[id.index()]
    }

    #[inline]
    pub fn frame_mut(&mut self, id: FrameId) -> &mut LexFrame {
        &mut self.frames[id.index()]
    }

    // ─── Scopes ─────────────────────────────────────────────────────

    pub fn push_scope(&mut self, scope: ScopeFrame) -> ScopeId {
        let id = ScopeId::new(next_index(self.scopes.len()));
        self.scopes.push(scope);
        id
    }

    #[inline]
    pub fn scope(&self, id: ScopeId) -> &ScopeFrame {
        &self.scopes[id.index()]
    }

    pub fn push_var(&mut self, name: Name, next: Option<VarId>) -> VarId {
        let id = VarId::new(next_index(self.vars.len()));
        self.vars.push(VarNode { name, next });
        id
    }

    #[inline]
    pub fn var(&self, id: VarId) -> &VarNode {
        &self.vars[id.index()]
    }

    // ─── Names ──────────────────────────────────────────────────────

    pub fn intern(&mut self, text: &str) -> Name {
        if let Some(&name) = self.name_map.get(text) {
            return name;
        }
        let name = Name::new(next_index(self.name_text.len()));
        self.name_text.push(text.into());
        self.name_map.insert(text.into(), name);
        name
    }

    /// Name for `text` if it was ever interned. A name never interned
    /// cannot be bound anywhere.
    #[inline]
    pub fn lookup_name(&self, text: &str) -> Option<Name> {
        self.name_map.get(text).copied()
    }

    #[inline]
    pub fn resolve(&self, name: Name) -> &str {
        &self.name_text[name.index()]
    }

    pub fn stats(&self) -> ArenaStats {
        ArenaStats {
            frames: self.frames.len(),
            scopes: self.scopes.len(),
            vars: self.vars.len(),
            names: self.name_text.len(),
        }
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}
