//! Parser continuations.
//!
//! The parser never recurses. Its pending work is a stack of [`Cont`]
//! values; each token pops continuations until one consumes it. A
//! continuation either consumes the token (pushing whatever should follow)
//! or declines it, in which case the next continuation gets a look.
//!
//! `PushLex`, `PopLex`, `PushContext`, `PushBlockContext` and `PopContext`
//! are bookkeeping actions rather than grammar rules. They never consume a
//! token; lexical ones sitting on top of the stack right after a token was
//! consumed run immediately, so bracket frames close on the closing token's
//! own line.

use quill_lexer::TokenKind;

use crate::lexical::{Closer, FrameInfo, FrameKind};

/// Item parsed by a comma-separated list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    FunArg,
    TypeExpr,
    TypeArg,
    TypeParam,
    ExpressionNoComma,
    ObjProp,
    PropPattern,
    EltPattern,
    ExportField,
    ImportSpec,
    EnumMember,
}

impl Item {
    pub fn cont(self) -> Cont {
        match self {
            Item::FunArg => Cont::FunArg,
            Item::TypeExpr => Cont::TypeExpr,
            Item::TypeArg => Cont::TypeArg,
            Item::TypeParam => Cont::TypeParam,
            Item::ExpressionNoComma => Cont::ExpressionNoComma,
            Item::ObjProp => Cont::ObjProp,
            Item::PropPattern => Cont::PropPattern,
            Item::EltPattern => Cont::EltPattern,
            Item::ExportField => Cont::ExportField,
            Item::ImportSpec => Cont::ImportSpec,
            Item::EnumMember => Cont::EnumMember,
        }
    }
}

/// Token a [`Cont::Expect`] is waiting for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Want {
    Kind(TokenKind),
    Closer(Closer),
}

/// A pending parse step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cont {
    // ─── Bookkeeping ────────────────────────────────────────────────
    PushLex(FrameKind, FrameInfo),
    PopLex,
    PushContext,
    PushBlockContext,
    PopContext,
    Expect(Want),

    // ─── Statements ─────────────────────────────────────────────────
    Statement,
    Block,
    MaybeLabel,
    MaybeElse,
    MaybeCatchBinding,
    ForSpec,
    ForSpec1,
    ForSpec2,
    AfterExport,
    ExportField,
    AfterImport,
    ImportSpec,
    MaybeMoreImports,
    MaybeAs,
    MaybeFrom,
    EnumDef,
    EnumMember,

    // ─── Expressions ────────────────────────────────────────────────
    Expression,
    ExpressionNoComma,
    MaybeExpression,
    ParenExpr,
    MaybeOperatorComma,
    MaybeOperatorNoComma,
    Quasi,
    ContinueQuasi,
    ArrowBody,
    ArrowBodyNoComma,
    /// After `new`.
    MaybeTarget { no_comma: bool },
    /// After `new.`.
    Target { no_comma: bool },
    Property,
    ObjProp,
    GetterSetter,
    AfterProp,
    ArrayLiteral,
    /// Start of a list; may be empty.
    CommaSep { item: Item, end: Closer },
    /// After a list item.
    CommaSepNext { item: Item, end: Closer },
    /// After a comma; a trailing comma before the closer is allowed.
    CommaSepItem { item: Item, end: Closer },

    // ─── Declarations and patterns ──────────────────────────────────
    VarDef,
    VarDefCont,
    Pattern,
    PropPattern,
    EltPattern,
    MaybeAssign,
    FunctionDef,
    FunctionDecl,
    FunArg,
    ClassExpression,
    ClassName,
    ClassNameAfter,
    ClassBody,
    ClassField,

    // ─── Types ──────────────────────────────────────────────────────
    TypeName,
    TypeExpr,
    MaybeType,
    MaybeTypeOrIn,
    MaybeRetType,
    IsKw,
    MaybeReturnType,
    TypeProps,
    TypeProp,
    QuasiType,
    ContinueQuasiType,
    TypeArg,
    AfterType,
    MaybeTypeArgs,
    TypeParam,
    MaybeTypeDefault,
}

impl Cont {
    /// Bookkeeping actions that run as soon as they surface after a
    /// consumed token.
    #[inline]
    pub fn is_lexical(self) -> bool {
        matches!(self, Cont::PushLex(..) | Cont::PopLex | Cont::PopContext)
    }

    #[inline]
    pub fn is_maybe_operator(self) -> bool {
        matches!(self, Cont::MaybeOperatorComma | Cont::MaybeOperatorNoComma)
    }
}
