//! Flag types carried by nodes and tokens.

use std::fmt;

bitflags::bitflags! {
    /// Flags for AST nodes.
    ///
    /// The `*_CONTEXT` bits record the grammar context a node was parsed in.
    /// A node can only be reused by the incremental parser when its context
    /// bits match the parser's current context.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        const NONE                          = 0;
        const LET                           = 1 << 0;
        const CONST                         = 1 << 1;
        const USING                         = 1 << 2;
        const AWAIT_USING                   = 1 << 3;
        const NESTED_NAMESPACE              = 1 << 4;
        const NAMESPACE                     = 1 << 6;
        const OPTIONAL_CHAIN                = 1 << 7;
        const GLOBAL_AUGMENTATION           = 1 << 12;
        const DISALLOW_IN_CONTEXT           = 1 << 14;
        const YIELD_CONTEXT                 = 1 << 15;
        const DECORATOR_CONTEXT             = 1 << 16;
        const AWAIT_CONTEXT                 = 1 << 17;
        const DISALLOW_CONDITIONAL_TYPES_CONTEXT = 1 << 18;
        const THIS_NODE_HAS_ERROR           = 1 << 19;
        const JAVASCRIPT_FILE               = 1 << 20;
        const THIS_NODE_OR_ANY_SUB_NODES_HAS_ERROR = 1 << 21;
        const JSX                           = 1 << 23;
        const JSDOC                         = 1 << 24;

        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits() | Self::USING.bits() | Self::AWAIT_USING.bits();

        const CONTEXT_FLAGS = Self::DISALLOW_IN_CONTEXT.bits()
            | Self::YIELD_CONTEXT.bits()
            | Self::DECORATOR_CONTEXT.bits()
            | Self::AWAIT_CONTEXT.bits()
            | Self::DISALLOW_CONDITIONAL_TYPES_CONTEXT.bits()
            | Self::JAVASCRIPT_FILE.bits()
            | Self::JSDOC.bits();
    }
}

bitflags::bitflags! {
    /// Modifier flags summarizing a declaration's modifier list.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const NONE              = 0;
        const EXPORT            = 1 << 0;
        const AMBIENT           = 1 << 1;
        const PUBLIC            = 1 << 2;
        const PRIVATE           = 1 << 3;
        const PROTECTED         = 1 << 4;
        const STATIC            = 1 << 5;
        const READONLY          = 1 << 6;
        const ACCESSOR          = 1 << 7;
        const ABSTRACT          = 1 << 8;
        const ASYNC             = 1 << 9;
        const DEFAULT           = 1 << 10;
        const CONST             = 1 << 11;
        const OVERRIDE          = 1 << 13;
        const IN                = 1 << 14;
        const OUT               = 1 << 15;
        const DECORATOR         = 1 << 16;

        const ACCESSIBILITY_MODIFIER = Self::PUBLIC.bits() | Self::PRIVATE.bits() | Self::PROTECTED.bits();
        const PARAMETER_PROPERTY_MODIFIER = Self::ACCESSIBILITY_MODIFIER.bits() | Self::READONLY.bits() | Self::OVERRIDE.bits();
        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();
    }
}

impl ModifierFlags {
    /// The flag for a single modifier keyword.
    pub fn from_modifier_kind(kind: crate::SyntaxKind) -> ModifierFlags {
        use crate::SyntaxKind;
        match kind {
            SyntaxKind::ExportKeyword => ModifierFlags::EXPORT,
            SyntaxKind::DeclareKeyword => ModifierFlags::AMBIENT,
            SyntaxKind::PublicKeyword => ModifierFlags::PUBLIC,
            SyntaxKind::PrivateKeyword => ModifierFlags::PRIVATE,
            SyntaxKind::ProtectedKeyword => ModifierFlags::PROTECTED,
            SyntaxKind::StaticKeyword => ModifierFlags::STATIC,
            SyntaxKind::ReadonlyKeyword => ModifierFlags::READONLY,
            SyntaxKind::AccessorKeyword => ModifierFlags::ACCESSOR,
            SyntaxKind::AbstractKeyword => ModifierFlags::ABSTRACT,
            SyntaxKind::AsyncKeyword => ModifierFlags::ASYNC,
            SyntaxKind::DefaultKeyword => ModifierFlags::DEFAULT,
            SyntaxKind::ConstKeyword => ModifierFlags::CONST,
            SyntaxKind::OverrideKeyword => ModifierFlags::OVERRIDE,
            SyntaxKind::InKeyword => ModifierFlags::IN,
            SyntaxKind::OutKeyword => ModifierFlags::OUT,
            _ => ModifierFlags::NONE,
        }
    }
}

bitflags::bitflags! {
    /// Flags the scanner attaches to the current token.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenFlags: u16 {
        const NONE                              = 0;
        const PRECEDING_LINE_BREAK              = 1 << 0;
        const PRECEDING_JSDOC_COMMENT           = 1 << 1;
        const UNTERMINATED                       = 1 << 2;
        const EXTENDED_UNICODE_ESCAPE            = 1 << 3;
        const SCIENTIFIC                         = 1 << 4;
        const OCTAL                              = 1 << 5;
        const HEX_SPECIFIER                      = 1 << 6;
        const BINARY_SPECIFIER                   = 1 << 7;
        const OCTAL_SPECIFIER                    = 1 << 8;
        const CONTAINS_SEPARATOR                 = 1 << 9;
        const UNICODE_ESCAPE                     = 1 << 10;
        const CONTAINS_INVALID_ESCAPE            = 1 << 11;

        const NUMERIC_LITERAL_FLAGS = Self::SCIENTIFIC.bits()
            | Self::OCTAL.bits()
            | Self::HEX_SPECIFIER.bits()
            | Self::BINARY_SPECIFIER.bits()
            | Self::OCTAL_SPECIFIER.bits()
            | Self::CONTAINS_SEPARATOR.bits();
    }
}

/// Identity of a node within one parse session.
///
/// Ids are assigned in creation order. A tree produced by an incremental
/// reparse continues numbering from the tree it was derived from, so a
/// reused node keeps its id and fresh nodes never collide with it.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
