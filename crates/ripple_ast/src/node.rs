//! AST node definitions.
//!
//! Nodes are allocated in a `bumpalo` arena and reference their children
//! through `&'a` borrows. Every node starts with a [`NodeData`] header.
//!
//! List elements are stored as [`Child`] values: a borrowed node plus a
//! position shift. A freshly parsed element has a shift of zero. An element
//! reused by the incremental parser is the very node of the previous tree,
//! untouched, and the shift moves it (and its whole subtree) to its place in
//! the new text.

use std::fmt;
use std::ops::Deref;

use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use ripple_core::intern::{InternedString, StringInterner};
use ripple_core::text::{shift_pos, TextPos, TextRange};
use ripple_diagnostics::Diagnostic;

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all AST nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeData {
    /// The kind of this node.
    pub kind: SyntaxKind,
    /// Source position range. `pos` is the full start of the node's first
    /// token, so it includes leading trivia; `end` is the end of its last token.
    pub range: TextRange,
    /// Node flags, including the context flags active at creation.
    pub flags: NodeFlags,
    /// Modifier flags (for declarations).
    pub modifier_flags: ModifierFlags,
    /// Node id, unique within a parse session.
    pub id: NodeId,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
            flags: NodeFlags::NONE,
            modifier_flags: ModifierFlags::NONE,
            id: NodeId::INVALID,
        }
    }

    #[inline]
    pub fn pos(&self) -> TextPos {
        self.range.pos
    }

    #[inline]
    pub fn end(&self) -> TextPos {
        self.range.end
    }

    /// A missing node stands in for an absent required token.
    #[inline]
    pub fn is_missing(&self) -> bool {
        self.range.pos == self.range.end && self.kind != SyntaxKind::EndOfFileToken
    }

    #[inline]
    pub fn has_error(&self) -> bool {
        self.flags.contains(NodeFlags::THIS_NODE_HAS_ERROR)
    }
}

/// An element of a [`NodeList`].
pub struct Child<'a, T> {
    pub node: &'a T,
    /// Offset added to every position in `node`'s subtree.
    pub shift: i32,
}

impl<'a, T> Child<'a, T> {
    pub fn new(node: &'a T) -> Self {
        Self { node, shift: 0 }
    }

    pub fn shifted(node: &'a T, shift: i32) -> Self {
        Self { node, shift }
    }
}

impl<'a, T: crate::HasNodeData> Child<'a, T> {
    /// The element's range in the coordinates of the enclosing list.
    pub fn range(&self) -> TextRange {
        self.node.range().shifted(self.shift)
    }

    pub fn pos(&self) -> TextPos {
        shift_pos(self.node.pos(), self.shift)
    }

    pub fn end(&self) -> TextPos {
        shift_pos(self.node.end(), self.shift)
    }
}

impl<T> Clone for Child<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Child<'_, T> {}

impl<T> Deref for Child<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.node
    }
}

impl<T: fmt::Debug> fmt::Debug for Child<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.shift == 0 {
            self.node.fmt(f)
        } else {
            write!(f, "(shift {}) {:?}", self.shift, self.node)
        }
    }
}

/// An ordered list of nodes with its own span.
pub struct NodeList<'a, T> {
    pub range: TextRange,
    pub elements: &'a [Child<'a, T>],
    pub has_trailing_comma: bool,
}

impl<'a, T> NodeList<'a, T> {
    pub fn new(range: TextRange, elements: &'a [Child<'a, T>]) -> Self {
        Self {
            range,
            elements,
            has_trailing_comma: false,
        }
    }

    /// An empty list at `pos`.
    pub fn empty(pos: TextPos) -> Self {
        Self::new(TextRange::empty(pos), &[])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a T> {
        self.elements.get(index).map(|c| c.node)
    }

    pub fn first(&self) -> Option<&'a T> {
        self.get(0)
    }

    pub fn last(&self) -> Option<&'a T> {
        self.elements.last().map(|c| c.node)
    }

    /// Iterate the elements with their shifts.
    pub fn children(&self) -> std::slice::Iter<'a, Child<'a, T>> {
        self.elements.iter()
    }

    /// Iterate the element nodes.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + 'a {
        self.elements.iter().map(|c| c.node)
    }

    pub fn pos(&self) -> TextPos {
        self.range.pos
    }

    pub fn end(&self) -> TextPos {
        self.range.end
    }
}

impl<T> Clone for NodeList<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeList<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeList<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.elements.iter()).finish()
    }
}

/// An optional arena-allocated node.
pub type OptionalNode<'a, T> = Option<&'a T>;

// ============================================================================
// Source File
// ============================================================================

#[derive(Debug)]
pub struct SourceFile<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
    pub end_of_file_token: Token,
    pub file_name: String,
    pub text: &'a str,
    pub language_variant: LanguageVariant,
    /// Number of node ids handed out so far, including those of any
    /// previous tree this one was reparsed from.
    pub node_count: u32,
    pub identifier_count: u32,
    pub parse_diagnostics: Vec<Diagnostic>,
    pub interner: StringInterner,
}

impl<'a> SourceFile<'a> {
    pub fn has_parse_errors(&self) -> bool {
        self.parse_diagnostics.iter().any(|d| d.is_error())
    }

    /// Resolve an interned name against this file's interner.
    pub fn resolve(&self, name: InternedString) -> &str {
        self.interner.resolve(name)
    }

    /// The source text covered by `range`.
    pub fn text_of(&self, range: TextRange) -> &'a str {
        self.text
            .get(range.to_range())
            .unwrap_or_default()
    }
}

/// Whether the tag-markup grammar is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LanguageVariant {
    #[default]
    Standard,
    Jsx,
}

impl LanguageVariant {
    /// `.tsx` and `.jsx` files enable tag markup.
    pub fn from_file_name(file_name: &str) -> Self {
        let lower = file_name.to_ascii_lowercase();
        if lower.ends_with(".tsx") || lower.ends_with(".jsx") {
            LanguageVariant::Jsx
        } else {
            LanguageVariant::Standard
        }
    }
}

// ============================================================================
// Token, Identifier, literals
// ============================================================================

/// A simple token with kind and range. Also used for modifiers and for
/// missing punctuation markers.
#[derive(Debug, Clone, Copy)]
pub struct Token {
    pub data: NodeData,
}

impl Token {
    pub fn new(kind: SyntaxKind, pos: u32, end: u32) -> Self {
        Self {
            data: NodeData::new(kind, pos, end),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Identifier {
    pub data: NodeData,
    /// The interned text of this identifier, escapes resolved.
    pub escaped_text: InternedString,
    /// Set when this identifier is a contextual keyword used as a name.
    pub original_keyword_kind: Option<SyntaxKind>,
}

#[derive(Debug, Clone, Copy)]
pub struct StringLiteral {
    pub data: NodeData,
    pub text: InternedString,
    pub is_single_quote: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct NumericLiteral {
    pub data: NodeData,
    pub text: InternedString,
    pub numeric_literal_flags: TokenFlags,
}

/// BigInt, regex and no-substitution template literals.
#[derive(Debug, Clone, Copy)]
pub struct LiteralExpression {
    pub data: NodeData,
    pub text: InternedString,
}

/// Template head, middle or tail.
#[derive(Debug, Clone, Copy)]
pub struct TemplateLiteralPart {
    pub data: NodeData,
    pub text: InternedString,
}

// ============================================================================
// Type Nodes
// ============================================================================

#[derive(Debug)]
pub enum TypeNode<'a> {
    KeywordType(KeywordTypeNode),
    TypeReference(TypeReferenceNode<'a>),
    FunctionType(FunctionOrConstructorTypeNode<'a>),
    ConstructorType(FunctionOrConstructorTypeNode<'a>),
    TypeQuery(TypeQueryNode<'a>),
    TypeLiteral(TypeLiteralNode<'a>),
    ArrayType(ArrayTypeNode<'a>),
    TupleType(TupleTypeNode<'a>),
    OptionalType(WrappedTypeNode<'a>),
    RestType(WrappedTypeNode<'a>),
    UnionType(UnionOrIntersectionTypeNode<'a>),
    IntersectionType(UnionOrIntersectionTypeNode<'a>),
    ConditionalType(ConditionalTypeNode<'a>),
    InferType(InferTypeNode<'a>),
    ParenthesizedType(WrappedTypeNode<'a>),
    ThisType(KeywordTypeNode),
    TypeOperator(TypeOperatorNode<'a>),
    IndexedAccessType(IndexedAccessTypeNode<'a>),
    MappedType(MappedTypeNode<'a>),
    LiteralType(LiteralTypeNode<'a>),
    NamedTupleMember(NamedTupleMemberNode<'a>),
    TemplateLiteralType(TemplateLiteralTypeNode<'a>),
    ImportType(ImportTypeNode<'a>),
    TypePredicate(TypePredicateNode<'a>),
    // Doc-comment types
    JsDocAllType(KeywordTypeNode),
    JsDocUnknownType(KeywordTypeNode),
    JsDocNullableType(JsDocWrappedType<'a>),
    JsDocNonNullableType(JsDocWrappedType<'a>),
    JsDocOptionalType(JsDocWrappedType<'a>),
    JsDocVariadicType(JsDocWrappedType<'a>),
}

/// Keyword types (`any`, `string`, ...), `this` and the doc-comment `*`/`?`.
#[derive(Debug)]
pub struct KeywordTypeNode {
    pub data: NodeData,
}

#[derive(Debug)]
pub struct TypeReferenceNode<'a> {
    pub data: NodeData,
    pub type_name: EntityName<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

#[derive(Debug)]
pub struct FunctionOrConstructorTypeNode<'a> {
    pub data: NodeData,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TypeQueryNode<'a> {
    pub data: NodeData,
    pub expr_name: EntityName<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

#[derive(Debug)]
pub struct TypeLiteralNode<'a> {
    pub data: NodeData,
    pub members: NodeList<'a, TypeElement<'a>>,
}

#[derive(Debug)]
pub struct ArrayTypeNode<'a> {
    pub data: NodeData,
    pub element_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TupleTypeNode<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, TypeNode<'a>>,
}

/// Optional, rest and parenthesized types.
#[derive(Debug)]
pub struct WrappedTypeNode<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct UnionOrIntersectionTypeNode<'a> {
    pub data: NodeData,
    pub types: NodeList<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct ConditionalTypeNode<'a> {
    pub data: NodeData,
    pub check_type: &'a TypeNode<'a>,
    pub extends_type: &'a TypeNode<'a>,
    pub true_type: &'a TypeNode<'a>,
    pub false_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct InferTypeNode<'a> {
    pub data: NodeData,
    pub type_parameter: &'a TypeParameterDeclaration<'a>,
}

#[derive(Debug)]
pub struct TypeOperatorNode<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind, // KeyOfKeyword, UniqueKeyword, ReadonlyKeyword
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct IndexedAccessTypeNode<'a> {
    pub data: NodeData,
    pub object_type: &'a TypeNode<'a>,
    pub index_type: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct MappedTypeNode<'a> {
    pub data: NodeData,
    pub readonly_token: Option<Token>,
    pub type_parameter: &'a TypeParameterDeclaration<'a>,
    pub name_type: OptionalNode<'a, TypeNode<'a>>,
    pub question_token: Option<Token>,
    pub type_node: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct LiteralTypeNode<'a> {
    pub data: NodeData,
    pub literal: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct NamedTupleMemberNode<'a> {
    pub data: NodeData,
    pub dot_dot_dot_token: Option<Token>,
    pub name: Identifier,
    pub question_token: Option<Token>,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct TemplateLiteralTypeNode<'a> {
    pub data: NodeData,
    pub head: TemplateLiteralPart,
    pub template_spans: NodeList<'a, TemplateLiteralTypeSpan<'a>>,
}

#[derive(Debug)]
pub struct TemplateLiteralTypeSpan<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub literal: TemplateLiteralPart,
}

#[derive(Debug)]
pub struct ImportTypeNode<'a> {
    pub data: NodeData,
    pub is_type_of: bool,
    pub argument: &'a TypeNode<'a>,
    pub attributes: Option<ImportAttributes<'a>>,
    pub qualifier: Option<EntityName<'a>>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

#[derive(Debug)]
pub struct TypePredicateNode<'a> {
    pub data: NodeData,
    pub asserts_modifier: Option<Token>,
    pub parameter_name: TypePredicateParameterName,
    pub type_node: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub enum TypePredicateParameterName {
    Identifier(Identifier),
    ThisType(Token),
}

/// `?T`, `T?`, `!T`, `T!`, `T=` and `...T` in doc-comment types.
#[derive(Debug)]
pub struct JsDocWrappedType<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub postfix: bool,
}

#[derive(Debug)]
pub struct ExpressionWithTypeArguments<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
}

// ============================================================================
// Signature pieces
// ============================================================================

#[derive(Debug)]
pub struct TypeParameterDeclaration<'a> {
    pub data: NodeData,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub name: Identifier,
    pub constraint: OptionalNode<'a, TypeNode<'a>>,
    pub default: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct ParameterDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub dot_dot_dot_token: Option<Token>,
    pub name: BindingName<'a>,
    pub question_token: Option<Token>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct Decorator<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

// ============================================================================
// Names
// ============================================================================

#[derive(Debug)]
pub enum EntityName<'a> {
    Identifier(Identifier),
    QualifiedName(&'a QualifiedName<'a>),
}

#[derive(Debug)]
pub struct QualifiedName<'a> {
    pub data: NodeData,
    pub left: EntityName<'a>,
    pub right: Identifier,
}

#[derive(Debug)]
pub enum BindingName<'a> {
    Identifier(Identifier),
    ObjectBindingPattern(&'a ObjectBindingPattern<'a>),
    ArrayBindingPattern(&'a ArrayBindingPattern<'a>),
}

#[derive(Debug)]
pub struct ComputedPropertyName<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub enum PropertyName<'a> {
    Identifier(Identifier),
    PrivateIdentifier(Identifier),
    StringLiteral(StringLiteral),
    NumericLiteral(NumericLiteral),
    ComputedPropertyName(&'a ComputedPropertyName<'a>),
}

// ============================================================================
// Binding Patterns
// ============================================================================

#[derive(Debug)]
pub struct ObjectBindingPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, BindingElement<'a>>,
}

#[derive(Debug)]
pub struct ArrayBindingPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, ArrayBindingElement<'a>>,
}

#[derive(Debug)]
pub enum ArrayBindingElement<'a> {
    BindingElement(BindingElement<'a>),
    OmittedExpression(NodeData),
}

#[derive(Debug)]
pub struct BindingElement<'a> {
    pub data: NodeData,
    pub dot_dot_dot_token: Option<Token>,
    pub property_name: Option<PropertyName<'a>>,
    pub name: BindingName<'a>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

// ============================================================================
// Type Elements (Interface/Object type members)
// ============================================================================

#[derive(Debug)]
pub enum TypeElement<'a> {
    PropertySignature(PropertySignature<'a>),
    MethodSignature(MethodSignature<'a>),
    CallSignature(SignatureDeclaration<'a>),
    ConstructSignature(SignatureDeclaration<'a>),
    IndexSignature(IndexSignatureDeclaration<'a>),
    GetAccessor(AccessorDeclaration<'a>),
    SetAccessor(AccessorDeclaration<'a>),
}

#[derive(Debug)]
pub struct PropertySignature<'a> {
    pub data: NodeData,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub name: PropertyName<'a>,
    pub question_token: Option<Token>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct MethodSignature<'a> {
    pub data: NodeData,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub name: PropertyName<'a>,
    pub question_token: Option<Token>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
}

/// Call and construct signatures.
#[derive(Debug)]
pub struct SignatureDeclaration<'a> {
    pub data: NodeData,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
}

#[derive(Debug)]
pub struct IndexSignatureDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug)]
pub enum Expression<'a> {
    Identifier(Identifier),
    PrivateIdentifier(Identifier),
    StringLiteral(StringLiteral),
    NumericLiteral(NumericLiteral),
    BigIntLiteral(LiteralExpression),
    RegularExpressionLiteral(LiteralExpression),
    NoSubstitutionTemplateLiteral(LiteralExpression),
    TemplateExpression(TemplateExpression<'a>),
    ArrayLiteral(ArrayLiteralExpression<'a>),
    ObjectLiteral(ObjectLiteralExpression<'a>),
    PropertyAccess(PropertyAccessExpression<'a>),
    ElementAccess(ElementAccessExpression<'a>),
    Call(CallExpression<'a>),
    New(NewExpression<'a>),
    TaggedTemplate(TaggedTemplateExpression<'a>),
    TypeAssertion(TypeAssertionExpression<'a>),
    Parenthesized(ParenthesizedExpression<'a>),
    FunctionExpression(FunctionExpression<'a>),
    ArrowFunction(ArrowFunction<'a>),
    Delete(UnaryKeywordExpression<'a>),
    TypeOf(UnaryKeywordExpression<'a>),
    Void(UnaryKeywordExpression<'a>),
    Await(UnaryKeywordExpression<'a>),
    PrefixUnary(PrefixUnaryExpression<'a>),
    PostfixUnary(PostfixUnaryExpression<'a>),
    Binary(BinaryExpression<'a>),
    Conditional(ConditionalExpression<'a>),
    Yield(YieldExpression<'a>),
    Spread(SpreadElement<'a>),
    ClassExpression(ClassLikeDeclaration<'a>),
    OmittedExpression(NodeData),
    As(TypeCastExpression<'a>),
    Satisfies(TypeCastExpression<'a>),
    NonNull(NonNullExpression<'a>),
    MetaProperty(MetaPropertyExpression),
    JsxElement(JsxElement<'a>),
    JsxSelfClosingElement(JsxSelfClosingElement<'a>),
    JsxFragment(JsxFragment<'a>),
    // Keyword expressions
    ThisKeyword(NodeData),
    SuperKeyword(NodeData),
    NullKeyword(NodeData),
    TrueKeyword(NodeData),
    FalseKeyword(NodeData),
    ImportKeyword(NodeData),
}

#[derive(Debug)]
pub struct TemplateExpression<'a> {
    pub data: NodeData,
    pub head: TemplateLiteralPart,
    pub template_spans: NodeList<'a, TemplateSpan<'a>>,
}

#[derive(Debug)]
pub struct TemplateSpan<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub literal: TemplateLiteralPart,
}

#[derive(Debug)]
pub struct ArrayLiteralExpression<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, Expression<'a>>,
    pub multi_line: bool,
}

#[derive(Debug)]
pub struct ObjectLiteralExpression<'a> {
    pub data: NodeData,
    pub properties: NodeList<'a, ObjectLiteralElement<'a>>,
    pub multi_line: bool,
}

#[derive(Debug)]
pub enum ObjectLiteralElement<'a> {
    PropertyAssignment(PropertyAssignment<'a>),
    ShorthandPropertyAssignment(ShorthandPropertyAssignment<'a>),
    SpreadAssignment(SpreadAssignment<'a>),
    MethodDeclaration(MethodDeclaration<'a>),
    GetAccessor(AccessorDeclaration<'a>),
    SetAccessor(AccessorDeclaration<'a>),
}

#[derive(Debug)]
pub struct PropertyAssignment<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub initializer: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ShorthandPropertyAssignment<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub object_assignment_initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct SpreadAssignment<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PropertyAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot_token: Option<Token>,
    pub name: MemberName,
}

#[derive(Debug)]
pub enum MemberName {
    Identifier(Identifier),
    PrivateIdentifier(Identifier),
}

impl MemberName {
    pub fn identifier(&self) -> &Identifier {
        match self {
            MemberName::Identifier(id) | MemberName::PrivateIdentifier(id) => id,
        }
    }
}

#[derive(Debug)]
pub struct ElementAccessExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot_token: Option<Token>,
    pub argument_expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct CallExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub question_dot_token: Option<Token>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub arguments: NodeList<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct NewExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub arguments: Option<NodeList<'a, Expression<'a>>>,
}

#[derive(Debug)]
pub struct TaggedTemplateExpression<'a> {
    pub data: NodeData,
    pub tag: &'a Expression<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub template: &'a Expression<'a>, // NoSubstitutionTemplateLiteral or TemplateExpression
}

#[derive(Debug)]
pub struct TypeAssertionExpression<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ParenthesizedExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct FunctionExpression<'a> {
    pub data: NodeData,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub asterisk_token: Option<Token>,
    pub name: Option<Identifier>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: Block<'a>,
}

#[derive(Debug)]
pub struct ArrowFunction<'a> {
    pub data: NodeData,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub equals_greater_than_token: Token,
    pub body: ArrowFunctionBody<'a>,
}

#[derive(Debug)]
pub enum ArrowFunctionBody<'a> {
    Block(&'a Block<'a>),
    Expression(&'a Expression<'a>),
}

/// `delete`, `typeof`, `void` and `await` expressions.
#[derive(Debug)]
pub struct UnaryKeywordExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PrefixUnaryExpression<'a> {
    pub data: NodeData,
    pub operator: SyntaxKind,
    pub operand: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct PostfixUnaryExpression<'a> {
    pub data: NodeData,
    pub operand: &'a Expression<'a>,
    pub operator: SyntaxKind,
}

#[derive(Debug)]
pub struct BinaryExpression<'a> {
    pub data: NodeData,
    pub left: &'a Expression<'a>,
    pub operator_token: Token,
    pub right: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ConditionalExpression<'a> {
    pub data: NodeData,
    pub condition: &'a Expression<'a>,
    pub question_token: Token,
    pub when_true: &'a Expression<'a>,
    pub colon_token: Token,
    pub when_false: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct YieldExpression<'a> {
    pub data: NodeData,
    pub asterisk_token: Option<Token>,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct SpreadElement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

/// `expr as T` and `expr satisfies T`.
#[derive(Debug)]
pub struct TypeCastExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct NonNullExpression<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct MetaPropertyExpression {
    pub data: NodeData,
    pub keyword_token: SyntaxKind, // NewKeyword or ImportKeyword
    pub name: Identifier,
}

// ============================================================================
// Tag markup
// ============================================================================

#[derive(Debug)]
pub struct JsxElement<'a> {
    pub data: NodeData,
    pub opening_element: &'a JsxOpeningElement<'a>,
    pub children: NodeList<'a, JsxChild<'a>>,
    pub closing_element: &'a JsxClosingElement<'a>,
}

#[derive(Debug)]
pub struct JsxOpeningElement<'a> {
    pub data: NodeData,
    pub tag_name: JsxTagName<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub attributes: JsxAttributes<'a>,
}

#[derive(Debug)]
pub struct JsxSelfClosingElement<'a> {
    pub data: NodeData,
    pub tag_name: JsxTagName<'a>,
    pub type_arguments: Option<NodeList<'a, TypeNode<'a>>>,
    pub attributes: JsxAttributes<'a>,
}

#[derive(Debug)]
pub struct JsxClosingElement<'a> {
    pub data: NodeData,
    pub tag_name: JsxTagName<'a>,
}

#[derive(Debug)]
pub struct JsxFragment<'a> {
    pub data: NodeData,
    pub opening_fragment: Token,
    pub children: NodeList<'a, JsxChild<'a>>,
    pub closing_fragment: Token,
}

#[derive(Debug)]
pub enum JsxTagName<'a> {
    Identifier(Identifier),
    This(Token),
    Namespaced(&'a JsxNamespacedName),
    /// `a.b.c`; the expression is a chain of property accesses.
    PropertyAccess(&'a Expression<'a>),
}

#[derive(Debug)]
pub struct JsxNamespacedName {
    pub data: NodeData,
    pub namespace: Identifier,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct JsxAttributes<'a> {
    pub data: NodeData,
    pub properties: NodeList<'a, JsxAttributeLike<'a>>,
}

#[derive(Debug)]
pub enum JsxAttributeLike<'a> {
    Attribute(JsxAttribute<'a>),
    SpreadAttribute(JsxSpreadAttribute<'a>),
}

#[derive(Debug)]
pub struct JsxAttribute<'a> {
    pub data: NodeData,
    pub name: JsxAttributeName<'a>,
    pub initializer: Option<JsxAttributeValue<'a>>,
}

#[derive(Debug)]
pub enum JsxAttributeName<'a> {
    Identifier(Identifier),
    Namespaced(&'a JsxNamespacedName),
}

#[derive(Debug)]
pub enum JsxAttributeValue<'a> {
    StringLiteral(StringLiteral),
    Expression(&'a JsxExpression<'a>),
    /// An element, self-closing element or fragment.
    Element(&'a Expression<'a>),
}

#[derive(Debug)]
pub struct JsxSpreadAttribute<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct JsxExpression<'a> {
    pub data: NodeData,
    pub dot_dot_dot_token: Option<Token>,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct JsxText {
    pub data: NodeData,
    pub text: InternedString,
    pub contains_only_trivia_white_spaces: bool,
}

#[derive(Debug)]
pub enum JsxChild<'a> {
    Text(JsxText),
    Expression(JsxExpression<'a>),
    Element(JsxElement<'a>),
    SelfClosingElement(JsxSelfClosingElement<'a>),
    Fragment(JsxFragment<'a>),
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    VariableStatement(VariableStatement<'a>),
    FunctionDeclaration(FunctionDeclaration<'a>),
    ClassDeclaration(ClassLikeDeclaration<'a>),
    InterfaceDeclaration(InterfaceDeclaration<'a>),
    TypeAliasDeclaration(TypeAliasDeclaration<'a>),
    EnumDeclaration(EnumDeclaration<'a>),
    ModuleDeclaration(ModuleDeclaration<'a>),
    ImportDeclaration(ImportDeclaration<'a>),
    ImportEqualsDeclaration(ImportEqualsDeclaration<'a>),
    ExportDeclaration(ExportDeclaration<'a>),
    ExportAssignment(ExportAssignment<'a>),
    NamespaceExportDeclaration(NamespaceExportDeclaration),
    Block(Block<'a>),
    EmptyStatement(NodeData),
    ExpressionStatement(ExpressionStatement<'a>),
    IfStatement(IfStatement<'a>),
    DoStatement(DoStatement<'a>),
    WhileStatement(WhileStatement<'a>),
    ForStatement(ForStatement<'a>),
    ForInStatement(ForInOrOfStatement<'a>),
    ForOfStatement(ForInOrOfStatement<'a>),
    ContinueStatement(JumpStatement),
    BreakStatement(JumpStatement),
    ReturnStatement(ReturnStatement<'a>),
    WithStatement(WithStatement<'a>),
    SwitchStatement(SwitchStatement<'a>),
    LabeledStatement(LabeledStatement<'a>),
    ThrowStatement(ThrowStatement<'a>),
    TryStatement(TryStatement<'a>),
    DebuggerStatement(NodeData),
}

#[derive(Debug)]
pub struct Block<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
    pub multi_line: bool,
}

#[derive(Debug)]
pub struct VariableStatement<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub declaration_list: VariableDeclarationList<'a>,
}

/// `flags` records `LET`, `CONST`, `USING` or `AWAIT_USING`.
#[derive(Debug)]
pub struct VariableDeclarationList<'a> {
    pub data: NodeData,
    pub declarations: NodeList<'a, VariableDeclaration<'a>>,
}

#[derive(Debug)]
pub struct VariableDeclaration<'a> {
    pub data: NodeData,
    pub name: BindingName<'a>,
    pub exclamation_token: Option<Token>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ExpressionStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct IfStatement<'a> {
    pub data: NodeData,
    pub open_paren_token: Token,
    pub expression: &'a Expression<'a>,
    pub close_paren_token: Token,
    pub then_statement: &'a Statement<'a>,
    pub else_statement: OptionalNode<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct DoStatement<'a> {
    pub data: NodeData,
    pub statement: &'a Statement<'a>,
    pub open_paren_token: Token,
    pub expression: &'a Expression<'a>,
    pub close_paren_token: Token,
}

#[derive(Debug)]
pub struct WhileStatement<'a> {
    pub data: NodeData,
    pub open_paren_token: Token,
    pub expression: &'a Expression<'a>,
    pub close_paren_token: Token,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ForStatement<'a> {
    pub data: NodeData,
    pub initializer: Option<ForInitializer<'a>>,
    pub condition: OptionalNode<'a, Expression<'a>>,
    pub incrementor: OptionalNode<'a, Expression<'a>>,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub enum ForInitializer<'a> {
    VariableDeclarationList(&'a VariableDeclarationList<'a>),
    Expression(&'a Expression<'a>),
}

#[derive(Debug)]
pub struct ForInOrOfStatement<'a> {
    pub data: NodeData,
    pub await_modifier: Option<Token>,
    pub initializer: ForInitializer<'a>,
    pub expression: &'a Expression<'a>,
    pub statement: &'a Statement<'a>,
}

/// `break` and `continue`.
#[derive(Debug)]
pub struct JumpStatement {
    pub data: NodeData,
    pub label: Option<Identifier>,
}

#[derive(Debug)]
pub struct ReturnStatement<'a> {
    pub data: NodeData,
    pub expression: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct WithStatement<'a> {
    pub data: NodeData,
    pub open_paren_token: Token,
    pub expression: &'a Expression<'a>,
    pub close_paren_token: Token,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct SwitchStatement<'a> {
    pub data: NodeData,
    pub open_paren_token: Token,
    pub expression: &'a Expression<'a>,
    pub close_paren_token: Token,
    pub case_block: CaseBlock<'a>,
}

#[derive(Debug)]
pub struct CaseBlock<'a> {
    pub data: NodeData,
    pub clauses: NodeList<'a, CaseOrDefaultClause<'a>>,
}

#[derive(Debug)]
pub enum CaseOrDefaultClause<'a> {
    CaseClause(CaseClause<'a>),
    DefaultClause(DefaultClause<'a>),
}

#[derive(Debug)]
pub struct CaseClause<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct DefaultClause<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

#[derive(Debug)]
pub struct LabeledStatement<'a> {
    pub data: NodeData,
    pub label: Identifier,
    pub statement: &'a Statement<'a>,
}

#[derive(Debug)]
pub struct ThrowStatement<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct TryStatement<'a> {
    pub data: NodeData,
    pub try_block: Block<'a>,
    pub catch_clause: Option<CatchClause<'a>>,
    pub finally_block: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct CatchClause<'a> {
    pub data: NodeData,
    pub variable_declaration: Option<VariableDeclaration<'a>>,
    pub block: Block<'a>,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug)]
pub struct FunctionDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub asterisk_token: Option<Token>,
    pub name: Option<Identifier>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: Option<Block<'a>>,
}

/// Class declarations and class expressions.
#[derive(Debug)]
pub struct ClassLikeDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub name: Option<Identifier>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub heritage_clauses: Option<NodeList<'a, HeritageClause<'a>>>,
    pub members: NodeList<'a, ClassElement<'a>>,
}

#[derive(Debug)]
pub struct HeritageClause<'a> {
    pub data: NodeData,
    pub token: SyntaxKind, // ExtendsKeyword or ImplementsKeyword
    pub types: NodeList<'a, ExpressionWithTypeArguments<'a>>,
}

#[derive(Debug)]
pub enum ClassElement<'a> {
    PropertyDeclaration(PropertyDeclaration<'a>),
    MethodDeclaration(MethodDeclaration<'a>),
    Constructor(ConstructorDeclaration<'a>),
    GetAccessor(AccessorDeclaration<'a>),
    SetAccessor(AccessorDeclaration<'a>),
    IndexSignature(IndexSignatureDeclaration<'a>),
    SemicolonClassElement(NodeData),
    ClassStaticBlockDeclaration(ClassStaticBlockDeclaration<'a>),
}

#[derive(Debug)]
pub struct PropertyDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub name: PropertyName<'a>,
    pub question_token: Option<Token>,
    pub exclamation_token: Option<Token>,
    pub type_annotation: OptionalNode<'a, TypeNode<'a>>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct MethodDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub asterisk_token: Option<Token>,
    pub name: PropertyName<'a>,
    pub question_token: Option<Token>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct ConstructorDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub body: Option<Block<'a>>,
}

/// `get` and `set` accessors in classes, object literals and type members.
#[derive(Debug)]
pub struct AccessorDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub name: PropertyName<'a>,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub parameters: NodeList<'a, ParameterDeclaration<'a>>,
    pub return_type: OptionalNode<'a, TypeNode<'a>>,
    pub body: Option<Block<'a>>,
}

#[derive(Debug)]
pub struct ClassStaticBlockDeclaration<'a> {
    pub data: NodeData,
    pub body: Block<'a>,
}

#[derive(Debug)]
pub struct InterfaceDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub name: Identifier,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub heritage_clauses: Option<NodeList<'a, HeritageClause<'a>>>,
    pub members: NodeList<'a, TypeElement<'a>>,
}

#[derive(Debug)]
pub struct TypeAliasDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub name: Identifier,
    pub type_parameters: Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct EnumDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub name: Identifier,
    pub members: NodeList<'a, EnumMember<'a>>,
}

#[derive(Debug)]
pub struct EnumMember<'a> {
    pub data: NodeData,
    pub name: PropertyName<'a>,
    pub initializer: OptionalNode<'a, Expression<'a>>,
}

#[derive(Debug)]
pub struct ModuleDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub name: ModuleName,
    pub body: Option<ModuleBody<'a>>,
}

#[derive(Debug)]
pub enum ModuleName {
    Identifier(Identifier),
    StringLiteral(StringLiteral),
}

#[derive(Debug)]
pub enum ModuleBody<'a> {
    ModuleBlock(ModuleBlock<'a>),
    /// The inner part of a dotted name such as `namespace a.b {}`.
    ModuleDeclaration(&'a ModuleDeclaration<'a>),
}

#[derive(Debug)]
pub struct ModuleBlock<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
}

// ============================================================================
// Import/Export
// ============================================================================

#[derive(Debug)]
pub struct ImportDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub import_clause: Option<ImportClause<'a>>,
    pub module_specifier: &'a Expression<'a>,
    pub attributes: Option<ImportAttributes<'a>>,
}

#[derive(Debug)]
pub struct ImportClause<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    pub name: Option<Identifier>,
    pub named_bindings: Option<NamedImportBindings<'a>>,
}

#[derive(Debug)]
pub enum NamedImportBindings<'a> {
    NamespaceImport(NamespaceImport),
    NamedImports(NamedImports<'a>),
}

#[derive(Debug)]
pub struct NamespaceImport {
    pub data: NodeData,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct NamedImports<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, ImportSpecifier>,
}

#[derive(Debug)]
pub struct ImportSpecifier {
    pub data: NodeData,
    pub is_type_only: bool,
    pub property_name: Option<Identifier>,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct ExportDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub is_type_only: bool,
    pub export_clause: Option<NamedExportBindings<'a>>,
    pub module_specifier: OptionalNode<'a, Expression<'a>>,
    pub attributes: Option<ImportAttributes<'a>>,
}

#[derive(Debug)]
pub enum NamedExportBindings<'a> {
    NamespaceExport(NamespaceExport),
    NamedExports(NamedExports<'a>),
}

#[derive(Debug)]
pub struct NamespaceExport {
    pub data: NodeData,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct NamedExports<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, ExportSpecifier>,
}

#[derive(Debug)]
pub struct ExportSpecifier {
    pub data: NodeData,
    pub is_type_only: bool,
    pub property_name: Option<Identifier>,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct ExportAssignment<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub is_export_equals: bool,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct ImportEqualsDeclaration<'a> {
    pub data: NodeData,
    pub decorators: Option<NodeList<'a, Decorator<'a>>>,
    pub modifiers: Option<NodeList<'a, Token>>,
    pub is_type_only: bool,
    pub name: Identifier,
    pub module_reference: ModuleReference<'a>,
}

#[derive(Debug)]
pub enum ModuleReference<'a> {
    ExternalModuleReference(ExternalModuleReference<'a>),
    EntityName(EntityName<'a>),
}

#[derive(Debug)]
pub struct ExternalModuleReference<'a> {
    pub data: NodeData,
    pub expression: &'a Expression<'a>,
}

#[derive(Debug)]
pub struct NamespaceExportDeclaration {
    pub data: NodeData,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct ImportAttributes<'a> {
    pub data: NodeData,
    pub token: SyntaxKind, // AssertKeyword or WithKeyword
    pub elements: NodeList<'a, ImportAttribute<'a>>,
    pub multi_line: bool,
}

#[derive(Debug)]
pub struct ImportAttribute<'a> {
    pub data: NodeData,
    pub name: ImportAttributeName,
    pub value: &'a Expression<'a>,
}

#[derive(Debug)]
pub enum ImportAttributeName {
    Identifier(Identifier),
    StringLiteral(StringLiteral),
}

// ============================================================================
// Doc comments
// ============================================================================

/// A parsed `/** ... */` comment.
#[derive(Debug)]
pub struct JsDoc<'a> {
    pub data: NodeData,
    /// Description text before the first tag, leading `*` stripped.
    pub comment: Option<&'a str>,
    pub tags: Option<NodeList<'a, JsDocTag<'a>>>,
}

#[derive(Debug)]
pub enum JsDocTag<'a> {
    Parameter(JsDocParameterTag<'a>),
    Return(JsDocTypedTag<'a>),
    Type(JsDocTypedTag<'a>),
    Template(JsDocTemplateTag<'a>),
    Unknown(JsDocUnknownTag<'a>),
}

/// `{type}` inside a doc comment.
#[derive(Debug)]
pub struct JsDocTypeExpression<'a> {
    pub data: NodeData,
    pub type_node: &'a TypeNode<'a>,
}

#[derive(Debug)]
pub struct JsDocParameterTag<'a> {
    pub data: NodeData,
    pub tag_name: Identifier,
    pub type_expression: OptionalNode<'a, JsDocTypeExpression<'a>>,
    pub name: EntityName<'a>,
    /// `[name]` or `[name=default]`.
    pub is_bracketed: bool,
    /// `@param name {T}` rather than `@param {T} name`.
    pub is_name_first: bool,
    pub comment: Option<&'a str>,
}

/// `@return`/`@returns` and `@type`.
#[derive(Debug)]
pub struct JsDocTypedTag<'a> {
    pub data: NodeData,
    pub tag_name: Identifier,
    pub type_expression: OptionalNode<'a, JsDocTypeExpression<'a>>,
    pub comment: Option<&'a str>,
}

#[derive(Debug)]
pub struct JsDocTemplateTag<'a> {
    pub data: NodeData,
    pub tag_name: Identifier,
    pub constraint: OptionalNode<'a, JsDocTypeExpression<'a>>,
    pub type_parameters: NodeList<'a, TypeParameterDeclaration<'a>>,
    pub comment: Option<&'a str>,
}

#[derive(Debug)]
pub struct JsDocUnknownTag<'a> {
    pub data: NodeData,
    pub tag_name: Identifier,
    pub comment: Option<&'a str>,
}
