//! Uniform access to the [`NodeData`] header of every node type.

use crate::node::*;
use crate::syntax_kind::SyntaxKind;
use crate::types::{ModifierFlags, NodeFlags, NodeId};
use ripple_core::text::{TextPos, TextRange};

/// Implemented by every node type.
pub trait HasNodeData {
    fn data(&self) -> &NodeData;

    #[inline]
    fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    #[inline]
    fn range(&self) -> TextRange {
        self.data().range
    }

    #[inline]
    fn pos(&self) -> TextPos {
        self.data().range.pos
    }

    #[inline]
    fn end(&self) -> TextPos {
        self.data().range.end
    }

    #[inline]
    fn flags(&self) -> NodeFlags {
        self.data().flags
    }

    #[inline]
    fn modifier_flags(&self) -> ModifierFlags {
        self.data().modifier_flags
    }

    #[inline]
    fn id(&self) -> NodeId {
        self.data().id
    }

    #[inline]
    fn is_missing(&self) -> bool {
        self.data().is_missing()
    }
}

impl HasNodeData for NodeData {
    #[inline]
    fn data(&self) -> &NodeData {
        self
    }
}

impl<T: HasNodeData + ?Sized> HasNodeData for &T {
    #[inline]
    fn data(&self) -> &NodeData {
        (**self).data()
    }
}

macro_rules! impl_struct_data {
    ($($ty:ident $(<$lt:lifetime>)?),* $(,)?) => {
        $(
            impl$(<$lt>)? HasNodeData for $ty$(<$lt>)? {
                #[inline]
                fn data(&self) -> &NodeData {
                    &self.data
                }
            }
        )*
    };
}

macro_rules! impl_enum_data {
    ($ty:ident { $($variant:ident),* $(,)? }) => {
        impl HasNodeData for $ty<'_> {
            fn data(&self) -> &NodeData {
                match self {
                    $($ty::$variant(n) => n.data(),)*
                }
            }
        }
    };
}

impl_struct_data!(
    SourceFile<'a>,
    Token,
    Identifier,
    StringLiteral,
    NumericLiteral,
    LiteralExpression,
    TemplateLiteralPart,
    KeywordTypeNode,
    TypeReferenceNode<'a>,
    FunctionOrConstructorTypeNode<'a>,
    TypeQueryNode<'a>,
    TypeLiteralNode<'a>,
    ArrayTypeNode<'a>,
    TupleTypeNode<'a>,
    WrappedTypeNode<'a>,
    UnionOrIntersectionTypeNode<'a>,
    ConditionalTypeNode<'a>,
    InferTypeNode<'a>,
    TypeOperatorNode<'a>,
    IndexedAccessTypeNode<'a>,
    MappedTypeNode<'a>,
    LiteralTypeNode<'a>,
    NamedTupleMemberNode<'a>,
    TemplateLiteralTypeNode<'a>,
    TemplateLiteralTypeSpan<'a>,
    ImportTypeNode<'a>,
    TypePredicateNode<'a>,
    JsDocWrappedType<'a>,
    ExpressionWithTypeArguments<'a>,
    TypeParameterDeclaration<'a>,
    ParameterDeclaration<'a>,
    Decorator<'a>,
    QualifiedName<'a>,
    ComputedPropertyName<'a>,
    ObjectBindingPattern<'a>,
    ArrayBindingPattern<'a>,
    BindingElement<'a>,
    PropertySignature<'a>,
    MethodSignature<'a>,
    SignatureDeclaration<'a>,
    IndexSignatureDeclaration<'a>,
    TemplateExpression<'a>,
    TemplateSpan<'a>,
    ArrayLiteralExpression<'a>,
    ObjectLiteralExpression<'a>,
    PropertyAssignment<'a>,
    ShorthandPropertyAssignment<'a>,
    SpreadAssignment<'a>,
    PropertyAccessExpression<'a>,
    ElementAccessExpression<'a>,
    CallExpression<'a>,
    NewExpression<'a>,
    TaggedTemplateExpression<'a>,
    TypeAssertionExpression<'a>,
    ParenthesizedExpression<'a>,
    FunctionExpression<'a>,
    ArrowFunction<'a>,
    UnaryKeywordExpression<'a>,
    PrefixUnaryExpression<'a>,
    PostfixUnaryExpression<'a>,
    BinaryExpression<'a>,
    ConditionalExpression<'a>,
    YieldExpression<'a>,
    SpreadElement<'a>,
    TypeCastExpression<'a>,
    NonNullExpression<'a>,
    MetaPropertyExpression,
    JsxElement<'a>,
    JsxOpeningElement<'a>,
    JsxSelfClosingElement<'a>,
    JsxClosingElement<'a>,
    JsxFragment<'a>,
    JsxNamespacedName,
    JsxAttributes<'a>,
    JsxAttribute<'a>,
    JsxSpreadAttribute<'a>,
    JsxExpression<'a>,
    JsxText,
    Block<'a>,
    VariableStatement<'a>,
    VariableDeclarationList<'a>,
    VariableDeclaration<'a>,
    ExpressionStatement<'a>,
    IfStatement<'a>,
    DoStatement<'a>,
    WhileStatement<'a>,
    ForStatement<'a>,
    ForInOrOfStatement<'a>,
    JumpStatement,
    ReturnStatement<'a>,
    WithStatement<'a>,
    SwitchStatement<'a>,
    CaseBlock<'a>,
    CaseClause<'a>,
    DefaultClause<'a>,
    LabeledStatement<'a>,
    ThrowStatement<'a>,
    TryStatement<'a>,
    CatchClause<'a>,
    FunctionDeclaration<'a>,
    ClassLikeDeclaration<'a>,
    HeritageClause<'a>,
    PropertyDeclaration<'a>,
    MethodDeclaration<'a>,
    ConstructorDeclaration<'a>,
    AccessorDeclaration<'a>,
    ClassStaticBlockDeclaration<'a>,
    InterfaceDeclaration<'a>,
    TypeAliasDeclaration<'a>,
    EnumDeclaration<'a>,
    EnumMember<'a>,
    ModuleDeclaration<'a>,
    ModuleBlock<'a>,
    ImportDeclaration<'a>,
    ImportClause<'a>,
    NamespaceImport,
    NamedImports<'a>,
    ImportSpecifier,
    ExportDeclaration<'a>,
    NamespaceExport,
    NamedExports<'a>,
    ExportSpecifier,
    ExportAssignment<'a>,
    ImportEqualsDeclaration<'a>,
    ExternalModuleReference<'a>,
    NamespaceExportDeclaration,
    ImportAttributes<'a>,
    ImportAttribute<'a>,
    JsDoc<'a>,
    JsDocTypeExpression<'a>,
    JsDocParameterTag<'a>,
    JsDocTypedTag<'a>,
    JsDocTemplateTag<'a>,
    JsDocUnknownTag<'a>,
);

impl_enum_data!(TypeNode {
    KeywordType,
    TypeReference,
    FunctionType,
    ConstructorType,
    TypeQuery,
    TypeLiteral,
    ArrayType,
    TupleType,
    OptionalType,
    RestType,
    UnionType,
    IntersectionType,
    ConditionalType,
    InferType,
    ParenthesizedType,
    ThisType,
    TypeOperator,
    IndexedAccessType,
    MappedType,
    LiteralType,
    NamedTupleMember,
    TemplateLiteralType,
    ImportType,
    TypePredicate,
    JsDocAllType,
    JsDocUnknownType,
    JsDocNullableType,
    JsDocNonNullableType,
    JsDocOptionalType,
    JsDocVariadicType,
});

impl_enum_data!(Expression {
    Identifier,
    PrivateIdentifier,
    StringLiteral,
    NumericLiteral,
    BigIntLiteral,
    RegularExpressionLiteral,
    NoSubstitutionTemplateLiteral,
    TemplateExpression,
    ArrayLiteral,
    ObjectLiteral,
    PropertyAccess,
    ElementAccess,
    Call,
    New,
    TaggedTemplate,
    TypeAssertion,
    Parenthesized,
    FunctionExpression,
    ArrowFunction,
    Delete,
    TypeOf,
    Void,
    Await,
    PrefixUnary,
    PostfixUnary,
    Binary,
    Conditional,
    Yield,
    Spread,
    ClassExpression,
    OmittedExpression,
    As,
    Satisfies,
    NonNull,
    MetaProperty,
    JsxElement,
    JsxSelfClosingElement,
    JsxFragment,
    ThisKeyword,
    SuperKeyword,
    NullKeyword,
    TrueKeyword,
    FalseKeyword,
    ImportKeyword,
});

impl_enum_data!(Statement {
    VariableStatement,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    ModuleDeclaration,
    ImportDeclaration,
    ImportEqualsDeclaration,
    ExportDeclaration,
    ExportAssignment,
    NamespaceExportDeclaration,
    Block,
    EmptyStatement,
    ExpressionStatement,
    IfStatement,
    DoStatement,
    WhileStatement,
    ForStatement,
    ForInStatement,
    ForOfStatement,
    ContinueStatement,
    BreakStatement,
    ReturnStatement,
    WithStatement,
    SwitchStatement,
    LabeledStatement,
    ThrowStatement,
    TryStatement,
    DebuggerStatement,
});

impl_enum_data!(TypeElement {
    PropertySignature,
    MethodSignature,
    CallSignature,
    ConstructSignature,
    IndexSignature,
    GetAccessor,
    SetAccessor,
});

impl_enum_data!(ClassElement {
    PropertyDeclaration,
    MethodDeclaration,
    Constructor,
    GetAccessor,
    SetAccessor,
    IndexSignature,
    SemicolonClassElement,
    ClassStaticBlockDeclaration,
});

impl_enum_data!(ObjectLiteralElement {
    PropertyAssignment,
    ShorthandPropertyAssignment,
    SpreadAssignment,
    MethodDeclaration,
    GetAccessor,
    SetAccessor,
});

impl_enum_data!(CaseOrDefaultClause {
    CaseClause,
    DefaultClause,
});

impl_enum_data!(ArrayBindingElement {
    BindingElement,
    OmittedExpression,
});

impl_enum_data!(EntityName {
    Identifier,
    QualifiedName,
});

impl_enum_data!(BindingName {
    Identifier,
    ObjectBindingPattern,
    ArrayBindingPattern,
});

impl_enum_data!(PropertyName {
    Identifier,
    PrivateIdentifier,
    StringLiteral,
    NumericLiteral,
    ComputedPropertyName,
});

impl_enum_data!(ArrowFunctionBody { Block, Expression });

impl_enum_data!(ForInitializer {
    VariableDeclarationList,
    Expression,
});

impl_enum_data!(ModuleBody {
    ModuleBlock,
    ModuleDeclaration,
});

impl_enum_data!(NamedImportBindings {
    NamespaceImport,
    NamedImports,
});

impl_enum_data!(NamedExportBindings {
    NamespaceExport,
    NamedExports,
});

impl_enum_data!(ModuleReference {
    ExternalModuleReference,
    EntityName,
});

impl_enum_data!(JsxTagName {
    Identifier,
    This,
    Namespaced,
    PropertyAccess,
});

impl_enum_data!(JsxAttributeLike {
    Attribute,
    SpreadAttribute,
});

impl_enum_data!(JsxAttributeName {
    Identifier,
    Namespaced,
});

impl_enum_data!(JsxAttributeValue {
    StringLiteral,
    Expression,
    Element,
});

impl_enum_data!(JsxChild {
    Text,
    Expression,
    Element,
    SelfClosingElement,
    Fragment,
});

impl_enum_data!(JsDocTag {
    Parameter,
    Return,
    Type,
    Template,
    Unknown,
});

impl HasNodeData for ModuleName {
    fn data(&self) -> &NodeData {
        match self {
            ModuleName::Identifier(n) => &n.data,
            ModuleName::StringLiteral(n) => &n.data,
        }
    }
}

impl HasNodeData for ImportAttributeName {
    fn data(&self) -> &NodeData {
        match self {
            ImportAttributeName::Identifier(n) => &n.data,
            ImportAttributeName::StringLiteral(n) => &n.data,
        }
    }
}

impl HasNodeData for MemberName {
    fn data(&self) -> &NodeData {
        &self.identifier().data
    }
}

impl HasNodeData for TypePredicateParameterName {
    fn data(&self) -> &NodeData {
        match self {
            TypePredicateParameterName::Identifier(n) => &n.data,
            TypePredicateParameterName::ThisType(n) => &n.data,
        }
    }
}

impl<'a> Statement<'a> {
    /// The declaration's modifier list, if this statement kind has one.
    pub fn modifiers(&self) -> Option<NodeList<'a, Token>> {
        match self {
            Statement::VariableStatement(n) => n.modifiers,
            Statement::FunctionDeclaration(n) => n.modifiers,
            Statement::ClassDeclaration(n) => n.modifiers,
            Statement::InterfaceDeclaration(n) => n.modifiers,
            Statement::TypeAliasDeclaration(n) => n.modifiers,
            Statement::EnumDeclaration(n) => n.modifiers,
            Statement::ModuleDeclaration(n) => n.modifiers,
            Statement::ImportDeclaration(n) => n.modifiers,
            Statement::ImportEqualsDeclaration(n) => n.modifiers,
            Statement::ExportDeclaration(n) => n.modifiers,
            Statement::ExportAssignment(n) => n.modifiers,
            _ => None,
        }
    }
}

impl JsxTagName<'_> {
    /// Structural equality of two tag names, ignoring positions.
    pub fn same_tag(&self, other: &JsxTagName<'_>) -> bool {
        match (self, other) {
            (JsxTagName::Identifier(a), JsxTagName::Identifier(b)) => {
                a.escaped_text == b.escaped_text
            }
            (JsxTagName::This(_), JsxTagName::This(_)) => true,
            (JsxTagName::Namespaced(a), JsxTagName::Namespaced(b)) => {
                a.namespace.escaped_text == b.namespace.escaped_text
                    && a.name.escaped_text == b.name.escaped_text
            }
            (JsxTagName::PropertyAccess(a), JsxTagName::PropertyAccess(b)) => {
                same_tag_expression(a, b)
            }
            _ => false,
        }
    }
}

fn same_tag_expression(a: &Expression<'_>, b: &Expression<'_>) -> bool {
    match (a, b) {
        (Expression::Identifier(a), Expression::Identifier(b)) => a.escaped_text == b.escaped_text,
        (Expression::ThisKeyword(_), Expression::ThisKeyword(_)) => true,
        (Expression::PropertyAccess(a), Expression::PropertyAccess(b)) => {
            a.name.identifier().escaped_text == b.name.identifier().escaped_text
                && same_tag_expression(a.expression, b.expression)
        }
        _ => false,
    }
}
