//! SyntaxKind: every token and node kind the scanner and parser produce.

/// The kind of a syntax token or node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u16)]
pub enum SyntaxKind {
    // ========================================================================
    // Tokens
    // ========================================================================
    Unknown = 0,
    EndOfFileToken = 1,

    // Trivia
    SingleLineCommentTrivia = 2,
    MultiLineCommentTrivia = 3,
    NewLineTrivia = 4,
    WhitespaceTrivia = 5,
    ShebangTrivia = 6,
    ConflictMarkerTrivia = 7,

    // Literals
    NumericLiteral = 8,
    BigIntLiteral = 9,
    StringLiteral = 10,
    JsxText = 11,
    JsxTextAllWhiteSpaces = 12,
    RegularExpressionLiteral = 13,
    NoSubstitutionTemplateLiteral = 14,

    // Pseudo-literals (template)
    TemplateHead = 15,
    TemplateMiddle = 16,
    TemplateTail = 17,

    // Punctuation
    OpenBraceToken = 18,
    CloseBraceToken = 19,
    OpenParenToken = 20,
    CloseParenToken = 21,
    OpenBracketToken = 22,
    CloseBracketToken = 23,
    DotToken = 24,
    DotDotDotToken = 25,
    SemicolonToken = 26,
    CommaToken = 27,
    QuestionDotToken = 28,
    LessThanToken = 29,
    LessThanSlashToken = 30,
    GreaterThanToken = 31,
    LessThanEqualsToken = 32,
    GreaterThanEqualsToken = 33,
    EqualsEqualsToken = 34,
    ExclamationEqualsToken = 35,
    EqualsEqualsEqualsToken = 36,
    ExclamationEqualsEqualsToken = 37,
    EqualsGreaterThanToken = 38,
    PlusToken = 39,
    MinusToken = 40,
    AsteriskToken = 41,
    AsteriskAsteriskToken = 42,
    SlashToken = 43,
    PercentToken = 44,
    PlusPlusToken = 45,
    MinusMinusToken = 46,
    LessThanLessThanToken = 47,
    GreaterThanGreaterThanToken = 48,
    GreaterThanGreaterThanGreaterThanToken = 49,
    AmpersandToken = 50,
    BarToken = 51,
    CaretToken = 52,
    ExclamationToken = 53,
    TildeToken = 54,
    AmpersandAmpersandToken = 55,
    BarBarToken = 56,
    QuestionToken = 57,
    ColonToken = 58,
    AtToken = 59,
    QuestionQuestionToken = 60,
    BacktickToken = 61,
    HashToken = 62,

    // Assignments
    EqualsToken = 63,
    PlusEqualsToken = 64,
    MinusEqualsToken = 65,
    AsteriskEqualsToken = 66,
    AsteriskAsteriskEqualsToken = 67,
    SlashEqualsToken = 68,
    PercentEqualsToken = 69,
    LessThanLessThanEqualsToken = 70,
    GreaterThanGreaterThanEqualsToken = 71,
    GreaterThanGreaterThanGreaterThanEqualsToken = 72,
    AmpersandEqualsToken = 73,
    BarEqualsToken = 74,
    CaretEqualsToken = 75,
    BarBarEqualsToken = 76,
    AmpersandAmpersandEqualsToken = 77,
    QuestionQuestionEqualsToken = 78,

    // Identifiers and keywords
    Identifier = 79,
    PrivateIdentifier = 80,

    // Reserved words
    BreakKeyword = 81,
    CaseKeyword = 82,
    CatchKeyword = 83,
    ClassKeyword = 84,
    ConstKeyword = 85,
    ContinueKeyword = 86,
    DebuggerKeyword = 87,
    DefaultKeyword = 88,
    DeleteKeyword = 89,
    DoKeyword = 90,
    ElseKeyword = 91,
    EnumKeyword = 92,
    ExportKeyword = 93,
    ExtendsKeyword = 94,
    FalseKeyword = 95,
    FinallyKeyword = 96,
    ForKeyword = 97,
    FunctionKeyword = 98,
    IfKeyword = 99,
    ImportKeyword = 100,
    InKeyword = 101,
    InstanceOfKeyword = 102,
    NewKeyword = 103,
    NullKeyword = 104,
    ReturnKeyword = 105,
    SuperKeyword = 106,
    SwitchKeyword = 107,
    ThisKeyword = 108,
    ThrowKeyword = 109,
    TrueKeyword = 110,
    TryKeyword = 111,
    TypeOfKeyword = 112,
    VarKeyword = 113,
    VoidKeyword = 114,
    WhileKeyword = 115,
    WithKeyword = 116,

    // Strict mode reserved words
    ImplementsKeyword = 117,
    InterfaceKeyword = 118,
    LetKeyword = 119,
    PackageKeyword = 120,
    PrivateKeyword = 121,
    ProtectedKeyword = 122,
    PublicKeyword = 123,
    StaticKeyword = 124,
    YieldKeyword = 125,

    // Contextual keywords
    AbstractKeyword = 126,
    AccessorKeyword = 127,
    AsKeyword = 128,
    AssertsKeyword = 129,
    AssertKeyword = 130,
    AnyKeyword = 131,
    AsyncKeyword = 132,
    AwaitKeyword = 133,
    BooleanKeyword = 134,
    ConstructorKeyword = 135,
    DeclareKeyword = 136,
    GetKeyword = 137,
    InferKeyword = 138,
    IntrinsicKeyword = 139,
    IsKeyword = 140,
    KeyOfKeyword = 141,
    ModuleKeyword = 142,
    NamespaceKeyword = 143,
    NeverKeyword = 144,
    OutKeyword = 145,
    ReadonlyKeyword = 146,
    RequireKeyword = 147,
    NumberKeyword = 148,
    ObjectKeyword = 149,
    SatisfiesKeyword = 150,
    SetKeyword = 151,
    StringKeyword = 152,
    SymbolKeyword = 153,
    TypeKeyword = 154,
    UndefinedKeyword = 155,
    UniqueKeyword = 156,
    UnknownKeyword = 157,
    UsingKeyword = 158,
    FromKeyword = 159,
    GlobalKeyword = 160,
    BigIntKeyword = 161,
    OverrideKeyword = 162,
    OfKeyword = 163,

    // ========================================================================
    // Nodes (Parsed)
    // ========================================================================

    // Names
    QualifiedName = 164,
    ComputedPropertyName = 165,

    // Signature elements
    TypeParameter = 166,
    Parameter = 167,
    Decorator = 168,

    // Type members
    PropertySignature = 169,
    PropertyDeclaration = 170,
    MethodSignature = 171,
    MethodDeclaration = 172,
    ClassStaticBlockDeclaration = 173,
    Constructor = 174,
    GetAccessor = 175,
    SetAccessor = 176,
    CallSignature = 177,
    ConstructSignature = 178,
    IndexSignature = 179,

    // Types
    TypePredicate = 180,
    TypeReference = 181,
    FunctionType = 182,
    ConstructorType = 183,
    TypeQuery = 184,
    TypeLiteral = 185,
    ArrayType = 186,
    TupleType = 187,
    OptionalType = 188,
    RestType = 189,
    UnionType = 190,
    IntersectionType = 191,
    ConditionalType = 192,
    InferType = 193,
    ParenthesizedType = 194,
    ThisType = 195,
    TypeOperator = 196,
    IndexedAccessType = 197,
    MappedType = 198,
    LiteralType = 199,
    NamedTupleMember = 200,
    TemplateLiteralType = 201,
    TemplateLiteralTypeSpan = 202,
    ImportType = 203,

    // Binding patterns
    ObjectBindingPattern = 204,
    ArrayBindingPattern = 205,
    BindingElement = 206,

    // Expressions
    ArrayLiteralExpression = 207,
    ObjectLiteralExpression = 208,
    PropertyAccessExpression = 209,
    ElementAccessExpression = 210,
    CallExpression = 211,
    NewExpression = 212,
    TaggedTemplateExpression = 213,
    TypeAssertionExpression = 214,
    ParenthesizedExpression = 215,
    FunctionExpression = 216,
    ArrowFunction = 217,
    DeleteExpression = 218,
    TypeOfExpression = 219,
    VoidExpression = 220,
    AwaitExpression = 221,
    PrefixUnaryExpression = 222,
    PostfixUnaryExpression = 223,
    BinaryExpression = 224,
    ConditionalExpression = 225,
    TemplateExpression = 226,
    YieldExpression = 227,
    SpreadElement = 228,
    ClassExpression = 229,
    OmittedExpression = 230,
    ExpressionWithTypeArguments = 231,
    AsExpression = 232,
    NonNullExpression = 233,
    MetaProperty = 234,
    SatisfiesExpression = 235,

    // Element
    TemplateSpan = 236,
    SemicolonClassElement = 237,

    // Statements
    Block = 238,
    EmptyStatement = 239,
    VariableStatement = 240,
    ExpressionStatement = 241,
    IfStatement = 242,
    DoStatement = 243,
    WhileStatement = 244,
    ForStatement = 245,
    ForInStatement = 246,
    ForOfStatement = 247,
    ContinueStatement = 248,
    BreakStatement = 249,
    ReturnStatement = 250,
    WithStatement = 251,
    SwitchStatement = 252,
    LabeledStatement = 253,
    ThrowStatement = 254,
    TryStatement = 255,
    DebuggerStatement = 256,
    VariableDeclaration = 257,
    VariableDeclarationList = 258,
    FunctionDeclaration = 259,
    ClassDeclaration = 260,
    InterfaceDeclaration = 261,
    TypeAliasDeclaration = 262,
    EnumDeclaration = 263,
    ModuleDeclaration = 264,
    ModuleBlock = 265,
    CaseBlock = 266,
    NamespaceExportDeclaration = 267,
    ImportEqualsDeclaration = 268,
    ImportDeclaration = 269,
    ImportClause = 270,
    NamespaceImport = 271,
    NamedImports = 272,
    ImportSpecifier = 273,
    ExportAssignment = 274,
    ExportDeclaration = 275,
    NamedExports = 276,
    NamespaceExport = 277,
    ExportSpecifier = 278,

    // Module references
    ExternalModuleReference = 279,

    // JSX
    JsxElement = 280,
    JsxSelfClosingElement = 281,
    JsxOpeningElement = 282,
    JsxClosingElement = 283,
    JsxFragment = 284,
    JsxOpeningFragment = 285,
    JsxClosingFragment = 286,
    JsxAttribute = 287,
    JsxAttributes = 288,
    JsxSpreadAttribute = 289,
    JsxExpression = 290,
    JsxNamespacedName = 291,

    // Clauses
    CaseClause = 292,
    DefaultClause = 293,
    HeritageClause = 294,
    CatchClause = 295,

    // Import attributes
    ImportAttributes = 296,
    ImportAttribute = 297,

    // Property assignments
    PropertyAssignment = 298,
    ShorthandPropertyAssignment = 299,
    SpreadAssignment = 300,

    // Enum member
    EnumMember = 301,

    // Top-level
    SourceFile = 302,

    // JSDoc
    JSDocTypeExpression = 303,
    JSDocAllType = 304,
    JSDocUnknownType = 305,
    JSDocNullableType = 306,
    JSDocNonNullableType = 307,
    JSDocOptionalType = 308,
    JSDocFunctionType = 309,
    JSDocVariadicType = 310,
    JSDocComment = 311,
    JSDocTag = 312,
    JSDocParameterTag = 313,
    JSDocReturnTag = 314,
    JSDocTypeTag = 315,
    JSDocTemplateTag = 316,
}

// Range markers. Rust enums cannot carry duplicate discriminants.
impl SyntaxKind {
    pub const FIRST_ASSIGNMENT: SyntaxKind = SyntaxKind::EqualsToken;
    pub const LAST_ASSIGNMENT: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::PlusEqualsToken;
    pub const LAST_COMPOUND_ASSIGNMENT: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_RESERVED_WORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_RESERVED_WORD: SyntaxKind = SyntaxKind::WithKeyword;
    pub const FIRST_KEYWORD: SyntaxKind = SyntaxKind::BreakKeyword;
    pub const LAST_KEYWORD: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_FUTURE_RESERVED_WORD: SyntaxKind = SyntaxKind::ImplementsKeyword;
    pub const LAST_FUTURE_RESERVED_WORD: SyntaxKind = SyntaxKind::YieldKeyword;
    pub const FIRST_TYPE_NODE: SyntaxKind = SyntaxKind::TypePredicate;
    pub const LAST_TYPE_NODE: SyntaxKind = SyntaxKind::ImportType;
    pub const FIRST_PUNCTUATION: SyntaxKind = SyntaxKind::OpenBraceToken;
    pub const LAST_PUNCTUATION: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_TOKEN: SyntaxKind = SyntaxKind::Unknown;
    pub const LAST_TOKEN: SyntaxKind = SyntaxKind::OfKeyword;
    pub const FIRST_TRIVIA_TOKEN: SyntaxKind = SyntaxKind::SingleLineCommentTrivia;
    pub const LAST_TRIVIA_TOKEN: SyntaxKind = SyntaxKind::ConflictMarkerTrivia;
    pub const FIRST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NumericLiteral;
    pub const LAST_LITERAL_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const FIRST_TEMPLATE_TOKEN: SyntaxKind = SyntaxKind::NoSubstitutionTemplateLiteral;
    pub const LAST_TEMPLATE_TOKEN: SyntaxKind = SyntaxKind::TemplateTail;
    pub const FIRST_BINARY_OPERATOR: SyntaxKind = SyntaxKind::LessThanToken;
    pub const LAST_BINARY_OPERATOR: SyntaxKind = SyntaxKind::QuestionQuestionEqualsToken;
    pub const FIRST_STATEMENT: SyntaxKind = SyntaxKind::VariableStatement;
    pub const LAST_STATEMENT: SyntaxKind = SyntaxKind::VariableDeclarationList;
    pub const FIRST_NODE: SyntaxKind = SyntaxKind::QualifiedName;
    pub const FIRST_JSDOC_NODE: SyntaxKind = SyntaxKind::JSDocTypeExpression;
    pub const LAST_JSDOC_NODE: SyntaxKind = SyntaxKind::JSDocTemplateTag;
    pub const FIRST_JSDOC_TAG_NODE: SyntaxKind = SyntaxKind::JSDocTag;
    pub const LAST_JSDOC_TAG_NODE: SyntaxKind = SyntaxKind::JSDocTemplateTag;
}

impl SyntaxKind {
    /// Whether this kind represents a keyword.
    #[inline]
    pub fn is_keyword(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::BreakKeyword as u16 && v <= SyntaxKind::OfKeyword as u16
    }

    /// Whether this kind represents a punctuation token.
    #[inline]
    pub fn is_punctuation(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::OpenBraceToken as u16 && v <= SyntaxKind::QuestionQuestionEqualsToken as u16
    }

    /// Whether this kind represents trivia.
    #[inline]
    pub fn is_trivia(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::SingleLineCommentTrivia as u16
            && v <= SyntaxKind::ConflictMarkerTrivia as u16
    }

    /// Whether this kind represents an assignment operator.
    #[inline]
    pub fn is_assignment_operator(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::EqualsToken as u16
            && v <= SyntaxKind::QuestionQuestionEqualsToken as u16
    }

    /// Whether this kind represents a modifier keyword.
    #[inline]
    pub fn is_modifier_kind(self) -> bool {
        matches!(
            self,
            SyntaxKind::AbstractKeyword
                | SyntaxKind::AccessorKeyword
                | SyntaxKind::AsyncKeyword
                | SyntaxKind::ConstKeyword
                | SyntaxKind::DeclareKeyword
                | SyntaxKind::DefaultKeyword
                | SyntaxKind::ExportKeyword
                | SyntaxKind::InKeyword
                | SyntaxKind::OutKeyword
                | SyntaxKind::OverrideKeyword
                | SyntaxKind::PrivateKeyword
                | SyntaxKind::ProtectedKeyword
                | SyntaxKind::PublicKeyword
                | SyntaxKind::ReadonlyKeyword
                | SyntaxKind::StaticKeyword
        )
    }

    /// Whether this kind represents a type node.
    #[inline]
    pub fn is_type_node(self) -> bool {
        let v = self as u16;
        v >= SyntaxKind::TypePredicate as u16 && v <= SyntaxKind::ImportType as u16
    }

    /// Whether this kind represents a statement.
    #[inline]
    pub fn is_statement(self) -> bool {
        matches!(
            self,
            SyntaxKind::VariableStatement
                | SyntaxKind::EmptyStatement
                | SyntaxKind::ExpressionStatement
                | SyntaxKind::IfStatement
                | SyntaxKind::DoStatement
                | SyntaxKind::WhileStatement
                | SyntaxKind::ForStatement
                | SyntaxKind::ForInStatement
                | SyntaxKind::ForOfStatement
                | SyntaxKind::ContinueStatement
                | SyntaxKind::BreakStatement
                | SyntaxKind::ReturnStatement
                | SyntaxKind::WithStatement
                | SyntaxKind::SwitchStatement
                | SyntaxKind::LabeledStatement
                | SyntaxKind::ThrowStatement
                | SyntaxKind::TryStatement
                | SyntaxKind::DebuggerStatement
                | SyntaxKind::Block
                | SyntaxKind::FunctionDeclaration
                | SyntaxKind::ClassDeclaration
                | SyntaxKind::InterfaceDeclaration
                | SyntaxKind::TypeAliasDeclaration
                | SyntaxKind::EnumDeclaration
                | SyntaxKind::ModuleDeclaration
                | SyntaxKind::ImportDeclaration
                | SyntaxKind::ImportEqualsDeclaration
                | SyntaxKind::ExportDeclaration
                | SyntaxKind::ExportAssignment
                | SyntaxKind::NamespaceExportDeclaration
        )
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::BreakKeyword => Some("break"),
            SyntaxKind::CaseKeyword => Some("case"),
            SyntaxKind::CatchKeyword => Some("catch"),
            SyntaxKind::ClassKeyword => Some("class"),
            SyntaxKind::ConstKeyword => Some("const"),
            SyntaxKind::ContinueKeyword => Some("continue"),
            SyntaxKind::DebuggerKeyword => Some("debugger"),
            SyntaxKind::DefaultKeyword => Some("default"),
            SyntaxKind::DeleteKeyword => Some("delete"),
            SyntaxKind::DoKeyword => Some("do"),
            SyntaxKind::ElseKeyword => Some("else"),
            SyntaxKind::EnumKeyword => Some("enum"),
            SyntaxKind::ExportKeyword => Some("export"),
            SyntaxKind::ExtendsKeyword => Some("extends"),
            SyntaxKind::FalseKeyword => Some("false"),
            SyntaxKind::FinallyKeyword => Some("finally"),
            SyntaxKind::ForKeyword => Some("for"),
            SyntaxKind::FunctionKeyword => Some("function"),
            SyntaxKind::IfKeyword => Some("if"),
            SyntaxKind::ImportKeyword => Some("import"),
            SyntaxKind::InKeyword => Some("in"),
            SyntaxKind::InstanceOfKeyword => Some("instanceof"),
            SyntaxKind::NewKeyword => Some("new"),
            SyntaxKind::NullKeyword => Some("null"),
            SyntaxKind::ReturnKeyword => Some("return"),
            SyntaxKind::SuperKeyword => Some("super"),
            SyntaxKind::SwitchKeyword => Some("switch"),
            SyntaxKind::ThisKeyword => Some("this"),
            SyntaxKind::ThrowKeyword => Some("throw"),
            SyntaxKind::TrueKeyword => Some("true"),
            SyntaxKind::TryKeyword => Some("try"),
            SyntaxKind::TypeOfKeyword => Some("typeof"),
            SyntaxKind::VarKeyword => Some("var"),
            SyntaxKind::VoidKeyword => Some("void"),
            SyntaxKind::WhileKeyword => Some("while"),
            SyntaxKind::WithKeyword => Some("with"),
            SyntaxKind::ImplementsKeyword => Some("implements"),
            SyntaxKind::InterfaceKeyword => Some("interface"),
            SyntaxKind::LetKeyword => Some("let"),
            SyntaxKind::PackageKeyword => Some("package"),
            SyntaxKind::PrivateKeyword => Some("private"),
            SyntaxKind::ProtectedKeyword => Some("protected"),
            SyntaxKind::PublicKeyword => Some("public"),
            SyntaxKind::StaticKeyword => Some("static"),
            SyntaxKind::YieldKeyword => Some("yield"),
            SyntaxKind::AbstractKeyword => Some("abstract"),
            SyntaxKind::AccessorKeyword => Some("accessor"),
            SyntaxKind::AsKeyword => Some("as"),
            SyntaxKind::AssertsKeyword => Some("asserts"),
            SyntaxKind::AssertKeyword => Some("assert"),
            SyntaxKind::AnyKeyword => Some("any"),
            SyntaxKind::AsyncKeyword => Some("async"),
            SyntaxKind::AwaitKeyword => Some("await"),
            SyntaxKind::BooleanKeyword => Some("boolean"),
            SyntaxKind::ConstructorKeyword => Some("constructor"),
            SyntaxKind::DeclareKeyword => Some("declare"),
            SyntaxKind::GetKeyword => Some("get"),
            SyntaxKind::InferKeyword => Some("infer"),
            SyntaxKind::IntrinsicKeyword => Some("intrinsic"),
            SyntaxKind::IsKeyword => Some("is"),
            SyntaxKind::KeyOfKeyword => Some("keyof"),
            SyntaxKind::ModuleKeyword => Some("module"),
            SyntaxKind::NamespaceKeyword => Some("namespace"),
            SyntaxKind::NeverKeyword => Some("never"),
            SyntaxKind::OutKeyword => Some("out"),
            SyntaxKind::ReadonlyKeyword => Some("readonly"),
            SyntaxKind::RequireKeyword => Some("require"),
            SyntaxKind::NumberKeyword => Some("number"),
            SyntaxKind::ObjectKeyword => Some("object"),
            SyntaxKind::SatisfiesKeyword => Some("satisfies"),
            SyntaxKind::SetKeyword => Some("set"),
            SyntaxKind::StringKeyword => Some("string"),
            SyntaxKind::SymbolKeyword => Some("symbol"),
            SyntaxKind::TypeKeyword => Some("type"),
            SyntaxKind::UndefinedKeyword => Some("undefined"),
            SyntaxKind::UniqueKeyword => Some("unique"),
            SyntaxKind::UnknownKeyword => Some("unknown"),
            SyntaxKind::UsingKeyword => Some("using"),
            SyntaxKind::FromKeyword => Some("from"),
            SyntaxKind::GlobalKeyword => Some("global"),
            SyntaxKind::BigIntKeyword => Some("bigint"),
            SyntaxKind::OverrideKeyword => Some("override"),
            SyntaxKind::OfKeyword => Some("of"),
            _ => None,
        }
    }

    /// Look up a keyword SyntaxKind from text.
    pub fn from_keyword(text: &str) -> Option<SyntaxKind> {
        match text {
            "break" => Some(SyntaxKind::BreakKeyword),
            "case" => Some(SyntaxKind::CaseKeyword),
            "catch" => Some(SyntaxKind::CatchKeyword),
            "class" => Some(SyntaxKind::ClassKeyword),
            "const" => Some(SyntaxKind::ConstKeyword),
            "continue" => Some(SyntaxKind::ContinueKeyword),
            "debugger" => Some(SyntaxKind::DebuggerKeyword),
            "default" => Some(SyntaxKind::DefaultKeyword),
            "delete" => Some(SyntaxKind::DeleteKeyword),
            "do" => Some(SyntaxKind::DoKeyword),
            "else" => Some(SyntaxKind::ElseKeyword),
            "enum" => Some(SyntaxKind::EnumKeyword),
            "export" => Some(SyntaxKind::ExportKeyword),
            "extends" => Some(SyntaxKind::ExtendsKeyword),
            "false" => Some(SyntaxKind::FalseKeyword),
            "finally" => Some(SyntaxKind::FinallyKeyword),
            "for" => Some(SyntaxKind::ForKeyword),
            "function" => Some(SyntaxKind::FunctionKeyword),
            "if" => Some(SyntaxKind::IfKeyword),
            "import" => Some(SyntaxKind::ImportKeyword),
            "in" => Some(SyntaxKind::InKeyword),
            "instanceof" => Some(SyntaxKind::InstanceOfKeyword),
            "new" => Some(SyntaxKind::NewKeyword),
            "null" => Some(SyntaxKind::NullKeyword),
            "return" => Some(SyntaxKind::ReturnKeyword),
            "super" => Some(SyntaxKind::SuperKeyword),
            "switch" => Some(SyntaxKind::SwitchKeyword),
            "this" => Some(SyntaxKind::ThisKeyword),
            "throw" => Some(SyntaxKind::ThrowKeyword),
            "true" => Some(SyntaxKind::TrueKeyword),
            "try" => Some(SyntaxKind::TryKeyword),
            "typeof" => Some(SyntaxKind::TypeOfKeyword),
            "var" => Some(SyntaxKind::VarKeyword),
            "void" => Some(SyntaxKind::VoidKeyword),
            "while" => Some(SyntaxKind::WhileKeyword),
            "with" => Some(SyntaxKind::WithKeyword),
            "implements" => Some(SyntaxKind::ImplementsKeyword),
            "interface" => Some(SyntaxKind::InterfaceKeyword),
            "let" => Some(SyntaxKind::LetKeyword),
            "package" => Some(SyntaxKind::PackageKeyword),
            "private" => Some(SyntaxKind::PrivateKeyword),
            "protected" => Some(SyntaxKind::ProtectedKeyword),
            "public" => Some(SyntaxKind::PublicKeyword),
            "static" => Some(SyntaxKind::StaticKeyword),
            "yield" => Some(SyntaxKind::YieldKeyword),
            "abstract" => Some(SyntaxKind::AbstractKeyword),
            "accessor" => Some(SyntaxKind::AccessorKeyword),
            "as" => Some(SyntaxKind::AsKeyword),
            "asserts" => Some(SyntaxKind::AssertsKeyword),
            "assert" => Some(SyntaxKind::AssertKeyword),
            "any" => Some(SyntaxKind::AnyKeyword),
            "async" => Some(SyntaxKind::AsyncKeyword),
            "await" => Some(SyntaxKind::AwaitKeyword),
            "boolean" => Some(SyntaxKind::BooleanKeyword),
            "constructor" => Some(SyntaxKind::ConstructorKeyword),
            "declare" => Some(SyntaxKind::DeclareKeyword),
            "get" => Some(SyntaxKind::GetKeyword),
            "infer" => Some(SyntaxKind::InferKeyword),
            "intrinsic" => Some(SyntaxKind::IntrinsicKeyword),
            "is" => Some(SyntaxKind::IsKeyword),
            "keyof" => Some(SyntaxKind::KeyOfKeyword),
            "module" => Some(SyntaxKind::ModuleKeyword),
            "namespace" => Some(SyntaxKind::NamespaceKeyword),
            "never" => Some(SyntaxKind::NeverKeyword),
            "out" => Some(SyntaxKind::OutKeyword),
            "readonly" => Some(SyntaxKind::ReadonlyKeyword),
            "require" => Some(SyntaxKind::RequireKeyword),
            "number" => Some(SyntaxKind::NumberKeyword),
            "object" => Some(SyntaxKind::ObjectKeyword),
            "satisfies" => Some(SyntaxKind::SatisfiesKeyword),
            "set" => Some(SyntaxKind::SetKeyword),
            "string" => Some(SyntaxKind::StringKeyword),
            "symbol" => Some(SyntaxKind::SymbolKeyword),
            "type" => Some(SyntaxKind::TypeKeyword),
            "undefined" => Some(SyntaxKind::UndefinedKeyword),
            "unique" => Some(SyntaxKind::UniqueKeyword),
            "unknown" => Some(SyntaxKind::UnknownKeyword),
            "using" => Some(SyntaxKind::UsingKeyword),
            "from" => Some(SyntaxKind::FromKeyword),
            "global" => Some(SyntaxKind::GlobalKeyword),
            "bigint" => Some(SyntaxKind::BigIntKeyword),
            "override" => Some(SyntaxKind::OverrideKeyword),
            "of" => Some(SyntaxKind::OfKeyword),
            _ => None,
        }
    }

    /// Get the punctuation text for a punctuation kind, or None.
    pub fn punctuation_text(self) -> Option<&'static str> {
        match self {
            SyntaxKind::OpenBraceToken => Some("{"),
            SyntaxKind::CloseBraceToken => Some("}"),
            SyntaxKind::OpenParenToken => Some("("),
            SyntaxKind::CloseParenToken => Some(")"),
            SyntaxKind::OpenBracketToken => Some("["),
            SyntaxKind::CloseBracketToken => Some("]"),
            SyntaxKind::DotToken => Some("."),
            SyntaxKind::DotDotDotToken => Some("..."),
            SyntaxKind::SemicolonToken => Some(";"),
            SyntaxKind::CommaToken => Some(","),
            SyntaxKind::QuestionDotToken => Some("?."),
            SyntaxKind::LessThanToken => Some("<"),
            SyntaxKind::LessThanSlashToken => Some("</"),
            SyntaxKind::GreaterThanToken => Some(">"),
            SyntaxKind::LessThanEqualsToken => Some("<="),
            SyntaxKind::GreaterThanEqualsToken => Some(">="),
            SyntaxKind::EqualsEqualsToken => Some("=="),
            SyntaxKind::ExclamationEqualsToken => Some("!="),
            SyntaxKind::EqualsEqualsEqualsToken => Some("==="),
            SyntaxKind::ExclamationEqualsEqualsToken => Some("!=="),
            SyntaxKind::EqualsGreaterThanToken => Some("=>"),
            SyntaxKind::PlusToken => Some("+"),
            SyntaxKind::MinusToken => Some("-"),
            SyntaxKind::AsteriskToken => Some("*"),
            SyntaxKind::AsteriskAsteriskToken => Some("**"),
            SyntaxKind::SlashToken => Some("/"),
            SyntaxKind::PercentToken => Some("%"),
            SyntaxKind::PlusPlusToken => Some("++"),
            SyntaxKind::MinusMinusToken => Some("--"),
            SyntaxKind::LessThanLessThanToken => Some("<<"),
            SyntaxKind::GreaterThanGreaterThanToken => Some(">>"),
            SyntaxKind::GreaterThanGreaterThanGreaterThanToken => Some(">>>"),
            SyntaxKind::AmpersandToken => Some("&"),
            SyntaxKind::BarToken => Some("|"),
            SyntaxKind::CaretToken => Some("^"),
            SyntaxKind::ExclamationToken => Some("!"),
            SyntaxKind::TildeToken => Some("~"),
            SyntaxKind::AmpersandAmpersandToken => Some("&&"),
            SyntaxKind::BarBarToken => Some("||"),
            SyntaxKind::QuestionToken => Some("?"),
            SyntaxKind::ColonToken => Some(":"),
            SyntaxKind::AtToken => Some("@"),
            SyntaxKind::QuestionQuestionToken => Some("??"),
            SyntaxKind::BacktickToken => Some("`"),
            SyntaxKind::HashToken => Some("#"),
            SyntaxKind::EqualsToken => Some("="),
            SyntaxKind::PlusEqualsToken => Some("+="),
            SyntaxKind::MinusEqualsToken => Some("-="),
            SyntaxKind::AsteriskEqualsToken => Some("*="),
            SyntaxKind::AsteriskAsteriskEqualsToken => Some("**="),
            SyntaxKind::SlashEqualsToken => Some("/="),
            SyntaxKind::PercentEqualsToken => Some("%="),
            SyntaxKind::LessThanLessThanEqualsToken => Some("<<="),
            SyntaxKind::GreaterThanGreaterThanEqualsToken => Some(">>="),
            SyntaxKind::GreaterThanGreaterThanGreaterThanEqualsToken => Some(">>>="),
            SyntaxKind::AmpersandEqualsToken => Some("&="),
            SyntaxKind::BarEqualsToken => Some("|="),
            SyntaxKind::CaretEqualsToken => Some("^="),
            SyntaxKind::BarBarEqualsToken => Some("||="),
            SyntaxKind::AmpersandAmpersandEqualsToken => Some("&&="),
            SyntaxKind::QuestionQuestionEqualsToken => Some("??="),
            _ => None,
        }
    }
}

impl std::fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification_ranges() {
        assert!(SyntaxKind::SingleLineCommentTrivia.is_trivia());
        assert!(!SyntaxKind::Identifier.is_trivia());
        assert!(SyntaxKind::OpenBraceToken.is_punctuation());
        assert!(!SyntaxKind::BreakKeyword.is_punctuation());
        assert!(SyntaxKind::TypeReference.is_type_node());
        assert!(!SyntaxKind::CallExpression.is_type_node());
        assert!(SyntaxKind::ReturnStatement.is_statement());
        assert!(!SyntaxKind::ReturnKeyword.is_statement());
    }
}
