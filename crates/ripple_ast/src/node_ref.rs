//! `NodeRef`: a borrowed, kind-erased view of any node, and child
//! enumeration over it.

use crate::accessors::HasNodeData;
use crate::node::*;

/// A reference to any node in the tree.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Token(&'a Token),
    Identifier(&'a Identifier),
    StringLiteral(&'a StringLiteral),
    NumericLiteral(&'a NumericLiteral),
    TemplateLiteralPart(&'a TemplateLiteralPart),
    Statement(&'a Statement<'a>),
    Expression(&'a Expression<'a>),
    TypeNode(&'a TypeNode<'a>),
    ClassElement(&'a ClassElement<'a>),
    TypeElement(&'a TypeElement<'a>),
    ObjectLiteralElement(&'a ObjectLiteralElement<'a>),
    CaseOrDefaultClause(&'a CaseOrDefaultClause<'a>),
    JsxChild(&'a JsxChild<'a>),
    JsxAttributeLike(&'a JsxAttributeLike<'a>),
    JsDocTag(&'a JsDocTag<'a>),
    Block(&'a Block<'a>),
    VariableDeclarationList(&'a VariableDeclarationList<'a>),
    VariableDeclaration(&'a VariableDeclaration<'a>),
    Parameter(&'a ParameterDeclaration<'a>),
    TypeParameter(&'a TypeParameterDeclaration<'a>),
    Decorator(&'a Decorator<'a>),
    QualifiedName(&'a QualifiedName<'a>),
    ComputedPropertyName(&'a ComputedPropertyName<'a>),
    ObjectBindingPattern(&'a ObjectBindingPattern<'a>),
    ArrayBindingPattern(&'a ArrayBindingPattern<'a>),
    BindingElement(&'a BindingElement<'a>),
    ArrayBindingElement(&'a ArrayBindingElement<'a>),
    HeritageClause(&'a HeritageClause<'a>),
    ExpressionWithTypeArguments(&'a ExpressionWithTypeArguments<'a>),
    TemplateSpan(&'a TemplateSpan<'a>),
    TemplateLiteralTypeSpan(&'a TemplateLiteralTypeSpan<'a>),
    CaseBlock(&'a CaseBlock<'a>),
    CatchClause(&'a CatchClause<'a>),
    EnumMember(&'a EnumMember<'a>),
    ModuleBlock(&'a ModuleBlock<'a>),
    ModuleDeclaration(&'a ModuleDeclaration<'a>),
    ImportClause(&'a ImportClause<'a>),
    NamespaceImport(&'a NamespaceImport),
    NamedImports(&'a NamedImports<'a>),
    ImportSpecifier(&'a ImportSpecifier),
    NamespaceExport(&'a NamespaceExport),
    NamedExports(&'a NamedExports<'a>),
    ExportSpecifier(&'a ExportSpecifier),
    ExternalModuleReference(&'a ExternalModuleReference<'a>),
    ImportAttributes(&'a ImportAttributes<'a>),
    ImportAttribute(&'a ImportAttribute<'a>),
    JsxOpeningElement(&'a JsxOpeningElement<'a>),
    JsxClosingElement(&'a JsxClosingElement<'a>),
    JsxAttributes(&'a JsxAttributes<'a>),
    JsxExpression(&'a JsxExpression<'a>),
    JsxNamespacedName(&'a JsxNamespacedName),
    JsDoc(&'a JsDoc<'a>),
    JsDocTypeExpression(&'a JsDocTypeExpression<'a>),
}

impl<'a> NodeRef<'a> {
    pub fn data(self) -> &'a NodeData {
        match self {
            NodeRef::Token(n) => &n.data,
            NodeRef::Identifier(n) => &n.data,
            NodeRef::StringLiteral(n) => &n.data,
            NodeRef::NumericLiteral(n) => &n.data,
            NodeRef::TemplateLiteralPart(n) => &n.data,
            NodeRef::Statement(n) => n.data(),
            NodeRef::Expression(n) => n.data(),
            NodeRef::TypeNode(n) => n.data(),
            NodeRef::ClassElement(n) => n.data(),
            NodeRef::TypeElement(n) => n.data(),
            NodeRef::ObjectLiteralElement(n) => n.data(),
            NodeRef::CaseOrDefaultClause(n) => n.data(),
            NodeRef::JsxChild(n) => n.data(),
            NodeRef::JsxAttributeLike(n) => n.data(),
            NodeRef::JsDocTag(n) => n.data(),
            NodeRef::Block(n) => &n.data,
            NodeRef::VariableDeclarationList(n) => &n.data,
            NodeRef::VariableDeclaration(n) => &n.data,
            NodeRef::Parameter(n) => &n.data,
            NodeRef::TypeParameter(n) => &n.data,
            NodeRef::Decorator(n) => &n.data,
            NodeRef::QualifiedName(n) => &n.data,
            NodeRef::ComputedPropertyName(n) => &n.data,
            NodeRef::ObjectBindingPattern(n) => &n.data,
            NodeRef::ArrayBindingPattern(n) => &n.data,
            NodeRef::BindingElement(n) => &n.data,
            NodeRef::ArrayBindingElement(n) => n.data(),
            NodeRef::HeritageClause(n) => &n.data,
            NodeRef::ExpressionWithTypeArguments(n) => &n.data,
            NodeRef::TemplateSpan(n) => &n.data,
            NodeRef::TemplateLiteralTypeSpan(n) => &n.data,
            NodeRef::CaseBlock(n) => &n.data,
            NodeRef::CatchClause(n) => &n.data,
            NodeRef::EnumMember(n) => &n.data,
            NodeRef::ModuleBlock(n) => &n.data,
            NodeRef::ModuleDeclaration(n) => &n.data,
            NodeRef::ImportClause(n) => &n.data,
            NodeRef::NamespaceImport(n) => &n.data,
            NodeRef::NamedImports(n) => &n.data,
            NodeRef::ImportSpecifier(n) => &n.data,
            NodeRef::NamespaceExport(n) => &n.data,
            NodeRef::NamedExports(n) => &n.data,
            NodeRef::ExportSpecifier(n) => &n.data,
            NodeRef::ExternalModuleReference(n) => &n.data,
            NodeRef::ImportAttributes(n) => &n.data,
            NodeRef::ImportAttribute(n) => &n.data,
            NodeRef::JsxOpeningElement(n) => &n.data,
            NodeRef::JsxClosingElement(n) => &n.data,
            NodeRef::JsxAttributes(n) => &n.data,
            NodeRef::JsxExpression(n) => &n.data,
            NodeRef::JsxNamespacedName(n) => &n.data,
            NodeRef::JsDoc(n) => &n.data,
            NodeRef::JsDocTypeExpression(n) => &n.data,
        }
    }

    /// Address of the referenced node, for identity comparisons.
    pub fn as_ptr(self) -> *const () {
        match self {
            NodeRef::Statement(n) => n as *const Statement<'_> as *const (),
            NodeRef::Expression(n) => n as *const Expression<'_> as *const (),
            NodeRef::TypeNode(n) => n as *const TypeNode<'_> as *const (),
            _ => self.data() as *const NodeData as *const (),
        }
    }

    /// Whether `self` and `other` are the same node object.
    pub fn ptr_eq(self, other: NodeRef<'_>) -> bool {
        std::ptr::eq(self.as_ptr(), other.as_ptr())
    }
}

impl HasNodeData for NodeRef<'_> {
    fn data(&self) -> &NodeData {
        NodeRef::data(*self)
    }
}

/// A node type that can appear as a [`NodeList`] element.
pub trait ListElement<'a>: HasNodeData + 'a {
    fn as_node_ref(&'a self) -> NodeRef<'a>;

    /// Recover a typed reference from a `NodeRef`; only implemented for the
    /// element types the incremental parser can reuse.
    fn from_node_ref(_node: NodeRef<'a>) -> Option<&'a Self> {
        None
    }
}

macro_rules! list_element {
    ($ty:ty => $variant:ident) => {
        impl<'a> ListElement<'a> for $ty {
            fn as_node_ref(&'a self) -> NodeRef<'a> {
                NodeRef::$variant(self)
            }
        }
    };
    ($ty:ty => $variant:ident, reusable) => {
        impl<'a> ListElement<'a> for $ty {
            fn as_node_ref(&'a self) -> NodeRef<'a> {
                NodeRef::$variant(self)
            }

            fn from_node_ref(node: NodeRef<'a>) -> Option<&'a Self> {
                match node {
                    NodeRef::$variant(n) => Some(n),
                    _ => None,
                }
            }
        }
    };
}

list_element!(Statement<'a> => Statement, reusable);
list_element!(CaseOrDefaultClause<'a> => CaseOrDefaultClause, reusable);
list_element!(ClassElement<'a> => ClassElement, reusable);
list_element!(TypeElement<'a> => TypeElement, reusable);
list_element!(EnumMember<'a> => EnumMember, reusable);
list_element!(VariableDeclaration<'a> => VariableDeclaration, reusable);
list_element!(ParameterDeclaration<'a> => Parameter, reusable);
list_element!(Expression<'a> => Expression);
list_element!(TypeNode<'a> => TypeNode);
list_element!(ObjectLiteralElement<'a> => ObjectLiteralElement);
list_element!(JsxChild<'a> => JsxChild);
list_element!(JsxAttributeLike<'a> => JsxAttributeLike);
list_element!(JsDocTag<'a> => JsDocTag);
list_element!(Token => Token);
list_element!(TypeParameterDeclaration<'a> => TypeParameter);
list_element!(Decorator<'a> => Decorator);
list_element!(BindingElement<'a> => BindingElement);
list_element!(ArrayBindingElement<'a> => ArrayBindingElement);
list_element!(HeritageClause<'a> => HeritageClause);
list_element!(ExpressionWithTypeArguments<'a> => ExpressionWithTypeArguments);
list_element!(TemplateSpan<'a> => TemplateSpan);
list_element!(TemplateLiteralTypeSpan<'a> => TemplateLiteralTypeSpan);
list_element!(ImportSpecifier => ImportSpecifier);
list_element!(ExportSpecifier => ExportSpecifier);
list_element!(ImportAttribute<'a> => ImportAttribute);

/// How a child hangs off its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// A plain field; positions are in the parent's coordinates.
    Field,
    /// A list element; `shift` moves it into the parent's coordinates.
    Element { shift: i32 },
}

impl Slot {
    #[inline]
    pub fn shift(self) -> i32 {
        match self {
            Slot::Field => 0,
            Slot::Element { shift } => shift,
        }
    }
}

/// Call `f` for every direct child of `node`, in source order.
pub fn for_each_child<'a, F>(node: NodeRef<'a>, f: &mut F)
where
    F: FnMut(NodeRef<'a>, Slot),
{
    let mut c = Children { f };
    c.node(node);
}

struct Children<'f, F> {
    f: &'f mut F,
}

impl<'a, F> Children<'_, F>
where
    F: FnMut(NodeRef<'a>, Slot),
{
    fn emit(&mut self, node: NodeRef<'a>) {
        (self.f)(node, Slot::Field);
    }

    fn list<T: ListElement<'a>>(&mut self, list: &NodeList<'a, T>) {
        for child in list.children() {
            (self.f)(child.node.as_node_ref(), Slot::Element { shift: child.shift });
        }
    }

    fn opt_list<T: ListElement<'a>>(&mut self, list: &Option<NodeList<'a, T>>) {
        if let Some(list) = list {
            self.list(list);
        }
    }

    fn token(&mut self, token: &'a Token) {
        self.emit(NodeRef::Token(token));
    }

    fn opt_token(&mut self, token: &'a Option<Token>) {
        if let Some(t) = token {
            self.token(t);
        }
    }

    fn ident(&mut self, id: &'a Identifier) {
        self.emit(NodeRef::Identifier(id));
    }

    fn opt_ident(&mut self, id: &'a Option<Identifier>) {
        if let Some(id) = id {
            self.ident(id);
        }
    }

    fn expr(&mut self, e: &'a Expression<'a>) {
        self.emit(NodeRef::Expression(e));
    }

    fn opt_expr(&mut self, e: Option<&'a Expression<'a>>) {
        if let Some(e) = e {
            self.expr(e);
        }
    }

    fn ty(&mut self, t: &'a TypeNode<'a>) {
        self.emit(NodeRef::TypeNode(t));
    }

    fn opt_ty(&mut self, t: Option<&'a TypeNode<'a>>) {
        if let Some(t) = t {
            self.ty(t);
        }
    }

    fn stmt(&mut self, s: &'a Statement<'a>) {
        self.emit(NodeRef::Statement(s));
    }

    fn block(&mut self, b: &'a Block<'a>) {
        self.emit(NodeRef::Block(b));
    }

    fn opt_block(&mut self, b: &'a Option<Block<'a>>) {
        if let Some(b) = b {
            self.block(b);
        }
    }

    fn string(&mut self, s: &'a StringLiteral) {
        self.emit(NodeRef::StringLiteral(s));
    }

    fn entity_name(&mut self, name: &'a EntityName<'a>) {
        match name {
            EntityName::Identifier(id) => self.ident(id),
            EntityName::QualifiedName(q) => self.emit(NodeRef::QualifiedName(q)),
        }
    }

    fn binding_name(&mut self, name: &'a BindingName<'a>) {
        match name {
            BindingName::Identifier(id) => self.ident(id),
            BindingName::ObjectBindingPattern(p) => self.emit(NodeRef::ObjectBindingPattern(p)),
            BindingName::ArrayBindingPattern(p) => self.emit(NodeRef::ArrayBindingPattern(p)),
        }
    }

    fn property_name(&mut self, name: &'a PropertyName<'a>) {
        match name {
            PropertyName::Identifier(id) | PropertyName::PrivateIdentifier(id) => self.ident(id),
            PropertyName::StringLiteral(s) => self.string(s),
            PropertyName::NumericLiteral(n) => self.emit(NodeRef::NumericLiteral(n)),
            PropertyName::ComputedPropertyName(c) => self.emit(NodeRef::ComputedPropertyName(c)),
        }
    }

    fn attributes(&mut self, attrs: &'a Option<ImportAttributes<'a>>) {
        if let Some(a) = attrs {
            self.emit(NodeRef::ImportAttributes(a));
        }
    }

    fn decorated(
        &mut self,
        decorators: &Option<NodeList<'a, Decorator<'a>>>,
        modifiers: &Option<NodeList<'a, Token>>,
    ) {
        self.opt_list(decorators);
        self.opt_list(modifiers);
    }

    fn signature(
        &mut self,
        type_parameters: &Option<NodeList<'a, TypeParameterDeclaration<'a>>>,
        parameters: &NodeList<'a, ParameterDeclaration<'a>>,
        return_type: Option<&'a TypeNode<'a>>,
    ) {
        self.opt_list(type_parameters);
        self.list(parameters);
        self.opt_ty(return_type);
    }

    fn tag_name(&mut self, name: &'a JsxTagName<'a>) {
        match name {
            JsxTagName::Identifier(id) => self.ident(id),
            JsxTagName::This(t) => self.token(t),
            JsxTagName::Namespaced(n) => self.emit(NodeRef::JsxNamespacedName(n)),
            JsxTagName::PropertyAccess(e) => self.expr(e),
        }
    }

    fn jsx_element(&mut self, n: &'a JsxElement<'a>) {
        self.emit(NodeRef::JsxOpeningElement(n.opening_element));
        self.list(&n.children);
        self.emit(NodeRef::JsxClosingElement(n.closing_element));
    }

    fn jsx_self_closing(&mut self, n: &'a JsxSelfClosingElement<'a>) {
        self.tag_name(&n.tag_name);
        self.opt_list(&n.type_arguments);
        self.emit(NodeRef::JsxAttributes(&n.attributes));
    }

    fn jsx_fragment(&mut self, n: &'a JsxFragment<'a>) {
        self.token(&n.opening_fragment);
        self.list(&n.children);
        self.token(&n.closing_fragment);
    }

    fn accessor(&mut self, n: &'a AccessorDeclaration<'a>) {
        self.decorated(&n.decorators, &n.modifiers);
        self.property_name(&n.name);
        self.signature(&n.type_parameters, &n.parameters, n.return_type);
        self.opt_block(&n.body);
    }

    fn method(&mut self, n: &'a MethodDeclaration<'a>) {
        self.decorated(&n.decorators, &n.modifiers);
        self.opt_token(&n.asterisk_token);
        self.property_name(&n.name);
        self.opt_token(&n.question_token);
        self.signature(&n.type_parameters, &n.parameters, n.return_type);
        self.opt_block(&n.body);
    }

    fn class_like(&mut self, n: &'a ClassLikeDeclaration<'a>) {
        self.decorated(&n.decorators, &n.modifiers);
        self.opt_ident(&n.name);
        self.opt_list(&n.type_parameters);
        self.opt_list(&n.heritage_clauses);
        self.list(&n.members);
    }

    fn index_signature(&mut self, n: &'a IndexSignatureDeclaration<'a>) {
        self.decorated(&n.decorators, &n.modifiers);
        self.list(&n.parameters);
        self.opt_ty(n.type_annotation);
    }

    fn for_initializer(&mut self, init: &'a ForInitializer<'a>) {
        match init {
            ForInitializer::VariableDeclarationList(l) => {
                self.emit(NodeRef::VariableDeclarationList(l))
            }
            ForInitializer::Expression(e) => self.expr(e),
        }
    }

    fn jsdoc_type(&mut self, t: Option<&'a JsDocTypeExpression<'a>>) {
        if let Some(t) = t {
            self.emit(NodeRef::JsDocTypeExpression(t));
        }
    }

    fn node(&mut self, node: NodeRef<'a>) {
        match node {
            NodeRef::Token(_)
            | NodeRef::Identifier(_)
            | NodeRef::StringLiteral(_)
            | NodeRef::NumericLiteral(_)
            | NodeRef::TemplateLiteralPart(_) => {}
            NodeRef::Statement(s) => self.statement(s),
            NodeRef::Expression(e) => self.expression(e),
            NodeRef::TypeNode(t) => self.type_node(t),
            NodeRef::ClassElement(m) => match m {
                ClassElement::PropertyDeclaration(n) => {
                    self.decorated(&n.decorators, &n.modifiers);
                    self.property_name(&n.name);
                    self.opt_token(&n.question_token);
                    self.opt_token(&n.exclamation_token);
                    self.opt_ty(n.type_annotation);
                    self.opt_expr(n.initializer);
                }
                ClassElement::MethodDeclaration(n) => self.method(n),
                ClassElement::Constructor(n) => {
                    self.decorated(&n.decorators, &n.modifiers);
                    self.list(&n.parameters);
                    self.opt_block(&n.body);
                }
                ClassElement::GetAccessor(n) | ClassElement::SetAccessor(n) => self.accessor(n),
                ClassElement::IndexSignature(n) => self.index_signature(n),
                ClassElement::SemicolonClassElement(_) => {}
                ClassElement::ClassStaticBlockDeclaration(n) => self.block(&n.body),
            },
            NodeRef::TypeElement(m) => match m {
                TypeElement::PropertySignature(n) => {
                    self.opt_list(&n.modifiers);
                    self.property_name(&n.name);
                    self.opt_token(&n.question_token);
                    self.opt_ty(n.type_annotation);
                }
                TypeElement::MethodSignature(n) => {
                    self.opt_list(&n.modifiers);
                    self.property_name(&n.name);
                    self.opt_token(&n.question_token);
                    self.signature(&n.type_parameters, &n.parameters, n.return_type);
                }
                TypeElement::CallSignature(n) | TypeElement::ConstructSignature(n) => {
                    self.signature(&n.type_parameters, &n.parameters, n.return_type);
                }
                TypeElement::IndexSignature(n) => self.index_signature(n),
                TypeElement::GetAccessor(n) | TypeElement::SetAccessor(n) => self.accessor(n),
            },
            NodeRef::ObjectLiteralElement(p) => match p {
                ObjectLiteralElement::PropertyAssignment(n) => {
                    self.property_name(&n.name);
                    self.expr(n.initializer);
                }
                ObjectLiteralElement::ShorthandPropertyAssignment(n) => {
                    self.ident(&n.name);
                    self.opt_expr(n.object_assignment_initializer);
                }
                ObjectLiteralElement::SpreadAssignment(n) => self.expr(n.expression),
                ObjectLiteralElement::MethodDeclaration(n) => self.method(n),
                ObjectLiteralElement::GetAccessor(n) | ObjectLiteralElement::SetAccessor(n) => {
                    self.accessor(n)
                }
            },
            NodeRef::CaseOrDefaultClause(c) => match c {
                CaseOrDefaultClause::CaseClause(n) => {
                    self.expr(n.expression);
                    self.list(&n.statements);
                }
                CaseOrDefaultClause::DefaultClause(n) => self.list(&n.statements),
            },
            NodeRef::JsxChild(c) => match c {
                JsxChild::Text(_) => {}
                JsxChild::Expression(n) => self.emit(NodeRef::JsxExpression(n)),
                JsxChild::Element(n) => self.jsx_element(n),
                JsxChild::SelfClosingElement(n) => self.jsx_self_closing(n),
                JsxChild::Fragment(n) => self.jsx_fragment(n),
            },
            NodeRef::JsxAttributeLike(a) => match a {
                JsxAttributeLike::Attribute(n) => {
                    match &n.name {
                        JsxAttributeName::Identifier(id) => self.ident(id),
                        JsxAttributeName::Namespaced(ns) => {
                            self.emit(NodeRef::JsxNamespacedName(ns))
                        }
                    }
                    match &n.initializer {
                        Some(JsxAttributeValue::StringLiteral(s)) => self.string(s),
                        Some(JsxAttributeValue::Expression(e)) => {
                            self.emit(NodeRef::JsxExpression(e))
                        }
                        Some(JsxAttributeValue::Element(e)) => self.expr(e),
                        None => {}
                    }
                }
                JsxAttributeLike::SpreadAttribute(n) => self.expr(n.expression),
            },
            NodeRef::JsDocTag(t) => match t {
                JsDocTag::Parameter(n) => {
                    self.ident(&n.tag_name);
                    if n.is_name_first {
                        self.entity_name(&n.name);
                        self.jsdoc_type(n.type_expression);
                    } else {
                        self.jsdoc_type(n.type_expression);
                        self.entity_name(&n.name);
                    }
                }
                JsDocTag::Return(n) | JsDocTag::Type(n) => {
                    self.ident(&n.tag_name);
                    self.jsdoc_type(n.type_expression);
                }
                JsDocTag::Template(n) => {
                    self.ident(&n.tag_name);
                    self.jsdoc_type(n.constraint);
                    self.list(&n.type_parameters);
                }
                JsDocTag::Unknown(n) => self.ident(&n.tag_name),
            },
            NodeRef::Block(b) => self.list(&b.statements),
            NodeRef::VariableDeclarationList(l) => self.list(&l.declarations),
            NodeRef::VariableDeclaration(d) => {
                self.binding_name(&d.name);
                self.opt_token(&d.exclamation_token);
                self.opt_ty(d.type_annotation);
                self.opt_expr(d.initializer);
            }
            NodeRef::Parameter(p) => {
                self.decorated(&p.decorators, &p.modifiers);
                self.opt_token(&p.dot_dot_dot_token);
                self.binding_name(&p.name);
                self.opt_token(&p.question_token);
                self.opt_ty(p.type_annotation);
                self.opt_expr(p.initializer);
            }
            NodeRef::TypeParameter(p) => {
                self.opt_list(&p.modifiers);
                self.ident(&p.name);
                self.opt_ty(p.constraint);
                self.opt_ty(p.default);
            }
            NodeRef::Decorator(d) => self.expr(d.expression),
            NodeRef::QualifiedName(q) => {
                self.entity_name(&q.left);
                self.ident(&q.right);
            }
            NodeRef::ComputedPropertyName(c) => self.expr(c.expression),
            NodeRef::ObjectBindingPattern(p) => self.list(&p.elements),
            NodeRef::ArrayBindingPattern(p) => self.list(&p.elements),
            NodeRef::BindingElement(b) => self.binding_element(b),
            NodeRef::ArrayBindingElement(b) => match b {
                ArrayBindingElement::BindingElement(b) => self.binding_element(b),
                ArrayBindingElement::OmittedExpression(_) => {}
            },
            NodeRef::HeritageClause(h) => self.list(&h.types),
            NodeRef::ExpressionWithTypeArguments(e) => {
                self.expr(e.expression);
                self.opt_list(&e.type_arguments);
            }
            NodeRef::TemplateSpan(s) => {
                self.expr(s.expression);
                self.emit(NodeRef::TemplateLiteralPart(&s.literal));
            }
            NodeRef::TemplateLiteralTypeSpan(s) => {
                self.ty(s.type_node);
                self.emit(NodeRef::TemplateLiteralPart(&s.literal));
            }
            NodeRef::CaseBlock(b) => self.list(&b.clauses),
            NodeRef::CatchClause(c) => {
                if let Some(d) = &c.variable_declaration {
                    self.emit(NodeRef::VariableDeclaration(d));
                }
                self.block(&c.block);
            }
            NodeRef::EnumMember(m) => {
                self.property_name(&m.name);
                self.opt_expr(m.initializer);
            }
            NodeRef::ModuleBlock(b) => self.list(&b.statements),
            NodeRef::ModuleDeclaration(m) => self.module_declaration(m),
            NodeRef::ImportClause(c) => {
                self.opt_ident(&c.name);
                match &c.named_bindings {
                    Some(NamedImportBindings::NamespaceImport(n)) => {
                        self.emit(NodeRef::NamespaceImport(n))
                    }
                    Some(NamedImportBindings::NamedImports(n)) => {
                        self.emit(NodeRef::NamedImports(n))
                    }
                    None => {}
                }
            }
            NodeRef::NamespaceImport(n) => self.ident(&n.name),
            NodeRef::NamedImports(n) => self.list(&n.elements),
            NodeRef::ImportSpecifier(s) => {
                self.opt_ident(&s.property_name);
                self.ident(&s.name);
            }
            NodeRef::NamespaceExport(n) => self.ident(&n.name),
            NodeRef::NamedExports(n) => self.list(&n.elements),
            NodeRef::ExportSpecifier(s) => {
                self.opt_ident(&s.property_name);
                self.ident(&s.name);
            }
            NodeRef::ExternalModuleReference(r) => self.expr(r.expression),
            NodeRef::ImportAttributes(a) => self.list(&a.elements),
            NodeRef::ImportAttribute(a) => {
                match &a.name {
                    ImportAttributeName::Identifier(id) => self.ident(id),
                    ImportAttributeName::StringLiteral(s) => self.string(s),
                }
                self.expr(a.value);
            }
            NodeRef::JsxOpeningElement(o) => {
                self.tag_name(&o.tag_name);
                self.opt_list(&o.type_arguments);
                self.emit(NodeRef::JsxAttributes(&o.attributes));
            }
            NodeRef::JsxClosingElement(c) => self.tag_name(&c.tag_name),
            NodeRef::JsxAttributes(a) => self.list(&a.properties),
            NodeRef::JsxExpression(e) => {
                self.opt_token(&e.dot_dot_dot_token);
                self.opt_expr(e.expression);
            }
            NodeRef::JsxNamespacedName(n) => {
                self.ident(&n.namespace);
                self.ident(&n.name);
            }
            NodeRef::JsDoc(d) => self.opt_list(&d.tags),
            NodeRef::JsDocTypeExpression(t) => self.ty(t.type_node),
        }
    }

    fn binding_element(&mut self, b: &'a BindingElement<'a>) {
        self.opt_token(&b.dot_dot_dot_token);
        if let Some(p) = &b.property_name {
            self.property_name(p);
        }
        self.binding_name(&b.name);
        self.opt_expr(b.initializer);
    }

    fn module_declaration(&mut self, m: &'a ModuleDeclaration<'a>) {
        self.decorated(&m.decorators, &m.modifiers);
        match &m.name {
            ModuleName::Identifier(id) => self.ident(id),
            ModuleName::StringLiteral(s) => self.string(s),
        }
        match &m.body {
            Some(ModuleBody::ModuleBlock(b)) => self.emit(NodeRef::ModuleBlock(b)),
            Some(ModuleBody::ModuleDeclaration(d)) => self.emit(NodeRef::ModuleDeclaration(d)),
            None => {}
        }
    }

    fn statement(&mut self, s: &'a Statement<'a>) {
        match s {
            Statement::VariableStatement(n) => {
                self.decorated(&n.decorators, &n.modifiers);
                self.emit(NodeRef::VariableDeclarationList(&n.declaration_list));
            }
            Statement::FunctionDeclaration(n) => {
                self.decorated(&n.decorators, &n.modifiers);
                self.opt_token(&n.asterisk_token);
                self.opt_ident(&n.name);
                self.signature(&n.type_parameters, &n.parameters, n.return_type);
                self.opt_block(&n.body);
            }
            Statement::ClassDeclaration(n) => self.class_like(n),
            Statement::InterfaceDeclaration(n) => {
                self.decorated(&n.decorators, &n.modifiers);
                self.ident(&n.name);
                self.opt_list(&n.type_parameters);
                self.opt_list(&n.heritage_clauses);
                self.list(&n.members);
            }
            Statement::TypeAliasDeclaration(n) => {
                self.decorated(&n.decorators, &n.modifiers);
                self.ident(&n.name);
                self.opt_list(&n.type_parameters);
                self.ty(n.type_node);
            }
            Statement::EnumDeclaration(n) => {
                self.decorated(&n.decorators, &n.modifiers);
                self.ident(&n.name);
                self.list(&n.members);
            }
            Statement::ModuleDeclaration(n) => self.module_declaration(n),
            Statement::ImportDeclaration(n) => {
                self.decorated(&n.decorators, &n.modifiers);
                if let Some(c) = &n.import_clause {
                    self.emit(NodeRef::ImportClause(c));
                }
                self.expr(n.module_specifier);
                self.attributes(&n.attributes);
            }
            Statement::ImportEqualsDeclaration(n) => {
                self.decorated(&n.decorators, &n.modifiers);
                self.ident(&n.name);
                match &n.module_reference {
                    ModuleReference::ExternalModuleReference(r) => {
                        self.emit(NodeRef::ExternalModuleReference(r))
                    }
                    ModuleReference::EntityName(e) => self.entity_name(e),
                }
            }
            Statement::ExportDeclaration(n) => {
                self.decorated(&n.decorators, &n.modifiers);
                match &n.export_clause {
                    Some(NamedExportBindings::NamespaceExport(e)) => {
                        self.emit(NodeRef::NamespaceExport(e))
                    }
                    Some(NamedExportBindings::NamedExports(e)) => {
                        self.emit(NodeRef::NamedExports(e))
                    }
                    None => {}
                }
                self.opt_expr(n.module_specifier);
                self.attributes(&n.attributes);
            }
            Statement::ExportAssignment(n) => {
                self.decorated(&n.decorators, &n.modifiers);
                self.expr(n.expression);
            }
            Statement::NamespaceExportDeclaration(n) => self.ident(&n.name),
            Statement::Block(b) => self.list(&b.statements),
            Statement::EmptyStatement(_) | Statement::DebuggerStatement(_) => {}
            Statement::ExpressionStatement(n) => self.expr(n.expression),
            Statement::IfStatement(n) => {
                self.token(&n.open_paren_token);
                self.expr(n.expression);
                self.token(&n.close_paren_token);
                self.stmt(n.then_statement);
                if let Some(e) = n.else_statement {
                    self.stmt(e);
                }
            }
            Statement::DoStatement(n) => {
                self.stmt(n.statement);
                self.token(&n.open_paren_token);
                self.expr(n.expression);
                self.token(&n.close_paren_token);
            }
            Statement::WhileStatement(n) => {
                self.token(&n.open_paren_token);
                self.expr(n.expression);
                self.token(&n.close_paren_token);
                self.stmt(n.statement);
            }
            Statement::ForStatement(n) => {
                if let Some(init) = &n.initializer {
                    self.for_initializer(init);
                }
                self.opt_expr(n.condition);
                self.opt_expr(n.incrementor);
                self.stmt(n.statement);
            }
            Statement::ForInStatement(n) | Statement::ForOfStatement(n) => {
                self.opt_token(&n.await_modifier);
                self.for_initializer(&n.initializer);
                self.expr(n.expression);
                self.stmt(n.statement);
            }
            Statement::ContinueStatement(n) | Statement::BreakStatement(n) => {
                self.opt_ident(&n.label)
            }
            Statement::ReturnStatement(n) => self.opt_expr(n.expression),
            Statement::WithStatement(n) => {
                self.token(&n.open_paren_token);
                self.expr(n.expression);
                self.token(&n.close_paren_token);
                self.stmt(n.statement);
            }
            Statement::SwitchStatement(n) => {
                self.token(&n.open_paren_token);
                self.expr(n.expression);
                self.token(&n.close_paren_token);
                self.emit(NodeRef::CaseBlock(&n.case_block));
            }
            Statement::LabeledStatement(n) => {
                self.ident(&n.label);
                self.stmt(n.statement);
            }
            Statement::ThrowStatement(n) => self.expr(n.expression),
            Statement::TryStatement(n) => {
                self.block(&n.try_block);
                if let Some(c) = &n.catch_clause {
                    self.emit(NodeRef::CatchClause(c));
                }
                self.opt_block(&n.finally_block);
            }
        }
    }

    fn expression(&mut self, e: &'a Expression<'a>) {
        match e {
            Expression::Identifier(_)
            | Expression::PrivateIdentifier(_)
            | Expression::StringLiteral(_)
            | Expression::NumericLiteral(_)
            | Expression::BigIntLiteral(_)
            | Expression::RegularExpressionLiteral(_)
            | Expression::NoSubstitutionTemplateLiteral(_)
            | Expression::OmittedExpression(_)
            | Expression::ThisKeyword(_)
            | Expression::SuperKeyword(_)
            | Expression::NullKeyword(_)
            | Expression::TrueKeyword(_)
            | Expression::FalseKeyword(_)
            | Expression::ImportKeyword(_) => {}
            Expression::TemplateExpression(n) => {
                self.emit(NodeRef::TemplateLiteralPart(&n.head));
                self.list(&n.template_spans);
            }
            Expression::ArrayLiteral(n) => self.list(&n.elements),
            Expression::ObjectLiteral(n) => self.list(&n.properties),
            Expression::PropertyAccess(n) => {
                self.expr(n.expression);
                self.opt_token(&n.question_dot_token);
                self.ident(n.name.identifier());
            }
            Expression::ElementAccess(n) => {
                self.expr(n.expression);
                self.opt_token(&n.question_dot_token);
                self.expr(n.argument_expression);
            }
            Expression::Call(n) => {
                self.expr(n.expression);
                self.opt_token(&n.question_dot_token);
                self.opt_list(&n.type_arguments);
                self.list(&n.arguments);
            }
            Expression::New(n) => {
                self.expr(n.expression);
                self.opt_list(&n.type_arguments);
                self.opt_list(&n.arguments);
            }
            Expression::TaggedTemplate(n) => {
                self.expr(n.tag);
                self.opt_list(&n.type_arguments);
                self.expr(n.template);
            }
            Expression::TypeAssertion(n) => {
                self.ty(n.type_node);
                self.expr(n.expression);
            }
            Expression::Parenthesized(n) => self.expr(n.expression),
            Expression::FunctionExpression(n) => {
                self.opt_list(&n.modifiers);
                self.opt_token(&n.asterisk_token);
                self.opt_ident(&n.name);
                self.signature(&n.type_parameters, &n.parameters, n.return_type);
                self.block(&n.body);
            }
            Expression::ArrowFunction(n) => {
                self.opt_list(&n.modifiers);
                self.signature(&n.type_parameters, &n.parameters, n.return_type);
                self.token(&n.equals_greater_than_token);
                match n.body {
                    ArrowFunctionBody::Block(b) => self.block(b),
                    ArrowFunctionBody::Expression(e) => self.expr(e),
                }
            }
            Expression::Delete(n)
            | Expression::TypeOf(n)
            | Expression::Void(n)
            | Expression::Await(n) => self.expr(n.expression),
            Expression::PrefixUnary(n) => self.expr(n.operand),
            Expression::PostfixUnary(n) => self.expr(n.operand),
            Expression::Binary(n) => {
                self.expr(n.left);
                self.token(&n.operator_token);
                self.expr(n.right);
            }
            Expression::Conditional(n) => {
                self.expr(n.condition);
                self.token(&n.question_token);
                self.expr(n.when_true);
                self.token(&n.colon_token);
                self.expr(n.when_false);
            }
            Expression::Yield(n) => {
                self.opt_token(&n.asterisk_token);
                self.opt_expr(n.expression);
            }
            Expression::Spread(n) => self.expr(n.expression),
            Expression::ClassExpression(n) => self.class_like(n),
            Expression::As(n) | Expression::Satisfies(n) => {
                self.expr(n.expression);
                self.ty(n.type_node);
            }
            Expression::NonNull(n) => self.expr(n.expression),
            Expression::MetaProperty(n) => self.ident(&n.name),
            Expression::JsxElement(n) => self.jsx_element(n),
            Expression::JsxSelfClosingElement(n) => self.jsx_self_closing(n),
            Expression::JsxFragment(n) => self.jsx_fragment(n),
        }
    }

    fn type_node(&mut self, t: &'a TypeNode<'a>) {
        match t {
            TypeNode::KeywordType(_)
            | TypeNode::ThisType(_)
            | TypeNode::JsDocAllType(_)
            | TypeNode::JsDocUnknownType(_) => {}
            TypeNode::TypeReference(n) => {
                self.entity_name(&n.type_name);
                self.opt_list(&n.type_arguments);
            }
            TypeNode::FunctionType(n) | TypeNode::ConstructorType(n) => {
                self.opt_list(&n.modifiers);
                self.signature(&n.type_parameters, &n.parameters, Some(n.return_type));
            }
            TypeNode::TypeQuery(n) => {
                self.entity_name(&n.expr_name);
                self.opt_list(&n.type_arguments);
            }
            TypeNode::TypeLiteral(n) => self.list(&n.members),
            TypeNode::ArrayType(n) => self.ty(n.element_type),
            TypeNode::TupleType(n) => self.list(&n.elements),
            TypeNode::OptionalType(n) | TypeNode::RestType(n) | TypeNode::ParenthesizedType(n) => {
                self.ty(n.type_node)
            }
            TypeNode::UnionType(n) | TypeNode::IntersectionType(n) => self.list(&n.types),
            TypeNode::ConditionalType(n) => {
                self.ty(n.check_type);
                self.ty(n.extends_type);
                self.ty(n.true_type);
                self.ty(n.false_type);
            }
            TypeNode::InferType(n) => self.emit(NodeRef::TypeParameter(n.type_parameter)),
            TypeNode::TypeOperator(n) => self.ty(n.type_node),
            TypeNode::IndexedAccessType(n) => {
                self.ty(n.object_type);
                self.ty(n.index_type);
            }
            TypeNode::MappedType(n) => {
                self.opt_token(&n.readonly_token);
                self.emit(NodeRef::TypeParameter(n.type_parameter));
                self.opt_ty(n.name_type);
                self.opt_token(&n.question_token);
                self.opt_ty(n.type_node);
            }
            TypeNode::LiteralType(n) => self.expr(n.literal),
            TypeNode::NamedTupleMember(n) => {
                self.opt_token(&n.dot_dot_dot_token);
                self.ident(&n.name);
                self.opt_token(&n.question_token);
                self.ty(n.type_node);
            }
            TypeNode::TemplateLiteralType(n) => {
                self.emit(NodeRef::TemplateLiteralPart(&n.head));
                self.list(&n.template_spans);
            }
            TypeNode::ImportType(n) => {
                self.ty(n.argument);
                self.attributes(&n.attributes);
                if let Some(q) = &n.qualifier {
                    self.entity_name(q);
                }
                self.opt_list(&n.type_arguments);
            }
            TypeNode::TypePredicate(n) => {
                self.opt_token(&n.asserts_modifier);
                match &n.parameter_name {
                    TypePredicateParameterName::Identifier(id) => self.ident(id),
                    TypePredicateParameterName::ThisType(t) => self.token(t),
                }
                self.opt_ty(n.type_node);
            }
            TypeNode::JsDocNullableType(n)
            | TypeNode::JsDocNonNullableType(n)
            | TypeNode::JsDocOptionalType(n)
            | TypeNode::JsDocVariadicType(n) => self.ty(n.type_node),
        }
    }
}
