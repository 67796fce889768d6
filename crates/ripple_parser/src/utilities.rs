//! Token predicates that need no parser state.

use ripple_ast::syntax_kind::SyntaxKind;

/// Identifiers and every keyword, as accepted after `.` or as a property name.
pub fn token_is_identifier_or_keyword(kind: SyntaxKind) -> bool {
    kind == SyntaxKind::Identifier || kind.is_keyword()
}

/// Tokens that can only begin a left-hand-side expression. Identifiers and
/// `import` need parser context and are decided by the caller.
pub fn is_left_hand_side_expression_start(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::ThisKeyword
            | SyntaxKind::SuperKeyword
            | SyntaxKind::NullKeyword
            | SyntaxKind::TrueKeyword
            | SyntaxKind::FalseKeyword
            | SyntaxKind::NumericLiteral
            | SyntaxKind::BigIntLiteral
            | SyntaxKind::StringLiteral
            | SyntaxKind::NoSubstitutionTemplateLiteral
            | SyntaxKind::TemplateHead
            | SyntaxKind::OpenParenToken
            | SyntaxKind::OpenBracketToken
            | SyntaxKind::OpenBraceToken
            | SyntaxKind::FunctionKeyword
            | SyntaxKind::ClassKeyword
            | SyntaxKind::NewKeyword
            | SyntaxKind::SlashToken
            | SyntaxKind::SlashEqualsToken
    )
}

/// Prefix operators and keywords that start a unary expression.
pub fn is_unary_operator_start(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::PlusToken
            | SyntaxKind::MinusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::ExclamationToken
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken
            | SyntaxKind::LessThanToken
            | SyntaxKind::AwaitKeyword
            | SyntaxKind::YieldKeyword
            | SyntaxKind::PrivateIdentifier
            | SyntaxKind::AtToken
    )
}

/// Names usable for a property: identifiers, keywords, strings and numbers.
pub fn is_literal_property_name(kind: SyntaxKind) -> bool {
    token_is_identifier_or_keyword(kind)
        || matches!(
            kind,
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::BigIntLiteral
        )
}

pub fn is_in_or_of_keyword(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::InKeyword | SyntaxKind::OfKeyword)
}

/// Keywords that stand for a type on their own.
pub fn is_keyword_type(kind: SyntaxKind) -> bool {
    matches!(
        kind,
        SyntaxKind::AnyKeyword
            | SyntaxKind::UnknownKeyword
            | SyntaxKind::StringKeyword
            | SyntaxKind::NumberKeyword
            | SyntaxKind::BigIntKeyword
            | SyntaxKind::BooleanKeyword
            | SyntaxKind::SymbolKeyword
            | SyntaxKind::ObjectKeyword
            | SyntaxKind::UndefinedKeyword
            | SyntaxKind::NeverKeyword
    )
}

/// Tokens that begin a template literal.
pub fn is_template_start(kind: SyntaxKind) -> bool {
    matches!(kind, SyntaxKind::NoSubstitutionTemplateLiteral | SyntaxKind::TemplateHead)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_are_property_names() {
        assert!(is_literal_property_name(SyntaxKind::ClassKeyword));
        assert!(is_literal_property_name(SyntaxKind::StringLiteral));
        assert!(!is_literal_property_name(SyntaxKind::OpenBracketToken));
    }

    #[test]
    fn identifiers_need_context_to_start_expressions() {
        assert!(!is_left_hand_side_expression_start(SyntaxKind::Identifier));
        assert!(is_left_hand_side_expression_start(SyntaxKind::SlashEqualsToken));
        assert!(is_unary_operator_start(SyntaxKind::AwaitKeyword));
    }
}
