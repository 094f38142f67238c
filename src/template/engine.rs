//! Token substitution engine.

use std::collections::HashSet;

use regex::RegexBuilder;

use super::TokenRules;

/// Substitute delimited tokens in a template using per-element data.
///
/// Tokens are the shortest substrings enclosed by `rules.prefix` and
/// `rules.suffix`, matched case-insensitively. Distinct matches are collected
/// as a set and every occurrence of each one is replaced with
/// `resolver(token, element)`; the token handed to the resolver includes its
/// delimiters. Replacement text is not re-scanned for tokens, but because
/// distinct tokens are substituted one after another over the partially
/// substituted string, a replacement that contains another token's text makes
/// the outcome order-dependent. Callers should not rely on reentrant
/// substitution.
///
/// Returns `None` only for a `None` template. Without a resolver the template
/// is returned unchanged. Delimiters that do not form a valid match pattern
/// are treated as "no tokens found". Empty delimiters are a caller contract
/// violation: they trip a debug assertion and leave the template unchanged in
/// release builds.
pub fn render<E>(
    template: Option<&str>,
    element: &E,
    rules: &TokenRules,
    resolver: Option<&dyn Fn(&str, &E) -> String>,
) -> Option<String> {
    let template = template?;
    let resolver = match resolver {
        Some(resolver) => resolver,
        None => return Some(template.to_owned()),
    };

    debug_assert!(!rules.prefix.is_empty(), "token prefix must not be empty");
    debug_assert!(!rules.suffix.is_empty(), "token suffix must not be empty");
    if rules.prefix.is_empty() || rules.suffix.is_empty() {
        return Some(template.to_owned());
    }

    let pattern = format!("{}.*?{}", rules.prefix, rules.suffix);
    let matcher = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(matcher) => matcher,
        // Delimiters that break the pattern mean nothing can match
        Err(_) => return Some(template.to_owned()),
    };

    let tokens: HashSet<&str> = matcher.find_iter(template).map(|m| m.as_str()).collect();

    let mut rendered = template.to_owned();
    for token in tokens {
        rendered = rendered.replace(token, &resolver(token, element));
    }

    Some(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_greeting(token: &str, _element: &()) -> String {
        match token {
            "##name##" => "Bob".to_string(),
            "##age##" => "30".to_string(),
            other => other.to_string(),
        }
    }

    #[test]
    fn test_absent_template() {
        let rules = TokenRules::default();
        assert_eq!(render(None, &(), &rules, Some(&resolve_greeting)), None);
    }

    #[test]
    fn test_no_resolver_returns_template_unchanged() {
        let rules = TokenRules::default();
        let rendered = render(Some("Hello ##name##"), &(), &rules, None);
        assert_eq!(rendered.as_deref(), Some("Hello ##name##"));
    }

    #[test]
    fn test_substitutes_all_tokens() {
        let rules = TokenRules::default();
        let rendered = render(
            Some("Hello ##name##, you are ##age## years old"),
            &(),
            &rules,
            Some(&resolve_greeting),
        );
        assert_eq!(rendered.as_deref(), Some("Hello Bob, you are 30 years old"));
    }

    #[test]
    fn test_duplicate_tokens_collapse() {
        let rules = TokenRules::default();
        let rendered = render(
            Some("##x## and ##x##"),
            &(),
            &rules,
            Some(&|_token, _element: &()| "Y".to_string()),
        );
        assert_eq!(rendered.as_deref(), Some("Y and Y"));
    }

    #[test]
    fn test_resolver_receives_element() {
        let rules = TokenRules::default();
        let rendered = render(
            Some("Remove ##item##?"),
            &"invoices.db".to_string(),
            &rules,
            Some(&|_token, item: &String| item.clone()),
        );
        assert_eq!(rendered.as_deref(), Some("Remove invoices.db?"));
    }

    #[test]
    fn test_case_insensitive_delimiters() {
        let rules = TokenRules::new("<var>", "</var>");
        let rendered = render(
            Some("value: <VAR>speed</VAR>"),
            &(),
            &rules,
            Some(&|_token, _element: &()| "88".to_string()),
        );
        assert_eq!(rendered.as_deref(), Some("value: 88"));
    }

    #[test]
    fn test_invalid_delimiters_match_nothing() {
        // "(" alone is not a valid pattern, so the template passes through
        let rules = TokenRules::new("(", ")");
        let rendered = render(
            Some("call(##arg##)"),
            &(),
            &rules,
            Some(&|_token, _element: &()| "X".to_string()),
        );
        assert_eq!(rendered.as_deref(), Some("call(##arg##)"));
    }

    #[test]
    fn test_template_without_tokens() {
        let rules = TokenRules::default();
        let rendered = render(
            Some("nothing to see here"),
            &(),
            &rules,
            Some(&resolve_greeting),
        );
        assert_eq!(rendered.as_deref(), Some("nothing to see here"));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "token prefix must not be empty")]
    fn test_empty_prefix_is_a_contract_violation() {
        let rules = TokenRules::new("", "##");
        render(Some("##x##"), &(), &rules, Some(&resolve_greeting));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "token suffix must not be empty")]
    fn test_empty_suffix_is_a_contract_violation() {
        let rules = TokenRules::new("##", "");
        render(Some("##x##"), &(), &rules, Some(&resolve_greeting));
    }
}
