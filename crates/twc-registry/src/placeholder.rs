//! Placeholder substitution inside descriptor JSON.

use serde_json::Value;

/// Replace every occurrence of `token` in string values with `replacement`.
///
/// Walks arrays and objects recursively. Object keys are left untouched.
/// Returns the number of strings that changed.
pub fn substitute_placeholder(value: &mut Value, token: &str, replacement: &str) -> usize {
    if token.is_empty() {
        return 0;
    }

    match value {
        Value::String(s) if s.contains(token) => {
            *s = s.replace(token, replacement);
            1
        }
        Value::Array(items) => items
            .iter_mut()
            .map(|item| substitute_placeholder(item, token, replacement))
            .sum(),
        Value::Object(map) => map
            .values_mut()
            .map(|item| substitute_placeholder(item, token, replacement))
            .sum(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    const TOKEN: &str = "{{REGISTRY_URL}}";

    #[test]
    fn test_substitutes_nested_strings() {
        let mut value = json!({
            "name": "dialog",
            "registryDependencies": ["{{REGISTRY_URL}}/r/button.json"],
            "meta": { "docs": "{{REGISTRY_URL}}/docs/dialog", "count": 3 }
        });

        let changed = substitute_placeholder(&mut value, TOKEN, "https://ui.example.com");

        assert_eq!(changed, 2);
        assert_eq!(
            value,
            json!({
                "name": "dialog",
                "registryDependencies": ["https://ui.example.com/r/button.json"],
                "meta": { "docs": "https://ui.example.com/docs/dialog", "count": 3 }
            })
        );
    }

    #[test]
    fn test_multiple_occurrences_in_one_string() {
        let mut value = json!("{{REGISTRY_URL}} and {{REGISTRY_URL}}");
        substitute_placeholder(&mut value, TOKEN, "x");
        assert_eq!(value, json!("x and x"));
    }

    #[test]
    fn test_keys_untouched() {
        let mut value = json!({ "{{REGISTRY_URL}}": true });
        assert_eq!(substitute_placeholder(&mut value, TOKEN, "x"), 0);
        assert_eq!(value, json!({ "{{REGISTRY_URL}}": true }));
    }

    #[test]
    fn test_empty_token_is_noop() {
        let mut value = json!("abc");
        assert_eq!(substitute_placeholder(&mut value, "", "x"), 0);
        assert_eq!(value, json!("abc"));
    }
}
