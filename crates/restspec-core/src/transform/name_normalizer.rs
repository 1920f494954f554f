use heck::ToPascalCase;

use crate::swagger::HttpMethod;

/// Derive a camelCase operation id from HTTP method + normalized path.
///
/// Examples:
/// - `GET /users` → `listUsers`
/// - `POST /users` → `createUsers`
/// - `GET /users/{userId}` → `getUser`
/// - `PUT /users/{userId}` → `updateUser`
/// - `DELETE /users/{userId}` → `deleteUser`
/// - `GET /users/{userId}/messages` → `listUsersMessages`
pub fn route_to_name(method: HttpMethod, path: &str) -> String {
    let mut resource_parts: Vec<&str> = Vec::new();
    let mut ends_with_param = false;

    for seg in path.split('/').filter(|s| !s.is_empty()) {
        if seg.starts_with('{') && seg.ends_with('}') {
            ends_with_param = true;
        } else {
            resource_parts.push(seg);
            ends_with_param = false;
        }
    }

    let prefix = match method {
        HttpMethod::Get if ends_with_param => "get",
        HttpMethod::Get => "list",
        HttpMethod::Post => "create",
        HttpMethod::Put => "update",
        HttpMethod::Delete => "delete",
        HttpMethod::Patch => "patch",
        HttpMethod::Options => "options",
        HttpMethod::Head => "head",
    };

    let last = resource_parts.len().saturating_sub(1);
    let mut name = prefix.to_string();
    for (i, part) in resource_parts.iter().enumerate() {
        let word = if i == last && ends_with_param {
            singularize(part)
        } else {
            part.to_string()
        };
        name.push_str(&word.to_pascal_case());
    }
    name
}

/// Naive singularization: strips a trailing plural suffix.
fn singularize(word: &str) -> String {
    if word.ends_with("ies") && word.len() > 3 {
        format!("{}y", &word[..word.len() - 3])
    } else if word.ends_with("ses") || word.ends_with("xes") || word.ends_with("zes") {
        word[..word.len() - 2].to_string()
    } else if word.ends_with('s') && !word.ends_with("ss") && word.len() > 1 {
        word[..word.len() - 1].to_string()
    } else {
        word.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list() {
        assert_eq!(route_to_name(HttpMethod::Get, "/users"), "listUsers");
    }

    #[test]
    fn test_get_single() {
        assert_eq!(route_to_name(HttpMethod::Get, "/users/{userId}"), "getUser");
    }

    #[test]
    fn test_update_and_delete() {
        assert_eq!(route_to_name(HttpMethod::Put, "/users/{userId}"), "updateUser");
        assert_eq!(route_to_name(HttpMethod::Delete, "/users/{userId}"), "deleteUser");
    }

    #[test]
    fn test_nested() {
        assert_eq!(
            route_to_name(HttpMethod::Get, "/users/{userId}/messages"),
            "listUsersMessages"
        );
        assert_eq!(
            route_to_name(HttpMethod::Get, "/users/{userId}/messages/{messageId}"),
            "getUsersMessage"
        );
    }

    #[test]
    fn test_root() {
        assert_eq!(route_to_name(HttpMethod::Head, ""), "head");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("boxes"), "box");
        assert_eq!(singularize("class"), "class");
    }
}
