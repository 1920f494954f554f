/// Convert a router path template into Swagger path-template syntax.
///
/// Empty segments are dropped, and a regex-constrained variable such as
/// `{id:[0-9]+}` loses its constraint and becomes `{id}`. Unconstrained
/// variables and literal segments pass through untouched.
///
/// - `/a/{c:[a-z]+}` → `/a/{c}`
/// - `//a//b/` → `/a/b`
/// - `///` → ``
pub fn normalize_path(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    for segment in template.split('/').filter(|s| !s.is_empty()) {
        out.push('/');
        match segment.split_once(':') {
            Some((name, _constraint)) if segment.starts_with('{') => {
                out.push_str(name);
                out.push('}');
            }
            _ => out.push_str(segment),
        }
    }
    out
}
