use std::fmt;

use serde::{Deserialize, Serialize};

/// A handle to a request or response payload type.
///
/// Route registration holds on to the type's name only; turning it into a
/// definition key is the job of a [`TypeNamer`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelType {
    type_name: String,
}

impl ModelType {
    /// Capture the compiler-provided name of `T`.
    pub fn of<T: ?Sized>() -> Self {
        Self {
            type_name: std::any::type_name::<T>().to_string(),
        }
    }

    /// Use an already-qualified name such as `restfulspec.Sample`.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            type_name: name.into(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }
}

impl fmt::Display for ModelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.type_name)
    }
}

/// Resolves the key under which a payload type is stored in `definitions`.
///
/// Implementations must be deterministic: the same type has to produce the
/// same name on every call, or the emitted references drift between builds.
pub trait TypeNamer {
    fn definition_name(&self, model: &ModelType) -> String;
}

/// Default naming: `module.Type`, after unwrapping containers.
///
/// `alloc::vec::Vec<my_app::models::Sample>` and `&[my_app::models::Sample]`
/// both name `models.Sample`. Generic arguments of the remaining type are
/// dropped. Names without a `::` path are returned as-is.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefinitionNamer;

const WRAPPERS: &[&str] = &["Vec", "VecDeque", "Option", "Box", "Rc", "Arc"];

impl TypeNamer for DefinitionNamer {
    fn definition_name(&self, model: &ModelType) -> String {
        let inner = unwrap_containers(model.type_name());
        let head = inner.split('<').next().unwrap_or(inner);
        let segments: Vec<&str> = head.split("::").filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => inner.to_string(),
            [name] => (*name).to_string(),
            [.., module, name] => format!("{module}.{name}"),
        }
    }
}

fn unwrap_containers(mut name: &str) -> &str {
    loop {
        name = name.trim();
        if let Some(rest) = name.strip_prefix('&') {
            name = rest.trim_start().strip_prefix("mut ").unwrap_or(rest);
            continue;
        }
        if let Some(inner) = name.strip_prefix('[').and_then(|n| n.strip_suffix(']')) {
            // `[T]` or `[T; N]`
            name = top_level_split(inner, ';').0;
            continue;
        }
        if let Some((head, args)) = generic_parts(name) {
            let base = head.rsplit("::").next().unwrap_or(head);
            if WRAPPERS.contains(&base) {
                name = top_level_split(args, ',').0;
                continue;
            }
        }
        return name;
    }
}

/// Split `path::Type<args>` into `("path::Type", "args")`.
fn generic_parts(name: &str) -> Option<(&str, &str)> {
    let open = name.find('<')?;
    let args = name[open + 1..].strip_suffix('>')?;
    Some((&name[..open], args))
}

/// Split at the first `sep` that is not nested inside `<>`, `[]` or `()`.
fn top_level_split(s: &str, sep: char) -> (&str, &str) {
    let mut depth = 0usize;
    for (i, ch) in s.char_indices() {
        match ch {
            '<' | '[' | '(' => depth += 1,
            '>' | ']' | ')' => depth = depth.saturating_sub(1),
            c if c == sep && depth == 0 => return (s[..i].trim(), s[i + 1..].trim()),
            _ => {}
        }
    }
    (s.trim(), "")
}
