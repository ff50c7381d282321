//! Permission token normalization.

/// Permission names reserved by the directory service.
///
/// A token matching one of these case-insensitively is folded to lower case.
/// Any other token is a custom repository role and keeps its original casing.
pub const RESERVED_PERMISSIONS: [&str; 7] =
    ["read", "pull", "write", "push", "triage", "maintain", "admin"];

/// Normalize a raw permission token.
///
/// Reserved names are lower-cased, then renamed from their UI spelling to
/// the API spelling (`read` -> `pull`, `write` -> `push`). An absent token
/// stays absent: the directory check validates team existence only, so a
/// grant without a permission is still acceptable.
pub fn normalize_permission(raw: Option<&str>) -> Option<String> {
    let token = raw?;
    let lowered = token.to_lowercase();

    let permission = if RESERVED_PERMISSIONS.contains(&lowered.as_str()) {
        lowered
    } else {
        token.to_string()
    };

    match permission.as_str() {
        "read" => Some("pull".to_string()),
        "write" => Some("push".to_string()),
        _ => Some(permission),
    }
}
