/// Maximum length of an application identifier, per the D-Bus bus name limit.
const MAX_ID_LEN: usize = 255;

/// The canonical application identifier, registered with the desktop
/// toolkit at startup.
pub const CANONICAL: &str = "com.eweaver.adwbluetooth";

/// Check whether `id` is a valid reverse-domain application identifier.
///
/// Follows the rules the host registry applies to well-known names: at
/// least two non-empty segments separated by `.`, each segment starting
/// with an ASCII letter or underscore and containing only ASCII letters,
/// digits, and underscores. Hyphens are rejected.
#[must_use]
pub fn is_valid(id: &str) -> bool {
    if id.is_empty() || id.len() > MAX_ID_LEN {
        return false;
    }
    let segments: Vec<&str> = id.split('.').collect();
    if segments.len() < 2 {
        return false;
    }
    segments.iter().all(|segment| is_valid_segment(segment))
}

fn is_valid_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_id_is_valid() {
        assert!(is_valid(CANONICAL));
    }

    #[test]
    fn valid_ids() {
        assert!(is_valid("com.example.App"));
        assert!(is_valid("org._private.tool2"));
        assert!(is_valid("a.b"));
    }

    #[test]
    fn hyphens_are_rejected() {
        assert!(!is_valid("com.eweaver.adw-bluetooth"));
    }

    #[test]
    fn invalid_ids() {
        assert!(!is_valid(""));
        assert!(!is_valid("bluetooth")); // single segment
        assert!(!is_valid("com..example")); // empty segment
        assert!(!is_valid(".com.example")); // leading dot
        assert!(!is_valid("com.example.")); // trailing dot
        assert!(!is_valid("com.2example.app")); // digit-leading segment
        assert!(!is_valid("com.exa mple.app")); // whitespace
    }

    #[test]
    fn overlong_id_is_rejected() {
        let id = format!("com.{}", "a".repeat(MAX_ID_LEN));
        assert!(!is_valid(&id));
    }
}
