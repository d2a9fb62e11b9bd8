use percent_encoding::percent_decode_str;

/// Top-level views. Only the entry screen is derived from the URL; after
/// that navigation is in-memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Checking,
    Login,
    Register,
    ForgotPassword,
    ResetPassword { token: String },
    Dashboard,
}

impl Screen {
    pub fn initial(path: &str, search: &str, has_session: bool) -> Self {
        let path = path.trim_end_matches('/');
        if path.ends_with("/reset-password") {
            return Screen::ResetPassword {
                token: query_param(search, "token").unwrap_or_default(),
            };
        }
        if has_session {
            return Screen::Checking;
        }
        if path.ends_with("/register") {
            Screen::Register
        } else if path.ends_with("/forgot-password") {
            Screen::ForgotPassword
        } else {
            Screen::Login
        }
    }
}

/// Looks up `key` in a `?a=1&b=2` query string, decoding the value the way
/// `URLSearchParams` does (`+` is a space, `%XX` escapes are expanded).
pub fn query_param(search: &str, key: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(name, _)| decode(name) == key)
        .map(|(_, value)| decode(value))
        .filter(|value| !value.is_empty())
}

fn decode(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}
