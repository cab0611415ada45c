pub struct Token(String);

impl From<&str> for Token {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl Token {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Value of the `Authorization` header sent to the build server.
    ///
    /// An empty token still yields a header; the server answers it as
    /// unauthorized.
    pub fn basic_header(&self) -> String {
        format!("Basic {}", self.as_str())
    }
}

impl std::fmt::Debug for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<redacted>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_from_str_creates_token() {
        let token_str = "bXl1c2VyOnBhdDEyMzQ1Njc4OTA=";
        let token = Token::from(token_str);

        assert_eq!(token.as_str(), token_str);
    }

    #[test]
    fn test_token_from_empty_string() {
        let token = Token::from("");

        assert_eq!(token.as_str(), "");
    }

    #[test]
    fn test_basic_header_prefixes_token() {
        let token = Token::from("abc123");

        assert_eq!(token.basic_header(), "Basic abc123");
    }

    #[test]
    fn test_basic_header_with_empty_token() {
        let token = Token::from("");

        assert_eq!(token.basic_header(), "Basic ");
    }

    #[test]
    fn test_token_debug_redacts_value() {
        let sensitive_token = "pat_very_secret_token_do_not_log";
        let token = Token::from(sensitive_token);

        let debug_output = format!("{token:?}");

        assert_eq!(debug_output, "<redacted>");
        assert!(!debug_output.contains(sensitive_token));
        assert!(!debug_output.contains("secret"));
    }

    #[test]
    fn test_token_debug_in_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct ApiClient {
            token: Token,
            endpoint: String,
        }

        let client = ApiClient {
            token: Token::from("super_secret_token"),
            endpoint: String::from("https://dev.azure.com/org/project"),
        };

        let debug_output = format!("{client:?}");

        assert!(debug_output.contains("<redacted>"));
        assert!(!debug_output.contains("super_secret_token"));
        assert!(debug_output.contains("https://dev.azure.com/org/project"));
    }
}
