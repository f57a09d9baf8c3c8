use crate::key::Key;
use crate::transform::Method;

/// Everything needed to scramble or restore an image: which key and which method.
///
/// Both sides of a round trip must use identical options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CipherOptions {
    /// The secret key, defaults to [`DEFAULT_KEY`](crate::key::DEFAULT_KEY)
    pub key: Key,

    /// The scrambling method, defaults to `xor`
    pub method: Method,
}

impl CipherOptions {
    pub fn new(key: impl Into<Key>, method: Method) -> Self {
        Self {
            key: key.into(),
            method,
        }
    }

    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::DEFAULT_KEY;

    #[test]
    fn defaults_match_the_classic_tool() {
        let options = CipherOptions::default();
        assert_eq!(options.key.value(), DEFAULT_KEY);
        assert_eq!(options.method, Method::XOR);
    }

    #[test]
    fn setters_override_defaults() {
        let options = CipherOptions::default()
            .with_key(-9)
            .with_method(Method::SHUFFLE);
        assert_eq!(options, CipherOptions::new(-9, Method::SHUFFLE));
    }
}
