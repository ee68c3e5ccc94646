//! Naming convention interface
//!
//! Conventions split a property name into words and join words back into a
//! name. Translating between two conventions is a split in one followed by a
//! join in the other.

/// A property naming style such as `snake_case` or `camelCase`
pub trait NamingConvention: Send + Sync {
    /// Identifier of the style; two conventions with the same name are considered equal
    fn name(&self) -> &str;

    /// Split a name written in this convention into lowercase words
    fn to_parts(&self, name: &str) -> Vec<String>;

    /// Join words into a name written in this convention
    fn from_parts(&self, parts: &[String]) -> String;

    /// Translate a name written in this convention into `target`
    fn translate(&self, name: &str, target: &dyn NamingConvention) -> String {
        target.from_parts(&self.to_parts(name))
    }
}

impl std::fmt::Debug for dyn NamingConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("NamingConvention").field(&self.name()).finish()
    }
}
