/// Defines a newtype ID wrapper around an owned `String` and generates:
/// - derives (Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - `Display`
/// - `From<String>`, `From<&str>` and `AsRef<str>`
///
/// The wrapper serializes transparently, so payloads carry plain strings.
///
/// Usage:
///   define_id_type!(PropertyId);
#[macro_export]
macro_rules! define_id_type {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::convert::From<String> for $name {
            fn from(v: String) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(v: &str) -> Self {
                $name(v.to_string())
            }
        }

        impl ::std::convert::AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                $name(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}
