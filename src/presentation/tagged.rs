//! Discriminated unions keyed by a string `type` field
//!
//! [`tagged_union!`](crate::presentation::tagged::tagged_union) declares an enum with
//! one variant per known discriminator plus an `Unknown` variant holding only the
//! common header. Decoding reads `type`, picks the variant, and decodes the whole
//! record into it. Records with a missing or unrecognised `type` decode into
//! `Unknown` so that kinds added to the API later do not break older clients. A
//! record that is not a JSON object, or whose fields have the wrong JSON types for
//! the selected shape, is a decode error.

/// Declares a `type`-discriminated union with a header-only fallback variant
///
/// Every variant payload must expose a `header` field of the header type, normally
/// `#[serde(flatten)]`ed, and the header must carry the discriminator as
/// `kind: Option<String>`.
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident : $header:ty {
            $( $tag:literal => $variant:ident($payload:ty), )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $(
                #[doc = concat!("`", $tag, "`")]
                $variant($payload),
            )+
            /// A kind this client does not know; only the common fields are decoded
            Unknown($header),
        }

        impl $name {
            /// Discriminators with a dedicated variant
            pub const KINDS: &'static [&'static str] = &[$($tag),+];

            /// Decodes a record by dispatching on its `type` field
            ///
            /// # Errors
            /// Fails if `value` is not an object or does not match the shape selected
            /// by its discriminator.
            pub fn from_value(value: serde_json::Value) -> Result<Self, serde_json::Error> {
                if !value.is_object() {
                    return Err(<serde_json::Error as serde::de::Error>::custom(format!(
                        "expected a JSON object for {}",
                        stringify!($name)
                    )));
                }
                let kind = value
                    .get("type")
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_owned);
                match kind.as_deref() {
                    $( Some($tag) => serde_json::from_value(value).map($name::$variant), )+
                    other => {
                        tracing::debug!(
                            "Unrecognised {} type {:?}, decoding common fields only",
                            stringify!($name),
                            other
                        );
                        serde_json::from_value(value).map($name::Unknown)
                    }
                }
            }

            /// The discriminator, if the record carried one
            #[must_use]
            pub fn kind(&self) -> Option<&str> {
                match self {
                    $( $name::$variant(_) => Some($tag), )+
                    $name::Unknown(header) => header.kind.as_deref(),
                }
            }

            /// Fields common to every kind
            #[must_use]
            pub fn header(&self) -> &$header {
                match self {
                    $( $name::$variant(inner) => &inner.header, )+
                    $name::Unknown(header) => header,
                }
            }

            /// Whether the record fell back to the header-only shape
            #[must_use]
            pub fn is_unknown(&self) -> bool {
                matches!(self, $name::Unknown(_))
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                match self {
                    $( $name::$variant(inner) => inner.serialize(serializer), )+
                    $name::Unknown(header) => header.serialize(serializer),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                $name::from_value(value).map_err(<D::Error as serde::de::Error>::custom)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
                write!(f, "{json}")
            }
        }
    };
}

pub(crate) use tagged_union;
