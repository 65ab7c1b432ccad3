/// Declares open enumerations of string tags.
///
/// Every enum gets one variant per known tag and a catch-all variant holding
/// any other tag verbatim, so that values added upstream never fail to parse.
macro_rules! string_enums {
    (
        $(
            $(#[$attr:meta])*
            pub enum $E:ident {
                $(
                    $(#[$v_attr:meta])*
                    $V:ident = $by:literal
                ),+;
                $(#[$u_attr:meta])*
                $U:ident(_)$(,)?
            }
        )*
    ) => {
        $(
            $(#[$attr])*
            pub enum $E {
                $(
                    $(#[$v_attr])*
                    $V,
                )+
                $(#[$u_attr])*
                $U(String),
            }

            impl $E {
                /// Returns `true` if the tag is not one known to this library.
                pub fn is_unrecognized(&self) -> bool {
                    match *self {
                        $E::$U(ref s) => match s.as_str() {
                            $($by => false,)+
                            _ => true,
                        },
                        _ => false,
                    }
                }
            }

            impl<'a> ::std::convert::From<&'a str> for $E {
                fn from(s: &'a str) -> Self {
                    match s {
                        $($by => $E::$V,)+
                        _ => $E::$U(s.to_owned()),
                    }
                }
            }

            impl ::std::convert::From<String> for $E {
                fn from(s: String) -> Self {
                    match s.as_str() {
                        $($by => $E::$V,)+
                        _ => $E::$U(s),
                    }
                }
            }

            impl crate::de::FromJson for $E {
                fn from_json(
                    value: &crate::types::JsonValue,
                    cx: &mut crate::de::Cursor,
                ) -> ::std::result::Result<Self, crate::error::SchemaError> {
                    let s = cx.string(value)?;
                    let ret = $E::from(s);
                    if ret.is_unrecognized() {
                        cx.unrecognized(s)?;
                    }
                    Ok(ret)
                }
            }

            impl ::std::convert::AsRef<str> for $E {
                fn as_ref(&self) -> &str {
                    match *self {
                        $($E::$V => $by,)+
                        $E::$U(ref s) => s,
                    }
                }
            }

            impl ::std::cmp::PartialEq for $E {
                fn eq(&self, other: &$E) -> bool {
                    match *self {
                        $($E::$V => match *other {
                            $E::$V => true,
                            $E::$U(ref s) if s == $by => true,
                            _ => false,
                        },)+
                        $E::$U(ref s) => match *other {
                            $($E::$V => s == $by,)+
                            $E::$U(ref t) => s == t,
                        },
                    }
                }
            }

            impl ::std::cmp::Eq for $E {}

            impl ::std::hash::Hash for $E {
                fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                    ::std::hash::Hash::hash(::std::convert::AsRef::<str>::as_ref(self), state)
                }
            }

            impl ::std::fmt::Display for $E {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    f.write_str(::std::convert::AsRef::<str>::as_ref(self))
                }
            }

            impl ::serde::Serialize for $E {
                fn serialize<S: ::serde::Serializer>(&self, s: S) -> ::std::result::Result<S::Ok, S::Error> {
                    s.serialize_str(::std::convert::AsRef::<str>::as_ref(self))
                }
            }
        )*
    }
}

/// Declares a record of the schema along with its validating parser.
///
/// Each field names the JSON key it is read from and written to. Whether the
/// field is required follows from its type (see `de::Field`).
macro_rules! schema_struct {
    (
        $(#[$attr:meta])*
        pub struct $S:ident {
            $(
                $(#[$f_attr:meta])*
                pub $f:ident: $T:ty => $key:literal
            ),*$(,)?
        }
    ) => {
        $(#[$attr])*
        #[derive(::serde::Serialize)]
        pub struct $S {
            $(
                $(#[$f_attr])*
                #[serde(rename = $key)]
                #[serde(skip_serializing_if = "crate::de::Field::is_absent")]
                pub $f: $T,
            )*
        }

        impl crate::de::FromJson for $S {
            fn from_json(
                value: &crate::types::JsonValue,
                cx: &mut crate::de::Cursor,
            ) -> ::std::result::Result<Self, crate::error::SchemaError> {
                let object = cx.object(value)?;
                Ok($S {
                    $($f: cx.field($key, |cx| crate::de::Field::from_field(object.get($key), cx))?,)*
                })
            }
        }
    };
}

/// Declares opaque string identifiers which must not be empty.
macro_rules! opaque_strings {
    ($(
        $(#[$attr:meta])*
        pub struct $S:ident;
    )*) => {$(
        $(#[$attr])*
        #[derive(Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, ::serde::Serialize)]
        #[serde(transparent)]
        pub struct $S(String);

        impl $S {
            /// Returns `None` if `s` is empty.
            pub fn new(s: impl Into<String>) -> Option<Self> {
                let s = s.into();
                if s.is_empty() {
                    None
                } else {
                    Some($S(s))
                }
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_string(self) -> String {
                self.0
            }
        }

        impl crate::de::FromJson for $S {
            fn from_json(
                value: &crate::types::JsonValue,
                cx: &mut crate::de::Cursor,
            ) -> ::std::result::Result<Self, crate::error::SchemaError> {
                match cx.string(value)? {
                    "" => Err(cx.invalid("must not be empty")),
                    s => Ok($S(s.to_owned())),
                }
            }
        }

        impl crate::de::Field for $S {
            fn from_field(
                value: ::std::option::Option<&crate::types::JsonValue>,
                cx: &mut crate::de::Cursor,
            ) -> ::std::result::Result<Self, crate::error::SchemaError> {
                crate::de::required(value, cx)
            }
        }

        impl ::std::ops::Deref for $S {
            type Target = str;

            fn deref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::convert::AsRef<str> for $S {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl ::std::fmt::Display for $S {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl ::std::cmp::PartialEq<str> for $S {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl<'a> ::std::cmp::PartialEq<&'a str> for $S {
            fn eq(&self, other: &&'a str) -> bool {
                self.0 == *other
            }
        }
    )*};
}

/// Implements `serde::Deserialize` on top of the validating parser.
macro_rules! deserialize_from_json {
    ($($T:ty),*$(,)?) => {
        $(
            impl<'de> ::serde::Deserialize<'de> for $T {
                fn deserialize<D: ::serde::Deserializer<'de>>(d: D) -> ::std::result::Result<Self, D::Error> {
                    let value = <crate::types::JsonValue as ::serde::Deserialize>::deserialize(d)?;
                    crate::parser::Parser::new()
                        .parse::<$T>(&value)
                        .map(crate::parser::Parsed::into_inner)
                        .map_err(<D::Error as ::serde::de::Error>::custom)
                }
            }
        )*
    };
}
