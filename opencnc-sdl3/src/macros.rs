/// Declares a fieldless enum mirroring a native C enum, with lossless
/// conversion to the raw value and checked conversion back.
macro_rules! native_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident: $repr:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $value:expr, )*
        }
    ) => {
        $(#[$meta])*
        #[repr($repr)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant = $value, )*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$( Self::$variant, )*];

            /// Converts a native value, or `None` if SDL defines no such variant.
            #[must_use]
            pub fn from_raw(raw: $repr) -> Option<Self> {
                match raw {
                    $( v if v == $value => Some(Self::$variant), )*
                    _ => None,
                }
            }

            /// The native value.
            #[must_use]
            pub fn raw(self) -> $repr {
                self as $repr
            }
        }
    };
}

pub(crate) use native_enum;
