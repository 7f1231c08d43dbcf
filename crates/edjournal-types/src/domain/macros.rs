/// Declare a closed journal enumeration with its codes and display names.
macro_rules! definitions {
    (
        $(#[$meta:meta])*
        pub enum $name:ident, prefixes = [$($prefix:literal),* $(,)?] {
            $($variant:ident => ($ed:literal, $display:literal)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Canonical journal code
            pub fn ed_name(&self) -> &'static str {
                match self {
                    $($name::$variant => $ed),+
                }
            }

            /// Human-readable name
            pub fn name(&self) -> &'static str {
                match self {
                    $($name::$variant => $display),+
                }
            }

            pub fn from_ed_name(code: &str) -> Option<Self> {
                let code = $crate::domain::strip_code(code, &[$($prefix),*]);
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| $crate::domain::codes_match(v.ed_name(), code))
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}
