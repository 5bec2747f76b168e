/// Defines a model struct along with a numeric ID type for it. The model gets
/// public getters for every field and a builder, and the ID is a thin,
/// copyable wrapper around a `u32`.
///
/// The first field of the struct must be `id: <<IDType>>`. Setters are opt-in
/// per field via `#[getset(set = "...")]`, so anything not marked as settable
/// (including the id) is fixed once built.
#[macro_export]
macro_rules! bank_model {
    (
        $(#[$struct_meta:meta])*
        pub struct $name:ident {
            id: <<$id:ident>>,
            $($fields:tt)*
        }
        $builder:ident
    ) => {
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $id(u32);

        impl $id {
            pub fn new(id: u32) -> Self {
                Self(id)
            }

            /// Return the raw number behind this ID
            pub fn value(&self) -> u32 {
                self.0
            }
        }

        impl std::convert::From<u32> for $id {
            fn from(id: u32) -> Self {
                Self(id)
            }
        }

        impl std::convert::From<$id> for u32 {
            fn from(id: $id) -> Self {
                id.0
            }
        }

        impl std::fmt::Display for $id {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        $(#[$struct_meta])*
        #[derive(Clone, Debug, PartialEq, getset::Getters, getset::Setters, derive_builder::Builder, serde::Serialize, serde::Deserialize)]
        #[builder(pattern = "owned", setter(into))]
        #[getset(get = "pub")]
        pub struct $name {
            id: $id,
            $($fields)*
        }

        impl $name {
            /// Builders skip the checks the owning registry makes, so they stay
            /// inside the crate.
            pub(crate) fn builder() -> $builder {
                $builder::default()
            }
        }
    }
}
