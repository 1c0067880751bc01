//! Declarative parameter registration

/// Declare a builder struct together with its parameter schema
///
/// Each field is a parameter and carries its default. The macro emits the
/// struct (deriving `Debug` and `Clone`), `Default`, a `new()` constructor,
/// a `with_<field>` setter per field, and the [`crate::Parameterized`] impl.
///
/// ```
/// use fastformer_builder::{builder_parameters, Parameterized};
///
/// builder_parameters! {
///     pub struct MlpBuilder {
///         pub depth: usize = 1,
///         pub width: usize = 8,
///     }
/// }
///
/// let builder = MlpBuilder::new().with_depth(6);
/// assert_eq!(builder.width, 8);
/// assert!(MlpBuilder::has_parameter("depth"));
/// assert!(!MlpBuilder::has_parameter("heads"));
/// ```
#[macro_export]
macro_rules! builder_parameters {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $ty:ty = $default:expr
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $ty,
            )*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    $($field: $default,)*
                }
            }
        }

        impl $crate::Parameterized for $name {
            const NAME: &'static str = stringify!($name);

            fn parameter_names() -> &'static [&'static str] {
                &[$(stringify!($field)),*]
            }

            #[allow(unused_variables)]
            fn set_parameter(
                &mut self,
                name: &str,
                value: $crate::ParamValue,
            ) -> ::core::result::Result<(), $crate::BuilderError> {
                match name {
                    $(
                        stringify!($field) => {
                            self.$field = <$ty as $crate::FromParam>::from_param(value).map_err(
                                |source| $crate::BuilderError::InvalidValue {
                                    builder: Self::NAME.to_string(),
                                    name: name.to_string(),
                                    source,
                                },
                            )?;
                            Ok(())
                        }
                    )*
                    _ => Err($crate::BuilderError::unknown_parameter(Self::NAME, name)),
                }
            }

            fn parameter(&self, name: &str) -> ::core::option::Option<$crate::ParamValue> {
                match name {
                    $(stringify!($field) => Some($crate::ToParam::to_param(&self.$field)),)*
                    _ => None,
                }
            }
        }

        $crate::paste::paste! {
            impl $name {
                /// Create a builder with every parameter at its default
                #[must_use]
                pub fn new() -> Self {
                    Self::default()
                }

                $(
                    #[must_use]
                    pub fn [<with_ $field>](mut self, value: $ty) -> Self {
                        self.$field = value;
                        self
                    }
                )*
            }
        }
    };
}
