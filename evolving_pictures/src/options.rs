#[rustfmt::skip]
macro_rules! ep_options_spec {
    ($m:ident) => {
        $m! {
            values {
                seed:
                    (u64, 0, "seed"),
                population_size:
                    (usize, 9, "population-size"),
                min_grow_ops:
                    (usize, 10, "min-grow-ops"),
                max_grow_ops:
                    (usize, 30, "max-grow-ops"),
                operator_weight:
                    (u32, 20, "operator-weight"),
                leaf_weight:
                    (u32, 3, "leaf-weight"),
                width:
                    (u32, 400, "width"),
                height:
                    (u32, 300, "height"),
            }
            neg_flags {
                progress:
                    (true, no_progress, "no-progress"),
            }
        }
    };
}

macro_rules! __define_options {
    (
        values { $( $name:ident: ($ty:ty, $default:expr, $cli_long:literal), )* }
        neg_flags { $( $iname:ident: ($bdefault:expr, $cli_name:ident, $cli_blong:literal), )* }
    ) => {
        /// Knobs for random generation, mutation, breeding and rendering.
        ///
        /// `max_grow_ops` is exclusive: a fresh channel receives `min_grow_ops..max_grow_ops`
        /// growth steps. A replacement node is an operator with odds
        /// `operator_weight / (operator_weight + leaf_weight)`.
        #[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
        #[cfg_attr(feature = "serde", serde(default))]
        #[derive(Clone, Debug, PartialEq)]
        pub struct Options {
            $(pub $name: $ty,)*
            $(pub $iname: bool,)*
        }

        impl Default for Options {
            fn default() -> Self {
                Self {
                    $($name: $default,)*
                    $($iname: $bdefault,)*
                }
            }
        }
    };
}

ep_options_spec!(__define_options);

impl Options {
    pub fn grow_range(&self) -> std::ops::Range<usize> {
        self.min_grow_ops..self.max_grow_ops
    }
}

#[cfg(feature = "cli")]
pub(crate) mod cli_args {
    use clap::Args;

    use super::Options;

    macro_rules! __define_options_args {
        (
            values { $( $name:ident: ($ty:ty, $default:expr, $cli_long:literal), )* }
            neg_flags { $( $iname:ident: ($bdefault:expr, $cli_name:ident, $cli_blong:literal), )* }
        ) => {
            #[derive(Args, Debug, Clone, Default)]
            pub struct OptionsArgs {
                $(
                    #[arg(long = $cli_long)]
                    pub $name: Option<$ty>,
                )*

                $(
                    #[arg(long = $cli_blong)]
                    pub $cli_name: bool,
                )*
            }

            impl OptionsArgs {
                pub fn apply_to(&self, opt: &mut Options) {
                    $(
                        if let Some(v) = self.$name {
                            opt.$name = v;
                        }
                    )*

                    $(
                        if self.$cli_name {
                            opt.$iname = false;
                        }
                    )*
                }
            }
        };
    }

    ep_options_spec!(__define_options_args);
}
