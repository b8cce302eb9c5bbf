//! Macros for declaring the named squares of the board.

/// Declares one associated `SQ` constant per `(name, file, rank)` triple.
macro_rules! impl_sq_consts {
    ($($name:ident => ($file:expr, $rank:expr)),* $(,)*) => {
        impl SQ {
            $(
                #[doc(hidden)]
                pub const $name: SQ = SQ { file: $file, rank: $rank };
            )*
        }
    };
}
