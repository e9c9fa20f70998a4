//! Segment accessor macros
//!
//! These macros eliminate repetitive match code when working with `Segment`.
//! All macros use `paste` internally for identifier concatenation.

// =============================================================================
// Segment accessor generation
// =============================================================================

/// Generate is_xxx and as_xxx methods for single-text segment variants
///
/// Uses paste's `:camel` modifier to convert method name to variant name.
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&str>` - the display text of that variant
///
/// # Example
/// ```ignore
/// impl Segment {
///     // plain -> Plain, bold -> Bold
///     impl_segment_accessors!(plain, bold);
/// }
/// ```
macro_rules! impl_segment_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " segment"]
                #[inline]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Get the text of a " [<$variant:camel>] " segment"]
                #[inline]
                pub fn [<as_ $variant>](&self) -> Option<&str> {
                    match self { Self::[<$variant:camel>](t) => Some(t.as_str()), _ => None }
                }
            )*
        }
    };
}

/// Generate a method that maps every single-text variant to a `SegmentKind`
///
/// # Example
/// ```ignore
/// impl_segment_kind!(Plain, Bold; Numbered);
/// // Expands to: pub fn kind(&self) -> SegmentKind { match self { ... } }
/// ```
macro_rules! impl_segment_kind {
    ($($variant:ident),* ; $($struct_variant:ident),* $(,)?) => {
        /// Discriminant of this segment.
        #[inline]
        pub fn kind(&self) -> $crate::node::SegmentKind {
            match self {
                $(Self::$variant(_) => $crate::node::SegmentKind::$variant,)*
                $(Self::$struct_variant { .. } => $crate::node::SegmentKind::$struct_variant,)*
            }
        }
    };
}
