#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Declare a static restriction term table entry.
///
/// ```text
/// term! {
///     name: "Milk",
///     aliases: ["dairy"],
///     patterns: ["milk", "butter", "whey"],
///     excludes: ["cocoa butter", "oat milk"],
/// }
/// ```
#[macro_export]
macro_rules! term {
    (
        name: $name:expr
        $(, aliases: [ $($alias:expr),* $(,)? ])?
        , patterns: [ $($pat:expr),* $(,)? ]
        $(, excludes: [ $($exclude:expr),* $(,)? ])?
        $(,)?
    ) => {
        $crate::terms::TermSpec {
            name: $name,
            aliases: &[ $($($alias),*)? ],
            patterns: &[ $($pat),* ],
            excludes: &[ $($($exclude),*)? ],
        }
    };
}
