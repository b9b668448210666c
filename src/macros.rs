// src/macros.rs
//
// String helpers used across the crate for cell text and paths.

/// `s!()` is an empty `String`; `s!(x)` is `String::from(x)`.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($text:expr) => {
        ::std::string::String::from($text)
    };
}

/// Concatenate `&str` pieces into a fresh `String`: `join!(stem, ".", ext)`.
#[macro_export]
macro_rules! join {
    ($head:expr $(, $tail:expr)+ $(,)?) => {{
        let mut out = ::std::string::String::from($head);
        $( out.push_str($tail); )+
        out
    }};
}
