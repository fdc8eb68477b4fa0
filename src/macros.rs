// src/macros.rs

/// `String` shorthand used across the UI and CLI.
#[macro_export]
macro_rules! s {
    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Literals, consts or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

/// Concatenate string-likes into a fresh `String` (file names, labels).
#[macro_export]
macro_rules! join {
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
