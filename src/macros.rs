// src/macros.rs
#[macro_export]
macro_rules! s {
    // Owned-string shorthand

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Anything `String::from` takes
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // Concatenate into a fresh String; the first arg is owned, the rest are &str-like
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}
