use std::borrow::Cow;

#[atlas_derive::atlas_error]
pub enum RoutingError {
    /// A descriptor link is empty or not composed from the root separator.
    #[error("Invalid route link{}: {message}", format_context(.context))]
    InvalidLink { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// A dynamic route name has no entry in the registry.
    #[error("Unknown route key{}: {message}", format_context(.context))]
    UnknownKey { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}
