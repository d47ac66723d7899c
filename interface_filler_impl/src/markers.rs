/// Binds a parameter to the caller's argument at a positional offset
///
/// `index` counts from the start of the caller's parameter list, or from the end when `from_end` is set.
/// Nothing here checks the offset against a real call site, negative values are kept as written.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ParameterPositionMarker {
    pub index: i32,
    pub from_end: bool,
}

impl ParameterPositionMarker {
    /// The first caller parameter, counted from the start
    pub const fn new() -> Self {
        Self {
            index: 0,
            from_end: false,
        }
    }

    pub const fn at(index: i32, from_end: bool) -> Self {
        Self { index, from_end }
    }
}

/// Binds a parameter to the caller's parameter with a matching name
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ParameterNameMarker {
    /// `None` means the annotated parameter's own name is used
    pub name: Option<&'static str>,
}

impl ParameterNameMarker {
    pub const fn new() -> Self {
        Self { name: None }
    }

    pub const fn named(name: &'static str) -> Self {
        Self { name: Some(name) }
    }

    /// The name to look up in the caller's signature
    ///
    /// Falls back to `declared`, the annotated parameter's own name, when no name was given
    pub fn lookup_key<'a>(&self, declared: &'a str) -> &'a str {
        self.name.unwrap_or(declared)
    }
}

/// Marks a field as the delegate that wrapper methods forward to
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct FillerFieldMarker {
    /// Restricts forwarding to these wrapper methods, an empty list means all of them
    pub wrapper_names: &'static [&'static str],
}

impl FillerFieldMarker {
    pub const fn new() -> Self {
        Self { wrapper_names: &[] }
    }

    pub const fn with_wrappers(wrapper_names: &'static [&'static str]) -> Self {
        Self { wrapper_names }
    }

    pub const fn is_unrestricted(&self) -> bool {
        self.wrapper_names.is_empty()
    }

    /// Does this field take part in generating the wrapper `name`?
    pub fn covers(&self, name: &str) -> bool {
        self.is_unrestricted() || self.wrapper_names.iter().any(|c| *c == name)
    }
}
