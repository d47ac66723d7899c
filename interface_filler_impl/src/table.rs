use crate::{FillerFieldMarker, ParameterNameMarker, ParameterPositionMarker};

/// All of the descriptors a type can expose
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Descriptor {
    Filler(FillerType),
    Callers(CallerTable),
}

/// The `#[filler]` fields of a struct
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct FillerType {
    pub name: &'static str,
    pub docs: &'static [&'static str],
    pub fields: &'static [FillerFieldDesc],
}

impl FillerType {
    pub fn field(&self, name: &str) -> Option<&'static FillerFieldDesc> {
        self.fields.iter().find(|c| c.field == name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct FillerFieldDesc {
    /// The field name, or its index for tuple structs
    pub field: &'static str,
    pub ty: &'static str,
    pub docs: &'static [&'static str],
    pub marker: FillerFieldMarker,
}

/// The wrapper methods of an impl block
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct CallerTable {
    pub owner: &'static str,
    pub methods: &'static [MethodDesc],
}

impl CallerTable {
    pub fn method(&self, name: &str) -> Option<&'static MethodDesc> {
        self.methods.iter().find(|c| c.name == name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct MethodDesc {
    pub name: &'static str,
    pub docs: &'static [&'static str],
    /// Declared parameters in order, without the receiver
    pub params: &'static [ParamDesc],
}

impl MethodDesc {
    pub fn param(&self, name: &str) -> Option<&'static ParamDesc> {
        self.params.iter().find(|c| c.name == name)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct ParamDesc {
    pub name: &'static str,
    pub ty: &'static str,
    /// `None` for parameters without a marker
    pub binding: Option<Binding>,
}

impl ParamDesc {
    /// The caller parameter name a `by_name` binding looks up
    pub fn lookup_key(&self) -> Option<&'static str> {
        match self.binding {
            Some(Binding::Name(marker)) => Some(marker.lookup_key(self.name)),
            _ => None,
        }
    }
}

/// How a parameter is supplied from the caller's argument list
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub enum Binding {
    Position(ParameterPositionMarker),
    Name(ParameterNameMarker),
}

impl From<ParameterPositionMarker> for Binding {
    fn from(value: ParameterPositionMarker) -> Self {
        Self::Position(value)
    }
}

impl From<ParameterNameMarker> for Binding {
    fn from(value: ParameterNameMarker) -> Self {
        Self::Name(value)
    }
}
