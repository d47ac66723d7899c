#[derive(Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: String,
    pub docs: Vec<String>,
    pub wrappers: Vec<String>,
}

#[derive(Debug, PartialEq)]
pub struct Method {
    pub name: String,
    pub docs: Vec<String>,
    pub params: Vec<Param>,
}

#[derive(Debug, PartialEq)]
pub struct Param {
    pub name: String,
    pub ty: String,
    pub binding: Option<Binding>,
}

#[derive(Debug, PartialEq)]
pub enum Binding {
    Position { index: i32, from_end: bool },
    Name(Option<String>),
}
