use std::io::Write;

mod markers;
pub use markers::{FillerFieldMarker, ParameterNameMarker, ParameterPositionMarker};

mod table;
pub use table::{
    Binding, CallerTable, Descriptor, FillerFieldDesc, FillerType, MethodDesc, ParamDesc,
};

/// Exposes the `#[filler]` fields of this type
pub trait Filler {
    /// Get a static description of the filler fields
    fn filler() -> FillerType;
}

/// Exposes the wrapper methods of this type and how their parameters bind to the caller
pub trait CallerParams {
    /// Get a static description of the wrapper methods
    fn caller_params() -> CallerTable;
}

/// Generate the manifest for a type with both filler fields and wrapper methods
///
/// This'll append to the writer passed into it
pub fn generate<T>(out: &mut impl Write) -> std::io::Result<()>
where
    T: Filler + CallerParams,
{
    generate_filler(out, &T::filler())?;
    generate_callers(out, &T::caller_params())
}

/// Generate a specific descriptor
///
/// This'll append to the writer passed into it
pub fn generate_descriptor(out: &mut impl Write, desc: &Descriptor) -> std::io::Result<()> {
    match desc {
        Descriptor::Filler(filler) => generate_filler(out, filler),
        Descriptor::Callers(callers) => generate_callers(out, callers),
    }
}

/// Generate the filler fields of a type
///
/// This'll append to the writer passed into it
pub fn generate_filler(out: &mut impl Write, filler: &FillerType) -> std::io::Result<()> {
    write_docs(out, filler.docs)?;
    writeln!(out, "@filler {name}", name = filler.name)?;

    for field in filler.fields {
        write_docs(out, field.docs)?;
        write!(out, "@field {name}: {ty} wrappers = ", name = field.field, ty = field.ty)?;
        if field.marker.is_unrestricted() {
            writeln!(out, "*")?;
        } else {
            writeln!(out, "{}", field.marker.wrapper_names.join(", "))?;
        }
    }

    writeln!(out)
}

/// Generate the wrapper methods of a type
///
/// This'll append to the writer passed into it
pub fn generate_callers(out: &mut impl Write, callers: &CallerTable) -> std::io::Result<()> {
    writeln!(out, "@callers {owner}", owner = callers.owner)?;

    for method in callers.methods {
        write_docs(out, method.docs)?;
        writeln!(out, "@method {name}", name = method.name)?;

        for param in method.params {
            write!(out, "@param {name}: {ty}", name = param.name, ty = param.ty)?;
            match param.binding {
                Some(Binding::Position(marker)) => {
                    write!(out, " by_index {index}", index = marker.index)?;
                    if marker.from_end {
                        write!(out, " from_end")?;
                    }
                }
                Some(Binding::Name(marker)) => {
                    write!(out, " by_name {key}", key = marker.lookup_key(param.name))?;
                }
                None => {}
            }
            writeln!(out)?;
        }
    }

    writeln!(out)
}

fn write_docs(out: &mut impl Write, docs: &[&str]) -> std::io::Result<()> {
    for doc in docs {
        writeln!(out, "--- {doc}", doc = doc.trim_start())?;
    }
    Ok(())
}
