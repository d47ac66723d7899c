//! Markers describing how generated wrapper methods forward to a delegate field
//!
//! Nothing here generates forwarding code. The macros check where the markers are placed and turn them
//! into a static table ([`FillerType`], [`CallerTable`]) that a separate generator reads, either through
//! the [`Filler`] and [`CallerParams`] traits or through the text produced by [`generate`].
//!
//! # Supported attributes:
//! ## `#[derive(Filler)]`
//! #### on struct fields
//! `#[filler]`, `#[filler("Read", "Write")]` or `#[filler(wrappers = ["Read", "Write"])]`
//!
//! | form | description |
//! | --- | --- |
//! | `#[filler]` | forward every wrapper method to this field |
//! | `#[filler("A", ...)]` | forward only the named wrapper methods |
//!
//! At least one field has to be marked. Tuple fields are named by their index.
//!
//! ## `#[caller_params]`
//! Goes on an inherent `impl` block, the wrapper methods.
//! #### on method parameters
//!
//! | form | description |
//! | --- | --- |
//! | `#[by_index]` | the caller's first argument |
//! | `#[by_index(2)]` | the caller's argument at offset 2 |
//! | `#[by_index(2, from_end)]` | offset 2, counted from the end of the caller's arguments |
//! | `#[by_name]` | the caller's argument with the same name as this parameter |
//! | `#[by_name("x")]` | the caller's argument named `x` |
//!
//! The markers are removed from the emitted impl block.
//!
//! # Notes
//! - `#[filler]` is only accepted on struct fields, `#[by_index]` and `#[by_name]` only on parameters.
//! - A parameter is bound by index or by name, never both, and each marker is used at most once.
//! - Two parameters of one method can't claim the same offset (in the same direction) or the same name.
//! - Offsets aren't checked against any call site, negative offsets are kept as written.
//! - Each `#[caller_params]` block implements [`CallerParams`] for its type, so a type can only have one
//!   such block. Put every wrapper method in it, a second block fails with a conflicting impl error.
//!
//! # Examples
//!
//! ```rust,ignore
//! use interface_filler::{CallerParams, Filler};
//!
//! /// Adds deadlines to a stream
//! #[derive(Filler)]
//! struct Adapter {
//!     /// Reads and writes are forwarded here
//!     #[filler("read", "write")]
//!     inner: Box<dyn Stream>,
//! }
//!
//! #[interface_filler::caller_params]
//! impl Adapter {
//!     fn read(&self, #[by_index(2, from_end)] len: usize, #[by_name] timeout: Duration) {}
//!
//!     fn write(&self, #[by_index] buf: &[u8]) {}
//! }
//!
//! let mut out = vec![];
//! interface_filler::generate::<Adapter>(&mut out)?;
//! ```
//!
pub use interface_filler_derive::{caller_params, Filler};
pub use interface_filler_impl::{
    generate, generate_callers, generate_descriptor, generate_filler, Binding, CallerParams,
    CallerTable, Descriptor, Filler, FillerFieldDesc, FillerFieldMarker, FillerType, MethodDesc,
    ParamDesc, ParameterNameMarker, ParameterPositionMarker,
};
