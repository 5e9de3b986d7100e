pub mod cli;
mod ext;
pub mod fs;
pub mod input;
mod macros;

pub use self::input::{FromInput, IStr, IStrError, Nl, Split, W, Ws};

#[doc(hidden)]
pub mod macro_support {
    pub use anyhow::Error;
}

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::ext::SliceExt;
    pub use crate::fs;
    pub use crate::input::{IStr, Nl, NonEmpty, Split, B, W, Ws};
    pub use anyhow::{anyhow, bail, Context, Result};
    pub type ArrayVec<T, const N: usize = 16> = arrayvec::ArrayVec<T, N>;
    pub type ArrayString<const N: usize = 16> = arrayvec::ArrayString<N>;
    pub use bstr::{BStr, ByteSlice};
}

/// Input processing.
pub fn input(
    path: &'static str,
    read_path: &str,
    storage: &'static mut Vec<u8>,
) -> anyhow::Result<IStr> {
    use anyhow::{anyhow, Context};
    use std::fs::File;
    use std::io::Read;

    return inner(read_path, storage).with_context(|| anyhow!("{path}"));

    fn inner(read_path: &str, storage: &'static mut Vec<u8>) -> anyhow::Result<IStr> {
        let mut file = File::open(read_path)?;
        let mut buf = Vec::with_capacity(4096);
        file.read_to_end(&mut buf)?;
        *storage = buf;
        Ok(IStr::new(storage, 0))
    }
}

/// Prepare an input processor.
///
/// This declares static storage for the processed input because it's much
/// easier to deal with than lifetimes, and memory for it will be freed once
/// the process exits *anyway*.
#[macro_export]
macro_rules! input {
    ($path:literal) => {{
        static mut STORAGE: Vec<u8> = Vec::new();
        let path = concat!("inputs/", $path);
        let read_path = concat!(env!("CARGO_MANIFEST_DIR"), "/inputs/", $path);
        ($crate::input(path, read_path, unsafe { &mut STORAGE })?, path)
    }};
}
