
// Wrap core:: and alloc:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use core::{
        cmp,
        convert,
        default,
        fmt,
        hash,
        iter,
        mem,
        num,
        ops,
        ptr,
        slice,
        str,
        sync,
    };

    pub use alloc::{alloc, borrow, string, vec};

    pub use alloc::format;
    pub use alloc::string::String;
    pub use alloc::vec::Vec;
}
