
// Wrap std:: modules in namespace
#[allow(unused_imports)]
mod stdlib {

    pub use std::{
        alloc,
        borrow,
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
        string,
        sync,
        vec,
    };

    pub use std::format;
    pub use std::string::String;
    pub use std::vec::Vec;
}
