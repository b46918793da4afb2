pub mod args;
pub mod constants;
pub mod dispatch;
pub mod fd;
pub mod hint;
pub mod io;
pub mod mmap;
pub mod preimage;
pub mod table;
