pub mod get;
pub mod helper;
pub mod init;
pub mod keys;
pub mod resolve;
pub mod scan;
pub mod tree;
