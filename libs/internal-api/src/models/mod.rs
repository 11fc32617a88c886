pub mod device;
pub use self::device::Device;
pub mod error;
pub use self::error::Error;
pub mod new_tenant;
pub use self::new_tenant::NewTenant;
