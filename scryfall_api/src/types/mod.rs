mod error_object;
pub use self::error_object::ErrorObject;
