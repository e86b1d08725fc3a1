//! RPC Error Types
//!
//! Maps application errors to JSON-RPC error codes.

use jsonrpsee::types::ErrorObjectOwned;
use simplq_core::error::AppError;

/// RPC Error Codes
pub mod code {
    pub const INVALID_ARGUMENT: i32 = 4000;
    pub const NOT_FOUND: i32 = 4001;
    pub const INTERNAL_ERROR: i32 = 5000;
    pub const UNAVAILABLE: i32 = 5001;
    pub const UNIMPLEMENTED: i32 = 5004;
}

/// Convert AppError to JSON-RPC ErrorObject
pub fn to_rpc_error(err: AppError) -> ErrorObjectOwned {
    let code = match &err {
        AppError::InvalidArgument(_) | AppError::Domain(_) => code::INVALID_ARGUMENT,
        AppError::NotFound(_) => code::NOT_FOUND,
        AppError::Unavailable(_) => code::UNAVAILABLE,
        AppError::Unimplemented(_) => code::UNIMPLEMENTED,
        AppError::Config(_) | AppError::Internal(_) => code::INTERNAL_ERROR,
    };
    ErrorObjectOwned::owned(code, err.to_string(), None::<()>)
}
