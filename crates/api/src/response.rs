//! Response envelope shared by collection endpoints.

use serde::Serialize;

/// `{ "data": T }` wrapper.
///
/// Collections are always returned under a `data` key so clients can
/// distinguish an empty list from an error body; single resources are
/// serialized bare.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
