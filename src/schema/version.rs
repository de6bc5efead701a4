/// The `PageSpec` document version this engine accepts.
///
/// Version checking is literal: any other value fails validation, it is
/// never coerced or migrated.
pub const PAGESPEC_VERSION: u64 = 1;
