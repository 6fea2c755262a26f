// Env values used by Qiniu services.
pub const QINIU_ACCESS_KEY: &str = "QINIU_ACCESS_KEY";
pub const QINIU_SECRET_KEY: &str = "QINIU_SECRET_KEY";

// Content types that participate in body canonicalization.
pub const CONTENT_TYPE_FORM: &str = "application/x-www-form-urlencoded";
pub const CONTENT_TYPE_JSON: &str = "application/json";

// Authorization header schemes.
pub const QBOX_SCHEME: &str = "QBox";
pub const QINIU_SCHEME: &str = "Qiniu";
