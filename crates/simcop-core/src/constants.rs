pub const DEFAULT_TARGET_USERNAME: &str = "santiago.salazar";
pub const DEFAULT_PERMISSION: &str = "PERSONNEL";

pub const USERS_TABLE: &str = "users";
pub const SPECIALTY_CATALOG_TABLE: &str = "specialty_catalog";

pub const SPECIALTY_ID_MAX_LEN: usize = 255;
pub const SPECIALTY_CODE_MAX_LEN: usize = 50;
pub const SPECIALTY_NAME_MAX_LEN: usize = 255;
pub const SPECIALTY_CATEGORY_MAX_LEN: usize = 50;
pub const SPECIALTY_DESCRIPTION_MAX_LEN: usize = 500;
