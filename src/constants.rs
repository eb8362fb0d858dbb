/// Host that serves the sign-in endpoint for every organization
pub const DEFAULT_LOGIN_URL: &str = "https://apinie.sensorpro.net";
/// Sign-in path, relative to the login host
pub const SIGNIN_PATH: &str = "auth/sys/signin";
/// Sign-off path, relative to the per-organization API endpoint
pub const LOGOFF_PATH: &str = "auth/sys/logoff";
/// Path of the contact query endpoint
pub const GET_CONTACTS_PATH: &str = "api/Contact/GetContacts";
/// Path of the contact creation endpoint
pub const ADD_CONTACT_PATH: &str = "api/Contact/Add";
/// Path of the contact update endpoint
pub const UPDATE_CONTACT_PATH: &str = "api/Contact/Update";
/// Path of the opt-out status endpoint
pub const CHANGE_OPT_OUT_STATUS_PATH: &str = "api/Contact/ChangeOptOutStatus";
/// Path of the triggered email campaign endpoint
pub const TRIGGER_EMAIL_PATH: &str = "api/Campaign/TriggerEmail";
/// Number of sign-in attempts made before a login failure is reported
pub const LOGIN_ATTEMPTS: u32 = 3;
/// Default timeout in seconds for REST requests
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Header carrying the API key on sign-in
pub const API_KEY_HEADER: &str = "x-apikey";
/// User agent string used in HTTP requests to identify this client to the SensorPro API
pub const USER_AGENT: &str = concat!("sensorpro-client/", env!("CARGO_PKG_VERSION"));
