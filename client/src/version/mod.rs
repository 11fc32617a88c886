pub const VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));

pub const COMMIT: &str = match option_env!("DEVICECONNECT_CLIENT_GIT_COMMIT_HASH") {
    Some(commit) => commit,
    None => "unknown",
};

#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: String,
    pub commit: String,
    pub api_version: String,
}

pub fn build_info() -> BuildInfo {
    BuildInfo {
        version: VERSION.to_string(),
        commit: COMMIT.to_string(),
        api_version: internal_api::API_VERSION.to_string(),
    }
}
