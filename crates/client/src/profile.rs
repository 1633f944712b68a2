//! Identity-aware profile lookup with memoization.

use std::future::Future;

use serde::{Deserialize, Serialize};

use crate::cache::TtlCache;
use crate::error::ClientError;
use crate::telemetry::Properties;

const PROFILE_CACHE_KEY: &str = "current_user";
const NOT_SET: &str = "Not Set";

/// Profile of the signed-in user, as the identity provider reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserProfile {
    pub department: Option<String>,
    pub display_name: Option<String>,
    pub job_title: Option<String>,
    pub mail: Option<String>,
    pub user_principal_name: Option<String>,
    pub user_type: Option<String>,
}

impl UserProfile {
    /// Telemetry enrichment map: one `user_*` property per field, with
    /// `Not Set` standing in for anything the provider left blank. Mail
    /// and principal name are lowercased.
    #[must_use]
    pub fn telemetry_properties(&self) -> Properties {
        let mut properties = Properties::new();
        properties.insert(
            "user_Department".to_owned(),
            text_or_not_set(self.department.as_deref()),
        );
        properties.insert(
            "user_DisplayName".to_owned(),
            text_or_not_set(self.display_name.as_deref()),
        );
        properties.insert(
            "user_JobTitle".to_owned(),
            text_or_not_set(self.job_title.as_deref()),
        );
        properties.insert(
            "user_Mail".to_owned(),
            lowered_or_not_set(self.mail.as_deref()),
        );
        properties.insert(
            "user_UserPrincipalName".to_owned(),
            lowered_or_not_set(self.user_principal_name.as_deref()),
        );
        properties.insert(
            "user_UserType".to_owned(),
            text_or_not_set(self.user_type.as_deref()),
        );
        properties
    }
}

fn text_or_not_set(value: Option<&str>) -> String {
    value.map_or_else(|| NOT_SET.to_owned(), ToOwned::to_owned)
}

fn lowered_or_not_set(value: Option<&str>) -> String {
    value.map_or_else(|| NOT_SET.to_owned(), str::to_lowercase)
}

/// Where profiles come from.
pub trait ProfileSource {
    /// Fetch the current user's profile from the provider.
    fn fetch(&self) -> impl Future<Output = Result<UserProfile, ClientError>> + Send;
}

/// Source reading `PROCGATE_PROFILE_*` environment variables.
///
/// Meant for demos and local runs where no identity provider is wired
/// up; unset or empty variables leave the field blank.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProfileSource;

impl ProfileSource for EnvProfileSource {
    async fn fetch(&self) -> Result<UserProfile, ClientError> {
        Ok(UserProfile {
            department: read_var("PROCGATE_PROFILE_DEPARTMENT"),
            display_name: read_var("PROCGATE_PROFILE_DISPLAY_NAME"),
            job_title: read_var("PROCGATE_PROFILE_JOB_TITLE"),
            mail: read_var("PROCGATE_PROFILE_MAIL"),
            user_principal_name: read_var("PROCGATE_PROFILE_UPN"),
            user_type: read_var("PROCGATE_PROFILE_USER_TYPE"),
        })
    }
}

fn read_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Profile lookups memoized through a [`TtlCache`].
pub struct ProfileService<P> {
    source: P,
    cache: TtlCache<UserProfile>,
}

impl<P> ProfileService<P>
where
    P: ProfileSource + Send + Sync,
{
    #[must_use]
    pub fn new(source: P) -> Self {
        Self {
            source,
            cache: TtlCache::new(),
        }
    }

    /// The signed-in user's profile, fetched at most once per TTL window.
    ///
    /// # Errors
    ///
    /// Propagates the source's failure when the cache is cold and the
    /// fetch fails; a warm cache never errors.
    pub async fn current_user(&self) -> Result<UserProfile, ClientError> {
        if let Some(profile) = self.cache.get(PROFILE_CACHE_KEY) {
            return Ok(profile);
        }
        let profile = self.source.fetch().await?;
        Ok(self.cache.set(PROFILE_CACHE_KEY, profile))
    }
}
